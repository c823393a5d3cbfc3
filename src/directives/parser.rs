// ABOUTME: Directive parser turning free-text coach messages into typed checklist items
// ABOUTME: Meal, workout, sleep sub-parsers and content-stable item identifiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrolog Nutrition Intelligence

//! Directive Parser
//!
//! Only bullet lines and lines opening with a category tag are selected;
//! everything else in the message is prose. Parsing is pure: identical text
//! yields an identical item list, positions and identifiers included.
//!
//! Item identifiers hash the whitespace-normalized line plus its occurrence
//! ordinal among identical lines, so completion state survives edits to
//! unrelated lines.

use chrono::NaiveTime;
use macrolog_core::constants::{directives, scaling};
use macrolog_core::models::{
    DirectiveItem, DirectiveItemId, DirectiveItemType, DirectiveRecord, ExerciseEntry,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use tracing::debug;

use super::matching::clean_food_name;
use crate::config::{ConfigError, DirectiveVocabulary, EngineConfig};

/// One food parsed from a meal line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedFood {
    /// Food name with filler words removed
    pub name: String,
    /// Quantity
    pub amount: f64,
    /// Unit ("g" when the fragment names none)
    pub unit: String,
}

/// Parser over an injected vocabulary
#[derive(Debug, Clone)]
pub struct DirectiveParser {
    vocab: DirectiveVocabulary,
    tag: Regex,
    meal_separator: Regex,
    workout_separator: Regex,
    meal_fragment: Regex,
    workout_sets: Regex,
    workout_duration: Regex,
    sleep_hours: Regex,
    time_of_day: Regex,
    cleanup: Vec<Regex>,
}

impl DirectiveParser {
    /// Compile a parser for a vocabulary
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidPattern` when a cleanup pattern or a
    /// vocabulary-derived pattern does not compile, and
    /// `ConfigError::MissingField` when a required token is empty
    pub fn new(vocab: DirectiveVocabulary) -> Result<Self, ConfigError> {
        if vocab.tag_open.is_empty() || vocab.tag_close.is_empty() {
            return Err(ConfigError::MissingField("directives.tag_open/tag_close"));
        }

        let open = regex::escape(&vocab.tag_open);
        let close = regex::escape(&vocab.tag_close);
        let tag = Regex::new(&format!(r"^\s*{open}(?P<tag>.*?){close}\s*"))?;

        let meal_separator = alternation(&vocab.meal_separators, "directives.meal_separators")?;
        let workout_separator =
            alternation(&vocab.workout_separators, "directives.workout_separators")?;

        let mut amount_units = vocab.amount_units.clone();
        amount_units.sort_by_key(|u| std::cmp::Reverse(u.chars().count()));
        let units = joined_escaped(&amount_units);
        if units.is_empty() {
            return Err(ConfigError::MissingField("directives.amount_units"));
        }
        let meal_fragment = Regex::new(&format!(
            r"^(?P<name>.*?)\s*(?P<amount>[0-9]+(?:\.[0-9]+)?)\s*(?P<unit>(?i:{units}))?\s*(?P<qualifier>[(（\[［].*)?$"
        ))?;

        let reps = regex::escape(&vocab.reps_suffix);
        let sets = regex::escape(&vocab.sets_suffix);
        let joiners = joined_escaped(&vocab.reps_sets_joiners);
        let workout_sets = Regex::new(&format!(
            r"^(?P<name>.*?)\s*(?P<reps>[0-9]+)\s*{reps}\s*(?:{joiners})\s*(?P<sets>[0-9]+)\s*{sets}"
        ))?;

        let minutes = regex::escape(&vocab.minutes_suffix);
        let workout_duration = Regex::new(&format!(
            r"^(?P<pre>.*?)\s*(?P<minutes>[0-9]+)\s*{minutes}\s*(?P<post>.*)$"
        ))?;

        let hours = regex::escape(&vocab.hours_suffix);
        let sleep_hours = Regex::new(&format!(r"(?P<hours>[0-9]+(?:\.[0-9]+)?)\s*{hours}"))?;

        let time_of_day = Regex::new(r"(?P<hour>[0-9]{1,2})[:：](?P<minute>[0-9]{2})")?;

        let cleanup = vocab
            .meal_cleanup_patterns
            .iter()
            .map(|p| Regex::new(p))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            vocab,
            tag,
            meal_separator,
            workout_separator,
            meal_fragment,
            workout_sets,
            workout_duration,
            sleep_hours,
            time_of_day,
            cleanup,
        })
    }

    /// Compile a parser from engine configuration
    ///
    /// # Errors
    ///
    /// See [`DirectiveParser::new`]
    pub fn from_config(config: &EngineConfig) -> Result<Self, ConfigError> {
        Self::new(config.directives.clone())
    }

    /// Vocabulary in use
    #[must_use]
    pub const fn vocabulary(&self) -> &DirectiveVocabulary {
        &self.vocab
    }

    /// Parse a message into items with no completion state
    #[must_use]
    pub fn parse(&self, message: &str) -> Vec<DirectiveItem> {
        let mut seen: HashMap<String, usize> = HashMap::new();
        let mut items = Vec::new();

        for line in message.split('\n') {
            let Some(text) = self.select_line(line) else {
                continue;
            };
            let item_type = self.classify(&text);
            if self.body(&text).is_empty()
                && matches!(item_type, DirectiveItemType::Meal | DirectiveItemType::Workout)
            {
                debug!(line = %text, "Dropping directive line with no content after tag");
                continue;
            }

            let normalized = normalize_whitespace(&text);
            let ordinal = seen.entry(normalized.clone()).or_insert(0);
            let id = item_id(&normalized, *ordinal);
            *ordinal += 1;

            items.push(DirectiveItem {
                index: items.len(),
                id,
                text,
                item_type,
                completed: false,
                edited_text: None,
            });
        }

        items
    }

    /// Parse a stored directive and apply its completion and edit state
    #[must_use]
    pub fn parse_record(&self, record: &DirectiveRecord) -> Vec<DirectiveItem> {
        self.parse(&record.message)
            .into_iter()
            .map(|mut item| {
                item.completed = record.is_completed(&item.id, item.index);
                item.edited_text = record.edit_for(&item.id).map(str::to_owned);
                item
            })
            .collect()
    }

    /// Item type from the bracketed category keyword; `Other` when none matches
    #[must_use]
    pub fn classify(&self, text: &str) -> DirectiveItemType {
        let Some(tag) = self
            .tag
            .captures(text)
            .and_then(|c| c.name("tag"))
            .map(|m| m.as_str().to_lowercase())
        else {
            return DirectiveItemType::Other;
        };
        self.vocab
            .categories
            .iter()
            .find(|category| {
                category
                    .keywords
                    .iter()
                    .any(|k| !k.is_empty() && tag.contains(&k.to_lowercase()))
            })
            .map_or(DirectiveItemType::Other, |category| category.item_type)
    }

    /// Content of the leading category tag, if any
    #[must_use]
    pub fn tag_label(&self, text: &str) -> Option<String> {
        self.tag
            .captures(text)
            .and_then(|c| c.name("tag"))
            .map(|m| m.as_str().trim().to_owned())
            .filter(|tag| !tag.is_empty())
    }

    /// True when the line carries a post-workout marker
    #[must_use]
    pub fn is_post_workout(&self, text: &str) -> bool {
        let lowered = text.to_lowercase();
        self.vocab
            .post_workout_markers
            .iter()
            .any(|m| !m.is_empty() && lowered.contains(&m.to_lowercase()))
    }

    /// Text after the leading category tag
    #[must_use]
    pub fn body(&self, text: &str) -> String {
        self.tag.replace(text, "").trim().to_owned()
    }

    /// Foods named by a meal line
    #[must_use]
    pub fn parse_meal(&self, text: &str) -> Vec<ParsedFood> {
        let mut body = fold_fullwidth(&self.body(text));
        for pattern in &self.cleanup {
            body = pattern.replace_all(&body, "").into_owned();
        }
        body = self.time_of_day.replace_all(&body, "").into_owned();

        self.meal_separator
            .split(&body)
            .map(str::trim)
            .filter(|fragment| !fragment.is_empty())
            .filter_map(|fragment| self.parse_food_fragment(fragment))
            .collect()
    }

    fn parse_food_fragment(&self, fragment: &str) -> Option<ParsedFood> {
        let (raw_name, amount, unit) = match self.meal_fragment.captures(fragment) {
            Some(caps) => {
                let name = caps.name("name").map_or("", |m| m.as_str());
                let amount = caps
                    .name("amount")
                    .and_then(|m| m.as_str().parse::<f64>().ok())
                    .unwrap_or(0.0);
                let unit = caps.name("unit").map_or("", |m| m.as_str().trim());
                (name, amount, unit)
            }
            None => (fragment, scaling::MASS_REFERENCE_AMOUNT, ""),
        };

        let name = clean_food_name(raw_name, &self.vocab.filler_words);
        if name.is_empty() {
            debug!(fragment, "Dropping meal fragment with no food name");
            return None;
        }
        let unit = if unit.is_empty() {
            scaling::DEFAULT_MASS_UNIT
        } else {
            unit
        };

        Some(self.convert_to_count(self.normalize_unit(ParsedFood {
            name,
            amount,
            unit: unit.to_owned(),
        })))
    }

    /// Rewrite larger units into their base unit (1 kg becomes 1000 g)
    fn normalize_unit(&self, food: ParsedFood) -> ParsedFood {
        let Some(conversion) = self
            .vocab
            .unit_conversions
            .iter()
            .find(|c| c.from.to_lowercase() == food.unit.to_lowercase())
        else {
            return food;
        };
        ParsedFood {
            amount: food.amount * conversion.factor,
            unit: conversion.to.clone(),
            ..food
        }
    }

    /// Apply gram-to-count rules (eggs logged in grams become pieces)
    fn convert_to_count(&self, food: ParsedFood) -> ParsedFood {
        if food.unit != scaling::DEFAULT_MASS_UNIT {
            return food;
        }
        let Some(rule) = self.vocab.count_conversions.iter().find(|rule| {
            rule.keywords
                .iter()
                .any(|k| !k.is_empty() && food.name.contains(k.as_str()))
        }) else {
            return food;
        };
        let units = (food.amount / rule.grams_per_unit).round();
        if units >= 1.0 {
            debug!(food = %food.name, grams = food.amount, units, "Converted grams to count units");
            ParsedFood {
                amount: units,
                unit: rule.unit.clone(),
                ..food
            }
        } else {
            food
        }
    }

    /// Exercises named by a workout line
    #[must_use]
    pub fn parse_workout(&self, text: &str) -> Vec<ExerciseEntry> {
        let body = fold_fullwidth(&self.body(text));
        self.workout_separator
            .split(&body)
            .map(str::trim)
            .filter(|fragment| !fragment.is_empty())
            .filter_map(|fragment| self.parse_exercise_fragment(fragment))
            .collect()
    }

    fn parse_exercise_fragment(&self, fragment: &str) -> Option<ExerciseEntry> {
        if let Some(caps) = self.workout_sets.captures(fragment) {
            let name = caps.name("name").map_or("", |m| m.as_str().trim());
            if !name.is_empty() {
                return Some(ExerciseEntry {
                    name: name.to_owned(),
                    reps: caps.name("reps").and_then(|m| m.as_str().parse().ok()),
                    sets: caps.name("sets").and_then(|m| m.as_str().parse().ok()),
                    duration_minutes: None,
                });
            }
        }

        if let Some(caps) = self.workout_duration.captures(fragment) {
            let post = caps.name("post").map_or("", |m| m.as_str().trim());
            let pre = caps.name("pre").map_or("", |m| m.as_str().trim());
            let name = if post.is_empty() { pre } else { post };
            if !name.is_empty() {
                return Some(ExerciseEntry {
                    name: name.to_owned(),
                    reps: None,
                    sets: None,
                    duration_minutes: caps.name("minutes").and_then(|m| m.as_str().parse().ok()),
                });
            }
        }

        let name = fragment.trim();
        (!name.is_empty()).then(|| ExerciseEntry {
            name: name.to_owned(),
            reps: None,
            sets: None,
            duration_minutes: None,
        })
    }

    /// First `<n>時間` value in the text, else the configured default
    #[must_use]
    pub fn parse_sleep_hours(&self, text: &str) -> f64 {
        self.sleep_hours
            .captures(&fold_fullwidth(text))
            .and_then(|c| c.name("hours"))
            .and_then(|m| m.as_str().parse::<f64>().ok())
            .filter(|h| h.is_finite())
            .unwrap_or(self.vocab.default_sleep_hours)
    }

    /// First valid `HH:MM` in the text
    #[must_use]
    pub fn extract_time(&self, text: &str) -> Option<NaiveTime> {
        self.time_of_day.captures_iter(&fold_fullwidth(text)).find_map(|caps| {
            let hour = caps.name("hour")?.as_str().parse().ok()?;
            let minute = caps.name("minute")?.as_str().parse().ok()?;
            NaiveTime::from_hms_opt(hour, minute, 0)
        })
    }

    /// Time a record made from this text is stamped with
    #[must_use]
    pub fn record_time(&self, text: &str) -> NaiveTime {
        self.extract_time(text).unwrap_or_else(|| {
            let minutes = self.vocab.default_record_minutes;
            NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0).unwrap_or_default()
        })
    }

    /// Selected instruction text of a line, bullet stripped; `None` for prose
    fn select_line(&self, line: &str) -> Option<String> {
        let trimmed = line.trim();
        let text = if let Some(rest) = self
            .vocab
            .bullet_markers
            .iter()
            .filter(|m| !m.is_empty())
            .find_map(|marker| trimmed.strip_prefix(marker.as_str()))
        {
            rest.trim()
        } else if trimmed.starts_with(self.vocab.tag_open.as_str()) {
            trimmed
        } else {
            return None;
        };

        if text.is_empty() {
            debug!(line, "Dropping empty directive bullet");
            return None;
        }
        Some(text.to_owned())
    }
}

/// Content-stable identifier: truncated SHA-256 of normalized text and ordinal
#[must_use]
pub fn item_id(normalized_text: &str, ordinal: usize) -> DirectiveItemId {
    let mut hasher = Sha256::new();
    hasher.update(normalized_text.as_bytes());
    hasher.update([0x1f]);
    hasher.update(ordinal.to_string().as_bytes());
    let digest = hex::encode(hasher.finalize());
    DirectiveItemId::new(&digest[..directives::ITEM_ID_HEX_LEN])
}

/// Map full-width digits, Latin letters, and the full-width period to ASCII
#[must_use]
pub fn fold_fullwidth(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '０'..='９' | 'Ａ'..='Ｚ' | 'ａ'..='ｚ' | '．' => {
                char::from_u32(u32::from(c) - 0xFEE0).unwrap_or(c)
            }
            _ => c,
        })
        .collect()
}

/// Collapse runs of whitespace (including full-width spaces) to one space
#[must_use]
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn alternation(tokens: &[String], field: &'static str) -> Result<Regex, ConfigError> {
    let joined = joined_escaped(tokens);
    if joined.is_empty() {
        return Err(ConfigError::MissingField(field));
    }
    Ok(Regex::new(&joined)?)
}

fn joined_escaped(tokens: &[String]) -> String {
    tokens
        .iter()
        .filter(|t| !t.is_empty())
        .map(|t| regex::escape(t))
        .collect::<Vec<_>>()
        .join("|")
}
