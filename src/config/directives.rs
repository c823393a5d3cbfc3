// ABOUTME: Directive vocabulary configuration for parsing coach instruction messages
// ABOUTME: Bullet markers, category keywords, separators, suffixes, cleanup patterns, and defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrolog Nutrition Intelligence

//! Directive Vocabulary
//!
//! Every locale-specific token the directive parser relies on. Tests can
//! construct a synthetic vocabulary; the defaults describe the Japanese
//! message format the coaching side produces:
//!
//! ```text
//! - 【食事1】鶏むね肉150g、ブロッコリー100g
//! - 【トレーニング】スクワット10回×3セット
//! - 【睡眠】7時間
//! ```

use macrolog_core::constants::directives;
use serde::{Deserialize, Serialize};

use macrolog_core::models::DirectiveItemType;

/// Keywords that classify a bracketed tag as one item type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryKeywords {
    /// Item type selected by these keywords
    pub item_type: DirectiveItemType,
    /// Substrings looked for inside the tag
    pub keywords: Vec<String>,
}

/// Converts a gram amount into discrete units for foods logged per piece
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountConversion {
    /// Food-name substrings the rule applies to
    pub keywords: Vec<String>,
    /// Grams in one unit
    pub grams_per_unit: f64,
    /// Unit to convert into
    pub unit: String,
}

/// Rewrites an amount in one unit into another (kg to g, L to ml)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitConversion {
    /// Unit as written, matched case-insensitively
    pub from: String,
    /// Unit the amount is recorded in
    pub to: String,
    /// Multiplier applied to the amount
    pub factor: f64,
}

/// Directive parser vocabulary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectiveVocabulary {
    /// Line prefixes that mark an instruction line
    pub bullet_markers: Vec<String>,
    /// Opening delimiter of a category tag
    pub tag_open: String,
    /// Closing delimiter of a category tag
    pub tag_close: String,
    /// Tag keywords per item type, checked in order
    pub categories: Vec<CategoryKeywords>,
    /// Separators between meal fragments
    pub meal_separators: Vec<String>,
    /// Separators between workout fragments
    pub workout_separators: Vec<String>,
    /// Suffix after a repetition count
    pub reps_suffix: String,
    /// Suffix after a set count
    pub sets_suffix: String,
    /// Symbols joining reps and sets
    pub reps_sets_joiners: Vec<String>,
    /// Suffix after a duration in minutes
    pub minutes_suffix: String,
    /// Suffix after a sleep duration in hours
    pub hours_suffix: String,
    /// Regex patterns removed from meal text before splitting
    pub meal_cleanup_patterns: Vec<String>,
    /// Words removed from food names before profile lookup
    pub filler_words: Vec<String>,
    /// Markers flagging a meal as eaten after a workout
    pub post_workout_markers: Vec<String>,
    /// Units recognized after a meal amount, matched case-insensitively
    pub amount_units: Vec<String>,
    /// Unit normalizations applied to parsed meal amounts
    pub unit_conversions: Vec<UnitConversion>,
    /// Gram to count conversions
    pub count_conversions: Vec<CountConversion>,
    /// Sleep hours recorded when the line names none
    pub default_sleep_hours: f64,
    /// Record time in minutes after midnight when the line names none
    pub default_record_minutes: u32,
}

fn owned(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|t| (*t).to_owned()).collect()
}

impl Default for DirectiveVocabulary {
    fn default() -> Self {
        Self {
            bullet_markers: owned(&["-", "*", "•", "・"]),
            tag_open: "【".to_owned(),
            tag_close: "】".to_owned(),
            categories: vec![
                CategoryKeywords {
                    item_type: DirectiveItemType::Meal,
                    keywords: owned(&["食事", "朝食", "昼食", "夕食", "間食", "補食", "meal"]),
                },
                CategoryKeywords {
                    item_type: DirectiveItemType::Workout,
                    keywords: owned(&["トレーニング", "筋トレ", "運動", "有酸素", "workout"]),
                },
                CategoryKeywords {
                    item_type: DirectiveItemType::Sleep,
                    keywords: owned(&["睡眠", "sleep"]),
                },
                CategoryKeywords {
                    item_type: DirectiveItemType::Condition,
                    keywords: owned(&["体調", "コンディション", "体重", "condition"]),
                },
            ],
            meal_separators: owned(&[",", "、", "，", "・"]),
            workout_separators: owned(&[",", "、", "，"]),
            reps_suffix: "回".to_owned(),
            sets_suffix: "セット".to_owned(),
            reps_sets_joiners: owned(&["×", "x", "X", "*"]),
            minutes_suffix: "分".to_owned(),
            hours_suffix: "時間".to_owned(),
            meal_cleanup_patterns: owned(&[
                r"\[[^\]]*\]",
                r"P\s*[0-9]+(?:\.[0-9]+)?\s*g[\s・/]*F\s*[0-9]+(?:\.[0-9]+)?\s*g[\s・/]*C\s*[0-9]+(?:\.[0-9]+)?\s*g",
                r"[(（][A-CＡ-Ｃ][)）]",
            ]),
            filler_words: owned(&["を", "追加", "食べる", "摂る"]),
            post_workout_markers: owned(&["トレ後", "post-workout"]),
            amount_units: owned(&[
                "kg", "g", "ml", "l", "cc", "個", "本", "杯", "枚", "錠", "包", "粒", "切れ",
                "パック", "袋", "缶", "膳", "丁", "つ", "piece", "pieces", "slice", "slices",
                "cup", "cups", "tablet", "tablets", "scoop", "scoops",
            ]),
            unit_conversions: vec![
                UnitConversion {
                    from: "kg".to_owned(),
                    to: "g".to_owned(),
                    factor: 1000.0,
                },
                UnitConversion {
                    from: "l".to_owned(),
                    to: "ml".to_owned(),
                    factor: 1000.0,
                },
            ],
            count_conversions: vec![CountConversion {
                keywords: owned(&["卵", "たまご", "玉子", "egg"]),
                grams_per_unit: 64.0,
                unit: "個".to_owned(),
            }],
            default_sleep_hours: directives::DEFAULT_SLEEP_HOURS,
            default_record_minutes: directives::DEFAULT_RECORD_MINUTES,
        }
    }
}
