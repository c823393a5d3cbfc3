// ABOUTME: Quest recorder replaying completed directive items into meal, workout, and condition records
// ABOUTME: Resolves foods against the profile store, scales them, and persists directive-tagged records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrolog Nutrition Intelligence

//! Quest Recorder
//!
//! Completion state lives in the day's [`DirectiveRecord`], keyed by
//! content-stable item id. Every record produced from an item carries a
//! [`RecordSource::Directive`] tag so `undo` can remove exactly what it
//! created.
//!
//! Callers must serialize completion, edit, and undo calls per user per day:
//! each call is a load-modify-save cycle on the daily record.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::matching::best_match;
use super::parser::{DirectiveParser, ParsedFood};
use crate::constants::scaling;
use crate::errors::{AppError, AppResult};
use crate::intelligence::{ItemScaler, UnitKind};
use crate::models::{
    ConditionRecord, DailyRecord, DirectiveItem, DirectiveItemId, DirectiveItemType,
    DirectiveRecord, LoggedItem, Meal, MealFlags, NutrientProfile, NutrientValues, RecordSource,
    WorkoutRecord,
};
use crate::providers::{DailyRecordStore, ProfileStore};

/// What completing one item produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QuestOutcome {
    /// A meal was recorded
    Meal {
        /// Item completed
        item_id: DirectiveItemId,
        /// Meal created
        meal_id: Uuid,
        /// Foods matched to a profile
        resolved: Vec<String>,
        /// Foods recorded name-only
        unresolved: Vec<String>,
    },
    /// A workout was recorded
    Workout {
        /// Item completed
        item_id: DirectiveItemId,
        /// Workout created
        workout_id: Uuid,
        /// Number of exercises recorded
        exercises: usize,
    },
    /// A condition entry was recorded
    Condition {
        /// Item completed
        item_id: DirectiveItemId,
        /// Entry created
        condition_id: Uuid,
        /// Sleep hours recorded, for sleep items
        sleep_hours: Option<f64>,
    },
    /// The item was marked complete without producing a record
    Acknowledged {
        /// Item completed
        item_id: DirectiveItemId,
    },
    /// The item was already complete; nothing changed
    AlreadyCompleted {
        /// Item requested
        item_id: DirectiveItemId,
    },
}

/// Replays directive items through the profile store and item scaler
#[derive(Clone)]
pub struct QuestRecorder {
    parser: Arc<DirectiveParser>,
    scaler: ItemScaler,
    profiles: Arc<dyn ProfileStore>,
    records: Arc<dyn DailyRecordStore>,
}

impl QuestRecorder {
    /// Create a recorder over its collaborators
    #[must_use]
    pub fn new(
        parser: Arc<DirectiveParser>,
        scaler: ItemScaler,
        profiles: Arc<dyn ProfileStore>,
        records: Arc<dyn DailyRecordStore>,
    ) -> Self {
        Self {
            parser,
            scaler,
            profiles,
            records,
        }
    }

    /// Store the day's directive message
    ///
    /// Completion and edits for items whose content is unchanged carry over
    /// to the new message.
    ///
    /// # Errors
    ///
    /// Returns an error if the record store fails
    pub async fn set_directive(
        &self,
        user_id: Uuid,
        date: NaiveDate,
        message: &str,
    ) -> AppResult<Vec<DirectiveItem>> {
        let mut record = self
            .records
            .load_daily_record(user_id, date)
            .await?
            .unwrap_or_else(|| DailyRecord::new(date));

        let mut directive = DirectiveRecord::new(message);
        if let Some(previous) = record.directive.take() {
            if previous.message == message {
                directive = previous;
            } else {
                for item in self.parser.parse(message) {
                    if previous.completed_items.contains(&item.id) {
                        directive.mark_completed(item.id.clone());
                    }
                    if let Some(edit) = previous.edit_for(&item.id) {
                        directive.edits.insert(item.id.clone(), edit.to_owned());
                    }
                }
            }
        }

        let items = self.parser.parse_record(&directive);
        record.directive = Some(directive);
        self.records.save_daily_record(user_id, date, &record).await?;
        info!(%user_id, %date, items = items.len(), "Stored directive");
        Ok(items)
    }

    /// Parsed items with completion and edit state
    ///
    /// # Errors
    ///
    /// Returns not-found when the day has no directive, or a store error
    pub async fn items(&self, user_id: Uuid, date: NaiveDate) -> AppResult<Vec<DirectiveItem>> {
        let record = self.load_with_directive(user_id, date).await?;
        Ok(record
            .directive
            .as_ref()
            .map(|d| self.parser.parse_record(d))
            .unwrap_or_default())
    }

    /// Save an edit that replaces the item text when it is recorded
    ///
    /// # Errors
    ///
    /// Returns not-found when the day or item does not exist, or a store error
    pub async fn edit(
        &self,
        user_id: Uuid,
        date: NaiveDate,
        item_id: &DirectiveItemId,
        text: &str,
    ) -> AppResult<DirectiveItem> {
        let mut record = self.load_with_directive(user_id, date).await?;
        let mut item = self.find_item(&record, item_id)?;
        if let Some(directive) = record.directive.as_mut() {
            directive.edits.insert(item_id.clone(), text.to_owned());
        }
        self.records.save_daily_record(user_id, date, &record).await?;
        item.edited_text = Some(text.to_owned());
        debug!(%user_id, %date, %item_id, "Edited directive item");
        Ok(item)
    }

    /// Complete one item, recording what it describes
    ///
    /// # Errors
    ///
    /// Returns not-found when the day or item does not exist, or a store error
    pub async fn complete(
        &self,
        user_id: Uuid,
        date: NaiveDate,
        item_id: &DirectiveItemId,
        edited_text: Option<&str>,
    ) -> AppResult<QuestOutcome> {
        let mut record = self.load_with_directive(user_id, date).await?;
        let mut item = self.find_item(&record, item_id)?;
        if let Some(text) = edited_text {
            if let Some(directive) = record.directive.as_mut() {
                directive.edits.insert(item_id.clone(), text.to_owned());
            }
            item.edited_text = Some(text.to_owned());
        }

        let outcome = self.apply_completion(&mut record, &item).await?;
        self.records.save_daily_record(user_id, date, &record).await?;
        info!(%user_id, %date, %item_id, item_type = %item.item_type, "Completed directive item");
        Ok(outcome)
    }

    /// Complete every open actionable item in message order
    ///
    /// # Errors
    ///
    /// Returns not-found when the day has no directive, or a store error
    pub async fn complete_all(&self, user_id: Uuid, date: NaiveDate) -> AppResult<Vec<QuestOutcome>> {
        let mut record = self.load_with_directive(user_id, date).await?;
        let pending: Vec<DirectiveItem> = record
            .directive
            .as_ref()
            .map(|d| self.parser.parse_record(d))
            .unwrap_or_default()
            .into_iter()
            .filter(|item| !item.completed && item.item_type != DirectiveItemType::Other)
            .collect();

        let mut outcomes = Vec::with_capacity(pending.len());
        for item in &pending {
            outcomes.push(self.apply_completion(&mut record, item).await?);
        }
        self.records.save_daily_record(user_id, date, &record).await?;
        info!(%user_id, %date, completed = outcomes.len(), "Completed all directive items");
        Ok(outcomes)
    }

    /// Clear completion and remove every record the item produced
    ///
    /// Returns the number of records removed.
    ///
    /// # Errors
    ///
    /// Returns not-found when the day or item does not exist, or a store error
    pub async fn undo(
        &self,
        user_id: Uuid,
        date: NaiveDate,
        item_id: &DirectiveItemId,
    ) -> AppResult<usize> {
        let mut record = self.load_with_directive(user_id, date).await?;
        let item = self.find_item(&record, item_id)?;
        let removed = record.remove_directive_records(item_id);
        if let Some(directive) = record.directive.as_mut() {
            directive.clear_completion(item_id, item.index);
        }
        self.records.save_daily_record(user_id, date, &record).await?;
        info!(%user_id, %date, %item_id, removed, "Undid directive item");
        Ok(removed)
    }

    /// Synthesize the meal a meal item describes without persisting it
    ///
    /// # Errors
    ///
    /// Returns an error if the profile store fails
    pub async fn build_meal(&self, item: &DirectiveItem, date: NaiveDate) -> AppResult<(Meal, Vec<String>)> {
        let text = item.effective_text();
        let mut meal = Meal::new(date, self.timestamp(date, text))
            .with_name(self.parser.tag_label(text).unwrap_or_else(|| "Directive".to_owned()))
            .with_flags(MealFlags {
                is_post_workout: self.parser.is_post_workout(text),
                ..MealFlags::default()
            });
        meal.source = RecordSource::Directive {
            item_id: item.id.clone(),
        };

        let names = self.profiles.profile_names().await?;
        let mut unresolved = Vec::new();
        for food in self.parser.parse_meal(text) {
            let profile = match best_match(&food.name, names.iter().map(String::as_str)) {
                Some(matched) => self.profiles.get_profile(matched, None).await?,
                None => None,
            };
            let logged = if let Some(profile) = profile {
                self.scale_food(&profile, &food)
            } else {
                warn!(food = %food.name, "No nutrient profile matched; recording name only");
                unresolved.push(food.name.clone());
                name_only_item(&food)
            };
            meal.items.push(logged);
        }
        Ok((meal, unresolved))
    }

    async fn apply_completion(
        &self,
        record: &mut DailyRecord,
        item: &DirectiveItem,
    ) -> AppResult<QuestOutcome> {
        if item.completed {
            return Ok(QuestOutcome::AlreadyCompleted {
                item_id: item.id.clone(),
            });
        }

        let date = record.date;
        let text = item.effective_text();
        let source = RecordSource::Directive {
            item_id: item.id.clone(),
        };

        let outcome = match item.item_type {
            DirectiveItemType::Meal => {
                let (meal, unresolved) = self.build_meal(item, date).await?;
                let resolved = meal
                    .items
                    .iter()
                    .filter(|i| !i.name_only)
                    .map(|i| i.name.clone())
                    .collect();
                let meal_id = meal.id;
                record.meals.push(meal);
                QuestOutcome::Meal {
                    item_id: item.id.clone(),
                    meal_id,
                    resolved,
                    unresolved,
                }
            }
            DirectiveItemType::Workout => {
                let exercises = self.parser.parse_workout(text);
                let workout = WorkoutRecord {
                    id: Uuid::new_v4(),
                    name: self
                        .parser
                        .tag_label(text)
                        .unwrap_or_else(|| "Workout".to_owned()),
                    date,
                    timestamp: self.timestamp(date, text),
                    exercises,
                    source,
                };
                let outcome = QuestOutcome::Workout {
                    item_id: item.id.clone(),
                    workout_id: workout.id,
                    exercises: workout.exercises.len(),
                };
                record.workouts.push(workout);
                outcome
            }
            DirectiveItemType::Sleep | DirectiveItemType::Condition => {
                let sleep_hours = (item.item_type == DirectiveItemType::Sleep)
                    .then(|| self.parser.parse_sleep_hours(text));
                let body = self.parser.body(text);
                let condition = ConditionRecord {
                    id: Uuid::new_v4(),
                    date,
                    timestamp: self.timestamp(date, text),
                    sleep_hours,
                    note: (sleep_hours.is_none() && !body.is_empty()).then_some(body),
                    source,
                };
                let outcome = QuestOutcome::Condition {
                    item_id: item.id.clone(),
                    condition_id: condition.id,
                    sleep_hours,
                };
                record.conditions.push(condition);
                outcome
            }
            DirectiveItemType::Other => QuestOutcome::Acknowledged {
                item_id: item.id.clone(),
            },
        };

        if let Some(directive) = record.directive.as_mut() {
            directive.mark_completed(item.id.clone());
        }
        Ok(outcome)
    }

    /// Scale a parsed food, bridging grams and pieces when the logged unit
    /// and the profile's reference unit disagree
    fn scale_food(&self, profile: &NutrientProfile, food: &ParsedFood) -> LoggedItem {
        let units = self.scaler.units();
        let per_piece = units.classify(&profile.unit) == UnitKind::Count;
        let logged_per_piece = units.classify(&food.unit) == UnitKind::Count;

        match (per_piece, logged_per_piece) {
            (true, false) => {
                if let Some(grams) = self.grams_per_piece(profile, food) {
                    let pieces = food.amount / grams;
                    debug!(food = %food.name, grams = food.amount, pieces, "Converted grams for per-piece profile");
                    return self.scaler.scale_item(profile, pieces, &profile.unit);
                }
            }
            (false, true) => {
                if let Some(grams) = self.grams_per_piece(profile, food) {
                    let total = food.amount * grams;
                    debug!(food = %food.name, pieces = food.amount, grams = total, "Converted pieces for per-100g profile");
                    return self.scaler.scale_item(profile, total, scaling::DEFAULT_MASS_UNIT);
                }
            }
            _ => {}
        }
        self.scaler.scale_item(profile, food.amount, &food.unit)
    }

    /// Grams in one piece: the profile's serving size, else a matching conversion rule
    fn grams_per_piece(&self, profile: &NutrientProfile, food: &ParsedFood) -> Option<f64> {
        profile
            .serving_size
            .filter(|s| s.is_finite() && *s > 0.0)
            .or_else(|| {
                self.parser
                    .vocabulary()
                    .count_conversions
                    .iter()
                    .find(|rule| {
                        rule.keywords
                            .iter()
                            .any(|k| !k.is_empty() && food.name.contains(k.as_str()))
                    })
                    .map(|rule| rule.grams_per_unit)
            })
    }

    fn timestamp(&self, date: NaiveDate, text: &str) -> chrono::DateTime<Utc> {
        date.and_time(self.parser.record_time(text)).and_utc()
    }

    async fn load_with_directive(&self, user_id: Uuid, date: NaiveDate) -> AppResult<DailyRecord> {
        let record = self
            .records
            .load_daily_record(user_id, date)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Daily record")
                    .with_user_id(user_id)
                    .with_resource_id(date.to_string())
            })?;
        if record.directive.is_none() {
            return Err(AppError::not_found("Directive")
                .with_user_id(user_id)
                .with_resource_id(date.to_string()));
        }
        Ok(record)
    }

    fn find_item(&self, record: &DailyRecord, item_id: &DirectiveItemId) -> AppResult<DirectiveItem> {
        record
            .directive
            .as_ref()
            .map(|d| self.parser.parse_record(d))
            .unwrap_or_default()
            .into_iter()
            .find(|item| &item.id == item_id)
            .ok_or_else(|| {
                AppError::not_found(format!("Directive item {item_id}"))
                    .with_resource_id(item_id.to_string())
            })
    }
}

fn name_only_item(food: &ParsedFood) -> LoggedItem {
    LoggedItem {
        name: food.name.clone(),
        amount: food.amount,
        unit: food.unit.clone(),
        scaled: NutrientValues::default(),
        baseline: None,
        category: None,
        name_only: true,
    }
}
