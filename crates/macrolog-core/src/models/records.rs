// ABOUTME: Daily record models grouping meals, workouts, condition entries, and directive state
// ABOUTME: Tracks record provenance so directive-driven entries can be undone
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrolog Nutrition Intelligence

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::directive::{DirectiveItemId, DirectiveRecord};
use super::nutrition::Meal;

/// Where a stored record came from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RecordSource {
    /// Logged directly by the user
    #[default]
    Manual,
    /// Created by completing a directive item
    Directive {
        /// Item that produced the record
        item_id: DirectiveItemId,
    },
}

impl RecordSource {
    /// True when the record was produced by the given directive item
    #[must_use]
    pub fn is_directive_item(&self, id: &DirectiveItemId) -> bool {
        matches!(self, Self::Directive { item_id } if item_id == id)
    }
}

/// One exercise inside a workout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseEntry {
    /// Exercise name
    pub name: String,
    /// Repetitions per set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reps: Option<u32>,
    /// Number of sets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sets: Option<u32>,
    /// Duration in minutes for timed exercises
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
}

/// A logged workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutRecord {
    /// Unique workout identifier
    pub id: Uuid,
    /// Workout name
    pub name: String,
    /// Day the workout belongs to
    pub date: NaiveDate,
    /// When the workout happened
    pub timestamp: DateTime<Utc>,
    /// Exercises performed
    pub exercises: Vec<ExerciseEntry>,
    /// Where the record came from
    #[serde(default)]
    pub source: RecordSource,
}

/// A condition check-in (sleep, general notes)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionRecord {
    /// Unique entry identifier
    pub id: Uuid,
    /// Day the entry belongs to
    pub date: NaiveDate,
    /// When the entry was recorded
    pub timestamp: DateTime<Utc>,
    /// Sleep duration in hours
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sleep_hours: Option<f64>,
    /// Free-form condition note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Where the record came from
    #[serde(default)]
    pub source: RecordSource,
}

/// Self-reported condition for a day, each field on a 1 to 5 scale
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionRatings {
    /// Sleep duration rating
    pub sleep_hours: u8,
    /// Sleep quality rating
    pub sleep_quality: u8,
    /// Digestion rating
    pub digestion: u8,
    /// Focus rating
    pub focus: u8,
    /// Stress rating (5 is least stressed)
    pub stress: u8,
}

/// Everything logged for one user on one day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    /// Calendar day
    pub date: NaiveDate,
    /// Meals in logging order
    #[serde(default)]
    pub meals: Vec<Meal>,
    /// Workouts in logging order
    #[serde(default)]
    pub workouts: Vec<WorkoutRecord>,
    /// Condition entries in logging order
    #[serde(default)]
    pub conditions: Vec<ConditionRecord>,
    /// Condition check-in ratings for the day
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition_ratings: Option<ConditionRatings>,
    /// Directive received for the day
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directive: Option<DirectiveRecord>,
}

impl DailyRecord {
    /// Empty record for a day
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self {
            date,
            meals: Vec::new(),
            workouts: Vec::new(),
            conditions: Vec::new(),
            condition_ratings: None,
            directive: None,
        }
    }

    /// Most recent sleep duration logged for the day
    #[must_use]
    pub fn latest_sleep_hours(&self) -> Option<f64> {
        self.conditions.iter().rev().find_map(|c| c.sleep_hours)
    }

    /// Remove every meal, workout, and condition entry created by a directive item
    ///
    /// Returns the number of records removed.
    pub fn remove_directive_records(&mut self, id: &DirectiveItemId) -> usize {
        let before = self.meals.len() + self.workouts.len() + self.conditions.len();
        self.meals.retain(|m| !m.source.is_directive_item(id));
        self.workouts.retain(|w| !w.source.is_directive_item(id));
        self.conditions.retain(|c| !c.source.is_directive_item(id));
        before - (self.meals.len() + self.workouts.len() + self.conditions.len())
    }
}
