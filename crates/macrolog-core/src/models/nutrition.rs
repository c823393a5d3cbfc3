// ABOUTME: Nutrition models for food profiles, logged items, and meals
// ABOUTME: NutrientValues, NutrientProfile, LoggedItem, Meal, and MealFlags definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrolog Nutrition Intelligence

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::records::RecordSource;

/// Nutrient values for one portion of food
///
/// Used both for per-reference baselines (per 100 g/ml or per one count
/// unit) and for scaled portions. Vitamins and minerals are keyed by
/// nutrient name in a sorted map so aggregation output is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NutrientValues {
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein: f64,
    /// Fat (g)
    pub fat: f64,
    /// Carbohydrates (g)
    pub carbs: f64,
    /// Total dietary fiber (g)
    pub fiber: f64,
    /// Soluble fiber (g)
    pub soluble_fiber: f64,
    /// Insoluble fiber (g)
    pub insoluble_fiber: f64,
    /// Sugars (g)
    pub sugar: f64,
    /// Saturated fatty acids (g)
    pub saturated_fat: f64,
    /// Medium-chain fatty acids (g)
    pub medium_chain_fat: f64,
    /// Monounsaturated fatty acids (g)
    pub monounsaturated_fat: f64,
    /// Polyunsaturated fatty acids (g)
    pub polyunsaturated_fat: f64,
    /// Digestible Indispensable Amino Acid Score (per food, never scaled)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diaas: Option<f64>,
    /// Glycemic index (per food, never scaled)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gi: Option<f64>,
    /// Vitamins keyed by nutrient name
    pub vitamins: BTreeMap<String, f64>,
    /// Minerals keyed by nutrient name
    pub minerals: BTreeMap<String, f64>,
}

impl NutrientValues {
    /// Sum of the four fatty-acid fractions
    #[must_use]
    pub fn fatty_acid_total(&self) -> f64 {
        self.saturated_fat + self.medium_chain_fat + self.monounsaturated_fat + self.polyunsaturated_fat
    }
}

/// Baseline nutrient data for one food, recipe, or supplement
///
/// Supplied by the profile store and treated as read-only. `values` are
/// expressed per reference amount: 100 g/ml for mass and volume units, one
/// unit for count units such as 個 or tablet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutrientProfile {
    /// Display name
    pub name: String,
    /// Category (meat, grains, supplement, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Unit the baseline is expressed in ("g", "ml", "個", ...)
    #[serde(default = "default_unit")]
    pub unit: String,
    /// Typical serving size in `serving_unit`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serving_size: Option<f64>,
    /// Unit of `serving_size`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serving_unit: Option<String>,
    /// Nutrient values per reference amount
    pub values: NutrientValues,
}

fn default_unit() -> String {
    "g".to_owned()
}

/// One food entry inside a meal
///
/// `scaled` holds values already multiplied by the current amount ratio;
/// `baseline` holds the per-reference values so the item can be rescaled
/// without re-reading the profile store. Records written before baselines
/// were captured have no `baseline`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggedItem {
    /// Food name as logged
    pub name: String,
    /// Logged quantity in `unit`
    pub amount: f64,
    /// Logged unit
    pub unit: String,
    /// Values for the logged quantity
    pub scaled: NutrientValues,
    /// Per-reference values captured at logging time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baseline: Option<NutrientValues>,
    /// Category copied from the profile
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// True when no profile matched and the item carries no nutrient data
    #[serde(default)]
    pub name_only: bool,
}

/// Provenance flags carried by a meal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MealFlags {
    /// Eaten after a workout; high GL is expected and not penalized
    pub is_post_workout: bool,
    /// Created from a prediction rather than logged by hand
    pub is_predicted: bool,
    /// Created from a routine
    pub is_routine: bool,
    /// Created from a template
    pub is_template: bool,
}

/// A logged meal: an ordered list of items plus flags
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    /// Unique meal identifier
    pub id: Uuid,
    /// Meal name ("朝食", "Directive: 食事1", ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Day the meal belongs to
    pub date: NaiveDate,
    /// When the meal was eaten
    pub timestamp: DateTime<Utc>,
    /// Items in logging order
    pub items: Vec<LoggedItem>,
    /// Provenance flags
    #[serde(default)]
    pub flags: MealFlags,
    /// Where the record came from
    #[serde(default)]
    pub source: RecordSource,
}

impl Meal {
    /// Create an empty manually-logged meal
    #[must_use]
    pub fn new(date: NaiveDate, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: None,
            date,
            timestamp,
            items: Vec::new(),
            flags: MealFlags::default(),
            source: RecordSource::Manual,
        }
    }

    /// Builder: set the meal name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Builder: set the provenance flags
    #[must_use]
    pub const fn with_flags(mut self, flags: MealFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Builder: append an item
    #[must_use]
    pub fn with_item(mut self, item: LoggedItem) -> Self {
        self.items.push(item);
        self
    }
}
