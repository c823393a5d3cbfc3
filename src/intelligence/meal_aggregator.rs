// ABOUTME: Meal aggregator summing scaled items into meal totals and glycemic inputs
// ABOUTME: Raw GL, protein/fat/fiber grams for GL reduction, and the high/low GI carb split
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrolog Nutrition Intelligence

use macrolog_core::models::{LoggedItem, NutrientValues};
use serde::{Deserialize, Serialize};

use super::rounding::sanitize;

/// Macro totals for one meal; unrounded
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MealTotals {
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein: f64,
    /// Fat (g)
    pub fat: f64,
    /// Carbohydrates (g)
    pub carbs: f64,
}

/// Inputs to the per-meal GL adjustment
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MealGlycemicLoad {
    /// `Σ gi * carbs / 100` over items carrying a GI
    pub raw_gl: f64,
    /// Protein grams in the meal
    pub protein_g: f64,
    /// Fat grams in the meal
    pub fat_g: f64,
    /// Fiber grams in the meal
    pub fiber_g: f64,
    /// Carb grams from items at or above the high-GI threshold
    pub high_gi_carbs: f64,
    /// Carb grams from items below the threshold or without a GI
    pub low_gi_carbs: f64,
}

/// Sums logged items
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MealAggregator {
    high_gi_threshold: f64,
}

impl MealAggregator {
    /// Create an aggregator with the GI value separating high from low GI
    #[must_use]
    pub const fn new(high_gi_threshold: f64) -> Self {
        Self { high_gi_threshold }
    }

    /// Sum scaled macro values across items
    #[must_use]
    pub fn aggregate(&self, items: &[LoggedItem]) -> MealTotals {
        items.iter().fold(MealTotals::default(), |acc, item| MealTotals {
            calories: acc.calories + sanitize(item.scaled.calories),
            protein: acc.protein + sanitize(item.scaled.protein),
            fat: acc.fat + sanitize(item.scaled.fat),
            carbs: acc.carbs + sanitize(item.scaled.carbs),
        })
    }

    /// Raw glycemic load and the grams that reduce it
    #[must_use]
    pub fn glycemic_load(&self, items: &[LoggedItem]) -> MealGlycemicLoad {
        let mut load = MealGlycemicLoad::default();
        for item in items {
            let carbs = sanitize(item.scaled.carbs);
            load.protein_g += sanitize(item.scaled.protein);
            load.fat_g += sanitize(item.scaled.fat);
            load.fiber_g += sanitize(item.scaled.fiber);

            match item_gi(item) {
                Some(gi) => {
                    load.raw_gl += gi * carbs / 100.0;
                    if gi >= self.high_gi_threshold {
                        load.high_gi_carbs += carbs;
                    } else if carbs > 0.0 {
                        load.low_gi_carbs += carbs;
                    }
                }
                None if carbs > 0.0 => load.low_gi_carbs += carbs,
                None => {}
            }
        }
        load
    }
}

/// GI of an item: the scaled copy first, then the baseline
fn item_gi(item: &LoggedItem) -> Option<f64> {
    item.scaled
        .gi
        .or_else(|| item.baseline.as_ref().and_then(|b| b.gi))
        .filter(|gi| gi.is_finite())
}

/// Sum every scalable field of the given values; DIAAS and GI are left unset
#[must_use]
pub fn sum_nutrients<'a, I>(values: I) -> NutrientValues
where
    I: IntoIterator<Item = &'a NutrientValues>,
{
    let mut total = NutrientValues::default();
    for v in values {
        total.calories += sanitize(v.calories);
        total.protein += sanitize(v.protein);
        total.fat += sanitize(v.fat);
        total.carbs += sanitize(v.carbs);
        total.fiber += sanitize(v.fiber);
        total.soluble_fiber += sanitize(v.soluble_fiber);
        total.insoluble_fiber += sanitize(v.insoluble_fiber);
        total.sugar += sanitize(v.sugar);
        total.saturated_fat += sanitize(v.saturated_fat);
        total.medium_chain_fat += sanitize(v.medium_chain_fat);
        total.monounsaturated_fat += sanitize(v.monounsaturated_fat);
        total.polyunsaturated_fat += sanitize(v.polyunsaturated_fat);
        for (key, value) in &v.vitamins {
            *total.vitamins.entry(key.clone()).or_insert(0.0) += sanitize(*value);
        }
        for (key, value) in &v.minerals {
            *total.minerals.entry(key.clone()).or_insert(0.0) += sanitize(*value);
        }
    }
    total
}
