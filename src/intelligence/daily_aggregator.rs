// ABOUTME: Daily aggregator summing meals into day totals and deriving every quality score
// ABOUTME: Produces the DailyIntake aggregate and the per-meal GL entries for presentation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrolog Nutrition Intelligence

//! Daily Aggregator
//!
//! Pure function of a day's meals and the user's targets. Output is
//! recomputed on demand and never stored; identical input always yields
//! identical output.

use macrolog_core::models::{Meal, NutrientValues, UserTargets};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::glycemic::{DailyGlScore, GlycemicLoadEngine, MealGlEntry};
use super::meal_aggregator::{sum_nutrients, MealAggregator};
use super::quality_scores::{
    FattyAcidScore, FiberBalanceScore, MacroCompletion, MicronutrientCompletion, ProteinQuality,
    QualityScorer,
};
use crate::config::EngineConfig;

/// Carbohydrate grams split by GI bucket
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GiCarbSplit {
    /// Carbs from items at or above the high-GI threshold
    pub high_gi_carbs: f64,
    /// Carbs from items below the threshold or without a GI
    pub low_gi_carbs: f64,
    /// High-GI share in percent; 0 when no carbs
    pub high_gi_percent: f64,
    /// Low-GI share in percent; 0 when no carbs
    pub low_gi_percent: f64,
}

/// Fiber totals and the carb:fiber ratio
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FiberDetail {
    /// Total fiber (g)
    pub total: f64,
    /// Soluble fiber (g)
    pub soluble: f64,
    /// Insoluble fiber (g)
    pub insoluble: f64,
    /// Carbs per gram of fiber; absent when there is no fiber
    pub carb_to_fiber_ratio: Option<f64>,
}

/// Quality scores for one day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityScores {
    /// Protein quality (DIAAS)
    pub protein_quality: ProteinQuality,
    /// Fatty-acid balance
    pub fatty_acid_balance: FattyAcidScore,
    /// Carbohydrate/fiber balance
    pub fiber_balance: FiberBalanceScore,
    /// Blood sugar management
    pub glycemic: DailyGlScore,
    /// Macro completion ratios
    pub macro_completion: MacroCompletion,
    /// Micronutrient completion ratios
    pub micronutrient_completion: MicronutrientCompletion,
}

/// Derived daily aggregate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyIntake {
    /// Summed nutrients across all meals; unrounded
    pub totals: NutrientValues,
    /// Number of meals aggregated
    pub meal_count: usize,
    /// Protein-weighted average DIAAS
    pub average_diaas: f64,
    /// Sum of raw meal GL
    pub total_gl: f64,
    /// Sum of adjusted meal GL
    pub adjusted_daily_gl: f64,
    /// Carbohydrate split by GI
    pub gi_split: GiCarbSplit,
    /// Fiber detail
    pub fiber: FiberDetail,
    /// Every quality score
    pub scores: QualityScores,
}

/// Daily aggregate plus the per-meal GL side artifact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyReport {
    /// Daily aggregate
    pub intake: DailyIntake,
    /// One entry per meal, in meal order
    pub meal_gl: Vec<MealGlEntry>,
}

/// Sums meals and derives quality scores
#[derive(Debug, Clone)]
pub struct DailyAggregator {
    meals: MealAggregator,
    glycemic: GlycemicLoadEngine,
    scorer: QualityScorer,
}

impl Default for DailyAggregator {
    fn default() -> Self {
        Self::from_config(&EngineConfig::default())
    }
}

impl DailyAggregator {
    /// Create an aggregator from its parts
    #[must_use]
    pub const fn new(meals: MealAggregator, glycemic: GlycemicLoadEngine, scorer: QualityScorer) -> Self {
        Self {
            meals,
            glycemic,
            scorer,
        }
    }

    /// Create an aggregator from engine configuration
    #[must_use]
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(
            MealAggregator::new(config.glycemic.high_gi_threshold),
            GlycemicLoadEngine::new(config.glycemic.clone()),
            QualityScorer::new(config.quality),
        )
    }

    /// Meal aggregator in use
    #[must_use]
    pub const fn meal_aggregator(&self) -> &MealAggregator {
        &self.meals
    }

    /// Glycemic load engine in use
    #[must_use]
    pub const fn glycemic_engine(&self) -> &GlycemicLoadEngine {
        &self.glycemic
    }

    /// Aggregate a day's meals against the user's targets
    #[must_use]
    pub fn aggregate(&self, meals: &[Meal], targets: &UserTargets) -> DailyReport {
        let items = || meals.iter().flat_map(|m| m.items.iter());
        let totals = sum_nutrients(items().map(|i| &i.scaled));

        let limits = self.glycemic.limits(targets);
        let meal_gl: Vec<MealGlEntry> = meals
            .iter()
            .map(|meal| self.glycemic.meal_entry(meal, &self.meals, &limits))
            .collect();
        let glycemic = self.glycemic.daily_score(&meal_gl, limits);

        let gi_split = meals
            .iter()
            .map(|meal| self.meals.glycemic_load(&meal.items))
            .fold(GiCarbSplit::default(), |acc, load| GiCarbSplit {
                high_gi_carbs: acc.high_gi_carbs + load.high_gi_carbs,
                low_gi_carbs: acc.low_gi_carbs + load.low_gi_carbs,
                ..acc
            });
        let gi_split = with_percentages(gi_split);

        let fiber = FiberDetail {
            total: totals.fiber,
            soluble: totals.soluble_fiber,
            insoluble: totals.insoluble_fiber,
            carb_to_fiber_ratio: (totals.fiber > 0.0).then(|| totals.carbs / totals.fiber),
        };

        let protein_quality = self.scorer.protein_quality(items());
        let scores = QualityScores {
            protein_quality,
            fatty_acid_balance: self.scorer.fatty_acid_balance(&totals),
            fiber_balance: self.scorer.fiber_balance(&totals),
            macro_completion: self.scorer.macro_completion(&totals, targets),
            micronutrient_completion: self.scorer.micronutrient_completion(&totals, targets),
            glycemic,
        };

        debug!(
            meals = meals.len(),
            calories = totals.calories,
            adjusted_daily_gl = scores.glycemic.adjusted_daily_gl,
            gl_stars = scores.glycemic.rating.stars,
            "Aggregated daily intake"
        );

        DailyReport {
            intake: DailyIntake {
                meal_count: meals.len(),
                average_diaas: protein_quality.average_diaas,
                total_gl: scores.glycemic.total_gl,
                adjusted_daily_gl: scores.glycemic.adjusted_daily_gl,
                gi_split,
                fiber,
                totals,
                scores,
            },
            meal_gl,
        }
    }
}

fn with_percentages(split: GiCarbSplit) -> GiCarbSplit {
    let total = split.high_gi_carbs + split.low_gi_carbs;
    if total <= 0.0 {
        return GiCarbSplit {
            high_gi_percent: 0.0,
            low_gi_percent: 0.0,
            ..split
        };
    }
    GiCarbSplit {
        high_gi_percent: split.high_gi_carbs / total * 100.0,
        low_gi_percent: split.low_gi_carbs / total * 100.0,
        ..split
    }
}
