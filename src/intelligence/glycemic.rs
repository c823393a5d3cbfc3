// ABOUTME: Glycemic load engine computing PFC/fiber-adjusted GL and dynamic limits
// ABOUTME: Rates each meal against per-meal limits and the day against the dynamic daily limit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrolog Nutrition Intelligence

//! Glycemic Load Engine
//!
//! Per meal, protein, fat and fiber each reduce the raw GL through a
//! floor-stepped ramp:
//!
//! ```text
//! reduction = floor(min(cap, grams / divisor * cap) * 10) / 10
//! adjusted  = max(0, raw * (1 - Σ reduction / 100))
//! ```
//!
//! Limits are derived from the user's carb target:
//!
//! ```text
//! daily_dynamic = round(target_carbs * 0.60)
//! meal_dynamic  = round(daily_dynamic / meals_per_day)
//! ```
//!
//! Missing targets fall back to defaults; the engine always returns a rating.

use macrolog_core::models::{Meal, StarRating, UserTargets};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::meal_aggregator::{MealAggregator, MealGlycemicLoad};
use super::rounding::sanitize;
use crate::config::{GlycemicConfig, ReductionRamp};

/// Nutrient that lowers a meal's GL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReductionSource {
    /// Protein grams
    Protein,
    /// Fat grams
    Fat,
    /// Fiber grams
    Fiber,
}

/// One contribution to a meal's GL reduction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GlModifier {
    /// Contributing nutrient
    pub source: ReductionSource,
    /// Grams of the nutrient in the meal
    pub grams: f64,
    /// Reduction percent contributed
    pub reduction_percent: f64,
}

/// Result of applying reductions to a raw GL
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlAdjustment {
    /// GL before reductions
    pub raw_gl: f64,
    /// GL after reductions, never negative
    pub adjusted_gl: f64,
    /// Total reduction percent applied
    pub reduction_percent: f64,
    /// Non-zero contributions in protein, fat, fiber order
    pub modifiers: Vec<GlModifier>,
}

/// Per-meal GL rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealGlRating {
    /// Within the meal's dynamic limit
    Low,
    /// Above the dynamic limit, within the absolute limit
    Mid,
    /// Above the absolute limit
    High,
    /// Above the absolute limit after a workout, where it is expected
    HighRecommended,
}

impl MealGlRating {
    /// Display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Mid => "mid",
            Self::High => "high",
            Self::HighRecommended => "high (recommended)",
        }
    }
}

/// Limits the GL ratings are measured against
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GlLimits {
    /// `round(target_carbs * coefficient)`
    pub daily_dynamic: f64,
    /// `round(daily_dynamic / meals_per_day)`
    pub meal_dynamic: f64,
    /// Fixed ceiling by lifestyle
    pub meal_absolute: f64,
    /// Meals per day used for the division
    pub meals_per_day: u32,
}

/// GL badge data for one meal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealGlEntry {
    /// Meal the entry describes
    pub meal_id: Uuid,
    /// GL before reductions
    pub raw_gl: f64,
    /// GL after reductions
    pub adjusted_gl: f64,
    /// Total reduction percent
    pub reduction_percent: f64,
    /// Rating against the limits
    pub rating: MealGlRating,
    /// Meal was flagged post-workout
    pub is_post_workout: bool,
    /// Reduction breakdown
    pub modifiers: Vec<GlModifier>,
}

/// Day-level blood sugar management score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyGlScore {
    /// Sum of raw meal GL
    pub total_gl: f64,
    /// Sum of adjusted meal GL
    pub adjusted_daily_gl: f64,
    /// Limits used for rating
    pub limits: GlLimits,
    /// `adjusted_daily_gl / daily_dynamic` when both are positive
    pub ratio: Option<f64>,
    /// Star rating
    pub rating: StarRating,
}

/// Computes adjusted GL, limits, and ratings
#[derive(Debug, Clone, Default)]
pub struct GlycemicLoadEngine {
    config: GlycemicConfig,
}

impl GlycemicLoadEngine {
    /// Create an engine from glycemic configuration
    #[must_use]
    pub const fn new(config: GlycemicConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &GlycemicConfig {
        &self.config
    }

    /// Apply protein, fat and fiber reductions to a meal's raw GL
    #[must_use]
    pub fn adjust(&self, load: &MealGlycemicLoad) -> GlAdjustment {
        let raw_gl = sanitize(load.raw_gl).max(0.0);
        let modifiers: Vec<GlModifier> = [
            (ReductionSource::Protein, load.protein_g, self.config.protein_ramp),
            (ReductionSource::Fat, load.fat_g, self.config.fat_ramp),
            (ReductionSource::Fiber, load.fiber_g, self.config.fiber_ramp),
        ]
        .into_iter()
        .map(|(source, grams, ramp)| GlModifier {
            source,
            grams: sanitize(grams),
            reduction_percent: ramp_reduction(ramp, grams),
        })
        .filter(|m| m.reduction_percent > 0.0)
        .collect();

        let reduction_percent = modifiers
            .iter()
            .map(|m| m.reduction_percent)
            .sum::<f64>()
            .clamp(0.0, self.config.max_total_reduction().min(100.0));
        let adjusted_gl = (raw_gl * (1.0 - reduction_percent / 100.0)).max(0.0);

        GlAdjustment {
            raw_gl,
            adjusted_gl,
            reduction_percent,
            modifiers,
        }
    }

    /// Dynamic and absolute limits for a user's targets
    #[must_use]
    pub fn limits(&self, targets: &UserTargets) -> GlLimits {
        let meals_per_day = targets
            .meals_per_day
            .filter(|m| *m > 0)
            .unwrap_or(self.config.default_meals_per_day)
            .max(1);
        let carbs = sanitize(targets.macros.carbs).max(0.0);
        let daily_dynamic = (carbs * self.config.dynamic_gl_coefficient).round();
        let meal_dynamic = (daily_dynamic / f64::from(meals_per_day)).round();
        let meal_absolute = if self.config.is_bodymaker(targets.lifestyle.as_deref()) {
            self.config.bodymaker_meal_gl_limit
        } else {
            self.config.standard_meal_gl_limit
        };
        GlLimits {
            daily_dynamic,
            meal_dynamic,
            meal_absolute,
            meals_per_day,
        }
    }

    /// Rate one meal's adjusted GL
    #[must_use]
    pub fn rate_meal(&self, adjusted_gl: f64, is_post_workout: bool, limits: &GlLimits) -> MealGlRating {
        if adjusted_gl <= limits.meal_dynamic {
            MealGlRating::Low
        } else if adjusted_gl <= limits.meal_absolute {
            MealGlRating::Mid
        } else if is_post_workout {
            MealGlRating::HighRecommended
        } else {
            MealGlRating::High
        }
    }

    /// Rate the day's adjusted GL against the dynamic daily limit
    #[must_use]
    pub fn rate_day(&self, adjusted_daily_gl: f64, limits: &GlLimits) -> (Option<f64>, StarRating) {
        let adjusted = sanitize(adjusted_daily_gl);
        if adjusted <= 0.0 || limits.daily_dynamic <= 0.0 {
            return (None, StarRating::NEEDS_IMPROVEMENT);
        }
        let ratio = adjusted / limits.daily_dynamic;
        let tiers = &self.config.daily_tiers;
        let rating = if ratio >= tiers.needs_improvement_ratio {
            StarRating::NEEDS_IMPROVEMENT
        } else if ratio >= tiers.fair_ratio {
            StarRating::FAIR
        } else if ratio >= tiers.good_ratio {
            StarRating::GOOD
        } else {
            StarRating::EXCELLENT
        };
        (Some(ratio), rating)
    }

    /// Compute the GL badge for one meal
    #[must_use]
    pub fn meal_entry(&self, meal: &Meal, aggregator: &MealAggregator, limits: &GlLimits) -> MealGlEntry {
        let adjustment = self.adjust(&aggregator.glycemic_load(&meal.items));
        let is_post_workout = meal.flags.is_post_workout;
        MealGlEntry {
            meal_id: meal.id,
            raw_gl: adjustment.raw_gl,
            adjusted_gl: adjustment.adjusted_gl,
            reduction_percent: adjustment.reduction_percent,
            rating: self.rate_meal(adjustment.adjusted_gl, is_post_workout, limits),
            is_post_workout,
            modifiers: adjustment.modifiers,
        }
    }

    /// Day-level score from per-meal entries
    #[must_use]
    pub fn daily_score(&self, entries: &[MealGlEntry], limits: GlLimits) -> DailyGlScore {
        let total_gl = entries.iter().map(|e| e.raw_gl).sum();
        let adjusted_daily_gl = entries.iter().map(|e| e.adjusted_gl).sum();
        let (ratio, rating) = self.rate_day(adjusted_daily_gl, &limits);
        DailyGlScore {
            total_gl,
            adjusted_daily_gl,
            limits,
            ratio,
            rating,
        }
    }
}

/// `floor(min(cap, grams / divisor * cap) * 10) / 10`, never negative
#[must_use]
pub fn ramp_reduction(ramp: ReductionRamp, grams: f64) -> f64 {
    if ramp.divisor <= 0.0 {
        return 0.0;
    }
    let linear = sanitize(grams) / ramp.divisor * ramp.cap;
    ((ramp.cap.min(linear) * 10.0).floor() / 10.0).max(0.0)
}
