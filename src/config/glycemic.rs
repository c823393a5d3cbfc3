// ABOUTME: Glycemic load configuration for per-meal reductions and dynamic limits
// ABOUTME: Reduction ramps, GL coefficient, absolute meal limits, and daily rating tiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrolog Nutrition Intelligence

use macrolog_core::constants::glycemic;
use serde::{Deserialize, Serialize};

/// Floor-stepped linear reduction ramp: `floor(min(cap, amount / divisor * cap) * 10) / 10`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReductionRamp {
    /// Grams at which the ramp reaches its cap
    pub divisor: f64,
    /// Maximum reduction percent
    pub cap: f64,
}

/// Daily GL ratio thresholds (adjusted / dynamic limit), descending
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DailyGlTiers {
    /// At or above: 2 stars
    pub needs_improvement_ratio: f64,
    /// At or above: 3 stars
    pub fair_ratio: f64,
    /// At or above: 4 stars; below: 5 stars
    pub good_ratio: f64,
}

impl Default for DailyGlTiers {
    fn default() -> Self {
        Self {
            needs_improvement_ratio: 1.20,
            fair_ratio: 1.00,
            good_ratio: 0.80,
        }
    }
}

/// Glycemic load engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlycemicConfig {
    /// Protein reduction ramp (20 g → 10 %)
    pub protein_ramp: ReductionRamp,
    /// Fat reduction ramp (10 g → 10 %)
    pub fat_ramp: ReductionRamp,
    /// Fiber reduction ramp (5 g → 15 %)
    pub fiber_ramp: ReductionRamp,
    /// Coefficient on target carb grams giving the daily dynamic limit
    pub dynamic_gl_coefficient: f64,
    /// Meals per day used when targets carry none (or zero)
    pub default_meals_per_day: u32,
    /// Absolute per-meal ceiling for bodymaker lifestyles
    pub bodymaker_meal_gl_limit: f64,
    /// Absolute per-meal ceiling for everyone else
    pub standard_meal_gl_limit: f64,
    /// Lifestyle keywords that select the bodymaker ceiling
    pub bodymaker_lifestyles: Vec<String>,
    /// Foods at or above this GI count as high-GI carbohydrate
    pub high_gi_threshold: f64,
    /// Daily rating tiers
    pub daily_tiers: DailyGlTiers,
}

impl Default for GlycemicConfig {
    fn default() -> Self {
        Self {
            protein_ramp: ReductionRamp {
                divisor: 20.0,
                cap: 10.0,
            },
            fat_ramp: ReductionRamp {
                divisor: 10.0,
                cap: 10.0,
            },
            fiber_ramp: ReductionRamp {
                divisor: 5.0,
                cap: 15.0,
            },
            dynamic_gl_coefficient: glycemic::DYNAMIC_GL_COEFFICIENT,
            default_meals_per_day: glycemic::DEFAULT_MEALS_PER_DAY,
            bodymaker_meal_gl_limit: glycemic::BODYMAKER_MEAL_GL_LIMIT,
            standard_meal_gl_limit: glycemic::STANDARD_MEAL_GL_LIMIT,
            bodymaker_lifestyles: vec!["bodymaker".to_owned()],
            high_gi_threshold: glycemic::HIGH_GI_THRESHOLD,
            daily_tiers: DailyGlTiers::default(),
        }
    }
}

impl GlycemicConfig {
    /// Whether a lifestyle keyword selects the bodymaker meal ceiling
    #[must_use]
    pub fn is_bodymaker(&self, lifestyle: Option<&str>) -> bool {
        lifestyle.is_some_and(|l| {
            self.bodymaker_lifestyles
                .iter()
                .any(|b| b.eq_ignore_ascii_case(l.trim()))
        })
    }

    /// Sum of all ramp caps; the largest possible total reduction
    #[must_use]
    pub fn max_total_reduction(&self) -> f64 {
        self.protein_ramp.cap + self.fat_ramp.cap + self.fiber_ramp.cap
    }
}
