// ABOUTME: Quality score configuration for fatty-acid balance and fiber share ratings
// ABOUTME: Outer/inner percentage bands and fiber-share tier thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrolog Nutrition Intelligence

use serde::{Deserialize, Serialize};

/// Percentage band `[min, max)`; values outside it fall through to a lower tier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentBand {
    /// Inclusive lower bound
    pub min: f64,
    /// Exclusive upper bound
    pub max: f64,
}

impl PercentBand {
    /// True when `value` lies inside `[min, max)`
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value < self.max
    }
}

/// Fatty-acid balance bands on saturated and monounsaturated shares
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FattyAcidBands {
    /// Saturated share outside this band rates needs-improvement
    pub saturated_outer: PercentBand,
    /// Saturated share inside this band (with mono inside its own) rates excellent
    pub saturated_inner: PercentBand,
    /// Monounsaturated share outside this band rates needs-improvement
    pub monounsaturated_outer: PercentBand,
    /// Monounsaturated share inside this band (with saturated inside its own) rates excellent
    pub monounsaturated_inner: PercentBand,
}

impl Default for FattyAcidBands {
    fn default() -> Self {
        Self {
            saturated_outer: PercentBand {
                min: 20.0,
                max: 40.0,
            },
            saturated_inner: PercentBand {
                min: 25.0,
                max: 35.0,
            },
            monounsaturated_outer: PercentBand {
                min: 30.0,
                max: 50.0,
            },
            monounsaturated_inner: PercentBand {
                min: 35.0,
                max: 45.0,
            },
        }
    }
}

/// Fiber share of (carbs + fiber) thresholds, in percent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FiberShareThresholds {
    /// Below this: 2 stars
    pub needs_improvement_below: f64,
    /// Below this: 4 stars; at or above: 5 stars
    pub good_below: f64,
}

impl Default for FiberShareThresholds {
    fn default() -> Self {
        Self {
            needs_improvement_below: 5.0,
            good_below: 10.0,
        }
    }
}

/// Quality score configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityScoreConfig {
    /// Fatty-acid balance bands
    pub fatty_acid: FattyAcidBands,
    /// Fiber share thresholds
    pub fiber_share: FiberShareThresholds,
}

/// Sodium reference and upper limit for one lifestyle (mg)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SodiumGoal {
    /// Recommended intake when the user has no sodium target
    pub recommended: f64,
    /// Tolerable upper limit
    pub upper_limit: f64,
}

/// Daily training volume that earns a full exercise score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExerciseGoal {
    /// Total training minutes
    pub minutes: f64,
    /// Total working sets
    pub sets: f64,
}

/// Weights of the three day-score components; expected to sum to 1
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DayScoreWeights {
    /// Food weight
    pub food: f64,
    /// Exercise weight
    pub exercise: f64,
    /// Condition weight
    pub condition: f64,
}

/// Composite day score configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DayScoreConfig {
    /// Sodium goal for standard lifestyles
    pub standard_sodium: SodiumGoal,
    /// Sodium goal for bodymaker lifestyles
    pub bodymaker_sodium: SodiumGoal,
    /// Exercise goal for standard lifestyles
    pub standard_exercise: ExerciseGoal,
    /// Exercise goal for bodymaker lifestyles
    pub bodymaker_exercise: ExerciseGoal,
    /// Meals assumed when turning the per-meal GL limit into a daily one
    pub gl_reference_meals: u32,
    /// Component weights
    pub weights: DayScoreWeights,
}

impl Default for DayScoreConfig {
    fn default() -> Self {
        Self {
            standard_sodium: SodiumGoal {
                recommended: 3000.0,
                upper_limit: 5000.0,
            },
            bodymaker_sodium: SodiumGoal {
                recommended: 10_000.0,
                upper_limit: 15_000.0,
            },
            standard_exercise: ExerciseGoal {
                minutes: 60.0,
                sets: 12.0,
            },
            bodymaker_exercise: ExerciseGoal {
                minutes: 90.0,
                sets: 20.0,
            },
            gl_reference_meals: 3,
            weights: DayScoreWeights {
                food: 0.6,
                exercise: 0.3,
                condition: 0.1,
            },
        }
    }
}
