// ABOUTME: Composite day score blending food, exercise, and condition into one 0-100 number
// ABOUTME: Food is rated on ten weighted sub-scores derived from the daily aggregate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrolog Nutrition Intelligence

//! Day Score
//!
//! ```text
//! total = round(food * 0.6 + exercise * 0.3 + condition * 0.1)
//! ```
//!
//! Every published point value is rounded half to even. Band tables are
//! inclusive at both ends and the first matching band wins.

use std::collections::BTreeMap;

use macrolog_core::models::{ConditionRatings, DailyRecord, UserTargets, WorkoutRecord};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::daily_aggregator::DailyIntake;
use super::rounding::sanitize;
use crate::config::{DayScoreConfig, EngineConfig, ExerciseGoal, GlycemicConfig, SodiumGoal};

/// Inclusive `[low, high]` range and the points it earns
type Band = (f64, f64, f64);

const DIAAS_TIERS: [(f64, f64); 4] = [(1.0, 100.0), (0.9, 80.0), (0.75, 60.0), (0.5, 40.0)];

const SATURATED_BANDS: [Band; 5] = [
    (0.30, 0.35, 100.0),
    (0.25, 0.30, 80.0),
    (0.20, 0.25, 60.0),
    (0.35, 0.40, 80.0),
    (0.40, 0.50, 60.0),
];
const MONO_BANDS: [Band; 4] = [
    (0.35, 0.45, 100.0),
    (0.30, 0.35, 80.0),
    (0.25, 0.30, 60.0),
    (0.45, 0.50, 80.0),
];
const POLY_BANDS: [Band; 4] = [
    (0.20, 0.30, 100.0),
    (0.15, 0.20, 80.0),
    (0.10, 0.15, 60.0),
    (0.30, 0.35, 80.0),
];

const FIBER_AMOUNT_BANDS: [Band; 4] = [
    (20.0, 30.0, 100.0),
    (15.0, 20.0, 80.0),
    (10.0, 15.0, 60.0),
    (5.0, 10.0, 40.0),
];

const VITAMIN_BANDS: [Band; 5] = [
    (0.7, 1.5, 100.0),
    (0.5, 0.7, 70.0),
    (0.3, 0.5, 50.0),
    (1.5, 2.0, 80.0),
    (2.0, 3.0, 60.0),
];
const MINERAL_BANDS: [Band; 4] = [
    (0.8, 1.5, 100.0),
    (0.6, 0.8, 75.0),
    (0.4, 0.6, 50.0),
    (1.5, 2.0, 80.0),
];

/// Neutral score used when there is nothing to rate against
const NEUTRAL: f64 = 50.0;
const SODIUM_KEY: &str = "sodium";

/// Food component with its ten sub-scores
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodScore {
    /// Weighted food score
    pub score: u32,
    /// Calorie deviation score
    pub calories: u32,
    /// Protein deviation score
    pub protein: u32,
    /// Fat deviation score
    pub fat: u32,
    /// Carbohydrate deviation score
    pub carbs: u32,
    /// Protein quality tier
    pub diaas: u32,
    /// Saturated/mono/poly share of total fat
    pub fatty_acid: u32,
    /// Raw daily GL against the lifestyle limit
    pub glycemic_load: u32,
    /// Fiber amount and carb:fiber ratio
    pub fiber: u32,
    /// Vitamin target coverage
    pub vitamins: u32,
    /// Mineral target coverage including sodium
    pub minerals: u32,
}

/// Exercise component from training volume
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseScore {
    /// Weighted exercise score
    pub score: u32,
    /// Duration sub-score
    pub duration: u32,
    /// Sets sub-score
    pub sets: u32,
    /// Minutes logged across all exercises
    pub total_minutes: u32,
    /// Working sets logged across all exercises
    pub total_sets: u32,
}

/// Condition component from the day's self-ratings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionScore {
    /// Overall condition score
    pub score: u32,
    /// Sleep duration
    pub sleep_hours: u32,
    /// Sleep quality
    pub sleep_quality: u32,
    /// Digestion
    pub digestion: u32,
    /// Focus
    pub focus: u32,
    /// Stress
    pub stress: u32,
}

/// Composite score for one day
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayScore {
    /// Food component
    pub food: FoodScore,
    /// Exercise component
    pub exercise: ExerciseScore,
    /// Condition component
    pub condition: ConditionScore,
    /// Weighted total
    pub total: u32,
}

/// Computes the composite day score
#[derive(Debug, Clone)]
pub struct DayScorer {
    config: DayScoreConfig,
    glycemic: GlycemicConfig,
}

impl Default for DayScorer {
    fn default() -> Self {
        Self::from_config(&EngineConfig::default())
    }
}

impl DayScorer {
    /// Create a scorer from day score goals and the glycemic settings
    #[must_use]
    pub const fn new(config: DayScoreConfig, glycemic: GlycemicConfig) -> Self {
        Self { config, glycemic }
    }

    /// Create a scorer from engine configuration
    #[must_use]
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.day_score, config.glycemic.clone())
    }

    /// True when the lifestyle uses the bodymaker limits
    #[must_use]
    pub fn is_bodymaker(&self, lifestyle: Option<&str>) -> bool {
        self.glycemic.is_bodymaker(lifestyle)
    }

    /// Score a whole day from its record and the aggregate of its meals
    #[must_use]
    pub fn score_day(
        &self,
        record: &DailyRecord,
        intake: &DailyIntake,
        targets: &UserTargets,
        rest_day: bool,
    ) -> DayScore {
        let bodymaker = self.is_bodymaker(targets.lifestyle.as_deref());
        let food = self.food_score(intake, targets);
        let exercise = self.exercise_score(&record.workouts, bodymaker, rest_day);
        let condition = condition_score(record.condition_ratings.as_ref());

        let weights = self.config.weights;
        let total = points(weighted(&[
            (f64::from(food.score), weights.food),
            (f64::from(exercise.score), weights.exercise),
            (f64::from(condition.score), weights.condition),
        ]));

        debug!(
            date = %record.date,
            food = food.score,
            exercise = exercise.score,
            condition = condition.score,
            total,
            "Day score computed"
        );

        DayScore {
            food,
            exercise,
            condition,
            total,
        }
    }

    /// Food component; every sub-score is zero on a day without meals
    #[must_use]
    pub fn food_score(&self, intake: &DailyIntake, targets: &UserTargets) -> FoodScore {
        if intake.meal_count == 0 {
            return FoodScore::default();
        }
        let totals = &intake.totals;
        let goals = &targets.macros;
        let bodymaker = self.is_bodymaker(targets.lifestyle.as_deref());

        let calories = deviation_score(totals.calories, goals.calories, 200.0);
        let protein = deviation_score(totals.protein, goals.protein, 150.0);
        let fat = deviation_score(totals.fat, goals.fat, 200.0);
        let carbs = deviation_score(totals.carbs, goals.carbs, 200.0);
        let diaas = diaas_score(intake.average_diaas);
        let fatty_acid = fatty_acid_score(
            totals.fat,
            totals.saturated_fat,
            totals.monounsaturated_fat,
            totals.polyunsaturated_fat,
        );
        let glycemic_load = self.glycemic_load_score(intake.total_gl, bodymaker);
        let fiber = fiber_score(totals.fiber, totals.carbs);
        let vitamins = coverage_score(
            &totals.vitamins,
            targets.micronutrients.vitamins.iter(),
            &VITAMIN_BANDS,
        );
        let minerals = self.mineral_score(&totals.minerals, targets, bodymaker);

        let score = points(weighted(&[
            (calories, 0.10),
            (protein, 0.20),
            (fat, 0.20),
            (carbs, 0.20),
            (diaas + fatty_acid + glycemic_load + fiber + vitamins + minerals, 0.05),
        ]));

        FoodScore {
            score,
            calories: points(calories),
            protein: points(protein),
            fat: points(fat),
            carbs: points(carbs),
            diaas: points(diaas),
            fatty_acid: points(fatty_acid),
            glycemic_load: points(glycemic_load),
            fiber: points(fiber),
            vitamins: points(vitamins),
            minerals: points(minerals),
        }
    }

    /// Exercise component from the day's workouts
    #[must_use]
    pub fn exercise_score(
        &self,
        workouts: &[WorkoutRecord],
        bodymaker: bool,
        rest_day: bool,
    ) -> ExerciseScore {
        let (total_minutes, total_sets) = workouts
            .iter()
            .flat_map(|w| &w.exercises)
            .fold((0_u32, 0_u32), |(minutes, sets), exercise| {
                let exercise_sets = exercise.sets.unwrap_or_else(|| {
                    exercise.duration_minutes.map_or(1, |d| (d / 15).max(1))
                });
                (
                    minutes.saturating_add(exercise.duration_minutes.unwrap_or(0)),
                    sets.saturating_add(exercise_sets),
                )
            });

        let (duration, sets) = if rest_day {
            (100.0, 100.0)
        } else {
            let goal: ExerciseGoal = if bodymaker {
                self.config.bodymaker_exercise
            } else {
                self.config.standard_exercise
            };
            (
                goal_ratio(f64::from(total_minutes), goal.minutes),
                goal_ratio(f64::from(total_sets), goal.sets),
            )
        };

        ExerciseScore {
            score: points(weighted(&[(duration, 0.30), (sets, 0.70)])),
            duration: points(duration),
            sets: points(sets),
            total_minutes,
            total_sets,
        }
    }

    fn glycemic_load_score(&self, total_gl: f64, bodymaker: bool) -> f64 {
        let total_gl = sanitize(total_gl);
        if total_gl <= 0.0 {
            return NEUTRAL;
        }
        let meal_limit = if bodymaker {
            self.glycemic.bodymaker_meal_gl_limit
        } else {
            self.glycemic.standard_meal_gl_limit
        };
        let limit = meal_limit * f64::from(self.config.gl_reference_meals);
        if total_gl <= limit * 0.6 {
            100.0
        } else if total_gl <= limit * 0.8 {
            90.0
        } else if total_gl <= limit {
            75.0
        } else if total_gl <= limit * 1.25 {
            60.0
        } else if total_gl <= limit * 1.5 {
            40.0
        } else {
            (40.0 - limit.mul_add(-1.5, total_gl) / 10.0).max(0.0)
        }
    }

    fn mineral_score(
        &self,
        intake: &BTreeMap<String, f64>,
        targets: &UserTargets,
        bodymaker: bool,
    ) -> f64 {
        let goal: SodiumGoal = if bodymaker {
            self.config.bodymaker_sodium
        } else {
            self.config.standard_sodium
        };
        let recommended = targets
            .micronutrients
            .minerals
            .get(SODIUM_KEY)
            .copied()
            .filter(|v| v.is_finite() && *v > 0.0)
            .unwrap_or(goal.recommended);
        let sodium = sodium_score(
            sanitize(intake.get(SODIUM_KEY).copied().unwrap_or(0.0)),
            recommended,
            goal.upper_limit,
        );

        let scores: Vec<f64> = targets
            .micronutrients
            .minerals
            .iter()
            .filter(|(key, _)| key.as_str() != SODIUM_KEY)
            .map(|(key, target)| band_rate(intake, key, *target, &MINERAL_BANDS))
            .chain(std::iter::once(sodium))
            .collect();
        mean(&scores).unwrap_or(NEUTRAL)
    }
}

/// Condition component; all zero without ratings
#[must_use]
pub fn condition_score(ratings: Option<&ConditionRatings>) -> ConditionScore {
    let Some(r) = ratings else {
        return ConditionScore::default();
    };
    let fields = [r.sleep_hours, r.sleep_quality, r.digestion, r.focus, r.stress];
    let sum: f64 = fields.iter().copied().map(f64::from).sum();
    let field = |v: u8| points(f64::from(v) / 5.0 * 100.0);
    ConditionScore {
        score: points(sum / 5.0 * 20.0),
        sleep_hours: field(r.sleep_hours),
        sleep_quality: field(r.sleep_quality),
        digestion: field(r.digestion),
        focus: field(r.focus),
        stress: field(r.stress),
    }
}

/// `max(0, 100 - |actual - target| / target * penalty)`; full marks without a target
fn deviation_score(actual: f64, target: f64, penalty: f64) -> f64 {
    let deviation = if target > 0.0 {
        (sanitize(actual) - target).abs() / target
    } else {
        0.0
    };
    deviation.mul_add(-penalty, 100.0).max(0.0)
}

fn diaas_score(average: f64) -> f64 {
    DIAAS_TIERS
        .iter()
        .find(|(floor, _)| average >= *floor)
        .map_or(20.0, |(_, points)| *points)
}

fn fatty_acid_score(fat: f64, saturated: f64, mono: f64, poly: f64) -> f64 {
    let fat = sanitize(fat);
    if fat <= 0.0 {
        return NEUTRAL;
    }
    weighted(&[
        (banded(saturated / fat, &SATURATED_BANDS, 40.0), 0.4),
        (banded(mono / fat, &MONO_BANDS, 40.0), 0.3),
        (banded(poly / fat, &POLY_BANDS, 40.0), 0.3),
    ])
}

fn fiber_score(fiber: f64, carbs: f64) -> f64 {
    let fiber = sanitize(fiber);
    let amount = if fiber < 5.0 {
        20.0
    } else if fiber <= 35.0 {
        banded(fiber, &FIBER_AMOUNT_BANDS, 90.0)
    } else {
        (fiber - 35.0).mul_add(-5.0, 90.0).max(60.0)
    };

    let ratio = if fiber > 0.0 {
        let r = sanitize(carbs) / fiber;
        if r <= 10.0 {
            100.0
        } else if r <= 15.0 {
            80.0
        } else if r <= 20.0 {
            60.0
        } else {
            (r - 20.0).mul_add(-3.0, 60.0).max(0.0)
        }
    } else {
        NEUTRAL
    };

    weighted(&[(amount, 0.6), (ratio, 0.4)])
}

fn sodium_score(sodium: f64, recommended: f64, upper_limit: f64) -> f64 {
    if (recommended * 0.8..=recommended * 1.2).contains(&sodium) {
        100.0
    } else if (recommended * 0.6..=recommended * 1.4).contains(&sodium) {
        85.0
    } else if sodium <= upper_limit {
        70.0
    } else if sodium <= upper_limit * 1.2 {
        50.0
    } else if sodium <= upper_limit * 1.5 {
        30.0
    } else {
        // 10 points per gram over 1.5x the limit
        (30.0 - upper_limit.mul_add(-1.5, sodium) / 100.0).max(0.0)
    }
}

fn coverage_score<'a>(
    intake: &BTreeMap<String, f64>,
    goals: impl Iterator<Item = (&'a String, &'a f64)>,
    bands: &[Band],
) -> f64 {
    let scores: Vec<f64> = goals
        .map(|(key, target)| band_rate(intake, key, *target, bands))
        .collect();
    mean(&scores).unwrap_or(NEUTRAL)
}

fn band_rate(intake: &BTreeMap<String, f64>, key: &str, target: f64, bands: &[Band]) -> f64 {
    let actual = sanitize(intake.get(key).copied().unwrap_or(0.0));
    let rate = if target > 0.0 { actual / target } else { 0.0 };
    banded(rate, bands, 30.0)
}

fn goal_ratio(total: f64, goal: f64) -> f64 {
    if total <= 0.0 {
        0.0
    } else if total >= goal {
        100.0
    } else {
        total / goal * 100.0
    }
}

fn banded(value: f64, bands: &[Band], otherwise: f64) -> f64 {
    bands
        .iter()
        .find(|(low, high, _)| (*low..=*high).contains(&value))
        .map_or(otherwise, |(_, _, points)| *points)
}

fn weighted(parts: &[(f64, f64)]) -> f64 {
    parts
        .iter()
        .fold(0.0, |acc, (value, weight)| value.mul_add(*weight, acc))
}

fn mean(values: &[f64]) -> Option<f64> {
    (!values.is_empty()).then(|| values.iter().sum::<f64>() / values.len() as f64)
}

fn points(value: f64) -> u32 {
    sanitize(value).max(0.0).round_ties_even() as u32
}
