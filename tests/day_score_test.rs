// ABOUTME: Tests for the composite day score over food, exercise, and condition components
// ABOUTME: Builds intakes through the daily aggregator and checks sub-scores and weighting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrolog Nutrition Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::{TimeZone, Utc};
use common::{item_with, meal_of, micros, targets, test_date};
use macrolog_engine::config::{ConfigError, EngineConfig};
use macrolog_engine::intelligence::{
    condition_score, DailyAggregator, DailyIntake, DayScorer,
};
use macrolog_engine::models::{
    ConditionRatings, DailyRecord, ExerciseEntry, MicronutrientTargets, NutrientValues,
    RecordSource, UserTargets, WorkoutRecord,
};
use uuid::Uuid;

/// Intake that meets every standard-lifestyle goal
fn on_target() -> NutrientValues {
    NutrientValues {
        calories: 2400.0,
        protein: 150.0,
        fat: 60.0,
        carbs: 250.0,
        fiber: 25.0,
        saturated_fat: 19.5,
        monounsaturated_fat: 24.0,
        polyunsaturated_fat: 15.0,
        diaas: Some(1.0),
        gi: Some(28.0),
        vitamins: micros(&[("vitamin_c", 100.0)]),
        minerals: micros(&[("calcium", 800.0), ("sodium", 3000.0)]),
        ..NutrientValues::default()
    }
}

fn full_targets(lifestyle: Option<&str>) -> UserTargets {
    UserTargets {
        micronutrients: MicronutrientTargets {
            vitamins: micros(&[("vitamin_c", 100.0)]),
            minerals: micros(&[("calcium", 800.0)]),
        },
        ..targets(250.0, Some(3), lifestyle)
    }
}

fn intake_of(values: NutrientValues, targets: &UserTargets) -> DailyIntake {
    DailyAggregator::default()
        .aggregate(&[meal_of(vec![item_with(values)])], targets)
        .intake
}

fn exercise(name: &str, sets: Option<u32>, duration_minutes: Option<u32>) -> ExerciseEntry {
    ExerciseEntry {
        name: name.to_owned(),
        reps: sets.map(|_| 10),
        sets,
        duration_minutes,
    }
}

fn workout(exercises: Vec<ExerciseEntry>) -> WorkoutRecord {
    WorkoutRecord {
        id: Uuid::new_v4(),
        name: "トレーニング".to_owned(),
        date: test_date(),
        timestamp: Utc.with_ymd_and_hms(2025, 1, 15, 18, 0, 0).unwrap(),
        exercises,
        source: RecordSource::Manual,
    }
}

/// Bench and squat at 3 sets each plus a 30 minute run (2 sets)
fn evening_session() -> WorkoutRecord {
    workout(vec![
        exercise("ベンチプレス", Some(3), None),
        exercise("スクワット", Some(3), None),
        exercise("ランニング", None, Some(30)),
    ])
}

// ============================================================================
// FOOD
// ============================================================================

#[test]
fn test_food_score_full_marks_on_target() {
    let targets = full_targets(None);
    let food = DayScorer::default().food_score(&intake_of(on_target(), &targets), &targets);

    assert_eq!(food.calories, 100);
    assert_eq!(food.protein, 100);
    assert_eq!(food.fat, 100);
    assert_eq!(food.carbs, 100);
    assert_eq!(food.diaas, 100);
    assert_eq!(food.fatty_acid, 100);
    assert_eq!(food.glycemic_load, 100);
    assert_eq!(food.fiber, 100);
    assert_eq!(food.vitamins, 100);
    assert_eq!(food.minerals, 100);
    assert_eq!(food.score, 100);
}

#[test]
fn test_food_score_penalizes_macro_deviation() {
    let targets = full_targets(None);
    let values = NutrientValues {
        calories: 1800.0,
        protein: 120.0,
        ..on_target()
    };
    let food = DayScorer::default().food_score(&intake_of(values, &targets), &targets);

    // 25% under on calories costs 50 points, 20% under on protein costs 30
    assert_eq!(food.calories, 50);
    assert_eq!(food.protein, 70);
    assert_eq!(food.score, 89);
}

#[test]
fn test_food_score_is_zero_without_meals() {
    let targets = full_targets(None);
    let intake = DailyAggregator::default().aggregate(&[], &targets).intake;
    let food = DayScorer::default().food_score(&intake, &targets);

    assert_eq!(food.score, 0);
    assert_eq!(food.calories, 0);
    assert_eq!(food.minerals, 0);
}

#[test]
fn test_glycemic_load_limit_follows_lifestyle() {
    let scorer = DayScorer::default();
    // raw GL 100 against 120 standard / 210 bodymaker
    let moderate = NutrientValues {
        gi: Some(40.0),
        ..on_target()
    };
    let standard = full_targets(None);
    let bodymaker = full_targets(Some("bodymaker"));
    assert_eq!(
        scorer
            .food_score(&intake_of(moderate.clone(), &standard), &standard)
            .glycemic_load,
        75
    );
    assert_eq!(
        scorer
            .food_score(&intake_of(moderate, &bodymaker), &bodymaker)
            .glycemic_load,
        100
    );

    // raw GL 200 is 20 past 1.5x the standard limit
    let heavy = NutrientValues {
        gi: Some(80.0),
        ..on_target()
    };
    assert_eq!(
        scorer
            .food_score(&intake_of(heavy, &standard), &standard)
            .glycemic_load,
        38
    );
}

#[test]
fn test_sodium_goal_follows_lifestyle() {
    let scorer = DayScorer::default();
    let salty = NutrientValues {
        minerals: micros(&[("sodium", 10_000.0)]),
        ..on_target()
    };
    let sodium_only = |lifestyle: Option<&str>| UserTargets {
        micronutrients: MicronutrientTargets::default(),
        ..targets(250.0, Some(3), lifestyle)
    };

    let bodymaker = sodium_only(Some("bodymaker"));
    let food = scorer.food_score(&intake_of(salty.clone(), &bodymaker), &bodymaker);
    assert_eq!(food.minerals, 100);

    // 2.5 g past 1.5x the 5 g standard upper limit
    let standard = sodium_only(None);
    let food = scorer.food_score(&intake_of(salty, &standard), &standard);
    assert_eq!(food.minerals, 5);
}

#[test]
fn test_fatty_acid_score_uses_total_fat_shares() {
    let targets = full_targets(None);
    let values = NutrientValues {
        saturated_fat: 30.0,
        monounsaturated_fat: 18.0,
        polyunsaturated_fat: 6.0,
        ..on_target()
    };
    let food = DayScorer::default().food_score(&intake_of(values, &targets), &targets);

    // 50% saturated, 30% mono, 10% poly
    assert_eq!(food.fatty_acid, 66);
}

// ============================================================================
// EXERCISE
// ============================================================================

#[test]
fn test_exercise_score_standard_goals() {
    let score = DayScorer::default().exercise_score(&[evening_session()], false, false);

    assert_eq!(score.total_minutes, 30);
    assert_eq!(score.total_sets, 8);
    assert_eq!(score.duration, 50);
    assert_eq!(score.sets, 67);
    assert_eq!(score.score, 62);
}

#[test]
fn test_exercise_score_bodymaker_goals() {
    let score = DayScorer::default().exercise_score(&[evening_session()], true, false);

    assert_eq!(score.duration, 33);
    assert_eq!(score.sets, 40);
    assert_eq!(score.score, 38);
}

#[test]
fn test_exercise_sets_without_counts() {
    let scorer = DayScorer::default();
    let session = workout(vec![
        exercise("ストレッチ", None, None),
        exercise("ウォーキング", None, Some(10)),
    ]);
    let score = scorer.exercise_score(&[session], false, false);

    assert_eq!(score.total_sets, 2);
    assert_eq!(score.total_minutes, 10);
}

#[test]
fn test_rest_day_earns_full_exercise_score() {
    let score = DayScorer::default().exercise_score(&[], false, true);

    assert_eq!(score.score, 100);
    assert_eq!(score.total_sets, 0);

    let idle = DayScorer::default().exercise_score(&[], false, false);
    assert_eq!(idle.score, 0);
}

// ============================================================================
// CONDITION
// ============================================================================

#[test]
fn test_condition_score_from_ratings() {
    let ratings = ConditionRatings {
        sleep_hours: 4,
        sleep_quality: 3,
        digestion: 5,
        focus: 4,
        stress: 2,
    };
    let score = condition_score(Some(&ratings));

    assert_eq!(score.score, 72);
    assert_eq!(score.sleep_hours, 80);
    assert_eq!(score.sleep_quality, 60);
    assert_eq!(score.digestion, 100);
    assert_eq!(score.focus, 80);
    assert_eq!(score.stress, 40);

    assert_eq!(condition_score(None).score, 0);
}

// ============================================================================
// COMPOSITE
// ============================================================================

#[test]
fn test_day_score_weights_components() {
    let targets = full_targets(None);
    let mut record = DailyRecord::new(test_date());
    record.meals.push(meal_of(vec![item_with(on_target())]));
    record.workouts.push(evening_session());
    record.condition_ratings = Some(ConditionRatings {
        sleep_hours: 4,
        sleep_quality: 3,
        digestion: 5,
        focus: 4,
        stress: 2,
    });

    let intake = DailyAggregator::default()
        .aggregate(&record.meals, &targets)
        .intake;
    let day = DayScorer::default().score_day(&record, &intake, &targets, false);

    assert_eq!(day.food.score, 100);
    assert_eq!(day.exercise.score, 62);
    assert_eq!(day.condition.score, 72);
    // 60 + 18.6 + 7.2
    assert_eq!(day.total, 86);
}

#[test]
fn test_empty_rest_day_scores_exercise_only() {
    let targets = full_targets(None);
    let record = DailyRecord::new(test_date());
    let intake = DailyAggregator::default().aggregate(&[], &targets).intake;

    let day = DayScorer::default().score_day(&record, &intake, &targets, true);
    assert_eq!(day.total, 30);

    let day = DayScorer::default().score_day(&record, &intake, &targets, false);
    assert_eq!(day.total, 0);
}

#[test]
fn test_condition_ratings_optional_in_stored_record() {
    let json = serde_json::json!({
        "date": "2025-01-15",
        "meals": [],
        "workouts": [],
        "conditions": []
    });
    let record: DailyRecord = serde_json::from_value(json).unwrap();
    assert_eq!(record.condition_ratings, None);

    let json = serde_json::json!({
        "date": "2025-01-15",
        "meals": [],
        "workouts": [],
        "conditions": [],
        "condition_ratings": {
            "sleep_hours": 5, "sleep_quality": 4, "digestion": 3, "focus": 2, "stress": 1
        }
    });
    let record: DailyRecord = serde_json::from_value(json).unwrap();
    assert_eq!(record.condition_ratings.map(|r| r.sleep_quality), Some(4));
}

#[test]
fn test_day_score_weights_must_sum_to_one() {
    let mut config = EngineConfig::default();
    config.day_score.weights.condition = 0.2;
    assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));

    let mut config = EngineConfig::default();
    config.day_score.standard_exercise.sets = 0.0;
    assert!(config.validate().is_err());
}
