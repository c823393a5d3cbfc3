// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Quiet logging setup plus nutrient profiles, meals, and targets used across suites
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrolog Nutrition Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `macrolog_engine`

use std::collections::BTreeMap;
use std::sync::Once;

use chrono::{NaiveDate, TimeZone, Utc};
use macrolog_engine::models::{
    LoggedItem, MacroTargets, Meal, MealFlags, NutrientProfile, NutrientValues, UserTargets,
};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Float comparison with an absolute tolerance
pub fn approx(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() < 1e-6
}

pub fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
}

pub fn micros(entries: &[(&str, f64)]) -> BTreeMap<String, f64> {
    entries
        .iter()
        .map(|(k, v)| ((*k).to_owned(), *v))
        .collect()
}

pub fn profile(name: &str, unit: &str, values: NutrientValues) -> NutrientProfile {
    NutrientProfile {
        name: name.to_owned(),
        category: None,
        unit: unit.to_owned(),
        serving_size: None,
        serving_unit: None,
        values,
    }
}

/// Cooked white rice, per 100 g
pub fn rice() -> NutrientProfile {
    NutrientProfile {
        category: Some("grains".to_owned()),
        ..profile(
            "白米",
            "g",
            NutrientValues {
                calories: 156.0,
                protein: 2.5,
                fat: 0.3,
                carbs: 37.1,
                fiber: 0.3,
                insoluble_fiber: 0.3,
                saturated_fat: 0.1,
                monounsaturated_fat: 0.07,
                polyunsaturated_fat: 0.1,
                diaas: Some(0.6),
                gi: Some(88.0),
                minerals: micros(&[("magnesium", 7.0), ("potassium", 29.0)]),
                ..NutrientValues::default()
            },
        )
    }
}

/// Skinless chicken breast, per 100 g
pub fn chicken_breast() -> NutrientProfile {
    NutrientProfile {
        category: Some("meat".to_owned()),
        ..profile(
            "鶏むね肉(皮なし)",
            "g",
            NutrientValues {
                calories: 105.0,
                protein: 23.3,
                fat: 1.9,
                carbs: 0.1,
                saturated_fat: 0.45,
                monounsaturated_fat: 0.6,
                polyunsaturated_fat: 0.35,
                diaas: Some(1.08),
                vitamins: micros(&[("niacin", 12.0), ("vitamin_b6", 0.64)]),
                minerals: micros(&[("potassium", 370.0), ("phosphorus", 220.0)]),
                ..NutrientValues::default()
            },
        )
    }
}

/// Broccoli, per 100 g
pub fn broccoli() -> NutrientProfile {
    NutrientProfile {
        category: Some("vegetables".to_owned()),
        ..profile(
            "ブロッコリー",
            "g",
            NutrientValues {
                calories: 37.0,
                protein: 5.4,
                fat: 0.6,
                carbs: 6.6,
                fiber: 5.1,
                soluble_fiber: 0.9,
                insoluble_fiber: 4.2,
                sugar: 1.5,
                gi: Some(25.0),
                vitamins: micros(&[("vitamin_c", 140.0), ("vitamin_k", 210.0)]),
                minerals: micros(&[("potassium", 460.0)]),
                ..NutrientValues::default()
            },
        )
    }
}

/// Whole egg, per piece (64 g)
pub fn egg() -> NutrientProfile {
    NutrientProfile {
        category: Some("eggs".to_owned()),
        serving_size: Some(64.0),
        serving_unit: Some("g".to_owned()),
        ..profile(
            "卵",
            "個",
            NutrientValues {
                calories: 91.0,
                protein: 7.8,
                fat: 6.5,
                carbs: 0.2,
                saturated_fat: 2.0,
                monounsaturated_fat: 2.4,
                polyunsaturated_fat: 1.1,
                diaas: Some(1.13),
                vitamins: micros(&[("vitamin_a", 135.0), ("vitamin_d", 2.4)]),
                minerals: micros(&[("iron", 1.1)]),
                ..NutrientValues::default()
            },
        )
    }
}

/// Olive oil, per 100 g
pub fn olive_oil() -> NutrientProfile {
    NutrientProfile {
        category: Some("oils".to_owned()),
        serving_size: Some(14.0),
        serving_unit: Some("g".to_owned()),
        ..profile(
            "オリーブオイル",
            "g",
            NutrientValues {
                calories: 894.0,
                fat: 100.0,
                saturated_fat: 13.3,
                monounsaturated_fat: 74.0,
                polyunsaturated_fat: 7.2,
                ..NutrientValues::default()
            },
        )
    }
}

pub fn all_profiles() -> Vec<NutrientProfile> {
    vec![rice(), chicken_breast(), broccoli(), egg(), olive_oil()]
}

/// A logged item with the given scaled values and a matching baseline at 100 g
pub fn item_with(scaled: NutrientValues) -> LoggedItem {
    LoggedItem {
        name: "test food".to_owned(),
        amount: 100.0,
        unit: "g".to_owned(),
        baseline: Some(scaled.clone()),
        scaled,
        category: None,
        name_only: false,
    }
}

pub fn meal_of(items: Vec<LoggedItem>) -> Meal {
    let timestamp = Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap();
    let mut meal = Meal::new(test_date(), timestamp);
    meal.items = items;
    meal
}

pub fn post_workout_meal_of(items: Vec<LoggedItem>) -> Meal {
    meal_of(items).with_flags(MealFlags {
        is_post_workout: true,
        ..MealFlags::default()
    })
}

pub fn targets(carbs: f64, meals_per_day: Option<u32>, lifestyle: Option<&str>) -> UserTargets {
    UserTargets {
        macros: MacroTargets {
            calories: 2400.0,
            protein: 150.0,
            fat: 60.0,
            carbs,
        },
        meals_per_day,
        lifestyle: lifestyle.map(str::to_owned),
        ..UserTargets::default()
    }
}
