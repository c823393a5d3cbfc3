// ABOUTME: Tests for unit classification, ratio computation, item scaling, and rescaling
// ABOUTME: Covers rounding per nutrient class, both rescale modes, and legacy baseline reconstruction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrolog Nutrition Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{approx, broccoli, chicken_breast, egg, item_with, micros, olive_oil, rice};
use macrolog_engine::config::{EngineConfig, RescaleMode, UnitVocabulary};
use macrolog_engine::intelligence::{
    ItemScaler, NutrientClass, RoundingPolicy, UnitKind, UnitScaler,
};
use macrolog_engine::models::{LoggedItem, NutrientValues};

fn scaler(mode: RescaleMode) -> ItemScaler {
    ItemScaler::from_config(&EngineConfig {
        rescale_mode: mode,
        ..EngineConfig::default()
    })
}

// ============================================================================
// UNIT SCALER
// ============================================================================

#[test]
fn test_mass_units_scale_per_hundred() {
    let units = UnitScaler::default();
    assert!(approx(units.ratio(150.0, "g"), 1.5));
    assert!(approx(units.ratio(250.0, "ml"), 2.5));
    assert_eq!(units.classify("g"), UnitKind::MassVolume);
}

#[test]
fn test_count_units_scale_per_piece() {
    let units = UnitScaler::default();
    assert!(approx(units.ratio(2.0, "個"), 2.0));
    assert!(approx(units.ratio(3.0, "pieces"), 3.0));
    assert!(approx(units.ratio(1.0, "Tablet"), 1.0));
    assert_eq!(units.classify("本"), UnitKind::Count);
}

#[test]
fn test_empty_unit_is_mass() {
    let units = UnitScaler::default();
    assert_eq!(units.classify(""), UnitKind::MassVolume);
    assert!(approx(units.ratio(50.0, ""), 0.5));
}

#[test]
fn test_ratio_does_not_clamp_negative_amounts() {
    let units = UnitScaler::default();
    assert!(approx(units.ratio(-50.0, "g"), -0.5));
    assert!(approx(units.ratio(0.0, "個"), 0.0));
}

#[test]
fn test_non_finite_amount_is_zero() {
    let units = UnitScaler::default();
    assert!(approx(units.ratio(f64::NAN, "g"), 0.0));
    assert!(approx(units.ratio(f64::INFINITY, "個"), 0.0));
}

#[test]
fn test_synthetic_vocabulary_is_honored() {
    let units = UnitScaler::new(UnitVocabulary::with_units(["scoop"]));
    assert_eq!(units.classify("scoop"), UnitKind::Count);
    assert_eq!(units.classify("個"), UnitKind::MassVolume);
    assert!(approx(units.ratio(2.0, "個"), 0.02));
}

#[test]
fn test_default_amount() {
    let scaler = ItemScaler::default();
    assert!(approx(scaler.default_amount(&rice()), 100.0));
    assert!(approx(scaler.default_amount(&olive_oil()), 14.0));
    assert!(approx(scaler.default_amount(&egg()), 1.0));

    let mut large_serving = rice();
    large_serving.serving_size = Some(150.0);
    assert!(approx(scaler.default_amount(&large_serving), 100.0));
}

// ============================================================================
// ROUNDING POLICY
// ============================================================================

#[test]
fn test_rounding_policy_per_class() {
    let policy = RoundingPolicy::STANDARD;
    assert!(approx(policy.apply(NutrientClass::Energy, 157.4), 157.0));
    assert!(approx(policy.apply(NutrientClass::Macro, 27.96), 28.0));
    assert!(approx(policy.apply(NutrientClass::Fraction, 0.544), 0.54));
    assert!(approx(policy.apply(NutrientClass::Micronutrient, 14.404), 14.4));
    assert!(approx(policy.apply(NutrientClass::Quality, 1.0837), 1.0837));
    assert_eq!(policy.decimals(NutrientClass::Quality), None);
}

// ============================================================================
// ITEM SCALER
// ============================================================================

#[test]
fn test_scale_item_reference_example() {
    let scaler = ItemScaler::default();
    let profile = common::profile(
        "example",
        "g",
        NutrientValues {
            calories: 200.0,
            protein: 20.0,
            fat: 5.0,
            carbs: 10.0,
            gi: Some(70.0),
            ..NutrientValues::default()
        },
    );

    let item = scaler.scale_item(&profile, 150.0, "g");

    assert!(approx(item.scaled.calories, 300.0));
    assert!(approx(item.scaled.protein, 30.0));
    assert!(approx(item.scaled.fat, 7.5));
    assert!(approx(item.scaled.carbs, 15.0));
    assert_eq!(item.scaled.gi, Some(70.0));
    assert_eq!(item.baseline.as_ref(), Some(&profile.values));
}

#[test]
fn test_scale_item_rounds_each_class() {
    let scaler = ItemScaler::default();
    let item = scaler.scale_item(&chicken_breast(), 120.0, "g");

    assert!(approx(item.scaled.calories, 126.0));
    assert!(approx(item.scaled.protein, 28.0));
    assert!(approx(item.scaled.fat, 2.3));
    assert!(approx(item.scaled.saturated_fat, 0.54));
    assert!(approx(item.scaled.monounsaturated_fat, 0.72));
    assert!(approx(item.scaled.polyunsaturated_fat, 0.42));
    assert!(approx(item.scaled.vitamins["niacin"], 14.4));
    assert!(approx(item.scaled.minerals["potassium"], 444.0));
    assert_eq!(item.scaled.diaas, Some(1.08));
    assert_eq!(item.category.as_deref(), Some("meat"));
    assert!(!item.name_only);
}

#[test]
fn test_scale_item_count_unit() {
    let scaler = ItemScaler::default();
    let item = scaler.scale_item(&egg(), 2.0, "個");

    assert!(approx(item.scaled.calories, 182.0));
    assert!(approx(item.scaled.protein, 15.6));
    assert!(approx(item.scaled.vitamins["vitamin_a"], 270.0));
    assert!(approx(item.scaled.minerals["iron"], 2.2));
}

#[test]
fn test_scale_item_sanitizes_amount() {
    let scaler = ItemScaler::default();
    let item = scaler.scale_item(&rice(), f64::NAN, "g");
    assert!(approx(item.amount, 0.0));
    assert!(approx(item.scaled.calories, 0.0));
    assert!(approx(item.scaled.carbs, 0.0));
}

// ============================================================================
// RESCALE
// ============================================================================

#[test]
fn test_rescale_carry_macros_recomputes_micronutrients_only() {
    let scaler = scaler(RescaleMode::CarryMacros);
    let item = scaler.scale_item(&chicken_breast(), 120.0, "g");

    let rescaled = scaler.rescale(&item, 200.0);

    assert!(approx(rescaled.amount, 200.0));
    assert!(approx(rescaled.scaled.vitamins["niacin"], 24.0));
    assert!(approx(rescaled.scaled.minerals["potassium"], 740.0));
    // Macros and fractions keep their stored values
    assert!(approx(rescaled.scaled.calories, 126.0));
    assert!(approx(rescaled.scaled.protein, 28.0));
    assert!(approx(rescaled.scaled.saturated_fat, 0.54));
    assert_eq!(rescaled.baseline, item.baseline);
}

#[test]
fn test_rescale_unified_recomputes_everything() {
    let scaler = scaler(RescaleMode::Unified);
    let item = scaler.scale_item(&chicken_breast(), 120.0, "g");

    let rescaled = scaler.rescale(&item, 200.0);

    assert!(approx(rescaled.scaled.calories, 210.0));
    assert!(approx(rescaled.scaled.protein, 46.6));
    assert!(approx(rescaled.scaled.fat, 3.8));
    assert!(approx(rescaled.scaled.vitamins["niacin"], 24.0));
}

#[test]
fn test_rescale_round_trip_restores_micronutrients() {
    let scaler = ItemScaler::default();
    let original = scaler.scale_item(&broccoli(), 80.0, "g");

    let there = scaler.rescale(&original, 230.0);
    let back = scaler.rescale(&there, 80.0);

    assert_eq!(back.scaled.vitamins, original.scaled.vitamins);
    assert_eq!(back.scaled.minerals, original.scaled.minerals);
}

#[test]
fn test_rescale_round_trip_count_unit() {
    let scaler = ItemScaler::default();
    let original = scaler.scale_item(&egg(), 1.0, "個");

    let back = scaler.rescale(&scaler.rescale(&original, 3.0), 1.0);

    assert_eq!(back.scaled.vitamins, original.scaled.vitamins);
    assert_eq!(back.scaled.minerals, original.scaled.minerals);
}

// ============================================================================
// LEGACY BASELINE RECONSTRUCTION
// ============================================================================

fn legacy_item(amount: f64) -> LoggedItem {
    LoggedItem {
        baseline: None,
        amount,
        ..item_with(NutrientValues {
            calories: 300.0,
            protein: 30.0,
            vitamins: micros(&[("vitamin_c", 30.0)]),
            ..NutrientValues::default()
        })
    }
}

#[test]
fn test_missing_baseline_is_reconstructed_from_stored_values() {
    common::init_test_logging();
    let scaler = ItemScaler::default();

    let baseline = scaler.baseline_of(&legacy_item(150.0));

    assert!(approx(baseline.calories, 200.0));
    assert!(approx(baseline.protein, 20.0));
    assert!(approx(baseline.vitamins["vitamin_c"], 20.0));
}

#[test]
fn test_rescale_legacy_item_captures_baseline() {
    common::init_test_logging();
    let carry = scaler(RescaleMode::CarryMacros);
    let unified = scaler(RescaleMode::Unified);
    let item = legacy_item(150.0);

    let carried = carry.rescale(&item, 300.0);
    assert!(approx(carried.scaled.vitamins["vitamin_c"], 60.0));
    assert!(approx(carried.scaled.calories, 300.0));
    assert!(carried.baseline.is_some());

    let recomputed = unified.rescale(&item, 300.0);
    assert!(approx(recomputed.scaled.calories, 600.0));
    assert!(approx(recomputed.scaled.protein, 60.0));
}

#[test]
fn test_zero_amount_legacy_item_reconstructs_zero_baseline() {
    common::init_test_logging();
    let scaler = ItemScaler::default();

    let rescaled = scaler.rescale(&legacy_item(0.0), 100.0);

    assert!(approx(rescaled.scaled.vitamins["vitamin_c"], 0.0));
    assert!(approx(
        rescaled.baseline.as_ref().map_or(-1.0, |b| b.calories),
        0.0
    ));
}
