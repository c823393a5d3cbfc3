// ABOUTME: Nutrient intake aggregation and quality scoring engine
// ABOUTME: Unit scaling, item scaling, meal/day aggregation, glycemic load, and quality scores
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrolog Nutrition Intelligence

//! # Nutrition Intelligence
//!
//! Synchronous, lock-free computations over in-memory snapshots. Data flows
//! leaf-first:
//!
//! ```text
//! NutrientProfile → ItemScaler → LoggedItem → MealAggregator
//!                → DailyAggregator (→ GlycemicLoadEngine, QualityScorer)
//!                → DailyReport
//!                → DayScorer (with workouts and condition ratings)
//! ```

/// Day-level aggregation and score assembly
pub mod daily_aggregator;
/// Composite food, exercise, and condition day score
pub mod day_score;
/// Glycemic load adjustment, limits, and ratings
pub mod glycemic;
/// Logged item scaling and rescaling
pub mod item_scaler;
/// Per-meal sums and glycemic inputs
pub mod meal_aggregator;
/// Protein, fatty-acid, fiber, and completion scores
pub mod quality_scores;
/// Rounding policy table
pub mod rounding;
/// Amount-to-ratio conversion
pub mod units;

pub use daily_aggregator::{
    DailyAggregator, DailyIntake, DailyReport, FiberDetail, GiCarbSplit, QualityScores,
};
pub use day_score::{
    condition_score, ConditionScore, DayScore, DayScorer, ExerciseScore, FoodScore,
};
pub use glycemic::{
    DailyGlScore, GlAdjustment, GlLimits, GlModifier, GlycemicLoadEngine, MealGlEntry,
    MealGlRating, ReductionSource,
};
pub use item_scaler::ItemScaler;
pub use meal_aggregator::{MealAggregator, MealGlycemicLoad, MealTotals};
pub use quality_scores::{
    FattyAcidScore, FiberBalanceScore, MacroCompletion, MicronutrientCompletion, ProteinQuality,
    QualityScorer,
};
pub use rounding::{NutrientClass, RoundingPolicy};
pub use units::{UnitKind, UnitScaler};
