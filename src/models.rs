// ABOUTME: Core data models re-exported from macrolog-core
// ABOUTME: Re-exports nutrient profiles, meals, directives, daily records, and targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrolog Nutrition Intelligence

//! # Data Models
//!
//! - `NutrientProfile`: per-reference nutrient values for one food
//! - `LoggedItem` / `Meal`: scaled intake entries grouped by meal
//! - `DirectiveRecord` / `DirectiveItem`: a day's coaching message and its progress
//! - `DailyRecord`: everything recorded for one user on one date
//! - `UserTargets`: macro and micronutrient goals used for scoring

pub use macrolog_core::models::*;
