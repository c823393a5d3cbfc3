// ABOUTME: Main library entry point for the Macrolog nutrition engine
// ABOUTME: Nutrient scaling, daily aggregation, quality scoring, and coaching directive replay
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrolog Nutrition Intelligence

#![deny(unsafe_code)]

//! # Macrolog Engine
//!
//! Turns logged food items into daily nutrient totals and quality scores,
//! and turns a coach's daily instruction message into checkable items that
//! become meal, workout, and condition records when completed.
//!
//! ## Architecture
//!
//! - **Intelligence**: item scaling, meal and daily aggregation, glycemic
//!   load adjustment, and star-rated quality scores
//! - **Directives**: message parsing, food-name matching, and the quest recorder
//! - **Providers**: profile lookup, target resolution, and record persistence
//! - **Config**: unit vocabulary, directive vocabulary, and scoring thresholds
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use chrono::{NaiveDate, Utc};
//! use macrolog_engine::intelligence::{DailyAggregator, ItemScaler};
//! use macrolog_engine::models::{Meal, NutrientProfile, NutrientValues, UserTargets};
//!
//! let rice = NutrientProfile {
//!     name: "rice".to_owned(),
//!     category: Some("grains".to_owned()),
//!     unit: "g".to_owned(),
//!     serving_size: None,
//!     serving_unit: None,
//!     values: NutrientValues { calories: 156.0, carbs: 37.1, gi: Some(88.0), ..Default::default() },
//! };
//! let item = ItemScaler::default().scale_item(&rice, 150.0, "g");
//!
//! let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap_or_default();
//! let meal = Meal::new(date, Utc::now()).with_item(item);
//! let report = DailyAggregator::default().aggregate(&[meal], &UserTargets::default());
//! println!("{} kcal", report.intake.totals.calories);
//! ```

/// Engine configuration (units, directive vocabulary, scoring thresholds)
pub mod config;

/// Engine constants re-exported from the core crate
pub mod constants;

/// Coaching directive parsing and completion replay
pub mod directives;

/// Unified error handling re-exported from the core crate
pub mod errors;

/// Scaling, aggregation, glycemic load, and quality scoring
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Data models re-exported from the core crate
pub mod models;

/// Collaborator traits and bundled store implementations
pub mod providers;
