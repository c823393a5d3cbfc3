// ABOUTME: Core data models for nutrition logging, directives, and daily records
// ABOUTME: Re-exports every model type shared between the engine and its collaborators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrolog Nutrition Intelligence

//! # Data Models
//!
//! Persisted and exchanged shapes. Derived aggregates (daily intake, GL
//! entries, quality scores) are produced by the engine crate and are not
//! stored.

mod directive;
mod nutrition;
mod rating;
mod records;
mod targets;

pub use directive::{DirectiveItem, DirectiveItemId, DirectiveItemType, DirectiveRecord};
pub use nutrition::{LoggedItem, Meal, MealFlags, NutrientProfile, NutrientValues};
pub use rating::{RatingLabel, StarRating};
pub use records::{ConditionRatings, ConditionRecord, DailyRecord, ExerciseEntry, RecordSource, WorkoutRecord};
pub use targets::{MacroTargets, MicronutrientTargets, UserProfile, UserTargets};
