// ABOUTME: User profile and daily nutrient target models
// ABOUTME: Macro targets, micronutrient targets, and meal-frequency settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrolog Nutrition Intelligence

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Daily macro targets
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MacroTargets {
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein: f64,
    /// Fat (g)
    pub fat: f64,
    /// Carbohydrates (g)
    pub carbs: f64,
}

/// Daily vitamin and mineral targets keyed by nutrient name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MicronutrientTargets {
    /// Vitamin targets
    pub vitamins: BTreeMap<String, f64>,
    /// Mineral targets
    pub minerals: BTreeMap<String, f64>,
}

/// User settings that drive target resolution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// User identifier
    pub user_id: Uuid,
    /// Lifestyle keyword ("bodymaker", "standard", ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lifestyle: Option<String>,
    /// Planned meals per day
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meals_per_day: Option<u32>,
    /// Macro targets set by the user or their coach
    #[serde(default)]
    pub macros: MacroTargets,
}

/// Resolved daily targets consumed by the scoring engine
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserTargets {
    /// Macro targets
    #[serde(flatten)]
    pub macros: MacroTargets,
    /// Planned meals per day; absent or zero falls back to the default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meals_per_day: Option<u32>,
    /// Lifestyle keyword
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifestyle: Option<String>,
    /// Vitamin and mineral targets
    pub micronutrients: MicronutrientTargets,
}

impl UserTargets {
    /// True when the lifestyle names the high-volume bodymaker plan
    #[must_use]
    pub fn is_bodymaker(&self) -> bool {
        self.lifestyle
            .as_deref()
            .is_some_and(|l| l.eq_ignore_ascii_case("bodymaker"))
    }
}
