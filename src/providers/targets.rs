// ABOUTME: Standard target provider with reference vitamin and mineral intakes
// ABOUTME: Copies macro targets from the profile and scales micronutrients for bodymaker plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrolog Nutrition Intelligence

//! Reference daily intakes. Vitamin A, D, K, biotin, folic acid, B12, iodine,
//! selenium, chromium, and molybdenum are in µg; everything else in mg.

use std::collections::BTreeMap;

use super::core::TargetProvider;
use crate::config::EngineConfig;
use crate::models::{MicronutrientTargets, UserProfile, UserTargets};

/// Adult reference vitamin intakes
pub const VITAMIN_REFERENCE: [(&str, f64); 13] = [
    ("vitamin_a", 900.0),
    ("vitamin_d", 20.0),
    ("vitamin_e", 6.5),
    ("vitamin_k", 150.0),
    ("vitamin_b1", 1.4),
    ("vitamin_b2", 1.6),
    ("niacin", 15.0),
    ("pantothenic_acid", 5.0),
    ("vitamin_b6", 1.4),
    ("biotin", 50.0),
    ("folic_acid", 240.0),
    ("vitamin_b12", 2.4),
    ("vitamin_c", 100.0),
];

/// Adult reference mineral intakes, sodium excluded
pub const MINERAL_REFERENCE: [(&str, f64); 12] = [
    ("calcium", 800.0),
    ("iron", 7.5),
    ("magnesium", 370.0),
    ("phosphorus", 1000.0),
    ("potassium", 3000.0),
    ("zinc", 11.0),
    ("copper", 0.9),
    ("manganese", 4.0),
    ("selenium", 30.0),
    ("iodine", 130.0),
    ("chromium", 35.0),
    ("molybdenum", 30.0),
];

/// Micronutrient multiplier for bodymaker plans
pub const BODYMAKER_MULTIPLIER: f64 = 3.0;
/// Sodium target (mg) for bodymaker plans
pub const BODYMAKER_SODIUM_MG: f64 = 10_000.0;
/// Sodium target (mg) otherwise
pub const STANDARD_SODIUM_MG: f64 = 3_000.0;

/// Targets from the profile's macros plus reference micronutrient tables
#[derive(Debug, Clone)]
pub struct StandardTargetProvider {
    bodymaker_lifestyles: Vec<String>,
}

impl Default for StandardTargetProvider {
    fn default() -> Self {
        Self::from_config(&EngineConfig::default())
    }
}

impl StandardTargetProvider {
    /// Create a provider that treats the given lifestyles as bodymaker plans
    #[must_use]
    pub const fn new(bodymaker_lifestyles: Vec<String>) -> Self {
        Self {
            bodymaker_lifestyles,
        }
    }

    /// Create a provider sharing the glycemic bodymaker lifestyle set
    #[must_use]
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.glycemic.bodymaker_lifestyles.clone())
    }

    fn is_bodymaker(&self, lifestyle: Option<&str>) -> bool {
        lifestyle.is_some_and(|l| {
            self.bodymaker_lifestyles
                .iter()
                .any(|b| b.eq_ignore_ascii_case(l.trim()))
        })
    }

    /// Reference micronutrient targets for a plan
    #[must_use]
    pub fn micronutrients(&self, bodymaker: bool) -> MicronutrientTargets {
        let multiplier = if bodymaker { BODYMAKER_MULTIPLIER } else { 1.0 };
        let scaled = |table: &[(&str, f64)]| -> BTreeMap<String, f64> {
            table
                .iter()
                .map(|(key, value)| ((*key).to_owned(), value * multiplier))
                .collect()
        };
        let mut minerals = scaled(&MINERAL_REFERENCE);
        minerals.insert(
            "sodium".to_owned(),
            if bodymaker {
                BODYMAKER_SODIUM_MG
            } else {
                STANDARD_SODIUM_MG
            },
        );
        MicronutrientTargets {
            vitamins: scaled(&VITAMIN_REFERENCE),
            minerals,
        }
    }
}

impl TargetProvider for StandardTargetProvider {
    fn targets(&self, profile: &UserProfile) -> UserTargets {
        let bodymaker = self.is_bodymaker(profile.lifestyle.as_deref());
        UserTargets {
            macros: profile.macros.clone(),
            meals_per_day: profile.meals_per_day,
            lifestyle: profile.lifestyle.clone(),
            micronutrients: self.micronutrients(bodymaker),
        }
    }
}
