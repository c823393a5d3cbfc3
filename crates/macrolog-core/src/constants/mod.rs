// ABOUTME: Engine-wide constants for nutrient scaling, glycemic load, and directives
// ABOUTME: Centralizes reference amounts, rounding precision, and fallback defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrolog Nutrition Intelligence

//! Constants organized by domain. Values that operators may want to tune
//! live in the engine configuration instead; the ones here are structural.

/// Service identity used by structured logging
pub mod service_names {
    /// Name reported by the engine and CLI log records
    pub const MACROLOG_ENGINE: &str = "macrolog-engine";
}

/// Unit scaling reference amounts
pub mod scaling {
    /// Mass/volume baselines are expressed per this many grams or milliliters
    pub const MASS_REFERENCE_AMOUNT: f64 = 100.0;
    /// Count baselines are expressed per one discrete unit
    pub const COUNT_REFERENCE_AMOUNT: f64 = 1.0;
    /// Unit assumed when a logged item or directive fragment names none
    pub const DEFAULT_MASS_UNIT: &str = "g";
}

/// Decimal precision per nutrient class, matching historical stored data
pub mod rounding {
    /// Calories are stored as integers
    pub const ENERGY_DECIMALS: u32 = 0;
    /// Protein, fat and carbohydrate grams
    pub const MACRO_DECIMALS: u32 = 1;
    /// Fiber fractions, sugar and fatty-acid fractions
    pub const FRACTION_DECIMALS: u32 = 2;
    /// Vitamins and minerals
    pub const MICRONUTRIENT_DECIMALS: u32 = 2;
}

/// Glycemic load defaults
pub mod glycemic {
    /// Meals per day assumed when the user has not configured one
    pub const DEFAULT_MEALS_PER_DAY: u32 = 5;
    /// Target average glycemic index encoded as a coefficient on carb grams
    pub const DYNAMIC_GL_COEFFICIENT: f64 = 0.60;
    /// Foods at or above this GI count toward the high-GI carbohydrate bucket
    pub const HIGH_GI_THRESHOLD: f64 = 66.0;
    /// Absolute per-meal GL ceiling for bodymaker lifestyles
    pub const BODYMAKER_MEAL_GL_LIMIT: f64 = 70.0;
    /// Absolute per-meal GL ceiling for everyone else
    pub const STANDARD_MEAL_GL_LIMIT: f64 = 40.0;
    /// Upper bound of the combined protein/fat/fiber reduction
    pub const MAX_TOTAL_REDUCTION_PERCENT: f64 = 35.0;
}

/// Directive parsing defaults
pub mod directives {
    /// Sleep hours recorded when a sleep line names no duration
    pub const DEFAULT_SLEEP_HOURS: f64 = 8.0;
    /// Record time (minutes after midnight) when an item names no `HH:MM`
    pub const DEFAULT_RECORD_MINUTES: u32 = 12 * 60;
    /// Hex characters kept from the SHA-256 item identifier
    pub const ITEM_ID_HEX_LEN: usize = 16;
}
