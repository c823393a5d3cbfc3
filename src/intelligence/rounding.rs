// ABOUTME: Rounding policy table keyed by nutrient class
// ABOUTME: Single source of decimal precision for every scaling path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrolog Nutrition Intelligence

use macrolog_core::constants::rounding;
use serde::{Deserialize, Serialize};

/// Nutrient classes sharing one rounding precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NutrientClass {
    /// Calories
    Energy,
    /// Protein, fat, carbohydrate grams
    Macro,
    /// Fiber fractions, sugar, fatty-acid fractions
    Fraction,
    /// Vitamins and minerals
    Micronutrient,
    /// DIAAS and GI; carried verbatim
    Quality,
}

/// Decimal precision per nutrient class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundingPolicy {
    /// Decimals for `Energy`
    pub energy_decimals: u32,
    /// Decimals for `Macro`
    pub macro_decimals: u32,
    /// Decimals for `Fraction`
    pub fraction_decimals: u32,
    /// Decimals for `Micronutrient`
    pub micronutrient_decimals: u32,
}

impl Default for RoundingPolicy {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl RoundingPolicy {
    /// Precision matching historically stored records
    pub const STANDARD: Self = Self {
        energy_decimals: rounding::ENERGY_DECIMALS,
        macro_decimals: rounding::MACRO_DECIMALS,
        fraction_decimals: rounding::FRACTION_DECIMALS,
        micronutrient_decimals: rounding::MICRONUTRIENT_DECIMALS,
    };

    /// Decimals for a class; `None` means the value is never rounded
    #[must_use]
    pub const fn decimals(&self, class: NutrientClass) -> Option<u32> {
        match class {
            NutrientClass::Energy => Some(self.energy_decimals),
            NutrientClass::Macro => Some(self.macro_decimals),
            NutrientClass::Fraction => Some(self.fraction_decimals),
            NutrientClass::Micronutrient => Some(self.micronutrient_decimals),
            NutrientClass::Quality => None,
        }
    }

    /// Round a value according to its class
    #[must_use]
    pub fn apply(&self, class: NutrientClass, value: f64) -> f64 {
        self.decimals(class)
            .map_or(value, |decimals| round_to(value, decimals))
    }
}

/// Round half away from zero to a number of decimals
#[must_use]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(i32::try_from(decimals.min(12)).unwrap_or(12));
    (value * factor).round() / factor
}

/// Replace NaN and infinities with zero
#[must_use]
pub fn sanitize(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}
