// ABOUTME: Unit scaler converting a logged quantity into a ratio against a food baseline
// ABOUTME: Count units scale per piece, mass/volume units per 100 g or ml
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrolog Nutrition Intelligence

use macrolog_core::constants::scaling;
use macrolog_core::models::NutrientProfile;
use serde::{Deserialize, Serialize};

use super::rounding::sanitize;
use crate::config::UnitVocabulary;

/// How a unit relates to a nutrient baseline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitKind {
    /// Baseline is per one discrete unit
    Count,
    /// Baseline is per 100 g or 100 ml
    MassVolume,
}

/// Converts `(amount, unit)` into a dimensionless ratio
///
/// No rounding and no clamping: a non-positive amount yields a
/// non-positive ratio. Non-finite amounts are treated as zero.
#[derive(Debug, Clone, Default)]
pub struct UnitScaler {
    vocabulary: UnitVocabulary,
}

impl UnitScaler {
    /// Create a scaler over a count-unit vocabulary
    #[must_use]
    pub const fn new(vocabulary: UnitVocabulary) -> Self {
        Self { vocabulary }
    }

    /// Classify a unit string
    #[must_use]
    pub fn classify(&self, unit: &str) -> UnitKind {
        if self.vocabulary.is_count_unit(unit) {
            UnitKind::Count
        } else {
            UnitKind::MassVolume
        }
    }

    /// Reference amount the baseline is expressed per
    #[must_use]
    pub fn reference_amount(&self, unit: &str) -> f64 {
        match self.classify(unit) {
            UnitKind::Count => scaling::COUNT_REFERENCE_AMOUNT,
            UnitKind::MassVolume => scaling::MASS_REFERENCE_AMOUNT,
        }
    }

    /// Ratio of `amount` in `unit` to the baseline reference amount
    #[must_use]
    pub fn ratio(&self, amount: f64, unit: &str) -> f64 {
        sanitize(amount) / self.reference_amount(unit)
    }

    /// Amount pre-filled when a profile is first picked
    ///
    /// One unit for count profiles; for mass/volume profiles the serving
    /// size when it is smaller than 100, else 100.
    #[must_use]
    pub fn default_amount(&self, profile: &NutrientProfile) -> f64 {
        let reference = self.reference_amount(&profile.unit);
        if self.classify(&profile.unit) == UnitKind::Count {
            return reference;
        }
        match profile.serving_size.map(sanitize) {
            Some(serving) if serving > 0.0 && serving < reference => serving,
            _ => reference,
        }
    }
}
