// ABOUTME: Item scaler producing logged items from nutrient profiles and rescaling them
// ABOUTME: Keeps the per-reference baseline so amount edits never re-read the profile store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrolog Nutrition Intelligence

//! Item Scaler
//!
//! `scaled = baseline * ratio(amount, unit)` with per-class rounding from
//! [`RoundingPolicy`]. Rescaling has two modes:
//!
//! - [`RescaleMode::CarryMacros`]: vitamins and minerals are recomputed from
//!   the baseline, every other field keeps its stored value. This matches
//!   totals computed for historical records.
//! - [`RescaleMode::Unified`]: every field is recomputed from the baseline.
//!
//! Items persisted before baselines were captured get one reconstructed by
//! dividing the stored values by the stored amount's ratio.

use std::collections::BTreeMap;

use macrolog_core::models::{LoggedItem, NutrientProfile, NutrientValues};
use tracing::debug;

use super::rounding::{sanitize, NutrientClass, RoundingPolicy};
use super::units::UnitScaler;
use crate::config::{EngineConfig, RescaleMode};

/// Scales nutrient profiles into logged items
#[derive(Debug, Clone, Default)]
pub struct ItemScaler {
    units: UnitScaler,
    rounding: RoundingPolicy,
    rescale_mode: RescaleMode,
}

impl ItemScaler {
    /// Create a scaler from explicit parts
    #[must_use]
    pub const fn new(units: UnitScaler, rounding: RoundingPolicy, rescale_mode: RescaleMode) -> Self {
        Self {
            units,
            rounding,
            rescale_mode,
        }
    }

    /// Create a scaler from engine configuration
    #[must_use]
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(
            UnitScaler::new(config.units.clone()),
            RoundingPolicy::STANDARD,
            config.rescale_mode,
        )
    }

    /// Unit scaler used by this item scaler
    #[must_use]
    pub const fn units(&self) -> &UnitScaler {
        &self.units
    }

    /// Amount pre-filled when the profile is first picked
    #[must_use]
    pub fn default_amount(&self, profile: &NutrientProfile) -> f64 {
        self.units.default_amount(profile)
    }

    /// Scale a profile to a logged amount
    #[must_use]
    pub fn scale_item(&self, profile: &NutrientProfile, amount: f64, unit: &str) -> LoggedItem {
        let amount = sanitize(amount);
        let ratio = self.units.ratio(amount, unit);
        LoggedItem {
            name: profile.name.clone(),
            amount,
            unit: unit.to_owned(),
            scaled: self.scale_values(&profile.values, ratio),
            baseline: Some(profile.values.clone()),
            category: profile.category.clone(),
            name_only: false,
        }
    }

    /// Produce a copy of `item` at a new amount in its current unit
    #[must_use]
    pub fn rescale(&self, item: &LoggedItem, new_amount: f64) -> LoggedItem {
        let new_amount = sanitize(new_amount);
        let baseline = self.baseline_of(item);
        let ratio = self.units.ratio(new_amount, &item.unit);

        let scaled = match self.rescale_mode {
            RescaleMode::Unified => self.scale_values(&baseline, ratio),
            RescaleMode::CarryMacros => NutrientValues {
                vitamins: self.scale_map(&baseline.vitamins, ratio),
                minerals: self.scale_map(&baseline.minerals, ratio),
                ..item.scaled.clone()
            },
        };

        LoggedItem {
            amount: new_amount,
            scaled,
            baseline: Some(baseline),
            ..item.clone()
        }
    }

    /// Baseline of an item, reconstructed from stored values when absent
    #[must_use]
    pub fn baseline_of(&self, item: &LoggedItem) -> NutrientValues {
        if let Some(baseline) = &item.baseline {
            return baseline.clone();
        }
        let ratio = self.units.ratio(item.amount, &item.unit);
        debug!(
            item = %item.name,
            amount = item.amount,
            unit = %item.unit,
            ratio,
            "Reconstructing missing baseline from stored values"
        );
        reconstruct_baseline(&item.scaled, ratio)
    }

    /// Multiply every scalable field by `ratio` and round per class
    #[must_use]
    pub fn scale_values(&self, baseline: &NutrientValues, ratio: f64) -> NutrientValues {
        let r = |class: NutrientClass, value: f64| self.rounding.apply(class, sanitize(value) * ratio);
        NutrientValues {
            calories: r(NutrientClass::Energy, baseline.calories),
            protein: r(NutrientClass::Macro, baseline.protein),
            fat: r(NutrientClass::Macro, baseline.fat),
            carbs: r(NutrientClass::Macro, baseline.carbs),
            fiber: r(NutrientClass::Fraction, baseline.fiber),
            soluble_fiber: r(NutrientClass::Fraction, baseline.soluble_fiber),
            insoluble_fiber: r(NutrientClass::Fraction, baseline.insoluble_fiber),
            sugar: r(NutrientClass::Fraction, baseline.sugar),
            saturated_fat: r(NutrientClass::Fraction, baseline.saturated_fat),
            medium_chain_fat: r(NutrientClass::Fraction, baseline.medium_chain_fat),
            monounsaturated_fat: r(NutrientClass::Fraction, baseline.monounsaturated_fat),
            polyunsaturated_fat: r(NutrientClass::Fraction, baseline.polyunsaturated_fat),
            diaas: baseline.diaas,
            gi: baseline.gi,
            vitamins: self.scale_map(&baseline.vitamins, ratio),
            minerals: self.scale_map(&baseline.minerals, ratio),
        }
    }

    fn scale_map(&self, baseline: &BTreeMap<String, f64>, ratio: f64) -> BTreeMap<String, f64> {
        baseline
            .iter()
            .map(|(key, value)| {
                (
                    key.clone(),
                    self.rounding
                        .apply(NutrientClass::Micronutrient, sanitize(*value) * ratio),
                )
            })
            .collect()
    }
}

/// Inverse of scaling: divide each stored value by `ratio` (zero when ratio is zero)
#[must_use]
pub fn reconstruct_baseline(scaled: &NutrientValues, ratio: f64) -> NutrientValues {
    let inv = |value: f64| {
        if ratio.abs() < f64::EPSILON {
            0.0
        } else {
            sanitize(sanitize(value) / ratio)
        }
    };
    let inv_map = |map: &BTreeMap<String, f64>| -> BTreeMap<String, f64> {
        map.iter().map(|(k, v)| (k.clone(), inv(*v))).collect()
    };
    NutrientValues {
        calories: inv(scaled.calories),
        protein: inv(scaled.protein),
        fat: inv(scaled.fat),
        carbs: inv(scaled.carbs),
        fiber: inv(scaled.fiber),
        soluble_fiber: inv(scaled.soluble_fiber),
        insoluble_fiber: inv(scaled.insoluble_fiber),
        sugar: inv(scaled.sugar),
        saturated_fat: inv(scaled.saturated_fat),
        medium_chain_fat: inv(scaled.medium_chain_fat),
        monounsaturated_fat: inv(scaled.monounsaturated_fat),
        polyunsaturated_fat: inv(scaled.polyunsaturated_fat),
        diaas: scaled.diaas,
        gi: scaled.gi,
        vitamins: inv_map(&scaled.vitamins),
        minerals: inv_map(&scaled.minerals),
    }
}
