// ABOUTME: Unit vocabulary configuration for count versus mass/volume classification
// ABOUTME: Holds the locale-specific list of discrete serving units
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrolog Nutrition Intelligence

use serde::{Deserialize, Serialize};

/// Count-unit vocabulary
///
/// A unit is a count unit when it contains any of these tokens. Anything
/// else is treated as grams or milliliters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitVocabulary {
    /// Discrete serving units (piece, bottle, cup, slice, tablet, ...)
    pub count_units: Vec<String>,
}

impl Default for UnitVocabulary {
    fn default() -> Self {
        Self {
            count_units: [
                "個", "本", "杯", "枚", "錠", "包", "粒", "切れ", "piece", "bottle", "cup", "slice",
                "tablet", "scoop", "pack",
            ]
            .into_iter()
            .map(str::to_owned)
            .collect(),
        }
    }
}

impl UnitVocabulary {
    /// Build a vocabulary from an explicit token list
    #[must_use]
    pub fn with_units<I, S>(units: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            count_units: units.into_iter().map(Into::into).collect(),
        }
    }

    /// Check whether a unit string names a discrete serving unit
    #[must_use]
    pub fn is_count_unit(&self, unit: &str) -> bool {
        let unit = unit.trim().to_lowercase();
        if unit.is_empty() {
            return false;
        }
        self.count_units
            .iter()
            .filter(|token| !token.is_empty())
            .any(|token| unit.contains(&token.to_lowercase()))
    }
}
