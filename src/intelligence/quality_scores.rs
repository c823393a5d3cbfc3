// ABOUTME: Daily quality scores for protein quality, fatty-acid balance, and fiber balance
// ABOUTME: Also computes macro and micronutrient completion ratios against user targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrolog Nutrition Intelligence

use std::collections::BTreeMap;

use macrolog_core::models::{LoggedItem, NutrientValues, StarRating, UserTargets};
use serde::{Deserialize, Serialize};

use super::rounding::sanitize;
use crate::config::QualityScoreConfig;

/// Protein quality: protein-weighted average DIAAS
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ProteinQuality {
    /// `Σ(diaas * protein) / Σ protein` over qualifying items; 0 when none
    pub average_diaas: f64,
    /// Protein grams that carried a DIAAS value
    pub scored_protein_g: f64,
}

/// Fatty-acid balance score with the four fraction shares in percent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FattyAcidScore {
    /// Saturated share
    pub saturated_percent: f64,
    /// Medium-chain share
    pub medium_chain_percent: f64,
    /// Monounsaturated share
    pub monounsaturated_percent: f64,
    /// Polyunsaturated share
    pub polyunsaturated_percent: f64,
    /// Star rating
    pub rating: StarRating,
}

/// Carbohydrate/fiber balance score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FiberBalanceScore {
    /// Fiber share of (carbs + fiber) in percent
    pub fiber_share_percent: f64,
    /// Star rating
    pub rating: StarRating,
}

/// Intake / target ratios for the four macros; 0 when the target is missing
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroCompletion {
    /// Calories
    pub calories: f64,
    /// Protein
    pub protein: f64,
    /// Fat
    pub fat: f64,
    /// Carbohydrates
    pub carbs: f64,
}

/// Intake / target ratios per vitamin and mineral in the targets
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MicronutrientCompletion {
    /// Vitamin ratios
    pub vitamins: BTreeMap<String, f64>,
    /// Mineral ratios
    pub minerals: BTreeMap<String, f64>,
}

/// Pure scoring functions over aggregated intake
#[derive(Debug, Clone, Copy, Default)]
pub struct QualityScorer {
    config: QualityScoreConfig,
}

impl QualityScorer {
    /// Create a scorer from thresholds
    #[must_use]
    pub const fn new(config: QualityScoreConfig) -> Self {
        Self { config }
    }

    /// Protein-weighted DIAAS over items with a DIAAS and positive protein
    #[must_use]
    pub fn protein_quality<'a, I>(&self, items: I) -> ProteinQuality
    where
        I: IntoIterator<Item = &'a LoggedItem>,
    {
        let (weighted, protein) = items
            .into_iter()
            .filter_map(|item| {
                let diaas = item
                    .scaled
                    .diaas
                    .or_else(|| item.baseline.as_ref().and_then(|b| b.diaas))
                    .filter(|d| d.is_finite())?;
                let protein = sanitize(item.scaled.protein);
                (protein > 0.0).then_some((diaas, protein))
            })
            .fold((0.0, 0.0), |(w, p), (diaas, protein)| {
                (w + diaas * protein, p + protein)
            });

        ProteinQuality {
            average_diaas: if protein > 0.0 { weighted / protein } else { 0.0 },
            scored_protein_g: protein,
        }
    }

    /// Fatty-acid balance from fraction shares
    #[must_use]
    pub fn fatty_acid_balance(&self, totals: &NutrientValues) -> FattyAcidScore {
        let total = totals.fatty_acid_total();
        if total <= 0.0 {
            return FattyAcidScore {
                saturated_percent: 0.0,
                medium_chain_percent: 0.0,
                monounsaturated_percent: 0.0,
                polyunsaturated_percent: 0.0,
                rating: StarRating::NEEDS_IMPROVEMENT,
            };
        }
        let share = |grams: f64| grams / total * 100.0;
        let saturated = share(totals.saturated_fat);
        let mono = share(totals.monounsaturated_fat);

        let bands = &self.config.fatty_acid;
        let rating = if !bands.saturated_outer.contains(saturated)
            || !bands.monounsaturated_outer.contains(mono)
        {
            StarRating::NEEDS_IMPROVEMENT
        } else if !bands.saturated_inner.contains(saturated)
            || !bands.monounsaturated_inner.contains(mono)
        {
            StarRating::GOOD
        } else {
            StarRating::EXCELLENT
        };

        FattyAcidScore {
            saturated_percent: saturated,
            medium_chain_percent: share(totals.medium_chain_fat),
            monounsaturated_percent: mono,
            polyunsaturated_percent: share(totals.polyunsaturated_fat),
            rating,
        }
    }

    /// Fiber share of carbohydrate plus fiber
    #[must_use]
    pub fn fiber_balance(&self, totals: &NutrientValues) -> FiberBalanceScore {
        let total = totals.carbs + totals.fiber;
        if total <= 0.0 {
            return FiberBalanceScore {
                fiber_share_percent: 0.0,
                rating: StarRating::NEEDS_IMPROVEMENT,
            };
        }
        let share = totals.fiber / total * 100.0;
        let thresholds = &self.config.fiber_share;
        let rating = if share < thresholds.needs_improvement_below {
            StarRating::NEEDS_IMPROVEMENT
        } else if share < thresholds.good_below {
            StarRating::GOOD
        } else {
            StarRating::EXCELLENT
        };
        FiberBalanceScore {
            fiber_share_percent: share,
            rating,
        }
    }

    /// Macro intake relative to targets
    #[must_use]
    pub fn macro_completion(&self, totals: &NutrientValues, targets: &UserTargets) -> MacroCompletion {
        let t = &targets.macros;
        MacroCompletion {
            calories: completion(totals.calories, t.calories),
            protein: completion(totals.protein, t.protein),
            fat: completion(totals.fat, t.fat),
            carbs: completion(totals.carbs, t.carbs),
        }
    }

    /// Vitamin and mineral intake relative to targets, one entry per target key
    #[must_use]
    pub fn micronutrient_completion(
        &self,
        totals: &NutrientValues,
        targets: &UserTargets,
    ) -> MicronutrientCompletion {
        let ratios = |intake: &BTreeMap<String, f64>, goals: &BTreeMap<String, f64>| {
            goals
                .iter()
                .map(|(key, target)| {
                    let value = intake.get(key).copied().unwrap_or(0.0);
                    (key.clone(), completion(value, *target))
                })
                .collect()
        };
        MicronutrientCompletion {
            vitamins: ratios(&totals.vitamins, &targets.micronutrients.vitamins),
            minerals: ratios(&totals.minerals, &targets.micronutrients.minerals),
        }
    }
}

/// `intake / target`, or 0 when the target is not positive
fn completion(intake: f64, target: f64) -> f64 {
    let target = sanitize(target);
    if target > 0.0 {
        sanitize(intake) / target
    } else {
        0.0
    }
}
