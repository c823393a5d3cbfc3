// ABOUTME: Star rating value type shared by every quality score
// ABOUTME: Maps 2/3/4/5 stars to a label and renders the star glyph string
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrolog Nutrition Intelligence

use std::fmt;

use serde::{Deserialize, Serialize};

/// Verbal grade attached to a star count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatingLabel {
    /// Two stars
    NeedsImprovement,
    /// Three stars
    Fair,
    /// Four stars
    Good,
    /// Five stars
    Excellent,
}

/// Star rating on a five-star scale
///
/// Scores never go below two stars; a missing signal is reported as
/// needs-improvement rather than zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StarRating {
    /// Number of filled stars (2..=5)
    pub stars: u8,
    /// Verbal grade
    pub label: RatingLabel,
}

impl StarRating {
    /// Two stars
    pub const NEEDS_IMPROVEMENT: Self = Self {
        stars: 2,
        label: RatingLabel::NeedsImprovement,
    };
    /// Three stars
    pub const FAIR: Self = Self {
        stars: 3,
        label: RatingLabel::Fair,
    };
    /// Four stars
    pub const GOOD: Self = Self {
        stars: 4,
        label: RatingLabel::Good,
    };
    /// Five stars
    pub const EXCELLENT: Self = Self {
        stars: 5,
        label: RatingLabel::Excellent,
    };

    /// Render as filled and empty star glyphs, e.g. `★★★★☆`
    #[must_use]
    pub fn glyphs(&self) -> String {
        let filled = usize::from(self.stars.min(5));
        format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
    }
}

impl fmt::Display for StarRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.glyphs())
    }
}
