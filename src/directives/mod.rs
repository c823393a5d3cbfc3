// ABOUTME: Natural-language directive pipeline from coach message to persisted records
// ABOUTME: Parser, profile name matching, and the quest recorder
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrolog Nutrition Intelligence

//! # Directives
//!
//! ```text
//! message → DirectiveParser → DirectiveItem[] → (user completes) → QuestRecorder
//!         → ProfileStore lookup → ItemScaler → Meal / Workout / Condition record
//! ```

/// Food-name cleanup and profile matching
pub mod matching;
/// Message and line parsing
pub mod parser;
/// Completion replay into records
pub mod recorder;

pub use matching::{best_match, clean_food_name, normalize_for_search};
pub use parser::{item_id, DirectiveParser, ParsedFood};
pub use recorder::{QuestOutcome, QuestRecorder};
