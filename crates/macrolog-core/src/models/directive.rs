// ABOUTME: Directive models for coach messages split into actionable checklist items
// ABOUTME: DirectiveItem, content-stable DirectiveItemId, and the persisted DirectiveRecord
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrolog Nutrition Intelligence

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of action a directive line asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DirectiveItemType {
    /// Eat the listed foods
    Meal,
    /// Perform the listed exercises
    Workout,
    /// Sleep a number of hours
    Sleep,
    /// Condition check-in
    Condition,
    /// Anything else; acknowledged only
    Other,
}

impl DirectiveItemType {
    /// Lowercase name used in logs and CLI output
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Meal => "meal",
            Self::Workout => "workout",
            Self::Sleep => "sleep",
            Self::Condition => "condition",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for DirectiveItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Content-stable directive item identifier
///
/// Derived from the normalized item text and its occurrence ordinal, so it
/// survives reordering of unrelated lines in the message.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DirectiveItemId(String);

impl DirectiveItemId {
    /// Wrap an already computed identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DirectiveItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One actionable line of a directive message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectiveItem {
    /// Position among the selected lines (legacy key)
    pub index: usize,
    /// Content-stable identifier
    pub id: DirectiveItemId,
    /// Line text with bullet prefix stripped
    pub text: String,
    /// Classified action type
    pub item_type: DirectiveItemType,
    /// Whether the user has completed this item
    pub completed: bool,
    /// User edit that replaces `text` when recording
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edited_text: Option<String>,
}

impl DirectiveItem {
    /// Text that recording should act on: the edit if present, else the original
    #[must_use]
    pub fn effective_text(&self) -> &str {
        self.edited_text.as_deref().unwrap_or(&self.text)
    }
}

/// Per-day directive state persisted with the daily record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectiveRecord {
    /// Raw directive message
    pub message: String,
    /// Completed items keyed by content-stable id
    #[serde(default)]
    pub completed_items: BTreeSet<DirectiveItemId>,
    /// User edits keyed by content-stable id
    #[serde(default)]
    pub edits: BTreeMap<DirectiveItemId, String>,
    /// Completion state from records that predate content-stable ids
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub legacy_completed_indices: Vec<usize>,
}

impl DirectiveRecord {
    /// Create state for a freshly received message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    /// Completion lookup: id first, then the legacy positional index
    #[must_use]
    pub fn is_completed(&self, id: &DirectiveItemId, index: usize) -> bool {
        self.completed_items.contains(id) || self.legacy_completed_indices.contains(&index)
    }

    /// Mark an item complete; returns false when it already was
    pub fn mark_completed(&mut self, id: DirectiveItemId) -> bool {
        self.completed_items.insert(id)
    }

    /// Clear completion for an item under both keys
    pub fn clear_completion(&mut self, id: &DirectiveItemId, index: usize) {
        self.completed_items.remove(id);
        self.legacy_completed_indices.retain(|i| *i != index);
    }

    /// Edit recorded for an item, if any
    #[must_use]
    pub fn edit_for(&self, id: &DirectiveItemId) -> Option<&str> {
        self.edits.get(id).map(String::as_str)
    }
}
