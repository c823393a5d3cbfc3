// ABOUTME: Collaborator interfaces and their bundled implementations
// ABOUTME: Profile lookup, target resolution, and daily record persistence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrolog Nutrition Intelligence

/// Collaborator traits
pub mod core;
/// JSON file record store
pub mod file_store;
/// In-memory profile and record stores
pub mod memory;
/// Reference target provider
pub mod targets;

pub use self::core::{DailyRecordStore, ProfileStore, TargetProvider};
pub use file_store::JsonFileRecordStore;
pub use memory::{InMemoryProfileStore, InMemoryRecordStore};
pub use targets::StandardTargetProvider;
