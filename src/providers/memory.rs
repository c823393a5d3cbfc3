// ABOUTME: In-memory profile and daily record stores
// ABOUTME: Ordered profile index for name matching and a DashMap-backed record store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrolog Nutrition Intelligence

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use dashmap::DashMap;
use tracing::debug;
use uuid::Uuid;

use super::core::{DailyRecordStore, ProfileStore};
use crate::errors::{AppError, AppResult};
use crate::models::{DailyRecord, NutrientProfile};

/// Profile store over a fixed list; insertion order is match order
#[derive(Debug, Clone, Default)]
pub struct InMemoryProfileStore {
    profiles: Vec<NutrientProfile>,
    by_name: HashMap<String, usize>,
}

impl InMemoryProfileStore {
    /// Build a store; later duplicates of a name replace earlier ones
    #[must_use]
    pub fn new(profiles: impl IntoIterator<Item = NutrientProfile>) -> Self {
        let mut store = Self::default();
        for profile in profiles {
            store.insert(profile);
        }
        store
    }

    /// Add or replace a profile
    pub fn insert(&mut self, profile: NutrientProfile) {
        if let Some(&position) = self.by_name.get(&profile.name) {
            self.profiles[position] = profile;
        } else {
            self.by_name.insert(profile.name.clone(), self.profiles.len());
            self.profiles.push(profile);
        }
    }

    /// Parse a JSON array of profiles
    ///
    /// # Errors
    ///
    /// Returns a serialization error when the JSON does not describe profiles
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        let profiles: Vec<NutrientProfile> = serde_json::from_str(json)?;
        Ok(Self::new(profiles))
    }

    /// Read a JSON array of profiles from a file
    ///
    /// # Errors
    ///
    /// Returns a storage error when the file cannot be read, or a
    /// serialization error when it does not describe profiles
    pub async fn from_json_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path).await.map_err(|e| {
            AppError::storage(format!("Failed to read profiles: {e}"))
                .with_resource_id(path.display().to_string())
                .with_source(e)
        })?;
        let store = Self::from_json_str(&json)?;
        debug!(path = %path.display(), profiles = store.len(), "Loaded nutrient profiles");
        Ok(store)
    }

    /// Number of profiles
    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// True when the store holds no profiles
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn get_profile(
        &self,
        name: &str,
        category: Option<&str>,
    ) -> AppResult<Option<NutrientProfile>> {
        let profile = self
            .by_name
            .get(name)
            .and_then(|&i| self.profiles.get(i))
            .filter(|p| category.is_none_or(|c| p.category.as_deref() == Some(c)));
        Ok(profile.cloned())
    }

    async fn profile_names(&self) -> AppResult<Vec<String>> {
        Ok(self.profiles.iter().map(|p| p.name.clone()).collect())
    }
}

/// Record store keyed by user and day
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecordStore {
    records: Arc<DashMap<(Uuid, NaiveDate), DailyRecord>>,
}

impl InMemoryRecordStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when no records are stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl DailyRecordStore for InMemoryRecordStore {
    async fn load_daily_record(
        &self,
        user_id: Uuid,
        date: NaiveDate,
    ) -> AppResult<Option<DailyRecord>> {
        Ok(self
            .records
            .get(&(user_id, date))
            .map(|entry| entry.value().clone()))
    }

    async fn save_daily_record(
        &self,
        user_id: Uuid,
        date: NaiveDate,
        record: &DailyRecord,
    ) -> AppResult<()> {
        self.records.insert((user_id, date), record.clone());
        Ok(())
    }
}
