// ABOUTME: Collaborator interfaces consumed by the engine at record boundaries
// ABOUTME: ProfileStore, TargetProvider, and DailyRecordStore traits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrolog Nutrition Intelligence

//! Collaborator traits.
//!
//! The engine never assumes how profiles or records are stored. Lookups and
//! persistence happen only when a directive item is completed or undone;
//! aggregation and scoring work on in-memory snapshots.
//!
//! # Example
//!
//! ```rust,no_run
//! use async_trait::async_trait;
//! use macrolog_engine::errors::AppResult;
//! use macrolog_engine::models::NutrientProfile;
//! use macrolog_engine::providers::ProfileStore;
//!
//! struct RemoteProfiles;
//!
//! #[async_trait]
//! impl ProfileStore for RemoteProfiles {
//!     async fn get_profile(
//!         &self,
//!         _name: &str,
//!         _category: Option<&str>,
//!     ) -> AppResult<Option<NutrientProfile>> {
//!         Ok(None)
//!     }
//!
//!     async fn profile_names(&self) -> AppResult<Vec<String>> {
//!         Ok(Vec::new())
//!     }
//! }
//! ```

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::errors::AppResult;
use crate::models::{DailyRecord, NutrientProfile, UserProfile, UserTargets};

/// Read access to baseline nutrient profiles
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Profile with exactly this name, optionally restricted to a category
    async fn get_profile(
        &self,
        name: &str,
        category: Option<&str>,
    ) -> AppResult<Option<NutrientProfile>>;

    /// Every profile name, in the store's preferred match order
    async fn profile_names(&self) -> AppResult<Vec<String>>;
}

/// Resolves daily targets for a user
pub trait TargetProvider: Send + Sync {
    /// Targets for the given profile
    fn targets(&self, profile: &UserProfile) -> UserTargets;
}

/// Persistence for per-day records
#[async_trait]
pub trait DailyRecordStore: Send + Sync {
    /// Record for a user and day, if one exists
    async fn load_daily_record(
        &self,
        user_id: Uuid,
        date: NaiveDate,
    ) -> AppResult<Option<DailyRecord>>;

    /// Replace the record for a user and day
    async fn save_daily_record(
        &self,
        user_id: Uuid,
        date: NaiveDate,
        record: &DailyRecord,
    ) -> AppResult<()>;
}
