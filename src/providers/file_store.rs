// ABOUTME: JSON file daily record store with one file per user and day
// ABOUTME: Async tokio::fs reads and atomic temp-file-then-rename writes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrolog Nutrition Intelligence

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::fs;
use tracing::debug;
use uuid::Uuid;

use super::core::DailyRecordStore;
use crate::errors::{AppError, AppResult};
use crate::models::DailyRecord;

/// Stores records as `<root>/<user_id>/<YYYY-MM-DD>.json`
#[derive(Debug, Clone)]
pub struct JsonFileRecordStore {
    root: PathBuf,
}

impl JsonFileRecordStore {
    /// Create a store rooted at a directory (created on first write)
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File holding a user's record for a day
    #[must_use]
    pub fn record_path(&self, user_id: Uuid, date: NaiveDate) -> PathBuf {
        self.root
            .join(user_id.to_string())
            .join(format!("{}.json", date.format("%Y-%m-%d")))
    }
}

#[async_trait]
impl DailyRecordStore for JsonFileRecordStore {
    async fn load_daily_record(
        &self,
        user_id: Uuid,
        date: NaiveDate,
    ) -> AppResult<Option<DailyRecord>> {
        let path = self.record_path(user_id, date);
        let json = match fs::read_to_string(&path).await {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(AppError::storage(format!("Failed to read daily record: {e}"))
                    .with_user_id(user_id)
                    .with_resource_id(path.display().to_string())
                    .with_source(e))
            }
        };
        let record = serde_json::from_str(&json).map_err(|e| {
            AppError::serialization(format!("Corrupt daily record: {e}"))
                .with_user_id(user_id)
                .with_resource_id(path.display().to_string())
                .with_source(e)
        })?;
        debug!(%user_id, %date, path = %path.display(), "Loaded daily record");
        Ok(Some(record))
    }

    async fn save_daily_record(
        &self,
        user_id: Uuid,
        date: NaiveDate,
        record: &DailyRecord,
    ) -> AppResult<()> {
        let path = self.record_path(user_id, date);
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).await?;
        }
        let json = serde_json::to_vec_pretty(record)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json).await?;
        fs::rename(&tmp, &path).await.map_err(|e| {
            AppError::storage(format!("Failed to persist daily record: {e}"))
                .with_user_id(user_id)
                .with_resource_id(path.display().to_string())
                .with_source(e)
        })?;
        debug!(%user_id, %date, path = %path.display(), "Saved daily record");
        Ok(())
    }
}
