// ABOUTME: Command modules for macrolog-cli plus shared config and input loading
// ABOUTME: Score and directive commands share the engine config and file readers defined here
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrolog Nutrition Intelligence

pub mod directive;
pub mod score;

use std::io::Read;
use std::path::Path;

use macrolog_engine::config::EngineConfig;
use macrolog_engine::errors::{AppError, AppResult};
use tracing::debug;

/// Engine config from an explicit file, else from `MACROLOG_CONFIG_FILE` and the environment
pub fn load_config(path: Option<&Path>) -> AppResult<EngineConfig> {
    let config = match path {
        Some(path) => {
            let config = EngineConfig::from_yaml_file(path)?;
            config.validate()?;
            config
        }
        None => EngineConfig::load()?,
    };
    debug!(rescale_mode = %config.rescale_mode, "Engine config ready");
    Ok(config)
}

/// Read a text input file; `-` reads stdin
pub async fn read_input(path: &Path) -> AppResult<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }
    tokio::fs::read_to_string(path).await.map_err(|e| {
        AppError::storage(format!("Failed to read {}: {e}", path.display()))
            .with_resource_id(path.display().to_string())
            .with_source(e)
    })
}

/// Read and deserialize a JSON input file
pub async fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> AppResult<T> {
    let text = read_input(path).await?;
    serde_json::from_str(&text).map_err(|e| {
        AppError::invalid_format(format!("Invalid JSON in {}: {e}", path.display()))
            .with_resource_id(path.display().to_string())
            .with_source(e)
    })
}
