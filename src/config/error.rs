// ABOUTME: Configuration error types for engine config loading and validation
// ABOUTME: Covers range checks, missing fields, parse failures, bad patterns, and file I/O
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrolog Nutrition Intelligence

use crate::errors::AppError;

/// Configuration validation errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Value outside acceptable range (e.g., tier thresholds out of order)
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Required configuration field is missing or empty
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Failed to parse a configuration value or file
    #[error("Parse error: {0}")]
    Parse(String),

    /// A vocabulary pattern failed to compile
    #[error("Invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// Configuration file could not be read
    #[error("Configuration file error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config(error.to_string()).with_source(error)
    }
}
