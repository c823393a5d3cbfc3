// ABOUTME: Core types and constants for the Macrolog nutrition engine
// ABOUTME: Foundation crate with error handling, nutrition and directive models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrolog Nutrition Intelligence

#![deny(unsafe_code)]

//! # Macrolog Core
//!
//! Foundation crate providing shared types and constants for the Macrolog
//! nutrition engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Engine-wide constants (rounding, GI thresholds, defaults)
//! - **models**: Nutrient profiles, logged items, meals, directives, daily records

/// Unified error handling system with standard error codes
pub mod errors;

/// Engine constants organized by domain
pub mod constants;

/// Core data models (nutrient profiles, meals, directives, daily records)
pub mod models;
