// ABOUTME: Re-exports error types from macrolog-core for unified type identity
// ABOUTME: Ensures AppError/AppResult are the same type across the engine and core crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrolog Nutrition Intelligence

pub use macrolog_core::errors::*;
