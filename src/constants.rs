// ABOUTME: Engine constants re-exported from macrolog-core
// ABOUTME: Rounding precision, scaling references, glycemic defaults, and directive defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrolog Nutrition Intelligence

pub use macrolog_core::constants::*;
