// ABOUTME: Helper modules for macrolog-cli
// ABOUTME: Provides text formatting for reports, items, and completion outcomes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrolog Nutrition Intelligence

pub mod display;
