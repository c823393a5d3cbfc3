// ABOUTME: Score command for macrolog-cli
// ABOUTME: Aggregates a stored daily record against user targets and prints the report and day score
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrolog Nutrition Intelligence

use std::path::Path;

use macrolog_engine::config::EngineConfig;
use macrolog_engine::errors::AppResult;
use macrolog_engine::intelligence::{DailyAggregator, DayScorer};
use macrolog_engine::models::{DailyRecord, UserTargets};
use tracing::info;

use super::read_json;
use crate::helpers::display::{display_daily_report, display_day_score};

/// Aggregate one daily record, score the day, and print both as text or JSON
pub async fn run(
    config: &EngineConfig,
    record_path: &Path,
    targets_path: Option<&Path>,
    rest_day: bool,
    json: bool,
) -> AppResult<()> {
    let record: DailyRecord = read_json(record_path).await?;
    let targets: UserTargets = match targets_path {
        Some(path) => read_json(path).await?,
        None => UserTargets::default(),
    };

    let report = DailyAggregator::from_config(config).aggregate(&record.meals, &targets);
    let day_score =
        DayScorer::from_config(config).score_day(&record, &report.intake, &targets, rest_day);
    info!(
        date = %record.date,
        meals = report.intake.meal_count,
        total = day_score.total,
        "Scored daily record"
    );

    if json {
        let output = serde_json::json!({ "report": report, "day_score": day_score });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        display_daily_report(record.date, &report);
        display_day_score(&day_score);
    }
    Ok(())
}
