// ABOUTME: Directive commands for macrolog-cli
// ABOUTME: Parse preview plus set, list, complete, complete-all, and undo over the JSON record store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrolog Nutrition Intelligence

use std::path::Path;
use std::sync::Arc;

use chrono::NaiveDate;
use macrolog_engine::config::EngineConfig;
use macrolog_engine::directives::{DirectiveParser, QuestRecorder};
use macrolog_engine::errors::AppResult;
use macrolog_engine::intelligence::ItemScaler;
use macrolog_engine::models::{DirectiveItemId, DirectiveItemType};
use macrolog_engine::providers::{InMemoryProfileStore, JsonFileRecordStore};
use tracing::info;
use uuid::Uuid;

use super::read_input;
use crate::helpers::display::{display_items, display_outcome};

/// Print the items a message parses into, with their meal and workout breakdowns
pub async fn parse(config: &EngineConfig, message_path: &Path) -> AppResult<()> {
    let message = read_input(message_path).await?;
    let parser = DirectiveParser::from_config(config)?;
    let items = parser.parse(&message);
    display_items(&items);

    for item in &items {
        match item.item_type {
            DirectiveItemType::Meal => {
                for food in parser.parse_meal(&item.text) {
                    println!("  [{}] food: {} {} {}", item.id, food.name, food.amount, food.unit);
                }
            }
            DirectiveItemType::Workout => {
                for exercise in parser.parse_workout(&item.text) {
                    println!(
                        "  [{}] exercise: {} reps={:?} sets={:?} minutes={:?}",
                        item.id, exercise.name, exercise.reps, exercise.sets, exercise.duration_minutes
                    );
                }
            }
            DirectiveItemType::Sleep => {
                println!("  [{}] sleep: {}h", item.id, parser.parse_sleep_hours(&item.text));
            }
            DirectiveItemType::Condition | DirectiveItemType::Other => {}
        }
    }
    Ok(())
}

/// Store the day's message
pub async fn set(
    config: &EngineConfig,
    store_dir: &Path,
    user_id: Uuid,
    date: NaiveDate,
    message_path: &Path,
) -> AppResult<()> {
    let message = read_input(message_path).await?;
    let recorder = recorder(config, store_dir, InMemoryProfileStore::default())?;
    let items = recorder.set_directive(user_id, date, &message).await?;
    display_items(&items);
    Ok(())
}

/// List the day's items
pub async fn list(
    config: &EngineConfig,
    store_dir: &Path,
    user_id: Uuid,
    date: NaiveDate,
) -> AppResult<()> {
    let recorder = recorder(config, store_dir, InMemoryProfileStore::default())?;
    display_items(&recorder.items(user_id, date).await?);
    Ok(())
}

/// Complete one item
pub async fn complete(
    config: &EngineConfig,
    store_dir: &Path,
    profiles_path: &Path,
    user_id: Uuid,
    date: NaiveDate,
    item: &str,
    edit: Option<&str>,
) -> AppResult<()> {
    let profiles = InMemoryProfileStore::from_json_file(profiles_path).await?;
    let recorder = recorder(config, store_dir, profiles)?;
    let outcome = recorder
        .complete(user_id, date, &DirectiveItemId::new(item), edit)
        .await?;
    display_outcome(&outcome);
    Ok(())
}

/// Complete every open item
pub async fn complete_all(
    config: &EngineConfig,
    store_dir: &Path,
    profiles_path: &Path,
    user_id: Uuid,
    date: NaiveDate,
) -> AppResult<()> {
    let profiles = InMemoryProfileStore::from_json_file(profiles_path).await?;
    let recorder = recorder(config, store_dir, profiles)?;
    let outcomes = recorder.complete_all(user_id, date).await?;
    for outcome in &outcomes {
        display_outcome(outcome);
    }
    info!(completed = outcomes.len(), "Completed open directive items");
    Ok(())
}

/// Undo one item
pub async fn undo(
    config: &EngineConfig,
    store_dir: &Path,
    user_id: Uuid,
    date: NaiveDate,
    item: &str,
) -> AppResult<()> {
    let recorder = recorder(config, store_dir, InMemoryProfileStore::default())?;
    let removed = recorder
        .undo(user_id, date, &DirectiveItemId::new(item))
        .await?;
    println!("Removed {removed} record(s) created by {item}");
    Ok(())
}

fn recorder(
    config: &EngineConfig,
    store_dir: &Path,
    profiles: InMemoryProfileStore,
) -> AppResult<QuestRecorder> {
    Ok(QuestRecorder::new(
        Arc::new(DirectiveParser::from_config(config)?),
        ItemScaler::from_config(config),
        Arc::new(profiles),
        Arc::new(JsonFileRecordStore::new(store_dir)),
    ))
}
