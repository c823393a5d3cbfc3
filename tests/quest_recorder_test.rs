// ABOUTME: Tests for the quest recorder turning completed directive items into daily records
// ABOUTME: Covers meal/workout/condition recording, unresolved foods, edits, complete-all, undo, and carry-over
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrolog Nutrition Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::sync::Arc;

use anyhow::Result;
use chrono::{NaiveDate, NaiveTime};
use common::{all_profiles, approx, init_test_logging, profile, rice, test_date};
use macrolog_engine::config::DirectiveVocabulary;
use macrolog_engine::directives::{DirectiveParser, QuestOutcome, QuestRecorder};
use macrolog_engine::errors::ErrorCode;
use macrolog_engine::intelligence::ItemScaler;
use macrolog_engine::models::{
    DailyRecord, DirectiveItem, DirectiveItemId, DirectiveItemType, NutrientProfile,
    NutrientValues,
};
use macrolog_engine::providers::{DailyRecordStore, InMemoryProfileStore, InMemoryRecordStore};
use uuid::Uuid;

const MESSAGE: &str = "\
今日の指示です。
- 【食事1】鶏むね肉120g、ブロッコリー100g、謎の食材50g
- 【トレーニング】スクワット10回×3セット、ランニング30分
- 【睡眠】7時間
- 【体調】むくみなし
- 水を2L飲む";

struct Harness {
    recorder: QuestRecorder,
    store: Arc<InMemoryRecordStore>,
    user_id: Uuid,
    date: NaiveDate,
}

impl Harness {
    fn new() -> Self {
        Self::with_profiles(all_profiles())
    }

    fn with_profiles(profiles: Vec<NutrientProfile>) -> Self {
        init_test_logging();
        let store = Arc::new(InMemoryRecordStore::new());
        let recorder = QuestRecorder::new(
            Arc::new(DirectiveParser::new(DirectiveVocabulary::default()).unwrap()),
            ItemScaler::default(),
            Arc::new(InMemoryProfileStore::new(profiles)),
            store.clone(),
        );
        Self {
            recorder,
            store,
            user_id: Uuid::new_v4(),
            date: test_date(),
        }
    }

    async fn set(&self, message: &str) -> Result<Vec<DirectiveItem>> {
        Ok(self
            .recorder
            .set_directive(self.user_id, self.date, message)
            .await?)
    }

    async fn complete(&self, id: &DirectiveItemId) -> Result<QuestOutcome> {
        Ok(self
            .recorder
            .complete(self.user_id, self.date, id, None)
            .await?)
    }

    async fn record(&self) -> Result<DailyRecord> {
        Ok(self
            .store
            .load_daily_record(self.user_id, self.date)
            .await?
            .unwrap())
    }
}

fn id_of(items: &[DirectiveItem], item_type: DirectiveItemType) -> DirectiveItemId {
    items
        .iter()
        .find(|i| i.item_type == item_type)
        .map(|i| i.id.clone())
        .unwrap()
}

// ============================================================================
// SET AND LIST
// ============================================================================

#[tokio::test]
async fn test_set_directive_stores_message() -> Result<()> {
    let h = Harness::new();

    let items = h.set(MESSAGE).await?;

    assert_eq!(items.len(), 5);
    let record = h.record().await?;
    assert_eq!(record.directive.as_ref().unwrap().message, MESSAGE);
    assert!(record.meals.is_empty());
    assert_eq!(h.recorder.items(h.user_id, h.date).await?, items);
    Ok(())
}

#[tokio::test]
async fn test_items_without_directive_is_not_found() {
    let h = Harness::new();

    let err = h.recorder.items(h.user_id, h.date).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);

    h.store
        .save_daily_record(h.user_id, h.date, &DailyRecord::new(h.date))
        .await
        .unwrap();
    let err = h.recorder.items(h.user_id, h.date).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn test_unknown_item_is_not_found() -> Result<()> {
    let h = Harness::new();
    h.set(MESSAGE).await?;

    let err = h
        .recorder
        .complete(h.user_id, h.date, &DirectiveItemId::new("0000000000000000"), None)
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
    Ok(())
}

// ============================================================================
// COMPLETION
// ============================================================================

#[tokio::test]
async fn test_complete_meal_scales_resolved_foods() -> Result<()> {
    let h = Harness::new();
    let items = h.set(MESSAGE).await?;
    let meal_item = id_of(&items, DirectiveItemType::Meal);

    let outcome = h.complete(&meal_item).await?;

    let QuestOutcome::Meal {
        item_id,
        resolved,
        unresolved,
        ..
    } = outcome
    else {
        panic!("expected a meal outcome");
    };
    assert_eq!(item_id, meal_item);
    assert_eq!(resolved, vec!["鶏むね肉(皮なし)", "ブロッコリー"]);
    assert_eq!(unresolved, vec!["謎の食材"]);

    let record = h.record().await?;
    assert_eq!(record.meals.len(), 1);
    let meal = &record.meals[0];
    assert_eq!(meal.name.as_deref(), Some("食事1"));
    assert_eq!(meal.timestamp.time(), NaiveTime::from_hms_opt(12, 0, 0).unwrap());
    assert!(meal.source.is_directive_item(&meal_item));
    assert_eq!(meal.items.len(), 3);
    assert!(approx(meal.items[0].scaled.calories, 126.0));
    assert!(approx(meal.items[1].scaled.vitamins["vitamin_c"], 140.0));
    assert!(meal.items[2].name_only);
    assert!(approx(meal.items[2].amount, 50.0));
    assert!(meal.items[2].baseline.is_none());

    let listed = h.recorder.items(h.user_id, h.date).await?;
    assert!(listed.iter().find(|i| i.id == meal_item).unwrap().completed);
    Ok(())
}

#[tokio::test]
async fn test_complete_workout_and_condition_items() -> Result<()> {
    let h = Harness::new();
    let items = h.set(MESSAGE).await?;

    let workout = h.complete(&id_of(&items, DirectiveItemType::Workout)).await?;
    assert!(matches!(workout, QuestOutcome::Workout { exercises: 2, .. }));

    let sleep = h.complete(&id_of(&items, DirectiveItemType::Sleep)).await?;
    assert!(matches!(sleep, QuestOutcome::Condition { sleep_hours: Some(hours), .. } if approx(hours, 7.0)));

    let condition = h.complete(&id_of(&items, DirectiveItemType::Condition)).await?;
    assert!(matches!(condition, QuestOutcome::Condition { sleep_hours: None, .. }));

    let other = h.complete(&id_of(&items, DirectiveItemType::Other)).await?;
    assert!(matches!(other, QuestOutcome::Acknowledged { .. }));

    let record = h.record().await?;
    assert_eq!(record.workouts.len(), 1);
    assert_eq!(record.workouts[0].name, "トレーニング");
    assert_eq!(record.workouts[0].exercises[0].sets, Some(3));
    assert_eq!(record.conditions.len(), 2);
    assert!(approx(record.latest_sleep_hours().unwrap(), 7.0));
    assert_eq!(record.conditions[1].note.as_deref(), Some("むくみなし"));
    assert!(record.meals.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_completing_twice_records_once() -> Result<()> {
    let h = Harness::new();
    let items = h.set(MESSAGE).await?;
    let meal_item = id_of(&items, DirectiveItemType::Meal);

    h.complete(&meal_item).await?;
    let again = h.complete(&meal_item).await?;

    assert_eq!(again, QuestOutcome::AlreadyCompleted { item_id: meal_item });
    assert_eq!(h.record().await?.meals.len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_complete_with_edit_uses_edited_text() -> Result<()> {
    let h = Harness::new();
    let items = h.set(MESSAGE).await?;
    let meal_item = id_of(&items, DirectiveItemType::Meal);

    h.recorder
        .complete(h.user_id, h.date, &meal_item, Some("【食事1】鶏むね肉200g"))
        .await?;

    let record = h.record().await?;
    assert_eq!(record.meals[0].items.len(), 1);
    assert!(approx(record.meals[0].items[0].amount, 200.0));
    assert!(approx(record.meals[0].items[0].scaled.calories, 210.0));

    let listed = h.recorder.items(h.user_id, h.date).await?;
    let item = listed.iter().find(|i| i.id == meal_item).unwrap();
    assert_eq!(item.effective_text(), "【食事1】鶏むね肉200g");
    Ok(())
}

#[tokio::test]
async fn test_edit_without_completing() -> Result<()> {
    let h = Harness::new();
    let items = h.set(MESSAGE).await?;
    let sleep_item = id_of(&items, DirectiveItemType::Sleep);

    let edited = h
        .recorder
        .edit(h.user_id, h.date, &sleep_item, "【睡眠】6時間")
        .await?;
    assert!(!edited.completed);

    let outcome = h.complete(&sleep_item).await?;
    assert!(matches!(outcome, QuestOutcome::Condition { sleep_hours: Some(hours), .. } if approx(hours, 6.0)));
    Ok(())
}

#[tokio::test]
async fn test_egg_grams_become_pieces() -> Result<()> {
    let h = Harness::new();
    let items = h.set("- 【朝食】卵128g、卵20g").await?;

    h.complete(&items[0].id).await?;

    let meal = &h.record().await?.meals[0];
    // Parser converts 128 g to 2 pieces
    assert_eq!(meal.items[0].unit, "個");
    assert!(approx(meal.items[0].scaled.calories, 182.0));
    // Too small to round to a piece; converted through the serving size
    assert!(approx(meal.items[1].amount, 20.0 / 64.0));
    assert!(approx(meal.items[1].scaled.calories, 28.0));
    Ok(())
}

fn apple() -> NutrientProfile {
    NutrientProfile {
        serving_size: Some(250.0),
        serving_unit: Some("g".to_owned()),
        ..profile(
            "りんご",
            "g",
            NutrientValues {
                calories: 54.0,
                carbs: 14.6,
                fiber: 1.5,
                ..NutrientValues::default()
            },
        )
    }
}

fn whole_egg_per_100g() -> NutrientProfile {
    profile(
        "全卵",
        "g",
        NutrientValues {
            calories: 142.0,
            protein: 12.2,
            ..NutrientValues::default()
        },
    )
}

#[tokio::test]
async fn test_kilograms_are_recorded_as_grams() -> Result<()> {
    let h = Harness::with_profiles(vec![rice()]);
    let items = h.set("- 【食事1】白米1kg、白米0.5ＫＧ").await?;

    h.complete(&items[0].id).await?;

    let meal = &h.record().await?.meals[0];
    assert_eq!(meal.items[0].unit, "g");
    assert!(approx(meal.items[0].amount, 1000.0));
    assert!(approx(meal.items[0].scaled.calories, 1560.0));
    assert!(approx(meal.items[1].amount, 500.0));
    assert!(approx(meal.items[1].scaled.calories, 780.0));
    Ok(())
}

#[tokio::test]
async fn test_pieces_on_per_100g_profile_use_serving_size() -> Result<()> {
    let h = Harness::with_profiles(vec![apple(), whole_egg_per_100g()]);
    let items = h.set("- 【間食】りんご1個、全卵2個").await?;

    h.complete(&items[0].id).await?;

    let meal = &h.record().await?.meals[0];
    assert_eq!(meal.items[0].name, "りんご");
    assert_eq!(meal.items[0].unit, "g");
    assert!(approx(meal.items[0].amount, 250.0));
    assert!(approx(meal.items[0].scaled.calories, 135.0));
    // No serving size: the egg conversion rule supplies 64 g per piece
    assert!(approx(meal.items[1].amount, 128.0));
    assert!(approx(meal.items[1].scaled.calories, 182.0));
    Ok(())
}

#[tokio::test]
async fn test_post_workout_meal_flag() -> Result<()> {
    let h = Harness::new();
    let items = h.set("- 【補食】トレ後 白米200g\n- 【夕食】白米150g").await?;

    let post = h
        .recorder
        .build_meal(&items[0], h.date)
        .await?
        .0;
    let regular = h
        .recorder
        .build_meal(&items[1], h.date)
        .await?
        .0;

    assert!(post.flags.is_post_workout);
    assert!(!regular.flags.is_post_workout);
    // build_meal does not persist
    assert!(h.record().await?.meals.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_record_time_from_text() -> Result<()> {
    let h = Harness::new();
    let items = h.set("- 【食事2】18:45 白米150g").await?;

    h.complete(&items[0].id).await?;

    let meal = &h.record().await?.meals[0];
    assert_eq!(meal.timestamp.time(), NaiveTime::from_hms_opt(18, 45, 0).unwrap());
    assert_eq!(meal.items.len(), 1);
    Ok(())
}

// ============================================================================
// COMPLETE ALL AND UNDO
// ============================================================================

#[tokio::test]
async fn test_complete_all_skips_completed_and_other() -> Result<()> {
    let h = Harness::new();
    let items = h.set(MESSAGE).await?;
    h.complete(&id_of(&items, DirectiveItemType::Meal)).await?;

    let outcomes = h.recorder.complete_all(h.user_id, h.date).await?;

    assert_eq!(outcomes.len(), 3);
    assert!(matches!(outcomes[0], QuestOutcome::Workout { .. }));
    assert!(matches!(outcomes[1], QuestOutcome::Condition { .. }));
    assert!(matches!(outcomes[2], QuestOutcome::Condition { .. }));

    let record = h.record().await?;
    assert_eq!(record.meals.len(), 1);
    assert_eq!(record.workouts.len(), 1);
    assert_eq!(record.conditions.len(), 2);

    let listed = h.recorder.items(h.user_id, h.date).await?;
    let open: Vec<_> = listed.iter().filter(|i| !i.completed).collect();
    assert_eq!(open.len(), 1);
    assert_eq!(open[0].item_type, DirectiveItemType::Other);
    Ok(())
}

#[tokio::test]
async fn test_undo_removes_exactly_the_items_records() -> Result<()> {
    let h = Harness::new();
    let items = h.set(MESSAGE).await?;
    let meal_item = id_of(&items, DirectiveItemType::Meal);
    let workout_item = id_of(&items, DirectiveItemType::Workout);
    h.complete(&meal_item).await?;
    h.complete(&workout_item).await?;

    let removed = h.recorder.undo(h.user_id, h.date, &meal_item).await?;

    assert_eq!(removed, 1);
    let record = h.record().await?;
    assert!(record.meals.is_empty());
    assert_eq!(record.workouts.len(), 1);

    let listed = h.recorder.items(h.user_id, h.date).await?;
    assert!(!listed.iter().find(|i| i.id == meal_item).unwrap().completed);
    assert!(listed.iter().find(|i| i.id == workout_item).unwrap().completed);

    // Completing again records a fresh meal
    assert!(matches!(h.complete(&meal_item).await?, QuestOutcome::Meal { .. }));
    assert_eq!(h.record().await?.meals.len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_undo_of_open_item_removes_nothing() -> Result<()> {
    let h = Harness::new();
    let items = h.set(MESSAGE).await?;

    let removed = h
        .recorder
        .undo(h.user_id, h.date, &id_of(&items, DirectiveItemType::Sleep))
        .await?;
    assert_eq!(removed, 0);
    Ok(())
}

// ============================================================================
// MESSAGE REPLACEMENT
// ============================================================================

#[tokio::test]
async fn test_changed_message_carries_completion_by_content() -> Result<()> {
    let h = Harness::new();
    let items = h.set(MESSAGE).await?;
    let meal_item = id_of(&items, DirectiveItemType::Meal);
    let sleep_item = id_of(&items, DirectiveItemType::Sleep);
    h.complete(&meal_item).await?;
    h.complete(&sleep_item).await?;

    let updated = MESSAGE.replace("7時間", "8時間");
    let reparsed = h.set(&updated).await?;

    let meal = reparsed.iter().find(|i| i.id == meal_item).unwrap();
    assert!(meal.completed);
    let sleep = reparsed
        .iter()
        .find(|i| i.item_type == DirectiveItemType::Sleep)
        .unwrap();
    assert_ne!(sleep.id, sleep_item);
    assert!(!sleep.completed);

    // Records already produced are kept
    assert_eq!(h.record().await?.meals.len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_same_message_keeps_state() -> Result<()> {
    let h = Harness::new();
    let items = h.set(MESSAGE).await?;
    let meal_item = id_of(&items, DirectiveItemType::Meal);
    h.recorder
        .complete(h.user_id, h.date, &meal_item, Some("【食事1】白米100g"))
        .await?;

    let again = h.set(MESSAGE).await?;

    let meal = again.iter().find(|i| i.id == meal_item).unwrap();
    assert!(meal.completed);
    assert_eq!(meal.edited_text.as_deref(), Some("【食事1】白米100g"));
    Ok(())
}
