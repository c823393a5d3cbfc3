// ABOUTME: Output formatting helpers for macrolog-cli
// ABOUTME: Renders daily reports, day scores, directive item lists, and completion outcomes as text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrolog Nutrition Intelligence

use chrono::NaiveDate;
use macrolog_engine::directives::QuestOutcome;
use macrolog_engine::intelligence::{DailyReport, DayScore};
use macrolog_engine::models::DirectiveItem;

/// Display a daily report with totals and star ratings
pub fn display_daily_report(date: NaiveDate, report: &DailyReport) {
    let intake = &report.intake;
    let totals = &intake.totals;
    let scores = &intake.scores;

    println!("\nDaily intake for {date} ({} meals)", intake.meal_count);
    println!("{}", "=".repeat(60));
    println!(
        "   Energy: {:.0} kcal   P {:.1} g   F {:.1} g   C {:.1} g",
        totals.calories, totals.protein, totals.fat, totals.carbs
    );
    println!(
        "   Fiber: {:.1} g (soluble {:.1}, insoluble {:.1})",
        intake.fiber.total, intake.fiber.soluble, intake.fiber.insoluble
    );
    if let Some(ratio) = intake.fiber.carb_to_fiber_ratio {
        println!("   Carb:fiber ratio: {ratio:.1}");
    }
    println!(
        "   GI split: high {:.1} g ({:.0}%), low {:.1} g ({:.0}%)",
        intake.gi_split.high_gi_carbs,
        intake.gi_split.high_gi_percent,
        intake.gi_split.low_gi_carbs,
        intake.gi_split.low_gi_percent
    );

    println!("\nQuality scores");
    println!("{}", "-".repeat(60));
    println!(
        "   Protein quality:   DIAAS {:.2} over {:.1} g",
        scores.protein_quality.average_diaas, scores.protein_quality.scored_protein_g
    );
    println!(
        "   Fatty acids:       {}  SFA {:.0}%  MUFA {:.0}%  PUFA {:.0}%  MCT {:.0}%",
        scores.fatty_acid_balance.rating,
        scores.fatty_acid_balance.saturated_percent,
        scores.fatty_acid_balance.monounsaturated_percent,
        scores.fatty_acid_balance.polyunsaturated_percent,
        scores.fatty_acid_balance.medium_chain_percent
    );
    println!(
        "   Fiber balance:     {}  fiber share {:.1}%",
        scores.fiber_balance.rating, scores.fiber_balance.fiber_share_percent
    );
    println!(
        "   Blood sugar:       {}  GL {:.1} / limit {:.0} (raw {:.1})",
        scores.glycemic.rating,
        scores.glycemic.adjusted_daily_gl,
        scores.glycemic.limits.daily_dynamic,
        scores.glycemic.total_gl
    );

    if !report.meal_gl.is_empty() {
        println!("\nMeal GL (meal limit {:.0}, absolute {:.0})", scores.glycemic.limits.meal_dynamic, scores.glycemic.limits.meal_absolute);
        println!("{}", "-".repeat(60));
        for entry in &report.meal_gl {
            println!(
                "   {}  raw {:.1} → {:.1} (-{:.1}%)  {}",
                entry.meal_id,
                entry.raw_gl,
                entry.adjusted_gl,
                entry.reduction_percent,
                entry.rating.label()
            );
        }
    }

    let macros = &scores.macro_completion;
    println!("\nMacro completion");
    println!("{}", "-".repeat(60));
    println!(
        "   kcal {:.0}%  P {:.0}%  F {:.0}%  C {:.0}%",
        macros.calories * 100.0,
        macros.protein * 100.0,
        macros.fat * 100.0,
        macros.carbs * 100.0
    );
}

/// Display the composite day score and its components
pub fn display_day_score(score: &DayScore) {
    let food = &score.food;
    let exercise = &score.exercise;
    let condition = &score.condition;

    println!("\nDay score: {}", score.total);
    println!("{}", "-".repeat(60));
    println!(
        "   Food {:>3}   kcal {} P {} F {} C {}  DIAAS {} FA {} GL {} fiber {} vit {} min {}",
        food.score,
        food.calories,
        food.protein,
        food.fat,
        food.carbs,
        food.diaas,
        food.fatty_acid,
        food.glycemic_load,
        food.fiber,
        food.vitamins,
        food.minerals
    );
    println!(
        "   Exercise {:>3}   {} min ({}), {} sets ({})",
        exercise.score, exercise.total_minutes, exercise.duration, exercise.total_sets, exercise.sets
    );
    println!(
        "   Condition {:>3}   sleep {} quality {} digestion {} focus {} stress {}",
        condition.score,
        condition.sleep_hours,
        condition.sleep_quality,
        condition.digestion,
        condition.focus,
        condition.stress
    );
}

/// Display directive items one per line
pub fn display_items(items: &[DirectiveItem]) {
    if items.is_empty() {
        println!("No directive items.");
        return;
    }
    for item in items {
        let mark = if item.completed { "[x]" } else { "[ ]" };
        println!(
            "{mark} {:>2} {} {:<9} {}",
            item.index,
            item.id,
            item.item_type.as_str(),
            item.effective_text()
        );
    }
}

/// Display the result of completing one item
pub fn display_outcome(outcome: &QuestOutcome) {
    match outcome {
        QuestOutcome::Meal {
            item_id,
            meal_id,
            resolved,
            unresolved,
        } => {
            println!("{item_id}: meal {meal_id} with {} food(s)", resolved.len() + unresolved.len());
            if !unresolved.is_empty() {
                println!("   No profile for: {}", unresolved.join(", "));
            }
        }
        QuestOutcome::Workout {
            item_id,
            workout_id,
            exercises,
        } => println!("{item_id}: workout {workout_id} with {exercises} exercise(s)"),
        QuestOutcome::Condition {
            item_id,
            condition_id,
            sleep_hours,
        } => match sleep_hours {
            Some(hours) => println!("{item_id}: condition {condition_id}, sleep {hours}h"),
            None => println!("{item_id}: condition {condition_id}"),
        },
        QuestOutcome::Acknowledged { item_id } => println!("{item_id}: acknowledged"),
        QuestOutcome::AlreadyCompleted { item_id } => println!("{item_id}: already completed"),
    }
}
