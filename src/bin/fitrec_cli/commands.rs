// ABOUTME: Command handlers for fitrec-cli rendering text or JSON output
// ABOUTME: Converts raw profile input, runs the engine, and prints the results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitrec Project

use anyhow::Result;
use tracing::debug;

use fitrec::dataset;
use fitrec::intelligence::RecommendationEngine;
use fitrec::models::{DaySlot, ProfileInput, ScoredActivity, UserProfile, WorkoutPlan};

/// Rank activities for the profile and print them.
pub fn recommend(
    engine: &RecommendationEngine,
    input: ProfileInput,
    limit: Option<usize>,
    json: bool,
) -> Result<()> {
    debug!(?limit, json, "running recommend command");
    let profile = input.into_profile()?;
    let ranked = engine.get_recommendations(&profile, limit)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&ranked)?);
        return Ok(());
    }

    print_recommendations(engine, &profile, &ranked);
    Ok(())
}

/// Assemble the workout plan for the profile and print it.
pub fn plan(engine: &RecommendationEngine, input: ProfileInput, json: bool) -> Result<()> {
    debug!(json, "running plan command");
    let profile = input.into_profile()?;
    let plan = engine.build_plan(&profile)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    print_plan(&plan);
    Ok(())
}

/// Print the activity catalog, or its most effective entries.
pub fn activities(
    engine: &RecommendationEngine,
    top_effectiveness: Option<usize>,
    json: bool,
) -> Result<()> {
    debug!(?top_effectiveness, json, "running activities command");
    let catalog = engine.catalog();

    if let Some(n) = top_effectiveness {
        let top = catalog.top_by_effectiveness(n);
        if json {
            println!("{}", serde_json::to_string_pretty(&top)?);
            return Ok(());
        }

        println!("\nMost effective activities:");
        println!("{}", "=".repeat(72));
        for activity in top {
            println!(
                "{:<16} effectiveness {:>4.1}/10  {:>6} intensity  ~{:>3.0} min",
                activity.name,
                activity.effectiveness,
                activity.avg_intensity.display_name(),
                activity.avg_duration_minutes,
            );
        }
        return Ok(());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(catalog.activities())?);
        return Ok(());
    }

    println!("\nActivity catalog ({} activities):", catalog.len());
    println!("{}", "=".repeat(72));
    for activity in catalog.activities() {
        println!(
            "{:<16} {:>6} intensity  ~{:>3.0} min  {:>4.1} kcal/min  strength {:>2.0}/10  endurance {:>2.0}/10",
            activity.name,
            activity.avg_intensity.display_name(),
            activity.avg_duration_minutes,
            activity.avg_calories_burned,
            activity.strength_focus,
            activity.endurance_focus,
        );
    }
    Ok(())
}

fn print_recommendations(
    engine: &RecommendationEngine,
    profile: &UserProfile,
    ranked: &[ScoredActivity],
) {
    if ranked.is_empty() {
        println!("No recommendations available.");
        return;
    }

    println!(
        "\nTop activities for {} ({} strategy):",
        profile.goal.display_name(),
        engine.config().strategy.display_name()
    );
    println!("{}", "=".repeat(72));
    for (index, scored) in ranked.iter().enumerate() {
        let activity = &scored.activity;
        println!("{:>2}. {:<16} score {:>8.3}", index + 1, activity.name, scored.score);
        println!(
            "    {:.1} kcal/min, ~{:.0} min sessions, {} intensity",
            activity.avg_calories_burned,
            activity.avg_duration_minutes,
            activity.avg_intensity.display_name(),
        );
        println!(
            "    effectiveness {:.1}/10, popularity {:.1}%",
            activity.effectiveness, activity.popularity_percent,
        );
        let companions = dataset::companions_for(&activity.name);
        if !companions.is_empty() {
            println!("    pairs well with: {}", companions.join(", "));
        }
    }
}

fn print_plan(plan: &WorkoutPlan) {
    println!("\n{}", plan.title);
    println!("{}", "=".repeat(72));
    println!("{}", plan.description);
    println!();
    println!("Warmup:   {}", plan.warmup);
    println!("Workout:");
    for step in &plan.workout {
        println!("  - {step}");
    }
    println!("Cooldown: {}", plan.cool_down);
    println!();
    println!("Recommendations:");
    for item in &plan.recommendations {
        println!("  - {item}");
    }
    println!();
    println!("Weekly schedule:");
    for entry in plan.weekly_schedule.days() {
        let focus = entry.focus.display_name();
        match &entry.slot {
            DaySlot::Activity {
                name,
                duration_minutes,
                intensity,
            } => println!(
                "  {}  {focus:<8}  {name} ({duration_minutes} min, {} intensity)",
                entry.day,
                intensity.display_name()
            ),
            DaySlot::Note(note) => println!("  {}  {focus:<8}  {note}", entry.day),
        }
    }
}
