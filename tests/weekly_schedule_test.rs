// ABOUTME: Integration tests for day-type classification and weekly schedule blending
// ABOUTME: Validates the fixed week layout and the highest-ranked-per-type selection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitrec Project

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::Weekday;
use fitrec::dataset::ActivityCatalog;
use fitrec::intelligence::schedule::{build_weekly_schedule, classify_activity, DayType};
use fitrec::models::{DaySlot, ScoredActivity};

fn scored(name: &str, score: f64) -> ScoredActivity {
    ScoredActivity {
        activity: ActivityCatalog::builtin()
            .get(name)
            .cloned()
            .expect("builtin activity"),
        score,
    }
}

fn slot_name(slot: Option<&DaySlot>) -> &str {
    match slot {
        Some(DaySlot::Activity { name, .. }) => name,
        _ => panic!("expected an activity slot"),
    }
}

#[test]
fn test_every_builtin_activity_has_a_day_type() {
    let catalog = ActivityCatalog::builtin();
    for activity in catalog.activities() {
        assert!(
            classify_activity(&activity.name).is_some(),
            "{} is unclassified",
            activity.name
        );
    }
}

#[test]
fn test_classification_spot_checks() {
    assert_eq!(classify_activity("Running"), Some(DayType::Cardio));
    assert_eq!(classify_activity("Swimming"), Some(DayType::Cardio));
    assert_eq!(classify_activity("Weight Training"), Some(DayType::Strength));
    assert_eq!(classify_activity("Tennis"), Some(DayType::Strength));
    assert_eq!(classify_activity("Yoga"), Some(DayType::Recovery));
    assert_eq!(classify_activity("Curling"), None);
}

#[test]
fn test_week_layout_alternates_cardio_and_strength() {
    let ranked = vec![
        scored("Running", 0.9),
        scored("Weight Training", 0.8),
        scored("Walking", 0.7),
    ];
    let schedule = build_weekly_schedule(&ranked);

    for day in [Weekday::Mon, Weekday::Wed, Weekday::Fri] {
        assert_eq!(slot_name(schedule.get(day)), "Running");
    }
    for day in [Weekday::Tue, Weekday::Thu] {
        assert_eq!(slot_name(schedule.get(day)), "Weight Training");
    }
    for day in [Weekday::Sat, Weekday::Sun] {
        assert_eq!(slot_name(schedule.get(day)), "Walking");
    }
}

#[test]
fn test_each_day_carries_its_layout_focus() {
    let schedule = build_weekly_schedule(&[scored("Running", 0.9)]);
    let focuses: Vec<DayType> = schedule.days().iter().map(|entry| entry.focus).collect();
    assert_eq!(
        focuses,
        vec![
            DayType::Cardio,
            DayType::Strength,
            DayType::Cardio,
            DayType::Strength,
            DayType::Cardio,
            DayType::Recovery,
            DayType::Recovery,
        ]
    );
}

#[test]
fn test_higher_ranked_activity_wins_its_type() {
    // Both are cardio; Cycling outranks Running here, so every cardio day
    // takes Cycling.
    let ranked = vec![scored("Cycling", 0.95), scored("Running", 0.9)];
    let schedule = build_weekly_schedule(&ranked);
    assert_eq!(slot_name(schedule.get(Weekday::Mon)), "Cycling");
    assert_eq!(slot_name(schedule.get(Weekday::Fri)), "Cycling");
}

#[test]
fn test_day_slot_duration_is_rounded_catalog_average() {
    let ranked = vec![scored("Running", 0.9)];
    let schedule = build_weekly_schedule(&ranked);
    // Running averages 68.3 minutes.
    assert_eq!(
        schedule.get(Weekday::Mon),
        Some(&DaySlot::Activity {
            name: "Running".into(),
            duration_minutes: 68,
            intensity: fitrec::models::IntensityLevel::High,
        })
    );
}

#[test]
fn test_missing_day_type_falls_back_to_top_ranked() {
    // Nothing classified as strength or recovery: every day takes the top
    // cardio pick rather than going empty.
    let ranked = vec![scored("HIIT", 0.9)];
    let schedule = build_weekly_schedule(&ranked);
    for entry in schedule.days() {
        assert_eq!(slot_name(Some(&entry.slot)), "HIIT");
    }
}

#[test]
fn test_empty_ranking_produces_rest_notes() {
    let schedule = build_weekly_schedule(&[]);
    assert_eq!(schedule.days().len(), 7);
    for entry in schedule.days() {
        assert_eq!(entry.slot, DaySlot::Note("Rest day".into()));
    }
}

#[test]
fn test_schedule_days_are_ordered_monday_first() {
    let schedule = build_weekly_schedule(&[scored("Yoga", 0.5)]);
    let days: Vec<Weekday> = schedule.days().iter().map(|entry| entry.day).collect();
    assert_eq!(
        days,
        vec![
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun
        ]
    );
}
