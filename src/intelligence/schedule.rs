// ABOUTME: Day-type classification and weekly schedule blending from ranked activities
// ABOUTME: Weekdays alternate cardio and strength, weekends hold recovery slots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitrec Project

use chrono::Weekday;
use tracing::debug;

pub use crate::models::DayType;
use crate::models::{DaySlot, ScheduledDay, ScoredActivity, WeeklySchedule};

/// Canonical day type per activity. Each activity has exactly one type;
/// Swimming counts as cardio.
const DAY_TYPE_TABLE: &[(&str, DayType)] = &[
    ("Running", DayType::Cardio),
    ("Cycling", DayType::Cardio),
    ("Swimming", DayType::Cardio),
    ("HIIT", DayType::Cardio),
    ("Dancing", DayType::Cardio),
    ("Weight Training", DayType::Strength),
    ("Basketball", DayType::Strength),
    ("Tennis", DayType::Strength),
    ("Yoga", DayType::Recovery),
    ("Walking", DayType::Recovery),
];

/// Week layout: weekdays alternate cardio and strength, weekends recover.
const WEEKLY_LAYOUT: &[(Weekday, DayType)] = &[
    (Weekday::Mon, DayType::Cardio),
    (Weekday::Tue, DayType::Strength),
    (Weekday::Wed, DayType::Cardio),
    (Weekday::Thu, DayType::Strength),
    (Weekday::Fri, DayType::Cardio),
    (Weekday::Sat, DayType::Recovery),
    (Weekday::Sun, DayType::Recovery),
];

/// Guidance shown when no ranked activity is available for a day.
const REST_DAY_NOTE: &str = "Rest day";

/// Look up the canonical day type of an activity by name.
///
/// Returns `None` for activities outside the classification table; the
/// scheduler then treats them as matching no day slot.
#[must_use]
pub fn classify_activity(name: &str) -> Option<DayType> {
    DAY_TYPE_TABLE
        .iter()
        .find(|(activity, _)| *activity == name)
        .map(|&(_, day_type)| day_type)
}

/// Blend ranked activities into a seven-day schedule.
///
/// Each day takes the highest-ranked activity of its required type. A day
/// with no match of the required type falls back to the top-ranked activity
/// overall; with an empty ranking every day becomes a rest note.
#[must_use]
pub fn build_weekly_schedule(ranked: &[ScoredActivity]) -> WeeklySchedule {
    let days = WEEKLY_LAYOUT
        .iter()
        .map(|&(day, day_type)| {
            let slot = pick_for_type(ranked, day_type)
                .or_else(|| {
                    let fallback = ranked.first();
                    if fallback.is_some() {
                        debug!(
                            day = %day,
                            day_type = day_type.display_name(),
                            "no ranked activity of required type, using top-ranked"
                        );
                    }
                    fallback
                })
                .map_or_else(|| DaySlot::Note(REST_DAY_NOTE.to_owned()), activity_slot);
            ScheduledDay {
                day,
                focus: day_type,
                slot,
            }
        })
        .collect();
    WeeklySchedule::new(days)
}

/// Highest-ranked activity carrying the requested day type.
fn pick_for_type(ranked: &[ScoredActivity], day_type: DayType) -> Option<&ScoredActivity> {
    ranked
        .iter()
        .find(|scored| classify_activity(&scored.activity.name) == Some(day_type))
}

fn activity_slot(scored: &ScoredActivity) -> DaySlot {
    DaySlot::Activity {
        name: scored.activity.name.clone(),
        duration_minutes: scored.activity.avg_duration_minutes.round() as u32,
        intensity: scored.activity.avg_intensity,
    }
}
