// ABOUTME: Workout plan models with the interpolated weekly schedule structure
// ABOUTME: WorkoutPlan, WeeklySchedule, ScheduledDay, and per-day DaySlot entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitrec Project

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use super::activity::IntensityLevel;

/// Training focus of a scheduled day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// Sustained aerobic work
    Cardio,
    /// Resistance and power work
    Strength,
    /// Gentle movement and regeneration
    Recovery,
}

impl DayType {
    /// Get the human-readable name for this day type
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Cardio => "cardio",
            Self::Strength => "strength",
            Self::Recovery => "recovery",
        }
    }
}

/// What a single scheduled day holds
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum DaySlot {
    /// A concrete activity assignment drawn from the ranked recommendations
    Activity {
        /// Name of the assigned activity
        name: String,
        /// Suggested session length in minutes
        duration_minutes: u32,
        /// Typical intensity tier of the activity
        intensity: IntensityLevel,
    },
    /// Free-text guidance when no ranked activity fits the day
    Note(String),
}

/// One day of the weekly schedule
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScheduledDay {
    /// Day of week this entry applies to
    pub day: Weekday,
    /// Training focus the day was planned around
    pub focus: DayType,
    /// Assigned activity or guidance note
    pub slot: DaySlot,
}

/// A full week of day assignments, Monday through Sunday in order
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WeeklySchedule {
    /// Ordered day entries
    days: Vec<ScheduledDay>,
}

impl WeeklySchedule {
    /// Build a schedule from ordered day entries.
    #[must_use]
    pub fn new(days: Vec<ScheduledDay>) -> Self {
        Self { days }
    }

    /// All day entries in schedule order.
    #[must_use]
    pub fn days(&self) -> &[ScheduledDay] {
        &self.days
    }

    /// Look up the slot assigned to a day.
    #[must_use]
    pub fn get(&self, day: Weekday) -> Option<&DaySlot> {
        self.days
            .iter()
            .find(|entry| entry.day == day)
            .map(|entry| &entry.slot)
    }
}

/// A structured, templated workout recommendation
///
/// Derived from a [`crate::models::UserProfile`] and a goal-keyed template;
/// ephemeral, recomputed per request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkoutPlan {
    /// Plan headline
    pub title: String,
    /// One-sentence summary of the plan's focus
    pub description: String,
    /// Warmup instructions
    pub warmup: String,
    /// Ordered main workout steps
    pub workout: Vec<String>,
    /// Cooldown instructions
    pub cool_down: String,
    /// Ordered lifestyle and training recommendations
    pub recommendations: Vec<String>,
    /// Day-by-day activity assignments for a sample week
    pub weekly_schedule: WeeklySchedule,
}
