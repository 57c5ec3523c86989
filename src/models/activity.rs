// ABOUTME: Activity reference data models with averaged per-activity metrics
// ABOUTME: ActivityProfile, IntensityLevel, and the ScoredActivity ranking pair
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitrec Project

use serde::{Deserialize, Serialize};

/// Intensity tier of an activity or a user preference
///
/// Tiers form an ordered scale used by the intensity-match scoring term.
/// Ranks run Low=1, Medium=2, High=3.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum IntensityLevel {
    /// Gentle effort, conversational pace
    Low,
    /// Moderate effort, sustainable for a full session
    Medium,
    /// Vigorous effort, near the user's limit
    High,
}

impl IntensityLevel {
    /// Parse an intensity tier from free-form input.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    /// Returns `None` for unrecognized values so the caller can apply its
    /// documented fallback.
    #[must_use]
    pub fn from_input_string(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" | "moderate" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }

    /// Position of this tier on the ordered 1..=3 scale.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
        }
    }

    /// Get the human-readable name for this intensity tier
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// Averaged reference metrics for one named activity
///
/// Immutable reference data: the catalog is created at process start and
/// never mutated. Activity names are unique within a catalog and act as the
/// join key into the day-type table used for weekly scheduling.
///
/// # Examples
///
/// ```rust
/// use fitrec::models::{ActivityProfile, IntensityLevel};
///
/// let walking = ActivityProfile {
///     name: "Walking".into(),
///     avg_calories_burned: 7.2,
///     avg_duration_minutes: 72.5,
///     avg_intensity: IntensityLevel::Low,
///     avg_heart_rate: 124.3,
///     popularity_percent: 18.5,
///     effectiveness: 6.2,
///     strength_focus: 2.0,
///     endurance_focus: 7.0,
///     avg_fitness_level: 4.2,
/// };
/// assert_eq!(walking.avg_intensity.rank(), 1);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityProfile {
    /// Unique activity name, the catalog join key
    pub name: String,
    /// Average calories burned per minute of activity
    pub avg_calories_burned: f64,
    /// Average session duration in minutes
    pub avg_duration_minutes: f64,
    /// Typical intensity tier of a session
    pub avg_intensity: IntensityLevel,
    /// Average heart rate in beats per minute
    pub avg_heart_rate: f64,
    /// Share of users practicing this activity (percent)
    pub popularity_percent: f64,
    /// Overall effectiveness rating (0-10)
    pub effectiveness: f64,
    /// How much the activity builds strength (0-10)
    pub strength_focus: f64,
    /// How much the activity builds endurance (0-10)
    pub endurance_focus: f64,
    /// Fitness level the activity suits best (0-10)
    pub avg_fitness_level: f64,
}

/// An activity paired with its computed match score
///
/// Derived and ephemeral: recomputed on every recommendation request, never
/// stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoredActivity {
    /// The catalog activity that was scored
    pub activity: ActivityProfile,
    /// Match score; higher means a better fit for the profile
    pub score: f64,
}
