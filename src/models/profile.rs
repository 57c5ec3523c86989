// ABOUTME: User profile models with parsing and validation of raw form input
// ABOUTME: Gender, Goal, UserProfile, and the unvalidated ProfileInput carrier
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitrec Project

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::activity::IntensityLevel;
use crate::constants::limits;
use crate::errors::{AppError, AppResult, FieldIssue};

/// Self-reported gender of the user
///
/// Carried for completeness of the profile; no scoring term reads it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Female
    Female,
    /// Male
    Male,
    /// Non-binary
    NonBinary,
    /// Not stated or preferred not to say
    Unspecified,
}

impl Gender {
    /// Parse a gender from free-form input.
    ///
    /// Matching is case-insensitive. Returns `None` for unrecognized values
    /// so the caller can fall back to [`Gender::Unspecified`].
    #[must_use]
    pub fn from_input_string(value: &str) -> Option<Self> {
        match normalize(value).as_str() {
            "female" | "f" => Some(Self::Female),
            "male" | "m" => Some(Self::Male),
            "non_binary" | "nonbinary" => Some(Self::NonBinary),
            "unspecified" | "other" | "prefer_not_to_say" => Some(Self::Unspecified),
            _ => None,
        }
    }

    /// Get the human-readable name for this gender
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Female => "female",
            Self::Male => "male",
            Self::NonBinary => "non-binary",
            Self::Unspecified => "unspecified",
        }
    }
}

/// Stated fitness goal of the user
///
/// The `Other` variant holds goal strings that don't map to a known goal.
/// Scoring and plan assembly treat it with documented neutral fallbacks
/// rather than failing, so harmless input drift never breaks a request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    /// Burn calories and reduce body weight
    WeightLoss,
    /// Build muscle mass and strength
    MuscleGain,
    /// Improve cardiovascular endurance
    Endurance,
    /// Maintain current fitness
    Maintenance,
    /// Goal string not covered by the known goals
    Other(String),
}

impl Goal {
    /// Parse a goal from free-form input.
    ///
    /// Matching is case-insensitive and tolerant of spaces and hyphens.
    /// Unknown values become [`Goal::Other`] with the trimmed original string
    /// preserved for display and logging.
    #[must_use]
    pub fn from_input_string(value: &str) -> Self {
        match normalize(value).as_str() {
            "weight_loss" | "weightloss" | "fat_loss" => Self::WeightLoss,
            "muscle_gain" | "musclegain" | "strength" => Self::MuscleGain,
            "endurance" | "endurance_improvement" => Self::Endurance,
            "maintenance" => Self::Maintenance,
            _ => Self::Other(value.trim().to_owned()),
        }
    }

    /// Get the human-readable name for this goal
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::WeightLoss => "weight loss",
            Self::MuscleGain => "muscle gain",
            Self::Endurance => "endurance improvement",
            Self::Maintenance => "maintenance",
            Self::Other(_) => "custom goal",
        }
    }

    /// Whether this goal maps to one of the known scoring branches.
    #[must_use]
    pub const fn is_recognized(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

/// Lowercase, trim, and unify separators for relaxed enum matching.
fn normalize(value: &str) -> String {
    value.trim().to_lowercase().replace([' ', '-'], "_")
}

/// Validated self-reported attributes and stated fitness goal
///
/// Constructed fresh per recommendation request, usually through
/// [`ProfileInput::into_profile`]; carries no persisted identity.
///
/// # Examples
///
/// ```rust
/// use fitrec::models::{Gender, Goal, IntensityLevel, UserProfile};
///
/// let profile = UserProfile {
///     age: 34,
///     gender: Gender::Female,
///     fitness_level: 7,
///     goal: Goal::MuscleGain,
///     available_time_minutes: 60,
///     preferred_intensity: IntensityLevel::Medium,
/// };
/// assert!(profile.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    /// Age in years
    pub age: u32,
    /// Self-reported gender
    pub gender: Gender,
    /// Self-reported fitness level (1-10)
    pub fitness_level: u8,
    /// Stated fitness goal
    pub goal: Goal,
    /// Minutes available per workout session
    pub available_time_minutes: u32,
    /// Preferred workout intensity tier
    pub preferred_intensity: IntensityLevel,
}

impl UserProfile {
    /// Check every declared range constraint on this profile.
    ///
    /// All violations are collected so one error names every offending
    /// field. Entry points re-run this even on profiles built through
    /// [`ProfileInput::into_profile`], so hand-constructed profiles get the
    /// same guarantees.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidProfile`] when any field is out of its
    /// declared range.
    pub fn validate(&self) -> AppResult<()> {
        let mut issues = Vec::new();
        if self.age == 0 {
            issues.push(FieldIssue::out_of_range("age", "greater than zero"));
        }
        if !(limits::MIN_FITNESS_LEVEL..=limits::MAX_FITNESS_LEVEL).contains(&self.fitness_level) {
            issues.push(FieldIssue::out_of_range(
                "fitness_level",
                format!(
                    "between {} and {}",
                    limits::MIN_FITNESS_LEVEL,
                    limits::MAX_FITNESS_LEVEL
                ),
            ));
        }
        if self.available_time_minutes == 0 {
            issues.push(FieldIssue::out_of_range(
                "available_time_minutes",
                "greater than zero",
            ));
        }
        if issues.is_empty() {
            Ok(())
        } else {
            Err(AppError::invalid_profile(issues))
        }
    }
}

/// Raw, not-yet-validated profile fields as a caller submitted them
///
/// Mirrors the shape of a profile form: every field optional, enum fields
/// still strings. [`ProfileInput::into_profile`] is the single validation
/// boundary; it collects every missing or out-of-range field instead of
/// stopping at the first one. Field aliases accept the camelCase names the
/// original form used.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileInput {
    /// Age in years
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    /// Gender as submitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// Fitness level (1-10)
    #[serde(
        default,
        alias = "fitnessLevel",
        skip_serializing_if = "Option::is_none"
    )]
    pub fitness_level: Option<u8>,
    /// Goal keyword as submitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
    /// Minutes available per session
    #[serde(
        default,
        alias = "availableTime",
        alias = "available_time",
        skip_serializing_if = "Option::is_none"
    )]
    pub available_time_minutes: Option<u32>,
    /// Preferred intensity tier as submitted
    #[serde(
        default,
        alias = "preferredIntensity",
        skip_serializing_if = "Option::is_none"
    )]
    pub preferred_intensity: Option<String>,
}

impl ProfileInput {
    /// Parse a profile input document from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidProfile`] when the document is not valid
    /// JSON or a field has an unparseable type, so callers see the same
    /// error taxonomy for malformed documents as for missing fields.
    pub fn from_json_str(raw: &str) -> AppResult<Self> {
        serde_json::from_str(raw).map_err(|err| {
            AppError::invalid_field("profile", format!("could not be parsed as JSON: {err}"))
        })
    }

    /// Validate this input and convert it into a [`UserProfile`].
    ///
    /// Hard failures (missing required fields, out-of-range values) are
    /// collected and returned together. Recoverable drift is resolved with
    /// a logged fallback instead: an unrecognized gender becomes
    /// [`Gender::Unspecified`], an unrecognized intensity tier becomes
    /// [`IntensityLevel::Medium`], and an unrecognized goal is preserved as
    /// [`Goal::Other`] for downstream neutral handling.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidProfile`] naming every offending field.
    pub fn into_profile(self) -> AppResult<UserProfile> {
        let mut issues = Vec::new();

        let age = match self.age {
            Some(0) => {
                issues.push(FieldIssue::out_of_range("age", "greater than zero"));
                None
            }
            Some(age) => Some(age),
            None => {
                issues.push(FieldIssue::missing("age"));
                None
            }
        };

        let gender = match self.gender.as_deref().map(str::trim) {
            None | Some("") => Gender::Unspecified,
            Some(raw) => Gender::from_input_string(raw).unwrap_or_else(|| {
                warn!(value = raw, "gender not recognized, treating as unspecified");
                Gender::Unspecified
            }),
        };

        let fitness_level = match self.fitness_level {
            Some(level)
                if (limits::MIN_FITNESS_LEVEL..=limits::MAX_FITNESS_LEVEL).contains(&level) =>
            {
                Some(level)
            }
            Some(_) => {
                issues.push(FieldIssue::out_of_range(
                    "fitness_level",
                    format!(
                        "between {} and {}",
                        limits::MIN_FITNESS_LEVEL,
                        limits::MAX_FITNESS_LEVEL
                    ),
                ));
                None
            }
            None => {
                issues.push(FieldIssue::missing("fitness_level"));
                None
            }
        };

        let goal = match self.goal.as_deref().map(str::trim) {
            None | Some("") => {
                issues.push(FieldIssue::missing("goal"));
                None
            }
            Some(raw) => {
                let goal = Goal::from_input_string(raw);
                if !goal.is_recognized() {
                    debug!(value = raw, "goal not recognized, fallback behavior applies");
                }
                Some(goal)
            }
        };

        let available_time_minutes = match self.available_time_minutes {
            Some(0) => {
                issues.push(FieldIssue::out_of_range(
                    "available_time_minutes",
                    "greater than zero",
                ));
                None
            }
            Some(minutes) => Some(minutes),
            None => {
                issues.push(FieldIssue::missing("available_time_minutes"));
                None
            }
        };

        let preferred_intensity = match self.preferred_intensity.as_deref().map(str::trim) {
            None | Some("") => {
                issues.push(FieldIssue::missing("preferred_intensity"));
                None
            }
            Some(raw) => Some(IntensityLevel::from_input_string(raw).unwrap_or_else(|| {
                warn!(
                    value = raw,
                    "intensity not recognized, treating as medium"
                );
                IntensityLevel::Medium
            })),
        };

        match (
            age,
            fitness_level,
            goal,
            available_time_minutes,
            preferred_intensity,
        ) {
            (
                Some(age),
                Some(fitness_level),
                Some(goal),
                Some(available_time_minutes),
                Some(preferred_intensity),
            ) if issues.is_empty() => Ok(UserProfile {
                age,
                gender,
                fitness_level,
                goal,
                available_time_minutes,
                preferred_intensity,
            }),
            _ => Err(AppError::invalid_profile(issues)),
        }
    }
}
