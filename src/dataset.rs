// ABOUTME: Static activity catalog with averaged metrics for ten common activities
// ABOUTME: ActivityCatalog enforces unique activity names as the catalog join key
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitrec Project

//! # Activity Catalog
//!
//! The catalog is the engine's only reference data: a fixed set of activities
//! with averaged metrics, created at startup and never mutated. The built-in
//! catalog carries population averages for ten common activities; callers can
//! supply their own set through [`ActivityCatalog::new`], which enforces the
//! unique-name invariant. The source survey's activity-pairing counts ride
//! along as a static table, surfaced through [`companions_for`].

use std::cmp::Ordering;
use std::collections::HashSet;
use std::slice;

use crate::errors::{AppError, AppResult};
use crate::models::{ActivityProfile, IntensityLevel};

/// Seed row for the built-in catalog, const-friendly form of
/// [`ActivityProfile`].
struct SeedActivity {
    name: &'static str,
    avg_calories_burned: f64,
    avg_duration_minutes: f64,
    avg_intensity: IntensityLevel,
    avg_heart_rate: f64,
    popularity_percent: f64,
    effectiveness: f64,
    strength_focus: f64,
    endurance_focus: f64,
    avg_fitness_level: f64,
}

/// Population-average metrics for the built-in activities.
const BUILTIN_ACTIVITIES: &[SeedActivity] = &[
    SeedActivity {
        name: "Walking",
        avg_calories_burned: 7.2,
        avg_duration_minutes: 72.5,
        avg_intensity: IntensityLevel::Low,
        avg_heart_rate: 124.3,
        popularity_percent: 18.5,
        effectiveness: 6.2,
        strength_focus: 2.0,
        endurance_focus: 7.0,
        avg_fitness_level: 4.2,
    },
    SeedActivity {
        name: "Running",
        avg_calories_burned: 24.8,
        avg_duration_minutes: 68.3,
        avg_intensity: IntensityLevel::High,
        avg_heart_rate: 138.2,
        popularity_percent: 12.3,
        effectiveness: 8.7,
        strength_focus: 5.0,
        endurance_focus: 9.0,
        avg_fitness_level: 7.1,
    },
    SeedActivity {
        name: "Cycling",
        avg_calories_burned: 18.6,
        avg_duration_minutes: 71.2,
        avg_intensity: IntensityLevel::Medium,
        avg_heart_rate: 132.5,
        popularity_percent: 10.8,
        effectiveness: 7.8,
        strength_focus: 6.0,
        endurance_focus: 8.0,
        avg_fitness_level: 6.5,
    },
    SeedActivity {
        name: "Swimming",
        avg_calories_burned: 14.3,
        avg_duration_minutes: 65.4,
        avg_intensity: IntensityLevel::Medium,
        avg_heart_rate: 135.7,
        popularity_percent: 8.7,
        effectiveness: 8.2,
        strength_focus: 7.0,
        endurance_focus: 9.0,
        avg_fitness_level: 6.2,
    },
    SeedActivity {
        name: "Weight Training",
        avg_calories_burned: 11.5,
        avg_duration_minutes: 75.8,
        avg_intensity: IntensityLevel::Medium,
        avg_heart_rate: 128.4,
        popularity_percent: 14.2,
        effectiveness: 8.5,
        strength_focus: 9.0,
        endurance_focus: 4.0,
        avg_fitness_level: 6.8,
    },
    SeedActivity {
        name: "Yoga",
        avg_calories_burned: 5.8,
        avg_duration_minutes: 78.3,
        avg_intensity: IntensityLevel::Low,
        avg_heart_rate: 118.6,
        popularity_percent: 11.5,
        effectiveness: 7.1,
        strength_focus: 5.0,
        endurance_focus: 3.0,
        avg_fitness_level: 5.2,
    },
    SeedActivity {
        name: "HIIT",
        avg_calories_burned: 26.4,
        avg_duration_minutes: 52.7,
        avg_intensity: IntensityLevel::High,
        avg_heart_rate: 142.3,
        popularity_percent: 9.8,
        effectiveness: 9.2,
        strength_focus: 8.0,
        endurance_focus: 8.0,
        avg_fitness_level: 7.8,
    },
    SeedActivity {
        name: "Dancing",
        avg_calories_burned: 9.7,
        avg_duration_minutes: 80.1,
        avg_intensity: IntensityLevel::Medium,
        avg_heart_rate: 126.8,
        popularity_percent: 7.3,
        effectiveness: 6.8,
        strength_focus: 4.0,
        endurance_focus: 6.0,
        avg_fitness_level: 5.5,
    },
    SeedActivity {
        name: "Tennis",
        avg_calories_burned: 16.8,
        avg_duration_minutes: 74.6,
        avg_intensity: IntensityLevel::Medium,
        avg_heart_rate: 134.2,
        popularity_percent: 6.2,
        effectiveness: 7.9,
        strength_focus: 6.0,
        endurance_focus: 7.0,
        avg_fitness_level: 6.4,
    },
    SeedActivity {
        name: "Basketball",
        avg_calories_burned: 14.2,
        avg_duration_minutes: 68.9,
        avg_intensity: IntensityLevel::High,
        avg_heart_rate: 139.5,
        popularity_percent: 5.7,
        effectiveness: 8.1,
        strength_focus: 7.0,
        endurance_focus: 8.0,
        avg_fitness_level: 6.9,
    },
];

/// Two activities the survey respondents logged together, with how many
/// respondents reported the pair.
struct ActivityPairing {
    pair: [&'static str; 2],
    frequency: u32,
}

impl ActivityPairing {
    fn partner_of(&self, name: &str) -> Option<&'static str> {
        if self.pair[0] == name {
            Some(self.pair[1])
        } else if self.pair[1] == name {
            Some(self.pair[0])
        } else {
            None
        }
    }
}

/// Activity pairs most often logged together in the source survey.
const POPULAR_PAIRINGS: &[ActivityPairing] = &[
    ActivityPairing {
        pair: ["Running", "Weight Training"],
        frequency: 23,
    },
    ActivityPairing {
        pair: ["Cycling", "Yoga"],
        frequency: 18,
    },
    ActivityPairing {
        pair: ["Swimming", "HIIT"],
        frequency: 15,
    },
    ActivityPairing {
        pair: ["Walking", "Weight Training"],
        frequency: 12,
    },
];

/// Activities most often practiced alongside `name`, most frequent first.
///
/// The pairing table is survey data keyed by the built-in activity names, so
/// an unknown name simply has no companions.
#[must_use]
pub fn companions_for(name: &str) -> Vec<&'static str> {
    let mut partners: Vec<(&'static str, u32)> = POPULAR_PAIRINGS
        .iter()
        .filter_map(|pairing| pairing.partner_of(name).map(|p| (p, pairing.frequency)))
        .collect();
    partners.sort_by(|a, b| b.1.cmp(&a.1));
    partners.into_iter().map(|(partner, _)| partner).collect()
}

impl SeedActivity {
    fn to_profile(&self) -> ActivityProfile {
        ActivityProfile {
            name: self.name.to_owned(),
            avg_calories_burned: self.avg_calories_burned,
            avg_duration_minutes: self.avg_duration_minutes,
            avg_intensity: self.avg_intensity,
            avg_heart_rate: self.avg_heart_rate,
            popularity_percent: self.popularity_percent,
            effectiveness: self.effectiveness,
            strength_focus: self.strength_focus,
            endurance_focus: self.endurance_focus,
            avg_fitness_level: self.avg_fitness_level,
        }
    }
}

/// Immutable set of activities available for recommendation
///
/// Preserves insertion order; the ranker's tie-break relies on it.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityCatalog {
    activities: Vec<ActivityProfile>,
}

impl ActivityCatalog {
    /// Build a catalog from caller-supplied activities.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::DuplicateActivity`] when two entries share a
    /// name. Names join the catalog to the day-type table, so they must be
    /// unique.
    pub fn new(activities: Vec<ActivityProfile>) -> AppResult<Self> {
        let mut seen = HashSet::new();
        for activity in &activities {
            if !seen.insert(activity.name.as_str()) {
                return Err(AppError::duplicate_activity(activity.name.clone()));
            }
        }
        Ok(Self { activities })
    }

    /// The built-in catalog of ten common activities.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            activities: BUILTIN_ACTIVITIES.iter().map(SeedActivity::to_profile).collect(),
        }
    }

    /// All activities in catalog order.
    #[must_use]
    pub fn activities(&self) -> &[ActivityProfile] {
        &self.activities
    }

    /// Iterate over the activities in catalog order.
    pub fn iter(&self) -> slice::Iter<'_, ActivityProfile> {
        self.activities.iter()
    }

    /// The `n` most effective activities, best first.
    ///
    /// Ties keep catalog order; `n` larger than the catalog returns every
    /// activity.
    #[must_use]
    pub fn top_by_effectiveness(&self, n: usize) -> Vec<&ActivityProfile> {
        let mut by_effectiveness: Vec<&ActivityProfile> = self.activities.iter().collect();
        by_effectiveness.sort_by(|a, b| {
            b.effectiveness.partial_cmp(&a.effectiveness).unwrap_or(Ordering::Equal)
        });
        by_effectiveness.truncate(n);
        by_effectiveness
    }

    /// Look up an activity by its exact name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ActivityProfile> {
        self.activities.iter().find(|a| a.name == name)
    }

    /// Number of activities in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.activities.len()
    }

    /// Whether the catalog holds no activities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }
}

impl Default for ActivityCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> IntoIterator for &'a ActivityCatalog {
    type Item = &'a ActivityProfile;
    type IntoIter = slice::Iter<'a, ActivityProfile>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_has_unique_names() {
        let catalog = ActivityCatalog::builtin();
        assert_eq!(catalog.len(), 10);
        // Re-running the constructor check proves the seed data upholds the
        // unique-name invariant.
        assert!(ActivityCatalog::new(catalog.activities().to_vec()).is_ok());
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let mut activities = ActivityCatalog::builtin().activities().to_vec();
        let clone = activities[0].clone();
        activities.push(clone);
        let err = ActivityCatalog::new(activities).unwrap_err();
        assert_eq!(err, AppError::duplicate_activity("Walking"));
    }

    #[test]
    fn lookup_by_name_is_exact() {
        let catalog = ActivityCatalog::builtin();
        assert!(catalog.get("Weight Training").is_some());
        assert!(catalog.get("weight training").is_none());
    }

    #[test]
    fn effectiveness_ranking_is_descending() {
        let catalog = ActivityCatalog::builtin();
        let names: Vec<&str> = catalog
            .top_by_effectiveness(3)
            .iter()
            .map(|a| a.name.as_str())
            .collect();
        assert_eq!(names, ["HIIT", "Running", "Weight Training"]);
        assert_eq!(catalog.top_by_effectiveness(50).len(), 10);
        assert!(catalog.top_by_effectiveness(0).is_empty());
    }

    #[test]
    fn companions_are_ordered_by_frequency() {
        assert_eq!(companions_for("Weight Training"), ["Running", "Walking"]);
        assert_eq!(companions_for("Running"), ["Weight Training"]);
        assert!(companions_for("Curling").is_empty());
    }
}
