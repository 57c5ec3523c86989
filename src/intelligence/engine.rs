// ABOUTME: RecommendationEngine facade orchestrating validation, ranking, and planning
// ABOUTME: Every public entry validates the profile before any computation runs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitrec Project

use tracing::{debug, warn};

use super::{planner, ranking, schedule};
use crate::config::EngineConfig;
use crate::dataset::ActivityCatalog;
use crate::errors::AppResult;
use crate::models::{Goal, ScoredActivity, UserProfile, WorkoutPlan};

/// Facade over the scoring, ranking, scheduling, and planning components
///
/// Holds the immutable activity catalog and the engine configuration. All
/// methods are synchronous, deterministic, and side-effect-free apart from
/// structured logging.
pub struct RecommendationEngine {
    catalog: ActivityCatalog,
    config: EngineConfig,
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RecommendationEngine {
    /// Create an engine with the built-in catalog and default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            catalog: ActivityCatalog::builtin(),
            config: EngineConfig::default(),
        }
    }

    /// Create an engine with the built-in catalog and a custom configuration.
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            catalog: ActivityCatalog::builtin(),
            config,
        }
    }

    /// Create an engine over a custom catalog.
    #[must_use]
    pub const fn with_catalog(catalog: ActivityCatalog, config: EngineConfig) -> Self {
        Self { catalog, config }
    }

    /// The catalog this engine recommends from.
    #[must_use]
    pub const fn catalog(&self) -> &ActivityCatalog {
        &self.catalog
    }

    /// The configuration this engine runs with.
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Rank catalog activities for a profile, best match first.
    ///
    /// `limit` defaults to the configured recommendation limit and is clamped
    /// to the catalog size. An empty catalog yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`crate::errors::AppError::InvalidProfile`] when the profile
    /// fails validation; no scoring runs in that case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fitrec::intelligence::RecommendationEngine;
    /// use fitrec::models::{Gender, Goal, IntensityLevel, UserProfile};
    ///
    /// let engine = RecommendationEngine::new();
    /// let profile = UserProfile {
    ///     age: 29,
    ///     gender: Gender::Unspecified,
    ///     fitness_level: 6,
    ///     goal: Goal::Endurance,
    ///     available_time_minutes: 60,
    ///     preferred_intensity: IntensityLevel::Medium,
    /// };
    /// let top = engine.get_recommendations(&profile, Some(3))?;
    /// assert_eq!(top.len(), 3);
    /// # Ok::<(), fitrec::errors::AppError>(())
    /// ```
    pub fn get_recommendations(
        &self,
        profile: &UserProfile,
        limit: Option<usize>,
    ) -> AppResult<Vec<ScoredActivity>> {
        profile.validate()?;
        self.log_request_fallbacks(profile);

        let limit = limit.unwrap_or(self.config.ranking.default_limit);
        debug!(
            goal = profile.goal.display_name(),
            strategy = self.config.strategy.display_name(),
            limit,
            "ranking activities"
        );
        Ok(ranking::rank(&self.config, &self.catalog, profile, limit))
    }

    /// Assemble the goal-keyed workout plan for a profile.
    ///
    /// The weekly schedule blends the top-ranked activities into day-type
    /// slots; the rest of the plan comes from the goal's template.
    ///
    /// # Errors
    ///
    /// Returns [`crate::errors::AppError::InvalidProfile`] when the profile
    /// fails validation; no template is selected in that case.
    pub fn build_plan(&self, profile: &UserProfile) -> AppResult<WorkoutPlan> {
        profile.validate()?;
        if self.catalog.is_empty() {
            debug!("activity catalog is empty, weekly schedule will hold rest notes");
        }

        let ranked = ranking::rank(
            &self.config,
            &self.catalog,
            profile,
            self.config.ranking.default_limit,
        );
        let weekly = schedule::build_weekly_schedule(&ranked);
        Ok(planner::assemble(&self.config.plan, profile, weekly))
    }

    /// One warn per request for recoverable input drift, so fallbacks stay
    /// visible without per-activity log noise.
    fn log_request_fallbacks(&self, profile: &UserProfile) {
        if let Goal::Other(raw) = &profile.goal {
            warn!(
                goal = raw.as_str(),
                "goal not recognized, scoring with neutral goal match"
            );
        }
        if self.catalog.is_empty() {
            debug!("activity catalog is empty, returning no recommendations");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Gender, IntensityLevel};

    fn valid_profile() -> UserProfile {
        UserProfile {
            age: 29,
            gender: Gender::Unspecified,
            fitness_level: 6,
            goal: Goal::Endurance,
            available_time_minutes: 60,
            preferred_intensity: IntensityLevel::Medium,
        }
    }

    #[test]
    fn default_limit_comes_from_config() {
        let engine = RecommendationEngine::new();
        let ranked = engine.get_recommendations(&valid_profile(), None).unwrap();
        assert_eq!(ranked.len(), engine.config().ranking.default_limit);
    }

    #[test]
    fn invalid_profile_is_rejected_before_ranking() {
        let engine = RecommendationEngine::new();
        let mut profile = valid_profile();
        profile.fitness_level = 0;
        assert!(engine.get_recommendations(&profile, None).is_err());
        assert!(engine.build_plan(&profile).is_err());
    }
}
