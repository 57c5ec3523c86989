// ABOUTME: Configuration-driven parameters for scoring, ranking, and plan assembly
// ABOUTME: Provides type-safe, environment-configurable knobs replacing magic numbers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitrec Project

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{limits, plan, points, scoring};

/// Engine configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable held a value that failed to parse
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    /// A configuration constraint was violated
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),
}

/// Named scoring strategies
///
/// The two formulas ship as interchangeable presets: the weighted-match
/// formula blends four normalized terms into roughly the 0-1 range, while
/// the additive-points formula accumulates unbounded leaderboard-style
/// points. Selected through configuration, never hardcoded at call sites.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringStrategy {
    /// Four weighted terms, weights summing to 1.0
    #[default]
    WeightedMatch,
    /// Goal-weighted base points plus flat proximity bonuses
    AdditivePoints,
}

impl ScoringStrategy {
    /// Parse a strategy name from free-form input.
    #[must_use]
    pub fn from_input_string(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().replace('-', "_").as_str() {
            "weighted_match" | "weighted" => Some(Self::WeightedMatch),
            "additive_points" | "additive" | "points" => Some(Self::AdditivePoints),
            _ => None,
        }
    }

    /// Get the canonical name for this strategy
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::WeightedMatch => "weighted_match",
            Self::AdditivePoints => "additive_points",
        }
    }
}

/// Term weights for the weighted-match formula
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringWeights {
    /// Weight of the fitness-level match term
    pub fitness_weight: f64,

    /// Weight of the goal match term
    pub goal_weight: f64,

    /// Weight of the session-time match term
    pub time_weight: f64,

    /// Weight of the intensity match term
    pub intensity_weight: f64,
}

impl ScoringWeights {
    /// Sum of all four term weights.
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.fitness_weight + self.goal_weight + self.time_weight + self.intensity_weight
    }
}

/// Flat bonuses and proximity windows for the additive-points formula
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointsBonuses {
    /// Bonus when intensity tiers match exactly
    pub intensity_match_bonus: f64,

    /// Bonus when session duration is within the close window
    pub time_close_bonus: f64,

    /// Bonus when session duration is within the near window
    pub time_near_bonus: f64,

    /// Bonus when fitness levels are within the close delta
    pub level_close_bonus: f64,

    /// Bonus when fitness levels are within the near delta
    pub level_near_bonus: f64,

    /// Duration gap in minutes that still counts as a close time match
    pub time_close_minutes: f64,

    /// Duration gap in minutes that still counts as a near time match
    pub time_near_minutes: f64,

    /// Fitness-level gap that still counts as a close level match
    pub level_close_delta: f64,

    /// Fitness-level gap that still counts as a near level match
    pub level_near_delta: f64,
}

/// Ranking parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingConfig {
    /// Recommendations returned when the caller passes no explicit limit
    pub default_limit: usize,
}

/// Plan assembly parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanConfig {
    /// Minutes reserved for warmup plus cooldown around the main block
    pub warmup_cooldown_overhead_minutes: u32,

    /// Minutes per circuit repetition in the interval template
    pub circuit_minutes: u32,

    /// Baseline daily hydration recommendation in liters
    pub base_hydration_liters: f64,

    /// Extra hydration in liters for a high preferred intensity
    pub high_intensity_hydration_bonus_liters: f64,
}

/// Main engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Selected scoring strategy
    pub strategy: ScoringStrategy,
    /// Weighted-match term weights
    pub weights: ScoringWeights,
    /// Additive-points bonuses
    pub bonuses: PointsBonuses,
    /// Ranking parameters
    pub ranking: RankingConfig,
    /// Plan assembly parameters
    pub plan: PlanConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            strategy: ScoringStrategy::WeightedMatch,
            weights: ScoringWeights {
                fitness_weight: scoring::DEFAULT_WEIGHT_FITNESS,
                goal_weight: scoring::DEFAULT_WEIGHT_GOAL,
                time_weight: scoring::DEFAULT_WEIGHT_TIME,
                intensity_weight: scoring::DEFAULT_WEIGHT_INTENSITY,
            },
            bonuses: PointsBonuses {
                intensity_match_bonus: points::DEFAULT_INTENSITY_MATCH_BONUS,
                time_close_bonus: points::DEFAULT_TIME_CLOSE_BONUS,
                time_near_bonus: points::DEFAULT_TIME_NEAR_BONUS,
                level_close_bonus: points::DEFAULT_LEVEL_CLOSE_BONUS,
                level_near_bonus: points::DEFAULT_LEVEL_NEAR_BONUS,
                time_close_minutes: points::DEFAULT_TIME_CLOSE_MINUTES,
                time_near_minutes: points::DEFAULT_TIME_NEAR_MINUTES,
                level_close_delta: points::DEFAULT_LEVEL_CLOSE_DELTA,
                level_near_delta: points::DEFAULT_LEVEL_NEAR_DELTA,
            },
            ranking: RankingConfig {
                default_limit: limits::DEFAULT_RECOMMENDATION_LIMIT,
            },
            plan: PlanConfig {
                warmup_cooldown_overhead_minutes: plan::WARMUP_COOLDOWN_OVERHEAD_MINUTES,
                circuit_minutes: plan::CIRCUIT_MINUTES,
                base_hydration_liters: plan::BASE_HYDRATION_LITERS,
                high_intensity_hydration_bonus_liters: plan::HIGH_INTENSITY_HYDRATION_BONUS_LITERS,
            },
        }
    }
}

impl EngineConfig {
    /// Load configuration from environment variables with fallback to defaults
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values
    pub fn from_environment() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("FITREC_SCORING_STRATEGY") {
            config.strategy = ScoringStrategy::from_input_string(&val)
                .ok_or_else(|| ConfigError::InvalidValue("FITREC_SCORING_STRATEGY".into()))?;
        }

        if let Ok(val) = std::env::var("FITREC_FITNESS_WEIGHT") {
            config.weights.fitness_weight = val
                .parse()
                .map_err(|_| ConfigError::InvalidValue("FITREC_FITNESS_WEIGHT".into()))?;
        }

        if let Ok(val) = std::env::var("FITREC_GOAL_WEIGHT") {
            config.weights.goal_weight = val
                .parse()
                .map_err(|_| ConfigError::InvalidValue("FITREC_GOAL_WEIGHT".into()))?;
        }

        if let Ok(val) = std::env::var("FITREC_TIME_WEIGHT") {
            config.weights.time_weight = val
                .parse()
                .map_err(|_| ConfigError::InvalidValue("FITREC_TIME_WEIGHT".into()))?;
        }

        if let Ok(val) = std::env::var("FITREC_INTENSITY_WEIGHT") {
            config.weights.intensity_weight = val
                .parse()
                .map_err(|_| ConfigError::InvalidValue("FITREC_INTENSITY_WEIGHT".into()))?;
        }

        if let Ok(val) = std::env::var("FITREC_DEFAULT_LIMIT") {
            config.ranking.default_limit = val
                .parse()
                .map_err(|_| ConfigError::InvalidValue("FITREC_DEFAULT_LIMIT".into()))?;
        }

        if let Ok(val) = std::env::var("FITREC_INTENSITY_BONUS") {
            config.bonuses.intensity_match_bonus = val
                .parse()
                .map_err(|_| ConfigError::InvalidValue("FITREC_INTENSITY_BONUS".into()))?;
        }

        if let Ok(val) = std::env::var("FITREC_TIME_CLOSE_BONUS") {
            config.bonuses.time_close_bonus = val
                .parse()
                .map_err(|_| ConfigError::InvalidValue("FITREC_TIME_CLOSE_BONUS".into()))?;
        }

        if let Ok(val) = std::env::var("FITREC_TIME_NEAR_BONUS") {
            config.bonuses.time_near_bonus = val
                .parse()
                .map_err(|_| ConfigError::InvalidValue("FITREC_TIME_NEAR_BONUS".into()))?;
        }

        if let Ok(val) = std::env::var("FITREC_LEVEL_CLOSE_BONUS") {
            config.bonuses.level_close_bonus = val
                .parse()
                .map_err(|_| ConfigError::InvalidValue("FITREC_LEVEL_CLOSE_BONUS".into()))?;
        }

        if let Ok(val) = std::env::var("FITREC_LEVEL_NEAR_BONUS") {
            config.bonuses.level_near_bonus = val
                .parse()
                .map_err(|_| ConfigError::InvalidValue("FITREC_LEVEL_NEAR_BONUS".into()))?;
        }

        if let Ok(val) = std::env::var("FITREC_PLAN_OVERHEAD_MINUTES") {
            config.plan.warmup_cooldown_overhead_minutes = val
                .parse()
                .map_err(|_| ConfigError::InvalidValue("FITREC_PLAN_OVERHEAD_MINUTES".into()))?;
        }

        if let Ok(val) = std::env::var("FITREC_CIRCUIT_MINUTES") {
            config.plan.circuit_minutes = val
                .parse()
                .map_err(|_| ConfigError::InvalidValue("FITREC_CIRCUIT_MINUTES".into()))?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, weight) in [
            ("fitness_weight", self.weights.fitness_weight),
            ("goal_weight", self.weights.goal_weight),
            ("time_weight", self.weights.time_weight),
            ("intensity_weight", self.weights.intensity_weight),
        ] {
            if !(0.0..=1.0).contains(&weight) {
                return Err(ConfigError::ValidationFailed(format!(
                    "{name} must be between 0 and 1"
                )));
            }
        }

        let weight_sum = self.weights.sum();
        if (weight_sum - 1.0).abs() > 0.01 {
            return Err(ConfigError::ValidationFailed(format!(
                "Scoring weights must sum to 1.0, got {weight_sum}"
            )));
        }

        for (name, value) in [
            ("intensity_match_bonus", self.bonuses.intensity_match_bonus),
            ("time_close_bonus", self.bonuses.time_close_bonus),
            ("time_near_bonus", self.bonuses.time_near_bonus),
            ("level_close_bonus", self.bonuses.level_close_bonus),
            ("level_near_bonus", self.bonuses.level_near_bonus),
            ("time_close_minutes", self.bonuses.time_close_minutes),
            ("time_near_minutes", self.bonuses.time_near_minutes),
            ("level_close_delta", self.bonuses.level_close_delta),
            ("level_near_delta", self.bonuses.level_near_delta),
        ] {
            if value < 0.0 {
                return Err(ConfigError::ValidationFailed(format!(
                    "{name} must be >= 0"
                )));
            }
        }

        if self.bonuses.time_close_minutes > self.bonuses.time_near_minutes {
            return Err(ConfigError::ValidationFailed(
                "time_close_minutes must not exceed time_near_minutes".into(),
            ));
        }

        if self.bonuses.level_close_delta > self.bonuses.level_near_delta {
            return Err(ConfigError::ValidationFailed(
                "level_close_delta must not exceed level_near_delta".into(),
            ));
        }

        if self.ranking.default_limit == 0 {
            return Err(ConfigError::ValidationFailed(
                "default_limit must be > 0".into(),
            ));
        }

        if self.plan.circuit_minutes == 0 {
            return Err(ConfigError::ValidationFailed(
                "circuit_minutes must be > 0".into(),
            ));
        }

        if self.plan.base_hydration_liters <= 0.0 {
            return Err(ConfigError::ValidationFailed(
                "base_hydration_liters must be > 0".into(),
            ));
        }

        Ok(())
    }
}
