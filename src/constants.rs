// ABOUTME: Numeric constants for scoring formulas, plan templates, and limits
// ABOUTME: Pure data constants organized by domain, referenced by config defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitrec Project

//! Constants module
//!
//! Groups the tuning numbers of the recommendation core by domain. Values that
//! are meant to be operator-tunable surface again as [`crate::config`]
//! defaults; values that define the formulas themselves (scales, rank spans)
//! live only here.

/// Weighted-match scoring formula constants
pub mod scoring {
    /// Default weight of the fitness-level match term
    pub const DEFAULT_WEIGHT_FITNESS: f64 = 0.30;

    /// Default weight of the goal match term
    pub const DEFAULT_WEIGHT_GOAL: f64 = 0.30;

    /// Default weight of the session-time match term
    pub const DEFAULT_WEIGHT_TIME: f64 = 0.20;

    /// Default weight of the intensity match term
    pub const DEFAULT_WEIGHT_INTENSITY: f64 = 0.20;

    /// Fitness levels are reported on a 0-10 scale
    pub const FITNESS_LEVEL_SCALE: f64 = 10.0;

    /// Calories-per-session divisor for the weight-loss goal term
    pub const WEIGHT_LOSS_CALORIE_SCALE: f64 = 20.0;

    /// Strength focus is reported on a 0-10 scale
    pub const STRENGTH_FOCUS_SCALE: f64 = 10.0;

    /// Endurance focus is reported on a 0-10 scale
    pub const ENDURANCE_FOCUS_SCALE: f64 = 10.0;

    /// Constant goal-match contribution for the maintenance goal
    pub const MAINTENANCE_GOAL_MATCH: f64 = 0.7;

    /// Constant goal-match contribution when the goal is not recognized
    pub const FALLBACK_GOAL_MATCH: f64 = 0.5;

    /// Duration differences are normalized against a one-hour window
    pub const TIME_WINDOW_MINUTES: f64 = 60.0;

    /// Maximum distance between intensity ranks (Low=1 .. High=3)
    pub const INTENSITY_RANK_SPAN: f64 = 2.0;
}

/// Additive-points scoring formula constants
pub mod points {
    /// Calories multiplier in the weight-loss base score
    pub const CALORIE_MULTIPLIER: f64 = 3.0;

    /// Focus-metric multiplier in the muscle-gain and endurance base scores
    pub const FOCUS_MULTIPLIER: f64 = 4.0;

    /// Effectiveness multiplier shared by the goal base scores
    pub const EFFECTIVENESS_MULTIPLIER: f64 = 2.0;

    /// Combined-focus multiplier in the maintenance base score
    pub const MAINTENANCE_FOCUS_MULTIPLIER: f64 = 2.0;

    /// Default flat bonus when intensity tiers match exactly
    pub const DEFAULT_INTENSITY_MATCH_BONUS: f64 = 5.0;

    /// Default duration gap (minutes) that earns the close time bonus
    pub const DEFAULT_TIME_CLOSE_MINUTES: f64 = 15.0;

    /// Default duration gap (minutes) that still earns the near time bonus
    pub const DEFAULT_TIME_NEAR_MINUTES: f64 = 30.0;

    /// Default bonus for a close duration match
    pub const DEFAULT_TIME_CLOSE_BONUS: f64 = 3.0;

    /// Default bonus for a near duration match
    pub const DEFAULT_TIME_NEAR_BONUS: f64 = 1.0;

    /// Default fitness-level gap that earns the close level bonus
    pub const DEFAULT_LEVEL_CLOSE_DELTA: f64 = 1.0;

    /// Default fitness-level gap that still earns the near level bonus
    pub const DEFAULT_LEVEL_NEAR_DELTA: f64 = 2.0;

    /// Default bonus for a close fitness-level match
    pub const DEFAULT_LEVEL_CLOSE_BONUS: f64 = 3.0;

    /// Default bonus for a near fitness-level match
    pub const DEFAULT_LEVEL_NEAR_BONUS: f64 = 1.0;
}

/// Ranking and validation limits
pub mod limits {
    /// Default number of recommendations returned when no limit is given
    pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 5;

    /// Lowest accepted self-reported fitness level
    pub const MIN_FITNESS_LEVEL: u8 = 1;

    /// Highest accepted self-reported fitness level
    pub const MAX_FITNESS_LEVEL: u8 = 10;
}

/// Workout plan template constants
pub mod plan {
    /// Minutes reserved for warmup plus cooldown around the main block
    pub const WARMUP_COOLDOWN_OVERHEAD_MINUTES: u32 = 10;

    /// Minutes per circuit repetition in the interval template
    pub const CIRCUIT_MINUTES: u32 = 5;

    /// Baseline daily hydration recommendation in liters
    pub const BASE_HYDRATION_LITERS: f64 = 2.5;

    /// Extra hydration in liters for a high preferred intensity
    pub const HIGH_INTENSITY_HYDRATION_BONUS_LITERS: f64 = 0.5;
}
