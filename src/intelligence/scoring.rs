// ABOUTME: Match scoring strategies comparing a user profile to catalog activities
// ABOUTME: Implements the weighted-match formula and the additive-points preset
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitrec Project

//! # Match Scoring
//!
//! Two interchangeable strategies compute how well an activity suits a
//! profile:
//!
//! - **Weighted match** blends four normalized terms (fitness level, goal,
//!   session time, intensity) with weights that sum to 1.0. The result is
//!   approximately in `[0, 1]` but deliberately not clamped: a calorie-dense
//!   activity can push the weight-loss goal term above 1.0, which is a known
//!   quirk of the formula and kept visible rather than hidden.
//! - **Additive points** accumulates a goal-weighted base plus flat proximity
//!   bonuses into an unbounded leaderboard-style total.
//!
//! Both are pure and deterministic: the same profile and activity always
//! yield the same score. Unknown goals score with a documented neutral
//! contribution; the engine entry points log that fallback once per request
//! so it stays visible without flooding per-activity logs.

use crate::config::{EngineConfig, PointsBonuses, ScoringStrategy, ScoringWeights};
use crate::constants::points::{
    CALORIE_MULTIPLIER, EFFECTIVENESS_MULTIPLIER, FOCUS_MULTIPLIER, MAINTENANCE_FOCUS_MULTIPLIER,
};
use crate::constants::scoring::{
    ENDURANCE_FOCUS_SCALE, FALLBACK_GOAL_MATCH, FITNESS_LEVEL_SCALE, INTENSITY_RANK_SPAN,
    MAINTENANCE_GOAL_MATCH, STRENGTH_FOCUS_SCALE, TIME_WINDOW_MINUTES, WEIGHT_LOSS_CALORIE_SCALE,
};
use crate::models::{ActivityProfile, Goal, IntensityLevel, UserProfile};

/// Score one activity against a profile using the configured strategy.
#[must_use]
pub fn score(config: &EngineConfig, profile: &UserProfile, activity: &ActivityProfile) -> f64 {
    match config.strategy {
        ScoringStrategy::WeightedMatch => weighted_match(&config.weights, profile, activity),
        ScoringStrategy::AdditivePoints => additive_points(&config.bonuses, profile, activity),
    }
}

/// Weighted-match score: four normalized terms blended by configured weights.
#[must_use]
pub fn weighted_match(
    weights: &ScoringWeights,
    profile: &UserProfile,
    activity: &ActivityProfile,
) -> f64 {
    let fitness = fitness_match(profile, activity);
    let goal = goal_match(&profile.goal, activity);
    let time = time_match(profile, activity);
    let intensity = intensity_match(profile.preferred_intensity, activity.avg_intensity);

    fitness * weights.fitness_weight
        + goal * weights.goal_weight
        + time * weights.time_weight
        + intensity * weights.intensity_weight
}

/// Additive-points score: goal-weighted base plus flat proximity bonuses.
#[must_use]
pub fn additive_points(
    bonuses: &PointsBonuses,
    profile: &UserProfile,
    activity: &ActivityProfile,
) -> f64 {
    base_points(&profile.goal, activity)
        + intensity_bonus(bonuses, profile, activity)
        + time_bonus(bonuses, profile, activity)
        + level_bonus(bonuses, profile, activity)
}

/// Alignment of self-reported fitness level with the activity's sweet spot,
/// both normalized to the 0-1 range.
fn fitness_match(profile: &UserProfile, activity: &ActivityProfile) -> f64 {
    let self_level = f64::from(profile.fitness_level) / FITNESS_LEVEL_SCALE;
    let activity_level = activity.avg_fitness_level / FITNESS_LEVEL_SCALE;
    1.0 - (self_level - activity_level).abs()
}

/// Goal-dependent term. Higher calorie burn favors weight loss, the focus
/// metrics favor their goals, maintenance prefers balanced activities, and
/// unknown goals get a neutral constant.
fn goal_match(goal: &Goal, activity: &ActivityProfile) -> f64 {
    match goal {
        Goal::WeightLoss => activity.avg_calories_burned / WEIGHT_LOSS_CALORIE_SCALE,
        Goal::MuscleGain => activity.strength_focus / STRENGTH_FOCUS_SCALE,
        Goal::Endurance => activity.endurance_focus / ENDURANCE_FOCUS_SCALE,
        Goal::Maintenance => MAINTENANCE_GOAL_MATCH,
        Goal::Other(_) => FALLBACK_GOAL_MATCH,
    }
}

/// How closely the typical session length fits the available time, saturating
/// once the gap reaches a full hour.
fn time_match(profile: &UserProfile, activity: &ActivityProfile) -> f64 {
    let gap = (f64::from(profile.available_time_minutes) - activity.avg_duration_minutes).abs();
    1.0 - (gap / TIME_WINDOW_MINUTES).min(1.0)
}

/// Distance between intensity ranks mapped onto 0-1; exact match scores 1.0.
fn intensity_match(preferred: IntensityLevel, actual: IntensityLevel) -> f64 {
    let distance = f64::from(preferred.rank().abs_diff(actual.rank()));
    1.0 - distance / INTENSITY_RANK_SPAN
}

/// Goal-weighted base points. Unknown goals borrow the balanced maintenance
/// base so they still rank meaningfully.
fn base_points(goal: &Goal, activity: &ActivityProfile) -> f64 {
    match goal {
        Goal::WeightLoss => {
            activity.avg_calories_burned * CALORIE_MULTIPLIER
                + activity.effectiveness * EFFECTIVENESS_MULTIPLIER
        }
        Goal::MuscleGain => {
            activity.strength_focus * FOCUS_MULTIPLIER
                + activity.effectiveness * EFFECTIVENESS_MULTIPLIER
        }
        Goal::Endurance => {
            activity.endurance_focus * FOCUS_MULTIPLIER
                + activity.effectiveness * EFFECTIVENESS_MULTIPLIER
        }
        Goal::Maintenance | Goal::Other(_) => {
            (activity.strength_focus + activity.endurance_focus) * MAINTENANCE_FOCUS_MULTIPLIER
                + activity.effectiveness
        }
    }
}

fn intensity_bonus(
    bonuses: &PointsBonuses,
    profile: &UserProfile,
    activity: &ActivityProfile,
) -> f64 {
    if profile.preferred_intensity == activity.avg_intensity {
        bonuses.intensity_match_bonus
    } else {
        0.0
    }
}

fn time_bonus(bonuses: &PointsBonuses, profile: &UserProfile, activity: &ActivityProfile) -> f64 {
    let gap = (f64::from(profile.available_time_minutes) - activity.avg_duration_minutes).abs();
    if gap <= bonuses.time_close_minutes {
        bonuses.time_close_bonus
    } else if gap <= bonuses.time_near_minutes {
        bonuses.time_near_bonus
    } else {
        0.0
    }
}

fn level_bonus(bonuses: &PointsBonuses, profile: &UserProfile, activity: &ActivityProfile) -> f64 {
    let gap = (f64::from(profile.fitness_level) - activity.avg_fitness_level).abs();
    if gap <= bonuses.level_close_delta {
        bonuses.level_close_bonus
    } else if gap <= bonuses.level_near_delta {
        bonuses.level_near_bonus
    } else {
        0.0
    }
}
