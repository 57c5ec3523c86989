// ABOUTME: Goal-keyed workout plan templates with numeric interpolation
// ABOUTME: Unmatched goals receive the generic single-line plan with a logged fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitrec Project

//! # Plan Assembly
//!
//! Each known goal maps to a canned template; unmatched goals fall back to a
//! generic plan. Templates interpolate three derived numbers:
//!
//! - main block minutes = available time minus the warmup/cooldown overhead
//!   (saturating at zero for very short sessions)
//! - circuit rounds = main block minutes divided by the per-circuit minutes,
//!   rounded down
//! - daily hydration = baseline liters plus a bonus when the preferred
//!   intensity is high
//!
//! Assembly is infallible for a validated profile; the engine entry points
//! validate before any template is selected.

use tracing::warn;

use crate::config::PlanConfig;
use crate::models::{Goal, IntensityLevel, UserProfile, WeeklySchedule, WorkoutPlan};

/// Build the workout plan for a profile's goal, blending in the prepared
/// weekly schedule.
#[must_use]
pub fn assemble(config: &PlanConfig, profile: &UserProfile, schedule: WeeklySchedule) -> WorkoutPlan {
    match &profile.goal {
        Goal::WeightLoss => weight_loss_plan(config, profile, schedule),
        Goal::MuscleGain => muscle_gain_plan(config, profile, schedule),
        Goal::Endurance => endurance_plan(config, profile, schedule),
        Goal::Maintenance => general_plan(config, profile, schedule),
        Goal::Other(raw) => {
            warn!(goal = raw.as_str(), "goal not recognized, using general plan");
            general_plan(config, profile, schedule)
        }
    }
}

/// Minutes for the main block after reserving warmup and cooldown time.
fn main_block_minutes(config: &PlanConfig, profile: &UserProfile) -> u32 {
    profile
        .available_time_minutes
        .saturating_sub(config.warmup_cooldown_overhead_minutes)
}

/// Split the overhead between warmup and cooldown.
fn split_overhead(config: &PlanConfig) -> (u32, u32) {
    let warmup = config.warmup_cooldown_overhead_minutes / 2;
    let cooldown = config.warmup_cooldown_overhead_minutes - warmup;
    (warmup, cooldown)
}

fn weight_loss_plan(
    config: &PlanConfig,
    profile: &UserProfile,
    schedule: WeeklySchedule,
) -> WorkoutPlan {
    let main_minutes = main_block_minutes(config, profile);
    let circuits = main_minutes / config.circuit_minutes;
    let (warmup_minutes, cooldown_minutes) = split_overhead(config);

    let hydration = config.base_hydration_liters
        + if profile.preferred_intensity == IntensityLevel::High {
            config.high_intensity_hydration_bonus_liters
        } else {
            0.0
        };

    WorkoutPlan {
        title: "Weight Loss Program".into(),
        description: "High-burn interval training that maximizes calories within your available time.".into(),
        warmup: format!("{warmup_minutes} minutes of light cardio and dynamic stretches"),
        workout: vec![
            format!(
                "{main_minutes}-minute fat-burning circuit at {} intensity",
                profile.preferred_intensity.display_name()
            ),
            format!("{circuits} circuit rounds: jumping jacks, mountain climbers, burpees, high knees"),
            "1 minute of rest between rounds".into(),
        ],
        cool_down: format!("{cooldown_minutes} minutes of walking and static stretching"),
        recommendations: vec![
            format!("Drink at least {hydration:.1} L of water daily"),
            "Hold a moderate calorie deficit of 300-500 kcal below maintenance".into(),
            "Take at least one full rest day per week".into(),
        ],
        weekly_schedule: schedule,
    }
}

fn muscle_gain_plan(
    config: &PlanConfig,
    profile: &UserProfile,
    schedule: WeeklySchedule,
) -> WorkoutPlan {
    let main_minutes = main_block_minutes(config, profile);
    let (warmup_minutes, cooldown_minutes) = split_overhead(config);

    WorkoutPlan {
        title: "Muscle Building Program".into(),
        description: "Progressive resistance training to add strength and lean mass.".into(),
        warmup: format!("{warmup_minutes} minutes of activation work and light warm-up sets"),
        workout: vec![
            format!("{main_minutes}-minute strength session"),
            "4 sets of 8-12 reps: squats, push-ups, rows, lunges".into(),
            "Rest 60-90 seconds between sets".into(),
        ],
        cool_down: format!("{cooldown_minutes} minutes of static stretching for worked muscles"),
        recommendations: vec![
            "Eat 1.6-2.2g protein per kg body weight daily".into(),
            "Add load or reps each week to keep progressing".into(),
            "Sleep 7-9 hours to support recovery".into(),
        ],
        weekly_schedule: schedule,
    }
}

fn endurance_plan(
    config: &PlanConfig,
    profile: &UserProfile,
    schedule: WeeklySchedule,
) -> WorkoutPlan {
    let main_minutes = main_block_minutes(config, profile);
    let (warmup_minutes, cooldown_minutes) = split_overhead(config);

    WorkoutPlan {
        title: "Endurance Improvement Program".into(),
        description: "Steady aerobic volume with short tempo work to raise your endurance.".into(),
        warmup: format!("{warmup_minutes} minutes of easy-pace build-up"),
        workout: vec![
            format!("{main_minutes} minutes of steady-state cardio at a conversational pace"),
            "3 tempo pickups of 2 minutes spread through the session".into(),
        ],
        cool_down: format!("{cooldown_minutes} minutes of easy movement and stretching"),
        recommendations: vec![
            "Increase weekly volume by no more than 10 percent".into(),
            "Fuel with carbohydrates before sessions over an hour".into(),
        ],
        weekly_schedule: schedule,
    }
}

/// Generic fallback plan shared by the maintenance goal and unmatched goals.
fn general_plan(
    config: &PlanConfig,
    profile: &UserProfile,
    schedule: WeeklySchedule,
) -> WorkoutPlan {
    let main_minutes = main_block_minutes(config, profile);
    let (warmup_minutes, cooldown_minutes) = split_overhead(config);

    WorkoutPlan {
        title: "General Fitness Plan".into(),
        description: "A balanced routine for overall fitness.".into(),
        warmup: format!("{warmup_minutes} minutes of gentle mobility work"),
        workout: vec![format!(
            "{main_minutes} minutes of any activity you enjoy at a comfortable effort"
        )],
        cool_down: format!("{cooldown_minutes} minutes of stretching and deep breathing"),
        recommendations: vec![
            "Consistency beats intensity: three sessions per week is a solid baseline".into(),
            "Mix cardio, strength, and mobility across the week".into(),
        ],
        weekly_schedule: schedule,
    }
}
