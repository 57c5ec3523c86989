// ABOUTME: Integration tests pinning the two scoring formulas to hand-computed values
// ABOUTME: Guards the weighted-match terms and additive-points bonuses against drift
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitrec Project

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fitrec::config::EngineConfig;
use fitrec::dataset::ActivityCatalog;
use fitrec::intelligence::scoring;
use fitrec::models::{ActivityProfile, Gender, Goal, IntensityLevel, UserProfile};

fn profile(goal: Goal, fitness_level: u8, minutes: u32, intensity: IntensityLevel) -> UserProfile {
    UserProfile {
        age: 30,
        gender: Gender::Unspecified,
        fitness_level,
        goal,
        available_time_minutes: minutes,
        preferred_intensity: intensity,
    }
}

fn builtin(name: &str) -> ActivityProfile {
    ActivityCatalog::builtin()
        .get(name)
        .cloned()
        .expect("builtin activity")
}

#[test]
fn test_weighted_match_weight_training_for_muscle_gain() {
    // fitness 0.98, goal 0.90, time 1 - 15.8/60, intensity 1.0
    // = 0.3*0.98 + 0.3*0.90 + 0.2*0.736667 + 0.2*1.0
    let p = profile(Goal::MuscleGain, 7, 60, IntensityLevel::Medium);
    let weights = EngineConfig::default().weights;
    let score = scoring::weighted_match(&weights, &p, &builtin("Weight Training"));
    assert!((score - 0.911_333_3).abs() < 1e-6);
}

#[test]
fn test_weighted_match_swimming_for_muscle_gain() {
    // fitness 0.92, goal 0.70, time 0.91, intensity 1.0
    let p = profile(Goal::MuscleGain, 7, 60, IntensityLevel::Medium);
    let weights = EngineConfig::default().weights;
    let score = scoring::weighted_match(&weights, &p, &builtin("Swimming"));
    assert!((score - 0.868).abs() < 1e-6);
}

#[test]
fn test_weighted_match_hiit_for_weight_loss_exceeds_calorie_scale() {
    // HIIT burns 26.4 kcal/min; the goal term 26.4/20 = 1.32 pushes the
    // blended score close to 1.0 even with a mid fitness level.
    let p = profile(Goal::WeightLoss, 5, 45, IntensityLevel::High);
    let weights = EngineConfig::default().weights;
    let score = scoring::weighted_match(&weights, &p, &builtin("HIIT"));
    assert!((score - 0.986_333_3).abs() < 1e-6);
}

#[test]
fn test_weighted_match_low_intensity_mismatch_zeroes_the_term() {
    // Yoga is Low, preference High: rank distance 2 of a possible 2.
    let p = profile(Goal::WeightLoss, 5, 45, IntensityLevel::High);
    let weights = EngineConfig::default().weights;
    let score = scoring::weighted_match(&weights, &p, &builtin("Yoga"));
    assert!((score - 0.47).abs() < 1e-6);
}

#[test]
fn test_additive_points_weight_training_for_muscle_gain() {
    // base 9*4 + 8.5*2 = 53, +5 intensity, +1 near time, +3 close level
    let p = profile(Goal::MuscleGain, 7, 60, IntensityLevel::Medium);
    let bonuses = EngineConfig::default().bonuses;
    let total = scoring::additive_points(&bonuses, &p, &builtin("Weight Training"));
    assert!((total - 62.0).abs() < 1e-9);
}

#[test]
fn test_additive_points_walking_for_muscle_gain() {
    // base 2*4 + 6.2*2 = 20.4, no intensity match, +3 close time, level
    // gap 2.8 earns nothing
    let p = profile(Goal::MuscleGain, 7, 60, IntensityLevel::Medium);
    let bonuses = EngineConfig::default().bonuses;
    let total = scoring::additive_points(&bonuses, &p, &builtin("Walking"));
    assert!((total - 23.4).abs() < 1e-9);
}

#[test]
fn test_additive_points_maintenance_base_is_balanced() {
    // Maintenance: (strength + endurance)*2 + effectiveness
    // Cycling: (6+8)*2 + 7.8 = 35.8, +5 intensity, +3 time, +3 level
    let p = profile(Goal::Maintenance, 7, 60, IntensityLevel::Medium);
    let bonuses = EngineConfig::default().bonuses;
    let total = scoring::additive_points(&bonuses, &p, &builtin("Cycling"));
    assert!((total - 46.8).abs() < 1e-9);
}

#[test]
fn test_unknown_goal_borrows_the_maintenance_base() {
    let known = profile(Goal::Maintenance, 7, 60, IntensityLevel::Medium);
    let unknown = profile(
        Goal::Other("flexibility".into()),
        7,
        60,
        IntensityLevel::Medium,
    );
    let bonuses = EngineConfig::default().bonuses;
    let cycling = builtin("Cycling");
    let a = scoring::additive_points(&bonuses, &known, &cycling);
    let b = scoring::additive_points(&bonuses, &unknown, &cycling);
    assert!((a - b).abs() < f64::EPSILON);
}

#[test]
fn test_strategies_agree_on_the_best_strength_pick() {
    let p = profile(Goal::MuscleGain, 7, 60, IntensityLevel::Medium);
    let config = EngineConfig::default();
    let wt = builtin("Weight Training");
    let yoga = builtin("Yoga");

    assert!(
        scoring::weighted_match(&config.weights, &p, &wt)
            > scoring::weighted_match(&config.weights, &p, &yoga)
    );
    assert!(
        scoring::additive_points(&config.bonuses, &p, &wt)
            > scoring::additive_points(&config.bonuses, &p, &yoga)
    );
}
