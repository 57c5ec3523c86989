// ABOUTME: Integration tests for the recommendation engine over the built-in catalog
// ABOUTME: Validates end-to-end ranking order, limits, and validation gating
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitrec Project

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fitrec::config::{EngineConfig, ScoringStrategy};
use fitrec::dataset::ActivityCatalog;
use fitrec::errors::AppError;
use fitrec::intelligence::RecommendationEngine;
use fitrec::models::{Gender, Goal, IntensityLevel, UserProfile};

fn muscle_gain_profile() -> UserProfile {
    UserProfile {
        age: 34,
        gender: Gender::Female,
        fitness_level: 7,
        goal: Goal::MuscleGain,
        available_time_minutes: 60,
        preferred_intensity: IntensityLevel::Medium,
    }
}

fn weight_loss_profile() -> UserProfile {
    UserProfile {
        age: 28,
        gender: Gender::Male,
        fitness_level: 5,
        goal: Goal::WeightLoss,
        available_time_minutes: 45,
        preferred_intensity: IntensityLevel::High,
    }
}

#[test]
fn test_muscle_gain_ranking_order() {
    let engine = RecommendationEngine::new();
    let ranked = engine
        .get_recommendations(&muscle_gain_profile(), None)
        .unwrap();

    let names: Vec<&str> = ranked.iter().map(|s| s.activity.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Weight Training", "Swimming", "Cycling", "Tennis", "HIIT"]
    );
}

#[test]
fn test_weight_loss_ranking_favors_calorie_burn() {
    let engine = RecommendationEngine::new();
    let ranked = engine
        .get_recommendations(&weight_loss_profile(), Some(3))
        .unwrap();

    assert_eq!(ranked[0].activity.name, "HIIT");
    assert_eq!(ranked[1].activity.name, "Running");
    assert_eq!(ranked[2].activity.name, "Basketball");
}

#[test]
fn test_scores_are_non_increasing() {
    let engine = RecommendationEngine::new();
    let ranked = engine
        .get_recommendations(&muscle_gain_profile(), Some(10))
        .unwrap();

    assert_eq!(ranked.len(), 10);
    for pair in ranked.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}

#[test]
fn test_explicit_limit_overrides_default() {
    let engine = RecommendationEngine::new();
    let ranked = engine
        .get_recommendations(&muscle_gain_profile(), Some(2))
        .unwrap();
    assert_eq!(ranked.len(), 2);
}

#[test]
fn test_limit_larger_than_catalog_is_clamped() {
    let engine = RecommendationEngine::new();
    let ranked = engine
        .get_recommendations(&muscle_gain_profile(), Some(500))
        .unwrap();
    assert_eq!(ranked.len(), engine.catalog().len());
}

#[test]
fn test_additive_strategy_reorders_the_field() {
    let mut config = EngineConfig::default();
    config.strategy = ScoringStrategy::AdditivePoints;
    let engine = RecommendationEngine::with_config(config);

    let ranked = engine
        .get_recommendations(&muscle_gain_profile(), Some(3))
        .unwrap();

    // Weighted match puts Swimming second; the points preset favors HIIT's
    // strength focus and effectiveness instead.
    assert_eq!(ranked[0].activity.name, "Weight Training");
    assert_eq!(ranked[1].activity.name, "HIIT");
    assert!((ranked[0].score - 62.0).abs() < 1e-9);
}

#[test]
fn test_invalid_profile_is_rejected_before_any_computation() {
    let engine = RecommendationEngine::new();
    let mut profile = muscle_gain_profile();
    profile.fitness_level = 0;
    profile.available_time_minutes = 0;

    let err = engine.get_recommendations(&profile, None).unwrap_err();
    match &err {
        AppError::InvalidProfile { issues } => {
            let fields: Vec<&str> = issues.iter().map(|i| i.field.as_str()).collect();
            assert_eq!(fields, vec!["fitness_level", "available_time_minutes"]);
        }
        other => panic!("unexpected error: {other}"),
    }

    // Plan assembly runs the same gate.
    assert!(engine.build_plan(&profile).is_err());
}

#[test]
fn test_unrecognized_goal_still_produces_a_full_ranking() {
    let engine = RecommendationEngine::new();
    let mut profile = muscle_gain_profile();
    profile.goal = Goal::Other("flexibility".into());

    let ranked = engine.get_recommendations(&profile, None).unwrap();
    assert_eq!(ranked.len(), 5);
}

#[test]
fn test_empty_catalog_yields_empty_recommendations() {
    let catalog = ActivityCatalog::new(Vec::new()).unwrap();
    let engine = RecommendationEngine::with_catalog(catalog, EngineConfig::default());

    let ranked = engine
        .get_recommendations(&muscle_gain_profile(), None)
        .unwrap();
    assert!(ranked.is_empty());
}

#[test]
fn test_engine_is_deterministic_across_calls() {
    let engine = RecommendationEngine::new();
    let first = engine
        .get_recommendations(&weight_loss_profile(), None)
        .unwrap();
    let second = engine
        .get_recommendations(&weight_loss_profile(), None)
        .unwrap();

    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.activity.name, b.activity.name);
        assert!((a.score - b.score).abs() < f64::EPSILON);
    }
}
