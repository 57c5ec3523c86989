// ABOUTME: Criterion benchmarks for activity scoring, ranking, and plan assembly
// ABOUTME: Measures per-activity formula cost and the full catalog-to-plan pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitrec Project

//! Criterion benchmarks for the scoring formulas and the request pipeline.
//!
//! Measures single-activity scoring for both strategies, a full catalog
//! ranking, and end-to-end plan assembly.

#![allow(clippy::missing_docs_in_private_items, clippy::unwrap_used, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fitrec::config::{EngineConfig, ScoringStrategy};
use fitrec::dataset::ActivityCatalog;
use fitrec::intelligence::{ranking, scoring, RecommendationEngine};
use fitrec::models::{Gender, Goal, IntensityLevel, UserProfile};

fn bench_profile() -> UserProfile {
    UserProfile {
        age: 34,
        gender: Gender::Unspecified,
        fitness_level: 7,
        goal: Goal::MuscleGain,
        available_time_minutes: 60,
        preferred_intensity: IntensityLevel::Medium,
    }
}

fn strategy_config(strategy: ScoringStrategy) -> EngineConfig {
    let mut config = EngineConfig::default();
    config.strategy = strategy;
    config
}

fn bench_single_activity_scoring(c: &mut Criterion) {
    let profile = bench_profile();
    let catalog = ActivityCatalog::builtin();
    let activity = catalog.get("Weight Training").unwrap();

    let mut group = c.benchmark_group("score_single_activity");
    for strategy in [ScoringStrategy::WeightedMatch, ScoringStrategy::AdditivePoints] {
        let config = strategy_config(strategy);
        group.bench_with_input(
            BenchmarkId::from_parameter(strategy.display_name()),
            &config,
            |b, config| {
                b.iter(|| scoring::score(black_box(config), black_box(&profile), black_box(activity)));
            },
        );
    }
    group.finish();
}

fn bench_full_catalog_ranking(c: &mut Criterion) {
    let profile = bench_profile();
    let catalog = ActivityCatalog::builtin();

    let mut group = c.benchmark_group("rank_builtin_catalog");
    for strategy in [ScoringStrategy::WeightedMatch, ScoringStrategy::AdditivePoints] {
        let config = strategy_config(strategy);
        group.bench_with_input(
            BenchmarkId::from_parameter(strategy.display_name()),
            &config,
            |b, config| {
                b.iter(|| {
                    ranking::rank(
                        black_box(config),
                        black_box(&catalog),
                        black_box(&profile),
                        catalog.len(),
                    )
                });
            },
        );
    }
    group.finish();
}

fn bench_plan_assembly(c: &mut Criterion) {
    let engine = RecommendationEngine::new();
    let profiles = [
        ("weight_loss", Goal::WeightLoss),
        ("muscle_gain", Goal::MuscleGain),
        ("endurance", Goal::Endurance),
    ];

    let mut group = c.benchmark_group("build_plan");
    for (name, goal) in profiles {
        let mut profile = bench_profile();
        profile.goal = goal;
        group.bench_with_input(BenchmarkId::from_parameter(name), &profile, |b, profile| {
            b.iter(|| engine.build_plan(black_box(profile)).unwrap());
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_single_activity_scoring,
    bench_full_catalog_ranking,
    bench_plan_assembly,
);
criterion_main!(benches);
