// ABOUTME: Intelligence module grouping scoring, ranking, scheduling, and planning
// ABOUTME: Re-exports the RecommendationEngine facade and its component functions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitrec Project

//! # Intelligence Module
//!
//! The computational core of the crate: pure scoring formulas, the stable
//! descending ranker, the day-type weekly scheduler, and the goal-keyed plan
//! assembler, all fronted by [`RecommendationEngine`].
//!
//! Every function here is deterministic and synchronous. The only inputs are
//! the immutable activity catalog, the validated user profile, and the engine
//! configuration; there is no hidden state and no randomness.

/// Recommendation engine facade
pub mod engine;
/// Goal-keyed workout plan templates and interpolation
pub mod planner;
/// Stable descending ranking with limit clamping
pub mod ranking;
/// Weekly day-type scheduling and activity classification
pub mod schedule;
/// Match scoring strategies
pub mod scoring;

pub use engine::RecommendationEngine;
pub use ranking::rank;
pub use schedule::{classify_activity, DayType};
pub use scoring::score;
