// ABOUTME: Main library entry point for the fitrec activity recommendation engine
// ABOUTME: Exposes the catalog, profile models, scoring strategies, and plan assembly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitrec Project

#![deny(unsafe_code)]

//! # Fitrec
//!
//! A small, deterministic activity recommendation and workout planning
//! engine. Given a validated user profile and a static catalog of activities
//! with averaged metrics, it ranks the best-matching activities and assembles
//! a goal-keyed workout plan with a blended weekly schedule.
//!
//! ## Features
//!
//! - **Two scoring strategies**: a weighted-match formula and an
//!   additive-points preset, selectable by configuration
//! - **Stable ranking**: descending by score, ties keep catalog order
//! - **Goal-keyed plans**: canned templates with interpolated durations,
//!   circuit counts, and hydration guidance
//! - **Weekly blending**: ranked activities distributed over cardio,
//!   strength, and recovery day slots
//! - **Strict validation**: partial profiles fail with one error naming
//!   every offending field; harmless input drift falls back with a log line
//!   instead of failing
//!
//! ## Example Usage
//!
//! ```rust
//! use fitrec::intelligence::RecommendationEngine;
//! use fitrec::models::ProfileInput;
//!
//! let profile = ProfileInput {
//!     age: Some(34),
//!     gender: Some("female".into()),
//!     fitness_level: Some(7),
//!     goal: Some("muscle_gain".into()),
//!     available_time_minutes: Some(60),
//!     preferred_intensity: Some("Medium".into()),
//! }
//! .into_profile()?;
//!
//! let engine = RecommendationEngine::new();
//! let top = engine.get_recommendations(&profile, None)?;
//! assert_eq!(top[0].activity.name, "Weight Training");
//!
//! let plan = engine.build_plan(&profile)?;
//! assert_eq!(plan.title, "Muscle Building Program");
//! # Ok::<(), fitrec::errors::AppError>(())
//! ```

/// Engine configuration with environment overrides
pub mod config;

/// Numeric constants grouped by domain
pub mod constants;

/// Static activity catalog and its invariants
pub mod dataset;

/// Unified error handling
pub mod errors;

/// Scoring, ranking, scheduling, and plan assembly
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Core data models
pub mod models;

// Re-export the types most callers need at the crate root.
pub use config::{EngineConfig, ScoringStrategy};
pub use dataset::ActivityCatalog;
pub use errors::{AppError, AppResult};
pub use intelligence::RecommendationEngine;
