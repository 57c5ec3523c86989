// ABOUTME: Core data models for activities, user profiles, and workout plans
// ABOUTME: Re-exports ActivityProfile, UserProfile, WorkoutPlan and related enums
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitrec Project

//! # Data Models
//!
//! Core data structures of the recommendation engine.
//!
//! ## Design Principles
//!
//! - **Input/output only**: models carry data between the caller and the
//!   engine; they hold no behavior beyond parsing, validation, and display
//! - **Serializable**: all models support JSON for file-based profiles and
//!   machine-readable CLI output
//! - **Type safe**: enums with explicit fallback variants instead of loose
//!   strings in computation paths
//!
//! ## Core Models
//!
//! - [`ActivityProfile`]: averaged reference metrics for one named activity
//! - [`UserProfile`]: validated self-reported attributes and stated goal
//! - [`ProfileInput`]: raw, not-yet-validated profile fields
//! - [`ScoredActivity`]: an activity paired with its computed match score
//! - [`WorkoutPlan`]: templated plan with an interpolated weekly schedule

// Domain modules
mod activity;
mod plan;
mod profile;

// Re-export all public types for convenience
pub use activity::{ActivityProfile, IntensityLevel, ScoredActivity};
pub use plan::{DaySlot, DayType, ScheduledDay, WeeklySchedule, WorkoutPlan};
pub use profile::{Gender, Goal, ProfileInput, UserProfile};
