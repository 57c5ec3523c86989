// ABOUTME: Unified error types for profile validation and catalog invariants
// ABOUTME: Provides AppError, FieldIssue, and the crate-wide AppResult alias
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitrec Project

//! # Unified Error Handling
//!
//! Errors here are the *hard* failures of the crate: a profile that cannot be
//! trusted, or a catalog that violates its unique-name invariant. Recoverable
//! drift (unknown goal strings, unknown intensity tiers, an empty catalog) is
//! deliberately **not** an error: those paths fall back to documented
//! defaults and are logged instead, so the recommendation flow stays usable
//! with imperfect input.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Crate-wide result alias.
pub type AppResult<T> = Result<T, AppError>;

/// A single problem with one profile field.
///
/// Issues are collected rather than returned one at a time, so a caller can
/// surface every offending field in a single message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldIssue {
    /// Field name as it appears in the profile input
    pub field: String,
    /// Why the field was rejected
    pub reason: String,
}

impl FieldIssue {
    /// Create an issue for a field.
    #[must_use]
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Issue for a field absent from the input.
    #[must_use]
    pub fn missing(field: impl Into<String>) -> Self {
        Self::new(field, "is required")
    }

    /// Issue for a field outside its declared range.
    #[must_use]
    pub fn out_of_range(field: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::new(field, format!("must be {}", expected.into()))
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.reason)
    }
}

/// Render collected field issues as one readable clause.
fn format_issues(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Application errors for the recommendation core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// One or more required profile fields are missing, unparseable, or out
    /// of their declared range. A partial profile never produces a partially
    /// computed ranking or plan.
    #[error("invalid profile: {}", format_issues(.issues))]
    InvalidProfile {
        /// Every offending field, in input order
        issues: Vec<FieldIssue>,
    },

    /// Two catalog entries share a name. Names are the join key between the
    /// catalog and the day-type table, so they must be unique.
    #[error("duplicate activity '{name}' in catalog")]
    DuplicateActivity {
        /// The repeated activity name
        name: String,
    },
}

impl AppError {
    /// Create an invalid-profile error from collected issues.
    #[must_use]
    pub fn invalid_profile(issues: Vec<FieldIssue>) -> Self {
        Self::InvalidProfile { issues }
    }

    /// Create an invalid-profile error for a single field.
    #[must_use]
    pub fn invalid_field(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidProfile {
            issues: vec![FieldIssue::new(field, reason)],
        }
    }

    /// Create a duplicate-activity error.
    #[must_use]
    pub fn duplicate_activity(name: impl Into<String>) -> Self {
        Self::DuplicateActivity { name: name.into() }
    }

    /// Field issues carried by this error, if any.
    #[must_use]
    pub fn issues(&self) -> &[FieldIssue] {
        match self {
            Self::InvalidProfile { issues } => issues,
            Self::DuplicateActivity { .. } => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_profile_message_names_every_field() {
        let err = AppError::invalid_profile(vec![
            FieldIssue::missing("available_time_minutes"),
            FieldIssue::out_of_range("fitness_level", "between 1 and 10"),
        ]);
        let message = err.to_string();
        assert!(message.contains("available_time_minutes is required"));
        assert!(message.contains("fitness_level must be between 1 and 10"));
    }

    #[test]
    fn duplicate_activity_message_names_the_activity() {
        let err = AppError::duplicate_activity("Swimming");
        assert_eq!(err.to_string(), "duplicate activity 'Swimming' in catalog");
    }
}
