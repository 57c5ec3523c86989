// ABOUTME: Stable descending ranking of scored activities with limit clamping
// ABOUTME: Ties keep catalog order; an empty catalog yields an empty ranking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitrec Project

use std::cmp::Ordering;

use super::scoring;
use crate::config::EngineConfig;
use crate::dataset::ActivityCatalog;
use crate::models::{ScoredActivity, UserProfile};

/// Score every catalog activity and return the top `limit` in non-increasing
/// score order.
///
/// The sort is stable, so activities with equal scores keep their catalog
/// order. `limit` is clamped to the catalog size; an empty catalog produces
/// an empty ranking since "no recommendations" is a valid, displayable
/// outcome rather than a failure.
#[must_use]
pub fn rank(
    config: &EngineConfig,
    catalog: &ActivityCatalog,
    profile: &UserProfile,
    limit: usize,
) -> Vec<ScoredActivity> {
    let mut scored: Vec<ScoredActivity> = catalog
        .activities()
        .iter()
        .map(|activity| ScoredActivity {
            activity: activity.clone(),
            score: scoring::score(config, profile, activity),
        })
        .collect();

    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    scored.truncate(limit);
    scored
}
