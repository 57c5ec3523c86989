// ABOUTME: Fitrec CLI - command-line front end for recommendations and workout plans
// ABOUTME: Collects profile fields from flags or a JSON file and renders results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitrec Project

//!
//! Usage:
//! ```bash
//! # Rank the best-matching activities for a profile given on the command line
//! fitrec-cli recommend --age 34 --gender female --fitness-level 7 \
//!     --goal muscle_gain --available-time 60 --intensity medium
//!
//! # Same profile from a JSON file, machine-readable output
//! fitrec-cli recommend --profile profile.json --json
//!
//! # Assemble the goal-keyed workout plan with the weekly schedule
//! fitrec-cli plan --profile profile.json
//!
//! # Use the additive-points preset and a custom limit
//! fitrec-cli recommend --profile profile.json --strategy additive --limit 3
//!
//! # List the built-in activity catalog, or just the most effective entries
//! fitrec-cli activities
//! fitrec-cli activities --top-effectiveness 5
//! ```

mod commands;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};

use fitrec::config::{EngineConfig, ScoringStrategy};
use fitrec::intelligence::RecommendationEngine;
use fitrec::logging::LoggingConfig;
use fitrec::models::ProfileInput;

#[derive(Parser)]
#[command(
    name = "fitrec-cli",
    about = "Activity recommendation and workout planning CLI",
    long_about = "Ranks catalog activities against a user profile and assembles goal-keyed workout plans with a blended weekly schedule.",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Emit machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Rank the best-matching activities for a profile
    Recommend {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Number of recommendations to return
        #[arg(long)]
        limit: Option<usize>,

        /// Scoring strategy (weighted_match or additive_points)
        #[arg(long)]
        strategy: Option<String>,
    },

    /// Assemble the workout plan for a profile
    Plan {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Scoring strategy used for the weekly schedule blending
        #[arg(long)]
        strategy: Option<String>,
    },

    /// List the activity catalog
    Activities {
        /// Show only the N most effective activities
        #[arg(long, value_name = "N")]
        top_effectiveness: Option<usize>,
    },
}

/// Profile fields, from flags or a JSON file. Flags override file values.
#[derive(Args)]
struct ProfileArgs {
    /// Path to a JSON profile document
    #[arg(long)]
    profile: Option<PathBuf>,

    /// Age in years
    #[arg(long)]
    age: Option<u32>,

    /// Gender
    #[arg(long)]
    gender: Option<String>,

    /// Self-reported fitness level (1-10)
    #[arg(long)]
    fitness_level: Option<u8>,

    /// Fitness goal (weight_loss, muscle_gain, endurance, maintenance)
    #[arg(long)]
    goal: Option<String>,

    /// Minutes available per workout session
    #[arg(long)]
    available_time: Option<u32>,

    /// Preferred intensity (low, medium, high)
    #[arg(long)]
    intensity: Option<String>,
}

impl ProfileArgs {
    /// Merge the JSON document (if any) with command-line overrides.
    fn into_input(self) -> Result<ProfileInput> {
        let mut input = match &self.profile {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read profile file {}", path.display()))?;
                ProfileInput::from_json_str(&raw)?
            }
            None => ProfileInput::default(),
        };

        if self.age.is_some() {
            input.age = self.age;
        }
        if self.gender.is_some() {
            input.gender = self.gender;
        }
        if self.fitness_level.is_some() {
            input.fitness_level = self.fitness_level;
        }
        if self.goal.is_some() {
            input.goal = self.goal;
        }
        if self.available_time.is_some() {
            input.available_time_minutes = self.available_time;
        }
        if self.intensity.is_some() {
            input.preferred_intensity = self.intensity;
        }

        Ok(input)
    }
}

/// Build the engine configuration from the environment plus CLI overrides.
fn engine_config(strategy: Option<&str>) -> Result<EngineConfig> {
    let mut config = EngineConfig::from_environment().context("invalid engine configuration")?;

    if let Some(raw) = strategy {
        match ScoringStrategy::from_input_string(raw) {
            Some(parsed) => config.strategy = parsed,
            None => bail!("unknown scoring strategy '{raw}' (expected weighted_match or additive_points)"),
        }
    }

    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging.level = "debug".into();
    }
    logging.init()?;

    match cli.command {
        Command::Recommend {
            profile,
            limit,
            strategy,
        } => {
            let engine = RecommendationEngine::with_config(engine_config(strategy.as_deref())?);
            commands::recommend(&engine, profile.into_input()?, limit, cli.json)
        }
        Command::Plan { profile, strategy } => {
            let engine = RecommendationEngine::with_config(engine_config(strategy.as_deref())?);
            commands::plan(&engine, profile.into_input()?, cli.json)
        }
        Command::Activities { top_effectiveness } => {
            let engine = RecommendationEngine::with_config(engine_config(None)?);
            commands::activities(&engine, top_effectiveness, cli.json)
        }
    }
}
