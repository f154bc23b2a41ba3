//! # Planner Configuration Module
//!
//! This module defines the configuration for a planning session: where the
//! catalog lives, where the exported document goes, which days are planned
//! and how many options are offered per day.

use log::warn;
use std::env;
use std::path::PathBuf;

// Constants for planner configuration
pub const DEFAULT_CATALOG_PATH: &str = "recipes.json";
pub const DEFAULT_OUTPUT_PATH: &str = "meal_plan.html";
pub const DEFAULT_OPTIONS_PER_DAY: usize = 2;
pub const DEFAULT_DAYS: [&str; 6] = [
    "sunday",
    "sunday meal prep",
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
];

// Environment variables read by `PlannerConfig::from_env`
pub const CATALOG_ENV_VAR: &str = "MEAL_PLANNER_CATALOG";
pub const OUTPUT_ENV_VAR: &str = "MEAL_PLANNER_OUTPUT";
pub const OPTIONS_PER_DAY_ENV_VAR: &str = "MEAL_PLANNER_OPTIONS_PER_DAY";
pub const DAYS_ENV_VAR: &str = "MEAL_PLANNER_DAYS";

/// Configuration structure for meal planning
#[derive(Debug, Clone, PartialEq)]
pub struct PlannerConfig {
    /// Path of the JSON recipe catalog
    pub catalog_path: PathBuf,
    /// Path of the exported HTML document
    pub output_path: PathBuf,
    /// Planned days, in display order; each is also a catalog category key
    pub days: Vec<String>,
    /// Random options offered per day when the pool is large enough
    pub options_per_day: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            days: DEFAULT_DAYS.iter().map(|d| d.to_string()).collect(),
            options_per_day: DEFAULT_OPTIONS_PER_DAY,
        }
    }
}

impl PlannerConfig {
    /// Build a configuration from environment variables, falling back to defaults.
    ///
    /// Call `dotenv::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup(CATALOG_ENV_VAR) {
            config.catalog_path = PathBuf::from(path);
        }
        if let Some(path) = lookup(OUTPUT_ENV_VAR) {
            config.output_path = PathBuf::from(path);
        }
        if let Some(raw) = lookup(OPTIONS_PER_DAY_ENV_VAR) {
            match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => config.options_per_day = n,
                _ => warn!(
                    "Ignoring {}='{}': expected a positive integer",
                    OPTIONS_PER_DAY_ENV_VAR, raw
                ),
            }
        }
        if let Some(raw) = lookup(DAYS_ENV_VAR) {
            let days: Vec<String> = raw
                .split(',')
                .map(|d| d.trim().to_lowercase())
                .filter(|d| !d.is_empty())
                .collect();
            if days.is_empty() {
                warn!("Ignoring empty {}", DAYS_ENV_VAR);
            } else {
                config.days = days;
            }
        }

        config
    }
}
