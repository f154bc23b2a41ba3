//! # Weekly Meal Planner
//!
//! Plans weekly meals from a recipe catalog and produces a consolidated
//! shopping list. The core is the amount engine: free-form amounts such as
//! "1 1/2 cups" or "a pinch" are parsed into exact quantities and canonical
//! units, then every occurrence of an ingredient is merged into one
//! human-readable total.

pub mod amount_model;
pub mod amount_parser;
pub mod amount_patterns;
pub mod catalog;
pub mod cli;
pub mod consolidator;
pub mod formatter;
pub mod html_export;
pub mod meal_plan;
pub mod planner_config;
pub mod planner_errors;
pub mod shopping_list;
pub mod units;
