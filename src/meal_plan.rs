//! # Meal Plan Session
//!
//! A [`PlanSession`] holds the state of one planning session: the random
//! options offered for each day, the tentative selections, and the finalized
//! plan. Sessions share nothing, so concurrent sessions each own their own.
//!
//! ## Usage
//!
//! ```rust
//! use meal_planner::catalog::Catalog;
//! use meal_planner::meal_plan::PlanSession;
//! use meal_planner::planner_config::PlannerConfig;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let catalog = Catalog::from_json_str(r#"[
//!     {"title": "Chili", "category": "monday"},
//!     {"title": "Tacos", "category": "monday"}
//! ]"#)?;
//!
//! let mut session = PlanSession::new(&PlannerConfig::default());
//! session.generate_options(&catalog, &mut StdRng::seed_from_u64(7));
//! session.select("monday", "Tacos")?;
//!
//! let plan = session.finalize()?;
//! assert_eq!(plan.recipe_for("monday").map(|r| r.title.as_str()), Some("Tacos"));
//! # Ok::<(), meal_planner::planner_errors::PlannerError>(())
//! ```

use crate::catalog::{Catalog, Recipe};
use crate::planner_config::PlannerConfig;
use crate::planner_errors::PlannerError;
use crate::shopping_list::{build_shopping_list, IngredientRecord, ShoppingList};
use log::{debug, info};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashMap;

/// One day of a finalized plan
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedDay {
    pub day: String,
    pub recipe: Recipe,
}

/// The chosen recipe for each planned day, in configured day order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MealPlan {
    days: Vec<PlannedDay>,
}

impl MealPlan {
    pub fn new(days: Vec<PlannedDay>) -> Self {
        Self { days }
    }

    pub fn days(&self) -> &[PlannedDay] {
        &self.days
    }

    pub fn recipe_for(&self, day: &str) -> Option<&Recipe> {
        self.days
            .iter()
            .find(|planned| planned.day == day)
            .map(|planned| &planned.recipe)
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Every ingredient of every chosen recipe, in day order
    pub fn ingredient_records(&self) -> impl Iterator<Item = &IngredientRecord> {
        self.days
            .iter()
            .flat_map(|planned| planned.recipe.ingredients.iter())
    }

    /// Consolidated shopping list for the whole plan
    pub fn shopping_list(&self) -> ShoppingList {
        build_shopping_list(self.ingredient_records())
    }
}

/// State of one planning session
#[derive(Debug, Clone)]
pub struct PlanSession {
    days: Vec<String>,
    options_per_day: usize,
    options: HashMap<String, Vec<Recipe>>,
    selections: HashMap<String, String>,
    plan: Option<MealPlan>,
}

impl PlanSession {
    pub fn new(config: &PlannerConfig) -> Self {
        Self {
            days: config.days.clone(),
            options_per_day: config.options_per_day,
            options: HashMap::new(),
            selections: HashMap::new(),
            plan: None,
        }
    }

    /// Planned days in display order
    pub fn days(&self) -> &[String] {
        &self.days
    }

    /// Offer options for every day, discarding any previous state.
    ///
    /// Days whose category has at least `options_per_day` recipes get that many
    /// sampled without replacement; smaller pools are offered whole.
    pub fn generate_options<R: Rng + ?Sized>(&mut self, catalog: &Catalog, rng: &mut R) {
        self.reset();
        let groups = catalog.by_category();

        for day in &self.days {
            let pool: &[&Recipe] = groups.get(day).map(Vec::as_slice).unwrap_or_default();
            let offered: Vec<Recipe> = if pool.len() >= self.options_per_day {
                pool.choose_multiple(rng, self.options_per_day)
                    .map(|r| (*r).clone())
                    .collect()
            } else {
                pool.iter().map(|r| (*r).clone()).collect()
            };

            debug!(
                "Day '{}': {} options from a pool of {}",
                day,
                offered.len(),
                pool.len()
            );
            self.options.insert(day.clone(), offered);
        }

        info!("Generated options for {} days", self.days.len());
    }

    /// Options offered for a day (empty when none)
    pub fn options(&self, day: &str) -> &[Recipe] {
        self.options.get(day).map(Vec::as_slice).unwrap_or_default()
    }

    /// Whether any day has at least one option
    pub fn has_options(&self) -> bool {
        self.options.values().any(|opts| !opts.is_empty())
    }

    /// Choose a recipe for a day by title
    pub fn select(&mut self, day: &str, title: &str) -> Result<(), PlannerError> {
        let day = day.trim().to_lowercase();
        let options = self.options(&day);

        if options.is_empty() {
            return Err(PlannerError::UnknownDay(day));
        }
        if !options.iter().any(|r| r.title == title) {
            return Err(PlannerError::UnknownSelection {
                day,
                title: title.to_string(),
            });
        }

        debug!("Selected '{}' for '{}'", title, day);
        self.selections.insert(day, title.to_string());
        Ok(())
    }

    /// Current selection for a day, if one was made
    pub fn selection(&self, day: &str) -> Option<&str> {
        self.selections.get(day).map(String::as_str)
    }

    /// Fix the plan: each day with options uses its selection, or its first option.
    pub fn finalize(&mut self) -> Result<&MealPlan, PlannerError> {
        let mut planned = Vec::new();

        for day in &self.days {
            let options = self.options(day);
            let chosen = match self.selections.get(day) {
                Some(title) => options.iter().find(|r| &r.title == title),
                None => options.first(),
            };

            match chosen {
                Some(recipe) => planned.push(PlannedDay {
                    day: day.clone(),
                    recipe: recipe.clone(),
                }),
                None => debug!("No recipe for '{}', leaving it out of the plan", day),
            }
        }

        if planned.is_empty() {
            return Err(PlannerError::NothingToFinalize);
        }

        info!("Finalized meal plan with {} days", planned.len());
        Ok(self.plan.insert(MealPlan::new(planned)))
    }

    /// The finalized plan, if [`PlanSession::finalize`] has succeeded
    pub fn plan(&self) -> Option<&MealPlan> {
        self.plan.as_ref()
    }

    /// Clear options, selections and the finalized plan
    pub fn reset(&mut self) {
        self.options.clear();
        self.selections.clear();
        self.plan = None;
    }
}
