use crate::planner_errors::PlannerError;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Plan a week of meals and build a consolidated shopping list", long_about = None)]
pub struct Cli {
    /// Path to the JSON recipe catalog (overrides MEAL_PLANNER_CATALOG)
    #[arg(short, long)]
    pub catalog: Option<PathBuf>,

    /// Where to write the HTML meal plan (overrides MEAL_PLANNER_OUTPUT)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Seed for reproducible option sampling
    #[arg(long)]
    pub seed: Option<u64>,

    /// Pick a recipe for a day, e.g. --choose "monday=Chili"; repeatable
    #[arg(long = "choose", value_name = "DAY=TITLE")]
    pub choices: Vec<String>,

    /// Print the shopping list as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

pub fn parse_args() -> Cli {
    Cli::parse()
}

/// Split a "day=title" choice; the day is trimmed and lowercased, the title trimmed
pub fn parse_choice(choice: &str) -> Result<(String, String), PlannerError> {
    let (day, title) = choice
        .split_once('=')
        .ok_or_else(|| PlannerError::InvalidChoice(choice.to_string()))?;
    let day = day.trim().to_lowercase();
    let title = title.trim();

    if day.is_empty() || title.is_empty() {
        return Err(PlannerError::InvalidChoice(choice.to_string()));
    }
    Ok((day, title.to_string()))
}
