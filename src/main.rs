use anyhow::{Context, Result};
use log::info;
use meal_planner::catalog::Catalog;
use meal_planner::cli::{parse_args, parse_choice};
use meal_planner::html_export::{render_html, write_html};
use meal_planner::meal_plan::PlanSession;
use meal_planner::planner_config::PlannerConfig;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    info!("Starting weekly meal planner");

    // Load environment variables from .env file
    dotenv::dotenv().ok();

    let cli = parse_args();
    let mut config = PlannerConfig::from_env();
    if let Some(catalog_path) = cli.catalog {
        config.catalog_path = catalog_path;
    }
    if let Some(output_path) = cli.output {
        config.output_path = output_path;
    }

    let catalog = Catalog::load(&config.catalog_path).with_context(|| {
        format!(
            "Failed to load recipe catalog '{}'",
            config.catalog_path.display()
        )
    })?;

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut session = PlanSession::new(&config);
    session.generate_options(&catalog, &mut rng);

    println!("Meal options:");
    for day in session.days() {
        let titles: Vec<&str> = session
            .options(day)
            .iter()
            .map(|r| r.title.as_str())
            .collect();
        if titles.is_empty() {
            println!("  {day}: (no recipes found)");
        } else {
            println!("  {day}: {}", titles.join(" | "));
        }
    }

    for choice in &cli.choices {
        let (day, title) = parse_choice(choice)?;
        session
            .select(&day, &title)
            .with_context(|| format!("Could not apply choice '{choice}'"))?;
    }

    let plan = session
        .finalize()
        .context("Nothing to plan: no recipes match the configured days")?;
    let shopping_list = plan.shopping_list();

    let html = render_html(plan, &shopping_list);
    write_html(&config.output_path, &html).with_context(|| {
        format!(
            "Failed to write meal plan to '{}'",
            config.output_path.display()
        )
    })?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&shopping_list)?);
    } else {
        println!("\nShopping list:");
        print!("{shopping_list}");
    }
    println!("\nMeal plan written to {}", config.output_path.display());

    Ok(())
}
