use std::fs;

use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use nutri_planner_rs::catalog::{
    CatalogProvider, CatalogStore, JsonCatalogStore, default_seed, foods_in_category,
    read_seed_file, search_foods, suggest,
};
use nutri_planner_rs::cli::{Cli, Command, PlanArgs};
use nutri_planner_rs::error::Result;
use nutri_planner_rs::interface::{display_food_list, display_nutrition_plan, prompt_profile};
use nutri_planner_rs::models::{DietaryPreference, FoodItem, Goal, NutritionProfile};
use nutri_planner_rs::planner::generate_plan;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let store = JsonCatalogStore::new(&cli.store);
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Plan(args) => cmd_plan(&store, args),
        Command::Foods {
            preference,
            search,
            category,
        } => cmd_foods(&store, &preference, search.as_deref(), category.as_deref()),
        Command::Seed { csv } => cmd_seed(&store, csv.as_deref()),
    }
}

/// Warn about goal/preference strings that look like typos of known values.
fn warn_if_unknown(profile: &NutritionProfile) {
    if !profile.goal.is_known() {
        match suggest(profile.goal.as_str(), &Goal::KNOWN) {
            Some(s) => warn!("Unknown goal '{}', did you mean '{}'?", profile.goal, s),
            None => warn!("Unknown goal '{}', using default portions", profile.goal),
        }
    }
    if !profile.dietary_preference.is_known() {
        let pref = &profile.dietary_preference;
        match suggest(pref.as_str(), &DietaryPreference::KNOWN) {
            Some(s) => warn!("Unknown preference '{}', did you mean '{}'?", pref, s),
            None => warn!("Unknown preference '{}', catalog left unfiltered", pref),
        }
    }
}

fn build_profile(args: &PlanArgs) -> Result<NutritionProfile> {
    if args.interactive {
        return prompt_profile();
    }

    if let Some(path) = &args.profile {
        let content = fs::read_to_string(path)?;
        return Ok(serde_json::from_str(&content)?);
    }

    Ok(NutritionProfile {
        user_id: args.user.clone(),
        goal: Goal::from(args.goal.as_str()),
        dietary_preference: DietaryPreference::from(args.preference.as_str()),
        daily_calorie_target: args.calories,
        daily_protein_target: args.protein,
        daily_carb_target: args.carbs,
        daily_fat_target: args.fat,
    })
}

/// Generate and display a nutrition plan.
fn cmd_plan(store: &JsonCatalogStore, args: PlanArgs) -> Result<()> {
    let profile = build_profile(&args)?;
    warn_if_unknown(&profile);

    let provider = CatalogProvider::new(store);
    let plan = generate_plan(&provider, &profile, chrono::Utc::now())?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    // Names for display come from the unfiltered listing.
    let catalog = store.list_foods()?;
    display_nutrition_plan(&plan, &catalog);
    Ok(())
}

/// List, search or filter the catalog.
fn cmd_foods(
    store: &JsonCatalogStore,
    preference: &str,
    search: Option<&str>,
    category: Option<&str>,
) -> Result<()> {
    let preference = DietaryPreference::from(preference);
    let catalog = CatalogProvider::new(store).get_catalog(&preference)?;

    let foods: Vec<&FoodItem> = match (search, category) {
        (Some(query), _) => {
            let hits = search_foods(&catalog, query);
            let hits: Vec<&FoodItem> = hits
                .into_iter()
                .filter(|(f, _)| category.is_none_or(|c| f.category == c))
                .map(|(f, _)| f)
                .collect();
            if hits.is_empty() {
                println!("No matching food found for '{}'", query);
                return Ok(());
            }
            hits
        }
        (None, Some(c)) => foods_in_category(&catalog, c),
        (None, None) => catalog.iter().collect(),
    };

    display_food_list(&foods, &format!("Foods ({})", preference));
    Ok(())
}

/// Seed an empty catalog from a CSV file or the built-in list.
fn cmd_seed(store: &JsonCatalogStore, csv: Option<&std::path::Path>) -> Result<()> {
    let seed = match csv {
        Some(path) => read_seed_file(path)?,
        None => default_seed(),
    };
    let count = seed.len();

    let provider = CatalogProvider::with_seed(store, seed);
    if provider.ensure_seeded()? {
        println!("Seeded {} foods into {}", count, store.path().display());
    } else {
        println!(
            "Catalog {} already has {} foods; nothing seeded.",
            store.path().display(),
            store.count_foods()?
        );
    }
    Ok(())
}
