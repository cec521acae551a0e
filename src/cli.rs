use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// nutri-planner — Build a daily meal plan from a food catalog and macro targets.
#[derive(Parser, Debug)]
#[command(name = "nutri-planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the food catalog JSON file.
    #[arg(short, long, default_value = "food_catalog.json")]
    pub store: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a nutrition plan for a profile.
    Plan(PlanArgs),

    /// List or search the catalog as seen under a dietary preference.
    Foods {
        /// Dietary preference filter (vegetarian, keto, no-preference).
        #[arg(short, long, default_value = "no-preference")]
        preference: String,

        /// Fuzzy search by food name.
        #[arg(long)]
        search: Option<String>,

        /// Only show foods in this category.
        #[arg(long)]
        category: Option<String>,
    },

    /// Seed an empty catalog.
    Seed {
        /// CSV file with name,category,calories,protein,carbs,fat,serving_size.
        #[arg(long)]
        csv: Option<PathBuf>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan(PlanArgs::default())
    }
}

#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Read the profile from a JSON file instead of flags.
    #[arg(long, conflicts_with = "interactive")]
    pub profile: Option<PathBuf>,

    /// Ask for the profile interactively.
    #[arg(short, long)]
    pub interactive: bool,

    /// User identifier recorded on every meal log.
    #[arg(long, default_value = "local-user")]
    pub user: String,

    /// Goal: lose-weight, maintain or gain-muscle.
    #[arg(long, default_value = "maintain")]
    pub goal: String,

    /// Dietary preference: vegetarian, keto or no-preference.
    #[arg(long, default_value = "no-preference")]
    pub preference: String,

    /// Daily calorie target (kcal).
    #[arg(long)]
    pub calories: Option<f64>,

    /// Daily protein target (g).
    #[arg(long)]
    pub protein: Option<f64>,

    /// Daily carbohydrate target (g).
    #[arg(long)]
    pub carbs: Option<f64>,

    /// Daily fat target (g).
    #[arg(long)]
    pub fat: Option<f64>,

    /// Print the plan as JSON.
    #[arg(long)]
    pub json: bool,
}

impl Default for PlanArgs {
    fn default() -> Self {
        Self {
            profile: None,
            interactive: false,
            user: "local-user".to_string(),
            goal: "maintain".to_string(),
            preference: "no-preference".to_string(),
            calories: None,
            protein: None,
            carbs: None,
            fat: None,
            json: false,
        }
    }
}
