use clap::{Parser, Subcommand};

use crate::planner::constants::{DEFAULT_MAX_ITEMS, DEFAULT_TRIALS};

pub const DEFAULT_PORTIONS_ARG: &str = "0.5,1.0,1.5";

/// Meal logging and suggestion against macronutrient targets.
#[derive(Parser, Debug)]
#[command(name = "macro_tracker")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the food catalog CSV.
    #[arg(short, long, default_value = "calorie_calculator.csv")]
    pub catalog: String,

    /// Path to the meal log CSV.
    #[arg(short, long, default_value = "nutrition_log.csv")]
    pub log: String,

    /// Path to the targets JSON file.
    #[arg(short, long, default_value = "targets.json")]
    pub targets: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Suggest a meal combination approximating the macro targets.
    Suggest {
        /// Number of random trials.
        #[arg(long, default_value_t = DEFAULT_TRIALS)]
        trials: usize,

        /// Maximum items per suggested meal.
        #[arg(long, default_value_t = DEFAULT_MAX_ITEMS)]
        max_items: usize,

        /// Portion multipliers (comma-separated).
        #[arg(long, default_value = DEFAULT_PORTIONS_ARG)]
        portions: String,

        /// Seed the random source for a reproducible suggestion.
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Log a meal manually.
    Log,

    /// Show the meal log grouped by day against the targets.
    Report,

    /// Show or update the macro targets.
    Targets {
        /// Calorie target (kcal).
        #[arg(long)]
        calories: Option<f64>,

        /// Protein target (g).
        #[arg(long)]
        protein: Option<f64>,

        /// Carbs target (g).
        #[arg(long)]
        carbs: Option<f64>,

        /// Fats target (g).
        #[arg(long)]
        fats: Option<f64>,

        /// Prompt for every target interactively.
        #[arg(long)]
        edit: bool,
    },

    /// Delete the meal log.
    ClearLog,
}

impl Default for Command {
    fn default() -> Self {
        Command::Suggest {
            trials: DEFAULT_TRIALS,
            max_items: DEFAULT_MAX_ITEMS,
            portions: DEFAULT_PORTIONS_ARG.to_string(),
            seed: None,
        }
    }
}
