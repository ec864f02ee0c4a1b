use std::path::Path;

use chrono::Local;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use macro_tracker_rs::cli::{Cli, Command};
use macro_tracker_rs::error::Result;
use macro_tracker_rs::interface::{
    display_day_report, display_meal_summary, display_suggestion, prompt_adjust_quantities,
    prompt_meal_items, prompt_meal_tag, prompt_targets, prompt_yes_no,
};
use macro_tracker_rs::log::{append_entry, clear_log, load_log, LoggedItem, MealEntry};
use macro_tracker_rs::models::{FoodItem, Macro, MealComponent};
use macro_tracker_rs::planner::{suggest, SuggestConfig};
use macro_tracker_rs::state::{load_catalog, Session};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut cli = Cli::parse();
    let command = cli.command.take().unwrap_or_default();

    match command {
        Command::Suggest {
            trials,
            max_items,
            portions,
            seed,
        } => cmd_suggest(&cli, trials, max_items, &portions, seed),
        Command::Log => cmd_log(&cli),
        Command::Report => cmd_report(&cli),
        Command::Targets {
            calories,
            protein,
            carbs,
            fats,
            edit,
        } => cmd_targets(&cli, calories, protein, carbs, fats, edit),
        Command::ClearLog => cmd_clear_log(&cli),
    }
}

fn load_catalog_or_report(path: &str) -> Result<Option<Vec<FoodItem>>> {
    if !Path::new(path).exists() {
        eprintln!("Food catalog not found: {}", path);
        eprintln!("Provide a catalog CSV with --catalog.");
        return Ok(None);
    }

    let catalog = load_catalog(path)?;
    if catalog.is_empty() {
        eprintln!("Food catalog {} has no usable rows.", path);
        return Ok(None);
    }
    Ok(Some(catalog))
}

fn parse_portions(s: &str) -> Vec<f64> {
    s.split(',')
        .filter_map(|part| part.trim().parse().ok())
        .collect()
}

/// Suggest a meal combination and optionally log it.
fn cmd_suggest(
    cli: &Cli,
    trials: usize,
    max_items: usize,
    portions: &str,
    seed: Option<u64>,
) -> Result<()> {
    let Some(catalog) = load_catalog_or_report(&cli.catalog)? else {
        return Ok(());
    };
    let session = Session::load(&cli.targets)?;

    println!("Loaded {} foods", catalog.len());

    let config = SuggestConfig {
        trials,
        portion_sizes: parse_portions(portions),
        max_items,
    };

    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };

    let mut result = suggest(&catalog, &session.targets, &config, &mut rng)?;
    display_suggestion(&result, &session.targets);

    if !prompt_yes_no("Log this meal?", false)? {
        return Ok(());
    }

    let tag = prompt_meal_tag()?;
    prompt_adjust_quantities(&mut result.meal.components)?;

    let entry = entry_from_components(tag, &result.meal.components);
    append_entry(&cli.log, &entry)?;
    println!("Meal saved to log.");
    Ok(())
}

/// Log a meal entered by hand.
fn cmd_log(cli: &Cli) -> Result<()> {
    let Some(catalog) = load_catalog_or_report(&cli.catalog)? else {
        return Ok(());
    };

    let tag = prompt_meal_tag()?;
    let components = prompt_meal_items(&catalog)?;

    if components.is_empty() {
        println!("No items entered, nothing to log.");
        return Ok(());
    }

    let entry = entry_from_components(tag, &components);
    display_meal_summary(&entry);

    if prompt_yes_no("Save this meal to the log?", true)? {
        append_entry(&cli.log, &entry)?;
        println!("Meal saved to log.");
    }
    Ok(())
}

/// Show the day-grouped report against the current targets.
fn cmd_report(cli: &Cli) -> Result<()> {
    let session = Session::load(&cli.targets)?;
    let log = load_log(&cli.log)?;
    display_day_report(&log, &session.targets);
    Ok(())
}

/// Show or update the macro targets.
fn cmd_targets(
    cli: &Cli,
    calories: Option<f64>,
    protein: Option<f64>,
    carbs: Option<f64>,
    fats: Option<f64>,
    edit: bool,
) -> Result<()> {
    let mut session = Session::load(&cli.targets)?;

    let flags = [
        (Macro::Calories, calories),
        (Macro::Protein, protein),
        (Macro::Carbs, carbs),
        (Macro::Fats, fats),
    ];
    let mut changed = false;

    if edit {
        session.targets = prompt_targets(&session.targets)?;
        changed = true;
    } else {
        for (m, value) in flags {
            if let Some(v) = value {
                session.set_target(m, v)?;
                changed = true;
            }
        }
    }

    if changed {
        session.save(&cli.targets)?;
        println!("Targets saved to {}", cli.targets);
    }

    println!();
    println!("=== Macro Targets ===");
    for (m, value) in &session.targets {
        println!("{:<8} {:>8.1} {}", m.to_string(), value, m.unit());
    }
    println!();
    Ok(())
}

/// Delete the meal log after confirmation.
fn cmd_clear_log(cli: &Cli) -> Result<()> {
    if !Path::new(&cli.log).exists() {
        println!("The meal log is already empty.");
        return Ok(());
    }

    if prompt_yes_no("Delete the entire meal log?", false)? {
        clear_log(&cli.log)?;
        println!("Log cleared.");
    }
    Ok(())
}

fn entry_from_components(tag: String, components: &[MealComponent]) -> MealEntry {
    let items: Vec<LoggedItem> = components.iter().map(LoggedItem::from_component).collect();
    MealEntry::new(Local::now().naive_local(), tag, items)
}
