use std::path::PathBuf;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use macro_tracker_rs::planner::{suggest, SuggestConfig};
use macro_tracker_rs::state::{load_catalog, Session};

/// Measure suggestion quality across trial budgets.
///
/// The engine gives no distance guarantee; this tool documents the
/// more-trials / better-expected-score trade-off empirically for a given
/// catalog and target profile.
#[derive(Parser, Debug)]
#[command(name = "sweep")]
#[command(about = "Empirical trials-vs-quality sweep for the meal suggester")]
struct Args {
    /// Trial budgets to evaluate (comma-separated)
    #[arg(long, default_value = "100,500,2000,8000")]
    budgets: String,

    /// Seeded runs per budget
    #[arg(long, default_value = "20")]
    runs: u64,

    /// Base seed; run i uses seed base + i
    #[arg(long, default_value = "123")]
    seed: u64,

    /// Path to the food catalog CSV
    #[arg(long, default_value = "calorie_calculator.csv")]
    catalog: PathBuf,

    /// Path to the targets JSON file
    #[arg(long, default_value = "targets.json")]
    targets: PathBuf,

    /// Output CSV file for per-run scores
    #[arg(long, default_value = "sweep_results.csv")]
    csv: PathBuf,
}

fn parse_budgets(s: &str) -> Vec<usize> {
    s.split(',')
        .filter_map(|part| part.trim().parse().ok())
        .collect()
}

fn main() {
    let args = Args::parse();

    let catalog = match load_catalog(&args.catalog) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading catalog {:?}: {}", args.catalog, e);
            std::process::exit(1);
        }
    };
    println!("Loaded {} foods from {:?}", catalog.len(), args.catalog);

    let session = match Session::load(&args.targets) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error loading targets {:?}: {}", args.targets, e);
            std::process::exit(1);
        }
    };

    let budgets = parse_budgets(&args.budgets);
    if budgets.is_empty() {
        eprintln!("Error: no valid budgets provided");
        std::process::exit(1);
    }
    println!("Testing budgets: {:?}", budgets);
    println!("{} runs per budget, base seed {}", args.runs, args.seed);
    println!();

    let mut writer = match csv::Writer::from_path(&args.csv) {
        Ok(w) => w,
        Err(e) => {
            eprintln!("Error opening {:?}: {}", args.csv, e);
            std::process::exit(1);
        }
    };
    if let Err(e) = writer.write_record(["trials", "seed", "score", "items"]) {
        eprintln!("Error writing CSV: {}", e);
        std::process::exit(1);
    }

    for &trials in &budgets {
        let config = SuggestConfig {
            trials,
            ..Default::default()
        };

        let mut scores = Vec::with_capacity(args.runs as usize);

        for i in 0..args.runs {
            let run_seed = args.seed + i;
            let mut rng = StdRng::seed_from_u64(run_seed);

            let result = match suggest(&catalog, &session.targets, &config, &mut rng) {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("Error during search: {}", e);
                    std::process::exit(1);
                }
            };

            if let Err(e) = writer.write_record([
                trials.to_string(),
                run_seed.to_string(),
                format!("{:.6}", result.score),
                result.meal.len().to_string(),
            ]) {
                eprintln!("Error writing CSV: {}", e);
                std::process::exit(1);
            }

            scores.push(result.score);
        }

        let mean = scores.iter().sum::<f64>() / scores.len() as f64;
        let best = scores.iter().copied().fold(f64::INFINITY, f64::min);
        let worst = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        println!(
            "trials={:<6} mean={:.4} best={:.4} worst={:.4}",
            trials, mean, best, worst
        );
    }

    if let Err(e) = writer.flush() {
        eprintln!("Error writing CSV: {}", e);
        std::process::exit(1);
    }
    println!();
    println!("Wrote per-run scores to {:?}", args.csv);
}
