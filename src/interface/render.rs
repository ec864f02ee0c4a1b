use crate::log::{MealEntry, MealLog, LOG_TIMESTAMP_FORMAT};
use crate::models::{Macro, MacroTotals, SearchResult, TargetProfile};
use crate::planner::constants::{ON_TRACK_RATIO, OVER_TARGET_RATIO};

/// Status of a daily total relative to its target.
pub fn macro_status(actual: f64, target: f64) -> &'static str {
    if actual >= OVER_TARGET_RATIO * target {
        "over"
    } else if actual >= ON_TRACK_RATIO * target {
        "on track"
    } else {
        "under"
    }
}

/// Fixed-width text progress bar, capped at 100%.
fn progress_bar(actual: f64, target: f64) -> String {
    const WIDTH: usize = 20;
    let fraction = if target > 0.0 {
        (actual / target).clamp(0.0, 1.0)
    } else {
        1.0
    };
    let filled = (fraction * WIDTH as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(WIDTH - filled))
}

fn print_energy_split(totals: &MacroTotals) {
    let (p_kcal, c_kcal, f_kcal) = totals.macro_energy_kcal();
    let total_kcal = p_kcal + c_kcal + f_kcal;
    if total_kcal <= 0.0 {
        return;
    }

    println!(
        "  Energy split: protein {:.1}g ({:.0}%), carbs {:.1}g ({:.0}%), fats {:.1}g ({:.0}%)",
        totals.protein,
        p_kcal / total_kcal * 100.0,
        totals.carbs,
        c_kcal / total_kcal * 100.0,
        totals.fats,
        f_kcal / total_kcal * 100.0,
    );
}

/// Display a suggested meal with its totals and per-macro fit.
pub fn display_suggestion(result: &SearchResult, targets: &TargetProfile) {
    println!();
    println!("=== Suggested Meal ===");
    println!();

    let max_name_len = result
        .meal
        .components
        .iter()
        .map(|c| c.food.name.len())
        .max()
        .unwrap_or(10);

    for (i, component) in result.meal.components.iter().enumerate() {
        let serving = if component.food.serving_size.is_empty() {
            String::new()
        } else {
            format!(" ({})", component.food.serving_size)
        };

        println!(
            "{:>3}. {:<width$} x {:<4} - {:>6.1} kcal | P {:>5.1}g C {:>5.1}g F {:>5.1}g{}",
            i + 1,
            component.food.name,
            component.quantity,
            component.scaled(Macro::Calories),
            component.scaled(Macro::Protein),
            component.scaled(Macro::Carbs),
            component.scaled(Macro::Fats),
            serving,
            width = max_name_len
        );
    }

    let totals = result.meal.totals();

    println!();
    println!("--- Fit vs Targets ---");
    for (m, target) in targets {
        let actual = totals.get(*m);
        println!(
            "{:<8} {:>8.1} / {:<8.1} {} ({:+.1})",
            m.to_string(),
            actual,
            target,
            m.unit(),
            actual - target
        );
    }
    println!("Score: {:.4} (lower is better)", result.score);
    println!();
}

/// Display a manual meal summary before saving.
pub fn display_meal_summary(entry: &MealEntry) {
    println!();
    println!("=== Meal Summary ===");
    println!();

    for item in &entry.items {
        println!(
            "  {} x {} - {:.1} kcal | P {:.1}g C {:.1}g F {:.1}g",
            item.food_name, item.quantity, item.calories, item.protein, item.carbs, item.fats
        );
    }

    println!();
    println!(
        "  Total: {:.1} kcal | P {:.1}g C {:.1}g F {:.1}g",
        entry.totals.calories, entry.totals.protein, entry.totals.carbs, entry.totals.fats
    );
    print_energy_split(&entry.totals);
    println!();
}

/// Display the full log grouped by day, with daily totals against targets.
pub fn display_day_report(log: &MealLog, targets: &TargetProfile) {
    if log.is_empty() {
        println!("The meal log is empty.");
        return;
    }

    for (day, entries) in log.day_groups() {
        println!();
        println!("=== {} ===", day);

        let mut daily = MacroTotals::default();

        for entry in &entries {
            daily.add_assign(&entry.totals);

            println!();
            println!(
                "{} | {} | {:.1} kcal",
                entry.timestamp.format(LOG_TIMESTAMP_FORMAT),
                entry.tag,
                entry.totals.calories
            );
            for item in &entry.items {
                println!("    {} x {}", item.food_name, item.quantity);
            }
            print_energy_split(&entry.totals);
        }

        println!();
        println!("--- Daily Totals vs Targets ---");
        for (m, target) in targets {
            let actual = daily.get(*m);
            let remaining = (target - actual).max(0.0);
            println!(
                "{:<8} {:>8.1} / {:<8.1} {}  {}  remaining {:.1}  [{}]",
                m.to_string(),
                actual,
                target,
                m.unit(),
                progress_bar(actual, *target),
                remaining,
                macro_status(actual, *target)
            );
        }
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_macro_status_thresholds() {
        // Over at 110% and above.
        assert_eq!(macro_status(2750.0, 2500.0), "over");
        assert_eq!(macro_status(2751.0, 2500.0), "over");

        // On track from 90% up to but excluding 110%.
        assert_eq!(macro_status(2250.0, 2500.0), "on track");
        assert_eq!(macro_status(2749.0, 2500.0), "on track");

        // Under below 90%.
        assert_eq!(macro_status(2249.0, 2500.0), "under");
        assert_eq!(macro_status(0.0, 2500.0), "under");
    }

    #[test]
    fn test_progress_bar_caps_at_full() {
        assert_eq!(progress_bar(5000.0, 2500.0), format!("[{}]", "#".repeat(20)));
        assert_eq!(progress_bar(0.0, 2500.0), format!("[{}]", "-".repeat(20)));
    }
}
