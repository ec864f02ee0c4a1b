use rand::seq::index::sample as sample_indices;
use rand::Rng;

use crate::error::{Result, TrackerError};
use crate::models::{CandidateMeal, FoodItem, MealComponent, SearchResult, TargetProfile};
use crate::planner::constants::{
    DEFAULT_MAX_ITEMS, DEFAULT_PORTION_SIZES, DEFAULT_TRIALS, MIN_ITEMS,
};
use crate::planner::scoring::score_totals;

/// Knobs for the suggestion search.
#[derive(Debug, Clone)]
pub struct SuggestConfig {
    /// Number of independent random trials. More trials trade runtime for
    /// a better expected score, with diminishing returns.
    pub trials: usize,

    /// Discrete portion multipliers, sampled uniformly per item. Duplicate
    /// values bias sampling toward that value.
    pub portion_sizes: Vec<f64>,

    /// Maximum items per candidate meal. Clamped to the catalog size.
    pub max_items: usize,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            portion_sizes: DEFAULT_PORTION_SIZES.to_vec(),
            max_items: DEFAULT_MAX_ITEMS,
        }
    }
}

fn validate(
    catalog: &[FoodItem],
    targets: &TargetProfile,
    config: &SuggestConfig,
) -> Result<()> {
    if config.trials < 1 {
        return Err(TrackerError::InvalidConfiguration(
            "trials must be at least 1".to_string(),
        ));
    }
    if config.portion_sizes.is_empty() {
        return Err(TrackerError::InvalidConfiguration(
            "portion_sizes must not be empty".to_string(),
        ));
    }
    if config.max_items < MIN_ITEMS {
        return Err(TrackerError::InvalidConfiguration(format!(
            "max_items must be at least {}",
            MIN_ITEMS
        )));
    }
    if catalog.len() < MIN_ITEMS {
        return Err(TrackerError::InvalidCatalog(format!(
            "need at least {} food items to form a combination, got {}",
            MIN_ITEMS,
            catalog.len()
        )));
    }
    if targets.is_empty() {
        return Err(TrackerError::InvalidTargets(
            "no target macros given".to_string(),
        ));
    }
    for (m, value) in targets {
        // Zero is tolerated via the score epsilon; negatives and NaN are not.
        if !value.is_finite() || *value < 0.0 {
            return Err(TrackerError::InvalidTargets(format!(
                "target for {} must be a non-negative number, got {}",
                m, value
            )));
        }
    }
    Ok(())
}

/// Search for a meal combination approximating the targets.
///
/// Runs `config.trials` independent trials. Each trial draws a combination
/// size uniformly from `[2, max_items]`, that many distinct catalog items
/// without replacement, and one portion multiplier per item (with
/// replacement) from `portion_sizes`, then scores the candidate's totals
/// against the targets. The incumbent best is replaced only on a strictly
/// lower score, so the first-found candidate wins ties.
///
/// The RNG draw order per trial is fixed (size, then indices, then one
/// multiplier per item), so with a shared seed a budget of `N` trials is a
/// prefix of `2N` trials and a larger budget never returns a worse score.
///
/// All input validation happens before the first trial; the function either
/// returns a valid result or an error, never both.
pub fn suggest<R: Rng + ?Sized>(
    catalog: &[FoodItem],
    targets: &TargetProfile,
    config: &SuggestConfig,
    rng: &mut R,
) -> Result<SearchResult> {
    validate(catalog, targets, config)?;

    let max_items = config.max_items.min(catalog.len());

    let mut best_score = f64::INFINITY;
    let mut best_meal: Option<CandidateMeal> = None;

    for _ in 0..config.trials {
        let k = rng.gen_range(MIN_ITEMS..=max_items);
        let chosen = sample_indices(rng, catalog.len(), k);

        let components: Vec<MealComponent> = chosen
            .iter()
            .map(|idx| {
                let quantity = config.portion_sizes[rng.gen_range(0..config.portion_sizes.len())];
                MealComponent::new(catalog[idx].clone(), quantity)
            })
            .collect();

        let meal = CandidateMeal::new(components);
        let score = score_totals(&meal.totals(), targets);

        if score < best_score {
            best_score = score;
            best_meal = Some(meal);
        }
    }

    // Every trial produces a finite score, so at least one candidate beat
    // the infinity sentinel.
    match best_meal {
        Some(meal) => Ok(SearchResult {
            meal,
            score: best_score,
        }),
        None => Err(TrackerError::InvalidConfiguration(
            "trial budget produced no candidate".to_string(),
        )),
    }
}
