/// Default number of random trials per suggestion.
pub const DEFAULT_TRIALS: usize = 2000;

/// Default discrete portion multipliers sampled per item.
pub const DEFAULT_PORTION_SIZES: [f64; 3] = [0.5, 1.0, 1.5];

/// Default maximum number of items per suggested meal.
pub const DEFAULT_MAX_ITEMS: usize = 3;

/// Minimum number of items in any candidate meal.
pub const MIN_ITEMS: usize = 2;

/// Guard against division by zero when a target is exactly zero.
pub const SCORE_EPSILON: f64 = 1e-6;

/// Atwater energy factors (kcal per gram).
pub const PROTEIN_KCAL_PER_G: f64 = 4.0;
pub const CARB_KCAL_PER_G: f64 = 4.0;
pub const FAT_KCAL_PER_G: f64 = 9.0;

/// Thresholds for the daily-report status markers: at or above 110% of a
/// target counts as over, at or above 90% as on track, below as under.
pub const OVER_TARGET_RATIO: f64 = 1.1;
pub const ON_TRACK_RATIO: f64 = 0.9;
