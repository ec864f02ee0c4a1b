pub mod constants;
pub mod engine;
pub mod scoring;

pub use constants::*;
pub use engine::{suggest, SuggestConfig};
pub use scoring::score_totals;
