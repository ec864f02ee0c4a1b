pub mod cli;
pub mod error;
pub mod interface;
pub mod log;
pub mod models;
pub mod planner;
pub mod state;

pub use error::{Result, TrackerError};
pub use models::{CandidateMeal, FoodItem, Macro, MacroTotals, MealComponent, SearchResult};
