mod food;
mod meal;
mod nutrient;

pub use food::FoodItem;
pub use meal::{CandidateMeal, MealComponent, SearchResult};
pub use nutrient::{Macro, MacroTotals, TargetProfile};
