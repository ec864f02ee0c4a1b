pub mod prompts;
pub mod render;

pub use prompts::{
    prompt_adjust_quantities, prompt_meal_items, prompt_meal_tag, prompt_targets, prompt_yes_no,
};
pub use render::{display_day_report, display_meal_summary, display_suggestion};
