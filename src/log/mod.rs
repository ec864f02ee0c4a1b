mod persistence;
mod record;

pub use persistence::{append_entry, clear_log, load_log, LOG_TIMESTAMP_FORMAT};
pub use record::{LoggedItem, MealEntry, MealLog};
