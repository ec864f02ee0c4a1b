use std::fs::{self, OpenOptions};
use std::path::Path;

use chrono::NaiveDateTime;

use crate::error::{Result, TrackerError};
use crate::log::record::{LoggedItem, MealEntry, MealLog};
use crate::models::MacroTotals;

/// Timestamp format used in the totals row of each logged meal.
pub const LOG_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Marker value in the Food Item column of a totals row.
const MEAL_MARKER: &str = "Meal Logged";

/// Marker value in the Food Item column of a divider row.
const DIVIDER: &str = "---";

const HEADERS: [&str; 8] = [
    "Food Item",
    "Quantity",
    "Calories",
    "Protein",
    "Carbs",
    "Fats",
    "Timestamp",
    "Meal Tag",
];

/// Append one meal to the flat log file.
///
/// Layout per meal: one row per item, then a totals row carrying the
/// timestamp and tag, then a divider row. The header is written only when
/// the file is new or empty.
pub fn append_entry<P: AsRef<Path>>(path: P, entry: &MealEntry) -> Result<()> {
    let path = path.as_ref();
    let needs_header = !path.exists() || fs::metadata(path)?.len() == 0;

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(file);

    if needs_header {
        writer.write_record(HEADERS)?;
    }

    for item in &entry.items {
        writer.write_record([
            item.food_name.clone(),
            item.quantity.to_string(),
            item.calories.to_string(),
            item.protein.to_string(),
            item.carbs.to_string(),
            item.fats.to_string(),
            String::new(),
            String::new(),
        ])?;
    }

    writer.write_record([
        MEAL_MARKER.to_string(),
        String::new(),
        entry.totals.calories.to_string(),
        entry.totals.protein.to_string(),
        entry.totals.carbs.to_string(),
        entry.totals.fats.to_string(),
        entry.timestamp.format(LOG_TIMESTAMP_FORMAT).to_string(),
        entry.tag.clone(),
    ])?;

    writer.write_record([DIVIDER, "", "", "", "", "", "", ""])?;
    writer.flush()?;
    Ok(())
}

/// Parse the flat log back into structured entries.
///
/// Single forward scan: item rows accumulate until a totals row closes the
/// entry; a divider row resets the accumulator.
pub fn load_log<P: AsRef<Path>>(path: P) -> Result<MealLog> {
    let path = path.as_ref();
    if !path.exists() || fs::metadata(path)?.len() == 0 {
        return Ok(MealLog::default());
    }

    let mut reader = csv::Reader::from_path(path)?;
    let mut entries = Vec::new();
    let mut pending_items: Vec<LoggedItem> = Vec::new();

    for record in reader.records() {
        let record = record?;
        let name = field(&record, 0);

        if name == DIVIDER {
            pending_items.clear();
        } else if name == MEAL_MARKER {
            let timestamp_raw = field(&record, 6);
            let timestamp = NaiveDateTime::parse_from_str(timestamp_raw, LOG_TIMESTAMP_FORMAT)
                .map_err(|e| {
                    TrackerError::LogFormat(format!("bad timestamp '{}': {}", timestamp_raw, e))
                })?;

            entries.push(MealEntry {
                timestamp,
                tag: field(&record, 7).to_string(),
                items: std::mem::take(&mut pending_items),
                totals: MacroTotals {
                    calories: numeric_field(&record, 2)?,
                    protein: numeric_field(&record, 3)?,
                    carbs: numeric_field(&record, 4)?,
                    fats: numeric_field(&record, 5)?,
                },
            });
        } else {
            pending_items.push(LoggedItem {
                food_name: name.to_string(),
                quantity: numeric_field(&record, 1)?,
                calories: numeric_field(&record, 2)?,
                protein: numeric_field(&record, 3)?,
                carbs: numeric_field(&record, 4)?,
                fats: numeric_field(&record, 5)?,
            });
        }
    }

    // Item rows after the last totals row belong to no meal; a truncated
    // tail is dropped rather than failing the whole log.
    Ok(MealLog { entries })
}

/// Delete the log file if present.
pub fn clear_log<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    if path.exists() {
        fs::remove_file(path)?;
    }
    Ok(())
}

fn field<'a>(record: &'a csv::StringRecord, idx: usize) -> &'a str {
    record.get(idx).unwrap_or("")
}

fn numeric_field(record: &csv::StringRecord, idx: usize) -> Result<f64> {
    let raw = field(record, idx);
    if raw.is_empty() {
        return Ok(0.0);
    }
    raw.parse()
        .map_err(|_| TrackerError::LogFormat(format!("expected a number, got '{}'", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn ts(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, LOG_TIMESTAMP_FORMAT).unwrap()
    }

    fn sample_entry() -> MealEntry {
        MealEntry::new(
            ts("2024-03-10 09:15:00"),
            "Breakfast".to_string(),
            vec![LoggedItem {
                food_name: "Oats".to_string(),
                quantity: 1.5,
                calories: 583.5,
                protein: 25.35,
                carbs: 99.45,
                fats: 10.35,
            }],
        )
    }

    #[test]
    fn test_missing_file_is_empty_log() {
        let log = load_log("no_such_log.csv").unwrap();
        assert!(log.is_empty());
    }

    #[test]
    fn test_header_written_once() {
        let file = NamedTempFile::new().unwrap();
        append_entry(file.path(), &sample_entry()).unwrap();
        append_entry(file.path(), &sample_entry()).unwrap();

        let content = fs::read_to_string(file.path()).unwrap();
        let header_count = content
            .lines()
            .filter(|line| line.starts_with("Food Item"))
            .count();
        assert_eq!(header_count, 1);
    }

    #[test]
    fn test_one_divider_per_meal() {
        let file = NamedTempFile::new().unwrap();
        append_entry(file.path(), &sample_entry()).unwrap();
        append_entry(file.path(), &sample_entry()).unwrap();

        let content = fs::read_to_string(file.path()).unwrap();
        let dividers = content.lines().filter(|l| l.starts_with("---")).count();
        assert_eq!(dividers, 2);
    }

    #[test]
    fn test_totals_row_precedes_divider() {
        let file = NamedTempFile::new().unwrap();
        append_entry(file.path(), &sample_entry()).unwrap();

        let content = fs::read_to_string(file.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        let divider_idx = lines.iter().position(|l| l.starts_with("---")).unwrap();
        let marker_line = lines[divider_idx - 1];
        assert!(marker_line.starts_with(MEAL_MARKER));
        assert!(marker_line.contains("2024-03-10 09:15:00"));
        assert!(marker_line.contains("Breakfast"));
    }

    #[test]
    fn test_bad_number_is_reported() {
        let file = NamedTempFile::new().unwrap();
        fs::write(
            file.path(),
            "Food Item,Quantity,Calories,Protein,Carbs,Fats,Timestamp,Meal Tag\n\
             Oats,abc,100,5,10,2,,\n",
        )
        .unwrap();

        let err = load_log(file.path()).unwrap_err();
        assert!(matches!(err, TrackerError::LogFormat(_)));
    }

    #[test]
    fn test_truncated_tail_is_dropped() {
        let file = NamedTempFile::new().unwrap();
        append_entry(file.path(), &sample_entry()).unwrap();

        // Item row with no closing totals row.
        let mut content = fs::read_to_string(file.path()).unwrap();
        content.push_str("Stray,1,100,5,10,2,,\n");
        fs::write(file.path(), content).unwrap();

        let log = load_log(file.path()).unwrap();
        assert_eq!(log.entries.len(), 1);
    }
}
