use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};

use crate::models::{MacroTotals, MealComponent};

/// One consumed food line within a logged meal.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggedItem {
    pub food_name: String,
    pub quantity: f64,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

impl LoggedItem {
    /// Capture a meal component at its final (possibly user-adjusted)
    /// quantity.
    pub fn from_component(component: &MealComponent) -> Self {
        Self {
            food_name: component.food.name.clone(),
            quantity: component.quantity,
            calories: component.food.calories * component.quantity,
            protein: component.food.protein * component.quantity,
            carbs: component.food.carbs * component.quantity,
            fats: component.food.fats * component.quantity,
        }
    }

    pub fn totals(&self) -> MacroTotals {
        MacroTotals {
            calories: self.calories,
            protein: self.protein,
            carbs: self.carbs,
            fats: self.fats,
        }
    }
}

/// One logged meal: line items plus the totals recorded at logging time.
#[derive(Debug, Clone, PartialEq)]
pub struct MealEntry {
    pub timestamp: NaiveDateTime,
    pub tag: String,
    pub items: Vec<LoggedItem>,
    pub totals: MacroTotals,
}

impl MealEntry {
    /// Build an entry with totals summed from its items.
    pub fn new(timestamp: NaiveDateTime, tag: String, items: Vec<LoggedItem>) -> Self {
        let mut totals = MacroTotals::default();
        for item in &items {
            totals.add_assign(&item.totals());
        }
        Self {
            timestamp,
            tag,
            items,
            totals,
        }
    }

    /// The day this meal belongs to for report grouping.
    pub fn day(&self) -> NaiveDate {
        self.timestamp.date()
    }
}

/// All logged meals, in file order.
#[derive(Debug, Clone, Default)]
pub struct MealLog {
    pub entries: Vec<MealEntry>,
}

impl MealLog {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries grouped by day, days in ascending order, meals in log order
    /// within each day.
    pub fn day_groups(&self) -> BTreeMap<NaiveDate, Vec<&MealEntry>> {
        let mut groups: BTreeMap<NaiveDate, Vec<&MealEntry>> = BTreeMap::new();
        for entry in &self.entries {
            groups.entry(entry.day()).or_default().push(entry);
        }
        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn item(name: &str, cal: f64, p: f64, c: f64, f: f64) -> LoggedItem {
        LoggedItem {
            food_name: name.to_string(),
            quantity: 1.0,
            calories: cal,
            protein: p,
            carbs: c,
            fats: f,
        }
    }

    #[test]
    fn test_entry_totals_sum_items() {
        let entry = MealEntry::new(
            ts("2024-01-01 12:00:00"),
            "Lunch".to_string(),
            vec![
                item("A", 400.0, 30.0, 20.0, 15.0),
                item("B", 200.0, 10.0, 30.0, 5.0),
            ],
        );

        assert_eq!(entry.totals.calories, 600.0);
        assert_eq!(entry.totals.protein, 40.0);
        assert_eq!(entry.totals.carbs, 50.0);
        assert_eq!(entry.totals.fats, 20.0);
    }

    #[test]
    fn test_day_groups_split_on_date() {
        let log = MealLog {
            entries: vec![
                MealEntry::new(ts("2024-01-01 08:00:00"), "Breakfast".to_string(), vec![]),
                MealEntry::new(ts("2024-01-01 12:30:00"), "Lunch".to_string(), vec![]),
                MealEntry::new(ts("2024-01-02 19:00:00"), "Dinner".to_string(), vec![]),
            ],
        };

        let groups = log.day_groups();
        assert_eq!(groups.len(), 2);

        let jan1 = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let jan2 = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        assert_eq!(groups[&jan1].len(), 2);
        assert_eq!(groups[&jan1][0].tag, "Breakfast");
        assert_eq!(groups[&jan2].len(), 1);
    }
}
