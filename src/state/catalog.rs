use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;
use crate::models::FoodItem;

/// Raw catalog row as stored on disk. Every field is optional so that
/// partially filled rows deserialize and can be filtered instead of
/// failing the whole load.
#[derive(Debug, Deserialize)]
struct CatalogRow {
    #[serde(rename = "Food Item")]
    name: Option<String>,

    #[serde(rename = "Serving Size")]
    serving_size: Option<String>,

    #[serde(rename = "Calories (kcal)")]
    calories: Option<f64>,

    #[serde(rename = "Protein (g)")]
    protein: Option<f64>,

    #[serde(rename = "Carbs (g)")]
    carbs: Option<f64>,

    #[serde(rename = "Fats (g)")]
    fats: Option<f64>,

    #[serde(rename = "Quantity")]
    quantity: Option<f64>,
}

impl CatalogRow {
    fn into_food(self) -> Option<FoodItem> {
        let name = self.name?.trim().to_string();
        if name.is_empty() {
            return None;
        }

        let item = FoodItem {
            name,
            serving_size: self.serving_size.unwrap_or_default(),
            calories: self.calories?,
            protein: self.protein?,
            carbs: self.carbs?,
            fats: self.fats?,
            default_quantity: match self.quantity {
                Some(q) if q > 0.0 => q,
                _ => 1.0,
            },
        };

        item.is_valid().then_some(item)
    }
}

/// Load the food catalog from a CSV file.
///
/// Rows without a name and rows with missing or negative nutrient values
/// are skipped. Duplicate names (case-insensitive) keep the last
/// occurrence, preserving first-seen order.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<FoodItem>> {
    let mut reader = csv::Reader::from_path(path)?;

    let mut by_key: HashMap<String, usize> = HashMap::new();
    let mut foods: Vec<FoodItem> = Vec::new();

    for row in reader.deserialize::<CatalogRow>() {
        let Some(item) = row?.into_food() else {
            continue;
        };

        match by_key.entry(item.key()) {
            Entry::Occupied(slot) => foods[*slot.get()] = item,
            Entry::Vacant(slot) => {
                slot.insert(foods.len());
                foods.push(item);
            }
        }
    }

    Ok(foods)
}
