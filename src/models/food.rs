use serde::{Deserialize, Serialize};

use crate::models::Macro;

/// An immutable catalog entry: nutrient content for one reference unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodItem {
    pub name: String,

    /// Display string for one reference unit, informational only.
    pub serving_size: String,

    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,

    /// Default quantity offered when logging this food manually.
    pub default_quantity: f64,
}

impl FoodItem {
    /// Nutrient content per reference unit for one macro.
    #[inline]
    pub fn per_unit(&self, m: Macro) -> f64 {
        match m {
            Macro::Calories => self.calories,
            Macro::Protein => self.protein,
            Macro::Carbs => self.carbs,
            Macro::Fats => self.fats,
        }
    }

    /// Non-negative nutrient fields and a non-empty name.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && self.calories >= 0.0
            && self.protein >= 0.0
            && self.carbs >= 0.0
            && self.fats >= 0.0
    }

    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

impl PartialEq for FoodItem {
    fn eq(&self, other: &Self) -> bool {
        self.name.to_lowercase() == other.name.to_lowercase()
    }
}

impl Eq for FoodItem {}
