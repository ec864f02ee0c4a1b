use crate::models::{FoodItem, Macro, MacroTotals};

/// One selected food with its portion multiplier. All four macros of the
/// item scale by the same multiplier.
#[derive(Debug, Clone)]
pub struct MealComponent {
    pub food: FoodItem,
    pub quantity: f64,
}

impl MealComponent {
    pub fn new(food: FoodItem, quantity: f64) -> Self {
        Self { food, quantity }
    }

    /// Scaled nutrient value for one macro.
    #[inline]
    pub fn scaled(&self, m: Macro) -> f64 {
        self.food.per_unit(m) * self.quantity
    }
}

/// A combination of distinct foods with portion multipliers.
#[derive(Debug, Clone)]
pub struct CandidateMeal {
    pub components: Vec<MealComponent>,
}

impl CandidateMeal {
    pub fn new(components: Vec<MealComponent>) -> Self {
        Self { components }
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Sum of `per_unit × quantity` across all components.
    pub fn totals(&self) -> MacroTotals {
        let mut totals = MacroTotals::default();
        for component in &self.components {
            totals.calories += component.scaled(Macro::Calories);
            totals.protein += component.scaled(Macro::Protein);
            totals.carbs += component.scaled(Macro::Carbs);
            totals.fats += component.scaled(Macro::Fats);
        }
        totals
    }
}

/// The best meal found over a trial budget, with its score (lower is better).
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub meal: CandidateMeal,
    pub score: f64,
}
