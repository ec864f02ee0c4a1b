use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::planner::constants::{CARB_KCAL_PER_G, FAT_KCAL_PER_G, PROTEIN_KCAL_PER_G};

/// The four tracked macronutrients.
///
/// `Ord` follows declaration order, which fixes the iteration order of
/// target maps and keeps scoring deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Macro {
    Calories,
    Protein,
    Carbs,
    Fats,
}

impl Macro {
    pub const ALL: [Macro; 4] = [Macro::Calories, Macro::Protein, Macro::Carbs, Macro::Fats];

    pub fn as_str(&self) -> &'static str {
        match self {
            Macro::Calories => "Calories",
            Macro::Protein => "Protein",
            Macro::Carbs => "Carbs",
            Macro::Fats => "Fats",
        }
    }

    /// Display unit for prompts and reports.
    pub fn unit(&self) -> &'static str {
        match self {
            Macro::Calories => "kcal",
            _ => "g",
        }
    }
}

impl fmt::Display for Macro {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-macro targets. Any subset of macros may be present; the scorer
/// evaluates exactly the macros in the map.
pub type TargetProfile = BTreeMap<Macro, f64>;

/// Aggregated macro values for a meal or a day.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MacroTotals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

impl MacroTotals {
    pub fn get(&self, m: Macro) -> f64 {
        match m {
            Macro::Calories => self.calories,
            Macro::Protein => self.protein,
            Macro::Carbs => self.carbs,
            Macro::Fats => self.fats,
        }
    }

    pub fn add_assign(&mut self, other: &MacroTotals) {
        self.calories += other.calories;
        self.protein += other.protein;
        self.carbs += other.carbs;
        self.fats += other.fats;
    }

    /// Energy contributed by each macro in kcal (Atwater factors),
    /// as (protein, carbs, fats).
    pub fn macro_energy_kcal(&self) -> (f64, f64, f64) {
        (
            self.protein * PROTEIN_KCAL_PER_G,
            self.carbs * CARB_KCAL_PER_G,
            self.fats * FAT_KCAL_PER_G,
        )
    }
}
