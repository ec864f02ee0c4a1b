use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{Result, TrackerError};
use crate::models::{FoodItem, Macro, MealComponent, TargetProfile};

/// Prompt for a meal tag, defaulting to "Untitled" when left empty.
pub fn prompt_meal_tag() -> Result<String> {
    let input: String = Input::new()
        .with_prompt("Meal tag")
        .allow_empty(true)
        .interact_text()?;

    let tag = input.trim();
    if tag.is_empty() {
        Ok("Untitled".to_string())
    } else {
        Ok(tag.to_string())
    }
}

/// Prompt for a quantity with a default value.
pub fn prompt_quantity(label: &str, default: f64) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(format!("Quantity for {}", label))
        .default(default.to_string())
        .interact_text()?;

    let quantity: f64 = input
        .parse()
        .map_err(|_| TrackerError::InvalidInput(format!("invalid number: {}", input)))?;

    if quantity < 0.0 {
        return Err(TrackerError::InvalidInput(format!(
            "quantity must be non-negative: {}",
            input
        )));
    }
    Ok(quantity)
}

/// Resolve a typed food name against the catalog, with fuzzy fallback.
fn resolve_food<'a>(catalog: &'a [FoodItem], input: &str) -> Result<Option<&'a FoodItem>> {
    let lowered = input.to_lowercase();

    if let Some(food) = catalog.iter().find(|f| f.key() == lowered) {
        return Ok(Some(food));
    }

    let mut candidates: Vec<(&FoodItem, f64)> = catalog
        .iter()
        .map(|f| (f, jaro_winkler(&f.key(), &lowered)))
        .filter(|(_, score)| *score > 0.7)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    if candidates.is_empty() {
        println!("No matching food found for '{}'", input);
        return Ok(None);
    }

    if candidates.len() == 1 {
        let food = candidates[0].0;
        let confirm = Confirm::new()
            .with_prompt(format!("Did you mean '{}'?", food.name))
            .default(true)
            .interact()?;
        return Ok(confirm.then_some(food));
    }

    let options: Vec<String> = candidates
        .iter()
        .take(5)
        .map(|(f, _)| f.name.clone())
        .collect();

    let mut selection_options = options.clone();
    selection_options.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Which did you mean?")
        .items(&selection_options)
        .default(0)
        .interact()?;

    if selection < options.len() {
        Ok(Some(candidates[selection].0))
    } else {
        Ok(None)
    }
}

/// Collect meal items interactively: food names (with fuzzy matching) and
/// quantities, until an empty name ends the loop.
pub fn prompt_meal_items(catalog: &[FoodItem]) -> Result<Vec<MealComponent>> {
    let mut components = Vec::new();

    loop {
        let input: String = Input::new()
            .with_prompt("Add a food item (or press Enter to finish)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            break;
        }

        let Some(food) = resolve_food(catalog, input)? else {
            continue;
        };

        let quantity = prompt_quantity(&food.name, food.default_quantity)?;
        println!("Added: {} x {}", food.name, quantity);
        components.push(MealComponent::new(food.clone(), quantity));
    }

    Ok(components)
}

/// Let the user adjust each suggested quantity before logging.
pub fn prompt_adjust_quantities(components: &mut [MealComponent]) -> Result<()> {
    for component in components.iter_mut() {
        component.quantity = prompt_quantity(&component.food.name, component.quantity)?;
    }
    Ok(())
}

/// Prompt for all four macro targets, defaulting to the current values.
/// Targets must be positive at this layer.
pub fn prompt_targets(current: &TargetProfile) -> Result<TargetProfile> {
    let mut targets = TargetProfile::new();

    for m in Macro::ALL {
        let default = current.get(&m).copied().unwrap_or(0.0);
        let input: String = Input::new()
            .with_prompt(format!("{} target ({})", m, m.unit()))
            .default(default.to_string())
            .interact_text()?;

        let value: f64 = input
            .parse()
            .map_err(|_| TrackerError::InvalidInput(format!("invalid number: {}", input)))?;

        if !value.is_finite() || value <= 0.0 {
            return Err(TrackerError::InvalidTargets(format!(
                "target for {} must be positive, got {}",
                m, value
            )));
        }
        targets.insert(m, value);
    }

    Ok(targets)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
