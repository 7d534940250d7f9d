use chrono::{Local, NaiveDate};
use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::engine::FactorTables;
use crate::error::{CarbonError, Result};
use crate::models::{DEFAULT_COOKING_METHOD, DEFAULT_MEAL_TYPE};
use crate::registry::{IngredientEntry, IngredientRegistry, MealRequest};

const ORIGINS: &[&str] = &["domestic", "local", "import"];
const PRESERVATIONS: &[&str] = &["fresh", "refrigerated", "frozen", "dried", "canned"];

/// Options ranked by similarity to `input`, best first.
pub fn closest_matches<'a>(input: &str, options: &[&'a str]) -> Vec<&'a str> {
    let input = input.to_lowercase();
    let mut candidates: Vec<(&str, f64)> = options
        .iter()
        .map(|o| (*o, jaro_winkler(&o.to_lowercase(), &input)))
        .filter(|(_, score)| *score > 0.7)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    candidates.into_iter().map(|(o, _)| o).collect()
}

/// Offer close matches for an unrecognised name. Returns the chosen option.
fn pick_match(input: &str, options: &[&str]) -> Result<Option<String>> {
    let candidates = closest_matches(input, options);

    if candidates.is_empty() {
        return Ok(None);
    }

    if candidates.len() == 1 {
        let confirm = Confirm::new()
            .with_prompt(format!("Did you mean '{}'?", candidates[0]))
            .default(true)
            .interact()?;
        return Ok(confirm.then(|| candidates[0].to_string()));
    }

    let options: Vec<String> = candidates.iter().take(5).map(|s| s.to_string()).collect();
    let mut selection_options = options.clone();
    selection_options.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Which did you mean?")
        .items(&selection_options)
        .default(0)
        .interact()?;

    Ok(options.get(selection).cloned())
}

/// Prompt for a cooking method, suggesting known ones for typos.
pub fn prompt_cooking_method(tables: &FactorTables) -> Result<String> {
    let input: String = Input::new()
        .with_prompt("Cooking method")
        .default(DEFAULT_COOKING_METHOD.to_string())
        .interact_text()?;

    if tables.cooking_factor(&input).is_some() {
        return Ok(input);
    }

    match pick_match(&input, &tables.cooking_methods())? {
        Some(method) => Ok(method),
        None => {
            println!("Unknown cooking method '{}', the default factor will apply.", input);
            Ok(input)
        }
    }
}

fn prompt_amount(name: &str) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(format!("Amount of {} (grams)", name))
        .default("100".to_string())
        .interact_text()?;

    let grams: f64 = input
        .parse()
        .map_err(|_| CarbonError::InvalidInput("Invalid number".to_string()))?;

    if grams < 0.0 {
        return Err(CarbonError::InvalidInput(
            "Amount must be non-negative".to_string(),
        ));
    }

    Ok(grams)
}

fn prompt_choice(prompt: &str, options: &[&str]) -> Result<String> {
    let selection = Select::new()
        .with_prompt(prompt)
        .items(options)
        .default(0)
        .interact()?;
    Ok(options[selection].to_string())
}

/// Prompt for ingredients until an empty name is entered.
pub fn prompt_ingredients(registry: &IngredientRegistry) -> Result<Vec<IngredientEntry>> {
    let mut entries = Vec::new();
    let names = registry.names();

    loop {
        let input: String = Input::new()
            .with_prompt("Ingredient (or press Enter to finish)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim().to_string();
        if input.is_empty() {
            break;
        }

        let name = if registry.get(&input).is_some() {
            input
        } else {
            match pick_match(&input, &names)? {
                Some(name) => name,
                None => {
                    println!("No registry entry found for '{}'", input);
                    continue;
                }
            }
        };

        let amount_grams = prompt_amount(&name)?;
        let origin = prompt_choice("Origin", ORIGINS)?;
        let preservation = prompt_choice("Preservation", PRESERVATIONS)?;

        println!("Added: {} ({} g)", name, amount_grams);
        entries.push(IngredientEntry {
            name,
            amount_grams,
            per_kg_footprint: None,
            origin: Some(origin),
            preservation: Some(preservation),
        });
    }

    Ok(entries)
}

/// Prompt for the reference meal to compare against.
pub fn prompt_meal_type(tables: &FactorTables) -> Result<String> {
    let mut options: Vec<&str> = tables.baselines.keys().map(String::as_str).collect();
    options.sort_unstable();
    if options.is_empty() {
        return Ok(DEFAULT_MEAL_TYPE.to_string());
    }

    let default = options
        .iter()
        .position(|o| *o == DEFAULT_MEAL_TYPE)
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Compare against")
        .items(&options)
        .default(default)
        .interact()?;

    Ok(options[selection].to_string())
}

/// Prompt for the meal date (drives the season).
pub fn prompt_meal_date() -> Result<NaiveDate> {
    let today = Local::now().date_naive();
    let input: String = Input::new()
        .with_prompt("Meal date (YYYY-MM-DD)")
        .default(today.format("%Y-%m-%d").to_string())
        .interact_text()?;

    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| CarbonError::InvalidInput(format!("Invalid date: {}", input)))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Collect a full meal request interactively.
pub fn collect_meal_request(
    registry: &IngredientRegistry,
    tables: &FactorTables,
) -> Result<MealRequest> {
    let ingredients = prompt_ingredients(registry)?;
    let cooking_method = prompt_cooking_method(tables)?;
    let meal_date = prompt_meal_date()?;
    let meal_type = prompt_meal_type(tables)?;

    Ok(MealRequest {
        ingredients,
        cooking_method: Some(cooking_method),
        meal_date: Some(meal_date),
        sourcing_context: None,
        meal_type: Some(meal_type),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closest_matches_ranks_best_first() {
        let options = ["tofu", "tomato", "tempeh"];
        let matches = closest_matches("tomatoe", &options);
        assert_eq!(matches.first(), Some(&"tomato"));
    }

    #[test]
    fn test_closest_matches_filters_unrelated() {
        let options = ["broccoli", "carrot"];
        assert!(closest_matches("zzzz", &options).is_empty());
    }
}
