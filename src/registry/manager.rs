use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{CarbonError, Result};
use crate::models::{IngredientUsage, MealDescription, Sourcing, DEFAULT_COOKING_METHOD};

/// One row of the ingredient emission-factor registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientRecord {
    #[serde(rename = "Name")]
    pub name: String,

    /// kg CO₂e per kg.
    #[serde(rename = "Factor")]
    pub factor: f64,

    #[serde(rename = "Category", default)]
    pub category: Option<String>,
}

impl IngredientRecord {
    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }

    pub fn is_valid(&self) -> bool {
        self.factor.is_finite() && self.factor >= 0.0
    }
}

/// A caller-side ingredient reference, possibly without a resolved factor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientEntry {
    pub name: String,
    pub amount_grams: f64,
    #[serde(default)]
    pub per_kg_footprint: Option<f64>,
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default)]
    pub preservation: Option<String>,
}

/// A meal as submitted by a caller, before factor resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealRequest {
    pub ingredients: Vec<IngredientEntry>,
    #[serde(default)]
    pub cooking_method: Option<String>,
    #[serde(default)]
    pub meal_date: Option<NaiveDate>,
    #[serde(default)]
    pub sourcing_context: Option<Sourcing>,
    #[serde(default)]
    pub meal_type: Option<String>,
}

/// In-memory emission-factor registry keyed by lowercase name.
#[derive(Debug, Default)]
pub struct IngredientRegistry {
    records: HashMap<String, IngredientRecord>,
}

impl IngredientRegistry {
    /// Build a registry. Later duplicates replace earlier ones.
    pub fn new(records: Vec<IngredientRecord>) -> Self {
        let mut map = HashMap::new();
        for record in records {
            map.insert(record.key(), record);
        }
        Self { records: map }
    }

    /// Get a record by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&IngredientRecord> {
        self.records.get(&name.to_lowercase())
    }

    /// All record names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.records.values().map(|r| r.name.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Turn an entry into an engine input, filling in a missing factor.
    pub fn resolve(&self, entry: &IngredientEntry) -> Result<IngredientUsage> {
        let factor = match entry.per_kg_footprint {
            Some(f) => f,
            None => {
                let record = self.get(&entry.name).ok_or_else(|| {
                    warn!(name = %entry.name, "ingredient missing from registry");
                    CarbonError::IngredientNotFound(entry.name.clone())
                })?;
                if !record.is_valid() {
                    return Err(CarbonError::MissingFactor(entry.name.clone()));
                }
                debug!(name = %entry.name, factor = record.factor, "resolved factor");
                record.factor
            }
        };

        let usage = IngredientUsage {
            name: entry.name.clone(),
            amount_grams: entry.amount_grams,
            per_kg_footprint: factor,
            origin: entry.origin.clone(),
            preservation: entry.preservation.clone(),
        };

        if !usage.is_valid() {
            return Err(CarbonError::InvalidInput(format!(
                "{}: amount and factor must be non-negative numbers",
                entry.name
            )));
        }

        Ok(usage)
    }

    /// Resolve a whole request into a meal description.
    pub fn assemble(&self, request: &MealRequest) -> Result<MealDescription> {
        let ingredients = request
            .ingredients
            .iter()
            .map(|entry| self.resolve(entry))
            .collect::<Result<Vec<_>>>()?;

        let cooking_method = request
            .cooking_method
            .clone()
            .unwrap_or_else(|| DEFAULT_COOKING_METHOD.to_string());

        let mut meal = MealDescription::new(ingredients, cooking_method);
        if let Some(date) = request.meal_date {
            meal = meal.with_date(date);
        }
        if let Some(sourcing) = request.sourcing_context {
            meal = meal.with_sourcing(sourcing);
        }
        if let Some(meal_type) = &request.meal_type {
            meal = meal.with_meal_type(meal_type.clone());
        }
        Ok(meal)
    }

    /// Count of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
