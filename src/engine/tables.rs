use std::collections::HashMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::engine::constants::*;
use crate::engine::season::Season;
use crate::error::{CarbonError, Result};
use crate::models::Sourcing;

/// Built-in reference tables, shared read-only by every calculation.
pub static DEFAULT_TABLES: LazyLock<FactorTables> = LazyLock::new(FactorTables::default);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportFactors {
    pub local: f64,
    pub domestic: f64,
    pub import: f64,
}

impl Default for TransportFactors {
    fn default() -> Self {
        Self {
            local: TRANSPORT_LOCAL,
            domestic: TRANSPORT_DOMESTIC,
            import: TRANSPORT_IMPORT,
        }
    }
}

/// In-season produce names per season.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalProduce {
    pub spring: Vec<String>,
    pub summer: Vec<String>,
    pub autumn: Vec<String>,
    pub winter: Vec<String>,
}

impl Default for SeasonalProduce {
    fn default() -> Self {
        let owned = |items: &[&str]| -> Vec<String> {
            items.iter().map(|s| s.to_string()).collect()
        };
        Self {
            spring: owned(SPRING_PRODUCE),
            summer: owned(SUMMER_PRODUCE),
            autumn: owned(AUTUMN_PRODUCE),
            winter: owned(WINTER_PRODUCE),
        }
    }
}

impl SeasonalProduce {
    pub fn for_season(&self, season: Season) -> &[String] {
        match season {
            Season::Spring => &self.spring,
            Season::Summer => &self.summer,
            Season::Autumn => &self.autumn,
            Season::Winter => &self.winter,
        }
    }
}

/// Every multiplier and reference value the engine reads.
///
/// A table given in a config file replaces the built-in one wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FactorTables {
    pub cooking: HashMap<String, f64>,
    pub transport: TransportFactors,
    pub seasonal: SeasonalProduce,
    pub preservation: HashMap<String, f64>,
    pub baselines: HashMap<String, f64>,
}

fn owned_map(pairs: &[(&str, f64)]) -> HashMap<String, f64> {
    pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

impl Default for FactorTables {
    fn default() -> Self {
        Self {
            cooking: owned_map(COOKING_FACTORS),
            transport: TransportFactors::default(),
            seasonal: SeasonalProduce::default(),
            preservation: owned_map(PRESERVATION_FACTORS),
            baselines: owned_map(MEAL_BASELINES),
        }
    }
}

impl FactorTables {
    /// Cooking multiplier, if the method is known. Callers pick their own default.
    pub fn cooking_factor(&self, method: &str) -> Option<f64> {
        self.cooking.get(method).copied()
    }

    pub fn transport_factor(&self, sourcing: Sourcing) -> f64 {
        match sourcing {
            Sourcing::Local => self.transport.local,
            Sourcing::Domestic => self.transport.domestic,
            Sourcing::Import => self.transport.import,
        }
    }

    /// Preservation multiplier. Missing tag means fresh; unknown tag means 1.0.
    pub fn preservation_factor(&self, preservation: Option<&str>) -> f64 {
        let key = preservation.unwrap_or(DEFAULT_PRESERVATION);
        self.preservation
            .get(key)
            .copied()
            .unwrap_or(DEFAULT_PRESERVATION_FACTOR)
    }

    pub fn baseline(&self, meal_type: &str) -> Option<f64> {
        self.baselines.get(meal_type).copied()
    }

    /// Known cooking method names, sorted.
    pub fn cooking_methods(&self) -> Vec<&str> {
        let mut methods: Vec<&str> = self.cooking.keys().map(String::as_str).collect();
        methods.sort_unstable();
        methods
    }

    /// Reject tables that could produce negative or non-finite output.
    pub fn validate(&self) -> Result<()> {
        let multipliers = self
            .cooking
            .iter()
            .chain(self.preservation.iter())
            .map(|(k, v)| (k.as_str(), *v))
            .chain([
                ("transport.local", self.transport.local),
                ("transport.domestic", self.transport.domestic),
                ("transport.import", self.transport.import),
            ]);

        for (key, value) in multipliers {
            if !value.is_finite() || value < 0.0 {
                return Err(CarbonError::InvalidConfig(format!(
                    "multiplier for '{}' must be a non-negative number, got {}",
                    key, value
                )));
            }
        }

        for (meal_type, value) in &self.baselines {
            if !value.is_finite() || *value <= 0.0 {
                return Err(CarbonError::InvalidConfig(format!(
                    "baseline for '{}' must be positive, got {}",
                    meal_type, value
                )));
            }
        }

        Ok(())
    }
}
