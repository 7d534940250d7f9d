use serde::{Deserialize, Serialize};

use crate::models::Tip;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsSuggestion {
    pub action: String,
    pub savings: f64,
    pub percent: f64,
}

/// Optimisation estimate derived independently of the tips.
///
/// Overlaps with tip savings; the two must not be added together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsPotential {
    pub max_savings: f64,
    pub suggestions: Vec<SavingsSuggestion>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub value: f64,
    pub percent: f64,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportBreakdown {
    pub ingredient_base: ReportEntry,
    pub cooking_energy: ReportEntry,
    pub transportation: ReportEntry,
    pub preservation: ReportEntry,
    pub seasonal: ReportEntry,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportBaseline {
    pub comparison: String,
    pub baseline: f64,
    pub your_meal: f64,
    pub reduction: f64,
    pub reduction_percent: f64,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedReport {
    pub summary: String,
    pub breakdown: ReportBreakdown,
    pub vs_baseline: ReportBaseline,
    pub tips: Vec<Tip>,
    pub savings_potential: SavingsPotential,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equivalent {
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    pub description: String,
}

/// Illustrative conversions of a carbon mass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Equivalents {
    pub trees: Equivalent,
    pub driving: Equivalent,
    pub electricity: Equivalent,
    pub plastic: Equivalent,
    pub water_bottles: Equivalent,
}

/// Plant-based versus meat meal comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    pub vegan_carbon: f64,
    pub meat_carbon: f64,
    pub reduction: f64,
    pub reduction_percent: f64,
    pub equivalents: Equivalents,
}
