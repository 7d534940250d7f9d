use serde::{Deserialize, Serialize};

/// Additive decomposition of a meal's footprint by cause (kg CO₂e).
///
/// Every category except `ingredient_base` is the increment above the base
/// footprint introduced by one adjustment factor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Breakdown {
    pub ingredient_base: f64,
    pub cooking_energy: f64,
    pub transportation: f64,
    pub preservation: f64,
    pub seasonal: f64,
}

impl Breakdown {
    /// Sum of all categories.
    pub fn sum(&self) -> f64 {
        self.ingredient_base
            + self.cooking_energy
            + self.transportation
            + self.preservation
            + self.seasonal
    }

    /// Category values paired with their serialized key, in display order.
    pub fn entries(&self) -> [(&'static str, f64); 5] {
        [
            ("ingredientBase", self.ingredient_base),
            ("cookingEnergy", self.cooking_energy),
            ("transportation", self.transportation),
            ("preservation", self.preservation),
            ("seasonal", self.seasonal),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownSummary {
    /// Unrounded category totals.
    pub values: Breakdown,
    /// Share of the total per category, 1 dp. All zero for a zero total.
    pub percent: Breakdown,
}

/// Multipliers applied to one ingredient, rounded to 2 dp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IngredientFactors {
    pub cooking: f64,
    pub season: f64,
    pub transport: f64,
    pub preservation: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientDetail {
    pub name: String,
    pub amount_grams: f64,
    pub base_carbon: f64,
    pub factors: IngredientFactors,
    pub total_carbon: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaselineComparison {
    pub baseline: f64,
    pub meal_type: String,
    pub reduction: f64,
    pub reduction_percent: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TipKind {
    Cooking,
    Seasonal,
    Transport,
    Preservation,
    Praise,
}

impl TipKind {
    pub fn icon(&self) -> &'static str {
        match self {
            TipKind::Cooking => "🔥",
            TipKind::Seasonal => "🌱",
            TipKind::Transport => "🚚",
            TipKind::Preservation => "❄️",
            TipKind::Praise => "👍",
        }
    }
}

/// An advisory reduction suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tip {
    #[serde(rename = "type")]
    pub kind: TipKind,
    pub icon: String,
    pub message: String,
    /// Estimated kg CO₂e saved, 2 dp.
    #[serde(rename = "estimatedSavingsKg")]
    pub savings: f64,
}

impl Tip {
    pub fn new(kind: TipKind, message: impl Into<String>, savings: f64) -> Self {
        Self {
            kind,
            icon: kind.icon().to_string(),
            message: message.into(),
            savings,
        }
    }
}

/// Output of the multi-factor calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    /// kg CO₂e, 2 dp.
    pub total_carbon: f64,
    pub breakdown: BreakdownSummary,
    pub ingredients: Vec<IngredientDetail>,
    pub vs_baseline: BaselineComparison,
    pub tips: Vec<Tip>,
    pub cooking_method: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleDetail {
    pub name: String,
    pub amount_grams: f64,
    pub per_kg_footprint: f64,
    /// 3 dp.
    pub carbon: f64,
}

/// Output of the flat-multiplier calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleResult {
    pub total_carbon: f64,
    pub cooking_factor: f64,
    pub details: Vec<SimpleDetail>,
}
