use serde::{Deserialize, Serialize};

/// One ingredient as it enters a calculation.
///
/// `origin` and `preservation` are free-form tags; unrecognised values fall
/// back to the domestic and fresh multipliers respectively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientUsage {
    pub name: String,

    pub amount_grams: f64,

    /// Emission factor in kg CO₂e per kg of ingredient.
    pub per_kg_footprint: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preservation: Option<String>,
}

impl IngredientUsage {
    pub fn new(name: impl Into<String>, amount_grams: f64, per_kg_footprint: f64) -> Self {
        Self {
            name: name.into(),
            amount_grams,
            per_kg_footprint,
            origin: None,
            preservation: None,
        }
    }

    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn with_preservation(mut self, preservation: impl Into<String>) -> Self {
        self.preservation = Some(preservation.into());
        self
    }

    /// Footprint before any adjustment factor: per-kg factor times mass in kg.
    #[inline]
    pub fn base_carbon(&self) -> f64 {
        self.per_kg_footprint * (self.amount_grams / 1000.0)
    }

    /// Basic validation: non-negative, finite amount and factor.
    pub fn is_valid(&self) -> bool {
        self.amount_grams.is_finite()
            && self.per_kg_footprint.is_finite()
            && self.amount_grams >= 0.0
            && self.per_kg_footprint >= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_carbon() {
        let ing = IngredientUsage::new("豆腐", 200.0, 3.2);
        assert!((ing.base_carbon() - 0.64).abs() < 1e-9);
    }

    #[test]
    fn test_is_valid() {
        assert!(IngredientUsage::new("米饭", 150.0, 1.1).is_valid());
        assert!(!IngredientUsage::new("米饭", -1.0, 1.1).is_valid());
        assert!(!IngredientUsage::new("米饭", 150.0, f64::NAN).is_valid());
    }

    #[test]
    fn test_optional_tags_deserialize() {
        let json = r#"{"name": "牛油果", "amountGrams": 80, "perKgFootprint": 2.5, "origin": "import"}"#;
        let ing: IngredientUsage = serde_json::from_str(json).unwrap();
        assert_eq!(ing.origin.as_deref(), Some("import"));
        assert!(ing.preservation.is_none());
    }
}
