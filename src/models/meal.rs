use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::IngredientUsage;

/// Cooking method assumed when a caller supplies none (stir-fried).
pub const DEFAULT_COOKING_METHOD: &str = "炒";

/// Reference meal used for the baseline comparison when none is given.
pub const DEFAULT_MEAL_TYPE: &str = "素食简餐";

/// Transport distance class of an ingredient or a meal's sourcing context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sourcing {
    Local,
    #[default]
    Domestic,
    Import,
}

impl Sourcing {
    /// Classify a free-form origin tag. Anything unrecognised is domestic.
    pub fn from_origin(origin: Option<&str>) -> Self {
        match origin {
            Some("import") | Some("进口") => Sourcing::Import,
            Some("local") | Some("本地") => Sourcing::Local,
            _ => Sourcing::Domestic,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sourcing::Local => "local",
            Sourcing::Domestic => "domestic",
            Sourcing::Import => "import",
        }
    }
}

/// Everything the multi-factor calculation needs to know about a meal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealDescription {
    pub ingredients: Vec<IngredientUsage>,

    #[serde(default = "default_cooking_method")]
    pub cooking_method: String,

    /// Only the month matters; it selects the season.
    #[serde(default = "today")]
    pub meal_date: NaiveDate,

    #[serde(default)]
    pub sourcing_context: Sourcing,

    #[serde(default = "default_meal_type")]
    pub meal_type_for_comparison: String,
}

fn default_cooking_method() -> String {
    DEFAULT_COOKING_METHOD.to_string()
}

fn default_meal_type() -> String {
    DEFAULT_MEAL_TYPE.to_string()
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

impl MealDescription {
    pub fn new(ingredients: Vec<IngredientUsage>, cooking_method: impl Into<String>) -> Self {
        Self {
            ingredients,
            cooking_method: cooking_method.into(),
            meal_date: today(),
            sourcing_context: Sourcing::default(),
            meal_type_for_comparison: default_meal_type(),
        }
    }

    pub fn with_date(mut self, meal_date: NaiveDate) -> Self {
        self.meal_date = meal_date;
        self
    }

    pub fn with_meal_type(mut self, meal_type: impl Into<String>) -> Self {
        self.meal_type_for_comparison = meal_type.into();
        self
    }

    pub fn with_sourcing(mut self, sourcing: Sourcing) -> Self {
        self.sourcing_context = sourcing;
        self
    }
}
