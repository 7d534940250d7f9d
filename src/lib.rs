pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod interface;
pub mod models;
pub mod registry;

pub use engine::CarbonCalculator;
pub use error::{CarbonError, Result};
pub use models::{CalculationResult, IngredientUsage, MealDescription};
