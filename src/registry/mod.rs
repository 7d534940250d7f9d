mod manager;
mod persistence;

pub use manager::{IngredientEntry, IngredientRecord, IngredientRegistry, MealRequest};
pub use persistence::{load_meal_request, load_registry, load_result, save_json, write_detail_csv};
