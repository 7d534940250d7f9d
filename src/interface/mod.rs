pub mod prompts;
pub mod render;

pub use prompts::{
    closest_matches, collect_meal_request, prompt_cooking_method, prompt_ingredients,
    prompt_meal_date, prompt_meal_type, prompt_yes_no,
};
pub use render::{
    display_comparison, display_equivalents, display_report, display_result, display_simple,
};
