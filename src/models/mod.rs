mod ingredient;
mod meal;
mod report;
mod result;

pub use ingredient::IngredientUsage;
pub use meal::{MealDescription, Sourcing, DEFAULT_COOKING_METHOD, DEFAULT_MEAL_TYPE};
pub use report::{
    Comparison, DetailedReport, Equivalent, Equivalents, ReportBaseline, ReportBreakdown,
    ReportEntry, SavingsPotential, SavingsSuggestion,
};
pub use result::{
    BaselineComparison, Breakdown, BreakdownSummary, CalculationResult, IngredientDetail,
    IngredientFactors, SimpleDetail, SimpleResult, Tip, TipKind,
};
