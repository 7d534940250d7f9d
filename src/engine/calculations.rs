use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use crate::engine::constants::*;
use crate::engine::season::{season_factor, Season};
use crate::engine::tables::{FactorTables, DEFAULT_TABLES};
use crate::models::{
    BaselineComparison, Breakdown, BreakdownSummary, CalculationResult, IngredientDetail,
    IngredientFactors, IngredientUsage, MealDescription, SimpleDetail, SimpleResult, Sourcing,
};

/// Round to a fixed number of decimal places.
///
/// Rounds the exact decimal value of the float, ties away from zero, so 0.015
/// (stored just below) becomes 0.01 and 0.125 becomes 0.13. Scaling by a power
/// of ten first would push near-ties across the midpoint.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let Some(exact) = Decimal::from_f64_retain(value) else {
        // NaN, infinities and magnitudes beyond Decimal's range
        return value;
    };
    exact
        .round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero)
        .to_string()
        .parse()
        .unwrap_or(value)
}

/// `part / whole` as a percentage at display precision; 0 when `whole` is 0.
pub fn percent_of(part: f64, whole: f64) -> f64 {
    if whole == 0.0 || !whole.is_finite() {
        return 0.0;
    }
    round_to(part / whole * 100.0, PERCENT_DECIMALS)
}

/// Per-category share of the total. All zero for an empty or zero meal.
pub fn breakdown_percent(values: &Breakdown, total: f64) -> Breakdown {
    Breakdown {
        ingredient_base: percent_of(values.ingredient_base, total),
        cooking_energy: percent_of(values.cooking_energy, total),
        transportation: percent_of(values.transportation, total),
        preservation: percent_of(values.preservation, total),
        seasonal: percent_of(values.seasonal, total),
    }
}

/// Stateless carbon calculator over a borrowed set of reference tables.
#[derive(Debug, Clone, Copy)]
pub struct CarbonCalculator<'a> {
    tables: &'a FactorTables,
}

impl Default for CarbonCalculator<'static> {
    fn default() -> Self {
        Self {
            tables: &DEFAULT_TABLES,
        }
    }
}

impl<'a> CarbonCalculator<'a> {
    pub fn new(tables: &'a FactorTables) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &'a FactorTables {
        self.tables
    }

    /// Flat calculation: summed base footprint times one cooking multiplier.
    ///
    /// Unknown cooking methods apply 1.0 here, unlike the multi-factor path.
    pub fn calculate_simple(
        &self,
        ingredients: &[IngredientUsage],
        cooking_method: &str,
    ) -> SimpleResult {
        let mut total_carbon = 0.0;
        let mut details = Vec::with_capacity(ingredients.len());

        for ing in ingredients {
            let carbon = ing.base_carbon();
            total_carbon += carbon;
            details.push(SimpleDetail {
                name: ing.name.clone(),
                amount_grams: ing.amount_grams,
                per_kg_footprint: ing.per_kg_footprint,
                carbon: round_to(carbon, DETAIL_DECIMALS),
            });
        }

        let cooking_factor = self
            .tables
            .cooking_factor(cooking_method)
            .unwrap_or(SIMPLE_COOKING_FACTOR);
        total_carbon *= cooking_factor;

        debug!(
            cooking_method,
            cooking_factor,
            total_carbon,
            ingredients = ingredients.len(),
            "simple calculation"
        );

        SimpleResult {
            total_carbon: round_to(total_carbon, TOTAL_DECIMALS),
            cooking_factor,
            details,
        }
    }

    /// Multi-factor calculation with breakdown, baseline comparison and tips.
    ///
    /// Each ingredient's total is its base footprint plus the increments from
    /// cooking, season, transport and preservation multipliers.
    pub fn calculate_advanced(&self, meal: &MealDescription) -> CalculationResult {
        let cooking_factor = self
            .tables
            .cooking_factor(&meal.cooking_method)
            .unwrap_or_else(|| {
                debug!(
                    method = %meal.cooking_method,
                    "unknown cooking method, using default factor"
                );
                DEFAULT_COOKING_FACTOR
            });
        let season = Season::from_date(meal.meal_date);

        debug!(
            ?season,
            sourcing = meal.sourcing_context.as_str(),
            cooking_factor,
            "multi-factor calculation"
        );

        let mut total_carbon = 0.0;
        let mut values = Breakdown::default();
        let mut details = Vec::with_capacity(meal.ingredients.len());

        for ing in &meal.ingredients {
            let base_carbon = ing.base_carbon();
            let cooking_carbon = base_carbon * (cooking_factor - 1.0);

            let season_factor = season_factor(&ing.name, season, &self.tables.seasonal);
            let seasonal_carbon = base_carbon * (season_factor - 1.0);

            let transport_factor = self
                .tables
                .transport_factor(Sourcing::from_origin(ing.origin.as_deref()));
            let transport_carbon = base_carbon * (transport_factor - 1.0);

            let preservation_factor = self
                .tables
                .preservation_factor(ing.preservation.as_deref());
            let preservation_carbon = base_carbon * (preservation_factor - 1.0);

            let ingredient_total = base_carbon
                + cooking_carbon
                + seasonal_carbon
                + transport_carbon
                + preservation_carbon;

            debug!(
                name = %ing.name,
                base_carbon,
                season_factor,
                transport_factor,
                preservation_factor,
                ingredient_total,
                "ingredient factors"
            );

            values.ingredient_base += base_carbon;
            values.cooking_energy += cooking_carbon;
            values.seasonal += seasonal_carbon;
            values.transportation += transport_carbon;
            values.preservation += preservation_carbon;

            total_carbon += ingredient_total;

            details.push(IngredientDetail {
                name: ing.name.clone(),
                amount_grams: ing.amount_grams,
                base_carbon: round_to(base_carbon, DETAIL_DECIMALS),
                factors: IngredientFactors {
                    cooking: round_to(cooking_factor, 2),
                    season: round_to(season_factor, 2),
                    transport: round_to(transport_factor, 2),
                    preservation: round_to(preservation_factor, 2),
                },
                total_carbon: round_to(ingredient_total, DETAIL_DECIMALS),
            });
        }

        let percent = breakdown_percent(&values, total_carbon);
        let tips = self.generate_tips(&values, &meal.cooking_method);
        let vs_baseline = self.compare_to_baseline(total_carbon, &meal.meal_type_for_comparison);

        CalculationResult {
            total_carbon: round_to(total_carbon, TOTAL_DECIMALS),
            breakdown: BreakdownSummary { values, percent },
            ingredients: details,
            vs_baseline,
            tips,
            cooking_method: meal.cooking_method.clone(),
        }
    }

    /// Reduction relative to a reference meal. Unknown meal types use 1.0 kg.
    pub fn compare_to_baseline(&self, total_carbon: f64, meal_type: &str) -> BaselineComparison {
        let baseline = self.tables.baseline(meal_type).unwrap_or_else(|| {
            debug!(meal_type, "unknown meal type, using default baseline");
            DEFAULT_BASELINE
        });
        let reduction = baseline - total_carbon;

        BaselineComparison {
            baseline,
            meal_type: meal_type.to_string(),
            reduction: round_to(reduction, TOTAL_DECIMALS),
            reduction_percent: percent_of(reduction, baseline),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn summer() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, 10).unwrap()
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(0.768, 2), 0.77);
        assert_eq!(round_to(1.23456, 3), 1.235);
        assert_eq!(round_to(12.25, 1), 12.3);
    }

    #[test]
    fn test_round_to_uses_exact_binary_value() {
        // 0.015 is stored as 0.01499999…, so it rounds down
        assert_eq!(round_to(0.015, 2), 0.01);
        assert_eq!(round_to(1.005, 2), 1.0);
        // Exact ties go away from zero
        assert_eq!(round_to(0.125, 2), 0.13);
        assert_eq!(round_to(-0.125, 2), -0.13);
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(0.0, 2), 0.0);
        assert!(round_to(f64::NAN, 2).is_nan());
    }

    #[test]
    fn test_simple_total_rounds_near_tie_down() {
        // 0.005 kg x 2.5 x 1.2 lands just below 0.015
        let calc = CarbonCalculator::default();
        let result = calc.calculate_simple(&[IngredientUsage::new("x", 5.0, 2.5)], "焖");
        assert_eq!(result.total_carbon, 0.01);
    }

    #[test]
    fn test_percent_of_zero_whole() {
        assert_eq!(percent_of(1.0, 0.0), 0.0);
        assert_eq!(percent_of(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_simple_unknown_method_is_flat() {
        let calc = CarbonCalculator::default();
        let ingredients = vec![IngredientUsage::new("豆腐", 500.0, 2.0)];
        let result = calc.calculate_simple(&ingredients, "微波");
        assert_eq!(result.cooking_factor, 1.0);
        assert_eq!(result.total_carbon, 1.0);
    }

    #[test]
    fn test_simple_applies_cooking_factor() {
        let calc = CarbonCalculator::default();
        let ingredients = vec![
            IngredientUsage::new("豆腐", 500.0, 2.0),
            IngredientUsage::new("青菜", 500.0, 0.4),
        ];
        let result = calc.calculate_simple(&ingredients, "炸");
        // (1.0 + 0.2) * 1.35
        assert_eq!(result.total_carbon, 1.62);
        assert_eq!(result.cooking_factor, 1.35);
        assert_eq!(result.details[1].carbon, 0.2);
    }

    #[test]
    fn test_advanced_unknown_method_defaults_to_stir_fry() {
        let calc = CarbonCalculator::default();
        let meal = MealDescription::new(
            vec![IngredientUsage::new("番茄", 1000.0, 1.0).with_origin("local")],
            "微波",
        )
        .with_date(summer());
        let result = calc.calculate_advanced(&meal);
        assert_eq!(result.ingredients[0].factors.cooking, 1.15);
        assert_eq!(result.total_carbon, 1.15);
    }

    #[test]
    fn test_advanced_empty_meal_has_zero_percentages() {
        let calc = CarbonCalculator::default();
        let meal = MealDescription::new(Vec::new(), "蒸").with_date(summer());
        let result = calc.calculate_advanced(&meal);
        assert_eq!(result.total_carbon, 0.0);
        assert_eq!(result.breakdown.percent, Breakdown::default());
        assert_eq!(result.vs_baseline.reduction, 1.0);
        assert_eq!(result.vs_baseline.reduction_percent, 100.0);
    }

    #[test]
    fn test_unknown_meal_type_baseline() {
        let calc = CarbonCalculator::default();
        let cmp = calc.compare_to_baseline(0.4, "下午茶");
        assert_eq!(cmp.baseline, 1.0);
        assert_eq!(cmp.reduction, 0.6);
        assert_eq!(cmp.reduction_percent, 60.0);
    }

    #[test]
    fn test_custom_tables() {
        let mut tables = FactorTables::default();
        tables.cooking.insert("微波".to_string(), 1.02);
        let calc = CarbonCalculator::new(&tables);
        let ingredients = vec![IngredientUsage::new("米饭", 1000.0, 1.0)];
        assert_eq!(calc.calculate_simple(&ingredients, "微波").total_carbon, 1.02);
    }
}
