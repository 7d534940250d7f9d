use crate::engine::calculations::{round_to, CarbonCalculator};
use crate::engine::constants::TOTAL_DECIMALS;
use crate::models::{
    CalculationResult, DetailedReport, ReportBaseline, ReportBreakdown, ReportEntry,
};

fn entry(value: f64, percent: f64, description: &str) -> ReportEntry {
    ReportEntry {
        value: round_to(value, TOTAL_DECIMALS),
        percent,
        description: description.to_string(),
    }
}

impl CarbonCalculator<'_> {
    /// Expand a calculation result into a display-ready report.
    pub fn generate_report(&self, result: &CalculationResult) -> DetailedReport {
        let values = &result.breakdown.values;
        let percent = &result.breakdown.percent;
        let vs = &result.vs_baseline;

        let message = if vs.reduction > 0.0 {
            format!(
                "{} kg less than {}, a {}% reduction",
                vs.reduction, vs.meal_type, vs.reduction_percent
            )
        } else {
            "Already at the ideal level".to_string()
        };

        DetailedReport {
            summary: format!("Meal carbon footprint: {} kg CO₂e", result.total_carbon),
            breakdown: ReportBreakdown {
                ingredient_base: entry(
                    values.ingredient_base,
                    percent.ingredient_base,
                    "Ingredient production",
                ),
                cooking_energy: entry(values.cooking_energy, percent.cooking_energy, "Cooking energy"),
                transportation: entry(values.transportation, percent.transportation, "Transportation"),
                preservation: entry(values.preservation, percent.preservation, "Preservation"),
                seasonal: entry(values.seasonal, percent.seasonal, "Seasonal adjustment"),
            },
            vs_baseline: ReportBaseline {
                comparison: format!("vs {}", vs.meal_type),
                baseline: vs.baseline,
                your_meal: result.total_carbon,
                reduction: vs.reduction,
                reduction_percent: vs.reduction_percent,
                message,
            },
            tips: result.tips.clone(),
            savings_potential: self.savings_potential(values, &result.cooking_method),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{IngredientUsage, MealDescription};
    use chrono::NaiveDate;

    fn winter_meal(grams: f64) -> MealDescription {
        MealDescription::new(vec![IngredientUsage::new("白菜", grams, 1.0).with_origin("local")], "蒸")
            .with_date(NaiveDate::from_ymd_opt(2025, 1, 5).unwrap())
    }

    #[test]
    fn test_report_under_baseline() {
        let calc = CarbonCalculator::default();
        let result = calc.calculate_advanced(&winter_meal(400.0));
        let report = calc.generate_report(&result);

        // 0.4 * 1.05
        assert_eq!(report.vs_baseline.your_meal, 0.42);
        assert_eq!(report.vs_baseline.reduction, 0.58);
        assert_eq!(report.vs_baseline.comparison, "vs 素食简餐");
        assert!(report.vs_baseline.message.contains("0.58"));
        assert_eq!(report.breakdown.ingredient_base.value, 0.4);
        assert!(report.summary.contains("0.42"));
    }

    #[test]
    fn test_report_over_baseline() {
        let calc = CarbonCalculator::default();
        let result = calc.calculate_advanced(&winter_meal(2000.0));
        let report = calc.generate_report(&result);
        assert!(report.vs_baseline.reduction < 0.0);
        assert_eq!(report.vs_baseline.message, "Already at the ideal level");
    }
}
