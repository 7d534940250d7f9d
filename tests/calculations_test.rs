use assert_float_eq::assert_float_absolute_eq;
use chrono::NaiveDate;

use meal_carbon_rs::engine::{compare_to_meat, calculate_equivalents, CarbonCalculator};
use meal_carbon_rs::models::{IngredientUsage, MealDescription, TipKind};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn mixed_meal() -> Vec<IngredientUsage> {
    vec![
        IngredientUsage::new("番茄", 250.0, 0.7).with_origin("local"),
        IngredientUsage::new("牛油果", 120.0, 2.5)
            .with_origin("import")
            .with_preservation("refrigerated"),
        IngredientUsage::new("豆腐", 300.0, 3.2),
        IngredientUsage::new("玉米", 150.0, 1.1).with_preservation("canned"),
        IngredientUsage::new("蓝莓", 80.0, 1.8).with_preservation("frozen"),
    ]
}

#[test]
fn test_simple_total_is_sum_times_multiplier() {
    let calc = CarbonCalculator::default();
    let ingredients = mixed_meal();
    let raw: f64 = ingredients
        .iter()
        .map(|i| i.per_kg_footprint * i.amount_grams / 1000.0)
        .sum();

    for (method, factor) in [("蒸", 1.05), ("烤", 1.25), ("微波炉", 1.0)] {
        let result = calc.calculate_simple(&ingredients, method);
        assert_eq!(result.cooking_factor, factor);
        assert_float_absolute_eq!(result.total_carbon, raw * factor, 0.005);
    }
}

#[test]
fn test_simple_empty_list() {
    let result = CarbonCalculator::default().calculate_simple(&[], "炒");
    assert_eq!(result.total_carbon, 0.0);
    assert!(result.details.is_empty());
}

#[test]
fn test_breakdown_values_sum_to_total() {
    let calc = CarbonCalculator::default();
    for month in 1..=12 {
        for method in ["生食", "炒", "炸", "不存在"] {
            let meal = MealDescription::new(mixed_meal(), method).with_date(date(2025, month, 15));
            let result = calc.calculate_advanced(&meal);
            assert_float_absolute_eq!(result.breakdown.values.sum(), result.total_carbon, 0.01);
        }
    }
}

#[test]
fn test_breakdown_percent_sums_to_100() {
    let calc = CarbonCalculator::default();
    let meal = MealDescription::new(mixed_meal(), "煎").with_date(date(2025, 11, 2));
    let result = calc.calculate_advanced(&meal);
    assert!(result.total_carbon > 0.0);
    assert_float_absolute_eq!(result.breakdown.percent.sum(), 100.0, 0.5);
}

#[test]
fn test_empty_meal_percentages_are_zero() {
    let calc = CarbonCalculator::default();
    let meal = MealDescription::new(Vec::new(), "炒").with_date(date(2025, 4, 1));
    let result = calc.calculate_advanced(&meal);

    assert_eq!(result.total_carbon, 0.0);
    for (_, pct) in result.breakdown.percent.entries() {
        assert_eq!(pct, 0.0);
        assert!(pct.is_finite());
    }
    assert_eq!(result.tips.len(), 1);
    assert_eq!(result.tips[0].kind, TipKind::Praise);
}

#[test]
fn test_all_zero_footprints_percentages_are_zero() {
    let calc = CarbonCalculator::default();
    let meal = MealDescription::new(vec![IngredientUsage::new("水", 500.0, 0.0)], "煮")
        .with_date(date(2025, 4, 1));
    let result = calc.calculate_advanced(&meal);
    assert_eq!(result.total_carbon, 0.0);
    assert_eq!(result.breakdown.percent.sum(), 0.0);
}

#[test]
fn test_season_factor_follows_meal_date() {
    let calc = CarbonCalculator::default();
    let tomato = vec![IngredientUsage::new("番茄", 100.0, 1.0)];

    let july = MealDescription::new(tomato.clone(), "炒").with_date(date(2025, 7, 1));
    let january = MealDescription::new(tomato, "炒").with_date(date(2025, 1, 1));

    assert_eq!(calc.calculate_advanced(&july).ingredients[0].factors.season, 1.0);
    assert_eq!(calc.calculate_advanced(&january).ingredients[0].factors.season, 1.2);
}

#[test]
fn test_transport_factor_by_origin() {
    let calc = CarbonCalculator::default();
    let meal = MealDescription::new(
        vec![
            IngredientUsage::new("a", 100.0, 1.0).with_origin("import"),
            IngredientUsage::new("b", 100.0, 1.0),
            IngredientUsage::new("c", 100.0, 1.0).with_origin("local"),
            IngredientUsage::new("d", 100.0, 1.0).with_origin("进口"),
        ],
        "炒",
    )
    .with_date(date(2025, 5, 1));
    let result = calc.calculate_advanced(&meal);

    let transport: Vec<f64> = result.ingredients.iter().map(|i| i.factors.transport).collect();
    assert_eq!(transport, vec![1.35, 1.15, 1.0, 1.35]);
}

#[test]
fn test_end_to_end_single_ingredient() {
    let calc = CarbonCalculator::default();
    let meal = MealDescription::new(vec![IngredientUsage::new("番茄", 200.0, 3.2)], "蒸")
        .with_date(date(2025, 7, 15));
    let result = calc.calculate_advanced(&meal);

    let values = &result.breakdown.values;
    assert_float_absolute_eq!(values.ingredient_base, 0.64, 1e-9);
    assert_float_absolute_eq!(values.cooking_energy, 0.032, 1e-9);
    assert_float_absolute_eq!(values.transportation, 0.096, 1e-9);
    assert_eq!(values.seasonal, 0.0);
    assert_eq!(values.preservation, 0.0);
    assert_eq!(result.total_carbon, 0.77);
    assert_eq!(result.ingredients[0].base_carbon, 0.64);
    assert_eq!(result.ingredients[0].total_carbon, 0.768);

    // Under the default 1.0 kg baseline
    assert_eq!(result.vs_baseline.reduction, 0.23);
    assert_eq!(result.vs_baseline.meal_type, "素食简餐");
}

#[test]
fn test_tips_for_off_season_fried_import() {
    let calc = CarbonCalculator::default();
    let meal = MealDescription::new(
        vec![IngredientUsage::new("西兰花", 1000.0, 1.0)
            .with_origin("import")
            .with_preservation("frozen")],
        "炸",
    )
    .with_date(date(2025, 7, 1))
    .with_meal_type("肉食简餐");
    let result = calc.calculate_advanced(&meal);

    let kinds: Vec<TipKind> = result.tips.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TipKind::Cooking,
            TipKind::Seasonal,
            TipKind::Transport,
            TipKind::Preservation
        ]
    );
    // 1.0 + 0.35 + 0.2 + 0.35 + 0.1
    assert_eq!(result.total_carbon, 2.0);
    assert_eq!(result.vs_baseline.baseline, 5.0);
    assert_eq!(result.vs_baseline.reduction, 3.0);
    assert_eq!(result.vs_baseline.reduction_percent, 60.0);
}

#[test]
fn test_compare_to_meat() {
    let cmp = compare_to_meat(1.0, 5.0);
    assert_eq!(cmp.reduction, 4.0);
    assert_eq!(cmp.reduction_percent, 80.0);
    assert_eq!(cmp.equivalents, calculate_equivalents(4.0));
}

#[test]
fn test_calculation_is_idempotent() {
    let calc = CarbonCalculator::default();
    let meal = MealDescription::new(mixed_meal(), "焖").with_date(date(2025, 9, 9));
    let first = calc.calculate_advanced(&meal);
    let second = calc.calculate_advanced(&meal);
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}
