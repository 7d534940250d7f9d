use crate::engine::{round_to, CarbonLevel, TOTAL_DECIMALS};
use crate::models::{
    CalculationResult, Comparison, DetailedReport, Equivalents, SimpleResult, Tip,
};

fn display_tips(tips: &[Tip]) {
    println!("--- Tips ---");
    for tip in tips {
        if tip.savings > 0.0 {
            println!("  {} {} (save ~{:.2} kg)", tip.icon, tip.message, tip.savings);
        } else {
            println!("  {} {}", tip.icon, tip.message);
        }
    }
}

/// Breakdown table rows, values at the same precision as the report entries.
pub fn breakdown_lines(result: &CalculationResult) -> Vec<String> {
    let values = &result.breakdown.values;
    let percent = &result.breakdown.percent;
    values
        .entries()
        .iter()
        .zip(percent.entries().iter())
        .map(|((key, value), (_, pct))| {
            format!(
                "  {:<15} {:>8.2} kg  {:>5.1}%",
                key,
                round_to(*value, TOTAL_DECIMALS),
                pct
            )
        })
        .collect()
}

/// Display a multi-factor result with its breakdown table.
pub fn display_result(result: &CalculationResult, level: Option<(CarbonLevel, &str)>) {
    println!();
    println!("=== Meal Carbon Footprint ({}) ===", result.cooking_method);
    println!();

    if result.ingredients.is_empty() {
        println!("No ingredients.");
    }

    let max_name_len = result
        .ingredients
        .iter()
        .map(|i| i.name.chars().count())
        .max()
        .unwrap_or(10);

    for (i, ing) in result.ingredients.iter().enumerate() {
        println!(
            "{:>3}. {:<width$} {:>7.0} g | base {:.3} | x cook {:.2} season {:.2} transport {:.2} preserve {:.2} => {:.3} kg",
            i + 1,
            ing.name,
            ing.amount_grams,
            ing.base_carbon,
            ing.factors.cooking,
            ing.factors.season,
            ing.factors.transport,
            ing.factors.preservation,
            ing.total_carbon,
            width = max_name_len
        );
    }

    println!();
    println!("--- Breakdown ---");
    for line in breakdown_lines(result) {
        println!("{}", line);
    }

    println!();
    println!("--- Summary ---");
    println!("Total: {:.2} kg CO₂e", result.total_carbon);
    if let Some((level, color)) = level {
        println!("Level: {} ({})", level.name(), color);
    }
    let vs = &result.vs_baseline;
    println!(
        "vs {} ({:.2} kg): {:+.2} kg, {:+.1}%",
        vs.meal_type, vs.baseline, vs.reduction, vs.reduction_percent
    );
    println!();

    display_tips(&result.tips);
    println!();
}

/// Display a flat-multiplier result.
pub fn display_simple(result: &SimpleResult) {
    println!();
    println!("=== Simple Carbon Footprint ===");
    println!();

    for detail in &result.details {
        println!(
            "  {} - {} g x {} kg/kg = {:.3} kg",
            detail.name, detail.amount_grams, detail.per_kg_footprint, detail.carbon
        );
    }

    println!();
    println!("Cooking factor: {:.2}", result.cooking_factor);
    println!("Total: {:.2} kg CO₂e", result.total_carbon);
    println!();
}

/// Display a detailed report.
pub fn display_report(report: &DetailedReport) {
    println!();
    println!("=== Report ===");
    println!("{}", report.summary);
    println!();

    let b = &report.breakdown;
    for entry in [
        &b.ingredient_base,
        &b.cooking_energy,
        &b.transportation,
        &b.preservation,
        &b.seasonal,
    ] {
        println!(
            "  {:<22} {:>6.2} kg  {:>5.1}%",
            entry.description, entry.value, entry.percent
        );
    }

    println!();
    println!("{}: {}", report.vs_baseline.comparison, report.vs_baseline.message);
    println!();

    display_tips(&report.tips);

    let potential = &report.savings_potential;
    if !potential.suggestions.is_empty() {
        println!();
        println!("--- Savings Potential (up to {:.2} kg) ---", potential.max_savings);
        for s in &potential.suggestions {
            println!("  {} - {:.2} kg ({:.1}%)", s.action, s.savings, s.percent);
        }
    }
    println!();
}

/// Display equivalents of a carbon mass.
pub fn display_equivalents(equivalents: &Equivalents) {
    for eq in [
        &equivalents.trees,
        &equivalents.driving,
        &equivalents.electricity,
        &equivalents.plastic,
        &equivalents.water_bottles,
    ] {
        println!("  {}", eq.description);
    }
}

/// Display a plant-based vs meat comparison.
pub fn display_comparison(comparison: &Comparison) {
    println!();
    println!("=== Plant-based vs Meat ===");
    println!("Plant-based: {:.2} kg CO₂e", comparison.vegan_carbon);
    println!("Meat:        {:.2} kg CO₂e", comparison.meat_carbon);
    println!(
        "Reduction:   {:.2} kg ({:.1}%)",
        comparison.reduction, comparison.reduction_percent
    );
    println!();
    println!("Equivalent to:");
    display_equivalents(&comparison.equivalents);
    println!();
}
