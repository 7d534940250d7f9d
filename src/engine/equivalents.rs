use crate::engine::calculations::{percent_of, round_to};
use crate::engine::constants::*;
use crate::models::{Comparison, Equivalent, Equivalents};

fn equivalent(value: f64, unit: Option<&str>, description: String) -> Equivalent {
    Equivalent {
        value,
        unit: unit.map(str::to_string),
        description,
    }
}

/// Illustrative equivalents of a carbon mass in kg CO₂e.
pub fn calculate_equivalents(carbon_kg: f64) -> Equivalents {
    let trees = carbon_kg / TREE_ABSORPTION_KG;
    let driving = carbon_kg * DRIVING_KM_PER_KG;
    let electricity = carbon_kg / GRID_KG_PER_KWH;
    let plastic = carbon_kg / PLASTIC_KG_PER_KG;
    let bottles = carbon_kg / BOTTLE_KG;

    Equivalents {
        trees: equivalent(
            round_to(trees, 2),
            None,
            format!("What {} trees absorb in a year", round_to(trees, 1)),
        ),
        driving: equivalent(
            round_to(driving, 1),
            Some("km"),
            format!("{} km less driving", round_to(driving, 0)),
        ),
        electricity: equivalent(
            round_to(electricity, 0),
            Some("kWh"),
            format!("{} kWh of electricity saved", round_to(electricity, 0)),
        ),
        plastic: equivalent(
            round_to(plastic, 1),
            Some("kg"),
            format!("{} kg less plastic", round_to(plastic, 1)),
        ),
        water_bottles: equivalent(
            round_to(bottles, 0),
            Some("bottles"),
            format!("{} fewer plastic bottles", round_to(bottles, 0)),
        ),
    }
}

/// Compare a plant-based meal against a meat meal of the same kind.
///
/// A zero meat footprint yields a 0% reduction.
pub fn compare_to_meat(vegan_carbon: f64, meat_carbon: f64) -> Comparison {
    let reduction = meat_carbon - vegan_carbon;
    let reduction_percent = if meat_carbon > 0.0 {
        percent_of(reduction, meat_carbon)
    } else {
        0.0
    };

    Comparison {
        vegan_carbon: round_to(vegan_carbon, TOTAL_DECIMALS),
        meat_carbon: round_to(meat_carbon, TOTAL_DECIMALS),
        reduction: round_to(reduction, TOTAL_DECIMALS),
        reduction_percent,
        equivalents: calculate_equivalents(reduction),
    }
}
