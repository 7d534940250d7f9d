use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::{info, warn};

use crate::error::Result;
use crate::models::CalculationResult;
use crate::registry::manager::{IngredientRecord, MealRequest};

/// Load registry records from a CSV file with `Name,Factor,Category` headers.
///
/// Deduplicates by lowercase name (last occurrence wins) and skips rows whose
/// factor is negative or not a number.
pub fn load_registry<P: AsRef<Path>>(path: P) -> Result<Vec<IngredientRecord>> {
    let mut rdr = csv::Reader::from_path(path.as_ref())?;

    let mut seen: HashMap<String, IngredientRecord> = HashMap::new();
    for row in rdr.deserialize::<IngredientRecord>() {
        let record = row?;
        if !record.is_valid() {
            warn!(name = %record.name, factor = record.factor, "skipping invalid registry row");
            continue;
        }
        seen.insert(record.key(), record);
    }

    info!(count = seen.len(), path = %path.as_ref().display(), "loaded ingredient registry");
    Ok(seen.into_values().collect())
}

/// Load a meal request from a JSON file.
pub fn load_meal_request<P: AsRef<Path>>(path: P) -> Result<MealRequest> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Load a previously stored calculation result.
pub fn load_result<P: AsRef<Path>>(path: P) -> Result<CalculationResult> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Write any serializable value as pretty JSON.
pub fn save_json<P: AsRef<Path>, T: Serialize>(path: P, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}

/// Write per-ingredient detail rows of a result to CSV.
pub fn write_detail_csv<P: AsRef<Path>>(path: P, result: &CalculationResult) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "name",
        "amount_grams",
        "base_carbon",
        "cooking_factor",
        "season_factor",
        "transport_factor",
        "preservation_factor",
        "total_carbon",
    ])?;

    for ing in &result.ingredients {
        wtr.write_record([
            ing.name.clone(),
            format!("{}", ing.amount_grams),
            format!("{:.3}", ing.base_carbon),
            format!("{:.2}", ing.factors.cooking),
            format!("{:.2}", ing.factors.season),
            format!("{:.2}", ing.factors.transport),
            format!("{:.2}", ing.factors.preservation),
            format!("{:.3}", ing.total_carbon),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::CarbonCalculator;
    use crate::models::{IngredientUsage, MealDescription};
    use chrono::NaiveDate;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_registry() {
        let csv_text = "Name,Factor,Category\nTofu,3.2,beans\n番茄,0.7,\n";

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(csv_text.as_bytes()).unwrap();

        let records = load_registry(file.path()).unwrap();
        assert_eq!(records.len(), 2);
        let tofu = records.iter().find(|r| r.name == "Tofu").unwrap();
        assert_eq!(tofu.factor, 3.2);
        assert!(records.iter().any(|r| r.name == "番茄" && r.factor == 0.7));
    }

    #[test]
    fn test_registry_deduplication_and_invalid_rows() {
        let csv_text = "Name,Factor,Category\nTofu,3.0,beans\ntofu,3.5,beans\nSeitan,-1,grains\n";

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(csv_text.as_bytes()).unwrap();

        let records = load_registry(file.path()).unwrap();
        assert_eq!(records.len(), 1);
        // Last occurrence wins
        assert_eq!(records[0].factor, 3.5);
    }

    #[test]
    fn test_meal_request_and_result_files() {
        let json = r#"{
            "ingredients": [
                {"name": "番茄", "amountGrams": 200, "perKgFootprint": 0.7, "origin": "local"}
            ],
            "cookingMethod": "凉拌",
            "mealDate": "2025-07-20"
        }"#;
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let request = load_meal_request(file.path()).unwrap();
        assert_eq!(request.ingredients[0].per_kg_footprint, Some(0.7));
        assert!(request.meal_type.is_none());

        let meal = MealDescription::new(
            vec![IngredientUsage::new("番茄", 200.0, 0.7).with_origin("local")],
            "凉拌",
        )
        .with_date(NaiveDate::from_ymd_opt(2025, 7, 20).unwrap());
        let result = CarbonCalculator::default().calculate_advanced(&meal);

        let out = NamedTempFile::new().unwrap();
        save_json(out.path(), &result).unwrap();

        let loaded = load_result(out.path()).unwrap();
        assert!((loaded.total_carbon - result.total_carbon).abs() < 1e-9);
        assert_eq!(loaded.cooking_method, "凉拌");
        assert_eq!(loaded.tips.len(), result.tips.len());
        assert_eq!(loaded.ingredients[0].name, "番茄");
    }

    #[test]
    fn test_write_detail_csv() {
        let meal = MealDescription::new(vec![IngredientUsage::new("米饭", 150.0, 1.2)], "煮")
            .with_date(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
        let result = CarbonCalculator::default().calculate_advanced(&meal);

        let out = NamedTempFile::new().unwrap();
        write_detail_csv(out.path(), &result).unwrap();

        let written = fs::read_to_string(out.path()).unwrap();
        let mut lines = written.lines();
        assert!(lines.next().unwrap().starts_with("name,amount_grams"));
        assert!(lines.next().unwrap().starts_with("米饭,150,0.180,1.08,1.20,1.15,1.00"));
    }
}
