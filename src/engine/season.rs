use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::engine::constants::{IN_SEASON_FACTOR, OFF_SEASON_FACTOR};
use crate::engine::tables::SeasonalProduce;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    /// Season for a zero-indexed month (0 = January).
    ///
    /// Spring 2–4, summer 5–7, autumn 8–10, winter otherwise.
    pub fn from_month0(month0: u32) -> Self {
        match month0 {
            2..=4 => Season::Spring,
            5..=7 => Season::Summer,
            8..=10 => Season::Autumn,
            _ => Season::Winter,
        }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self::from_month0(date.month0())
    }
}

/// Fuzzy in-season test: either name contains the other.
pub fn matches_produce(ingredient_name: &str, produce: &str) -> bool {
    ingredient_name.contains(produce) || produce.contains(ingredient_name)
}

pub fn is_in_season(ingredient_name: &str, season: Season, produce: &SeasonalProduce) -> bool {
    produce
        .for_season(season)
        .iter()
        .any(|item| matches_produce(ingredient_name, item))
}

/// 1.0 for in-season ingredients, 1.2 otherwise.
pub fn season_factor(ingredient_name: &str, season: Season, produce: &SeasonalProduce) -> f64 {
    if is_in_season(ingredient_name, season, produce) {
        IN_SEASON_FACTOR
    } else {
        OFF_SEASON_FACTOR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_boundaries() {
        assert_eq!(Season::from_month0(0), Season::Winter);
        assert_eq!(Season::from_month0(1), Season::Winter);
        assert_eq!(Season::from_month0(2), Season::Spring);
        assert_eq!(Season::from_month0(4), Season::Spring);
        assert_eq!(Season::from_month0(5), Season::Summer);
        assert_eq!(Season::from_month0(7), Season::Summer);
        assert_eq!(Season::from_month0(8), Season::Autumn);
        assert_eq!(Season::from_month0(10), Season::Autumn);
        assert_eq!(Season::from_month0(11), Season::Winter);
    }

    #[test]
    fn test_season_from_date() {
        let july = NaiveDate::from_ymd_opt(2025, 7, 15).unwrap();
        assert_eq!(Season::from_date(july), Season::Summer);
        let december = NaiveDate::from_ymd_opt(2025, 12, 1).unwrap();
        assert_eq!(Season::from_date(december), Season::Winter);
    }

    #[test]
    fn test_bidirectional_substring_match() {
        // Ingredient name contains the produce entry
        assert!(matches_produce("樱桃番茄", "番茄"));
        // Produce entry contains the ingredient name
        assert!(matches_produce("瓜", "黄瓜"));
        assert!(!matches_produce("土豆", "番茄"));
    }

    #[test]
    fn test_season_factor() {
        let produce = SeasonalProduce::default();
        assert_eq!(season_factor("番茄", Season::Summer, &produce), 1.0);
        assert_eq!(season_factor("番茄", Season::Winter, &produce), 1.2);
        assert_eq!(season_factor("白菜", Season::Winter, &produce), 1.0);
    }
}
