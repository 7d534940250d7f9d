use serde::{Deserialize, Serialize};

use crate::error::{CarbonError, Result};

/// Menu label tier for a footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CarbonLevel {
    UltraLow,
    Low,
    Medium,
    High,
}

impl CarbonLevel {
    pub fn name(&self) -> &'static str {
        match self {
            CarbonLevel::UltraLow => "ultra low",
            CarbonLevel::Low => "low",
            CarbonLevel::Medium => "medium",
            CarbonLevel::High => "high",
        }
    }
}

/// Upper bounds per tier, kg CO₂e.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelThresholds {
    pub ultra_low: f64,
    pub low: f64,
    pub medium: f64,
    pub high: f64,
}

impl Default for LevelThresholds {
    fn default() -> Self {
        Self {
            ultra_low: 0.5,
            low: 1.0,
            medium: 2.0,
            high: 999_999.0,
        }
    }
}

/// `#RRGGBB` label colour per tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelColors {
    pub ultra_low: String,
    pub low: String,
    pub medium: String,
    pub high: String,
}

impl Default for LevelColors {
    fn default() -> Self {
        Self {
            ultra_low: "#52c41a".to_string(),
            low: "#a0d911".to_string(),
            medium: "#faad14".to_string(),
            high: "#ff4d4f".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarbonLevelConfig {
    pub thresholds: LevelThresholds,
    pub colors: LevelColors,
}

fn is_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}

impl CarbonLevelConfig {
    /// Thresholds must be strictly increasing; colours must be `#RRGGBB`.
    pub fn validate(&self) -> Result<()> {
        let t = &self.thresholds;
        if !(t.ultra_low < t.low && t.low < t.medium && t.medium < t.high) {
            return Err(CarbonError::InvalidConfig(format!(
                "level thresholds must satisfy ultra_low < low < medium < high, got {} / {} / {} / {}",
                t.ultra_low, t.low, t.medium, t.high
            )));
        }

        let c = &self.colors;
        for (level, color) in [
            ("ultra_low", &c.ultra_low),
            ("low", &c.low),
            ("medium", &c.medium),
            ("high", &c.high),
        ] {
            if !is_hex_color(color) {
                return Err(CarbonError::InvalidConfig(format!(
                    "colour for {} must be #RRGGBB, got '{}'",
                    level, color
                )));
            }
        }

        Ok(())
    }

    /// Tier for a footprint. The medium bound is inclusive.
    pub fn determine(&self, carbon_footprint: f64) -> Result<CarbonLevel> {
        if !carbon_footprint.is_finite() || carbon_footprint < 0.0 {
            return Err(CarbonError::InvalidInput(format!(
                "carbon footprint must be a non-negative number, got {}",
                carbon_footprint
            )));
        }

        let t = &self.thresholds;
        Ok(if carbon_footprint < t.ultra_low {
            CarbonLevel::UltraLow
        } else if carbon_footprint < t.low {
            CarbonLevel::Low
        } else if carbon_footprint <= t.medium {
            CarbonLevel::Medium
        } else {
            CarbonLevel::High
        })
    }

    pub fn color(&self, level: CarbonLevel) -> &str {
        match level {
            CarbonLevel::UltraLow => &self.colors.ultra_low,
            CarbonLevel::Low => &self.colors.low,
            CarbonLevel::Medium => &self.colors.medium,
            CarbonLevel::High => &self.colors.high,
        }
    }
}
