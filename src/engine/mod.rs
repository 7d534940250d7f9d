pub mod calculations;
pub mod constants;
pub mod equivalents;
pub mod level;
pub mod report;
pub mod season;
pub mod tables;
pub mod tips;

pub use calculations::{breakdown_percent, percent_of, round_to, CarbonCalculator};
pub use constants::*;
pub use equivalents::{calculate_equivalents, compare_to_meat};
pub use level::{CarbonLevel, CarbonLevelConfig, LevelColors, LevelThresholds};
pub use season::{is_in_season, season_factor, Season};
pub use tables::{FactorTables, SeasonalProduce, TransportFactors, DEFAULT_TABLES};
