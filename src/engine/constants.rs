/// Cooking multiplier when the multi-factor path sees an unknown method.
pub const DEFAULT_COOKING_FACTOR: f64 = 1.15;

/// Cooking multiplier when the simple path sees an unknown method.
pub const SIMPLE_COOKING_FACTOR: f64 = 1.0;

/// Season multipliers.
pub const IN_SEASON_FACTOR: f64 = 1.0;
pub const OFF_SEASON_FACTOR: f64 = 1.2;

/// Preservation key assumed when an ingredient carries none.
pub const DEFAULT_PRESERVATION: &str = "fresh";

/// Preservation multiplier for tags missing from the table.
pub const DEFAULT_PRESERVATION_FACTOR: f64 = 1.0;

/// Baseline (kg CO₂e) for meal types missing from the table.
pub const DEFAULT_BASELINE: f64 = 1.0;

// ─────────────────────────────────────────────────────────────────────────────
// Suggestion thresholds
// ─────────────────────────────────────────────────────────────────────────────

/// Reference multiplier for low-energy cooking (boiling).
pub const LOW_ENERGY_COOKING_FACTOR: f64 = 1.08;

/// Methods at or above this multiplier count as high-energy.
pub const HIGH_ENERGY_COOKING_FACTOR: f64 = 1.25;

/// Cooking tip fires when cooking energy exceeds this share of the base.
pub const COOKING_TIP_SHARE: f64 = 0.3;

/// Transport tip fires when transportation exceeds this share of the base.
pub const TRANSPORT_TIP_SHARE: f64 = 0.15;

/// Share of transport emissions assumed recoverable by sourcing locally.
pub const LOCAL_SOURCING_RECOVERABLE: f64 = 0.6;

// ─────────────────────────────────────────────────────────────────────────────
// Equivalence conversions
// ─────────────────────────────────────────────────────────────────────────────

/// kg CO₂ absorbed by one tree in a year.
pub const TREE_ABSORPTION_KG: f64 = 21.0;

/// Car kilometres per kg CO₂.
pub const DRIVING_KM_PER_KG: f64 = 4.2;

/// Grid emission intensity, kg CO₂ per kWh.
pub const GRID_KG_PER_KWH: f64 = 0.785;

/// kg CO₂ per kg of plastic produced.
pub const PLASTIC_KG_PER_KG: f64 = 6.0;

/// kg CO₂ per plastic water bottle.
pub const BOTTLE_KG: f64 = 0.082;

// ─────────────────────────────────────────────────────────────────────────────
// Display precision
// ─────────────────────────────────────────────────────────────────────────────

pub const TOTAL_DECIMALS: u32 = 2;
pub const PERCENT_DECIMALS: u32 = 1;
pub const DETAIL_DECIMALS: u32 = 3;

// ─────────────────────────────────────────────────────────────────────────────
// Reference tables
// ─────────────────────────────────────────────────────────────────────────────

pub const COOKING_FACTORS: &[(&str, f64)] = &[
    ("生食", 1.0),
    ("凉拌", 1.0),
    ("蒸", 1.05),
    ("煮", 1.08),
    ("炖", 1.12),
    ("炒", 1.15),
    ("煎", 1.18),
    ("烤", 1.25),
    ("烘焙", 1.28),
    ("炸", 1.35),
    ("焖", 1.20),
    ("直接食用", 1.0),
    ("组装", 1.0),
    ("卷制", 1.0),
    ("腌制", 1.02),
    ("搅拌", 1.0),
];

pub const TRANSPORT_LOCAL: f64 = 1.0;
pub const TRANSPORT_DOMESTIC: f64 = 1.15;
pub const TRANSPORT_IMPORT: f64 = 1.35;

pub const PRESERVATION_FACTORS: &[(&str, f64)] = &[
    ("fresh", 1.0),
    ("refrigerated", 1.05),
    ("frozen", 1.10),
    ("dried", 1.08),
    ("canned", 1.15),
];

pub const SPRING_PRODUCE: &[&str] = &["春笋", "蚕豆", "韭菜", "芦笋", "豌豆", "香椿", "荠菜"];
pub const SUMMER_PRODUCE: &[&str] = &["黄瓜", "番茄", "茄子", "苦瓜", "丝瓜", "冬瓜", "西瓜", "蓝莓"];
pub const AUTUMN_PRODUCE: &[&str] = &["莲藕", "南瓜", "芋头", "山药", "栗子", "柿子", "梨"];
pub const WINTER_PRODUCE: &[&str] = &["白菜", "萝卜", "芹菜", "菠菜", "大葱", "红枣", "橙子"];

/// Average footprint of common reference meals, kg CO₂e.
pub const MEAL_BASELINES: &[(&str, f64)] = &[
    ("素食快餐", 0.75),
    ("素食简餐", 1.0),
    ("素食正餐", 1.5),
    ("肉食快餐", 3.5),
    ("肉食简餐", 5.0),
    ("肉食正餐", 7.5),
    ("牛排大餐", 20.0),
    ("海鲜大餐", 8.0),
];
