use std::path::Path;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use meal_carbon_rs::cli::{Cli, Command};
use meal_carbon_rs::config::EngineConfig;
use meal_carbon_rs::engine::{calculate_equivalents, compare_to_meat, CarbonCalculator};
use meal_carbon_rs::error::{CarbonError, Result};
use meal_carbon_rs::interface::{
    collect_meal_request, display_comparison, display_equivalents, display_report,
    display_result, display_simple, prompt_yes_no,
};
use meal_carbon_rs::models::CalculationResult;
use meal_carbon_rs::registry::{
    load_meal_request, load_registry, load_result, save_json, write_detail_csv,
    IngredientRegistry, MealRequest,
};

fn main() {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = EngineConfig::load_or_default(cli.config.as_deref())?;
    let registry = open_registry(cli.registry.as_deref())?;

    match cli.command {
        Command::Calculate {
            meal,
            report,
            json,
            csv,
        } => cmd_calculate(
            &config,
            &registry,
            &meal,
            report,
            json.as_deref(),
            csv.as_deref(),
        ),
        Command::Simple { meal } => cmd_simple(&config, &registry, &meal),
        Command::Report { result } => cmd_report(&config, &result),
        Command::Compare { vegan, meat } => {
            display_comparison(&compare_to_meat(vegan, meat));
            Ok(())
        }
        Command::Equivalents { kg } => {
            println!("{:.2} kg CO₂e is equivalent to:", kg);
            display_equivalents(&calculate_equivalents(kg));
            Ok(())
        }
        Command::Level { kg } => {
            let level = config.levels.determine(kg)?;
            println!("{:.2} kg CO₂e: {} ({})", kg, level.name(), config.levels.color(level));
            Ok(())
        }
        Command::Interactive => cmd_interactive(&config, &registry),
    }
}

fn open_registry(path: Option<&Path>) -> Result<IngredientRegistry> {
    match path {
        Some(p) => Ok(IngredientRegistry::new(load_registry(p)?)),
        None => Ok(IngredientRegistry::default()),
    }
}

fn show_result(config: &EngineConfig, result: &CalculationResult) {
    let level = config
        .levels
        .determine(result.total_carbon)
        .ok()
        .map(|l| (l, config.levels.color(l)));
    display_result(result, level);
}

/// Multi-factor calculation of a meal request file.
fn cmd_calculate(
    config: &EngineConfig,
    registry: &IngredientRegistry,
    meal_path: &Path,
    report: bool,
    json: Option<&Path>,
    csv: Option<&Path>,
) -> Result<()> {
    let request = load_meal_request(meal_path)?;
    let meal = registry.assemble(&request)?;

    let calculator = CarbonCalculator::new(&config.tables);
    let result = calculator.calculate_advanced(&meal);
    info!(total = result.total_carbon, "calculated meal");

    show_result(config, &result);

    if report {
        display_report(&calculator.generate_report(&result));
    }

    if let Some(path) = json {
        save_json(path, &result)?;
        println!("Result written to {}", path.display());
    }

    if let Some(path) = csv {
        write_detail_csv(path, &result)?;
        println!("Detail written to {}", path.display());
    }

    Ok(())
}

/// Flat calculation of a meal request file.
fn cmd_simple(config: &EngineConfig, registry: &IngredientRegistry, meal_path: &Path) -> Result<()> {
    let request = load_meal_request(meal_path)?;
    let meal = registry.assemble(&request)?;

    let calculator = CarbonCalculator::new(&config.tables);
    display_simple(&calculator.calculate_simple(&meal.ingredients, &meal.cooking_method));
    Ok(())
}

/// Report for a stored result.
fn cmd_report(config: &EngineConfig, result_path: &Path) -> Result<()> {
    let result = load_result(result_path)?;
    let calculator = CarbonCalculator::new(&config.tables);
    display_report(&calculator.generate_report(&result));
    Ok(())
}

/// Enter a meal interactively and calculate it.
fn cmd_interactive(config: &EngineConfig, registry: &IngredientRegistry) -> Result<()> {
    if registry.is_empty() {
        return Err(CarbonError::InvalidInput(
            "interactive mode needs an ingredient registry (--registry)".to_string(),
        ));
    }

    println!("Loaded {} registry ingredients", registry.len());
    println!();

    let request: MealRequest = collect_meal_request(registry, &config.tables)?;
    if request.ingredients.is_empty() {
        println!("No ingredients entered.");
        return Ok(());
    }

    let meal = registry.assemble(&request)?;
    let calculator = CarbonCalculator::new(&config.tables);
    let result = calculator.calculate_advanced(&meal);

    show_result(config, &result);

    if prompt_yes_no("Show detailed report?", false)? {
        display_report(&calculator.generate_report(&result));
    }

    Ok(())
}
