use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// MealCarbon — multi-factor carbon footprint calculator for restaurant meals.
#[derive(Parser, Debug)]
#[command(name = "meal_carbon")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Optional JSON config overriding factor tables and carbon levels.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// CSV ingredient registry used to fill in missing emission factors.
    #[arg(short, long, global = true)]
    pub registry: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Multi-factor calculation of a meal request JSON file.
    Calculate {
        /// Path to the meal request JSON file.
        meal: PathBuf,

        /// Also print the detailed report.
        #[arg(long)]
        report: bool,

        /// Write the result as JSON.
        #[arg(long)]
        json: Option<PathBuf>,

        /// Write per-ingredient detail as CSV.
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Flat calculation: summed footprint times one cooking factor.
    Simple {
        /// Path to the meal request JSON file.
        meal: PathBuf,
    },

    /// Detailed report for a stored result JSON file.
    Report {
        /// Path to a result written by `calculate --json`.
        result: PathBuf,
    },

    /// Compare a plant-based meal footprint with a meat meal.
    Compare {
        /// Plant-based meal footprint, kg CO₂e.
        #[arg(long)]
        vegan: f64,

        /// Meat meal footprint, kg CO₂e.
        #[arg(long)]
        meat: f64,
    },

    /// Illustrative equivalents of a carbon mass.
    Equivalents {
        /// Carbon mass, kg CO₂e.
        kg: f64,
    },

    /// Menu label tier for a footprint.
    Level {
        /// Footprint, kg CO₂e.
        kg: f64,
    },

    /// Enter a meal interactively and calculate it.
    Interactive,
}
