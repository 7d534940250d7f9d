use thiserror::Error;

#[derive(Debug, Error)]
pub enum CarbonError {
    #[error("Ingredient not found: {0}")]
    IngredientNotFound(String),

    #[error("Missing emission factor for: {0}")]
    MissingFactor(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, CarbonError>;
