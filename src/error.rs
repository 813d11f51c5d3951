use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedPanelsError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid price table: {0}")]
    PriceTable(String),

    #[error("Please enter dimensions to proceed with order.")]
    MissingDimensions,

    #[error("Dispatch error: {0}")]
    Dispatch(String),
}

pub type Result<T> = std::result::Result<T, LedPanelsError>;

impl From<LedPanelsError> for String {
    fn from(err: LedPanelsError) -> Self {
        err.to_string()
    }
}
