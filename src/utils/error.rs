use thiserror::Error;

#[derive(Error, Debug)]
pub enum CaddieError {
    #[error("{message}")]
    Validation { message: String },

    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Calculation error: {message}")]
    Calculation { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Shot file parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CaddieError>;
