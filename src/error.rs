use thiserror::Error;

#[derive(Error, Debug)]
pub enum IntakeBoardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Chart has no entries")]
    EmptyChart,

    #[error("Negative value {value} for chart entry {label:?}")]
    NegativeValue { label: String, value: f64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, IntakeBoardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
