use thiserror::Error;

/// The main error type for tm-* crates
#[derive(Error, Debug)]
pub enum Error {
  /// Environment variable error
  #[error("Environment variable error: {0}")]
  EnvVar(#[from] std::env::VarError),

  /// Configuration error
  #[error("Configuration error: {0}")]
  Config(String),

  /// Serialization/Deserialization error
  #[error("Serialization error")]
  Serde(#[from] serde_json::Error),

  /// Missing required field in an input row
  #[error("Missing required field: {0}")]
  MissingField(String),

  /// Parse error for data processing
  #[error("Parse error: {0}")]
  Parse(String),

  /// General unexpected error
  #[error("Unexpected error: {0}")]
  Unexpected(String),
}

/// Result type alias for tm-* crates
pub type Result<T> = std::result::Result<T, Error>;
