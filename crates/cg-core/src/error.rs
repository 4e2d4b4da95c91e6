use thiserror::Error;

/// The main error type for cg-* crates
#[derive(Error, Debug)]
pub enum Error {
  /// Environment variable error
  #[error("Environment variable error: {0}")]
  EnvVar(#[from] std::env::VarError),

  /// Configuration error
  #[error("Configuration error: {0}")]
  Config(String),

  /// A required argument was empty or had the wrong shape
  #[error("Invalid parameter: {0}")]
  InvalidParameter(String),

  /// A required argument or parameter record was not supplied
  #[error("Missing parameter: {0}")]
  MissingParameter(String),

  /// The gateway answered with an HTML page instead of JSON
  #[error("Invalid request: {0}")]
  InvalidRequest(String),

  /// Serialization/Deserialization error
  #[error("Serialization error: {0}")]
  Serde(#[from] serde_json::Error),

  /// HTTP transport error
  #[error("HTTP error: {0}")]
  Http(String),

  /// Response body could not be parsed
  #[error("Parse error: {0}")]
  Parse(String),
}

impl Error {
  /// True for the errors raised before any network activity
  pub fn is_validation(&self) -> bool {
    matches!(self, Error::InvalidParameter(_) | Error::MissingParameter(_))
  }
}

/// Result type alias for cg-* crates
pub type Result<T> = std::result::Result<T, Error>;
