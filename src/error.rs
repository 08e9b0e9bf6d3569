use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SqlDialectError {
    #[error("Unknown bind name: {0}")]
    UnknownBindName(String),

    #[error("Unsupported operation: {0}")]
    Unsupported(String),

    #[error("Unimplemented feature: {0}")]
    Unimplemented(String),

    #[error("Parameter error: {0}")]
    ParameterError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
