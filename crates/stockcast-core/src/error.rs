use thiserror::Error;

/// Validation errors exposed by `stockcast-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("ticker symbol is empty")]
    EmptySymbol,
    #[error("ticker symbol has {len} characters, at most {max} allowed")]
    SymbolTooLong { len: usize, max: usize },
    #[error("ticker symbol must start with a letter, found '{ch}'")]
    SymbolInvalidStart { ch: char },
    #[error("ticker symbol has unsupported character '{ch}' at position {index}")]
    SymbolInvalidChar { ch: char, index: usize },

    #[error("invalid timeframe '{value}', expected one of 1M, 3M, 6M, 1Y, 2Y")]
    InvalidTimeframe { value: String },
    #[error("invalid model '{value}', expected one of LSTM, Linear Regression, Random Forest")]
    InvalidModel { value: String },

    #[error("date must be ISO-8601 (YYYY-MM-DD): '{value}'")]
    InvalidDate { value: String },
    #[error("date arithmetic left the supported calendar range")]
    DateOutOfRange,

    #[error("field '{field}' must be finite")]
    NonFiniteValue { field: &'static str },
    #[error("field '{field}' must be at least 0.01")]
    PriceBelowFloor { field: &'static str },

    #[error("bar high is below bar low")]
    InvalidBarRange,
    #[error("bar open and close must lie between low and high")]
    InvalidBarBounds,
    #[error("confidence must be within [0.30, 0.95]")]
    ConfidenceOutOfRange,

    #[error("request_id is shorter than 8 characters")]
    InvalidRequestId,
    #[error("schema_version '{value}' is not of the form vMAJOR.MINOR.PATCH")]
    InvalidSchemaVersion { value: String },
}
