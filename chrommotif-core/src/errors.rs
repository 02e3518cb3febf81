use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum StateBinError {
    #[error("Expected at least {expected} tab-separated columns, found {found}")]
    MissingColumns { expected: usize, found: usize },

    #[error("Invalid {column} coordinate: {value:?}")]
    InvalidCoordinate { column: &'static str, value: String },

    #[error("Invalid confidence score: {0:?}")]
    InvalidConfidence(String),
}
