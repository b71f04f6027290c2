use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Why a generated recipe was turned away at the validation boundary.
#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("Recipe is not a JSON object")]
    NotAnObject,

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Missing mandatory ingredients")]
    MissingMandatory,

    #[error("Instructions are not a list")]
    InstructionsNotList,

    #[error("Invalid recipe type: {0}")]
    InvalidType(String),

    #[error("Malformed recipe: {0}")]
    Malformed(String),
}
