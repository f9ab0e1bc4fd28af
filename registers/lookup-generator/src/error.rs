// Licensed under the Apache-2.0 license

use thiserror::Error;

/// Errors that can occur while building the lookup tables.
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// The register carries a type that has no firmware encoding.
    #[error("register {name}: unknown data type {type_name:?}")]
    UnknownType { name: String, type_name: String },
    /// The register name could not be reduced to a usable short name.
    #[error("register {name}: unrecognized register name shape ({reason})")]
    NameShape { name: String, reason: String },
    /// The register map file is not valid JSON or does not match the schema.
    #[error("invalid register map: {0}")]
    Json(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GeneratorError {
    pub(crate) fn name_shape(name: &str, reason: impl Into<String>) -> Self {
        GeneratorError::NameShape {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type for lookup generation.
pub type Result<T> = std::result::Result<T, GeneratorError>;
