//! Error types for the compiler.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Every failure is fatal: the compiler never retries, never substitutes
/// defaults beyond the documented schema defaults, and never produces a
/// partial artifact.
#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read schema {path}: {source}")]
    SchemaRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("schema is not well-formed JSON: {0}")]
    SchemaParse(#[source] serde_json::Error),

    #[error("schema validation failed: {0}")]
    SchemaValidation(String),

    /// Reserved: the translator and packer are total today, but the
    /// taxonomy keeps a slot for future encoding stages that are not.
    #[error("encoding failed: {0}")]
    Encoding(String),

    #[error("failed to write artifact {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
