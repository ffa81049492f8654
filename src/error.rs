//! Semantic error types for the gegeben crate.
//!
//! This module defines the error hierarchy for gegeben, following the principle
//! of using semantic error enums (via `thiserror`) for conditions the caller
//! might inspect, while leaving opaque reporting (`eyre::Report`) to the host
//! test harness.

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file was not found at the expected path.
    #[error("configuration file not found: {path}")]
    FileNotFound {
        /// The path where the configuration file was expected.
        path: PathBuf,
    },

    /// The configuration file could not be parsed.
    #[error("failed to parse configuration file: {message}")]
    ParseError {
        /// A description of the parse error.
        message: String,
    },

    /// A configuration value failed validation.
    #[error("invalid configuration value for '{field}': {reason}")]
    InvalidValue {
        /// The name of the invalid field.
        field: String,
        /// The reason the value is invalid.
        reason: String,
    },

    /// The `OrthoConfig` library returned an error during configuration loading.
    ///
    /// This wraps errors from the layered configuration system, including
    /// file and environment layer merge failures.
    #[error("configuration loading failed: {0}")]
    OrthoConfig(Arc<ortho_config::OrthoError>),
}

/// Errors raised while declaring steps.
///
/// These indicate authoring mistakes in a fluent declaration and are not
/// recoverable.
#[derive(Debug, Error)]
pub enum StepError {
    /// The declared action could not be turned into a step.
    #[error("malformed step declaration for '{action}': {reason}")]
    MalformedDeclaration {
        /// The declared action name, possibly empty.
        action: String,
        /// Why the declaration was rejected.
        reason: String,
    },
}

/// Errors raised while building an example table.
#[derive(Debug, Error)]
pub enum ExampleError {
    /// The table was declared without any header.
    #[error("example table has no headers")]
    NoHeaders,

    /// Two headers sanitise to the same parameter name.
    #[error("duplicate example header '{header}'")]
    DuplicateHeader {
        /// The offending header as written.
        header: String,
    },

    /// A row does not have one value per header.
    #[error("example row {row} has {actual} values but the table has {expected} headers")]
    RowWidthMismatch {
        /// Zero-based index of the row.
        row: usize,
        /// Number of headers in the table.
        expected: usize,
        /// Number of values in the row.
        actual: usize,
    },
}

/// Top-level error type for the gegeben crate.
///
/// This enum aggregates all domain-specific errors into a single type that can
/// be used throughout the crate. Host harnesses typically convert it into an
/// `eyre::Report` for human-readable output.
#[derive(Debug, Error)]
pub enum GegebenError {
    /// An error occurred during configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A step declaration was rejected.
    #[error(transparent)]
    Step(#[from] StepError),

    /// An example table was rejected.
    #[error(transparent)]
    Example(#[from] ExampleError),
}

/// A specialised `Result` type for gegeben operations.
pub type Result<T> = std::result::Result<T, GegebenError>;
