//! # Error Handling
//!
//! Centralized error handling for `central-publish`, built on `thiserror`.
//!
//! Two failure modes matter to users and get dedicated variants:
//!
//! - **`Config`**: the publish manifest is unusable before any module is
//!   processed (missing root group, unset root version, unparseable YAML).
//!   These abort the whole run at load time and carry an optional hint.
//! - **`InvalidPom`**: a generated (or externally supplied) POM document is
//!   missing a field Maven Central requires, or has it blank. These fail only
//!   the publication they belong to; other publications in the same run are
//!   unaffected.
//!
//! Everything else is plumbing: I/O, YAML parsing, XML parsing, semver
//! parsing and the external signing command, wrapped with enough context to
//! be actionable.

use thiserror::Error;

use crate::validate::Violation;

/// Main error type for central-publish operations
#[derive(Error, Debug)]
pub enum Error {
    /// The publish manifest could not be parsed or fails a load-time
    /// invariant (root group/version must be set before any module runs).
    #[error("Configuration error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    Config {
        message: String,
        /// Optional hint for how to fix the manifest
        hint: Option<String>,
    },

    /// A POM document does not satisfy the Maven Central requirements.
    ///
    /// Carries the structured [`Violation`] with the dotted field path and
    /// whether the field was missing, blank, or the unset version sentinel.
    #[error("invalid pom: {0}")]
    InvalidPom(#[from] Violation),

    /// The external signing command failed for a generated file.
    #[error("Signing command failed: {command} - {stderr}")]
    Signing { command: String, stderr: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A YAML parsing error, wrapped from `serde_yaml::Error`.
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The POM document is not well-formed XML.
    #[error("XML parsing error: {message}")]
    Xml { message: String },

    /// A semantic versioning parsing error, wrapped from `semver::Error`.
    #[error("Semver parsing error: {0}")]
    Semver(#[from] semver::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
