//! Error types for SearchForge

use thiserror::Error;

/// Main error type for SearchForge operations.
///
/// Search failure ("no path") and an exhausted step budget are ordinary
/// return values, never errors. This type only reports inputs rejected at
/// construction time.
#[derive(Debug, Error)]
pub enum SearchForgeError {
    /// Error in solver or search configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Problem definition rejected (unknown vertex, blocked start cell, ...)
    #[error("Invalid problem: {0}")]
    InvalidProblem(String),

    /// Board assignment rejected (row out of range, ...)
    #[error("Invalid assignment: {0}")]
    InvalidAssignment(String),
}

/// Result type alias for SearchForge operations
pub type Result<T> = std::result::Result<T, SearchForgeError>;
