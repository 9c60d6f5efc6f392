// In: src/error.rs

//! This module defines the single, unified error type for the entire pistream
//! library. It uses the `thiserror` crate to provide ergonomic, context-aware
//! error handling.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PiError {
    // =========================================================================
    // === High-Level, Semantic Errors (Specific to our library's logic)
    // =========================================================================
    #[error("Series produced a zero denominator; no valid terms were combined")]
    ZeroDenominator,

    #[error("Invalid digit count argument: {0}")]
    InvalidDigitCount(String),

    #[error("Digit writer failed: {0}")]
    Writer(String),

    #[error("Internal logic error (this is a bug): {0}")]
    InternalError(String),

    // =========================================================================
    // === External Error Wrappers (Using #[from] for automatic conversion)
    // =========================================================================
    /// An error originating from the underlying I/O subsystem (e.g., the output
    /// file cannot be created).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An error from the Serde JSON library, typically during run-summary
    /// serialization.
    #[error("Serde JSON error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// An error building the worker thread pool for the split phase.
    #[error("Worker pool construction failed: {0}")]
    ThreadPool(String), // Manual `From` impl below; the rayon error is opaque.
}

// =============================================================================
// === Manual `From` Implementations ===
// =============================================================================

impl From<rayon::ThreadPoolBuildError> for PiError {
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        PiError::ThreadPool(err.to_string())
    }
}
