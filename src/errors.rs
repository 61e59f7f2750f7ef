//! Centralized error handling for the colour table generator.
//!
//! This module provides a unified error type so every fallible path in the
//! generator reports through a single enum.

use thiserror::Error;

/// Unified error type for the generator.
///
/// The generator is a one-shot build step; the only failure it can hit is
/// an I/O error while creating or writing an output file. There is no
/// retry or recovery, the step is simply re-run after the environment is
/// fixed.
#[derive(Error, Debug)]
pub enum ColourgenError {
    /// General I/O errors (missing output directory, permission denied,
    /// disk full)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for Result using the unified error type
pub type Result<T> = std::result::Result<T, ColourgenError>;
