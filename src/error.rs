//! Error types for the label engine
//!
//! This module provides error types for all subsystems:
//! - Font errors (loading, parsing)
//! - Render errors (canvas creation, encoding)
//! - I/O and JSON errors from the report and CLI paths
//!
//! All errors use the `thiserror` crate for minimal boilerplate and
//! proper error trait implementations.
//!
//! The renderer itself is deliberately hard to kill: when the primary
//! layout pass fails, generation degrades to a fallback layout instead of
//! surfacing an error, so callers mostly see `Err` only for I/O and
//! encoding problems.

use thiserror::Error;

/// Result type alias for label engine operations
///
/// This is a convenience type that uses our Error type as the error variant.
///
/// # Examples
///
/// ```
/// use labelrender::Result;
///
/// fn write_report(json: &str) -> Result<()> {
///     Ok(())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the label engine
///
/// This enum covers all possible errors that can occur while generating a
/// label. Each variant wraps a more specific error type for that subsystem.
#[derive(Error, Debug)]
pub enum Error {
  /// Font loading or parsing error
  #[error("Font error: {0}")]
  Font(#[from] FontError),

  /// Rasterization or encoding error
  #[error("Render error: {0}")]
  Render(#[from] RenderError),

  /// I/O operation error
  #[error("IO error: {0}")]
  Io(#[from] std::io::Error),

  /// Malformed JSON input or report serialization error
  #[error("JSON error: {0}")]
  Json(#[from] serde_json::Error),

  /// Generic error for cases not covered above
  #[error("{0}")]
  Other(String),
}

/// Font loading and parsing errors
#[derive(Error, Debug)]
pub enum FontError {
  /// Font data could not be parsed as a face
  #[error("Failed to load font '{family}': {reason}")]
  LoadFailed { family: String, reason: String },
}

/// Rendering and encoding errors
#[derive(Error, Debug)]
pub enum RenderError {
  /// Canvas dimensions were unusable (zero, negative, or too large)
  #[error("Failed to create canvas of size {width}x{height}")]
  CanvasCreationFailed { width: i32, height: i32 },

  /// Image encoding failed
  #[error("Failed to encode image as {format}: {reason}")]
  EncodeFailed { format: String, reason: String },
}

// =============================================================================
// Tests
// =============================================================================
