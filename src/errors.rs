//! Shared error types for signature inspection.

use thiserror::Error;

/// Errors raised while obtaining a signature from Python source.
///
/// The classifier and the `ArgSet` query surface are total and never fail;
/// only the parsing boundary produces errors.
#[derive(Debug, Error)]
pub enum SignatureError {
    /// The source text is not a valid Python module.
    #[error("Python parse error: {message}")]
    Parse { message: String },

    /// No `def` or `async def` with the requested name exists in the module.
    #[error("function `{0}` not found in module")]
    FunctionNotFound(String),
}

/// Convenience alias for signature-inspection results.
pub type Result<T> = std::result::Result<T, SignatureError>;
