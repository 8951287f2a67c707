//! Convenience result type alias for FlashApp.

use crate::error::AppError;

/// A specialized `Result` type for FlashApp operations.
pub type AppResult<T> = Result<T, AppError>;
