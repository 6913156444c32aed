//! Convenience result type alias for ItemHub.

use crate::error::AppError;

/// A specialized `Result` type for ItemHub operations.
pub type AppResult<T> = Result<T, AppError>;
