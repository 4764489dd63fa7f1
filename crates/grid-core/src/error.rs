//! Workspace error type.
//!
//! Sub-crates may define their own error enums.  `grid-motion` keeps its
//! admission rejections separate because they are routine outcomes, not
//! failures.

use thiserror::Error;

/// The base error type for `grid-core` and application setup code.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for the `grid-*` crates.
pub type GridResult<T> = Result<T, GridError>;
