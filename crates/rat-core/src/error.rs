//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// The top-level error type for `rat-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("unknown boundary mode {0:?}: expected \"zenos\" or \"sorschers\"")]
    UnknownPolicy(String),
}

/// Shorthand result type for `rat-core`.
pub type CoreResult<T> = Result<T, CoreError>;
