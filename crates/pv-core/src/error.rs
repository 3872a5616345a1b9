//! Shared error type.
//!
//! Sub-crates define their own error enums and wrap `PvError` as one variant
//! via `#[from]`, so validation failures surface unchanged at every layer.

use thiserror::Error;

/// The top-level error type for `pv-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum PvError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid distribution parameter: {0}")]
    Distribution(String),
}

/// Shorthand result type for `pv-core`.
pub type PvResult<T> = Result<T, PvError>;
