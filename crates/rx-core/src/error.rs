//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `RxError` as one
//! variant via `From`, so `?` works across crate boundaries.

use thiserror::Error;

/// The top-level error type for `rx-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum RxError {
    /// A host-supplied configuration value is out of its valid domain.
    /// Values are rejected rather than clamped so caller defects surface.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `rx-*` crates.
pub type RxResult<T> = Result<T, RxError>;
