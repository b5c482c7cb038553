//! Core error type.
//!
//! GeoMath and projection are total over their inputs; the only fallible
//! operation in this crate is building a [`Projection`][crate::Projection]
//! from configuration.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `cm-core`.
pub type CoreResult<T> = Result<T, CoreError>;
