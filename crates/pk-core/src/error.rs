//! Core error type.
//!
//! Sub-crates define their own error enums; their loaders fold a
//! `CoreError` into a line-numbered parse error.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown transport mode {0:?}")]
    UnknownMode(String),
}
