//! The module contains the errors the facility ledger can return.
//!
//! Reconciliation passes never fail: unknown names, missing fields and bad
//! seal ranges all resolve to defaults. Only ledger operations that change
//! stored state return an [`EngineError`]:
//!
//! - [`KeyNotFound`] when a referenced record or catalog entry is missing.
//! - [`ExistingKey`] when a catalog entry is declared twice.
//! - [`MissingField`] when a mandatory reference is absent.
//! - [`InvalidName`] when a required name is blank.
//! - [`InvalidQuantity`] when a quantity is not a positive, finite number.
//!
//!  [`KeyNotFound`]: EngineError::KeyNotFound
//!  [`ExistingKey`]: EngineError::ExistingKey
//!  [`MissingField`]: EngineError::MissingField
//!  [`InvalidName`]: EngineError::InvalidName
//!  [`InvalidQuantity`]: EngineError::InvalidQuantity
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("\"{0}\" key not found!")]
    KeyNotFound(String),
    #[error("\"{0}\" already present!")]
    ExistingKey(String),
    #[error("Missing field: {0}")]
    MissingField(String),
    #[error("Invalid name: {0}")]
    InvalidName(String),
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),
}
