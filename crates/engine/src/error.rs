//! The module contains the errors the engine can throw.
//!
//! Note that form validators never surface these directly: a failed
//! submission is reported through [`FormOutcome`], not through an
//! error, and dashboard aggregators never fail at all.
//!
//! [`FormOutcome`]: crate::FormOutcome
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Invalid status: {0}")]
    InvalidStatus(String),
    #[error("Invalid role: {0}")]
    InvalidRole(String),
    #[error("Currency mismatch: {0}")]
    CurrencyMismatch(String),
}
