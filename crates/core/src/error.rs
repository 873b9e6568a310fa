//! Engine error model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::id::ProductId;

/// Result type used across the engine crates.
pub type EngineResult<T> = Result<T, EngineError>;

/// Engine-level error.
///
/// Keep this focused on deterministic input/configuration failures. Short or
/// empty sales history is *not* an error: it routes to the fallback
/// forecaster instead. Serializable because batch responses carry
/// per-product failures.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineError {
    /// A sale record failed validation (e.g. negative quantity).
    #[error("invalid sale record for product {product_id} on {date}: {reason}")]
    InvalidRecord {
        product_id: ProductId,
        date: NaiveDate,
        reason: String,
    },

    /// The engine configuration was rejected up front.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl EngineError {
    pub fn invalid_record(
        product_id: ProductId,
        date: NaiveDate,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidRecord {
            product_id,
            date,
            reason: reason.into(),
        }
    }

    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
