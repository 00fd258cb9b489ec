//! Error types for the Vendor actor.

use crate::metrics::MetricsError;
use thiserror::Error;

/// Errors that can occur during vendor operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum VendorError {
    /// The requested vendor was not found.
    #[error("Vendor not found: {0}")]
    NotFound(String),

    /// The vendor data provided is invalid. Nothing was written.
    #[error("Vendor validation error: {0}")]
    Validation(String),

    /// The vendor actor could not be reached.
    #[error("Vendor store unavailable: {0}")]
    Unavailable(String),
}

/// Recompute failures surfaced by vendor operations.
impl From<MetricsError> for VendorError {
    fn from(e: MetricsError) -> Self {
        match e {
            MetricsError::VendorNotFound(id) => VendorError::NotFound(id.to_string()),
            MetricsError::Vendor(inner) => inner,
            other => VendorError::Unavailable(other.to_string()),
        }
    }
}
