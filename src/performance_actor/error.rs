//! Error types for the Performance actor.

use crate::model::VendorId;
use thiserror::Error;

/// Errors that can occur during performance snapshot operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PerformanceError {
    #[error("Performance snapshot not found: {0}")]
    NotFound(String),

    /// A snapshot was requested for a vendor that does not exist.
    #[error("Vendor not found for snapshot: {0}")]
    VendorNotFound(VendorId),

    #[error("Performance store unavailable: {0}")]
    Unavailable(String),
}
