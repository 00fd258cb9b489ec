//! Error types for the Purchase Order actor.

use crate::metrics::MetricsError;
use crate::model::VendorId;
use crate::vendor_actor::VendorError;
use thiserror::Error;

/// Errors that can occur during purchase order operations.
///
/// Wraps [`VendorError`] and [`MetricsError`] because order writes validate
/// the owning vendor and are followed by a metrics recompute.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PurchaseOrderError {
    /// The requested purchase order was not found.
    #[error("Purchase order not found: {0}")]
    NotFound(String),

    /// The order references a vendor that does not exist.
    #[error("Vendor not found for purchase order: {0}")]
    VendorNotFound(VendorId),

    /// A field failed validation. Nothing was written.
    #[error("Purchase order validation error: {0}")]
    Validation(String),

    /// The order was written but the follow-up recompute failed.
    #[error("Metrics recompute failed: {0}")]
    Metrics(#[from] MetricsError),

    /// Vendor lookup or find-or-create failed.
    #[error("Vendor error: {0}")]
    Vendor(#[from] VendorError),

    /// The purchase order actor could not be reached.
    #[error("Purchase order store unavailable: {0}")]
    Unavailable(String),
}
