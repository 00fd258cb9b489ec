//! # Controllers
//!
//! The operation contracts exposed to an access layer (HTTP, CLI, RPC...).
//!
//! Every write that can change a vendor's completed-order set is followed,
//! within the same call, by a synchronous
//! [`MetricsEngine::recompute`](crate::metrics::MetricsEngine::recompute).
//! The write's reply is awaited before the recompute starts, so the recompute
//! always sees its own write.
//!
//! - [`OrderController`]: purchase order lifecycle and acknowledgment
//! - [`VendorController`]: vendor profile CRUD, cascade delete, performance history

mod orders;
mod vendors;

pub use orders::*;
pub use vendors::*;

use crate::model::{VendorCreate, VendorId};
use chrono::{DateTime, Utc};

/// How a new purchase order names its vendor.
#[derive(Debug, Clone)]
pub enum VendorRef {
    /// An existing vendor. Creation fails with `VendorNotFound` if it is absent.
    Existing(VendorId),
    /// Find-or-create: use the vendor at `id` if there is one, otherwise
    /// create it from `defaults` (at `id` when given).
    Upsert {
        id: Option<VendorId>,
        defaults: VendorCreate,
    },
}

/// Result of acknowledging a purchase order.
///
/// "Already acknowledged" and "not found" are reported outcomes, not errors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AcknowledgeOutcome {
    Acknowledged { at: DateTime<Utc> },
    /// The stored acknowledgment date was left unchanged.
    AlreadyAcknowledged { at: DateTime<Utc> },
    NotFound,
}

impl AcknowledgeOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            AcknowledgeOutcome::Acknowledged { .. } => "Purchase order acknowledged successfully.",
            AcknowledgeOutcome::AlreadyAcknowledged { .. } => "Purchase order already acknowledged.",
            AcknowledgeOutcome::NotFound => "Purchase order not found.",
        }
    }

    /// HTTP-style status for rendering the outcome.
    pub fn status_code(&self) -> u16 {
        match self {
            AcknowledgeOutcome::Acknowledged { .. } => 200,
            AcknowledgeOutcome::AlreadyAcknowledged { .. } => 400,
            AcknowledgeOutcome::NotFound => 404,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, AcknowledgeOutcome::Acknowledged { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acknowledge_outcome_rendering() {
        let at = Utc::now();
        let ok = AcknowledgeOutcome::Acknowledged { at };
        assert_eq!(ok.status_code(), 200);
        assert!(ok.is_success());

        let again = AcknowledgeOutcome::AlreadyAcknowledged { at };
        assert_eq!(again.status_code(), 400);
        assert_eq!(again.message(), "Purchase order already acknowledged.");
        assert!(!again.is_success());

        assert_eq!(AcknowledgeOutcome::NotFound.status_code(), 404);
        assert_eq!(AcknowledgeOutcome::NotFound.message(), "Purchase order not found.");
    }
}
