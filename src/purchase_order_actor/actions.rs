//! Custom actions for the Purchase Order actor.

use chrono::{DateTime, Utc};

/// Operations on a purchase order beyond field updates.
#[derive(Debug, Clone)]
pub enum PurchaseOrderAction {
    /// Records the vendor's acknowledgment at `at`, unless one is already recorded.
    Acknowledge { at: DateTime<Utc> },
}

/// Results from [`PurchaseOrderAction`]s.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PurchaseOrderActionResult {
    /// The acknowledgment date was set to this instant.
    Acknowledged(DateTime<Utc>),
    /// Nothing changed; the order was acknowledged at this earlier instant.
    AlreadyAcknowledged(DateTime<Utc>),
}
