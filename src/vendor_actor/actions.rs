//! Custom actions for the Vendor actor.

use crate::model::VendorMetrics;

/// Operations on a vendor beyond profile CRUD.
#[derive(Debug, Clone)]
pub enum VendorAction {
    /// Overwrites all four metrics in one write. Replies with the updated vendor.
    ///
    /// Issued by [`MetricsEngine`](crate::metrics::MetricsEngine) only.
    ApplyMetrics(VendorMetrics),
}
