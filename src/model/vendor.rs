use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Vendors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VendorId(pub u32);

impl From<u32> for VendorId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for VendorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "vendor_{}", self.0)
    }
}

/// The four derived performance figures of a vendor.
///
/// Written only by the metrics engine; see [`crate::metrics`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct VendorMetrics {
    /// Share of completed orders delivered no later than they were acknowledged.
    pub on_time_delivery_rate: f64,
    /// Mean of the known quality ratings of completed orders.
    pub quality_rating_avg: f64,
    /// Mean seconds between issue and acknowledgment.
    pub average_response_time: f64,
    /// Share of completed orders not rated below 3.
    pub fulfilment_rate: f64,
}

impl VendorMetrics {
    pub fn is_finite(&self) -> bool {
        [
            self.on_time_delivery_rate,
            self.quality_rating_avg,
            self.average_response_time,
            self.fulfilment_rate,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

/// A supplier that purchase orders are issued to.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
///
/// See [`impl ActorEntity for Vendor`](#impl-ActorEntity-for-Vendor) for details on:
/// - Creation parameters ([`VendorCreate`])
/// - Update parameters ([`VendorUpdate`])
/// - The metrics write path ([`VendorAction`](crate::vendor_actor::VendorAction))
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Vendor {
    pub id: VendorId,
    pub name: String,
    pub contact_details: String,
    pub address: String,
    /// Business key. Expected to be unique but not enforced.
    pub vendor_code: String,
    pub metrics: VendorMetrics,
}

/// Payload for onboarding a vendor.
#[derive(Debug, Clone, Deserialize)]
pub struct VendorCreate {
    pub name: String,
    #[serde(default)]
    pub contact_details: String,
    #[serde(default)]
    pub address: String,
    pub vendor_code: String,
    /// Starting values, replaced by the first recompute.
    #[serde(default)]
    pub initial_metrics: Option<VendorMetrics>,
}

impl VendorCreate {
    pub fn new(name: impl Into<String>, vendor_code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contact_details: String::new(),
            address: String::new(),
            vendor_code: vendor_code.into(),
            initial_metrics: None,
        }
    }
}

/// Profile edits. Metric fields cannot be set this way.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VendorUpdate {
    pub name: Option<String>,
    pub contact_details: Option<String>,
    pub address: Option<String>,
    pub vendor_code: Option<String>,
}
