use crate::model::VendorId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt::Display;

/// The only status that counts towards vendor metrics.
pub const STATUS_COMPLETED: &str = "completed";

/// Type-safe identifier for Purchase Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PurchaseOrderId(pub u32);

impl From<u32> for PurchaseOrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for PurchaseOrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "po_{}", self.0)
    }
}

/// A purchase order issued to a vendor.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait.
/// Its actor validates the owning vendor through an injected
/// [`VendorClient`](crate::clients::VendorClient) when the order is created or
/// moved to another vendor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PurchaseOrder {
    pub id: PurchaseOrderId,
    pub po_number: String,
    pub vendor: VendorId,
    pub order_date: DateTime<Utc>,
    pub delivery_date: DateTime<Utc>,
    /// Free-form line items.
    pub items: Map<String, Value>,
    pub quantity: u32,
    /// Free-form; only [`STATUS_COMPLETED`] is meaningful to the metrics engine.
    pub status: String,
    /// Unbounded; `None` means not rated.
    pub quality_rating: Option<f64>,
    pub issue_date: DateTime<Utc>,
    /// `None` until the vendor acknowledges the order.
    pub acknowledgment_date: Option<DateTime<Utc>>,
}

impl PurchaseOrder {
    pub fn is_completed(&self) -> bool {
        self.status == STATUS_COMPLETED
    }
}

/// Business fields of a new order, without its vendor.
///
/// The vendor is resolved separately (see
/// [`VendorRef`](crate::controller::VendorRef)).
#[derive(Debug, Clone, Deserialize)]
pub struct PurchaseOrderFields {
    pub po_number: String,
    pub order_date: DateTime<Utc>,
    pub delivery_date: DateTime<Utc>,
    #[serde(default)]
    pub items: Map<String, Value>,
    pub quantity: u32,
    pub status: String,
    #[serde(default)]
    pub quality_rating: Option<f64>,
    pub issue_date: DateTime<Utc>,
    #[serde(default)]
    pub acknowledgment_date: Option<DateTime<Utc>>,
}

/// Payload for creating a purchase order.
#[derive(Debug, Clone)]
pub struct PurchaseOrderCreate {
    pub vendor: VendorId,
    pub fields: PurchaseOrderFields,
}

/// Field-level changes to an order. `None` leaves a field as it is.
///
/// The nullable fields take a nested option so they can be cleared:
/// `Some(None)` resets them to "not rated" / "not acknowledged".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PurchaseOrderUpdate {
    pub po_number: Option<String>,
    pub vendor: Option<VendorId>,
    pub order_date: Option<DateTime<Utc>>,
    pub delivery_date: Option<DateTime<Utc>>,
    pub items: Option<Map<String, Value>>,
    pub quantity: Option<u32>,
    pub status: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub quality_rating: Option<Option<f64>>,
    pub issue_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "present")]
    pub acknowledgment_date: Option<Option<DateTime<Utc>>>,
}

/// A key present in the payload, `null` included, becomes `Some(_)`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// List filter for purchase orders. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PurchaseOrderQuery {
    pub vendor: Option<VendorId>,
    pub status: Option<String>,
}

impl PurchaseOrderQuery {
    pub fn for_vendor(vendor: VendorId) -> Self {
        Self {
            vendor: Some(vendor),
            status: None,
        }
    }

    /// The vendor's orders that feed its metrics.
    pub fn completed_for(vendor: VendorId) -> Self {
        Self {
            vendor: Some(vendor),
            status: Some(STATUS_COMPLETED.to_string()),
        }
    }

    pub fn matches(&self, order: &PurchaseOrder) -> bool {
        self.vendor.map_or(true, |v| order.vendor == v)
            && self.status.as_ref().map_or(true, |s| &order.status == s)
    }
}
