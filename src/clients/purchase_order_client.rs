//! # Purchase Order Client
//!
//! High-level API for the `PurchaseOrder` actor.

use crate::model::{
    PurchaseOrder, PurchaseOrderCreate, PurchaseOrderId, PurchaseOrderQuery, PurchaseOrderUpdate,
    VendorId,
};
use crate::purchase_order_actor::{PurchaseOrderAction, PurchaseOrderActionResult, PurchaseOrderError};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::{debug, instrument};

/// Client for interacting with the Purchase Order actor.
///
/// Vendor validation happens inside the actor (`on_create` / `on_update`),
/// so this client only shapes requests and maps errors.
#[derive(Clone)]
pub struct PurchaseOrderClient {
    inner: ResourceClient<PurchaseOrder>,
}

impl PurchaseOrderClient {
    pub fn new(inner: ResourceClient<PurchaseOrder>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<PurchaseOrder> for PurchaseOrderClient {
    type Error = PurchaseOrderError;

    fn inner(&self) -> &ResourceClient<PurchaseOrder> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<PurchaseOrderError>() {
            Ok(typed) => typed,
            Err(FrameworkError::NotFound(id)) => PurchaseOrderError::NotFound(id),
            Err(other) => PurchaseOrderError::Unavailable(other.to_string()),
        }
    }
}

impl PurchaseOrderClient {
    #[instrument(skip(self, params), fields(vendor = %params.vendor, po_number = %params.fields.po_number))]
    pub async fn create_order(&self, params: PurchaseOrderCreate) -> Result<PurchaseOrderId, PurchaseOrderError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_order(
        &self,
        id: PurchaseOrderId,
        update: PurchaseOrderUpdate,
    ) -> Result<PurchaseOrder, PurchaseOrderError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Orders owned by `vendor`, in id order.
    pub async fn list_for_vendor(&self, vendor: VendorId) -> Result<Vec<PurchaseOrder>, PurchaseOrderError> {
        self.list(Some(PurchaseOrderQuery::for_vendor(vendor))).await
    }

    /// The vendor's orders with status `"completed"`.
    pub async fn list_completed(&self, vendor: VendorId) -> Result<Vec<PurchaseOrder>, PurchaseOrderError> {
        self.list(Some(PurchaseOrderQuery::completed_for(vendor))).await
    }

    /// Sets the acknowledgment date to `at` unless one is already recorded.
    #[instrument(skip(self))]
    pub async fn acknowledge(
        &self,
        id: PurchaseOrderId,
        at: DateTime<Utc>,
    ) -> Result<PurchaseOrderActionResult, PurchaseOrderError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, PurchaseOrderAction::Acknowledge { at })
            .await
            .map_err(Self::map_error)
    }
}
