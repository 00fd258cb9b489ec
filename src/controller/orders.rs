use super::{AcknowledgeOutcome, VendorRef};
use crate::clients::{PurchaseOrderClient, VendorClient};
use crate::metrics::MetricsEngine;
use crate::model::{
    PurchaseOrder, PurchaseOrderCreate, PurchaseOrderFields, PurchaseOrderId, PurchaseOrderQuery,
    PurchaseOrderUpdate, VendorId,
};
use crate::purchase_order_actor::entity::validate_fields;
use crate::purchase_order_actor::{PurchaseOrderActionResult, PurchaseOrderError};
use actor_framework::ActorClient;
use chrono::Utc;
use tracing::{info, instrument, warn};

/// The order lifecycle: create, update, delete and acknowledge, each followed
/// by a recompute of the affected vendor.
///
/// Failures are reported before any metrics write: a rejected order write
/// never triggers a recompute.
#[derive(Clone)]
pub struct OrderController {
    orders: PurchaseOrderClient,
    vendors: VendorClient,
    engine: MetricsEngine,
}

impl OrderController {
    pub fn new(orders: PurchaseOrderClient, vendors: VendorClient, engine: MetricsEngine) -> Self {
        Self {
            orders,
            vendors,
            engine,
        }
    }

    async fn resolve_vendor(&self, vendor: VendorRef) -> Result<VendorId, PurchaseOrderError> {
        match vendor {
            VendorRef::Existing(id) => Ok(id),
            VendorRef::Upsert { id, defaults } => {
                let (id, created) = self.vendors.get_or_create_vendor(id, defaults).await?;
                if created {
                    info!(vendor = %id, "Vendor materialised from order payload");
                }
                Ok(id)
            }
        }
    }

    pub async fn get_order(&self, id: PurchaseOrderId) -> Result<PurchaseOrder, PurchaseOrderError> {
        self.orders
            .get(id)
            .await?
            .ok_or_else(|| PurchaseOrderError::NotFound(id.to_string()))
    }

    /// All orders, or those of one vendor, in id order.
    pub async fn list_orders(&self, vendor: Option<VendorId>) -> Result<Vec<PurchaseOrder>, PurchaseOrderError> {
        let query = vendor.map(PurchaseOrderQuery::for_vendor);
        self.orders.list(query).await
    }

    /// Creates an order for the referenced vendor and recomputes that vendor.
    ///
    /// Fields are validated before an upserted vendor is materialised, so an
    /// invalid order creates nothing.
    #[instrument(skip(self, fields), fields(po_number = %fields.po_number))]
    pub async fn create_order(
        &self,
        fields: PurchaseOrderFields,
        vendor: VendorRef,
    ) -> Result<PurchaseOrder, PurchaseOrderError> {
        validate_fields(&fields)?;
        let vendor = self.resolve_vendor(vendor).await?;

        let id = self
            .orders
            .create_order(PurchaseOrderCreate { vendor, fields })
            .await?;
        self.engine.recompute(vendor).await?;

        info!(order = %id, vendor = %vendor, "Purchase order created");
        self.get_order(id).await
    }

    /// Merges `update` into the order and recomputes its vendor.
    ///
    /// The vendor that owned the order before the update is recomputed; if the
    /// update moved the order, the new owner is recomputed as well.
    #[instrument(skip(self, update))]
    pub async fn update_order(
        &self,
        id: PurchaseOrderId,
        update: PurchaseOrderUpdate,
    ) -> Result<PurchaseOrder, PurchaseOrderError> {
        let previous = self.get_order(id).await?.vendor;
        let updated = self.orders.update_order(id, update).await?;

        self.engine.recompute(previous).await?;
        if updated.vendor != previous {
            info!(order = %id, from = %previous, to = %updated.vendor, "Order moved to another vendor");
            self.engine.recompute(updated.vendor).await?;
        }
        Ok(updated)
    }

    /// Deletes the order and recomputes the vendor that owned it.
    #[instrument(skip(self))]
    pub async fn delete_order(&self, id: PurchaseOrderId) -> Result<(), PurchaseOrderError> {
        let owner = self.get_order(id).await?.vendor;
        self.orders.delete(id).await?;
        self.engine.recompute(owner).await?;

        info!(order = %id, vendor = %owner, "Purchase order deleted");
        Ok(())
    }

    /// Records the vendor's acknowledgment of the order as of now.
    ///
    /// One-shot: an order that already carries an acknowledgment date keeps it
    /// and reports [`AcknowledgeOutcome::AlreadyAcknowledged`] without a
    /// recompute. Only infrastructure failures are returned as errors.
    #[instrument(skip(self))]
    pub async fn acknowledge(&self, id: PurchaseOrderId) -> Result<AcknowledgeOutcome, PurchaseOrderError> {
        let order = match self.get_order(id).await {
            Ok(order) => order,
            Err(PurchaseOrderError::NotFound(_)) => return Ok(AcknowledgeOutcome::NotFound),
            Err(e) => return Err(e),
        };

        let result = match self.orders.acknowledge(id, Utc::now()).await {
            Ok(result) => result,
            Err(PurchaseOrderError::NotFound(_)) => return Ok(AcknowledgeOutcome::NotFound),
            Err(e) => return Err(e),
        };

        match result {
            PurchaseOrderActionResult::Acknowledged(at) => {
                self.engine.recompute(order.vendor).await?;
                info!(order = %id, %at, "Purchase order acknowledged");
                Ok(AcknowledgeOutcome::Acknowledged { at })
            }
            PurchaseOrderActionResult::AlreadyAcknowledged(at) => {
                warn!(order = %id, %at, "Purchase order already acknowledged");
                Ok(AcknowledgeOutcome::AlreadyAcknowledged { at })
            }
        }
    }
}
