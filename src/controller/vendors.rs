use crate::clients::{PerformanceClient, PurchaseOrderClient, VendorClient};
use crate::metrics::MetricsEngine;
use crate::model::{
    HistoricalPerformance, HistoricalPerformanceCreate, PurchaseOrder, PurchaseOrderId, Vendor,
    VendorCreate, VendorId, VendorUpdate,
};
use crate::performance_actor::PerformanceError;
use crate::purchase_order_actor::PurchaseOrderError;
use crate::vendor_actor::VendorError;
use actor_framework::ActorClient;
use chrono::Utc;
use tracing::{info, instrument, warn};

/// Vendor CRUD, order and performance queries.
///
/// Vendor writes return the record as it stands after the recompute that
/// follows them.
#[derive(Clone)]
pub struct VendorController {
    vendors: VendorClient,
    orders: PurchaseOrderClient,
    performance: PerformanceClient,
    engine: MetricsEngine,
}

fn cascade_error(e: impl std::fmt::Display) -> VendorError {
    VendorError::Unavailable(format!("cascade delete failed: {e}"))
}

impl VendorController {
    pub fn new(
        vendors: VendorClient,
        orders: PurchaseOrderClient,
        performance: PerformanceClient,
        engine: MetricsEngine,
    ) -> Self {
        Self {
            vendors,
            orders,
            performance,
            engine,
        }
    }

    pub async fn list_vendors(&self) -> Result<Vec<Vendor>, VendorError> {
        self.vendors.list(None).await
    }

    pub async fn get_vendor(&self, id: VendorId) -> Result<Vendor, VendorError> {
        self.vendors
            .get(id)
            .await?
            .ok_or_else(|| VendorError::NotFound(id.to_string()))
    }

    /// Onboards a vendor. Any initial metrics are replaced by an immediate recompute.
    #[instrument(skip(self, params), fields(vendor_code = %params.vendor_code))]
    pub async fn create_vendor(&self, params: VendorCreate) -> Result<Vendor, VendorError> {
        let id = self.vendors.create_vendor(params).await?;
        self.engine.recompute(id).await?;
        info!(vendor = %id, "Vendor created");
        self.get_vendor(id).await
    }

    #[instrument(skip(self, update))]
    pub async fn update_vendor(&self, id: VendorId, update: VendorUpdate) -> Result<Vendor, VendorError> {
        self.vendors.update_vendor(id, update).await?;
        self.engine.recompute(id).await?;
        self.get_vendor(id).await
    }

    /// Deletes the vendor together with its purchase orders and snapshots.
    ///
    /// Dependents go first. If the cascade fails part-way the vendor stays,
    /// and its metrics are recomputed over the orders that survived.
    #[instrument(skip(self))]
    pub async fn delete_vendor(&self, id: VendorId) -> Result<(), VendorError> {
        self.get_vendor(id).await?;

        let (orders, snapshots) = match self.delete_dependents(id).await {
            Ok(counts) => counts,
            Err(e) => {
                if let Err(recompute) = self.engine.recompute(id).await {
                    warn!(vendor = %id, error = %recompute, "Recompute after failed cascade failed");
                }
                return Err(e);
            }
        };

        self.vendors.delete(id).await?;
        info!(vendor = %id, orders, snapshots, "Vendor deleted");
        Ok(())
    }

    async fn delete_dependents(&self, id: VendorId) -> Result<(usize, usize), VendorError> {
        let orders = self.orders.list_for_vendor(id).await.map_err(cascade_error)?;
        for order in &orders {
            match self.orders.delete(order.id).await {
                // already gone
                Ok(()) | Err(PurchaseOrderError::NotFound(_)) => {}
                Err(e) => return Err(cascade_error(e)),
            }
        }

        let snapshots = self.performance.history(id).await.map_err(cascade_error)?;
        for snapshot in &snapshots {
            match self.performance.delete(snapshot.id).await {
                Ok(()) | Err(PerformanceError::NotFound(_)) => {}
                Err(e) => return Err(cascade_error(e)),
            }
        }
        Ok((orders.len(), snapshots.len()))
    }

    /// All orders, or those of one vendor.
    pub async fn list_orders(&self, vendor: Option<VendorId>) -> Result<Vec<PurchaseOrder>, PurchaseOrderError> {
        match vendor {
            Some(vendor) => self.orders.list_for_vendor(vendor).await,
            None => self.orders.list(None).await,
        }
    }

    pub async fn get_order(&self, id: PurchaseOrderId) -> Result<PurchaseOrder, PurchaseOrderError> {
        self.orders
            .get(id)
            .await?
            .ok_or_else(|| PurchaseOrderError::NotFound(id.to_string()))
    }

    /// Snapshots of the vendor, oldest first. Empty for an unknown vendor.
    pub async fn performance_history(&self, vendor: VendorId) -> Result<Vec<HistoricalPerformance>, PerformanceError> {
        self.performance.history(vendor).await
    }

    /// Freezes the vendor's current metrics into a new snapshot.
    ///
    /// For an external scheduler; no order operation records snapshots.
    #[instrument(skip(self))]
    pub async fn record_snapshot(&self, vendor: VendorId) -> Result<HistoricalPerformance, PerformanceError> {
        let current = match self.vendors.get(vendor).await {
            Ok(Some(current)) => current,
            Ok(None) => return Err(PerformanceError::VendorNotFound(vendor)),
            Err(e) => return Err(PerformanceError::Unavailable(e.to_string())),
        };

        let id = self
            .performance
            .record(HistoricalPerformanceCreate {
                vendor,
                recorded_at: Utc::now(),
                metrics: current.metrics,
            })
            .await?;
        info!(vendor = %vendor, snapshot = %id, "Performance snapshot recorded");

        self.performance
            .get(id)
            .await?
            .ok_or_else(|| PerformanceError::NotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{HistoricalPerformance, PurchaseOrderFields, VendorMetrics};
    use actor_framework::mock::MockClient;
    use actor_framework::FrameworkError;
    use chrono::TimeZone;
    use serde_json::Map;

    fn vendor(id: u32) -> Vendor {
        Vendor {
            id: VendorId(id),
            name: "Acme".into(),
            contact_details: String::new(),
            address: String::new(),
            vendor_code: "ACM".into(),
            metrics: VendorMetrics::default(),
        }
    }

    fn order(id: u32, vendor: u32) -> PurchaseOrder {
        let t = Utc.with_ymd_and_hms(2024, 2, 1, 10, 0, 0).unwrap();
        let fields = PurchaseOrderFields {
            po_number: format!("PO-{id}"),
            order_date: t,
            delivery_date: t,
            items: Map::new(),
            quantity: 1,
            status: "completed".into(),
            quality_rating: Some(2.0),
            issue_date: t,
            acknowledgment_date: None,
        };
        PurchaseOrder {
            id: PurchaseOrderId(id),
            po_number: fields.po_number,
            vendor: VendorId(vendor),
            order_date: fields.order_date,
            delivery_date: fields.delivery_date,
            items: fields.items,
            quantity: fields.quantity,
            status: fields.status,
            quality_rating: fields.quality_rating,
            issue_date: fields.issue_date,
            acknowledgment_date: fields.acknowledgment_date,
        }
    }

    #[tokio::test]
    async fn test_failed_cascade_recomputes_surviving_vendor() {
        let mut vendor_mock = MockClient::<Vendor>::new();
        let mut order_mock = MockClient::<PurchaseOrder>::new();
        let performance_mock = MockClient::<HistoricalPerformance>::new();

        vendor_mock.expect_get(VendorId(1)).return_ok(Some(vendor(1)));
        order_mock.expect_list().return_ok(vec![order(1, 1), order(2, 1)]);
        order_mock.expect_delete(PurchaseOrderId(1)).return_ok(());
        order_mock.expect_delete(PurchaseOrderId(2)).return_err(FrameworkError::ActorDropped);
        // recompute over what is left
        order_mock.expect_list().return_ok(vec![order(2, 1)]);
        vendor_mock.expect_action(VendorId(1)).return_ok(vendor(1));

        let vendors = VendorClient::new(vendor_mock.client());
        let orders = PurchaseOrderClient::new(order_mock.client());
        let controller = VendorController::new(
            vendors.clone(),
            orders.clone(),
            PerformanceClient::new(performance_mock.client()),
            MetricsEngine::new(vendors, orders),
        );

        let err = controller.delete_vendor(VendorId(1)).await.unwrap_err();
        assert!(matches!(err, VendorError::Unavailable(msg) if msg.contains("cascade")));

        vendor_mock.verify();
        order_mock.verify();
        performance_mock.verify();
    }
}
