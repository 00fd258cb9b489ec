use crate::config::StoreConfig;
use crate::controller::{OrderController, VendorController};
use crate::metrics::MetricsEngine;
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

/// The runtime orchestrator for vendor scorecards.
///
/// `ProcurementSystem` is responsible for:
/// - **Lifecycle Management**: starting and stopping the three resource actors
/// - **Dependency Wiring**: the purchase order and performance actors get a
///   `VendorClient` as their context
/// - **Composition**: building the metrics engine and both controllers on top
///   of the clients
///
/// ```rust
/// use vendor_scorecard::config::StoreConfig;
/// use vendor_scorecard::lifecycle::ProcurementSystem;
/// use vendor_scorecard::model::VendorCreate;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let system = ProcurementSystem::new(&StoreConfig::default());
///
///     let vendor = system.vendors.create_vendor(VendorCreate::new("Acme", "ACM-001")).await?;
///     assert_eq!(vendor.metrics.fulfilment_rate, 0.0);
///
///     system.shutdown().await?;
///     Ok(())
/// }
/// ```
pub struct ProcurementSystem {
    /// Vendor CRUD, history and order queries.
    pub vendors: VendorController,

    /// Purchase order lifecycle.
    pub orders: OrderController,

    /// Direct access to recomputation (e.g. for a periodic refresh job).
    pub metrics: MetricsEngine,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<JoinHandle<()>>,
}

impl ProcurementSystem {
    /// Spawns all actors and wires them together. Must be called inside a
    /// Tokio runtime.
    pub fn new(store: &StoreConfig) -> Self {
        let capacity = store.channel_capacity;

        // 1. Create actors (no dependencies yet)
        let (vendor_actor, vendor_client) = crate::vendor_actor::new(capacity);
        let (order_actor, order_client) = crate::purchase_order_actor::new(capacity);
        let (performance_actor, performance_client) = crate::performance_actor::new(capacity);

        // 2. Start actors with injected context
        let vendor_handle = tokio::spawn(vendor_actor.run(()));
        let order_handle = tokio::spawn(order_actor.run(vendor_client.clone()));
        let performance_handle = tokio::spawn(performance_actor.run(vendor_client.clone()));

        // 3. Compose the engine and controllers
        let metrics = MetricsEngine::new(vendor_client.clone(), order_client.clone());
        let orders = OrderController::new(order_client.clone(), vendor_client.clone(), metrics.clone());
        let vendors = VendorController::new(vendor_client, order_client, performance_client, metrics.clone());

        info!(capacity, "Procurement system started");

        Self {
            vendors,
            orders,
            metrics,
            handles: vec![order_handle, performance_handle, vendor_handle],
        }
    }

    /// Gracefully shuts down the system.
    ///
    /// Dropping the controllers closes the order and performance channels.
    /// Those actors then exit and drop the `VendorClient` held in their
    /// context, which in turn closes the vendor channel. Clones of the
    /// controllers taken by the caller must be dropped first, or this waits
    /// for them.
    pub async fn shutdown(self) -> Result<(), JoinError> {
        info!("Shutting down procurement system...");

        drop(self.vendors);
        drop(self.orders);
        drop(self.metrics);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(e);
            }
        }

        info!("Procurement system shutdown complete.");
        Ok(())
    }
}
