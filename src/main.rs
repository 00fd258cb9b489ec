use chrono::{Duration, Utc};
use serde_json::json;
use tracing::{info, Instrument};
use vendor_scorecard::config::AppConfig;
use vendor_scorecard::controller::VendorRef;
use vendor_scorecard::lifecycle::ProcurementSystem;
use vendor_scorecard::model::{PurchaseOrderFields, PurchaseOrderUpdate, VendorCreate, STATUS_COMPLETED};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;
    config.logging.init()?;

    info!("Starting vendor scorecard demo");
    let system = ProcurementSystem::new(&config.store);

    let span = tracing::info_span!("vendor_onboarding");
    let vendor = async {
        let mut params = VendorCreate::new("Acme Supplies", "ACM-001");
        params.contact_details = "orders@acme.example".into();
        params.address = "1 Industrial Way".into();
        system.vendors.create_vendor(params).await
    }
    .instrument(span)
    .await?;
    info!(vendor = %vendor.id, "Vendor onboarded");

    let issued = Utc::now() - Duration::days(10);
    let span = tracing::info_span!("order_processing");
    let order = async {
        let fields = PurchaseOrderFields {
            po_number: "PO-2024-0001".into(),
            order_date: issued,
            delivery_date: issued + Duration::days(2),
            items: json!({ "widget": 40, "gasket": 120 })
                .as_object()
                .cloned()
                .unwrap_or_default(),
            quantity: 160,
            status: "pending".into(),
            quality_rating: None,
            issue_date: issued,
            acknowledgment_date: None,
        };
        let order = system
            .orders
            .create_order(fields, VendorRef::Existing(vendor.id))
            .await?;

        let outcome = system.orders.acknowledge(order.id).await?;
        info!(status = outcome.status_code(), "{}", outcome.message());

        let completion = PurchaseOrderUpdate {
            status: Some(STATUS_COMPLETED.into()),
            quality_rating: Some(Some(4.5)),
            ..PurchaseOrderUpdate::default()
        };
        system.orders.update_order(order.id, completion).await
    }
    .instrument(span)
    .await?;
    info!(order = %order.id, "Order completed");

    let scored = system.vendors.get_vendor(vendor.id).await?;
    info!(
        on_time_delivery_rate = scored.metrics.on_time_delivery_rate,
        quality_rating_avg = scored.metrics.quality_rating_avg,
        average_response_time = scored.metrics.average_response_time,
        fulfilment_rate = scored.metrics.fulfilment_rate,
        "Vendor scorecard"
    );

    let snapshot = system.vendors.record_snapshot(vendor.id).await?;
    info!(snapshot = %snapshot.id, recorded_at = %snapshot.recorded_at, "Snapshot recorded");

    system.shutdown().await?;
    info!("Demo completed successfully");
    Ok(())
}
