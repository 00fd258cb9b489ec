//! # Metrics Engine
//!
//! Turns a vendor's purchase orders into its four published metrics and writes
//! them onto the vendor record.
//!
//! Only orders whose status is exactly `"completed"` count. Over that set C
//! (n = |C|):
//!
//! | Metric | Rule | Empty default |
//! |---|---|---|
//! | on-time delivery rate | share of C with `delivery_date <= acknowledgment_date` | `0.0` |
//! | quality rating average | mean of the non-null ratings in C | `0.0` |
//! | average response time | mean of `acknowledgment_date - issue_date` in seconds, over acknowledged orders in C | `0.0` |
//! | fulfilment rate | share of C *not* rated below 3 (unrated counts as fulfilled) | `0.0` |
//!
//! The on-time rule compares against the acknowledgment date, not a promised
//! date. An order without an acknowledgment is never on time.
//!
//! [`compute_metrics`] is pure. [`MetricsEngine::recompute`] reads the
//! completed orders, computes, and persists all four values in a single
//! [`VendorAction::ApplyMetrics`](crate::vendor_actor::VendorAction) write.

use crate::clients::{PurchaseOrderClient, VendorClient};
use crate::model::{PurchaseOrder, VendorId, VendorMetrics};
use crate::purchase_order_actor::PurchaseOrderError;
use crate::vendor_actor::VendorError;
use thiserror::Error;
use tracing::{info, instrument};

/// Errors raised while recomputing. None of them are caused by the order data
/// itself; degenerate inputs always produce numeric defaults.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MetricsError {
    #[error("Vendor not found: {0}")]
    VendorNotFound(VendorId),

    #[error("Could not read purchase orders: {0}")]
    Orders(String),

    #[error("Vendor rejected metrics: {0}")]
    Vendor(VendorError),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Computes the four metrics from `orders`. Non-completed orders are ignored.
pub fn compute_metrics(orders: &[PurchaseOrder]) -> VendorMetrics {
    let completed: Vec<&PurchaseOrder> = orders.iter().filter(|o| o.is_completed()).collect();

    VendorMetrics {
        on_time_delivery_rate: on_time_delivery_rate(&completed),
        quality_rating_avg: quality_rating_avg(&completed),
        average_response_time: average_response_time(&completed),
        fulfilment_rate: fulfilment_rate(&completed),
    }
}

fn share(count: usize, n: usize) -> f64 {
    if n == 0 {
        0.0
    } else {
        count as f64 / n as f64
    }
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

fn on_time_delivery_rate(completed: &[&PurchaseOrder]) -> f64 {
    let on_time = completed
        .iter()
        .filter(|o| matches!(o.acknowledgment_date, Some(ack) if o.delivery_date <= ack))
        .count();
    share(on_time, completed.len())
}

fn quality_rating_avg(completed: &[&PurchaseOrder]) -> f64 {
    mean(completed.iter().filter_map(|o| o.quality_rating))
}

fn average_response_time(completed: &[&PurchaseOrder]) -> f64 {
    mean(completed.iter().filter_map(|o| {
        let elapsed = o.acknowledgment_date? - o.issue_date;
        // microseconds overflow only past ~292k years; fall back to millis there
        Some(match elapsed.num_microseconds() {
            Some(us) => us as f64 / 1_000_000.0,
            None => elapsed.num_milliseconds() as f64 / 1_000.0,
        })
    }))
}

fn fulfilment_rate(completed: &[&PurchaseOrder]) -> f64 {
    let fulfilled = completed
        .iter()
        .filter(|o| !matches!(o.quality_rating, Some(r) if r < 3.0))
        .count();
    share(fulfilled, completed.len())
}

/// Reads a vendor's completed orders and persists freshly computed metrics.
///
/// Holds clients only; cheap to clone and share between controllers.
#[derive(Clone)]
pub struct MetricsEngine {
    vendors: VendorClient,
    orders: PurchaseOrderClient,
}

impl MetricsEngine {
    pub fn new(vendors: VendorClient, orders: PurchaseOrderClient) -> Self {
        Self { vendors, orders }
    }

    /// Recomputes and stores the metrics of `vendor`.
    ///
    /// Idempotent: without an intervening order change, repeated calls write
    /// identical values. Concurrent recomputes for one vendor are not
    /// serialised; the last write wins.
    #[instrument(skip(self, vendor), fields(vendor = %vendor))]
    pub async fn recompute(&self, vendor: VendorId) -> Result<VendorMetrics, MetricsError> {
        let orders = self
            .orders
            .list_completed(vendor)
            .await
            .map_err(|e| match e {
                PurchaseOrderError::Unavailable(msg) => MetricsError::Unavailable(msg),
                other => MetricsError::Orders(other.to_string()),
            })?;

        let metrics = compute_metrics(&orders);

        self.vendors
            .apply_metrics(vendor, metrics)
            .await
            .map_err(|e| match e {
                VendorError::NotFound(_) => MetricsError::VendorNotFound(vendor),
                VendorError::Unavailable(msg) => MetricsError::Unavailable(msg),
                other => MetricsError::Vendor(other),
            })?;

        info!(
            completed = orders.len(),
            on_time_delivery_rate = metrics.on_time_delivery_rate,
            quality_rating_avg = metrics.quality_rating_avg,
            average_response_time = metrics.average_response_time,
            fulfilment_rate = metrics.fulfilment_rate,
            "Vendor metrics recomputed"
        );
        Ok(metrics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PurchaseOrderId, Vendor};
    use actor_framework::mock::MockClient;
    use actor_framework::FrameworkError;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use serde_json::Map;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    fn order(status: &str) -> PurchaseOrder {
        PurchaseOrder {
            id: PurchaseOrderId(1),
            po_number: "PO-1".into(),
            vendor: VendorId(1),
            order_date: t0(),
            delivery_date: t0(),
            items: Map::new(),
            quantity: 1,
            status: status.into(),
            quality_rating: None,
            issue_date: t0(),
            acknowledgment_date: None,
        }
    }

    fn completed() -> PurchaseOrder {
        order("completed")
    }

    fn rated(rating: Option<f64>) -> PurchaseOrder {
        PurchaseOrder {
            quality_rating: rating,
            ..completed()
        }
    }

    #[test]
    fn test_no_completed_orders_yields_zeros() {
        assert_eq!(compute_metrics(&[]), VendorMetrics::default());

        let pending = PurchaseOrder {
            quality_rating: Some(5.0),
            acknowledgment_date: Some(t0()),
            ..order("pending")
        };
        assert_eq!(compute_metrics(&[pending]), VendorMetrics::default());
    }

    #[test]
    fn test_on_time_compares_delivery_with_acknowledgment() {
        let same_instant = PurchaseOrder {
            acknowledgment_date: Some(t0()),
            ..completed()
        };
        assert_eq!(compute_metrics(&[same_instant]).on_time_delivery_rate, 1.0);

        let day_late = PurchaseOrder {
            acknowledgment_date: Some(t0()),
            delivery_date: t0() + Duration::days(1),
            ..completed()
        };
        assert_eq!(compute_metrics(&[day_late]).on_time_delivery_rate, 0.0);
    }

    #[test]
    fn test_unacknowledged_order_is_never_on_time() {
        let metrics = compute_metrics(&[completed()]);
        assert_eq!(metrics.on_time_delivery_rate, 0.0);
        assert_eq!(metrics.average_response_time, 0.0);
    }

    #[test]
    fn test_quality_average_skips_unrated() {
        let metrics = compute_metrics(&[rated(Some(4.0)), rated(None)]);
        assert_eq!(metrics.quality_rating_avg, 4.0);

        assert_eq!(compute_metrics(&[rated(None)]).quality_rating_avg, 0.0);
    }

    #[test]
    fn test_fulfilment_counts_unrated_as_fulfilled() {
        assert_eq!(compute_metrics(&[rated(None)]).fulfilment_rate, 1.0);
        assert_eq!(compute_metrics(&[rated(Some(2.0))]).fulfilment_rate, 0.0);
        assert_eq!(compute_metrics(&[rated(Some(3.0))]).fulfilment_rate, 1.0);
        assert_eq!(
            compute_metrics(&[rated(Some(1.0)), rated(None), rated(Some(4.5)), rated(Some(2.9))])
                .fulfilment_rate,
            0.5
        );
    }

    #[test]
    fn test_response_time_in_seconds() {
        let hour = PurchaseOrder {
            acknowledgment_date: Some(t0() + Duration::seconds(3600)),
            ..completed()
        };
        assert_eq!(compute_metrics(&[hour]).average_response_time, 3600.0);

        let fractional = PurchaseOrder {
            acknowledgment_date: Some(t0() + Duration::milliseconds(1500)),
            ..completed()
        };
        assert_eq!(compute_metrics(&[fractional]).average_response_time, 1.5);
    }

    #[test]
    fn test_response_time_is_not_clamped() {
        let before_issue = PurchaseOrder {
            acknowledgment_date: Some(t0() - Duration::seconds(60)),
            ..completed()
        };
        let after_issue = PurchaseOrder {
            acknowledgment_date: Some(t0() + Duration::seconds(20)),
            ..completed()
        };
        assert_eq!(compute_metrics(&[before_issue.clone()]).average_response_time, -60.0);
        assert_eq!(
            compute_metrics(&[before_issue, after_issue, completed()]).average_response_time,
            -20.0
        );
    }

    #[test]
    fn test_non_completed_orders_never_count() {
        let base = vec![
            PurchaseOrder {
                acknowledgment_date: Some(t0()),
                quality_rating: Some(4.0),
                ..completed()
            },
            rated(Some(2.0)),
        ];
        let expected = compute_metrics(&base);

        let mut noisy = base.clone();
        for status in ["pending", "Completed", "completed ", "canceled"] {
            noisy.push(PurchaseOrder {
                quality_rating: Some(0.0),
                acknowledgment_date: Some(t0() + Duration::days(30)),
                ..order(status)
            });
        }
        assert_eq!(compute_metrics(&noisy), expected);
    }

    #[test]
    fn test_compute_is_bit_identical_across_calls() {
        let orders: Vec<PurchaseOrder> = (0..7)
            .map(|i| PurchaseOrder {
                quality_rating: Some(1.0 + i as f64 * 0.7),
                acknowledgment_date: Some(t0() + Duration::milliseconds(i * 333)),
                ..completed()
            })
            .collect();
        let first = compute_metrics(&orders);
        let second = compute_metrics(&orders);
        assert_eq!(first.quality_rating_avg.to_bits(), second.quality_rating_avg.to_bits());
        assert_eq!(first.average_response_time.to_bits(), second.average_response_time.to_bits());
        assert_eq!(first, second);
    }

    fn vendor(metrics: VendorMetrics) -> Vendor {
        Vendor {
            id: VendorId(1),
            name: "Acme".into(),
            contact_details: String::new(),
            address: String::new(),
            vendor_code: "ACM".into(),
            metrics,
        }
    }

    #[tokio::test]
    async fn test_recompute_writes_computed_metrics() {
        let orders = vec![rated(Some(4.0)), rated(Some(2.0))];
        let expected = compute_metrics(&orders);

        let mut order_mock = MockClient::<PurchaseOrder>::new();
        let mut vendor_mock = MockClient::<Vendor>::new();
        order_mock.expect_list().return_ok(orders);
        vendor_mock.expect_action(VendorId(1)).return_ok(vendor(expected));

        let engine = MetricsEngine::new(
            VendorClient::new(vendor_mock.client()),
            PurchaseOrderClient::new(order_mock.client()),
        );
        let metrics = engine.recompute(VendorId(1)).await.unwrap();
        assert_eq!(metrics, expected);
        assert_eq!(metrics.quality_rating_avg, 3.0);
        assert_eq!(metrics.fulfilment_rate, 0.5);

        order_mock.verify();
        vendor_mock.verify();
    }

    #[tokio::test]
    async fn test_recompute_unknown_vendor() {
        let mut order_mock = MockClient::<PurchaseOrder>::new();
        let mut vendor_mock = MockClient::<Vendor>::new();
        order_mock.expect_list().return_ok(Vec::new());
        vendor_mock
            .expect_action(VendorId(9))
            .return_err(FrameworkError::NotFound("vendor_9".into()));

        let engine = MetricsEngine::new(
            VendorClient::new(vendor_mock.client()),
            PurchaseOrderClient::new(order_mock.client()),
        );
        let err = engine.recompute(VendorId(9)).await.unwrap_err();
        assert_eq!(err, MetricsError::VendorNotFound(VendorId(9)));
        assert_eq!(
            VendorError::from(err),
            VendorError::NotFound("vendor_9".into())
        );
    }

    #[tokio::test]
    async fn test_recompute_propagates_store_failure() {
        let mut order_mock = MockClient::<PurchaseOrder>::new();
        let vendor_mock = MockClient::<Vendor>::new();
        order_mock.expect_list().return_err(FrameworkError::ActorClosed);

        let engine = MetricsEngine::new(
            VendorClient::new(vendor_mock.client()),
            PurchaseOrderClient::new(order_mock.client()),
        );
        let err = engine.recompute(VendorId(1)).await.unwrap_err();
        assert!(matches!(err, MetricsError::Unavailable(_)));
        // nothing is written when the read fails
        vendor_mock.verify();
    }
}
