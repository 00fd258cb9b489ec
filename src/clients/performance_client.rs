//! # Performance Client
//!
//! High-level API for the `HistoricalPerformance` actor.

use crate::model::{HistoricalPerformance, HistoricalPerformanceCreate, SnapshotId, VendorId};
use crate::performance_actor::PerformanceError;
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Performance actor.
#[derive(Clone)]
pub struct PerformanceClient {
    inner: ResourceClient<HistoricalPerformance>,
}

impl PerformanceClient {
    pub fn new(inner: ResourceClient<HistoricalPerformance>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<HistoricalPerformance> for PerformanceClient {
    type Error = PerformanceError;

    fn inner(&self) -> &ResourceClient<HistoricalPerformance> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<PerformanceError>() {
            Ok(typed) => typed,
            Err(FrameworkError::NotFound(id)) => PerformanceError::NotFound(id),
            Err(other) => PerformanceError::Unavailable(other.to_string()),
        }
    }
}

impl PerformanceClient {
    #[instrument(skip(self))]
    pub async fn record(&self, params: HistoricalPerformanceCreate) -> Result<SnapshotId, PerformanceError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Snapshots of `vendor`, oldest first.
    #[instrument(skip(self))]
    pub async fn history(&self, vendor: VendorId) -> Result<Vec<HistoricalPerformance>, PerformanceError> {
        let mut snapshots = self.list(Some(vendor)).await?;
        snapshots.sort_by_key(|s| s.recorded_at);
        Ok(snapshots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::VendorMetrics;
    use actor_framework::mock::MockClient;
    use chrono::{Duration, TimeZone, Utc};

    #[tokio::test]
    async fn test_history_is_ordered_by_recorded_at() {
        let t0 = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let snapshot = |id: u32, offset_days: i64| HistoricalPerformance {
            id: SnapshotId(id),
            vendor: VendorId(1),
            recorded_at: t0 + Duration::days(offset_days),
            metrics: VendorMetrics::default(),
        };

        let mut mock = MockClient::<HistoricalPerformance>::new();
        mock.expect_list()
            .return_ok(vec![snapshot(1, 5), snapshot(2, 0), snapshot(3, 2)]);

        let client = PerformanceClient::new(mock.client());
        let ids: Vec<SnapshotId> = client
            .history(VendorId(1))
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(ids, vec![SnapshotId(2), SnapshotId(3), SnapshotId(1)]);
        mock.verify();
    }
}
