use crate::model::{VendorId, VendorMetrics};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for performance snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SnapshotId(pub u32);

impl From<u32> for SnapshotId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for SnapshotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "snapshot_{}", self.0)
    }
}

/// A frozen copy of a vendor's metrics at one point in time. Append-only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoricalPerformance {
    pub id: SnapshotId,
    pub vendor: VendorId,
    pub recorded_at: DateTime<Utc>,
    pub metrics: VendorMetrics,
}

#[derive(Debug, Clone)]
pub struct HistoricalPerformanceCreate {
    pub vendor: VendorId,
    pub recorded_at: DateTime<Utc>,
    pub metrics: VendorMetrics,
}
