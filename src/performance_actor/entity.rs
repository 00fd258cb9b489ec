//! [`ActorEntity`] implementation for [`HistoricalPerformance`].
//!
//! Snapshots are append-only: the update and action types are uninhabited, so
//! an existing snapshot cannot be changed through the client at all.

use super::error::PerformanceError;
use crate::clients::VendorClient;
use crate::model::{HistoricalPerformance, HistoricalPerformanceCreate, SnapshotId, VendorId};
use actor_framework::{ActorClient, ActorEntity};
use async_trait::async_trait;
use std::convert::Infallible;

#[async_trait]
impl ActorEntity for HistoricalPerformance {
    type Id = SnapshotId;
    type Create = HistoricalPerformanceCreate;
    type Update = Infallible;
    /// Snapshots of one vendor.
    type Query = VendorId;
    type Action = Infallible;
    type ActionResult = ();
    type Context = VendorClient;
    type Error = PerformanceError;

    fn from_create_params(id: SnapshotId, params: HistoricalPerformanceCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            vendor: params.vendor,
            recorded_at: params.recorded_at,
            metrics: params.metrics,
        })
    }

    fn matches(&self, vendor: &VendorId) -> bool {
        self.vendor == *vendor
    }

    async fn on_create(&mut self, vendors: &VendorClient) -> Result<(), Self::Error> {
        match vendors.get(self.vendor).await {
            Ok(Some(_)) => Ok(()),
            Ok(None) => Err(PerformanceError::VendorNotFound(self.vendor)),
            Err(e) => Err(PerformanceError::Unavailable(e.to_string())),
        }
    }

    async fn on_update(&mut self, update: Infallible, _ctx: &VendorClient) -> Result<(), Self::Error> {
        match update {}
    }

    async fn handle_action(&mut self, action: Infallible, _ctx: &VendorClient) -> Result<(), Self::Error> {
        match action {}
    }
}
