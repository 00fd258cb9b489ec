//! # Performance Actor
//!
//! Owns the historical performance snapshots. Started with a
//! [`VendorClient`](crate::clients::VendorClient) context so a snapshot can only
//! be recorded for an existing vendor.
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`HistoricalPerformance`]
//! - [`error`] - [`PerformanceError`]

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::PerformanceClient;
use crate::model::HistoricalPerformance;
use actor_framework::ResourceActor;

/// Creates a new Performance actor and its client.
pub fn new(capacity: usize) -> (ResourceActor<HistoricalPerformance>, PerformanceClient) {
    let (actor, generic_client) = ResourceActor::new(capacity);
    (actor, PerformanceClient::new(generic_client))
}
