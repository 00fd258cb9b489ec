//! # Purchase Order Actor
//!
//! Owns the purchase orders. Depends on the vendor actor: it is started with a
//! [`VendorClient`](crate::clients::VendorClient) as its context.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`PurchaseOrder`]
//! - [`actions`] - the acknowledgment transition
//! - [`error`] - [`PurchaseOrderError`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ```rust,ignore
//! let (vendor_actor, vendor_client) = vendor_actor::new(32);
//! let (order_actor, order_client) = purchase_order_actor::new(32);
//!
//! tokio::spawn(vendor_actor.run(()));
//! tokio::spawn(order_actor.run(vendor_client.clone()));
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::PurchaseOrderClient;
use crate::model::PurchaseOrder;
use actor_framework::ResourceActor;

/// Creates a new Purchase Order actor and its client.
pub fn new(capacity: usize) -> (ResourceActor<PurchaseOrder>, PurchaseOrderClient) {
    let (actor, generic_client) = ResourceActor::new(capacity);
    (actor, PurchaseOrderClient::new(generic_client))
}
