//! # Vendor Actor
//!
//! Owns the vendor records. Has no dependencies (`Context = ()`).
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Vendor`]
//! - [`actions`] - [`VendorAction::ApplyMetrics`], the single metrics write path
//! - [`error`] - [`VendorError`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ```rust
//! use vendor_scorecard::vendor_actor;
//! use vendor_scorecard::model::VendorCreate;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = vendor_actor::new(32);
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client.create_vendor(VendorCreate::new("Acme Supplies", "ACM-001")).await?;
//!     assert_eq!(id.to_string(), "vendor_1");
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::VendorClient;
use crate::model::Vendor;
use actor_framework::ResourceActor;

/// Creates a new Vendor actor and its client.
pub fn new(capacity: usize) -> (ResourceActor<Vendor>, VendorClient) {
    let (actor, generic_client) = ResourceActor::new(capacity);
    (actor, VendorClient::new(generic_client))
}
