//! # Actor Framework
//!
//! Foundational building blocks for type-safe resource stores built on Tokio
//! actors. Each resource type (vendor, purchase order, ...) is owned by one
//! [`ResourceActor`], which serves CRUD, filtered listing, find-or-create and
//! custom actions over a channel. Because the actor processes requests one at
//! a time, every single-record write is atomic without locks.
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - business rules and hooks of a record type
//! 2. **Runtime Layer** ([`ResourceActor`]) - message processing and the owned store
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - type-safe requests
//!
//! Business logic lives in the entity trait; the framework handles message
//! passing, error wrapping and state ownership.
//!
//! ```rust
//! use actor_framework::{ActorEntity, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Ticket {
//!     id: u32,
//!     queue: String,
//!     closed: bool,
//! }
//!
//! #[derive(Debug)] struct TicketCreate { queue: String }
//! #[derive(Debug)] struct TicketUpdate { queue: Option<String> }
//! #[derive(Debug)] enum TicketAction { Close }
//! #[derive(Debug, thiserror::Error)]
//! #[error("ticket already closed")]
//! struct TicketError;
//!
//! #[async_trait]
//! impl ActorEntity for Ticket {
//!     type Id = u32;
//!     type Create = TicketCreate;
//!     type Update = TicketUpdate;
//!     type Query = String; // queue name
//!     type Action = TicketAction;
//!     type ActionResult = ();
//!     type Context = ();
//!     type Error = TicketError;
//!
//!     fn from_create_params(id: u32, params: TicketCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, queue: params.queue, closed: false })
//!     }
//!
//!     fn matches(&self, queue: &String) -> bool {
//!         &self.queue == queue
//!     }
//!
//!     async fn on_update(&mut self, update: TicketUpdate, _ctx: &()) -> Result<(), Self::Error> {
//!         if let Some(queue) = update.queue { self.queue = queue; }
//!         Ok(())
//!     }
//!
//!     async fn handle_action(&mut self, action: TicketAction, _ctx: &()) -> Result<(), Self::Error> {
//!         match action {
//!             TicketAction::Close if self.closed => Err(TicketError),
//!             TicketAction::Close => { self.closed = true; Ok(()) }
//!         }
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Ticket>::new(10);
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client.create(TicketCreate { queue: "billing".into() }).await.unwrap();
//!     client.create(TicketCreate { queue: "support".into() }).await.unwrap();
//!
//!     let billing = client.list(Some("billing".to_string())).await.unwrap();
//!     assert_eq!(billing.len(), 1);
//!
//!     client.perform_action(id, TicketAction::Close).await.unwrap();
//!     assert!(client.perform_action(id, TicketAction::Close).await.is_err());
//! }
//! ```
//!
//! ## Context Injection Pattern
//!
//! Dependencies are injected at **runtime** via `run(context)`, not at
//! construction time. An actor whose hooks need another resource (say, purchase
//! orders that must reference an existing vendor) receives that resource's
//! client as its `Context`:
//!
//! ```rust,ignore
//! let (vendor_actor, vendor_client) = ResourceActor::<Vendor>::new(32);
//! let (order_actor, order_client) = ResourceActor::<PurchaseOrder>::new(32);
//!
//! tokio::spawn(vendor_actor.run(()));
//! tokio::spawn(order_actor.run(VendorClient::new(vendor_client.clone())));
//! ```
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task
//! - Messages are processed **sequentially** within an actor
//! - Different actors run in **parallel**
//! - Update and Action hooks work on a copy that is committed only on success
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers a real `ResourceClient<T>` from scripted
//! expectations, so code around a client can be tested without an actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
