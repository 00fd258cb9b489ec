//! # System Lifecycle & Orchestration
//!
//! Starts, wires and stops the resource actors.
//!
//! ## Dependency Injection via Context
//!
//! Actors are created without dependencies and receive them at `run(context)`:
//!
//! | Actor | `Context` |
//! |---|---|
//! | Vendor | `()` |
//! | Purchase order | `VendorClient` (vendor must exist on create / reassignment) |
//! | Performance | `VendorClient` (snapshots only for existing vendors) |
//!
//! The dependency graph is acyclic, so shutdown by channel closure is
//! deterministic: dependents exit first and release their vendor clients.
//!
//! ## Observability
//!
//! Logging is configured separately through
//! [`LoggingConfig::init`](crate::config::LoggingConfig::init), which wraps
//! [`actor_framework::tracing::setup_tracing`].

pub mod procurement_system;

pub use procurement_system::*;
