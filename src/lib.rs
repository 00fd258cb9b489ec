//! # Vendor Scorecard
//!
//! Tracks vendors and the purchase orders issued to them, and keeps four
//! performance metrics per vendor up to date:
//!
//! - on-time delivery rate
//! - average quality rating
//! - average response time (seconds)
//! - fulfilment rate
//!
//! Every order write is followed, in the same call, by a recompute of the
//! affected vendor, so a caller reading the vendor right after a write sees
//! metrics consistent with it.
//!
//! ## Module Tour
//!
//! ### 1. The Store ([`vendor_actor`], [`purchase_order_actor`], [`performance_actor`])
//! One [`ResourceActor`](actor_framework::ResourceActor) per entity kind. Each
//! actor processes its requests sequentially, which makes every single-record
//! write atomic.
//!
//! ### 2. The Interface ([`clients`])
//! Domain clients over the generic `ResourceClient`, with per-resource errors.
//!
//! ### 3. The Engine ([`metrics`])
//! [`compute_metrics`](metrics::compute_metrics) holds the rules;
//! [`MetricsEngine`](metrics::MetricsEngine) reads orders and persists results.
//!
//! ### 4. The Operations ([`controller`])
//! [`OrderController`](controller::OrderController) and
//! [`VendorController`](controller::VendorController): what an HTTP or CLI
//! layer would call.
//!
//! ### 5. The Orchestrator ([`lifecycle`]) and [`config`]
//! [`ProcurementSystem`](lifecycle::ProcurementSystem) spawns and wires
//! everything; [`AppConfig`](config::AppConfig) sizes it and sets up logging.
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! VENDOR_SCORECARD_CONFIG=scorecard.toml cargo run
//! ```

pub mod clients;
pub mod config;
pub mod controller;
pub mod lifecycle;
pub mod metrics;
pub mod model;
pub mod performance_actor;
pub mod purchase_order_actor;
pub mod vendor_actor;
