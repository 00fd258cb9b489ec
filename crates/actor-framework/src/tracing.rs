//! # Observability & Tracing
//!
//! Initializes structured logging for every actor in the process.
//!
//! Actors log their lifecycle (start, shutdown with final store size) and every
//! operation with `entity_type` and `id` as structured fields. Client wrappers
//! add `#[instrument]` spans, so a controller call shows up as one hierarchy:
//!
//! ```text
//! INFO create_order: Created entity_type="PurchaseOrder" id=po_1 size=1
//! INFO create_order:recompute: Vendor metrics recomputed vendor=vendor_1 completed=1
//! INFO create_order:recompute: Action ok entity_type="Vendor" id=vendor_1
//! ```
//!
//! `RUST_LOG` always wins over the configured default level:
//!
//! ```bash
//! RUST_LOG=debug cargo run                        # full payloads
//! RUST_LOG=vendor_scorecard=debug,info cargo run  # debug for the app only
//! ```

use serde::Deserialize;
use tracing_subscriber::EnvFilter;

/// Output format of the fmt subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Spans shown inline (e.g. `create_order:recompute`).
    #[default]
    Compact,
    /// Multi-line, human-oriented output.
    Pretty,
    /// One JSON object per event, for log shippers.
    Json,
}

/// Installs the global tracing subscriber.
///
/// `default_level` is used only when `RUST_LOG` is unset or invalid. Fails if a
/// global subscriber is already installed.
pub fn setup_tracing(
    default_level: &str,
    format: LogFormat,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false); // entity_type carries the context instead

    match format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Json => builder.json().try_init(),
    }
}
