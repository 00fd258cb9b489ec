//! Type-safe wrappers around [`ResourceClient`](actor_framework::ResourceClient).
//!
//! Each client maps [`FrameworkError`](actor_framework::FrameworkError) into its
//! resource's error enum, recovering typed entity errors where present.

pub mod performance_client;
pub mod purchase_order_client;
pub mod vendor_client;

pub use performance_client::*;
pub use purchase_order_client::*;
pub use vendor_client::*;
