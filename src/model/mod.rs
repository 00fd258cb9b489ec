//! Domain models and their DTOs.

pub mod performance;
pub mod purchase_order;
pub mod vendor;

pub use performance::*;
pub use purchase_order::*;
pub use vendor::*;
