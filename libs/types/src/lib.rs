//! Types library for the terminal backend
//!
//! Provides the core value types shared between the market core and its
//! HTTP surface, ensuring type safety and deterministic decimal behavior.
//!
//! # Modules
//! - `numeric`: Fixed-point decimal types (Price, Quantity)
//! - `errors`: Error taxonomy

pub mod errors;
pub mod numeric;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::errors::*;
    pub use crate::numeric::*;
}
