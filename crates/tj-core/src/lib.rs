//! tj-core: shared foundation for the turbojet formula crates.
//!
//! Contains:
//! - units (uom SI types + constructors + physical constants)
//! - numeric (Real + input finiteness checks)
//! - error (input boundary error)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::TjError;
pub use numeric::*;
pub use units::*;
