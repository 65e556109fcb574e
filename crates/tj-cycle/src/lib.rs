//! tj-cycle: closed-form jet-engine cycle relations.
//!
//! Provides:
//! - General relations (pressure ratio, temperature ratio, gas constant)
//! - International Standard Atmosphere temperature and pressure, 0 to 20 km
//! - Compressor inlet stagnation state, specific work, outlet temperature
//! - Combustion chamber fuel consumption, excess air factor, outlet pressure
//! - A name-addressable catalog over all of the above
//!
//! Every formula takes its parameters as one `impl Into<Args<N>>` value: a
//! tuple or array of positional scalars, or a slice/`Vec` bundle in the same
//! order. Both forms run through [`Args::unpack`] before the arithmetic and give
//! identical results.
//!
//! # Example
//!
//! ```
//! use tj_cycle::{atmosphere, compressor, general};
//!
//! let h = 11_000.0;
//! let t_h = atmosphere::standard_temperature(h).unwrap();
//! let p_h = atmosphere::standard_pressure(h).unwrap();
//!
//! let k = 1.4;
//! let r = general::individual_gas_constant(28.97).unwrap();
//! let t1 = compressor::temperature_one((t_h, k, 0.8)).unwrap();
//! let p1 = compressor::pressure_one((0.98, p_h, k, 0.8)).unwrap();
//!
//! let work = compressor::compressor_work([k, r, t1, 12.0, 0.86]).unwrap();
//! let t2 = compressor::temperature_two_fw(vec![t1, k, r, work]).unwrap();
//! assert!(t2 > t1);
//! assert!(p1 > p_h);
//! ```
//!
//! Degenerate inputs (zero denominators, `k = 1`) are not rejected: the result
//! is whatever IEEE arithmetic gives, usually `inf` or `NaN`. Only malformed
//! bundles and altitudes above 20000 m are reported as errors.

pub mod args;
pub mod atmosphere;
pub mod catalog;
pub mod combustion;
pub mod compressor;
pub mod error;
pub mod general;

#[cfg(test)]
mod testing;

// Re-exports for ergonomics
pub use args::Args;
pub use atmosphere::{IsaState, isa_state, standard_pressure, standard_temperature};
pub use catalog::{Formula, Namespace};
pub use combustion::{cumks, excess_air_factor, pressure_three, relative_fuel_consumption};
pub use compressor::{compressor_work, pressure_one, temperature_one, temperature_two_fw};
pub use error::{CycleError, CycleResult};
pub use general::{individual_gas_constant, pressure_ratio, temperature_ratio};
