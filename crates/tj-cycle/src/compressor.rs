//! Compressor inlet state, specific work and outlet temperature.
//!
//! ## Model
//!
//! Inlet stagnation state from flight Mach number `M` and isentropic exponent `k`:
//!
//! ```text
//! T1 = T·(1 + (k-1)/2·M²)
//! p1 = σ_in·p_H·(1 + (k-1)/2·M²)^(k/(k-1))
//! ```
//!
//! Specific work with isentropic efficiency `η` and pressure ratio `π`:
//!
//! ```text
//! L  = k·R/(k-1)·T1·(π^((k-1)/k) - 1)/η
//! T2 = T1 + L·(k-1)/(k·R)
//! ```
//!
//! The formulas are undefined for `k = 1`, `η = 0` and `k·R = 0`. Those inputs
//! are not rejected; the result comes out as `inf` or `NaN`. The ram pressure
//! term is evaluated as `exp(k/(k-1)·ln(ram))`, so `k = 1` gives `NaN`.

use tj_core::Real;

use crate::args::Args;
use crate::error::CycleResult;

/// Ram temperature factor `1 + (k-1)/2·M²`.
fn ram_factor(k: Real, mach: Real) -> Real {
    1.0 + (k - 1.0) / 2.0 * mach.powi(2)
}

/// Stagnation temperature at the compressor inlet [K].
///
/// Parameters, in order: static temperature `T` [K], isentropic exponent `k`,
/// Mach number `M`.
pub fn temperature_one<'a>(args: impl Into<Args<'a, 3>>) -> CycleResult<Real> {
    let [t, k, mach] = args.into().unpack("temperature_one")?;
    Ok(t * ram_factor(k, mach))
}

/// Stagnation pressure at the compressor inlet [Pa].
///
/// Parameters, in order: inlet pressure recovery ratio, ISA static pressure [Pa],
/// isentropic exponent `k`, Mach number `M`.
pub fn pressure_one<'a>(args: impl Into<Args<'a, 4>>) -> CycleResult<Real> {
    let [inlet_ratio, p_isa, k, mach] = args.into().unpack("pressure_one")?;
    Ok(inlet_ratio * p_isa * (k / (k - 1.0) * ram_factor(k, mach).ln()).exp())
}

/// Specific compressor work [J/kg].
///
/// Parameters, in order: isentropic exponent `k`, gas constant `R` [J/(kg·K)],
/// inlet temperature `T1` [K], compressor pressure ratio, efficiency.
pub fn compressor_work<'a>(args: impl Into<Args<'a, 5>>) -> CycleResult<Real> {
    let [k, r, t1, compressor_ratio, efficiency] = args.into().unpack("compressor_work")?;
    Ok((k * r / (k - 1.0)) * t1 * ((compressor_ratio.powf((k - 1.0) / k) - 1.0) / efficiency))
}

/// Compressor outlet temperature [K] from inlet temperature and work input.
///
/// Parameters, in order: inlet temperature `T1` [K], isentropic exponent `k`,
/// gas constant `R` [J/(kg·K)], specific work `L` [J/kg].
pub fn temperature_two_fw<'a>(args: impl Into<Args<'a, 4>>) -> CycleResult<Real> {
    let [t1, k, r, work] = args.into().unpack("temperature_two_fw")?;
    Ok(t1 + work * ((k - 1.0) / (k * r)))
}
