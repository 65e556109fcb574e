//! Combustion chamber relations.
//!
//! `cumks`, `Wd` and `l_theoretical` are empirical coefficients whose physical
//! units are not established. The relations are kept exactly as given and the
//! names are not reinterpreted.

use tj_core::Real;

use crate::args::Args;
use crate::error::CycleResult;

/// Empirical mean heat-capacity-like coefficient `cumks`.
///
/// `1000·(0.9089 + 0.0002095·(T3 + 0.48·T2))`
///
/// Parameters, in order: chamber inlet temperature `T2` [K], chamber outlet
/// temperature `T3` [K].
pub fn cumks<'a>(args: impl Into<Args<'a, 2>>) -> CycleResult<Real> {
    let [t2, t3] = args.into().unpack("cumks")?;
    Ok(1000.0 * (0.9089 + 0.0002095 * (t3 + 0.48 * t2)))
}

/// Relative fuel consumption `τ = c·(T3 - T2)/(ξ·Wd)`.
///
/// Parameters, in order: `cumks` coefficient, outlet temperature `T3` [K],
/// inlet temperature `T2` [K], heat release coefficient `ξ`, `Wd`.
pub fn relative_fuel_consumption<'a>(args: impl Into<Args<'a, 5>>) -> CycleResult<Real> {
    let [c, t3, t2, heat_release_coeff, wd] =
        args.into().unpack("relative_fuel_consumption")?;
    Ok(c * ((t3 - t2) / (heat_release_coeff * wd)))
}

/// Excess air factor `α = 1/(τ·L_t)`.
///
/// Parameters, in order: relative fuel consumption `τ`, theoretical air
/// requirement `L_t`. Either being zero gives `inf`.
pub fn excess_air_factor<'a>(args: impl Into<Args<'a, 2>>) -> CycleResult<Real> {
    let [tau, l_theoretical] = args.into().unpack("excess_air_factor")?;
    Ok(1.0 / (tau * l_theoretical))
}

/// Chamber outlet (turbine inlet) pressure `p3 = p2·σ_cc` [Pa].
///
/// Parameters, in order: chamber inlet pressure `p2` [Pa], chamber pressure ratio.
pub fn pressure_three<'a>(args: impl Into<Args<'a, 2>>) -> CycleResult<Real> {
    let [p2, chamber_ratio] = args.into().unpack("pressure_three")?;
    Ok(p2 * chamber_ratio)
}
