//! Basic relations across any engine component.

use tj_core::Real;
use tj_core::constants::R_UNIVERSAL;

use crate::args::Args;
use crate::error::CycleResult;

/// Compression ratio across a component: `p2 / p1`.
///
/// Parameters, in order: upstream pressure `p1` [Pa], downstream pressure `p2` [Pa].
/// `p1 = 0` yields `inf` or `NaN`.
pub fn pressure_ratio<'a>(args: impl Into<Args<'a, 2>>) -> CycleResult<Real> {
    let [p1, p2] = args.into().unpack("pressure_ratio")?;
    Ok(p2 / p1)
}

/// Heating ratio across a component: `t2 / t1`.
///
/// Parameters, in order: upstream temperature `t1` [K], downstream temperature `t2` [K].
pub fn temperature_ratio<'a>(args: impl Into<Args<'a, 2>>) -> CycleResult<Real> {
    let [t1, t2] = args.into().unpack("temperature_ratio")?;
    Ok(t2 / t1)
}

/// Individual gas constant `R = 8314.7 / M` [J/(kg·K)] for molar mass `M` [kg/kmol].
pub fn individual_gas_constant<'a>(args: impl Into<Args<'a, 1>>) -> CycleResult<Real> {
    let [molar_mass] = args.into().unpack("individual_gas_constant")?;
    Ok(R_UNIVERSAL / molar_mass)
}
