//! International Standard Atmosphere (ISA) by geopotential altitude.
//!
//! Two bands are modelled:
//!
//! ```text
//! h < 11000 m            T = 288.15 - 0.0065·h
//!                        p = 101325·(1 - h/44300)^5.256
//! 11000 m <= h <= 20000  T = 216.65
//!                        p = 22064·exp((h - 11000)/6340)
//! h > 20000 m            AltitudeOutOfRange
//! ```
//!
//! Altitudes below sea level are not rejected: the tropospheric relations are
//! extrapolated linearly. A `NaN` altitude belongs to no band and is reported
//! as out of range.

use serde::Serialize;
use tj_core::Real;
use tj_core::constants::{ISA_P0_PA, ISA_T0_K};
use tj_core::units::{Length, Pressure, Temperature, k, pa};

use crate::args::Args;
use crate::error::{CycleError, CycleResult};

/// Lower boundary of the isothermal band [m].
pub const TROPOPAUSE_ALTITUDE_M: Real = 11_000.0;

/// Highest altitude the model accepts [m].
pub const MAX_ALTITUDE_M: Real = 20_000.0;

/// Temperature lapse rate in the troposphere [K/m].
const LAPSE_RATE_K_PER_M: Real = 0.0065;

/// Static temperature of the isothermal band [K].
const TROPOPAUSE_T_K: Real = 216.65;

/// Static pressure at the tropopause boundary [Pa].
const TROPOPAUSE_P_PA: Real = 22_064.0;

enum Band {
    Troposphere,
    Stratosphere,
}

fn band(altitude: Real) -> CycleResult<Band> {
    if altitude < TROPOPAUSE_ALTITUDE_M {
        Ok(Band::Troposphere)
    } else if (TROPOPAUSE_ALTITUDE_M..=MAX_ALTITUDE_M).contains(&altitude) {
        Ok(Band::Stratosphere)
    } else {
        tracing::debug!(altitude, "altitude outside ISA model range");
        Err(CycleError::AltitudeOutOfRange {
            altitude,
            max: MAX_ALTITUDE_M,
        })
    }
}

/// ISA static temperature [K] at altitude `h` [m].
///
/// # Errors
/// `AltitudeOutOfRange` above 20000 m.
pub fn standard_temperature<'a>(args: impl Into<Args<'a, 1>>) -> CycleResult<Real> {
    let [h] = args.into().unpack("standard_temperature")?;
    Ok(match band(h)? {
        Band::Troposphere => ISA_T0_K - LAPSE_RATE_K_PER_M * h,
        Band::Stratosphere => TROPOPAUSE_T_K,
    })
}

/// ISA static pressure [Pa] at altitude `h` [m].
///
/// # Errors
/// `AltitudeOutOfRange` above 20000 m.
pub fn standard_pressure<'a>(args: impl Into<Args<'a, 1>>) -> CycleResult<Real> {
    let [h] = args.into().unpack("standard_pressure")?;
    Ok(match band(h)? {
        Band::Troposphere => ISA_P0_PA * (1.0 - h / 44_300.0).powf(5.256),
        Band::Stratosphere => TROPOPAUSE_P_PA * ((h - TROPOPAUSE_ALTITUDE_M) / 6_340.0).exp(),
    })
}

/// ISA static state at one altitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IsaState {
    pub altitude: Length,
    pub temperature: Temperature,
    pub pressure: Pressure,
}

/// Evaluate both ISA relations for a unit-carrying altitude.
pub fn isa_state(altitude: Length) -> CycleResult<IsaState> {
    let h = altitude.value;
    Ok(IsaState {
        altitude,
        temperature: k(standard_temperature(h)?),
        pressure: pa(standard_pressure(h)?),
    })
}
