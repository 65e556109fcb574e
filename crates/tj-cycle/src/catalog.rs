//! Name-addressable catalog over every formula.
//!
//! Lets callers that only have a formula name and a run-time bundle of values
//! (the CLI, scripted batch evaluation) reach the same functions the typed API
//! exposes.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tj_core::Real;

use crate::error::{CycleError, CycleResult};
use crate::{atmosphere, combustion, compressor, general};

/// Group a formula belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Namespace {
    General,
    StandardAtmosphere,
    Compressor,
    CombustionChamber,
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::General => "General",
            Self::StandardAtmosphere => "StandardAtmosphere",
            Self::Compressor => "Compressor",
            Self::CombustionChamber => "CombustionChamber",
        })
    }
}

/// Every formula in the library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Formula {
    PressureRatio,
    TemperatureRatio,
    IndividualGasConstant,
    StandardTemperature,
    StandardPressure,
    TemperatureOne,
    PressureOne,
    CompressorWork,
    TemperatureTwoFw,
    Cumks,
    RelativeFuelConsumption,
    ExcessAirFactor,
    PressureThree,
}

impl Formula {
    pub const ALL: [Formula; 13] = [
        Formula::PressureRatio,
        Formula::TemperatureRatio,
        Formula::IndividualGasConstant,
        Formula::StandardTemperature,
        Formula::StandardPressure,
        Formula::TemperatureOne,
        Formula::PressureOne,
        Formula::CompressorWork,
        Formula::TemperatureTwoFw,
        Formula::Cumks,
        Formula::RelativeFuelConsumption,
        Formula::ExcessAirFactor,
        Formula::PressureThree,
    ];

    /// Function name, as exported by the library.
    pub fn name(self) -> &'static str {
        match self {
            Self::PressureRatio => "pressure_ratio",
            Self::TemperatureRatio => "temperature_ratio",
            Self::IndividualGasConstant => "individual_gas_constant",
            Self::StandardTemperature => "standard_temperature",
            Self::StandardPressure => "standard_pressure",
            Self::TemperatureOne => "temperature_one",
            Self::PressureOne => "pressure_one",
            Self::CompressorWork => "compressor_work",
            Self::TemperatureTwoFw => "temperature_two_fw",
            Self::Cumks => "cumks",
            Self::RelativeFuelConsumption => "relative_fuel_consumption",
            Self::ExcessAirFactor => "excess_air_factor",
            Self::PressureThree => "pressure_three",
        }
    }

    pub fn namespace(self) -> Namespace {
        match self {
            Self::PressureRatio | Self::TemperatureRatio | Self::IndividualGasConstant => {
                Namespace::General
            }
            Self::StandardTemperature | Self::StandardPressure => Namespace::StandardAtmosphere,
            Self::TemperatureOne
            | Self::PressureOne
            | Self::CompressorWork
            | Self::TemperatureTwoFw => Namespace::Compressor,
            Self::Cumks
            | Self::RelativeFuelConsumption
            | Self::ExcessAirFactor
            | Self::PressureThree => Namespace::CombustionChamber,
        }
    }

    /// Declared parameter names, in bundle order.
    pub fn params(self) -> &'static [&'static str] {
        match self {
            Self::PressureRatio => &["p1", "p2"],
            Self::TemperatureRatio => &["t1", "t2"],
            Self::IndividualGasConstant => &["molar_mass"],
            Self::StandardTemperature | Self::StandardPressure => &["altitude"],
            Self::TemperatureOne => &["t", "k", "mach"],
            Self::PressureOne => &["inlet_ratio", "p_isa", "k", "mach"],
            Self::CompressorWork => &["k", "r", "t1", "compressor_ratio", "efficiency"],
            Self::TemperatureTwoFw => &["t1", "k", "r", "work"],
            Self::Cumks => &["t2", "t3"],
            Self::RelativeFuelConsumption => &["cumks", "t3", "t2", "heat_release_coeff", "wd"],
            Self::ExcessAirFactor => &["tau", "l_theoretical"],
            Self::PressureThree => &["p2", "chamber_ratio"],
        }
    }

    pub fn arity(self) -> usize {
        self.params().len()
    }

    /// Evaluate with a run-time bundle.
    ///
    /// # Errors
    /// `Arity` for a bundle of the wrong length, `AltitudeOutOfRange` from the
    /// atmosphere relations.
    pub fn eval(self, values: &[Real]) -> CycleResult<Real> {
        tracing::debug!(formula = self.name(), ?values, "evaluating formula");
        let value = match self {
            Self::PressureRatio => general::pressure_ratio(values),
            Self::TemperatureRatio => general::temperature_ratio(values),
            Self::IndividualGasConstant => general::individual_gas_constant(values),
            Self::StandardTemperature => atmosphere::standard_temperature(values),
            Self::StandardPressure => atmosphere::standard_pressure(values),
            Self::TemperatureOne => compressor::temperature_one(values),
            Self::PressureOne => compressor::pressure_one(values),
            Self::CompressorWork => compressor::compressor_work(values),
            Self::TemperatureTwoFw => compressor::temperature_two_fw(values),
            Self::Cumks => combustion::cumks(values),
            Self::RelativeFuelConsumption => combustion::relative_fuel_consumption(values),
            Self::ExcessAirFactor => combustion::excess_air_factor(values),
            Self::PressureThree => combustion::pressure_three(values),
        }?;
        if !value.is_finite() {
            tracing::warn!(formula = self.name(), value, "formula produced a non-finite result");
        }
        Ok(value)
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Formula {
    type Err = CycleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Formula::ALL
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CycleError::UnknownFormula {
                name: wanted.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for f in Formula::ALL {
            assert_eq!(f.name().parse::<Formula>().unwrap(), f);
            assert_eq!(f.to_string(), f.name());
        }
        assert_eq!(
            " Pressure_Ratio ".parse::<Formula>().unwrap(),
            Formula::PressureRatio
        );
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "thrust".parse::<Formula>().unwrap_err();
        assert_eq!(
            err,
            CycleError::UnknownFormula {
                name: "thrust".into()
            }
        );
    }

    #[test]
    fn namespace_sizes() {
        let count = |ns: Namespace| Formula::ALL.iter().filter(|f| f.namespace() == ns).count();
        assert_eq!(count(Namespace::General), 3);
        assert_eq!(count(Namespace::StandardAtmosphere), 2);
        assert_eq!(count(Namespace::Compressor), 4);
        assert_eq!(count(Namespace::CombustionChamber), 4);
    }

    #[test]
    fn eval_rejects_every_wrong_length() {
        for f in Formula::ALL {
            let too_long = vec![1.0; f.arity() + 1];
            match f.eval(&too_long) {
                Err(CycleError::Arity { expected, got, .. }) => {
                    assert_eq!(expected, f.arity());
                    assert_eq!(got, f.arity() + 1);
                }
                other => panic!("{f}: expected arity error, got {other:?}"),
            }
        }
    }

    #[test]
    fn eval_accepts_declared_arity() {
        // 1000 m is inside the ISA range, and all-ones inputs are fine elsewhere
        for f in Formula::ALL {
            let values = vec![1000.0; f.arity()];
            assert!(f.eval(&values).is_ok(), "{f} failed with {values:?}");
        }
    }

    #[test]
    fn eval_dispatches_to_the_named_function() {
        assert_eq!(
            Formula::PressureRatio.eval(&[2.0, 5.0]).unwrap(),
            general::pressure_ratio((2.0, 5.0)).unwrap()
        );
        assert_eq!(Formula::StandardTemperature.eval(&[0.0]).unwrap(), 288.15);
        assert!(Formula::StandardPressure.eval(&[25_000.0]).is_err());
        assert_eq!(
            Formula::ExcessAirFactor.eval(&[0.05, 14.3]).unwrap(),
            combustion::excess_air_factor((0.05, 14.3)).unwrap()
        );
    }

    #[test]
    fn non_finite_results_are_returned_unchanged() {
        assert_eq!(
            Formula::ExcessAirFactor.eval(&[0.0, 14.3]).unwrap(),
            Real::INFINITY
        );
    }
}
