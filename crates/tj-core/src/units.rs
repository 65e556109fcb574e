// tj-core/src/units.rs

use uom::si::f64::{
    Length as UomLength, Pressure as UomPressure,
    ThermodynamicTemperature as UomThermodynamicTemperature,
};

// Public canonical unit types (SI, f64)
pub type Length = UomLength;
pub type Pressure = UomPressure;
pub type Temperature = UomThermodynamicTemperature;

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

pub mod constants {
    /// Universal gas constant [J/(kmol·K)], as used by the gas-constant relation.
    pub const R_UNIVERSAL: f64 = 8314.7;

    /// ISA sea-level static temperature [K].
    pub const ISA_T0_K: f64 = 288.15;

    /// ISA sea-level static pressure [Pa].
    pub const ISA_P0_PA: f64 = 101_325.0;
}
