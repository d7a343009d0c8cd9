// h2o-core/src/units.rs

use uom::si::f64::{
    MassDensity as UomMassDensity, Pressure as UomPressure,
    ThermodynamicTemperature as UomThermodynamicTemperature,
};

// Public canonical unit types (SI, f64)
pub type Density = UomMassDensity;
pub type Pressure = UomPressure;
pub type Temperature = UomThermodynamicTemperature;

/// Specific enthalpy [J/kg].
///
/// Kept as plain f64 alongside the uom quantities.
pub type SpecEnthalpy = f64;

/// Specific volume [m³/kg].
pub type SpecVolume = f64;

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
pub fn kg_m3(v: f64) -> Density {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Density::new::<kilogram_per_cubic_meter>(v)
}

/// Temperature in degrees Celsius.
#[inline]
pub fn to_celsius(t: Temperature) -> f64 {
    use uom::si::thermodynamic_temperature::degree_celsius;
    t.get::<degree_celsius>()
}

/// Pressure in kilopascal.
#[inline]
pub fn to_kilopascal(p: Pressure) -> f64 {
    use uom::si::pressure::kilopascal;
    p.get::<kilopascal>()
}

pub mod constants {
    /// Standard atmosphere [Pa].
    pub const ATMOSPHERIC_PRESSURE_PA: f64 = 101_325.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_smoke() {
        let _p = pa(101_325.0);
        let _t = k(300.0);
        let rho = kg_m3(999.8);
        assert_eq!(rho.value, 999.8);
    }

    #[test]
    fn celsius_offset() {
        assert!((to_celsius(k(273.15)) - 0.0).abs() < 1e-9);
        assert!((to_celsius(k(373.15)) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn kilopascal_scale() {
        assert!((to_kilopascal(pa(constants::ATMOSPHERIC_PRESSURE_PA)) - 101.325).abs() < 1e-9);
    }
}
