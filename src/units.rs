#![allow(non_upper_case_globals)]
#![allow(non_snake_case)]
#![allow(non_camel_case_types)]
#![allow(clippy::upper_case_acronyms)]

// f32 quantities with the charger's native milliampere base.
ISQ!(
    uom::si,
    f32,
    (
        millimeter,
        kilogram,
        second,
        milliampere,
        kelvin,
        mole,
        candela
    )
);

#[cfg(test)]
mod tests {
    use super::{ElectricCurrent, ElectricPotential, Ratio, ThermodynamicTemperature};
    use approx::assert_relative_eq;
    use uom::si::{
        electric_current::{ampere, milliampere},
        electric_potential::{millivolt, volt},
        ratio::percent,
        thermodynamic_temperature::{degree_celsius, kelvin},
    };

    #[test]
    fn test_units() {
        let current = ElectricCurrent::new::<milliampere>(1500.0);
        let potential = ElectricPotential::new::<millivolt>(16800.0);
        let ts = Ratio::new::<percent>(48.4);
        let die = ThermodynamicTemperature::new::<degree_celsius>(25.0);

        assert_relative_eq!(current.get::<ampere>(), 1.5);
        assert_relative_eq!(potential.get::<volt>(), 16.8);
        assert_relative_eq!(ts.get::<percent>(), 48.4, epsilon = 1e-4);
        assert_relative_eq!(die.get::<kelvin>(), 298.15, epsilon = 1e-3);
    }
}
