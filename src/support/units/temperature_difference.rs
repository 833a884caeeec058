use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin as abs_kelvin,
};

/// Extension trait for subtracting absolute temperatures.
///
/// [`uom`] does not define `ThermodynamicTemperature - ThermodynamicTemperature`
/// as a [`TemperatureInterval`], which is what a driving temperature
/// difference needs to be. See
/// [#380](https://github.com/iliekturtles/uom/issues/380).
pub trait TemperatureDifference {
    /// Returns the temperature difference `self - other`.
    fn minus(self, other: Self) -> TemperatureInterval;
}

impl TemperatureDifference for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(
            self.get::<abs_kelvin>() - other.get::<abs_kelvin>(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        temperature_interval::degree_celsius as delta_celsius,
        thermodynamic_temperature::degree_celsius,
    };

    #[test]
    fn approach_between_inlets() {
        let hot_in = ThermodynamicTemperature::new::<degree_celsius>(90.0);
        let cold_in = ThermodynamicTemperature::new::<degree_celsius>(25.0);

        assert_relative_eq!(
            hot_in.minus(cold_in).get::<delta_celsius>(),
            65.0,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            cold_in.minus(hot_in).get::<delta_kelvin>(),
            -65.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn equal_temperatures_have_no_difference() {
        let t = ThermodynamicTemperature::new::<degree_celsius>(40.0);
        assert_eq!(t.minus(t), TemperatureInterval::new::<delta_kelvin>(0.0));
    }
}
