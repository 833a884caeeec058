//! Slider bounds for the operating parameters.
//!
//! The engine and store never clamp. These bounds exist so controls can
//! constrain what they emit.

use uom::{
    ConstZero,
    si::{
        f64::{Area, MassRate, ThermodynamicTemperature},
        area::square_meter,
        mass_rate::kilogram_per_second,
        thermodynamic_temperature::degree_celsius,
    },
};

use crate::support::units::{FoulingResistance, fouling_resistance};

use super::Configuration;

/// Closed interval `[min, max]` for one parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatingRange<Q> {
    pub min: Q,
    pub max: Q,
}

impl<Q: PartialOrd + Copy> OperatingRange<Q> {
    #[must_use]
    pub fn new(min: Q, max: Q) -> Self {
        Self { min, max }
    }

    /// Returns `true` if `min ≤ value ≤ max`.
    #[must_use]
    pub fn contains(&self, value: Q) -> bool {
        self.min <= value && value <= self.max
    }

    /// Pulls `value` back into the interval.
    ///
    /// Values that do not compare (`NaN`) are returned unchanged.
    #[must_use]
    pub fn clamp(&self, value: Q) -> Q {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }
}

/// Bounds for every operating parameter a control can change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatingRanges {
    pub inlet_temperature: OperatingRange<ThermodynamicTemperature>,
    pub mass_flow_rate: OperatingRange<MassRate>,
    pub area: OperatingRange<Area>,
    pub fouling_factor: OperatingRange<FoulingResistance>,
}

impl Default for OperatingRanges {
    fn default() -> Self {
        Self {
            inlet_temperature: OperatingRange::new(
                ThermodynamicTemperature::new::<degree_celsius>(40.0),
                ThermodynamicTemperature::new::<degree_celsius>(150.0),
            ),
            mass_flow_rate: OperatingRange::new(
                MassRate::new::<kilogram_per_second>(5.0),
                MassRate::new::<kilogram_per_second>(100.0),
            ),
            area: OperatingRange::new(
                Area::new::<square_meter>(1.0),
                Area::new::<square_meter>(50.0),
            ),
            fouling_factor: OperatingRange::new(FoulingResistance::ZERO, fouling_resistance(0.01)),
        }
    }
}

impl OperatingRanges {
    /// Returns `true` if every operating parameter of `config` is in range.
    #[must_use]
    pub fn contains(&self, config: &Configuration) -> bool {
        self.inlet_temperature.contains(config.inlet_temperature)
            && self.mass_flow_rate.contains(config.mass_flow_rate)
            && self.area.contains(config.area)
            && self.fouling_factor.contains(config.fouling_factor)
    }

    /// Returns `config` with every operating parameter clamped into range.
    ///
    /// Presentation-only fields are left as they are.
    #[must_use]
    pub fn clamp(&self, config: Configuration) -> Configuration {
        Configuration {
            inlet_temperature: self.inlet_temperature.clamp(config.inlet_temperature),
            mass_flow_rate: self.mass_flow_rate.clamp(config.mass_flow_rate),
            area: self.area.clamp(config.area),
            fouling_factor: self.fouling_factor.clamp(config.fouling_factor),
            ..config
        }
    }
}
