//! Operating point and presentation selectors for the exchanger.

use std::fmt;

use uom::{
    ConstZero,
    si::{
        f64::{Area, Length, MassRate, ThermodynamicTemperature},
        area::square_meter,
        length::meter,
        mass_rate::kilogram_per_second,
        ratio::ratio,
        thermodynamic_temperature::degree_celsius,
    },
};

use crate::support::units::{FoulingResistance, fouling_resistance};

use super::Material;

/// Exchanger geometry shown in the 3D scene.
///
/// This selector only changes what is drawn. The thermal engine never reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExchangerModel {
    DoublePipe,
    #[default]
    ShellTube,
    Plate,
    Finned,
    Spiral,
}

impl ExchangerModel {
    /// Every model, in selector order.
    pub const ALL: [Self; 5] = [
        Self::DoublePipe,
        Self::ShellTube,
        Self::Plate,
        Self::Finned,
        Self::Spiral,
    ];

    /// Human-readable label for selectors and legends.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::DoublePipe => "Double Pipe",
            Self::ShellTube => "Shell & Tube",
            Self::Plate => "Plate",
            Self::Finned => "Finned Tube",
            Self::Spiral => "Spiral",
        }
    }
}

impl fmt::Display for ExchangerModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The current operating point of the exchanger.
///
/// A `Configuration` is a plain value. Changes produce a new value through
/// [`Configuration::with`] or [`Configuration::cleaned`], never by mutating a
/// shared record, so consumers can detect changes by comparing snapshots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Configuration {
    /// Geometry selector for presentation.
    pub model: ExchangerModel,

    /// Hot stream inlet temperature.
    pub inlet_temperature: ThermodynamicTemperature,

    /// Hot stream mass flow rate.
    pub mass_flow_rate: MassRate,

    /// Heat transfer area.
    pub area: Area,

    /// Added thermal resistance from deposits on the transfer surface.
    pub fouling_factor: FoulingResistance,

    /// Drawn length of the exchanger body.
    pub component_length: Length,

    /// Drawn radius of the exchanger body.
    pub component_radius: Length,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            model: ExchangerModel::ShellTube,
            inlet_temperature: ThermodynamicTemperature::new::<degree_celsius>(90.0),
            mass_flow_rate: MassRate::new::<kilogram_per_second>(25.0),
            area: Area::new::<square_meter>(15.0),
            fouling_factor: fouling_resistance(0.0005),
            component_length: Length::new::<meter>(4.0),
            component_radius: Length::new::<meter>(0.5),
        }
    }
}

impl Configuration {
    /// Returns a new configuration with every `Some` field of `change` applied.
    ///
    /// No range checks are made here. Controls clamp values before they
    /// reach the configuration (see [`OperatingRanges`](super::OperatingRanges)).
    #[must_use]
    pub fn with(self, change: ConfigurationChange) -> Self {
        Self {
            model: change.model.unwrap_or(self.model),
            inlet_temperature: change.inlet_temperature.unwrap_or(self.inlet_temperature),
            mass_flow_rate: change.mass_flow_rate.unwrap_or(self.mass_flow_rate),
            area: change.area.unwrap_or(self.area),
            fouling_factor: change.fouling_factor.unwrap_or(self.fouling_factor),
            component_length: change.component_length.unwrap_or(self.component_length),
            component_radius: change.component_radius.unwrap_or(self.component_radius),
        }
    }

    /// Returns a copy with the fouling resistance removed.
    #[must_use]
    pub fn cleaned(self) -> Self {
        Self {
            fouling_factor: FoulingResistance::ZERO,
            ..self
        }
    }

    /// Geometry-scaling values for the 3D scene.
    #[must_use]
    pub fn scene_geometry(&self) -> SceneGeometry {
        let area_ratio = (self.area / reference_scene_area()).get::<ratio>();
        SceneGeometry {
            length: self.component_length,
            radius: self.component_radius,
            area_scale: area_ratio.max(0.0).sqrt(),
        }
    }
}

/// Area drawn at unit scale.
fn reference_scene_area() -> Area {
    Area::new::<square_meter>(15.0)
}

/// A partial change to a [`Configuration`].
///
/// Each control event sets the fields it owns and leaves the rest as `None`.
///
/// ```
/// use twine_hx_explorer::models::thermal::exchanger::{Configuration, ConfigurationChange};
/// use uom::si::{f64::MassRate, mass_rate::kilogram_per_second};
///
/// let before = Configuration::default();
/// let after = before.with(
///     ConfigurationChange::new().mass_flow_rate(MassRate::new::<kilogram_per_second>(60.0)),
/// );
///
/// assert_eq!(after.mass_flow_rate.get::<kilogram_per_second>(), 60.0);
/// assert_eq!(after.area, before.area);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ConfigurationChange {
    pub model: Option<ExchangerModel>,
    pub inlet_temperature: Option<ThermodynamicTemperature>,
    pub mass_flow_rate: Option<MassRate>,
    pub area: Option<Area>,
    pub fouling_factor: Option<FoulingResistance>,
    pub component_length: Option<Length>,
    pub component_radius: Option<Length>,
}

impl ConfigurationChange {
    /// An empty change.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn model(self, model: ExchangerModel) -> Self {
        Self {
            model: Some(model),
            ..self
        }
    }

    #[must_use]
    pub fn inlet_temperature(self, inlet_temperature: ThermodynamicTemperature) -> Self {
        Self {
            inlet_temperature: Some(inlet_temperature),
            ..self
        }
    }

    #[must_use]
    pub fn mass_flow_rate(self, mass_flow_rate: MassRate) -> Self {
        Self {
            mass_flow_rate: Some(mass_flow_rate),
            ..self
        }
    }

    #[must_use]
    pub fn area(self, area: Area) -> Self {
        Self {
            area: Some(area),
            ..self
        }
    }

    #[must_use]
    pub fn fouling_factor(self, fouling_factor: FoulingResistance) -> Self {
        Self {
            fouling_factor: Some(fouling_factor),
            ..self
        }
    }

    #[must_use]
    pub fn component_length(self, component_length: Length) -> Self {
        Self {
            component_length: Some(component_length),
            ..self
        }
    }

    #[must_use]
    pub fn component_radius(self, component_radius: Length) -> Self {
        Self {
            component_radius: Some(component_radius),
            ..self
        }
    }
}

/// Geometry-scaling values read by the 3D scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneGeometry {
    pub length: Length,
    pub radius: Length,

    /// Linear scale derived from the transfer area; `1.0` at 15 m².
    pub area_scale: f64,
}

/// A configuration together with the selected material.
///
/// This is the complete input to the thermal engine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Snapshot {
    pub configuration: Configuration,
    pub material: Material,
}

impl Snapshot {
    #[must_use]
    pub fn new(configuration: Configuration, material: Material) -> Self {
        Self {
            configuration,
            material,
        }
    }
}
