//! Heat exchanger performance explorer.
//!
//! This module backs an interactive exchanger visualizer. It has two parts:
//!
//! - The thermal engine, [`compute_performance`], a pure function from a
//!   [`Configuration`] and [`Material`] to a [`PerformanceResult`]. It is also
//!   exposed as the [`twine_core::Model`] adapter [`ExchangerPerformance`].
//! - The [`ConfigurationStore`], which holds the current [`Snapshot`] and
//!   replaces it wholesale on every change.
//!
//! Presentation layers read snapshots and results; they never feed back into
//! the engine except through a new configuration.
//!
//! # Example
//!
//! ```
//! use twine_hx_explorer::models::thermal::exchanger::{
//!     ConfigurationChange, ConfigurationStore, MaterialKind,
//! };
//! use uom::si::{f64::MassRate, mass_rate::kilogram_per_second};
//!
//! let mut store = ConfigurationStore::default();
//! store.select_material(MaterialKind::Steel.material());
//! store.update(ConfigurationChange::new().mass_flow_rate(MassRate::new::<kilogram_per_second>(80.0)));
//!
//! let fouled = store.performance().unwrap();
//! store.clean_system();
//! let clean = store.performance().unwrap();
//!
//! assert!(fouled.efficiency_percent() < 100.0);
//! assert_eq!(clean.efficiency_percent(), 100.0);
//! ```

mod core;
mod store;

pub use self::core::{
    Configuration, ConfigurationChange, DomainError, ExchangerModel, Field, Material,
    MaterialKind, OperatingRange, OperatingRanges, PROFILE_POINTS, PerformanceResult,
    ProfileSample, SceneGeometry, Snapshot, TemperatureProfile, UnknownMaterial,
    compute_performance,
};
pub use store::ConfigurationStore;

use twine_core::Model;

/// [`twine_core::Model`] adapter for the thermal engine.
///
/// The input is a full [`Snapshot`]; the adapter delegates to
/// [`compute_performance`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ExchangerPerformance;

impl Model for ExchangerPerformance {
    type Input = Snapshot;
    type Output = PerformanceResult;
    type Error = DomainError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        compute_performance(&input.configuration, &input.material)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::ThermalConductivity, thermal_conductivity::watt_per_meter_kelvin};

    #[test]
    fn model_matches_engine() {
        let snapshot = Snapshot::new(Configuration::default(), MaterialKind::Glass.material());
        let via_model = ExchangerPerformance.call(&snapshot).unwrap();
        let direct = compute_performance(&snapshot.configuration, &snapshot.material).unwrap();
        assert_eq!(via_model, direct);
    }

    #[test]
    fn model_refuses_invalid_material() {
        let snapshot = Snapshot::new(
            Configuration::default(),
            Material::new(
                "Broken",
                ThermalConductivity::new::<watt_per_meter_kelvin>(-3.0),
                "#ff0000",
            ),
        );
        let err = ExchangerPerformance.call(&snapshot).unwrap_err();
        assert_eq!(err.field(), Some(Field::ThermalConductivity));
    }
}
