use uom::si::{
    f64::{Area, MassRate, ThermodynamicTemperature},
    area::square_meter,
    mass_rate::kilogram_per_second,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::units::fouling_resistance;

use super::{Configuration, ExchangerModel, Material, MaterialKind};

/// Builds a configuration from plain numbers in the slider units.
pub(super) fn config(
    inlet_celsius: f64,
    flow_kg_per_s: f64,
    area_m2: f64,
    fouling_m2_k_per_w: f64,
) -> Configuration {
    Configuration {
        model: ExchangerModel::ShellTube,
        inlet_temperature: ThermodynamicTemperature::new::<degree_celsius>(inlet_celsius),
        mass_flow_rate: MassRate::new::<kilogram_per_second>(flow_kg_per_s),
        area: Area::new::<square_meter>(area_m2),
        fouling_factor: fouling_resistance(fouling_m2_k_per_w),
        ..Configuration::default()
    }
}

/// Copper at 25 kg/s, 15 m², 90 °C inlet, 0.0005 m²·K/W fouling.
pub(super) fn copper_reference() -> (Configuration, Material) {
    (config(90.0, 25.0, 15.0, 0.0005), MaterialKind::Copper.material())
}
