//! Thermal performance engine for the exchanger explorer.
//!
//! The engine rates a single-pass exchanger from its wall material and
//! operating point using a simplified proportionality model:
//!
//! 1. `U₀ = (k / 0.05 m) · (ṁ / 50 kg/s)`
//! 2. `U = 1 / (1/U₀ + R_f)`
//! 3. `η = U / U₀`
//! 4. `LMTD` between end differences `T_in − 25 °C` and `15 K`
//! 5. `Q = U · A · LMTD`
//! 6. An 11-point linear temperature profile for plotting
//!
//! The reference constants are normalizers tuned for presentation, not a
//! convective correlation. They are kept as-is so results match the
//! explorer's established output.

mod configuration;
mod error;
mod material;
mod profile;
mod ranges;
mod results;

#[cfg(test)]
mod test_support;

pub use configuration::{
    Configuration, ConfigurationChange, ExchangerModel, SceneGeometry, Snapshot,
};
pub use error::{DomainError, Field};
pub use material::{Material, MaterialKind, UnknownMaterial};
pub use ranges::{OperatingRange, OperatingRanges};
pub use results::{PROFILE_POINTS, PerformanceResult, ProfileSample, TemperatureProfile};

use tracing::debug;
use uom::si::{
    f64::{
        Area, Length, MassRate, Power, TemperatureInterval, ThermalConductivity,
        ThermodynamicTemperature,
    },
    heat_transfer::watt_per_square_meter_kelvin,
    length::meter,
    mass_rate::kilogram_per_second,
    power::kilowatt,
    ratio::ratio,
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::{
    constraint::{Constrained, Constraint, NonNegative, StrictlyPositive},
    hx::{Efficiency, HeatTransferCoefficient, log_mean_temperature_difference},
    units::{FoulingResistance, TemperatureDifference},
};

use profile::temperature_profile;

/// Cold stream inlet temperature, °C.
const COLD_INLET_CELSIUS: f64 = 25.0;

/// Hot-to-cold temperature difference at the cold end, K.
const COLD_END_APPROACH_KELVIN: f64 = 15.0;

fn reference_wall_thickness() -> Length {
    Length::new::<meter>(0.05)
}

fn reference_mass_flow() -> MassRate {
    MassRate::new::<kilogram_per_second>(50.0)
}

/// Computes exchanger performance for a configuration and wall material.
///
/// This is a pure function: identical inputs always produce identical
/// results, and nothing is retained between calls. The exchanger model
/// selector and drawn geometry do not affect the result.
///
/// # Errors
///
/// Returns a [`DomainError`] if an input is non-finite, if the conductivity,
/// flow rate or area is not strictly positive, if the fouling factor is
/// negative, or if valid inputs overflow to a non-physical result.
///
/// # Example
///
/// ```
/// use twine_hx_explorer::models::thermal::exchanger::{
///     Configuration, MaterialKind, compute_performance,
/// };
///
/// let result = compute_performance(&Configuration::default(), &MaterialKind::Copper.material())
///     .unwrap();
///
/// assert!(result.overall_coefficient <= result.clean_coefficient);
/// assert_eq!(result.temperature_profile.samples().len(), 11);
/// ```
pub fn compute_performance(
    configuration: &Configuration,
    material: &Material,
) -> Result<PerformanceResult, DomainError> {
    let inputs = Inputs::validate(configuration, material)?;

    let flow_factor = (*inputs.mass_flow_rate.as_ref() / reference_mass_flow()).get::<ratio>();
    let clean_coefficient = HeatTransferCoefficient::from_quantity(
        *inputs.thermal_conductivity.as_ref() / reference_wall_thickness() * flow_factor,
    )
    .ok()
    .filter(|u| u.is_finite())
    .ok_or(DomainError::Degenerate {
        quantity: "clean coefficient",
    })?;

    let overall_coefficient = clean_coefficient
        .with_fouling(inputs.fouling_factor)
        .map_err(|_| DomainError::Degenerate {
            quantity: "overall coefficient",
        })?;

    let efficiency = Efficiency::from_coefficients(overall_coefficient, clean_coefficient)
        .map_err(|_| DomainError::Degenerate {
            quantity: "efficiency",
        })?;

    let lmtd = log_mean_temperature_difference(
        inputs.inlet_temperature.minus(cold_inlet()),
        TemperatureInterval::new::<delta_kelvin>(COLD_END_APPROACH_KELVIN),
    );

    let heat_duty: Power = *overall_coefficient * *inputs.area.as_ref() * lmtd.value;
    if !heat_duty.is_finite() {
        return Err(DomainError::Degenerate {
            quantity: "heat duty",
        });
    }

    let temperature_profile = temperature_profile(
        inputs.inlet_temperature.get::<degree_celsius>(),
        heat_duty.get::<kilowatt>(),
    );
    if !temperature_profile.is_finite() {
        return Err(DomainError::Degenerate {
            quantity: "temperature profile",
        });
    }

    debug!(
        material = material.name,
        u_clean = clean_coefficient.get::<watt_per_square_meter_kelvin>(),
        u_overall = overall_coefficient.get::<watt_per_square_meter_kelvin>(),
        efficiency_pct = efficiency.percent(),
        lmtd_k = lmtd.value.get::<delta_kelvin>(),
        heat_duty_kw = heat_duty.get::<kilowatt>(),
        "computed exchanger performance"
    );

    Ok(PerformanceResult {
        clean_coefficient,
        overall_coefficient,
        efficiency,
        lmtd,
        heat_duty,
        temperature_profile,
    })
}

fn cold_inlet() -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<degree_celsius>(COLD_INLET_CELSIUS)
}

/// Engine inputs after their physical preconditions have been checked.
struct Inputs {
    thermal_conductivity: Constrained<ThermalConductivity, StrictlyPositive>,
    mass_flow_rate: Constrained<MassRate, StrictlyPositive>,
    area: Constrained<Area, StrictlyPositive>,
    fouling_factor: Constrained<FoulingResistance, NonNegative>,
    inlet_temperature: ThermodynamicTemperature,
}

impl Inputs {
    fn validate(configuration: &Configuration, material: &Material) -> Result<Self, DomainError> {
        let k = material.thermal_conductivity;
        let Configuration {
            inlet_temperature,
            mass_flow_rate,
            area,
            fouling_factor,
            ..
        } = *configuration;

        let thermal_conductivity = require(Field::ThermalConductivity, k, k.is_finite())?;
        let mass_flow_rate =
            require(Field::MassFlowRate, mass_flow_rate, mass_flow_rate.is_finite())?;
        let area = require(Field::Area, area, area.is_finite())?;
        let fouling_factor =
            require(Field::FoulingFactor, fouling_factor, fouling_factor.is_finite())?;

        if !inlet_temperature.is_finite() {
            return Err(DomainError::NotFinite {
                field: Field::InletTemperature,
            });
        }

        Ok(Self {
            thermal_conductivity,
            mass_flow_rate,
            area,
            fouling_factor,
            inlet_temperature,
        })
    }
}

fn require<T, C: Constraint<T>>(
    field: Field,
    value: T,
    is_finite: bool,
) -> Result<Constrained<T, C>, DomainError> {
    if !is_finite {
        return Err(DomainError::NotFinite { field });
    }
    Constrained::new(value).map_err(|source| DomainError::OutOfBounds { field, source })
}
