//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical quantities. This module adds the
//! pieces an exchanger model needs that [`uom`] does not ship:
//!
//! - [`FoulingResistance`]: area-specific thermal resistance (m²·K/W), the
//!   reciprocal dimension of a heat-transfer coefficient.
//! - [`TemperatureDifference`]: subtracting absolute temperatures to get a
//!   [`TemperatureInterval`](uom::si::f64::TemperatureInterval).
//!
//! ```
//! use uom::si::{
//!     f64::{HeatTransfer, ThermodynamicTemperature},
//!     heat_transfer::watt_per_square_meter_kelvin,
//!     temperature_interval::kelvin as delta_kelvin,
//!     thermodynamic_temperature::degree_celsius,
//! };
//! use twine_hx_explorer::support::units::{fouling_resistance, TemperatureDifference};
//!
//! let r_f = fouling_resistance(0.0005);
//! let u = HeatTransfer::new::<watt_per_square_meter_kelvin>(2000.0);
//! assert!((u.recip() + r_f).value > r_f.value);
//!
//! let hot = ThermodynamicTemperature::new::<degree_celsius>(90.0);
//! let cold = ThermodynamicTemperature::new::<degree_celsius>(25.0);
//! assert!((hot.minus(cold).get::<delta_kelvin>() - 65.0).abs() < 1e-9);
//! ```

mod quantities;
mod temperature_difference;

pub use quantities::{FoulingResistance, fouling_resistance};
pub use temperature_difference::TemperatureDifference;
