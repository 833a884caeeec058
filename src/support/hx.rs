//! Heat exchanger analysis toolkit.
//!
//! General-purpose building blocks for rating an exchanger from its
//! heat-transfer coefficient and end temperature differences:
//!
//! - [`HeatTransferCoefficient`]: a strictly positive U-value, with series
//!   combination against a fouling resistance.
//! - [`Efficiency`]: the fouled-to-clean coefficient ratio in `(0, 1]`.
//! - [`log_mean_temperature_difference`]: the LMTD with a finite fallback
//!   for non-positive end-difference ratios.
//!
//! # Example
//!
//! ```
//! use twine_hx_explorer::support::constraint::{ConstraintResult, NonNegative};
//! use twine_hx_explorer::support::hx::{Efficiency, HeatTransferCoefficient};
//! use twine_hx_explorer::support::units::fouling_resistance;
//! use uom::si::heat_transfer::watt_per_square_meter_kelvin;
//!
//! fn main() -> ConstraintResult<()> {
//!     let clean = HeatTransferCoefficient::new::<watt_per_square_meter_kelvin>(4010.0)?;
//!     let fouled = clean.with_fouling(NonNegative::new(fouling_resistance(0.0005))?)?;
//!
//!     let efficiency = Efficiency::from_coefficients(fouled, clean)?;
//!     assert!(efficiency.percent() < 100.0);
//!     Ok(())
//! }
//! ```

mod coefficient;
mod efficiency;
mod log_mean;

pub use coefficient::HeatTransferCoefficient;
pub use efficiency::Efficiency;
pub use log_mean::{
    FALLBACK_LOG_ARGUMENT, LogMeanMethod, LogMeanTemperatureDifference,
    log_mean_temperature_difference,
};
