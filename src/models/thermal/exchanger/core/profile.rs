//! Presentation-oriented temperature profile.
//!
//! Both streams change linearly with distance at slopes fixed relative to
//! the heat duty. This is a display approximation, not a spatial solution.

use super::{
    COLD_INLET_CELSIUS,
    results::{ProfileSample, TemperatureProfile},
};

/// Heat duty (kW) per °C of hot-side drop per distance step.
const HOT_SLOPE_DIVISOR: f64 = 15.0;

/// Heat duty (kW) per °C of cold-side rise per distance step.
const COLD_SLOPE_DIVISOR: f64 = 25.0;

/// Builds the profile for a hot inlet temperature (°C) and heat duty (kW).
pub(super) fn temperature_profile(inlet_celsius: f64, heat_duty_kw: f64) -> TemperatureProfile {
    let hot_step = heat_duty_kw / HOT_SLOPE_DIVISOR;
    let cold_step = heat_duty_kw / COLD_SLOPE_DIVISOR;

    TemperatureProfile::new(std::array::from_fn(|distance_index| {
        #[allow(clippy::cast_precision_loss)]
        let i = distance_index as f64;
        ProfileSample {
            distance_index,
            hot_celsius: round_to_tenth(inlet_celsius - i * hot_step),
            cold_celsius: round_to_tenth(COLD_INLET_CELSIUS + i * cold_step),
        }
    }))
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
