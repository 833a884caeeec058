//! Result types for the thermal engine.

use std::slice;

use uom::si::{f64::Power, power::kilowatt};

use crate::support::hx::{Efficiency, HeatTransferCoefficient, LogMeanTemperatureDifference};

/// Number of samples in a [`TemperatureProfile`].
pub const PROFILE_POINTS: usize = 11;

/// Derived thermal performance for one configuration and material.
///
/// A result is a pure function of its inputs and is never stored by the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerformanceResult {
    /// Heat-transfer coefficient of the clean surface (U₀).
    pub clean_coefficient: HeatTransferCoefficient,

    /// Heat-transfer coefficient including fouling (U). Never exceeds U₀.
    pub overall_coefficient: HeatTransferCoefficient,

    /// `U / U₀`.
    pub efficiency: Efficiency,

    /// Log-mean temperature difference and the branch that produced it.
    pub lmtd: LogMeanTemperatureDifference,

    /// Heat duty, `U · A · LMTD`.
    pub heat_duty: Power,

    /// Hot and cold stream temperatures along the exchanger.
    pub temperature_profile: TemperatureProfile,
}

impl PerformanceResult {
    /// Efficiency in percent, in `(0, 100]`.
    #[must_use]
    pub fn efficiency_percent(&self) -> f64 {
        self.efficiency.percent()
    }

    #[must_use]
    pub fn heat_duty_kw(&self) -> f64 {
        self.heat_duty.get::<kilowatt>()
    }
}

/// One sample of the temperature profile, in °C rounded to 0.1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileSample {
    /// Position along the exchanger, `0` at the hot inlet.
    pub distance_index: usize,
    pub hot_celsius: f64,
    pub cold_celsius: f64,
}

/// Linear approximation of both stream temperatures along the exchanger.
///
/// Always holds exactly [`PROFILE_POINTS`] samples with `distance_index`
/// running `0, 1, …, 10`. The values are intended for plotting as-is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureProfile([ProfileSample; PROFILE_POINTS]);

impl TemperatureProfile {
    pub(super) fn new(samples: [ProfileSample; PROFILE_POINTS]) -> Self {
        Self(samples)
    }

    #[must_use]
    pub fn samples(&self) -> &[ProfileSample; PROFILE_POINTS] {
        &self.0
    }

    pub fn iter(&self) -> slice::Iter<'_, ProfileSample> {
        self.0.iter()
    }

    /// Whether every hot and cold sample is a finite temperature.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.0
            .iter()
            .all(|s| s.hot_celsius.is_finite() && s.cold_celsius.is_finite())
    }
}

impl<'a> IntoIterator for &'a TemperatureProfile {
    type Item = &'a ProfileSample;
    type IntoIter = slice::Iter<'a, ProfileSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
