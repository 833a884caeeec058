use std::ops::Deref;

use crate::support::constraint::{Constrained, ConstraintResult, UnitIntervalLowerOpen};
use uom::si::{f64::Ratio, ratio::ratio};

use super::HeatTransferCoefficient;

/// Fouled-to-clean performance ratio of an exchanger.
///
/// This is a design metric, `U / U₀`, not a thermodynamic efficiency.
/// It lies in `(0, 1]` and is exactly one for a clean surface.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Efficiency(Constrained<Ratio, UnitIntervalLowerOpen>);

impl Efficiency {
    /// Create an [`Efficiency`] from a scalar fraction.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value lies outside `(0, 1]`.
    pub fn new(value: f64) -> ConstraintResult<Self> {
        Self::from_quantity(Ratio::new::<ratio>(value))
    }

    /// Create an [`Efficiency`] from a ratio quantity.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the quantity lies outside `(0, 1]`.
    pub fn from_quantity(quantity: Ratio) -> ConstraintResult<Self> {
        Ok(Self(UnitIntervalLowerOpen::new(quantity)?))
    }

    /// Ratio of a fouled coefficient to its clean counterpart.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `fouled` exceeds `clean` or the ratio underflows.
    pub fn from_coefficients(
        fouled: HeatTransferCoefficient,
        clean: HeatTransferCoefficient,
    ) -> ConstraintResult<Self> {
        Self::from_quantity(*fouled / *clean)
    }

    /// The efficiency as a percentage in `(0, 100]`.
    ///
    /// A clean surface reports exactly `100.0`.
    #[must_use]
    pub fn percent(&self) -> f64 {
        self.get::<ratio>() * 100.0
    }
}

impl Deref for Efficiency {
    type Target = Ratio;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}
