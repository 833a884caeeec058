use std::ops::Deref;

use crate::support::{
    constraint::{Constrained, ConstraintResult, NonNegative, StrictlyPositive},
    units::FoulingResistance,
};
use num_traits::Zero;
use uom::si::f64::HeatTransfer;

/// Heat-transfer coefficient (U) across an exchanger wall, W/m²·K in SI.
///
/// The value must be strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct HeatTransferCoefficient(Constrained<HeatTransfer, StrictlyPositive>);

impl HeatTransferCoefficient {
    /// Create a [`HeatTransferCoefficient`] from a scalar value.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value is not strictly positive.
    pub fn new<U>(value: f64) -> ConstraintResult<Self>
    where
        U: uom::si::heat_transfer::Unit + uom::Conversion<f64, T = f64>,
    {
        Self::from_quantity(HeatTransfer::new::<U>(value))
    }

    /// Create a [`HeatTransferCoefficient`] from a heat-transfer quantity.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the quantity is not strictly positive.
    pub fn from_quantity(quantity: HeatTransfer) -> ConstraintResult<Self> {
        Ok(Self(StrictlyPositive::new(quantity)?))
    }

    /// Combine this clean coefficient in series with a fouling resistance.
    ///
    /// Resistances add: `1/U = 1/U₀ + R_f`. A zero resistance returns `self`
    /// unchanged, and the result never exceeds `self`.
    ///
    /// A resistance below the `f64` resolution of `1/U₀` (about `1e-16 / U₀`
    /// in SI) is absorbed by rounding, so the result equals `self` even
    /// though the resistance is nonzero. Strict degradation holds for any
    /// resistance large enough to move `1/U₀`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the combined coefficient underflows to zero.
    pub fn with_fouling(
        self,
        fouling: Constrained<FoulingResistance, NonNegative>,
    ) -> ConstraintResult<Self> {
        let r_f = fouling.into_inner();
        if r_f.is_zero() {
            return Ok(self);
        }

        let clean = *self;
        let fouled = (clean.recip() + r_f).recip();
        Self::from_quantity(if fouled > clean { clean } else { fouled })
    }
}

impl Deref for HeatTransferCoefficient {
    type Target = HeatTransfer;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use uom::si::heat_transfer::watt_per_square_meter_kelvin;

    use crate::support::units::fouling_resistance;

    use super::*;

    #[test]
    fn fouling_adds_resistance_in_series() -> ConstraintResult<()> {
        let clean = HeatTransferCoefficient::new::<watt_per_square_meter_kelvin>(4000.0)?;
        let fouled = clean.with_fouling(NonNegative::new(fouling_resistance(0.00025))?)?;

        // 1 / (0.00025 + 0.00025)
        assert_relative_eq!(fouled.get::<watt_per_square_meter_kelvin>(), 2000.0);
        assert!(fouled < clean);
        Ok(())
    }

    #[test]
    fn zero_fouling_is_exact() -> ConstraintResult<()> {
        let clean = HeatTransferCoefficient::new::<watt_per_square_meter_kelvin>(4010.0)?;
        let same = clean.with_fouling(NonNegative::zero())?;
        assert_eq!(same, clean);
        Ok(())
    }

    #[test]
    fn fouling_below_resolution_rounds_to_clean() -> ConstraintResult<()> {
        let clean = HeatTransferCoefficient::new::<watt_per_square_meter_kelvin>(4000.0)?;

        let negligible = clean.with_fouling(NonNegative::new(fouling_resistance(1e-20))?)?;
        assert_eq!(negligible, clean);

        let slight = clean.with_fouling(NonNegative::new(fouling_resistance(1e-6))?)?;
        assert!(slight < clean);
        Ok(())
    }

        #[test]
    fn rejects_non_positive() {
        assert!(HeatTransferCoefficient::new::<watt_per_square_meter_kelvin>(0.0).is_err());
        assert!(HeatTransferCoefficient::new::<watt_per_square_meter_kelvin>(-1.0).is_err());
    }
}
