use std::marker::PhantomData;

use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N1, P1, P3, Z0},
};

/// Area-specific thermal resistance from surface deposits, m²·K/W in SI.
///
/// Dimensionally this is the reciprocal of
/// [`HeatTransfer`](uom::si::f64::HeatTransfer), so `u.recip() + r_f` and
/// `(u.recip() + r_f).recip()` type-check as expected.
pub type FoulingResistance = Quantity<ISQ<Z0, N1, P3, Z0, P1, Z0, Z0>, SI<f64>, f64>;

/// Creates a [`FoulingResistance`] from a value in m²·K/W.
///
/// [`uom`] has no named unit for this dimension, so the value is stored
/// directly in base SI units. Read it back through the `value` field.
#[must_use]
pub fn fouling_resistance(square_meter_kelvin_per_watt: f64) -> FoulingResistance {
    FoulingResistance {
        dimension: PhantomData,
        units: PhantomData,
        value: square_meter_kelvin_per_watt,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::HeatTransfer, heat_transfer::watt_per_square_meter_kelvin,
    };

    #[test]
    fn reciprocal_of_heat_transfer() {
        let r_f = fouling_resistance(0.0005);
        let u = r_f.recip();
        assert_relative_eq!(u.get::<watt_per_square_meter_kelvin>(), 2000.0);

        let u_clean = HeatTransfer::new::<watt_per_square_meter_kelvin>(4000.0);
        let r_total: FoulingResistance = u_clean.recip() + r_f;
        assert_relative_eq!(r_total.value, 0.00075);
    }
}
