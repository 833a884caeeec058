use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is zero or greater.
///
/// Fouling resistance uses this bound: a clean surface has zero added
/// resistance, and deposits only ever add to it.
///
/// # Examples
///
/// ```
/// use twine_hx_explorer::support::constraint::NonNegative;
///
/// assert!(NonNegative::new(0.0).is_ok());
/// assert!(NonNegative::new(0.0005).is_ok());
/// assert!(NonNegative::new(-0.0005).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NonNegative;

impl NonNegative {
    /// Constructs a [`Constrained<T, NonNegative>`] if the value is non-negative.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is negative or `NaN`.
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, NonNegative>, ConstraintError> {
        Constrained::<T, NonNegative>::new(value)
    }

    /// Returns zero as a non-negative constrained value.
    #[must_use]
    pub fn zero<T: PartialOrd + Zero>() -> Constrained<T, NonNegative> {
        Constrained::new_unchecked(T::zero())
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonNegative {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater | Ordering::Equal) => Ok(()),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::support::units::{FoulingResistance, fouling_resistance};

    #[test]
    fn zero_is_allowed() {
        let zero = NonNegative::zero::<f64>();
        assert!(zero.into_inner().is_zero());
        assert!(NonNegative::new(0.0).is_ok());
    }

    #[test]
    fn fouling_resistances() {
        assert!(NonNegative::new(fouling_resistance(0.01)).is_ok());
        assert!(NonNegative::new(FoulingResistance::zero()).is_ok());
        assert_eq!(
            NonNegative::new(fouling_resistance(-0.001)),
            Err(ConstraintError::Negative)
        );
        assert_eq!(
            NonNegative::new(fouling_resistance(f64::NAN)),
            Err(ConstraintError::NotANumber)
        );
    }
}
