use tracing::warn;
use uom::si::{f64::TemperatureInterval, temperature_interval::kelvin as delta_kelvin};

/// Log argument substituted when the end-difference ratio is not positive.
pub const FALLBACK_LOG_ARGUMENT: f64 = 1.1;

/// Relative tolerance within which two end differences count as equal.
const EQUAL_DIFFERENCE_TOLERANCE: f64 = 1e-9;

/// Which branch produced a [`LogMeanTemperatureDifference`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogMeanMethod {
    /// `(ΔT₁ − ΔT₂) / ln(ΔT₁ / ΔT₂)`.
    Logarithmic,
    /// The end differences are equal and the limit `(ΔT₁ + ΔT₂) / 2` is used.
    EqualDifferences,
    /// `ΔT₁ / ΔT₂ ≤ 0`, so the log argument was replaced by
    /// [`FALLBACK_LOG_ARGUMENT`].
    Fallback,
}

/// Effective driving temperature difference between two streams.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogMeanTemperatureDifference {
    /// The log-mean temperature difference.
    pub value: TemperatureInterval,
    /// Branch used to compute `value`.
    pub method: LogMeanMethod,
}

/// Log-mean of the temperature differences at the two ends of an exchanger.
///
/// A non-positive ratio `ΔT₁ / ΔT₂` (a temperature cross, or a zero
/// difference at one end) has no real logarithm. Rather than returning a
/// non-finite value, the logarithm's argument is replaced by
/// [`FALLBACK_LOG_ARGUMENT`]. The result is finite whenever both inputs are
/// finite and `ΔT₂` is non-zero.
///
/// # Example
///
/// ```
/// use twine_hx_explorer::support::hx::{log_mean_temperature_difference, LogMeanMethod};
/// use uom::si::{f64::TemperatureInterval, temperature_interval::kelvin};
///
/// let lmtd = log_mean_temperature_difference(
///     TemperatureInterval::new::<kelvin>(65.0),
///     TemperatureInterval::new::<kelvin>(15.0),
/// );
/// assert_eq!(lmtd.method, LogMeanMethod::Logarithmic);
/// assert!((lmtd.value.get::<kelvin>() - 34.0986).abs() < 1e-4);
/// ```
#[must_use]
pub fn log_mean_temperature_difference(
    delta_t_1: TemperatureInterval,
    delta_t_2: TemperatureInterval,
) -> LogMeanTemperatureDifference {
    let dt_1 = delta_t_1.get::<delta_kelvin>();
    let dt_2 = delta_t_2.get::<delta_kelvin>();
    let ratio = dt_1 / dt_2;

    let (value, method) = if ratio.is_nan() || ratio <= 0.0 {
        warn!(
            delta_t_1 = dt_1,
            delta_t_2 = dt_2,
            "non-positive end-difference ratio, using fallback log argument"
        );
        (
            (dt_1 - dt_2) / FALLBACK_LOG_ARGUMENT.ln(),
            LogMeanMethod::Fallback,
        )
    } else if (ratio - 1.0).abs() < EQUAL_DIFFERENCE_TOLERANCE {
        (0.5 * (dt_1 + dt_2), LogMeanMethod::EqualDifferences)
    } else {
        ((dt_1 - dt_2) / ratio.ln(), LogMeanMethod::Logarithmic)
    };

    LogMeanTemperatureDifference {
        value: TemperatureInterval::new::<delta_kelvin>(value),
        method,
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn kelvin(value: f64) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(value)
    }

    #[test]
    fn symmetric_in_its_arguments() {
        let forward = log_mean_temperature_difference(kelvin(60.0), kelvin(20.0));
        let reverse = log_mean_temperature_difference(kelvin(20.0), kelvin(60.0));

        assert_eq!(forward.method, LogMeanMethod::Logarithmic);
        assert_relative_eq!(
            forward.value.get::<delta_kelvin>(),
            40.0 / 3.0_f64.ln()
        );
        assert_relative_eq!(
            forward.value.get::<delta_kelvin>(),
            reverse.value.get::<delta_kelvin>(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn equal_differences_use_the_limit() {
        let lmtd = log_mean_temperature_difference(kelvin(15.0), kelvin(15.0));
        assert_eq!(lmtd.method, LogMeanMethod::EqualDifferences);
        assert_relative_eq!(lmtd.value.get::<delta_kelvin>(), 15.0);

        // Nearly equal differences land on the same branch instead of 0/0 noise.
        let lmtd = log_mean_temperature_difference(kelvin(15.000_000_000_001), kelvin(15.0));
        assert_eq!(lmtd.method, LogMeanMethod::EqualDifferences);
        assert_relative_eq!(lmtd.value.get::<delta_kelvin>(), 15.0, epsilon = 1e-9);
    }

    #[test]
    fn non_positive_ratio_falls_back() {
        let lmtd = log_mean_temperature_difference(kelvin(0.0), kelvin(15.0));
        assert_eq!(lmtd.method, LogMeanMethod::Fallback);
        assert_relative_eq!(lmtd.value.get::<delta_kelvin>(), -15.0 / 1.1_f64.ln());

        let lmtd = log_mean_temperature_difference(kelvin(-5.0), kelvin(15.0));
        assert_eq!(lmtd.method, LogMeanMethod::Fallback);
        assert!(lmtd.value.get::<delta_kelvin>().is_finite());
        assert_relative_eq!(lmtd.value.get::<delta_kelvin>(), -20.0 / 1.1_f64.ln());
    }
}
