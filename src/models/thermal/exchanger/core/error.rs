use std::fmt;

use thiserror::Error;

use crate::support::constraint::ConstraintError;

/// An input the engine validates before computing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    InletTemperature,
    MassFlowRate,
    Area,
    FoulingFactor,
    ThermalConductivity,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::InletTemperature => "inlet temperature",
            Self::MassFlowRate => "mass flow rate",
            Self::Area => "exchanger area",
            Self::FoulingFactor => "fouling factor",
            Self::ThermalConductivity => "thermal conductivity",
        })
    }
}

/// Reasons the engine refuses to compute a result.
///
/// No partial result accompanies an error.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DomainError {
    /// An input is `NaN` or infinite.
    #[error("{field} is not finite")]
    NotFinite { field: Field },

    /// A finite input violates its physical bound.
    #[error("{field} is out of bounds")]
    OutOfBounds {
        field: Field,

        #[source]
        source: ConstraintError,
    },

    /// Valid inputs produced a non-finite or non-physical intermediate,
    /// such as a coefficient that overflows.
    #[error("computed {quantity} is not physical")]
    Degenerate { quantity: &'static str },
}

impl DomainError {
    /// The input field at fault, if the error came from validation.
    #[must_use]
    pub fn field(&self) -> Option<Field> {
        match self {
            Self::NotFinite { field } | Self::OutOfBounds { field, .. } => Some(*field),
            Self::Degenerate { .. } => None,
        }
    }
}
