//! Error type for gradient configuration.

use std::fmt;

/// Returned when gradient or ray parameters are invalid.
#[derive(Debug, Clone, PartialEq)]
pub enum GradientError {
    /// Start angle must be finite and within `[0, π)`
    InvalidStartAngle(f64),
    /// Angle step must be finite and within `(0, π]`
    InvalidAngleStep(f64),
    /// No gradient preset with this name
    UnknownPreset(String),
    /// No ray fan preset with this name
    UnknownRayFan(String),
}

impl fmt::Display for GradientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GradientError::InvalidStartAngle(a) => {
                write!(f, "start angle {} is outside [0, pi)", a)
            }
            GradientError::InvalidAngleStep(s) => {
                write!(f, "angle step {} is outside (0, pi]", s)
            }
            GradientError::UnknownPreset(name) => {
                write!(
                    f,
                    "unknown gradient '{}' (expected linear, cushion, highlight or shine)",
                    name
                )
            }
            GradientError::UnknownRayFan(name) => {
                write!(f, "unknown ray preset '{}'", name)
            }
        }
    }
}

impl std::error::Error for GradientError {}
