//! Error types produced while validating ladder run inputs.

use thiserror::Error;

/// Error returned when a run input falls outside its physical domain.
///
/// The variants describe the reason the supplied value is rejected so callers can
/// present actionable feedback to users. Each variant carries the offending value.
///
/// # Examples
///
/// ```
/// use ladderx::{InputError, LadderParameters};
///
/// let error = LadderParameters::new(0.0, 5.0, 1500.0, 1.0)
///     .expect_err("flat ladder angle is rejected");
/// assert_eq!(error, InputError::AngleOutOfRange { angle_degrees: 0.0 });
/// ```
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum InputError {
    /// Returned when the ladder angle is not strictly between 0 and 180 degrees.
    #[error("ladder angle must be strictly between 0 and 180 degrees (received {angle_degrees})")]
    AngleOutOfRange {
        /// Rejected angle in degrees.
        angle_degrees: f64,
    },
    /// Returned when the ladder length is zero, negative or not finite.
    #[error("ladder length must be positive (received {length})")]
    NonPositiveLength {
        /// Rejected length in metres.
        length: f64,
    },
    /// Returned when the ladder weight is zero, negative or not finite.
    #[error("ladder weight must be positive (received {weight})")]
    NonPositiveWeight {
        /// Rejected weight in newtons.
        weight: f64,
    },
    /// Returned when the friction coefficient is negative or not finite.
    #[error("friction coefficient must be non-negative (received {friction_coefficient})")]
    NegativeFrictionCoefficient {
        /// Rejected dimensionless friction coefficient.
        friction_coefficient: f64,
    },
}
