//! Input validation and the static-equilibrium stability evaluator.

use serde::Serialize;

use crate::errors::InputError;
use crate::geometry::ColorHint;

/// Validated inputs for one analysis run.
///
/// Parameters are checked once on construction and are immutable afterwards,
/// so every downstream computation can assume a physically meaningful
/// configuration. The UI layer conventionally clamps the angle to the
/// [20°, 80°] slider range; the core accepts the full open (0°, 180°) interval
/// so the trigonometry below stays well defined.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LadderParameters {
    /// Inclination of the ladder from the ground in degrees.
    angle_degrees: f64,
    /// Ladder length in metres.
    length: f64,
    /// Ladder weight in newtons.
    weight: f64,
    /// Coulomb friction coefficient at the ground contact.
    friction_coefficient: f64,
}

impl LadderParameters {
    /// Validate and store the inputs for a run.
    ///
    /// # Errors
    ///
    /// Returns [`InputError`] when any input falls outside its physical
    /// domain: angle outside the open interval (0°, 180°), non-positive
    /// length or weight, negative friction coefficient, or any non-finite
    /// value.
    ///
    /// # Examples
    /// ```
    /// use ladderx::LadderParameters;
    ///
    /// let params = LadderParameters::new(30.0, 5.0, 1500.0, 1.0)?;
    /// assert_eq!(params.length(), 5.0);
    /// # Ok::<(), ladderx::InputError>(())
    /// ```
    pub fn new(
        angle_degrees: f64,
        length: f64,
        weight: f64,
        friction_coefficient: f64,
    ) -> Result<Self, InputError> {
        if !(angle_degrees > 0.0 && angle_degrees < 180.0) {
            return Err(InputError::AngleOutOfRange { angle_degrees });
        }
        if !length.is_finite() || length <= 0.0 {
            return Err(InputError::NonPositiveLength { length });
        }
        if !weight.is_finite() || weight <= 0.0 {
            return Err(InputError::NonPositiveWeight { weight });
        }
        if !friction_coefficient.is_finite() || friction_coefficient < 0.0 {
            return Err(InputError::NegativeFrictionCoefficient {
                friction_coefficient,
            });
        }
        Ok(Self {
            angle_degrees,
            length,
            weight,
            friction_coefficient,
        })
    }

    /// Inclination of the ladder from the ground in degrees.
    #[must_use]
    pub fn angle_degrees(&self) -> f64 {
        self.angle_degrees
    }

    /// Inclination of the ladder from the ground in radians.
    #[must_use]
    pub fn angle_radians(&self) -> f64 {
        self.angle_degrees.to_radians()
    }

    /// Ladder length in metres.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Ladder weight in newtons.
    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Coulomb friction coefficient at the ground contact.
    #[must_use]
    pub fn friction_coefficient(&self) -> f64 {
        self.friction_coefficient
    }
}

/// Outcome of the equilibrium evaluation for one set of parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct StabilityReport {
    /// Ground friction force required for rotational equilibrium, in newtons.
    pub required_friction: f64,
    /// Largest friction force the ground contact can supply, in newtons.
    pub max_friction: f64,
    /// Whether the available friction covers the requirement.
    pub is_stable: bool,
}

impl StabilityReport {
    /// Verdict used for presentation styling.
    #[must_use]
    pub fn verdict(&self) -> Verdict {
        if self.is_stable {
            Verdict::Stable
        } else {
            Verdict::Unstable
        }
    }
}

/// Stability verdict with its conventional presentation styling.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// The ladder holds its pose; rendered as a success.
    Stable,
    /// The ladder slips and falls; rendered as an error.
    Unstable,
}

impl Verdict {
    /// Colour used to stroke the ladder in every animation frame.
    #[must_use]
    pub const fn ladder_color(self) -> ColorHint {
        match self {
            Verdict::Stable => ColorHint::Green,
            Verdict::Unstable => ColorHint::Red,
        }
    }
}

/// Evaluate static equilibrium for the supplied parameters.
///
/// For a uniform ladder pinned against a frictionless wall, taking torques
/// about the wall contact gives the required ground friction as
/// `(W / 2) · cot(θ)`; the length cancels out of the balance. The available
/// friction is the Coulomb capacity `μ · W`, with the full weight standing in
/// for the ground normal since the wall carries no vertical load.
///
/// Pure and deterministic: identical parameters always produce bit-identical
/// reports.
#[must_use]
pub fn evaluate(params: &LadderParameters) -> StabilityReport {
    let theta = params.angle_radians();
    let required_friction = (params.weight() / 2.0) * theta.cos() / theta.sin();
    let max_friction = params.friction_coefficient() * params.weight();
    let is_stable = required_friction <= max_friction;
    log::debug!(
        "evaluated ladder at {} deg: required {required_friction:.2} N, \
         available {max_friction:.2} N, stable = {is_stable}",
        params.angle_degrees()
    );
    StabilityReport {
        required_friction,
        max_friction,
        is_stable,
    }
}
