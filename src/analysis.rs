//! Orchestration of one evaluation-plus-animation run.

use serde::Serialize;

use crate::animation::{Animation, DEFAULT_FRAME_COUNT, FALLBACK_ANGLE_DEGREES};
use crate::stability::{evaluate, LadderParameters, StabilityReport, Verdict};

/// A completed stability evaluation, ready to produce animations.
///
/// One run corresponds to one user trigger: the evaluator executes exactly
/// once and its verdict selects the pose the animation sweeps to. Animations
/// are produced on demand and each one is an independent, restartable
/// sequence; dropping an in-flight animation and starting a new run is how a
/// re-trigger cancels playback.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LadderRun {
    /// Inputs the run was triggered with.
    parameters: LadderParameters,
    /// Result of the equilibrium evaluation.
    report: StabilityReport,
}

/// Evaluate stability for the supplied parameters and package the run.
///
/// # Examples
/// ```
/// use ladderx::{analyze, LadderParameters};
///
/// let params = LadderParameters::new(60.0, 5.0, 1500.0, 1.0)?;
/// let run = analyze(params);
/// assert!(run.report().is_stable);
/// assert_eq!(run.animation().count(), ladderx::DEFAULT_FRAME_COUNT);
/// # Ok::<(), ladderx::InputError>(())
/// ```
#[must_use]
pub fn analyze(parameters: LadderParameters) -> LadderRun {
    let report = evaluate(&parameters);
    LadderRun { parameters, report }
}

impl LadderRun {
    /// Inputs the run was triggered with.
    #[must_use]
    pub fn parameters(&self) -> &LadderParameters {
        &self.parameters
    }

    /// Result of the equilibrium evaluation.
    #[must_use]
    pub fn report(&self) -> &StabilityReport {
        &self.report
    }

    /// Stability verdict for presentation styling.
    #[must_use]
    pub fn verdict(&self) -> Verdict {
        self.report.verdict()
    }

    /// Pose the animation sweeps to, in radians.
    ///
    /// The input angle when stable; the fixed collapsed angle of
    /// [`FALLBACK_ANGLE_DEGREES`] when not.
    #[must_use]
    pub fn target_pose(&self) -> f64 {
        if self.report.is_stable {
            self.parameters.angle_radians()
        } else {
            FALLBACK_ANGLE_DEGREES.to_radians()
        }
    }

    /// Animation sweep with the default frame count.
    #[must_use]
    pub fn animation(&self) -> Animation {
        self.animation_with_frame_count(DEFAULT_FRAME_COUNT)
    }

    /// Animation sweep with an explicit frame count.
    #[must_use]
    pub fn animation_with_frame_count(&self, frame_count: usize) -> Animation {
        Animation::new(
            self.target_pose(),
            self.parameters.length(),
            frame_count,
            self.verdict().ladder_color(),
        )
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::geometry::ColorHint;

    #[test]
    fn stable_run_sweeps_to_the_input_angle() {
        let params = LadderParameters::new(60.0, 5.0, 1500.0, 1.0).expect("valid parameters");
        let run = analyze(params);

        assert!(run.report().is_stable);
        assert_eq!(run.verdict(), Verdict::Stable);
        assert_relative_eq!(run.target_pose(), 60.0_f64.to_radians(), epsilon = 1.0e-12);

        let last = run.animation().last().expect("non-empty sweep");
        assert_relative_eq!(last.pose, 60.0_f64.to_radians(), epsilon = 1.0e-12);
        assert_eq!(last.ladder_color, ColorHint::Green);
    }

    #[test]
    fn unstable_run_collapses_to_the_fallback_angle() {
        let params = LadderParameters::new(20.0, 5.0, 1500.0, 1.0).expect("valid parameters");
        let run = analyze(params);

        assert!(!run.report().is_stable);
        assert_relative_eq!(
            run.target_pose(),
            FALLBACK_ANGLE_DEGREES.to_radians(),
            epsilon = 1.0e-12
        );

        let last = run.animation().last().expect("non-empty sweep");
        assert_relative_eq!(
            last.pose,
            FALLBACK_ANGLE_DEGREES.to_radians(),
            epsilon = 1.0e-12
        );
        assert_eq!(last.ladder_color, ColorHint::Red);
    }

    #[test]
    fn fallback_angle_is_independent_of_the_input_angle() {
        for angle in [20.0, 25.0, 28.0] {
            let params = LadderParameters::new(angle, 5.0, 1500.0, 0.1).expect("valid parameters");
            let run = analyze(params);
            assert!(!run.report().is_stable);
            assert_relative_eq!(
                run.target_pose(),
                FALLBACK_ANGLE_DEGREES.to_radians(),
                epsilon = 1.0e-12
            );
        }
    }

    #[test]
    fn animations_from_one_run_are_independent() {
        let params = LadderParameters::new(60.0, 5.0, 1500.0, 1.0).expect("valid parameters");
        let run = analyze(params);

        let mut abandoned = run.animation();
        let _ = abandoned.next();
        drop(abandoned);

        // A fresh animation restarts the sweep from the first step.
        let first = run.animation().next().expect("first frame");
        assert_eq!(first.index, 1);
    }
}
