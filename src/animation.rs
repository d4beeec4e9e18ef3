//! Frame-by-frame animation of the ladder sweeping into its resolved pose.
//!
//! The animation is a plain driven iterator: each call to [`Iterator::next`]
//! assembles one [`Frame`] from the step index alone, so the sequence is
//! deterministic, restartable and free of inter-frame state. The core never
//! owns a thread or timer; consumers schedule frames themselves, conventionally
//! waiting [`FRAME_DELAY`] between draws. Dropping the iterator mid-sequence
//! abandons the run, which is the cancellation model for starting a new run
//! while a previous animation is still playing.

use std::iter::FusedIterator;
use std::time::Duration;

use serde::Serialize;

use crate::geometry::{point, ArrowKind, ColorHint, ForceArrow, Point, SceneBounds};

/// Number of frames in an animation sweep unless the caller overrides it.
pub const DEFAULT_FRAME_COUNT: usize = 15;

/// Resting angle the ladder collapses to when the verdict is unstable.
pub const FALLBACK_ANGLE_DEGREES: f64 = 5.0;

/// Shaft length of every schematic force arrow, regardless of scene scale.
pub const ARROW_LENGTH: f64 = 0.8;

/// Head width of every schematic force arrow.
pub const ARROW_HEAD_WIDTH: f64 = 0.08;

/// Recommended pause between consecutive frames. The consumer owns all
/// timing; this is only the cadence the animation was designed for.
pub const FRAME_DELAY: Duration = Duration::from_millis(120);

/// One fully resolved snapshot of the scene for a single animation step.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Frame {
    /// 1-based step index within the sweep.
    pub index: usize,
    /// Ladder inclination for this frame, in radians.
    pub pose: f64,
    /// Ladder base, pinned at the ground/wall corner.
    pub base: Point,
    /// Free end of the ladder.
    pub top: Point,
    /// Centre of gravity of the uniform ladder (segment midpoint).
    pub center_of_gravity: Point,
    /// The four schematic force arrows, in drawing order.
    pub arrows: [ForceArrow; 4],
    /// Axis limits, identical on every frame of a run.
    pub bounds: SceneBounds,
    /// Stroke colour for the ladder, set by the stability verdict.
    pub ladder_color: ColorHint,
}

/// Finite sweep of the ladder from flat on the ground up to a target pose.
///
/// The sweep always starts its reveal from angle 0 and interpolates linearly
/// to the target over `frame_count` equal steps, landing exactly on the target
/// at the final frame. Construct one via [`LadderRun::animation`] or directly
/// with [`Animation::new`] for a custom target.
///
/// [`LadderRun::animation`]: crate::LadderRun::animation
#[derive(Clone, Debug)]
pub struct Animation {
    /// Pose reached on the final frame, in radians.
    target_pose: f64,
    /// Ladder length in metres.
    length: f64,
    /// Total number of frames in the sweep.
    frame_count: usize,
    /// Stroke colour carried onto every frame.
    ladder_color: ColorHint,
    /// Bounds shared by every frame.
    bounds: SceneBounds,
    /// Next 1-based step to emit.
    next_step: usize,
}

impl Animation {
    /// Create a sweep toward `target_pose` for a ladder of the given length.
    ///
    /// A `frame_count` of zero produces an empty sequence.
    #[must_use]
    pub fn new(
        target_pose: f64,
        length: f64,
        frame_count: usize,
        ladder_color: ColorHint,
    ) -> Self {
        log::debug!(
            "starting {frame_count}-frame sweep to {:.1} deg",
            target_pose.to_degrees()
        );
        Self {
            target_pose,
            length,
            frame_count,
            ladder_color,
            bounds: SceneBounds::for_ladder(length),
            next_step: 1,
        }
    }

    /// Pose reached on the final frame, in radians.
    #[must_use]
    pub fn target_pose(&self) -> f64 {
        self.target_pose
    }

    /// Total number of frames in the sweep.
    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    /// Number of frames not yet emitted.
    fn remaining(&self) -> usize {
        self.frame_count.saturating_sub(self.next_step - 1)
    }

    /// Assemble the frame for a 1-based step index.
    ///
    /// Depends only on the step and the static run inputs, so the same step
    /// always yields the same frame.
    fn frame_at(&self, step: usize) -> Frame {
        let pose = self.target_pose * step as f64 / self.frame_count as f64;
        let base = point(0.0, 0.0);
        let top = point(self.length * pose.cos(), self.length * pose.sin());
        let center_of_gravity = base.midpoint(top);

        let arrows = [
            // Weight pulls straight down from the centre of gravity.
            schematic_arrow(ArrowKind::Weight, center_of_gravity, 0.0, -ARROW_LENGTH),
            // Ground pushes up on the base.
            schematic_arrow(ArrowKind::GroundNormal, base, 0.0, ARROW_LENGTH),
            // Ground friction resists the base sliding away from the wall.
            schematic_arrow(ArrowKind::GroundFriction, base, ARROW_LENGTH, 0.0),
            // Wall pushes the free end back horizontally.
            schematic_arrow(ArrowKind::WallNormal, top, -ARROW_LENGTH, 0.0),
        ];

        Frame {
            index: step,
            pose,
            base,
            top,
            center_of_gravity,
            arrows,
            bounds: self.bounds,
            ladder_color: self.ladder_color,
        }
    }
}

/// Build a fixed-length arrow of the given kind.
fn schematic_arrow(kind: ArrowKind, anchor: Point, dx: f64, dy: f64) -> ForceArrow {
    ForceArrow {
        kind,
        anchor,
        dx,
        dy,
        head_width: ARROW_HEAD_WIDTH,
    }
}

impl Iterator for Animation {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        if self.next_step > self.frame_count {
            return None;
        }
        let frame = self.frame_at(self.next_step);
        self.next_step += 1;
        Some(frame)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Animation {}

impl FusedIterator for Animation {}
