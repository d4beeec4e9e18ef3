#![warn(clippy::all)]
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]
#![doc = include_str!("../README.md")]

mod analysis;
mod animation;
mod errors;
mod geometry;
mod report;
mod stability;

pub use analysis::{analyze, LadderRun};
pub use animation::{
    Animation, Frame, ARROW_HEAD_WIDTH, ARROW_LENGTH, DEFAULT_FRAME_COUNT,
    FALLBACK_ANGLE_DEGREES, FRAME_DELAY,
};
pub use errors::InputError;
pub use geometry::{point, ArrowKind, ColorHint, ForceArrow, Point, SceneBounds};
pub use report::{render_report, render_report_json};
pub use stability::{evaluate, LadderParameters, StabilityReport, Verdict};
