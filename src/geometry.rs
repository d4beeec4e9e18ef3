//! Fundamental geometric types for the ladder scene.
//!
//! The ladder lives in the vertical plane spanned by the ground (x axis) and
//! the wall (y axis), with the ground/wall corner at the origin.

use nalgebra::Vector2;
use serde::Serialize;

/// Position in the vertical plane of the ladder, measured in metres.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Point {
    /// Distance along the ground, away from the wall.
    pub x: f64,
    /// Height above the ground.
    pub y: f64,
}

impl Point {
    /// Create a [`Point`] with explicit coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Convert the point into an algebraic vector.
    #[must_use]
    pub fn to_vector(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    /// Midpoint of the segment joining this point to `other`.
    #[must_use]
    pub fn midpoint(self, other: Point) -> Point {
        Point::from((self.to_vector() + other.to_vector()) / 2.0)
    }
}

impl From<Vector2<f64>> for Point {
    fn from(value: Vector2<f64>) -> Self {
        Self::new(value.x, value.y)
    }
}

impl From<Point> for Vector2<f64> {
    fn from(value: Point) -> Self {
        value.to_vector()
    }
}

/// Convenience helper for creating [`Point`] instances.
///
/// # Examples
/// ```
/// use ladderx::point;
///
/// let corner = point(0.0, 0.0);
/// assert_eq!(corner.x, 0.0);
/// ```
#[must_use]
pub const fn point(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

/// Colour hint attached to rendered elements.
///
/// The core does no drawing itself; these hints let the consumer reproduce the
/// conventional colouring (green ladder when stable, red when falling, and the
/// per-force arrow colours) without hard-coding it on the renderer side.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorHint {
    /// Used for the weight arrow and for the ladder in the unstable case.
    Red,
    /// Used for the ladder in the stable case.
    Green,
    /// Used for the two normal-reaction arrows.
    Blue,
    /// Used for the ground friction arrow.
    Purple,
    /// Used for the dashed ground and wall guide lines.
    Gray,
}

/// Identifies one of the four schematic forces drawn on every frame.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum ArrowKind {
    /// Ladder weight acting at the centre of gravity.
    Weight,
    /// Normal reaction from the ground at the base of the ladder.
    GroundNormal,
    /// Friction force from the ground at the base of the ladder.
    GroundFriction,
    /// Normal reaction from the wall at the top of the ladder.
    WallNormal,
}

impl ArrowKind {
    /// Short label drawn next to the arrow.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            ArrowKind::Weight => "W",
            ArrowKind::GroundNormal => "Ng",
            ArrowKind::GroundFriction => "F",
            ArrowKind::WallNormal => "Nw",
        }
    }

    /// Conventional colour for the arrow.
    #[must_use]
    pub const fn color(self) -> ColorHint {
        match self {
            ArrowKind::Weight => ColorHint::Red,
            ArrowKind::GroundNormal | ArrowKind::WallNormal => ColorHint::Blue,
            ArrowKind::GroundFriction => ColorHint::Purple,
        }
    }
}

/// A schematic force arrow anchored somewhere on the ladder.
///
/// Arrows indicate the direction and point of application of a force only;
/// their length is fixed and is never scaled to the force magnitude.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ForceArrow {
    /// Which force this arrow represents.
    pub kind: ArrowKind,
    /// Point of application of the force.
    pub anchor: Point,
    /// Horizontal extent of the arrow shaft.
    pub dx: f64,
    /// Vertical extent of the arrow shaft.
    pub dy: f64,
    /// Width of the arrow head.
    pub head_width: f64,
}

impl ForceArrow {
    /// Tip of the arrow, where the label is conventionally placed.
    #[must_use]
    pub fn tip(&self) -> Point {
        Point::new(self.anchor.x + self.dx, self.anchor.y + self.dy)
    }
}

/// Axis limits of the rendered scene, constant across a run.
///
/// The aspect ratio is locked 1:1 so the ladder angle reads true on screen;
/// renderers must apply equal scaling to both axes.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SceneBounds {
    /// Left edge of the scene.
    pub x_min: f64,
    /// Right edge of the scene.
    pub x_max: f64,
    /// Bottom edge of the scene (ground level).
    pub y_min: f64,
    /// Top edge of the scene.
    pub y_max: f64,
}

impl SceneBounds {
    /// Bounds enclosing a ladder of the given length with a one metre margin
    /// past the foot of the ladder and above the wall contact.
    #[must_use]
    pub fn for_ladder(length: f64) -> Self {
        Self {
            x_min: -1.0,
            x_max: length + 1.0,
            y_min: 0.0,
            y_max: length + 1.0,
        }
    }

    /// Endpoints of the dashed guide line marking the ground.
    #[must_use]
    pub fn ground_line(&self) -> (Point, Point) {
        (Point::new(self.x_min, 0.0), Point::new(self.x_max, 0.0))
    }

    /// Endpoints of the dashed guide line marking the wall.
    #[must_use]
    pub fn wall_line(&self) -> (Point, Point) {
        (Point::new(0.0, 0.0), Point::new(0.0, self.y_max))
    }
}
