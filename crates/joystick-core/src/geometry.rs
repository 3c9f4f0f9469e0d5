//! Circle geometry for keeping the thumb inside the outer ring and turning
//! its position into a direction.

use kurbo::Point;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Geometry errors.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    /// The line through the two points does not meet the circle.
    #[error("Line does not intersect circle (discriminant {discriminant})")]
    NoIntersection { discriminant: f64 },
}

/// Result type for geometry operations.
pub type GeometryResult<T> = Result<T, GeometryError>;

/// How negative `atan2` headings are folded into a positive angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AngleConvention {
    /// Negative angles become `180 + |angle|`.
    ///
    /// Mirror directions below the X axis collide with each other: a heading of
    /// -45° and one of -135° are reported as 225° and 315° respectively, which is
    /// the reverse of a regular counter-clockwise sweep.
    #[default]
    Mirrored,
    /// Negative angles become `angle + 360`, a regular counter-clockwise sweep.
    FullCircle,
}

impl AngleConvention {
    /// Fold an `atan2` result in degrees into a non-negative heading.
    pub fn fold(self, degrees: f64) -> f64 {
        if degrees >= 0.0 {
            return degrees;
        }
        match self {
            AngleConvention::Mirrored => 180.0 + degrees.abs(),
            AngleConvention::FullCircle => degrees + 360.0,
        }
    }
}

/// Normalized joystick direction reported to listeners.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Direction {
    /// Horizontal component in [-1, 1], right is positive.
    pub x: f64,
    /// Vertical component in [-1, 1], up is positive.
    pub y: f64,
    /// Heading in degrees.
    pub degrees: f64,
}

impl Direction {
    /// The resting direction.
    pub const CENTER: Self = Self {
        x: 0.0,
        y: 0.0,
        degrees: 0.0,
    };

    /// Length of the (x, y) vector.
    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y)
    }
}

/// Intersect the line through `a` and `b` with a circle.
///
/// Returns the intersection reached by walking from `a` towards `b`, which for
/// `b == center` and `a` outside the circle is the boundary point between them.
/// `a` and `b` must be distinct.
pub fn circle_line_intersection(
    a: Point,
    b: Point,
    center: Point,
    radius: f64,
) -> GeometryResult<Point> {
    let ba_x = b.x - a.x;
    let ba_y = b.y - a.y;
    let ca_x = center.x - a.x;
    let ca_y = center.y - a.y;

    let len_sq = ba_x * ba_x + ba_y * ba_y;
    let b_half = ba_x * ca_x + ba_y * ca_y;
    let c = ca_x * ca_x + ca_y * ca_y - radius * radius;

    let p = b_half / len_sq;
    let q = c / len_sq;
    let discriminant = p * p - q;

    // Written so that NaN also fails.
    if !(discriminant >= 0.0) {
        return Err(GeometryError::NoIntersection { discriminant });
    }

    let scale = -p + discriminant.sqrt();
    Ok(Point::new(a.x - ba_x * scale, a.y - ba_y * scale))
}

/// Keep `point` inside the circle of `radius` around `center`.
///
/// Points already inside (or on) the circle are returned unchanged. Points
/// outside are pulled onto the boundary along the line to the center.
pub fn clamp_to_circle(point: Point, center: Point, radius: f64) -> GeometryResult<Point> {
    let distance = point.distance(center);
    if distance <= radius || distance == 0.0 {
        return Ok(point);
    }
    circle_line_intersection(point, center, center, radius)
}

/// Convert a thumb position into a normalized direction.
///
/// Screen Y grows downwards, so the Y component is flipped to make "up"
/// positive. A thumb resting on the center yields [`Direction::CENTER`].
pub fn normalize(
    thumb: Point,
    center: Point,
    radius: f64,
    convention: AngleConvention,
) -> Direction {
    if radius <= 0.0 {
        return Direction::CENTER;
    }

    let x = ((thumb.x - center.x) / radius).clamp(-1.0, 1.0);
    let y = (-(thumb.y - center.y) / radius).clamp(-1.0, 1.0);

    if x == 0.0 && y == 0.0 {
        return Direction::CENTER;
    }

    let degrees = convention.fold(y.atan2(x).to_degrees());
    Direction { x, y, degrees }
}
