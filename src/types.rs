//! Geometric primitives: target corners, viewport, validated threshold.
//!
//! Points are `glam` vectors. Screen space has its origin at the bottom-left
//! of the viewport with y growing upward.

use std::fmt;

use glam::{Vec2, Vec3};

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is negative when non-negative required
    Negative,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Negative => write!(f, "value is negative"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Half-width of the band around the viewport center, in screen pixels.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Threshold(f32);

impl Threshold {
    pub const ZERO: Threshold = Threshold(0.0);

    /// Unchecked constructor for constants.
    #[inline]
    pub(crate) const fn pixels(val: f32) -> Threshold {
        Threshold(val)
    }

    /// Create a threshold, rejecting NaN, infinite and negative values.
    pub fn try_new(val: f32) -> Result<Threshold, NumericError> {
        if val.is_nan() {
            Err(NumericError::NaN)
        } else if val.is_infinite() {
            Err(NumericError::Infinite)
        } else if val < 0.0 {
            Err(NumericError::Negative)
        } else {
            Ok(Threshold(val))
        }
    }

    #[inline]
    pub fn get(self) -> f32 {
        self.0
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}

/// Screen dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Viewport { width, height }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// The viewport center, which the region classifier measures against.
    pub fn center(&self) -> Vec2 {
        self.size() * 0.5
    }

    /// True when either side is zero, negative or not finite.
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0)
    }
}

/// One of the four corners of a rectangle, in winding order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Corner {
    BottomLeft,
    TopLeft,
    TopRight,
    BottomRight,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::BottomLeft,
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomRight,
    ];

    /// Index into [`Corners`]: 0 = bottom-left, 1 = top-left, 2 = top-right, 3 = bottom-right.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Corner::BottomLeft => 0,
            Corner::TopLeft => 1,
            Corner::TopRight => 2,
            Corner::BottomRight => 3,
        }
    }
}

/// One side of a rectangle. Its anchor is the midpoint of the two corners it joins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    pub const fn corners(self) -> (Corner, Corner) {
        match self {
            Edge::Top => (Corner::TopLeft, Corner::TopRight),
            Edge::Bottom => (Corner::BottomLeft, Corner::BottomRight),
            Edge::Left => (Corner::BottomLeft, Corner::TopLeft),
            Edge::Right => (Corner::TopRight, Corner::BottomRight),
        }
    }
}

/// The four world-space corners of a target rectangle.
///
/// The winding matches what UI toolkits report for a rect transform:
/// bottom-left, top-left, top-right, bottom-right. For screen-space use the
/// z component is ignored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Corners(pub [Vec3; 4]);

impl Corners {
    pub fn new(points: [Vec3; 4]) -> Self {
        Corners(points)
    }

    /// Axis-aligned rectangle on the z = 0 plane.
    pub fn from_min_max(min: Vec2, max: Vec2) -> Self {
        Corners([
            min.extend(0.0),
            Vec2::new(min.x, max.y).extend(0.0),
            max.extend(0.0),
            Vec2::new(max.x, min.y).extend(0.0),
        ])
    }

    /// Axis-aligned rectangle from its center and full size, on the z = 0 plane.
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self::from_min_max(center - half, center + half)
    }

    #[inline]
    pub fn corner(&self, corner: Corner) -> Vec3 {
        self.0[corner.index()]
    }

    /// Midpoint of an edge.
    pub fn edge_midpoint(&self, edge: Edge) -> Vec3 {
        let (a, b) = edge.corners();
        (self.corner(a) + self.corner(b)) * 0.5
    }

    /// Average of the four corners.
    pub fn centroid(&self) -> Vec3 {
        let [a, b, c, d] = self.0;
        (a + b + c + d) * 0.25
    }

    /// Vector along the bottom edge, left to right.
    pub fn right_axis(&self) -> Vec3 {
        self.corner(Corner::BottomRight) - self.corner(Corner::BottomLeft)
    }

    /// Vector along the left edge, bottom to top.
    pub fn up_axis(&self) -> Vec3 {
        self.corner(Corner::TopLeft) - self.corner(Corner::BottomLeft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_rejects_bad_values() {
        assert_eq!(Threshold::try_new(f32::NAN), Err(NumericError::NaN));
        assert_eq!(Threshold::try_new(f32::INFINITY), Err(NumericError::Infinite));
        assert_eq!(Threshold::try_new(-0.5), Err(NumericError::Negative));
        assert_eq!(Threshold::try_new(0.0), Ok(Threshold::ZERO));
        assert_eq!(Threshold::try_new(12.5).map(Threshold::get), Ok(12.5));
    }

    #[test]
    fn corners_follow_winding() {
        let c = Corners::from_min_max(Vec2::new(10.0, 20.0), Vec2::new(30.0, 60.0));
        assert_eq!(c.corner(Corner::BottomLeft), Vec3::new(10.0, 20.0, 0.0));
        assert_eq!(c.corner(Corner::TopLeft), Vec3::new(10.0, 60.0, 0.0));
        assert_eq!(c.corner(Corner::TopRight), Vec3::new(30.0, 60.0, 0.0));
        assert_eq!(c.corner(Corner::BottomRight), Vec3::new(30.0, 20.0, 0.0));
        assert_eq!(c.centroid(), Vec3::new(20.0, 40.0, 0.0));
    }

    #[test]
    fn edge_midpoints() {
        let c = Corners::from_center_size(Vec2::ZERO, Vec2::new(4.0, 2.0));
        assert_eq!(c.edge_midpoint(Edge::Top), Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(c.edge_midpoint(Edge::Bottom), Vec3::new(0.0, -1.0, 0.0));
        assert_eq!(c.edge_midpoint(Edge::Left), Vec3::new(-2.0, 0.0, 0.0));
        assert_eq!(c.edge_midpoint(Edge::Right), Vec3::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn viewport_center_and_degeneracy() {
        let vp = Viewport::new(1280.0, 720.0);
        assert_eq!(vp.center(), Vec2::new(640.0, 360.0));
        assert!(!vp.is_degenerate());
        assert!(Viewport::new(0.0, 720.0).is_degenerate());
        assert!(Viewport::new(f32::NAN, 720.0).is_degenerate());
    }
}
