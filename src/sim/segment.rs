//! Axis-aligned trail segments
//!
//! A committed trail piece always runs along exactly one axis: its two
//! endpoints share their other coordinate. Endpoints are stored in creation
//! order, not sorted, so range tests normalize with min/max first.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::Axis;

/// One axis-aligned wall left behind a vehicle.
///
/// `axis` is the axis the segment runs along and `fixed` is its coordinate
/// on the other axis: a vertical wall is `axis: Axis::Y` with `fixed` = x.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub axis: Axis,
    pub fixed: f32,
    /// First endpoint along `axis` (creation order)
    pub a: f32,
    /// Second endpoint along `axis`
    pub b: f32,
}

impl Segment {
    pub fn new(axis: Axis, fixed: f32, a: f32, b: f32) -> Self {
        Self { axis, fixed, a, b }
    }

    /// Build the segment joining two trail points, if they are axis-aligned.
    ///
    /// When the points coincide the x test matches first and the result is a
    /// degenerate vertical segment, which every strict range test ignores.
    pub fn between(from: Vec2, to: Vec2) -> Option<Self> {
        if from.x == to.x {
            Some(Self::new(Axis::Y, from.x, from.y, to.y))
        } else if from.y == to.y {
            Some(Self::new(Axis::X, from.y, from.x, to.x))
        } else {
            None
        }
    }

    /// Endpoints normalized to (min, max)
    #[inline]
    pub fn span(&self) -> (f32, f32) {
        (self.a.min(self.b), self.a.max(self.b))
    }

    /// Whether `v` falls strictly between the normalized endpoints
    #[inline]
    pub fn contains_strict(&self, v: f32) -> bool {
        let (lo, hi) = self.span();
        v > lo && v < hi
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_between_vertical() {
        let seg = Segment::between(Vec2::new(100.0, 50.0), Vec2::new(100.0, 200.0))
            .expect("shared x makes a vertical segment");
        assert_eq!(seg.axis, Axis::Y);
        assert_eq!(seg.fixed, 100.0);
        assert_eq!((seg.a, seg.b), (50.0, 200.0));
    }

    #[test]
    fn test_between_horizontal() {
        let seg = Segment::between(Vec2::new(300.0, 80.0), Vec2::new(120.0, 80.0))
            .expect("shared y makes a horizontal segment");
        assert_eq!(seg.axis, Axis::X);
        assert_eq!(seg.fixed, 80.0);
        // Creation order preserved, not sorted
        assert_eq!((seg.a, seg.b), (300.0, 120.0));
        assert_eq!(seg.span(), (120.0, 300.0));
    }

    #[test]
    fn test_between_diagonal_is_none() {
        assert!(Segment::between(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0)).is_none());
    }

    #[test]
    fn test_coincident_points_degenerate() {
        let p = Vec2::new(40.0, 40.0);
        let seg = Segment::between(p, p).expect("coincident points match the x test");
        assert_eq!(seg.axis, Axis::Y);
        assert!(!seg.contains_strict(40.0));
    }

    #[test]
    fn test_contains_strict_excludes_endpoints() {
        let seg = Segment::new(Axis::X, 0.0, 200.0, 100.0);
        assert!(seg.contains_strict(150.0));
        assert!(!seg.contains_strict(100.0));
        assert!(!seg.contains_strict(200.0));
        assert!(!seg.contains_strict(99.9));
    }
}
