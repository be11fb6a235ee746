//! Shared anchor geometry for pattern-segment applicators.
//!
//! Arc and corner applicators both work on a span of a length-indexed path:
//! the chord between two distance cursors. The span provides the chord
//! endpoints, midpoint, implicit radius and slope the applicators anchor
//! their geometry to. Zero-length spans must be skipped by the caller; the
//! applicators divide by the chord length.

use drawing_common::{IndexedPath, Point};

/// A chord of a length-indexed path between two distance cursors.
#[derive(Debug, Clone, Copy)]
pub struct PathSpan<'a> {
    path: &'a IndexedPath,
    start_dist: f64,
    end_dist: f64,
}

impl<'a> PathSpan<'a> {
    pub fn new(path: &'a IndexedPath, start_dist: f64, end_dist: f64) -> Self {
        Self {
            path,
            start_dist,
            end_dist,
        }
    }

    pub fn start_point(&self) -> Point {
        self.path.point_at(self.start_dist)
    }

    pub fn end_point(&self) -> Point {
        self.path.point_at(self.end_dist)
    }

    pub fn midpoint(&self) -> Point {
        let s = self.start_point();
        let e = self.end_point();
        Point::new((s.x + e.x) / 2.0, (s.y + e.y) / 2.0)
    }

    /// Chord length between the two cursors.
    pub fn chord_length(&self) -> f64 {
        self.start_point().distance(&self.end_point())
    }

    /// Half the chord: the radius of the implicit anchor circle.
    pub fn radius(&self) -> f64 {
        self.chord_length() / 2.0
    }

    /// Chord slope in radians, screen coordinates (y down).
    pub fn slope(&self) -> f64 {
        let s = self.start_point();
        let e = self.end_point();
        (e.y - s.y).atan2(e.x - s.x)
    }

    /// Unit vector perpendicular to the chord. `reverse` selects the
    /// opposite side of the path.
    pub fn perpendicular(&self, reverse: bool) -> Point {
        let s = self.start_point();
        let e = self.end_point();
        let len = self.chord_length();
        let (mut px, mut py) = (-(e.y - s.y) / len, (e.x - s.x) / len);
        if reverse {
            px = -px;
            py = -py;
        }
        Point::new(px, py)
    }

    /// The underlying path vertices between the cursors, interior vertices
    /// included.
    pub fn segment_path(&self) -> Vec<Point> {
        self.path.extract(self.start_dist, self.end_dist)
    }

    pub fn is_degenerate(&self) -> bool {
        self.chord_length() < 1e-9
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn horizontal() -> IndexedPath {
        IndexedPath::new(vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)])
    }

    #[test]
    fn test_span_anchors() {
        let path = horizontal();
        let span = PathSpan::new(&path, 2.0, 8.0);
        assert!((span.chord_length() - 6.0).abs() < 1e-12);
        assert!((span.radius() - 3.0).abs() < 1e-12);
        let mid = span.midpoint();
        assert!((mid.x - 5.0).abs() < 1e-12 && mid.y.abs() < 1e-12);
        assert!(span.slope().abs() < 1e-12);
    }

    #[test]
    fn test_perpendicular_sides() {
        let path = horizontal();
        let span = PathSpan::new(&path, 0.0, 10.0);
        let up = span.perpendicular(false);
        let down = span.perpendicular(true);
        assert!((up.y + down.y).abs() < 1e-12);
        assert!((up.x).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_span() {
        let path = horizontal();
        assert!(PathSpan::new(&path, 4.0, 4.0).is_degenerate());
        assert!(!PathSpan::new(&path, 4.0, 5.0).is_degenerate());
    }
}
