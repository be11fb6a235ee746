//! Corner geometry anchored to a path span.
//!
//! Sibling of the arc applicator with the same contract shape: geometry is
//! built from the span's chord endpoints offset perpendicular to the chord
//! by a configured height. Covers the box, X, Z, double-line and tick
//! pattern segments.

use drawing_common::Point;

use crate::applicator::PathSpan;

pub struct CornerApplicator<'a> {
    span: PathSpan<'a>,
    height: f64,
}

impl<'a> CornerApplicator<'a> {
    pub fn new(span: PathSpan<'a>) -> Self {
        Self { span, height: 0.0 }
    }

    /// Perpendicular offset of the corner points. Sign selects the side.
    pub fn set_height(&mut self, height: f64) {
        self.height = height;
    }

    fn corners(&self) -> [Point; 4] {
        let s = self.span.start_point();
        let e = self.span.end_point();
        let perp = self.span.perpendicular(false);
        let (ox, oy) = (perp.x * self.height, perp.y * self.height);
        [
            Point::new(s.x + ox, s.y + oy),
            Point::new(e.x + ox, e.y + oy),
            Point::new(e.x - ox, e.y - oy),
            Point::new(s.x - ox, s.y - oy),
        ]
    }

    /// Closed box outline around the chord.
    pub fn box_outline(&self) -> Vec<Point> {
        let [a, b, c, d] = self.corners();
        vec![a, b, c, d, a]
    }

    /// Two crossing diagonals.
    pub fn x_pattern(&self) -> Vec<Vec<Point>> {
        let [a, b, c, d] = self.corners();
        vec![vec![a, c], vec![d, b]]
    }

    /// One continuous Z stroke.
    pub fn z_pattern(&self) -> Vec<Point> {
        let [a, b, c, d] = self.corners();
        vec![a, b, d, c]
    }

    /// Two parallel strokes either side of the chord.
    pub fn double_line(&self) -> Vec<Vec<Point>> {
        let [a, b, c, d] = self.corners();
        vec![vec![a, b], vec![d, c]]
    }

    /// A tick from the chord midpoint, perpendicular to the chord.
    pub fn tick(&self) -> Vec<Point> {
        let mid = self.span.midpoint();
        let perp = self.span.perpendicular(false);
        vec![
            mid,
            Point::new(mid.x + perp.x * self.height, mid.y + perp.y * self.height),
        ]
    }
}
