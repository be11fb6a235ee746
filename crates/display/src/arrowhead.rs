//! Terminal arrowheads.

use drawing_common::{ArrowHeadKind, Point};

/// A triangular arrowhead at a path tip.
#[derive(Debug, Clone, Copy)]
pub struct ArrowHead {
    tip: Point,
    /// Pointing direction in degrees, screen coordinates.
    direction: f64,
    /// Apex angle in degrees.
    point_angle: f64,
    /// Distance from base to tip in pixels.
    height: f64,
    kind: ArrowHeadKind,
}

impl ArrowHead {
    pub fn new(tip: Point, direction: f64, point_angle: f64, height: f64, kind: ArrowHeadKind) -> Self {
        Self {
            tip,
            direction,
            point_angle,
            height,
            kind,
        }
    }

    pub fn kind(&self) -> ArrowHeadKind {
        self.kind
    }

    /// Path distance the head consumes. Only FILLED heads shorten the
    /// pattern-tiled portion of the path.
    pub fn length(&self) -> f64 {
        match self.kind {
            ArrowHeadKind::Filled => self.height,
            ArrowHeadKind::Open => 0.0,
        }
    }

    fn wings(&self) -> (Point, Point) {
        let dir = self.direction.to_radians();
        let base = Point::new(
            self.tip.x - self.height * dir.cos(),
            self.tip.y - self.height * dir.sin(),
        );
        let half_width = self.height * (self.point_angle.to_radians() / 2.0).tan();
        let (px, py) = (-dir.sin(), dir.cos());
        (
            Point::new(base.x + half_width * px, base.y + half_width * py),
            Point::new(base.x - half_width * px, base.y - half_width * py),
        )
    }

    /// Three-point V stroke for an OPEN head.
    pub fn open_outline(&self) -> Vec<Point> {
        let (left, right) = self.wings();
        vec![left, self.tip, right]
    }

    /// Closed triangle ring for a FILLED head.
    pub fn filled_ring(&self) -> Vec<Point> {
        let (left, right) = self.wings();
        vec![self.tip, left, right, self.tip]
    }
}
