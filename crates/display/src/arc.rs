//! Arc point generation anchored to a path span.
//!
//! Angles are relative to the span's own slope, so the same segment
//! definition produces correctly oriented pips anywhere along a curve. The
//! implicit circle is centered on the chord midpoint with radius half the
//! chord, which puts 0° on the chord end point and 180° on the start point.

use drawing_common::Point;

use crate::applicator::PathSpan;

pub struct ArcApplicator<'a> {
    span: PathSpan<'a>,
    start_angle: f64,
    end_angle: f64,
    num_points: u32,
}

impl<'a> ArcApplicator<'a> {
    /// Angles in degrees relative to the span slope; `num_points` > 0.
    pub fn new(span: PathSpan<'a>, start_angle: f64, end_angle: f64, num_points: u32) -> Self {
        Self {
            span,
            start_angle,
            end_angle,
            num_points: num_points.max(1),
        }
    }

    /// The N+1 arc points from the start angle to the end angle.
    pub fn calculate_lines(&self) -> Vec<Point> {
        let mid = self.span.midpoint();
        let radius = self.span.radius();
        let slope = self.span.slope();
        let sweep = self.end_angle - self.start_angle;

        let mut points = Vec::with_capacity(self.num_points as usize + 1);
        for i in 0..=self.num_points {
            let angle = self.start_angle + sweep * f64::from(i) / f64::from(self.num_points);
            let theta = slope + angle.to_radians();
            points.push(Point::new(
                mid.x + radius * theta.cos(),
                mid.y + radius * theta.sin(),
            ));
        }
        points
    }

    /// A closed ring for filling. With `include_segment` the span's own
    /// path is prepended, closing the shape through the chord.
    pub fn calculate_fill_area(&self, include_segment: bool) -> Vec<Point> {
        let mut ring = if include_segment {
            self.span.segment_path()
        } else {
            Vec::new()
        };
        ring.extend(self.calculate_lines());
        if ring.len() >= 2 {
            let first = ring[0];
            if ring[ring.len() - 1].distance(&first) > 1e-9 {
                ring.push(first);
            }
        }
        ring
    }
}
