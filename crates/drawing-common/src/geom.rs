//! Pixel-space geometry: points and length-indexed paths.
//!
//! A length-indexed path supports extraction of points and sub-paths by
//! distance from the start of the line, which is the primitive the pattern
//! stitcher and glyph synthesizers are built on.

use serde::{Deserialize, Serialize};

/// A point in 2-D space. Used both for pixel coordinates (y grows downward)
/// and for geographic coordinates (x = longitude, y = latitude).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: &Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Total length of a polyline.
pub fn path_length(points: &[Point]) -> f64 {
    points.windows(2).map(|w| w[0].distance(&w[1])).sum()
}

/// Append the first point to the end if the path is not already closed.
pub fn ensure_closed(points: &[Point]) -> Vec<Point> {
    let mut out = points.to_vec();
    if let (Some(first), Some(last)) = (points.first(), points.last()) {
        if first.x != last.x || first.y != last.y {
            out.push(*first);
        }
    }
    out
}

/// A polyline indexed by distance from its start.
///
/// Distances are clamped to the line; negative distances measure from the
/// end of the line.
#[derive(Debug, Clone)]
pub struct IndexedPath {
    points: Vec<Point>,
    // cumulative[i] = distance from start to points[i]
    cumulative: Vec<f64>,
}

impl IndexedPath {
    pub fn new(points: Vec<Point>) -> Self {
        let mut cumulative = Vec::with_capacity(points.len());
        let mut total = 0.0;
        cumulative.push(0.0);
        for w in points.windows(2) {
            total += w[0].distance(&w[1]);
            cumulative.push(total);
        }
        Self { points, cumulative }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn length(&self) -> f64 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    fn clamp_index(&self, distance: f64) -> f64 {
        let len = self.length();
        let d = if distance < 0.0 { len + distance } else { distance };
        d.clamp(0.0, len)
    }

    /// The point at a given distance along the path.
    pub fn point_at(&self, distance: f64) -> Point {
        let d = self.clamp_index(distance);

        // find the segment containing d
        let idx = match self
            .cumulative
            .binary_search_by(|c| c.partial_cmp(&d).expect("finite distance"))
        {
            Ok(i) => return self.points[i],
            Err(i) => i,
        };

        if idx == 0 {
            return self.points[0];
        }
        if idx >= self.points.len() {
            return *self.points.last().expect("non-empty path");
        }

        let seg_start = self.cumulative[idx - 1];
        let seg_len = self.cumulative[idx] - seg_start;
        if seg_len <= 0.0 {
            return self.points[idx - 1];
        }

        let t = (d - seg_start) / seg_len;
        let a = self.points[idx - 1];
        let b = self.points[idx];
        Point::new(a.x + t * (b.x - a.x), a.y + t * (b.y - a.y))
    }

    /// Extract the sub-path between two distances, keeping any interior
    /// vertices. Always returns at least two points.
    pub fn extract(&self, start: f64, end: f64) -> Vec<Point> {
        let (s, e) = {
            let s = self.clamp_index(start);
            let e = self.clamp_index(end);
            if s <= e {
                (s, e)
            } else {
                (e, s)
            }
        };

        let mut out = vec![self.point_at(s)];
        for (i, &c) in self.cumulative.iter().enumerate() {
            if c > s && c < e {
                out.push(self.points[i]);
            }
        }
        out.push(self.point_at(e));
        out
    }
}
