//! World-wrap correction for paths crossing the antimeridian.
//!
//! A geographic path whose longitudes jump across the ±180° boundary would
//! project as a segment sweeping the whole canvas. The splitter unwraps the
//! longitudes into a continuous sequence and cuts it at every antimeridian
//! crossing, interpolating the crossing latitude, so each sub-path projects
//! as a continuous screen segment and can be tessellated independently.

use drawing_common::Point;

/// Split a world path (x = lon degrees, y = lat degrees) at the antimeridian.
///
/// Returns one or more sub-paths with longitudes in [-180, 180]. A path with
/// no crossing comes back as a single sub-path, unchanged.
pub fn split_world_wrap(path: &[Point]) -> Vec<Vec<Point>> {
    if path.len() < 2 {
        return vec![path.to_vec()];
    }

    // Unwrap: make consecutive longitude deltas at most 180 in magnitude.
    let mut unwrapped: Vec<Point> = Vec::with_capacity(path.len());
    unwrapped.push(path[0]);
    for p in &path[1..] {
        let prev = unwrapped.last().map(|q| q.x).unwrap_or(p.x);
        let mut lon = p.x;
        while lon - prev > 180.0 {
            lon -= 360.0;
        }
        while lon - prev < -180.0 {
            lon += 360.0;
        }
        unwrapped.push(Point::new(lon, p.y));
    }

    // Shift bringing the first point into [-180, 180].
    let mut shift = (unwrapped[0].x / 360.0).round() * 360.0;

    let mut sub_paths = Vec::new();
    let mut current = vec![Point::new(unwrapped[0].x - shift, unwrapped[0].y)];

    for window in unwrapped.windows(2) {
        let (a, b) = (window[0], window[1]);
        // Cut at every boundary the segment crosses before emitting b.
        loop {
            let local_b = b.x - shift;
            let boundary = if local_b > 180.0 {
                180.0
            } else if local_b < -180.0 {
                -180.0
            } else {
                break;
            };
            let world_boundary = boundary + shift;
            let t = (world_boundary - a.x) / (b.x - a.x);
            let lat = a.y + t * (b.y - a.y);
            current.push(Point::new(boundary, lat));
            sub_paths.push(std::mem::take(&mut current));
            shift += boundary.signum() * 360.0;
            current.push(Point::new(-boundary, lat));
        }
        current.push(Point::new(b.x - shift, b.y));
    }

    if current.len() >= 2 {
        sub_paths.push(current);
    }
    sub_paths
}
