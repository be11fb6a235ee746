//! Parametric curve smoothing.
//!
//! Densifies a polyline into a smooth curve through every input vertex.
//! Each input segment is subdivided by a cubic blend over four consecutive
//! control points; phantom control points extend the sequence past both
//! ends so the first and last segments blend like interior ones.

use drawing_common::Point;

/// Smooth a polyline into a denser curve passing exactly through every
/// input point.
///
/// `spacing` is the target distance between output sub-points: each segment
/// contributes `⌊chord/spacing⌋ + 1` points. Inputs with fewer than 3
/// points come back unchanged. For closed paths the phantom control points
/// are the interior neighbors on the opposite end; for open paths they are
/// quadratic extrapolations.
pub fn fit_parametric_curve(points: &[Point], spacing: f64, closed: bool) -> Vec<Point> {
    if points.len() < 3 || spacing <= 0.0 {
        return points.to_vec();
    }

    let controls = extend_with_phantoms(points, closed);
    let mut out = Vec::with_capacity(points.len() * 2);
    out.push(points[0]);

    for i in 0..points.len() - 1 {
        // Controls for the segment points[i] -> points[i+1].
        let p0 = controls[i];
        let p1 = controls[i + 1];
        let p2 = controls[i + 2];
        let p3 = controls[i + 3];

        let chord = p1.distance(&p2);
        let subs = (chord / spacing).floor() as usize + 1;
        for j in 1..=subs {
            let t = j as f64 / subs as f64;
            out.push(blend(p0, p1, p2, p3, t));
        }
        // t = 1 lands exactly on p2; pin it against accumulated error.
        let last = out.len() - 1;
        out[last] = points[i + 1];
    }

    out
}

fn extend_with_phantoms(points: &[Point], closed: bool) -> Vec<Point> {
    let n = points.len();
    let duplicated_end = points[0].distance(&points[n - 1]) < 1e-9;

    let (before, after) = if closed {
        if duplicated_end {
            (points[n - 2], points[1])
        } else {
            (points[n - 1], points[0])
        }
    } else {
        (
            extrapolate(points[0], points[1], points[2]),
            extrapolate(points[n - 1], points[n - 2], points[n - 3]),
        )
    };

    let mut controls = Vec::with_capacity(n + 2);
    controls.push(before);
    controls.extend_from_slice(points);
    controls.push(after);
    controls
}

/// Quadratic phantom point: (5·P0 − 4·P1 + P2) / 2.
fn extrapolate(p0: Point, p1: Point, p2: Point) -> Point {
    Point::new(
        (5.0 * p0.x - 4.0 * p1.x + p2.x) / 2.0,
        (5.0 * p0.y - 4.0 * p1.y + p2.y) / 2.0,
    )
}

/// Cubic blend over four consecutive control points, t in (0, 1].
fn blend(p0: Point, p1: Point, p2: Point, p3: Point, t: f64) -> Point {
    let t2 = t * t;
    let t3 = t2 * t;
    let weight = |a: f64, b: f64, c: f64, d: f64| {
        0.5 * (2.0 * b + (c - a) * t + (2.0 * a - 5.0 * b + 4.0 * c - d) * t2
            + (3.0 * b - a - 3.0 * c + d) * t3)
    };
    Point::new(
        weight(p0.x, p1.x, p2.x, p3.x),
        weight(p0.y, p1.y, p2.y, p3.y),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_input_unchanged() {
        let two = vec![Point::new(0.0, 0.0), Point::new(5.0, 5.0)];
        assert_eq!(fit_parametric_curve(&two, 1.0, false), two);
    }

    #[test]
    fn test_endpoints_preserved() {
        let path = vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
        ];
        let fitted = fit_parametric_curve(&path, 5.0, false);
        assert_eq!(fitted[0], path[0]);
        assert_eq!(*fitted.last().unwrap(), path[2]);
        assert!(fitted.len() > path.len());
    }

    #[test]
    fn test_interior_points_on_curve() {
        // Every input vertex appears in the output.
        let path = vec![
            Point::new(0.0, 0.0),
            Point::new(4.0, 3.0),
            Point::new(8.0, 0.0),
            Point::new(12.0, 3.0),
        ];
        let fitted = fit_parametric_curve(&path, 1.0, false);
        for p in &path {
            assert!(
                fitted.iter().any(|q| q.distance(p) < 1e-9),
                "missing input vertex {p:?}"
            );
        }
    }

    #[test]
    fn test_point_count() {
        // Each segment contributes floor(chord/spacing)+1 points.
        let path = vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
        ];
        let fitted = fit_parametric_curve(&path, 5.0, false);
        assert_eq!(fitted.len(), 1 + 3 + 3);
    }

    #[test]
    fn test_monotone_progress_on_l_path() {
        let path = vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
        ];
        let fitted = fit_parametric_curve(&path, 5.0, false);
        // Progress along the L (x + y grows toward the far corner) never
        // backtracks, even where the blend overshoots one axis.
        for pair in fitted.windows(2) {
            assert!(pair[1].x + pair[1].y >= pair[0].x + pair[0].y - 1e-9);
        }
    }
}
