//! Mercator projection.
//!
//! Non-linear in latitude. Used in tests to exercise the paths that correct
//! for non-uniform projections, in particular the north offset angle when the
//! view is built over a rotated graticule.

use std::f64::consts::PI;

use drawing_common::Point;

use crate::transform::{MapProjection, MapView};

/// Latitude clamp keeping the Mercator y finite.
const MAX_LAT: f64 = 85.051_128_779_806_59;

fn mercator_y(lat_deg: f64) -> f64 {
    let lat = lat_deg.clamp(-MAX_LAT, MAX_LAT).to_radians();
    (PI / 4.0 + lat / 2.0).tan().ln()
}

fn inverse_mercator_y(y: f64) -> f64 {
    (2.0 * y.exp().atan() - PI / 2.0).to_degrees()
}

#[derive(Debug, Clone, Copy)]
pub struct Mercator {
    view: MapView,
    y_top: f64,
    y_bottom: f64,
}

impl Mercator {
    pub fn new(view: MapView) -> Self {
        Self {
            view,
            y_top: mercator_y(view.max_lat),
            y_bottom: mercator_y(view.min_lat),
        }
    }

    pub fn view(&self) -> &MapView {
        &self.view
    }
}

impl MapProjection for Mercator {
    fn world_to_pixel(&self, world: Point) -> Point {
        let v = &self.view;
        let x = (world.x - v.min_lon) / v.extent_width() * v.canvas_width;
        let y = (self.y_top - mercator_y(world.y)) / (self.y_top - self.y_bottom)
            * v.canvas_height;
        Point::new(x, y)
    }

    fn pixel_to_world(&self, pixel: Point) -> Point {
        let v = &self.view;
        let lon = v.min_lon + pixel.x / v.canvas_width * v.extent_width();
        let merc = self.y_top - pixel.y / v.canvas_height * (self.y_top - self.y_bottom);
        Point::new(lon, inverse_mercator_y(merc))
    }
}
