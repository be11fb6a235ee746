//! Plate-carrée (equirectangular) projection.
//!
//! Linear in both axes. The reference projection for the drawing tests: on a
//! north-up plate-carrée view the north offset angle is identically zero.

use drawing_common::Point;

use crate::transform::{MapProjection, MapView};

#[derive(Debug, Clone, Copy)]
pub struct PlateCarree {
    view: MapView,
}

impl PlateCarree {
    pub fn new(view: MapView) -> Self {
        Self { view }
    }

    pub fn view(&self) -> &MapView {
        &self.view
    }
}

impl MapProjection for PlateCarree {
    fn world_to_pixel(&self, world: Point) -> Point {
        let v = &self.view;
        let x = (world.x - v.min_lon) / v.extent_width() * v.canvas_width;
        let y = (v.max_lat - world.y) / v.extent_height() * v.canvas_height;
        Point::new(x, y)
    }

    fn pixel_to_world(&self, pixel: Point) -> Point {
        let v = &self.view;
        let lon = v.min_lon + pixel.x / v.canvas_width * v.extent_width();
        let lat = v.max_lat - pixel.y / v.canvas_height * v.extent_height();
        Point::new(lon, lat)
    }
}
