//! The projection interface the drawing core consumes.

use drawing_common::Point;

use crate::error::{ProjectionError, ProjectionResult};

/// A rectangular view of the world mapped onto a pixel canvas.
///
/// Extent coordinates are lon/lat degrees. The canvas is y-down, so
/// `max_lat` maps to pixel row 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapView {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
    pub canvas_width: f64,
    pub canvas_height: f64,
}

impl MapView {
    pub fn new(
        min_lon: f64,
        min_lat: f64,
        max_lon: f64,
        max_lat: f64,
        canvas_width: f64,
        canvas_height: f64,
    ) -> ProjectionResult<Self> {
        if max_lon <= min_lon || max_lat <= min_lat {
            return Err(ProjectionError::InvalidView(format!(
                "empty extent: lon {min_lon}..{max_lon}, lat {min_lat}..{max_lat}"
            )));
        }
        if canvas_width <= 0.0 || canvas_height <= 0.0 {
            return Err(ProjectionError::InvalidView(format!(
                "empty canvas: {canvas_width}x{canvas_height}"
            )));
        }
        Ok(Self {
            min_lon,
            min_lat,
            max_lon,
            max_lat,
            canvas_width,
            canvas_height,
        })
    }

    pub fn extent_width(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    pub fn extent_height(&self) -> f64 {
        self.max_lat - self.min_lat
    }
}

/// World-to-pixel mapping consumed by the drawing core.
pub trait MapProjection {
    /// Project a world point (x = lon degrees, y = lat degrees) to pixels.
    fn world_to_pixel(&self, world: Point) -> Point;

    /// Inverse of [`world_to_pixel`](Self::world_to_pixel).
    fn pixel_to_world(&self, pixel: Point) -> Point;

    /// Project a whole world path.
    fn project_path(&self, world: &[Point]) -> Vec<Point> {
        world.iter().map(|&p| self.world_to_pixel(p)).collect()
    }
}

/// On-screen deviation of true north from vertical at a world location,
/// in degrees.
///
/// Projects two points slightly south and north of the location and measures
/// the screen bearing between them. Zero on an unrotated north-up view;
/// nonzero wherever the projection bends meridians.
pub fn north_offset_angle(projection: &dyn MapProjection, location: Point) -> f64 {
    let south = projection.world_to_pixel(Point::new(location.x, location.y - 0.05));
    let north = projection.world_to_pixel(Point::new(location.x, location.y + 0.05));
    let bearing = (north.y - south.y).atan2(north.x - south.x).to_degrees();
    -90.0 - bearing
}
