//! Common fixtures for drawing-display tests.

use drawing_common::{PatternCatalog, Point};
use projection::{MapView, PlateCarree};

/// A north-up plate-carrée view over the whole world, 720x360 canvas:
/// two pixels per degree, device scale 0.6.
pub fn world_view() -> MapView {
    MapView::new(-180.0, -90.0, 180.0, 90.0, 720.0, 360.0).expect("valid view")
}

/// A CONUS-ish view with a 600x300 canvas over a 60x30 degree extent.
pub fn conus_view() -> MapView {
    MapView::new(-125.0, 22.0, -65.0, 52.0, 600.0, 300.0).expect("valid view")
}

/// Reference projection for the world view.
pub fn world_projection() -> PlateCarree {
    PlateCarree::new(world_view())
}

/// The standard built-in catalog.
pub fn catalog() -> PatternCatalog {
    PatternCatalog::default()
}

/// A straight horizontal pixel path of the given length starting at the
/// origin.
pub fn horizontal_path(length: f64) -> Vec<Point> {
    vec![Point::new(0.0, 0.0), Point::new(length, 0.0)]
}

/// The three-point L path used throughout the smoothing tests.
pub fn l_path() -> Vec<Point> {
    vec![
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(10.0, 10.0),
    ]
}

/// A closed unit-ish diamond in world coordinates around the origin.
pub fn diamond_world() -> Vec<Point> {
    vec![
        Point::new(0.0, 10.0),
        Point::new(10.0, 0.0),
        Point::new(0.0, -10.0),
        Point::new(-10.0, 0.0),
    ]
}

/// A world path crossing the antimeridian eastward.
pub fn antimeridian_path() -> Vec<Point> {
    vec![
        Point::new(170.0, 10.0),
        Point::new(178.0, 12.0),
        Point::new(-176.0, 14.0),
        Point::new(-168.0, 16.0),
    ]
}
