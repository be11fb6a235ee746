//! Coordinate transformations between world (lon/lat degrees) and pixel space.
//!
//! The drawing core consumes projections through the [`MapProjection`] trait;
//! the implementations here cover the views the workspace tests against. Pixel
//! space is y-down with the origin at the top-left of the canvas.

pub mod error;
pub mod mercator;
pub mod plate_carree;
pub mod transform;
pub mod wrap;

pub use error::{ProjectionError, ProjectionResult};
pub use mercator::Mercator;
pub use plate_carree::PlateCarree;
pub use transform::{north_offset_angle, MapProjection, MapView};
pub use wrap::split_world_wrap;
