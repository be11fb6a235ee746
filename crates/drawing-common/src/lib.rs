//! Common types shared across the drawing-display workspace.

pub mod catalog;
pub mod color;
pub mod error;
pub mod geom;
pub mod pattern;
pub mod style;
pub mod symbol;

pub use catalog::PatternCatalog;
pub use color::Color;
pub use error::{DrawingError, DrawingResult};
pub use geom::{ensure_closed, path_length, IndexedPath, Point};
pub use pattern::{ArrowHeadKind, LinePattern, PatternArrow, PatternSegment, SegmentKind};
pub use style::{FillMode, LayerStyle};
pub use symbol::{SymbolPart, SymbolPattern};
