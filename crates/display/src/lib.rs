//! Tessellation and glyph-synthesis core.
//!
//! Converts attributed drawing elements into screen-space polylines and
//! filled polygons grouped by color. The entry point is
//! [`DisplayFactory`]: it projects element geometry into pixel space,
//! smooths it, tiles line patterns along it, synthesizes wind glyphs and
//! symbols, and compiles everything into per-color
//! [`DisplayPrimitive`] buffers for a rasterization backend.

pub mod applicator;
pub mod arc;
pub mod arrowhead;
pub mod batch;
pub mod corner;
pub mod curve;
pub mod element;
pub mod factory;
pub mod intensity;
pub mod scale;
pub mod stitch;
pub mod vector;

pub use arc::ArcApplicator;
pub use arrowhead::ArrowHead;
pub use batch::{submit, DisplayPrimitive, Justification, RenderBatch, RenderSink, TextPrimitive};
pub use corner::CornerApplicator;
pub use curve::fit_parametric_curve;
pub use element::{
    AdvisoryKind, AdvisorySeverity, ArcElement, ComboElement, Element, KinkElement, LineElement,
    SymbolElement, TcaElement, TcaSegment, TcmElement, TcmWindQuarters, TextElement,
    VectorElement, VectorKind,
};
pub use factory::DisplayFactory;
pub use scale::ScaleContext;
pub use stitch::{stitch_named, stitch_pattern, ScaleMode};
pub use vector::{calculate_circle, synthesize_vector, BarbParts, GlyphSite};
