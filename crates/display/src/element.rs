//! The drawable element union.
//!
//! A closed tagged union dispatched by the factory; each variant carries
//! only what its synthesis routine needs. Geometry is in world coordinates
//! (lon/lat degrees) until the factory projects it.

use drawing_common::{ArrowHeadKind, Color, FillMode, Point};

use crate::batch::Justification;

/// Category tag triggering front-specific stitching. Matched
/// case-insensitively.
pub const FRONT_CATEGORY: &str = "Front";

#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Line(LineElement),
    Arc(ArcElement),
    Symbol(SymbolElement),
    Vector(VectorElement),
    Text(TextElement),
    Combo(ComboElement),
    Kink(KinkElement),
    Tcm(TcmElement),
    Tca(TcaElement),
}

/// An attributed path drawn with a named line pattern.
#[derive(Debug, Clone, PartialEq)]
pub struct LineElement {
    pub path: Vec<Point>,
    pub closed: bool,
    pub filled: bool,
    pub fill_mode: FillMode,
    /// 0 disables smoothing; 1 is coarse, 2+ fine.
    pub smooth_level: u8,
    pub pattern: String,
    /// Channel colors; decorative segments index into these.
    pub colors: Vec<Color>,
    pub line_width: f64,
    pub size_scale: f64,
    /// Element category tag ("Front" selects front stitching).
    pub category: String,
    /// Mirror the pattern across the path spine.
    pub flip_side: bool,
}

impl LineElement {
    pub fn is_front(&self) -> bool {
        self.category.eq_ignore_ascii_case(FRONT_CATEGORY)
    }
}

impl Default for LineElement {
    fn default() -> Self {
        Self {
            path: Vec::new(),
            closed: false,
            filled: false,
            fill_mode: FillMode::Solid,
            smooth_level: 0,
            pattern: "LINE_SOLID".to_string(),
            colors: vec![Color::WHITE],
            line_width: 1.0,
            size_scale: 1.0,
            category: String::new(),
            flip_side: false,
        }
    }
}

/// An elliptical arc from center, circumference point and axis ratio.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcElement {
    pub center: Point,
    /// A point on the circumference; defines the major axis direction and
    /// radius.
    pub circumference: Point,
    /// Minor over major axis.
    pub axis_ratio: f64,
    /// Degrees relative to the major axis.
    pub start_angle: f64,
    pub end_angle: f64,
    pub color: Color,
    pub line_width: f64,
    /// Dash length in screen pixels; None draws solid.
    pub dash_length: Option<f64>,
}

/// Symbol patterns stamped at many locations.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolElement {
    pub locations: Vec<Point>,
    pub symbol: String,
    pub color: Color,
    pub line_width: f64,
    pub size_scale: f64,
    /// Also draw a wide mask beneath, in the background color.
    pub clear_background: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorKind {
    Arrow,
    WindBarb,
    HashMark,
}

/// A point observation rendered as a directional glyph.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorElement {
    pub location: Point,
    /// Speed in the element's native unit (knots for barbs).
    pub speed: f64,
    /// Degrees clockwise from north, "wind is coming from".
    pub direction: f64,
    pub kind: VectorKind,
    pub color: Color,
    pub size_scale: f64,
    pub line_width: f64,
    pub clear_background: bool,
    pub direction_only: bool,
    /// Arrowhead size factor for ARROW glyphs.
    pub arrow_head_size: f64,
    pub arrow_head: ArrowHeadKind,
}

impl Default for VectorElement {
    fn default() -> Self {
        Self {
            location: Point::new(0.0, 0.0),
            speed: 0.0,
            direction: 0.0,
            kind: VectorKind::WindBarb,
            color: Color::WHITE,
            size_scale: 1.0,
            line_width: 1.0,
            clear_background: false,
            direction_only: false,
            arrow_head_size: 1.0,
            arrow_head: ArrowHeadKind::Filled,
        }
    }
}

/// A positioned text anchor; rasterization is the backend's concern.
#[derive(Debug, Clone, PartialEq)]
pub struct TextElement {
    pub location: Point,
    pub lines: Vec<String>,
    pub size: f64,
    /// Degrees; interpreted against north when
    /// `rotation_relative_to_north`.
    pub rotation: f64,
    pub rotation_relative_to_north: bool,
    pub justification: Justification,
    pub color: Color,
    /// Offset from the anchor in half-character units.
    pub offset: (f64, f64),
}

/// Two symbols over a slash at one anchor.
#[derive(Debug, Clone, PartialEq)]
pub struct ComboElement {
    pub location: Point,
    pub upper_symbol: String,
    pub lower_symbol: String,
    pub color: Color,
    pub size_scale: f64,
    pub line_width: f64,
}

/// A two-point line with a kink spike and a terminal arrowhead.
#[derive(Debug, Clone, PartialEq)]
pub struct KinkElement {
    pub start: Point,
    pub end: Point,
    /// Parametric kink position along the line, in (0, 1).
    pub kink_position: f64,
    pub color: Color,
    pub line_width: f64,
}

/// Wind (or wave) radii around one forecast center, per quadrant.
#[derive(Debug, Clone, PartialEq)]
pub struct TcmWindQuarters {
    pub center: Point,
    /// Threshold in knots: 34, 50 or 64. Zero marks the 12-ft wave field.
    pub speed: f64,
    /// Quadrant radii in degrees of latitude, NE/NW/SW/SE.
    pub radii: [f64; 4],
}

/// Tropical cyclone message: forecast track, wind quarters, storm symbol.
#[derive(Debug, Clone, PartialEq)]
pub struct TcmElement {
    pub quarters: Vec<TcmWindQuarters>,
    /// Forecast center positions, oldest first.
    pub track: Vec<Point>,
    /// Maximum sustained wind in knots, selects the storm symbol.
    pub max_wind: f64,
    pub line_width: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvisorySeverity {
    Watch,
    Warning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvisoryKind {
    TropicalStorm,
    Hurricane,
}

/// One watch/warning breakpoint segment of a tropical cyclone advisory.
#[derive(Debug, Clone, PartialEq)]
pub struct TcaSegment {
    pub severity: AdvisorySeverity,
    pub kind: AdvisoryKind,
    pub path: Vec<Point>,
    /// Closed waterway segments fill their interior.
    pub closed_waterway: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TcaElement {
    pub segments: Vec<TcaSegment>,
    pub line_width: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_front_category_case_insensitive() {
        let mut line = LineElement::default();
        assert!(!line.is_front());
        line.category = "FRONT".to_string();
        assert!(line.is_front());
        line.category = "front".to_string();
        assert!(line.is_front());
        line.category = "Lines".to_string();
        assert!(!line.is_front());
    }
}
