//! Line pattern definitions.
//!
//! A line pattern is a named, ordered list of segments tiled repeatedly along
//! a path. Segment lengths are in pattern-space units; the stitcher scales
//! them to pixels and rescales whole repeats so a path always starts and ends
//! on a pattern boundary.

use serde::{Deserialize, Serialize};

/// The shape drawn for one pattern segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SegmentKind {
    Blank,
    Line,
    Circle,
    CircleFilled,
    #[serde(rename = "ARC_180_DEGREE")]
    Arc180,
    #[serde(rename = "ARC_180_DEGREE_FILLED")]
    Arc180Filled,
    #[serde(rename = "ARC_180_DEGREE_CLOSED")]
    Arc180Closed,
    #[serde(rename = "ARC_90_DEGREE")]
    Arc90,
    #[serde(rename = "ARC_270_DEGREE")]
    Arc270,
    #[serde(rename = "ARC_270_DEGREE_WITH_LINE")]
    Arc270WithLine,
    Box,
    BoxFilled,
    XPattern,
    ZPattern,
    DoubleLine,
    Tick,
    ArrowHead,
}

impl SegmentKind {
    /// Segments rescaled by the blank/line-only scale mode.
    pub fn is_blank_or_line(&self) -> bool {
        matches!(self, SegmentKind::Blank | SegmentKind::Line)
    }
}

/// One segment of a line pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternSegment {
    pub kind: SegmentKind,
    /// Length along the path in pattern-space units.
    pub length: f64,
    /// Index into the element's declared colors.
    #[serde(default)]
    pub color_channel: usize,
    /// Perpendicular offset (height) for box/tick/corner segments, in
    /// pattern-space units. Sign selects the side of the path.
    #[serde(default)]
    pub offset_size: f64,
    /// Subdivision count for circular/arc segments. Always > 0 for those.
    #[serde(default = "default_arc_count")]
    pub num_in_arc: u32,
    /// Draw the arc on the opposite side of the path.
    #[serde(default)]
    pub reverse_side: bool,
}

fn default_arc_count() -> u32 {
    16
}

impl PatternSegment {
    pub fn new(kind: SegmentKind, length: f64) -> Self {
        Self {
            kind,
            length,
            color_channel: 0,
            offset_size: 0.0,
            num_in_arc: 16,
            reverse_side: false,
        }
    }

    pub fn with_channel(mut self, channel: usize) -> Self {
        self.color_channel = channel;
        self
    }

    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset_size = offset;
        self
    }

    pub fn with_arc_count(mut self, count: u32) -> Self {
        self.num_in_arc = count;
        self
    }

    pub fn reversed(mut self) -> Self {
        self.reverse_side = true;
        self
    }
}

/// Terminal arrowhead style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ArrowHeadKind {
    /// Two-stroke "V" outline.
    Open,
    /// Closed filled triangle. Consumes path length when tiling.
    Filled,
}

/// Terminal arrowhead declared by a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PatternArrow {
    pub kind: ArrowHeadKind,
    /// Apex angle of the head in degrees.
    pub point_angle: f64,
    /// Maximum perpendicular extent of the pattern, used to size the head.
    pub max_extent: f64,
}

/// A named decorative line pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinePattern {
    pub name: String,
    pub segments: Vec<PatternSegment>,
    #[serde(default)]
    pub arrow: Option<PatternArrow>,
    /// Pattern-space lengths derive from the caller's line width and must be
    /// updated before tiling.
    #[serde(default)]
    pub needs_length_update: bool,
}

impl LinePattern {
    pub fn new(name: impl Into<String>, segments: Vec<PatternSegment>) -> Self {
        Self {
            name: name.into(),
            segments,
            arrow: None,
            needs_length_update: false,
        }
    }

    pub fn with_arrow(mut self, arrow: PatternArrow) -> Self {
        self.arrow = Some(arrow);
        self
    }

    pub fn with_length_update(mut self) -> Self {
        self.needs_length_update = true;
        self
    }

    /// Length of one repeat in pattern-space units.
    pub fn length(&self) -> f64 {
        self.segments.iter().map(|s| s.length).sum()
    }

    pub fn num_segments(&self) -> usize {
        self.segments.len()
    }

    pub fn has_arrow_head(&self) -> bool {
        self.arrow.is_some()
    }

    pub fn max_extent(&self) -> f64 {
        self.arrow.map(|a| a.max_extent).unwrap_or(0.0)
    }

    /// Copy with every segment length expressed in multiples of `unit`
    /// (pattern-space units per line-width unit). Applied once per draw for
    /// patterns flagged `needs_length_update`.
    pub fn update_length(&self, unit: f64) -> LinePattern {
        let mut out = self.clone();
        for seg in &mut out.segments {
            seg.length *= unit;
            seg.offset_size *= unit;
        }
        out
    }

    /// Copy with every segment rescaled so one repeat has length `target`.
    pub fn scale_to_length(&self, target: f64) -> LinePattern {
        let total = self.length();
        if total <= 0.0 {
            return self.clone();
        }
        let factor = target / total;
        let mut out = self.clone();
        for seg in &mut out.segments {
            seg.length *= factor;
        }
        out
    }

    /// Copy with only BLANK/LINE segments rescaled so one repeat has length
    /// `target`. Decorative segments keep their size, so front pips do not
    /// vary with path length. Falls back to a uniform rescale when the
    /// pattern has no flexible length to absorb the change.
    pub fn scale_blank_line_to_length(&self, target: f64) -> LinePattern {
        let fixed: f64 = self
            .segments
            .iter()
            .filter(|s| !s.kind.is_blank_or_line())
            .map(|s| s.length)
            .sum();
        let flexible: f64 = self
            .segments
            .iter()
            .filter(|s| s.kind.is_blank_or_line())
            .map(|s| s.length)
            .sum();

        if flexible <= 0.0 || target <= fixed {
            return self.scale_to_length(target);
        }

        let factor = (target - fixed) / flexible;
        let mut out = self.clone();
        for seg in &mut out.segments {
            if seg.kind.is_blank_or_line() {
                seg.length *= factor;
            }
        }
        out
    }

    /// Copy mirrored across the path spine.
    pub fn flip_side(&self) -> LinePattern {
        let mut out = self.clone();
        for seg in &mut out.segments {
            seg.reverse_side = !seg.reverse_side;
            seg.offset_size = -seg.offset_size;
        }
        out
    }
}
