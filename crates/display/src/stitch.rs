//! Pattern stitching: tiling a line pattern along a path.
//!
//! The path is walked in whole-pattern repeats whose lengths are rescaled
//! so the tiling starts and ends exactly on pattern boundaries. Each
//! segment kind maps to arc or corner geometry anchored to its span of the
//! path. A path shorter than one repeat degrades to a plain solid line,
//! never a clipped partial glyph.

use tracing::warn;

use drawing_common::{
    ArrowHeadKind, Color, IndexedPath, LinePattern, PatternCatalog, PatternSegment, Point,
    SegmentKind,
};

use crate::applicator::PathSpan;
use crate::arc::ArcApplicator;
use crate::arrowhead::ArrowHead;
use crate::batch::RenderBatch;
use crate::corner::CornerApplicator;

/// Arrowhead height in pattern-space units before the pattern extent
/// correction.
const ARROW_HEAD_HEIGHT: f64 = 3.5;

/// How repeats absorb the closing rescale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleMode {
    /// Rescale every segment uniformly.
    AllSegments,
    /// Rescale only BLANK/LINE segments, keeping decorative pips at
    /// constant visual size. Used for front lines.
    BlankLineOnly,
}

/// Resolve a pattern by name and stitch it along the path. An unresolved
/// name is logged and degrades to a solid line.
#[allow(clippy::too_many_arguments)]
pub fn stitch_named(
    batch: &mut RenderBatch,
    catalog: &PatternCatalog,
    name: &str,
    path: &[Point],
    scale: f64,
    line_width: f64,
    mode: ScaleMode,
    colors: &[Color],
) {
    match catalog.line_pattern(name) {
        Ok(pattern) => {
            stitch_pattern(batch, pattern, path, scale, line_width, mode, colors);
        }
        Err(err) => {
            warn!(pattern = name, error = %err, "pattern lookup failed, drawing solid line");
            batch.add_polyline(channel_color(colors, 0), line_width, path.to_vec());
        }
    }
}

/// Tile `pattern` along `path`, emitting per-channel geometry into `batch`.
///
/// `scale` is the effective pattern scale (device scale times element size
/// scale, with any front correction already applied). `colors` are the
/// element's resolved colors; segment channels out of range clamp to 0.
pub fn stitch_pattern(
    batch: &mut RenderBatch,
    pattern: &LinePattern,
    path: &[Point],
    scale: f64,
    line_width: f64,
    mode: ScaleMode,
    colors: &[Color],
) {
    if path.len() < 2 {
        return;
    }
    let indexed = IndexedPath::new(path.to_vec());
    let total = indexed.length();
    if total <= 0.0 {
        return;
    }

    let head = pattern.arrow.map(|arrow| {
        let mut height = scale * ARROW_HEAD_HEIGHT;
        let extent = pattern.max_extent() * scale * 1.5;
        if extent > height {
            height = extent;
        }
        let tip = indexed.point_at(total);
        let back = indexed.point_at((total - height.min(total * 0.5)).max(0.0));
        let direction = (tip.y - back.y).atan2(tip.x - back.x).to_degrees();
        ArrowHead::new(tip, direction, arrow.point_angle, height, arrow.kind)
    });

    // A FILLED head consumes path distance; the tiling stops at its base.
    let tiled_length = total - head.map(|h| h.length()).unwrap_or(0.0);

    let one_repeat = pattern.length() * scale;
    let mut stitched = false;
    if one_repeat > 0.0 && tiled_length > 0.0 {
        let mut repeats = (tiled_length / one_repeat).floor() as u64;
        if tiled_length - repeats as f64 * one_repeat > one_repeat / 2.0 {
            repeats += 1;
        }
        if repeats >= 1 {
            let repeat_length = tiled_length / repeats as f64;
            let scaled = rescale(pattern, scale, repeat_length, mode);
            let mut cursor = 0.0;
            for _ in 0..repeats {
                for segment in &scaled.segments {
                    let start = cursor;
                    let end = cursor + segment.length;
                    cursor = end;
                    apply_segment(batch, &indexed, segment, start, end, line_width, colors);
                }
            }
            stitched = true;
        }
    }

    if !stitched {
        // Shorter than one repeat: plain solid line.
        let end = indexed.point_at(tiled_length.max(0.0));
        let mut solid = indexed.extract(0.0, tiled_length.max(0.0));
        if solid.len() < 2 {
            solid = vec![indexed.point_at(0.0), end];
        }
        batch.add_polyline(channel_color(colors, 0), line_width, solid);
    }

    if let Some(head) = head {
        let color = channel_color(colors, 0);
        match head.kind() {
            ArrowHeadKind::Open => {
                batch.add_polyline(color, line_width, head.open_outline());
            }
            ArrowHeadKind::Filled => {
                batch.add_polygon(color, 1.0, head.filled_ring());
            }
        }
    }
}

fn rescale(pattern: &LinePattern, scale: f64, repeat_length: f64, mode: ScaleMode) -> LinePattern {
    // Work in pixels: segment lengths and offsets times the effective scale.
    let mut pixels = pattern.clone();
    for seg in &mut pixels.segments {
        seg.length *= scale;
        seg.offset_size *= scale;
    }
    match mode {
        ScaleMode::AllSegments => pixels.scale_to_length(repeat_length),
        ScaleMode::BlankLineOnly => pixels.scale_blank_line_to_length(repeat_length),
    }
}

fn channel_color(colors: &[Color], channel: usize) -> Color {
    // Out-of-range channels clamp to 0.
    let channel = if channel < colors.len() { channel } else { 0 };
    colors.get(channel).copied().unwrap_or(Color::WHITE)
}

fn apply_segment(
    batch: &mut RenderBatch,
    path: &IndexedPath,
    segment: &PatternSegment,
    start: f64,
    end: f64,
    line_width: f64,
    colors: &[Color],
) {
    if segment.kind == SegmentKind::Blank {
        return;
    }
    let span = PathSpan::new(path, start, end);
    if span.is_degenerate() {
        return;
    }
    let color = channel_color(colors, segment.color_channel);
    let n = segment.num_in_arc.max(1);
    let rev = segment.reverse_side;

    let arc = |start_angle: f64, end_angle: f64| {
        let (s, e) = if rev {
            (-start_angle, -end_angle)
        } else {
            (start_angle, end_angle)
        };
        ArcApplicator::new(span, s, e, n)
    };

    match segment.kind {
        SegmentKind::Blank => {}
        SegmentKind::Line => {
            batch.add_polyline(color, line_width, span.segment_path());
        }
        SegmentKind::Circle => {
            batch.add_polyline(color, line_width, arc(0.0, 360.0).calculate_lines());
        }
        SegmentKind::CircleFilled => {
            batch.add_polygon(color, 1.0, arc(0.0, 360.0).calculate_fill_area(false));
        }
        // Arc sweeps default to the negative side of the path, same as the
        // 270 variants; reverse_side selects the other.
        SegmentKind::Arc180 => {
            batch.add_polyline(color, line_width, arc(0.0, -180.0).calculate_lines());
        }
        SegmentKind::Arc180Filled => {
            batch.add_polygon(color, 1.0, arc(0.0, -180.0).calculate_fill_area(false));
            batch.add_polyline(color, line_width, span.segment_path());
        }
        SegmentKind::Arc180Closed => {
            batch.add_polyline(color, line_width, arc(0.0, -180.0).calculate_fill_area(true));
        }
        SegmentKind::Arc90 => {
            batch.add_polyline(color, line_width, arc(0.0, -90.0).calculate_lines());
            batch.add_polyline(color, line_width, span.segment_path());
        }
        SegmentKind::Arc270 => {
            batch.add_polyline(color, line_width, arc(45.0, -225.0).calculate_lines());
        }
        SegmentKind::Arc270WithLine => {
            batch.add_polyline(color, line_width, arc(45.0, -225.0).calculate_lines());
            batch.add_polyline(color, line_width, span.segment_path());
        }
        SegmentKind::ArrowHead => {
            let mut pip = arc(-120.0, 120.0).calculate_lines();
            pip.extend(span.segment_path());
            batch.add_polyline(color, line_width, pip);
        }
        SegmentKind::Box => {
            let corner = offset_corner(span, segment, rev);
            batch.add_polyline(color, line_width, corner.box_outline());
        }
        SegmentKind::BoxFilled => {
            let corner = offset_corner(span, segment, rev);
            batch.add_polygon(color, 1.0, corner.box_outline());
        }
        SegmentKind::XPattern => {
            let corner = offset_corner(span, segment, rev);
            batch.add_polylines(color, line_width, corner.x_pattern());
        }
        SegmentKind::ZPattern => {
            let corner = offset_corner(span, segment, rev);
            batch.add_polyline(color, line_width, corner.z_pattern());
        }
        SegmentKind::DoubleLine => {
            let corner = offset_corner(span, segment, rev);
            batch.add_polylines(color, line_width, corner.double_line());
        }
        SegmentKind::Tick => {
            let corner = offset_corner(span, segment, rev);
            batch.add_polyline(color, line_width, corner.tick());
            batch.add_polyline(color, line_width, span.segment_path());
        }
    }
}

fn offset_corner<'a>(
    span: PathSpan<'a>,
    segment: &PatternSegment,
    reverse: bool,
) -> CornerApplicator<'a> {
    let mut corner = CornerApplicator::new(span);
    let sign = if reverse { -1.0 } else { 1.0 };
    // offset_size is already in pixels after the rescale.
    corner.set_height(segment.offset_size * sign);
    corner
}
