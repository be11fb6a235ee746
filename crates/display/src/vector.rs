//! Wind glyph synthesis: arrows, wind barbs, hash marks.
//!
//! All angles pass through the site's north offset so glyphs stay true to
//! geographic north on projections that bend meridians. Direction encodes
//! where the wind is coming from: direction 0 on a north-up view draws an
//! arrow shaft toward screen-south and a barb shaft toward screen-north.
//!
//! Batched synthesis is the normal mode: the caller reuses one
//! [`RenderBatch`] across many observations so geometry aggregates per
//! color instead of producing one primitive per observation.

use drawing_common::{ArrowHeadKind, Color, Point};

use crate::arrowhead::ArrowHead;
use crate::batch::RenderBatch;
use crate::element::{VectorElement, VectorKind};
use crate::scale::ScaleContext;

/// Barb angle off the shaft in degrees, mirrored south of the equator.
const BARB_ANGLE: f64 = 70.0;
/// Shaft slot count; shorter decompositions still get a full-length shaft.
const MAX_SEGMENTS: u32 = 6;
/// Below this speed a calm circle is drawn instead of a barb.
const CALM_THRESHOLD: f64 = 0.5;
const CALM_CIRCLE_SEGMENTS: u32 = 16;
/// Nominal speed giving a unit-length arrow when only direction is known.
const DIRECTION_ONLY_SPEED: f64 = 10.0;

/// Where and how a glyph lands on screen.
#[derive(Debug, Clone, Copy)]
pub struct GlyphSite {
    /// Projected observation location.
    pub pixel: Point,
    /// North offset angle at the location, degrees.
    pub north_offset: f64,
    /// Flips the barb side.
    pub southern_hemisphere: bool,
}

/// Wind barb decomposition: flags of 50, barbs of 10, half-barbs of 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarbParts {
    pub flags: u32,
    pub barbs: u32,
    pub half_barbs: u32,
}

impl BarbParts {
    pub fn from_speed(speed: f64) -> Self {
        let rounded = (speed + 2.5).floor().max(0.0) as u32;
        let flags = rounded / 50;
        let mut remainder = rounded % 50;
        let barbs = remainder / 10;
        remainder %= 10;
        let half_barbs = remainder / 5;
        Self {
            flags,
            barbs,
            half_barbs,
        }
    }

    /// Shaft slots consumed: a flag takes two, everything else one.
    pub fn slots(&self) -> u32 {
        2 * self.flags + self.barbs + self.half_barbs
    }
}

/// Synthesize one observation into the batch.
pub fn synthesize_vector(
    batch: &mut RenderBatch,
    element: &VectorElement,
    site: GlyphSite,
    ctx: &ScaleContext,
    background: Color,
) {
    match element.kind {
        VectorKind::Arrow => arrow(batch, element, site, ctx, background),
        VectorKind::WindBarb => wind_barb(batch, element, site, ctx, background),
        VectorKind::HashMark => hash_mark(batch, element, site, ctx, background),
    }
}

/// A 16-segment circle (17 points, closed) for calm wind.
pub fn calculate_circle(center: Point, radius: f64) -> Vec<Point> {
    let mut points = Vec::with_capacity(CALM_CIRCLE_SEGMENTS as usize + 1);
    for i in 0..=CALM_CIRCLE_SEGMENTS {
        let theta = std::f64::consts::TAU * f64::from(i) / f64::from(CALM_CIRCLE_SEGMENTS);
        points.push(Point::new(
            center.x + radius * theta.cos(),
            center.y + radius * theta.sin(),
        ));
    }
    points
}

fn unit(angle_deg: f64) -> Point {
    let rad = angle_deg.to_radians();
    Point::new(rad.cos(), rad.sin())
}

fn offset(p: Point, dir: Point, dist: f64) -> Point {
    Point::new(p.x + dir.x * dist, p.y + dir.y * dist)
}

/// Emit collected strokes, with a wider background mask beneath when asked.
fn emit(
    batch: &mut RenderBatch,
    lines: Vec<Vec<Point>>,
    fills: Vec<Vec<Point>>,
    element: &VectorElement,
    ctx: &ScaleContext,
    background: Color,
) {
    if element.clear_background {
        let mask_width = element.line_width + ctx.device_scale;
        batch.add_polylines(background, mask_width, lines.clone());
        for ring in &fills {
            batch.add_polygon(background, 1.0, ring.clone());
            batch.add_polyline(background, mask_width, ring.clone());
        }
    }
    batch.add_polylines(element.color, element.line_width, lines);
    for ring in fills {
        batch.add_polygon(element.color, 1.0, ring);
    }
}

fn arrow(
    batch: &mut RenderBatch,
    element: &VectorElement,
    site: GlyphSite,
    ctx: &ScaleContext,
    background: Color,
) {
    let sfactor = ctx.device_scale * element.size_scale * 10.0;
    let speed = if element.direction_only {
        DIRECTION_ONLY_SPEED
    } else {
        element.speed
    };
    let length = sfactor * speed / DIRECTION_ONLY_SPEED;
    if length <= 0.0 {
        return;
    }

    // Reversed: the arrow points where the wind is going.
    let angle = 90.0 - site.north_offset + element.direction;
    let dir = unit(angle);
    let tip = offset(site.pixel, dir, length);

    let head = ArrowHead::new(
        tip,
        angle,
        60.0,
        ctx.device_scale * element.arrow_head_size * 2.0,
        element.arrow_head,
    );

    let mut lines = vec![vec![site.pixel, tip]];
    let mut fills = Vec::new();
    match element.arrow_head {
        ArrowHeadKind::Open => lines.push(head.open_outline()),
        ArrowHeadKind::Filled => fills.push(head.filled_ring()),
    }
    emit(batch, lines, fills, element, ctx, background);
}

fn wind_barb(
    batch: &mut RenderBatch,
    element: &VectorElement,
    site: GlyphSite,
    ctx: &ScaleContext,
    background: Color,
) {
    let sfactor = ctx.device_scale * element.size_scale * 10.0;

    if element.speed < CALM_THRESHOLD {
        let circle = calculate_circle(site.pixel, sfactor * 0.1);
        emit(batch, vec![circle], Vec::new(), element, ctx, background);
        return;
    }

    let parts = BarbParts::from_speed(element.speed);
    let spacing = sfactor / f64::from(MAX_SEGMENTS);
    let barb_length = sfactor / 3.0;

    let shaft_angle = -90.0 - site.north_offset + element.direction;
    let shaft_dir = unit(shaft_angle);
    let barb_angle = if site.southern_hemisphere {
        shaft_angle - BARB_ANGLE
    } else {
        shaft_angle + BARB_ANGLE
    };
    let barb_dir = unit(barb_angle);

    let slots = parts.slots().max(MAX_SEGMENTS);
    let shaft_length = spacing * f64::from(slots);
    let tip = offset(site.pixel, shaft_dir, shaft_length);
    let slot_point = |i: u32| offset(tip, shaft_dir, -(f64::from(i) * spacing));

    let mut lines = vec![vec![site.pixel, tip]];
    let mut fills = Vec::new();
    let mut slot = 0;

    for _ in 0..parts.flags {
        let outer = slot_point(slot);
        let inner = slot_point(slot + 1);
        let apex = offset(outer, barb_dir, barb_length);
        fills.push(vec![outer, apex, inner, outer]);
        slot += 2;
    }
    for _ in 0..parts.barbs {
        let base = slot_point(slot);
        lines.push(vec![base, offset(base, barb_dir, barb_length)]);
        slot += 1;
    }
    if parts.half_barbs > 0 {
        // A lone half-barb moves one slot inward so it is not mistaken for
        // a full barb at the tip.
        if parts.flags == 0 && parts.barbs == 0 {
            slot += 1;
        }
        for _ in 0..parts.half_barbs {
            let base = slot_point(slot);
            lines.push(vec![base, offset(base, barb_dir, barb_length / 2.0)]);
            slot += 1;
        }
    }

    emit(batch, lines, fills, element, ctx, background);
}

fn hash_mark(
    batch: &mut RenderBatch,
    element: &VectorElement,
    site: GlyphSite,
    ctx: &ScaleContext,
    background: Color,
) {
    let sfactor = ctx.device_scale * element.size_scale * 10.0;
    let angle = 90.0 - site.north_offset + element.direction;
    let dir = unit(angle);
    let perp = Point::new(-dir.y, dir.x);

    // Gap between the two strokes widens with the line width.
    let gap = ctx.device_scale * (1.0 + 0.5 * element.line_width);
    let half = sfactor / 2.0;

    let mut lines = Vec::with_capacity(2);
    for side in [-1.0, 1.0] {
        let center = offset(site.pixel, perp, side * gap);
        lines.push(vec![offset(center, dir, -half), offset(center, dir, half)]);
    }
    emit(batch, lines, Vec::new(), element, ctx, background);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::DisplayPrimitive;

    fn ctx() -> ScaleContext {
        ScaleContext {
            device_scale: 1.0,
            screen_to_extent: 1.0,
            screen_to_world: 1.0,
        }
    }

    fn site() -> GlyphSite {
        GlyphSite {
            pixel: Point::new(100.0, 100.0),
            north_offset: 0.0,
            southern_hemisphere: false,
        }
    }

    #[test]
    fn test_barb_decomposition_65() {
        let parts = BarbParts::from_speed(65.0);
        assert_eq!(
            parts,
            BarbParts {
                flags: 1,
                barbs: 1,
                half_barbs: 1
            }
        );
        assert_eq!(parts.slots(), 4);
    }

    #[test]
    fn test_barb_decomposition_misc() {
        assert_eq!(BarbParts::from_speed(5.0).slots(), 1);
        assert_eq!(
            BarbParts::from_speed(48.0),
            BarbParts {
                flags: 1,
                barbs: 0,
                half_barbs: 0
            }
        );
        assert_eq!(
            BarbParts::from_speed(2.0),
            BarbParts {
                flags: 0,
                barbs: 0,
                half_barbs: 0
            }
        );
    }

    #[test]
    fn test_calm_wind_circle() {
        let element = VectorElement {
            speed: 0.3,
            direction: 123.0,
            ..Default::default()
        };
        let mut batch = RenderBatch::new();
        synthesize_vector(&mut batch, &element, site(), &ctx(), Color::BLACK);
        let compiled = batch.compile();
        assert_eq!(compiled.len(), 1);
        match &compiled[0] {
            DisplayPrimitive::Lines { paths, .. } => {
                assert_eq!(paths.len(), 1);
                assert_eq!(paths[0].len(), 17);
                assert!(paths[0][0].distance(paths[0].last().unwrap()) < 1e-9);
            }
            other => panic!("unexpected primitive {other:?}"),
        }
    }

    #[test]
    fn test_direction_convention_north_up() {
        // direction = 0 ("from the north"): arrow shaft runs toward
        // screen-south (y down), barb shaft toward screen-north.
        let arrow = VectorElement {
            kind: VectorKind::Arrow,
            speed: 20.0,
            direction: 0.0,
            ..Default::default()
        };
        let mut batch = RenderBatch::new();
        synthesize_vector(&mut batch, &arrow, site(), &ctx(), Color::BLACK);
        let shaft_goes_down = batch.compile().iter().any(|p| match p {
            DisplayPrimitive::Lines { paths, .. } => {
                paths.iter().any(|path| path.last().unwrap().y > 100.0 + 1.0)
            }
            _ => false,
        });
        assert!(shaft_goes_down);

        let barb = VectorElement {
            kind: VectorKind::WindBarb,
            speed: 20.0,
            direction: 0.0,
            ..Default::default()
        };
        let mut batch = RenderBatch::new();
        synthesize_vector(&mut batch, &barb, site(), &ctx(), Color::BLACK);
        let shaft_goes_up = batch.compile().iter().any(|p| match p {
            DisplayPrimitive::Lines { paths, .. } => {
                paths.iter().any(|path| path[1].y < 100.0 - 1.0)
            }
            _ => false,
        });
        assert!(shaft_goes_up);
    }

    #[test]
    fn test_barb_65_strokes() {
        let element = VectorElement {
            kind: VectorKind::WindBarb,
            speed: 65.0,
            ..Default::default()
        };
        let mut batch = RenderBatch::new();
        synthesize_vector(&mut batch, &element, site(), &ctx(), Color::BLACK);
        let compiled = batch.compile();
        // One pennant fill, and shaft + barb + half-barb strokes.
        let fills: usize = compiled
            .iter()
            .map(|p| match p {
                DisplayPrimitive::Polygons { rings, .. } => rings.len(),
                _ => 0,
            })
            .sum();
        let strokes: usize = compiled
            .iter()
            .map(|p| match p {
                DisplayPrimitive::Lines { paths, .. } => paths.len(),
                _ => 0,
            })
            .sum();
        assert_eq!(fills, 1);
        assert_eq!(strokes, 3);
    }

    #[test]
    fn test_lone_half_barb_moves_inward() {
        let element = VectorElement {
            kind: VectorKind::WindBarb,
            speed: 5.0,
            direction: 0.0,
            ..Default::default()
        };
        let mut batch = RenderBatch::new();
        synthesize_vector(&mut batch, &element, site(), &ctx(), Color::BLACK);
        let compiled = batch.compile();
        let paths = match &compiled[0] {
            DisplayPrimitive::Lines { paths, .. } => paths,
            other => panic!("unexpected primitive {other:?}"),
        };
        // Shaft plus one half-barb.
        assert_eq!(paths.len(), 2);
        let shaft_tip = paths[0][1];
        let half_base = paths[1][0];
        // sfactor 10, spacing 10/6: the half-barb starts one slot inward.
        assert!((shaft_tip.distance(&half_base) - 10.0 / 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_background_mask_adds_buffer() {
        let element = VectorElement {
            kind: VectorKind::HashMark,
            speed: 30.0,
            clear_background: true,
            color: Color::RED,
            ..Default::default()
        };
        let mut batch = RenderBatch::new();
        synthesize_vector(&mut batch, &element, site(), &ctx(), Color::BLACK);
        let compiled = batch.compile();
        assert_eq!(compiled.len(), 2);
        let has_background = compiled.iter().any(|p| matches!(
            p,
            DisplayPrimitive::Lines { color, .. } if *color == Color::BLACK
        ));
        assert!(has_background);
    }

    #[test]
    fn test_batched_observations_aggregate() {
        let mut batch = RenderBatch::new();
        for i in 0..10 {
            let element = VectorElement {
                kind: VectorKind::WindBarb,
                speed: 20.0,
                direction: f64::from(i) * 30.0,
                color: Color::CYAN,
                ..Default::default()
            };
            synthesize_vector(&mut batch, &element, site(), &ctx(), Color::BLACK);
        }
        // One color, one width: a single compiled line buffer.
        assert_eq!(batch.compile().len(), 1);
    }
}
