//! Element synthesis entry points.
//!
//! The factory owns nothing mutable: every pass allocates its own batch,
//! and all view-dependent state lives in the scale context rebuilt from the
//! view. Lookup failures degrade to solid lines or skipped decorations and
//! are logged; no element ever aborts a pass.

use std::f64::consts::PI;

use tracing::warn;

use drawing_common::{
    ensure_closed, ArrowHeadKind, Color, IndexedPath, LayerStyle, PatternCatalog, Point,
};
use projection::{north_offset_angle, split_world_wrap, MapProjection, MapView};

use crate::applicator::PathSpan;
use crate::arrowhead::ArrowHead;
use crate::batch::{DisplayPrimitive, RenderBatch, TextPrimitive};
use crate::corner::CornerApplicator;
use crate::curve::fit_parametric_curve;
use crate::element::{
    ArcElement, ComboElement, Element, KinkElement, LineElement, SymbolElement, TcaElement,
    TcmElement, TextElement, VectorElement,
};
use crate::intensity;
use crate::scale::ScaleContext;
use crate::stitch::{stitch_named, stitch_pattern, ScaleMode};
use crate::vector::{synthesize_vector, GlyphSite};

/// Pattern size correction for front pips.
const FRONT_PIP_FACTOR: f64 = 0.80;
/// Symbol-space to pattern-space scale for stamped symbols.
const SYMBOL_SCALE: f64 = 0.65;
/// Extra line width for symbol background masks.
const SYMBOL_MASK_WIDTH: f64 = 25.0;

/// Synthesizes drawable elements into compiled display primitives.
pub struct DisplayFactory<'a> {
    projection: &'a dyn MapProjection,
    catalog: &'a PatternCatalog,
    ctx: ScaleContext,
    style: LayerStyle,
}

impl<'a> DisplayFactory<'a> {
    pub fn new(
        projection: &'a dyn MapProjection,
        catalog: &'a PatternCatalog,
        view: &MapView,
        style: LayerStyle,
    ) -> Self {
        Self {
            projection,
            catalog,
            ctx: ScaleContext::from_view(view),
            style,
        }
    }

    pub fn scale_context(&self) -> &ScaleContext {
        &self.ctx
    }

    /// Synthesize one element into its own compiled pass.
    pub fn synthesize(&self, element: &Element) -> Vec<DisplayPrimitive> {
        self.synthesize_many(std::slice::from_ref(element))
    }

    /// Synthesize many elements into one pass, aggregating geometry of
    /// matching color into shared buffers.
    pub fn synthesize_many(&self, elements: &[Element]) -> Vec<DisplayPrimitive> {
        let mut batch = RenderBatch::new();
        for element in elements {
            self.add_element(&mut batch, element);
        }
        batch.compile()
    }

    fn add_element(&self, batch: &mut RenderBatch, element: &Element) {
        match element {
            Element::Line(line) => self.add_line(batch, line),
            Element::Arc(arc) => self.add_arc(batch, arc),
            Element::Symbol(symbol) => self.add_symbol(batch, symbol),
            Element::Vector(vector) => self.add_vector(batch, vector),
            Element::Text(text) => self.add_text(batch, text),
            Element::Combo(combo) => self.add_combo(batch, combo),
            Element::Kink(kink) => self.add_kink(batch, kink),
            Element::Tcm(tcm) => self.add_tcm(batch, tcm),
            Element::Tca(tca) => self.add_tca(batch, tca),
        }
    }

    fn add_line(&self, batch: &mut RenderBatch, line: &LineElement) {
        if line.path.len() < 2 {
            return;
        }
        let mut colors = self.style.resolve_all(&line.colors);
        if colors.is_empty() {
            colors.push(Color::WHITE);
        }
        let mut size_scale = line.size_scale;
        let mut width = line.line_width;
        let mode = if line.is_front() {
            width = front_width_bucket(width);
            size_scale *= FRONT_PIP_FACTOR;
            ScaleMode::BlankLineOnly
        } else {
            ScaleMode::AllSegments
        };
        let scale = self.ctx.device_scale * size_scale;

        let world = if line.closed {
            ensure_closed(&line.path)
        } else {
            line.path.clone()
        };

        for sub_path in split_world_wrap(&world) {
            let mut pixels = self.projection.project_path(&sub_path);
            if let Some(spacing) = self.ctx.smooth_spacing(line.smooth_level) {
                pixels = fit_parametric_curve(&pixels, spacing, line.closed);
            }
            if pixels.len() < 2 {
                continue;
            }

            match self.catalog.line_pattern(&line.pattern) {
                Ok(found) => {
                    let mut pattern = found.clone();
                    if pattern.needs_length_update {
                        let unit = self.ctx.screen_to_extent * width
                            / (size_scale * self.ctx.device_scale);
                        pattern = pattern.update_length(unit);
                    }
                    if line.flip_side {
                        pattern = pattern.flip_side();
                    }
                    stitch_pattern(batch, &pattern, &pixels, scale, width, mode, &colors);
                }
                Err(err) => {
                    warn!(pattern = %line.pattern, error = %err,
                        "pattern lookup failed, drawing solid line");
                    batch.add_polyline(colors[0], width, pixels.clone());
                }
            }

            if line.closed && self.style.display_fill(line.filled) {
                // Fill in the secondary color when the element declares one.
                let fill_color = colors.get(1).copied().unwrap_or(colors[0]);
                let alpha = line.fill_mode.alpha(fill_color);
                batch.add_polygon(fill_color, alpha, ensure_closed(&pixels));
            }
        }
    }

    fn add_arc(&self, batch: &mut RenderBatch, arc: &ArcElement) {
        let center = self.projection.world_to_pixel(arc.center);
        let circumference = self.projection.world_to_pixel(arc.circumference);
        let major = center.distance(&circumference);
        if major < 1e-9 {
            return;
        }
        let axis = (circumference.y - center.y).atan2(circumference.x - center.x);
        let sweep = arc.end_angle - arc.start_angle;
        if sweep <= 0.0 {
            return;
        }
        let color = self.style.resolve(arc.color);

        // Major/minor axis vectors; 1 degree steps, never finer.
        let major_axis = Point::new(major * axis.cos(), major * axis.sin());
        let minor = major * arc.axis_ratio;
        let minor_axis = Point::new(-minor * axis.sin(), minor * axis.cos());
        let ellipse_point = |deg: f64| {
            let t = deg.to_radians();
            Point::new(
                center.x + t.cos() * major_axis.x + t.sin() * minor_axis.x,
                center.y + t.cos() * major_axis.y + t.sin() * minor_axis.y,
            )
        };
        let arc_points = |from: f64, to: f64| {
            let steps = (to - from).round().max(1.0) as u32;
            (0..=steps)
                .map(|i| ellipse_point(from + f64::from(i)))
                .collect::<Vec<_>>()
        };

        match arc.dash_length {
            None => {
                batch.add_polyline(color, arc.line_width, arc_points(arc.start_angle, arc.end_angle));
            }
            Some(dash) => {
                // Dash length is given in screen pixels; convert to whole
                // degrees of arc, at least 2.
                let delta = (dash / major * 180.0 / PI).round().max(2.0);
                let mut a = arc.start_angle;
                let mut draw = true;
                while a < arc.end_angle {
                    let b = (a + delta).min(arc.end_angle);
                    if draw {
                        batch.add_polyline(color, arc.line_width, arc_points(a, b));
                    }
                    draw = !draw;
                    a = b;
                }
            }
        }
    }

    fn add_symbol(&self, batch: &mut RenderBatch, symbol: &SymbolElement) {
        let color = self.style.resolve(symbol.color);
        let sfactor = self.ctx.device_scale * SYMBOL_SCALE * symbol.size_scale;
        let mask = symbol.clear_background.then_some(self.style.background);
        for location in &symbol.locations {
            let pixel = self.projection.world_to_pixel(*location);
            self.stamp_symbol(
                batch,
                &symbol.symbol,
                pixel,
                sfactor,
                color,
                symbol.line_width,
                mask,
            );
        }
    }

    /// Stamp one symbol pattern at a pixel location, scaled and y-flipped
    /// out of symbol space. A mask color draws a wide duplicate beneath.
    #[allow(clippy::too_many_arguments)]
    fn stamp_symbol(
        &self,
        batch: &mut RenderBatch,
        name: &str,
        pixel: Point,
        sfactor: f64,
        color: Color,
        line_width: f64,
        mask: Option<Color>,
    ) {
        let pattern = match self.catalog.symbol_pattern(name) {
            Ok(p) => p,
            Err(err) => {
                warn!(symbol = name, error = %err, "symbol lookup failed, skipping");
                return;
            }
        };
        for part in &pattern.parts {
            let path: Vec<Point> = part
                .path
                .iter()
                .map(|p| Point::new(pixel.x + p.x * sfactor, pixel.y - p.y * sfactor))
                .collect();
            if let Some(background) = mask {
                batch.add_polyline(background, line_width + SYMBOL_MASK_WIDTH, path.clone());
            }
            if part.filled {
                batch.add_polygon(color, 1.0, ensure_closed(&path));
            } else {
                batch.add_polyline(color, line_width, path);
            }
        }
    }

    fn add_vector(&self, batch: &mut RenderBatch, vector: &VectorElement) {
        let resolved = VectorElement {
            color: self.style.resolve(vector.color),
            ..vector.clone()
        };
        let site = GlyphSite {
            pixel: self.projection.world_to_pixel(vector.location),
            north_offset: north_offset_angle(self.projection, vector.location),
            southern_hemisphere: vector.location.y < 0.0,
        };
        synthesize_vector(batch, &resolved, site, &self.ctx, self.style.background);
    }

    fn add_text(&self, batch: &mut RenderBatch, text: &TextElement) {
        let rotation = if text.rotation_relative_to_north {
            text.rotation + north_offset_angle(self.projection, text.location)
        } else {
            text.rotation
        };
        batch.add_text(TextPrimitive {
            position: self.projection.world_to_pixel(text.location),
            lines: text.lines.clone(),
            size: text.size,
            rotation,
            justification: text.justification,
            color: self.style.resolve(text.color),
            offset: text.offset,
        });
    }

    fn add_combo(&self, batch: &mut RenderBatch, combo: &ComboElement) {
        let color = self.style.resolve(combo.color);
        let pixel = self.projection.world_to_pixel(combo.location);
        let sfactor = self.ctx.device_scale * SYMBOL_SCALE * combo.size_scale;
        let shift = sfactor * 2.0;

        let upper = Point::new(pixel.x - shift, pixel.y - shift);
        let lower = Point::new(pixel.x + shift, pixel.y + shift);
        self.stamp_symbol(batch, &combo.upper_symbol, upper, sfactor, color, combo.line_width, None);
        self.stamp_symbol(batch, &combo.lower_symbol, lower, sfactor, color, combo.line_width, None);
        self.stamp_symbol(batch, "SLASH", pixel, sfactor, color, combo.line_width, None);
    }

    fn add_kink(&self, batch: &mut RenderBatch, kink: &KinkElement) {
        let start = self.projection.world_to_pixel(kink.start);
        let end = self.projection.world_to_pixel(kink.end);
        let length = start.distance(&end);
        if length < 1e-9 {
            return;
        }
        let color = self.style.resolve(kink.color);

        let path = IndexedPath::new(vec![start, end]);
        let at = kink.kink_position.clamp(0.05, 0.95) * length;
        let extent = length * 0.25;
        let span = PathSpan::new(&path, (at - extent / 2.0).max(0.0), (at + extent / 2.0).min(length));
        let mut corner = CornerApplicator::new(span);
        corner.set_height(extent);
        let spike = corner.tick()[1];

        batch.add_polyline(color, kink.line_width, vec![start, spike, end]);

        let direction = (end.y - spike.y).atan2(end.x - spike.x).to_degrees();
        let head = ArrowHead::new(
            end,
            direction,
            90.0,
            self.ctx.device_scale * 3.5,
            ArrowHeadKind::Filled,
        );
        batch.add_polygon(color, 1.0, head.filled_ring());
    }

    fn add_tcm(&self, batch: &mut RenderBatch, tcm: &TcmElement) {
        if tcm.track.len() >= 2 {
            let pixels = self.projection.project_path(&tcm.track);
            stitch_named(
                batch,
                self.catalog,
                "LINE_DASHED_6",
                &pixels,
                self.ctx.device_scale,
                tcm.line_width,
                ScaleMode::AllSegments,
                &[self.style.resolve(Color::CYAN)],
            );
        }

        for quarters in &tcm.quarters {
            let color = self.style.resolve(intensity::wind_radius_color(quarters.speed));
            let pattern = if quarters.speed < intensity::WIND_RADII_KT[0] {
                // 12-ft wave field: dashed connectors.
                "LINE_DASHED_4"
            } else {
                "LINE_SOLID"
            };
            let center = self.projection.world_to_pixel(quarters.center);
            for (quadrant, &radius_deg) in quarters.radii.iter().enumerate() {
                if radius_deg <= 0.0 {
                    continue;
                }
                // Pixel radius from a latitude offset of the quadrant radius.
                let edge = self
                    .projection
                    .world_to_pixel(Point::new(quarters.center.x, quarters.center.y + radius_deg));
                let radius = center.distance(&edge);
                let from = quadrant as f64 * 90.0;
                let points: Vec<Point> = (0..=90)
                    .map(|i| {
                        let theta = (from + f64::from(i)).to_radians();
                        // Screen y grows downward; geographic angles run
                        // counterclockwise from east.
                        Point::new(
                            center.x + radius * theta.cos(),
                            center.y - radius * theta.sin(),
                        )
                    })
                    .collect();
                stitch_named(
                    batch,
                    self.catalog,
                    pattern,
                    &points,
                    self.ctx.device_scale,
                    tcm.line_width,
                    ScaleMode::AllSegments,
                    &[color],
                );
            }
        }

        let symbol_at = tcm
            .track
            .last()
            .copied()
            .or_else(|| tcm.quarters.first().map(|q| q.center));
        if let Some(location) = symbol_at {
            let name = intensity::storm_symbol_name(tcm.max_wind, location.y < 0.0);
            let pixel = self.projection.world_to_pixel(location);
            let sfactor = self.ctx.device_scale * SYMBOL_SCALE;
            let color = self.style.resolve(Color::WHITE);
            self.stamp_symbol(batch, name, pixel, sfactor, color, tcm.line_width, None);
        }
    }

    fn add_tca(&self, batch: &mut RenderBatch, tca: &TcaElement) {
        for segment in &tca.segments {
            if segment.path.len() < 2 {
                continue;
            }
            let pixels = self.projection.project_path(&segment.path);
            let color = self
                .style
                .resolve(intensity::advisory_color(segment.severity, segment.kind));
            batch.add_polyline(color, tca.line_width, pixels.clone());
            if segment.closed_waterway {
                batch.add_polygon(color, 0.5, ensure_closed(&pixels));
            }
        }
    }
}

/// Front lines bucket their width to 1, 4 or 7.
fn front_width_bucket(width: f64) -> f64 {
    if width < 3.0 {
        1.0
    } else if width < 6.0 {
        4.0
    } else {
        7.0
    }
}
