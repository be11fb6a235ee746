//! Per-pass geometry accumulation and compiled primitives.
//!
//! A backend line or fill primitive carries exactly one color, so all
//! geometry of matching resolved color accumulates into a shared buffer and
//! is compiled once at the end of a synthesis pass. Batches are freshly
//! allocated per pass and never shared across passes.

use std::collections::HashMap;

use tracing::warn;

use drawing_common::{Color, DrawingResult, Point};

/// Text anchor justification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Justification {
    Left,
    Center,
    Right,
}

/// A positioned text anchor. Font rasterization is the backend's concern;
/// this carries everything it needs.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    /// Anchor point in pixels.
    pub position: Point,
    pub lines: Vec<String>,
    pub size: f64,
    /// Screen-relative rotation in degrees.
    pub rotation: f64,
    pub justification: Justification,
    pub color: Color,
    /// Offset from the anchor in half-character units.
    pub offset: (f64, f64),
}

/// A compiled, single-color draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayPrimitive {
    Lines {
        color: Color,
        line_width: f64,
        paths: Vec<Vec<Point>>,
    },
    Polygons {
        color: Color,
        alpha: f32,
        rings: Vec<Vec<Point>>,
    },
    Text(TextPrimitive),
}

/// Backend sink for compiled primitives.
pub trait RenderSink {
    fn draw(&mut self, primitive: &DisplayPrimitive) -> DrawingResult<()>;
}

/// Hand a compiled pass to a sink. A rejected primitive is logged and
/// skipped; the rest of the pass still renders.
pub fn submit(primitives: &[DisplayPrimitive], sink: &mut dyn RenderSink) {
    for primitive in primitives {
        if let Err(err) = sink.draw(primitive) {
            warn!(error = %err, "sink rejected primitive, skipping");
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct LineKey {
    color: Color,
    width_tenths: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct FillKey {
    color: Color,
    alpha_bits: u32,
}

/// Transient per-pass accumulator keyed by resolved color.
#[derive(Debug, Default)]
pub struct RenderBatch {
    lines: HashMap<LineKey, Vec<Vec<Point>>>,
    fills: HashMap<FillKey, Vec<Vec<Point>>>,
    texts: Vec<TextPrimitive>,
}

impl RenderBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_polyline(&mut self, color: Color, line_width: f64, path: Vec<Point>) {
        if path.len() < 2 {
            return;
        }
        let key = LineKey {
            color,
            width_tenths: (line_width.max(0.0) * 10.0).round() as u32,
        };
        self.lines.entry(key).or_default().push(path);
    }

    pub fn add_polylines(&mut self, color: Color, line_width: f64, paths: Vec<Vec<Point>>) {
        for path in paths {
            self.add_polyline(color, line_width, path);
        }
    }

    pub fn add_polygon(&mut self, color: Color, alpha: f32, ring: Vec<Point>) {
        if ring.len() < 3 {
            return;
        }
        let key = FillKey {
            color,
            alpha_bits: alpha.clamp(0.0, 1.0).to_bits(),
        };
        self.fills.entry(key).or_default().push(ring);
    }

    pub fn add_text(&mut self, text: TextPrimitive) {
        self.texts.push(text);
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.fills.is_empty() && self.texts.is_empty()
    }

    /// Compile the accumulated buffers into draw-call primitives, one per
    /// distinct color/width (or color/alpha) key, in a deterministic order.
    pub fn compile(self) -> Vec<DisplayPrimitive> {
        let mut out = Vec::with_capacity(self.fills.len() + self.lines.len() + self.texts.len());

        let mut fills: Vec<_> = self.fills.into_iter().collect();
        fills.sort_by_key(|(k, _)| (k.color.r, k.color.g, k.color.b, k.color.a, k.alpha_bits));
        for (key, rings) in fills {
            out.push(DisplayPrimitive::Polygons {
                color: key.color,
                alpha: f32::from_bits(key.alpha_bits),
                rings,
            });
        }

        let mut lines: Vec<_> = self.lines.into_iter().collect();
        lines.sort_by_key(|(k, _)| (k.color.r, k.color.g, k.color.b, k.color.a, k.width_tenths));
        for (key, paths) in lines {
            out.push(DisplayPrimitive::Lines {
                color: key.color,
                line_width: f64::from(key.width_tenths) / 10.0,
                paths,
            });
        }

        out.extend(self.texts.into_iter().map(DisplayPrimitive::Text));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drawing_common::DrawingError;

    fn path(y: f64) -> Vec<Point> {
        vec![Point::new(0.0, y), Point::new(10.0, y)]
    }

    #[test]
    fn test_aggregates_by_color() {
        let mut batch = RenderBatch::new();
        batch.add_polyline(Color::RED, 1.0, path(0.0));
        batch.add_polyline(Color::RED, 1.0, path(1.0));
        batch.add_polyline(Color::BLUE, 1.0, path(2.0));

        let compiled = batch.compile();
        assert_eq!(compiled.len(), 2);
        let red = compiled
            .iter()
            .find_map(|p| match p {
                DisplayPrimitive::Lines { color, paths, .. } if *color == Color::RED => {
                    Some(paths.len())
                }
                _ => None,
            })
            .unwrap();
        assert_eq!(red, 2);
    }

    #[test]
    fn test_width_splits_buffers() {
        let mut batch = RenderBatch::new();
        batch.add_polyline(Color::RED, 1.0, path(0.0));
        batch.add_polyline(Color::RED, 3.0, path(1.0));
        assert_eq!(batch.compile().len(), 2);
    }

    #[test]
    fn test_degenerate_geometry_dropped() {
        let mut batch = RenderBatch::new();
        batch.add_polyline(Color::RED, 1.0, vec![Point::new(0.0, 0.0)]);
        batch.add_polygon(Color::RED, 1.0, path(0.0));
        assert!(batch.is_empty());
    }

    #[test]
    fn test_compile_order_deterministic() {
        let build = || {
            let mut batch = RenderBatch::new();
            batch.add_polyline(Color::BLUE, 1.0, path(0.0));
            batch.add_polyline(Color::RED, 1.0, path(1.0));
            batch.add_polygon(Color::GREEN, 0.5, vec![
                Point::new(0.0, 0.0),
                Point::new(5.0, 0.0),
                Point::new(5.0, 5.0),
                Point::new(0.0, 0.0),
            ]);
            batch.compile()
        };
        assert_eq!(build(), build());
    }

    struct RejectingSink {
        accepted: usize,
    }

    impl RenderSink for RejectingSink {
        fn draw(&mut self, primitive: &DisplayPrimitive) -> DrawingResult<()> {
            if matches!(primitive, DisplayPrimitive::Polygons { .. }) {
                return Err(DrawingError::SinkError("no fills".to_string()));
            }
            self.accepted += 1;
            Ok(())
        }
    }

    #[test]
    fn test_sink_failure_skips_only_offender() {
        let mut batch = RenderBatch::new();
        batch.add_polyline(Color::RED, 1.0, path(0.0));
        batch.add_polygon(Color::RED, 1.0, vec![
            Point::new(0.0, 0.0),
            Point::new(5.0, 0.0),
            Point::new(5.0, 5.0),
            Point::new(0.0, 0.0),
        ]);
        batch.add_polyline(Color::BLUE, 1.0, path(1.0));

        let compiled = batch.compile();
        let mut sink = RejectingSink { accepted: 0 };
        submit(&compiled, &mut sink);
        assert_eq!(sink.accepted, 2);
    }
}
