//! Pattern catalog: named line and symbol patterns.
//!
//! Entries are loaded once (built-in defaults, optionally extended from
//! JSON) and are immutable afterwards. Draw passes derive scaled copies of a
//! pattern and discard them; the catalog originals are never mutated.

use std::collections::HashMap;
use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::error::{DrawingError, DrawingResult};
use crate::geom::Point;
use crate::pattern::{ArrowHeadKind, LinePattern, PatternArrow, PatternSegment, SegmentKind};
use crate::symbol::{SymbolPart, SymbolPattern};

/// JSON document shape for catalog extension files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub line_patterns: Vec<LinePattern>,
    #[serde(default)]
    pub symbol_patterns: Vec<SymbolPattern>,
}

/// In-memory catalog of line and symbol patterns.
#[derive(Debug, Clone)]
pub struct PatternCatalog {
    lines: HashMap<String, LinePattern>,
    symbols: HashMap<String, SymbolPattern>,
}

impl Default for PatternCatalog {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl PatternCatalog {
    /// An empty catalog, for tests that want full control of the entries.
    pub fn empty() -> Self {
        Self {
            lines: HashMap::new(),
            symbols: HashMap::new(),
        }
    }

    /// The standard catalog of built-in patterns.
    pub fn with_builtins() -> Self {
        let mut catalog = Self::empty();
        for pattern in builtin_line_patterns() {
            catalog.add_line_pattern(pattern);
        }
        for symbol in builtin_symbol_patterns() {
            catalog.add_symbol_pattern(symbol);
        }
        catalog
    }

    /// Merge patterns parsed from a JSON document into the catalog.
    pub fn load_json(&mut self, json: &str) -> DrawingResult<()> {
        let config: CatalogConfig = serde_json::from_str(json)?;
        for pattern in config.line_patterns {
            self.add_line_pattern(pattern);
        }
        for symbol in config.symbol_patterns {
            self.add_symbol_pattern(symbol);
        }
        Ok(())
    }

    pub fn add_line_pattern(&mut self, pattern: LinePattern) {
        self.lines.insert(pattern.name.clone(), pattern);
    }

    pub fn add_symbol_pattern(&mut self, symbol: SymbolPattern) {
        self.symbols.insert(symbol.name.clone(), symbol);
    }

    /// Resolve a line pattern by name.
    pub fn line_pattern(&self, name: &str) -> DrawingResult<&LinePattern> {
        self.lines
            .get(name)
            .ok_or_else(|| DrawingError::PatternNotFound(name.to_string()))
    }

    /// Resolve a symbol pattern by name.
    pub fn symbol_pattern(&self, name: &str) -> DrawingResult<&SymbolPattern> {
        self.symbols
            .get(name)
            .ok_or_else(|| DrawingError::SymbolNotFound(name.to_string()))
    }

    pub fn line_pattern_names(&self) -> impl Iterator<Item = &str> {
        self.lines.keys().map(String::as_str)
    }
}

fn seg(kind: SegmentKind, length: f64) -> PatternSegment {
    PatternSegment::new(kind, length)
}

fn builtin_line_patterns() -> Vec<LinePattern> {
    vec![
        LinePattern::new("LINE_SOLID", vec![seg(SegmentKind::Line, 8.0)]),
        LinePattern::new(
            "LINE_DASHED_2",
            vec![seg(SegmentKind::Line, 4.0), seg(SegmentKind::Blank, 4.0)],
        ),
        LinePattern::new(
            "LINE_DASHED_3",
            vec![seg(SegmentKind::Line, 8.0), seg(SegmentKind::Blank, 4.0)],
        ),
        LinePattern::new(
            "LINE_DASHED_4",
            vec![seg(SegmentKind::Line, 8.0), seg(SegmentKind::Blank, 8.0)],
        ),
        LinePattern::new(
            "LINE_DASHED_6",
            vec![seg(SegmentKind::Line, 12.0), seg(SegmentKind::Blank, 8.0)],
        ),
        LinePattern::new(
            "LINE_DOTTED",
            vec![
                seg(SegmentKind::CircleFilled, 1.0).with_arc_count(8),
                seg(SegmentKind::Blank, 3.0),
            ],
        ),
        LinePattern::new(
            "LINE_CIRCLE",
            vec![
                seg(SegmentKind::Line, 6.0),
                seg(SegmentKind::Circle, 4.0).with_arc_count(16),
            ],
        ),
        // Fronts: warm pips are filled semicircles, cold pips are carets.
        LinePattern::new(
            "WARM_FRONT",
            vec![
                seg(SegmentKind::Line, 10.0),
                seg(SegmentKind::Arc180Filled, 4.0).with_arc_count(10),
            ],
        ),
        LinePattern::new(
            "COLD_FRONT",
            vec![
                seg(SegmentKind::Line, 10.0),
                seg(SegmentKind::ArrowHead, 4.0).with_arc_count(2),
            ],
        ),
        LinePattern::new(
            "OCCLUDED_FRONT",
            vec![
                seg(SegmentKind::Line, 8.0),
                seg(SegmentKind::Arc180Filled, 4.0).with_arc_count(10),
                seg(SegmentKind::Line, 8.0),
                seg(SegmentKind::ArrowHead, 4.0).with_arc_count(2),
            ],
        ),
        LinePattern::new(
            "STATIONARY_FRONT",
            vec![
                seg(SegmentKind::Line, 8.0),
                seg(SegmentKind::Arc180Filled, 4.0).with_arc_count(10),
                seg(SegmentKind::Line, 8.0),
                seg(SegmentKind::ArrowHead, 4.0)
                    .with_arc_count(2)
                    .with_channel(1)
                    .reversed(),
            ],
        ),
        LinePattern::new(
            "TICK_MARKS",
            vec![
                seg(SegmentKind::Line, 8.0),
                seg(SegmentKind::Tick, 2.0).with_offset(2.0),
            ],
        ),
        LinePattern::new(
            "DOUBLE_LINE",
            vec![seg(SegmentKind::DoubleLine, 8.0).with_offset(1.5)],
        )
        .with_length_update(),
        LinePattern::new(
            "BOX_DASHED",
            vec![
                seg(SegmentKind::Box, 6.0).with_offset(2.0),
                seg(SegmentKind::Blank, 4.0),
            ],
        ),
        LinePattern::new(
            "LINE_X",
            vec![
                seg(SegmentKind::Line, 8.0),
                seg(SegmentKind::XPattern, 4.0).with_offset(2.0),
            ],
        ),
        LinePattern::new(
            "ZIGZAG",
            vec![seg(SegmentKind::ZPattern, 6.0).with_offset(2.0)],
        ),
        LinePattern::new(
            "POINTED_ARROW",
            vec![seg(SegmentKind::Line, 8.0), seg(SegmentKind::Blank, 4.0)],
        )
        .with_arrow(PatternArrow {
            kind: ArrowHeadKind::Open,
            point_angle: 60.0,
            max_extent: 1.0,
        }),
        LinePattern::new(
            "FILLED_ARROW",
            vec![seg(SegmentKind::Line, 8.0)],
        )
        .with_arrow(PatternArrow {
            kind: ArrowHeadKind::Filled,
            point_angle: 60.0,
            max_extent: 2.0,
        }),
    ]
}

/// Closed circle polyline in symbol space.
fn circle_part(radius: f64, points: usize) -> Vec<Point> {
    let mut path = Vec::with_capacity(points + 1);
    for i in 0..points {
        let theta = 2.0 * PI * (i as f64) / (points as f64);
        path.push(Point::new(radius * theta.cos(), radius * theta.sin()));
    }
    path.push(path[0]);
    path
}

fn builtin_symbol_patterns() -> Vec<SymbolPattern> {
    let mut symbols = vec![
        SymbolPattern::new(
            "SLASH",
            vec![SymbolPart::new(vec![
                Point::new(-1.0, -2.0),
                Point::new(1.0, 2.0),
            ])],
        ),
        SymbolPattern::new(
            "PLUS_SIGN",
            vec![
                SymbolPart::new(vec![Point::new(-1.5, 0.0), Point::new(1.5, 0.0)]),
                SymbolPart::new(vec![Point::new(0.0, -1.5), Point::new(0.0, 1.5)]),
            ],
        ),
        SymbolPattern::new(
            "ASTERISK",
            vec![
                SymbolPart::new(vec![Point::new(-1.5, 0.0), Point::new(1.5, 0.0)]),
                SymbolPart::new(vec![Point::new(-0.75, -1.3), Point::new(0.75, 1.3)]),
                SymbolPart::new(vec![Point::new(-0.75, 1.3), Point::new(0.75, -1.3)]),
            ],
        ),
        SymbolPattern::new(
            "TRIANGLE",
            vec![SymbolPart::new(vec![
                Point::new(-1.5, -1.0),
                Point::new(1.5, -1.0),
                Point::new(0.0, 1.6),
                Point::new(-1.5, -1.0),
            ])],
        ),
        SymbolPattern::new(
            "FILLED_TRIANGLE",
            vec![SymbolPart::new(vec![
                Point::new(-1.5, -1.0),
                Point::new(1.5, -1.0),
                Point::new(0.0, 1.6),
                Point::new(-1.5, -1.0),
            ])
            .filled()],
        ),
        SymbolPattern::new("EMPTY_CIRCLE", vec![SymbolPart::new(circle_part(1.5, 16))]),
        SymbolPattern::new(
            "TROPICAL_DEPRESSION",
            vec![SymbolPart::new(circle_part(1.5, 16))],
        ),
    ];

    // Tropical storm: circle plus the two trailing spiral bars. The
    // hemisphere variants mirror the bars.
    for (name, side) in [("TROPICAL_STORM_NH", 1.0), ("TROPICAL_STORM_SH", -1.0)] {
        symbols.push(SymbolPattern::new(
            name,
            vec![
                SymbolPart::new(circle_part(1.2, 16)),
                SymbolPart::new(vec![
                    Point::new(side * 1.2, 0.0),
                    Point::new(side * 1.2, side * 1.6),
                    Point::new(side * 0.2, side * 2.2),
                ]),
                SymbolPart::new(vec![
                    Point::new(-side * 1.2, 0.0),
                    Point::new(-side * 1.2, -side * 1.6),
                    Point::new(-side * 0.2, -side * 2.2),
                ]),
            ],
        ));
    }

    // Hurricane: same arms around a filled core.
    for (name, side) in [("HURRICANE_NH", 1.0), ("HURRICANE_SH", -1.0)] {
        symbols.push(SymbolPattern::new(
            name,
            vec![
                SymbolPart::new(circle_part(1.2, 16)).filled(),
                SymbolPart::new(vec![
                    Point::new(side * 1.2, 0.0),
                    Point::new(side * 1.2, side * 1.6),
                    Point::new(side * 0.2, side * 2.2),
                ]),
                SymbolPart::new(vec![
                    Point::new(-side * 1.2, 0.0),
                    Point::new(-side * 1.2, -side * 1.6),
                    Point::new(-side * 0.2, -side * 2.2),
                ]),
            ],
        ));
    }

    symbols
}
