//! End-to-end synthesis properties.

use display::{
    ArcElement, DisplayFactory, Element, KinkElement, LineElement, SymbolElement, TcmElement,
    TcmWindQuarters, TextElement, VectorElement, VectorKind,
};
use drawing_common::{Color, LayerStyle, Point};
use projection::PlateCarree;
use test_utils::{antimeridian_path, catalog, l_path, world_projection, world_view};

fn factory<'a>(
    projection: &'a PlateCarree,
    catalog: &'a drawing_common::PatternCatalog,
) -> DisplayFactory<'a> {
    DisplayFactory::new(projection, catalog, &world_view(), LayerStyle::default())
}

fn line_primitives(
    primitives: &[display::DisplayPrimitive],
) -> Vec<(&Color, &f64, &Vec<Vec<Point>>)> {
    primitives
        .iter()
        .filter_map(|p| match p {
            display::DisplayPrimitive::Lines {
                color,
                line_width,
                paths,
            } => Some((color, line_width, paths)),
            _ => None,
        })
        .collect()
}

#[test]
fn test_synthesize_idempotent() {
    let projection = world_projection();
    let cat = catalog();
    let factory = factory(&projection, &cat);
    let element = Element::Line(LineElement {
        path: vec![
            Point::new(-40.0, 10.0),
            Point::new(-20.0, 20.0),
            Point::new(0.0, 15.0),
        ],
        pattern: "LINE_DASHED_4".to_string(),
        smooth_level: 1,
        ..Default::default()
    });
    assert_eq!(factory.synthesize(&element), factory.synthesize(&element));
}

#[test]
fn test_color_aggregation_two_buffers() {
    let projection = world_projection();
    let cat = catalog();
    let factory = factory(&projection, &cat);

    let mut elements = Vec::new();
    for i in 0..3 {
        elements.push(Element::Line(LineElement {
            path: vec![
                Point::new(f64::from(i) * 10.0, 0.0),
                Point::new(f64::from(i) * 10.0 + 5.0, 5.0),
            ],
            colors: vec![Color::RED],
            ..Default::default()
        }));
    }
    for i in 0..4 {
        elements.push(Element::Line(LineElement {
            path: vec![
                Point::new(f64::from(i) * 10.0, -20.0),
                Point::new(f64::from(i) * 10.0 + 5.0, -15.0),
            ],
            colors: vec![Color::BLUE],
            ..Default::default()
        }));
    }

    let compiled = factory.synthesize_many(&elements);
    assert_eq!(line_primitives(&compiled).len(), 2);
}

#[test]
fn test_smoothing_preserves_endpoints_end_to_end() {
    let fitted = display::fit_parametric_curve(&l_path(), 5.0, false);
    assert_eq!(fitted[0], Point::new(0.0, 0.0));
    assert_eq!(*fitted.last().unwrap(), Point::new(10.0, 10.0));
    for pair in fitted.windows(2) {
        assert!(pair[1].x + pair[1].y >= pair[0].x + pair[0].y - 1e-9);
    }
}

#[test]
fn test_world_wrap_renders_as_local_segments() {
    let projection = world_projection();
    let cat = catalog();
    let factory = factory(&projection, &cat);
    let element = Element::Line(LineElement {
        path: antimeridian_path(),
        ..Default::default()
    });

    let compiled = factory.synthesize(&element);
    let lines = line_primitives(&compiled);
    assert!(!lines.is_empty());
    // No stitched stroke sweeps across the canvas.
    for (_, _, paths) in lines {
        for path in paths.iter() {
            for pair in path.windows(2) {
                assert!(
                    (pair[0].x - pair[1].x).abs() < 100.0,
                    "segment sweeps the canvas: {pair:?}"
                );
            }
        }
    }
}

#[test]
fn test_front_width_bucketing() {
    let projection = world_projection();
    let cat = catalog();
    let factory = factory(&projection, &cat);
    let element = Element::Line(LineElement {
        path: vec![Point::new(-60.0, 0.0), Point::new(60.0, 0.0)],
        pattern: "COLD_FRONT".to_string(),
        category: "Front".to_string(),
        line_width: 5.0,
        colors: vec![Color::BLUE],
        ..Default::default()
    });

    let compiled = factory.synthesize(&element);
    let lines = line_primitives(&compiled);
    assert!(!lines.is_empty());
    for (_, width, _) in lines {
        assert!((*width - 4.0).abs() < 1e-9, "front width {width}");
    }
}

#[test]
fn test_catalog_untouched_by_width_scaled_pattern() {
    let projection = world_projection();
    let cat = catalog();
    let before = cat.line_pattern("DOUBLE_LINE").unwrap().clone();

    let factory = factory(&projection, &cat);
    let element = Element::Line(LineElement {
        path: vec![Point::new(-30.0, 0.0), Point::new(30.0, 0.0)],
        pattern: "DOUBLE_LINE".to_string(),
        line_width: 3.0,
        ..Default::default()
    });
    let _ = factory.synthesize(&element);

    assert_eq!(cat.line_pattern("DOUBLE_LINE").unwrap(), &before);
}

#[test]
fn test_ellipse_respects_axis_ratio() {
    let projection = world_projection();
    let cat = catalog();
    let factory = factory(&projection, &cat);
    let element = Element::Arc(ArcElement {
        center: Point::new(0.0, 0.0),
        circumference: Point::new(10.0, 0.0),
        axis_ratio: 0.5,
        start_angle: 0.0,
        end_angle: 360.0,
        color: Color::WHITE,
        line_width: 1.0,
        dash_length: None,
    });

    let compiled = factory.synthesize(&element);
    let lines = line_primitives(&compiled);
    assert_eq!(lines.len(), 1);
    let path = &lines[0].2[0];
    assert_eq!(path.len(), 361);

    let center = Point::new(360.0, 180.0);
    let max_dx = path.iter().map(|p| (p.x - center.x).abs()).fold(0.0, f64::max);
    let max_dy = path.iter().map(|p| (p.y - center.y).abs()).fold(0.0, f64::max);
    assert!((max_dx - 20.0).abs() < 1e-6, "major {max_dx}");
    assert!((max_dy - 10.0).abs() < 1e-6, "minor {max_dy}");
}

#[test]
fn test_dashed_ellipse_breaks_into_chunks() {
    let projection = world_projection();
    let cat = catalog();
    let factory = factory(&projection, &cat);
    let element = Element::Arc(ArcElement {
        center: Point::new(0.0, 0.0),
        circumference: Point::new(10.0, 0.0),
        axis_ratio: 1.0,
        start_angle: 0.0,
        end_angle: 360.0,
        color: Color::WHITE,
        line_width: 1.0,
        dash_length: Some(3.0),
    });

    let compiled = factory.synthesize(&element);
    let lines = line_primitives(&compiled);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].2.len() > 10, "expected many dashes");
}

#[test]
fn test_vector_mixed_kinds_aggregate_per_color() {
    let projection = world_projection();
    let cat = catalog();
    let factory = factory(&projection, &cat);

    let mut elements = Vec::new();
    for i in 0..20 {
        elements.push(Element::Vector(VectorElement {
            location: Point::new(f64::from(i) * 5.0 - 50.0, 30.0),
            speed: 20.0 + f64::from(i),
            direction: f64::from(i) * 15.0,
            kind: VectorKind::WindBarb,
            color: Color::CYAN,
            ..Default::default()
        }));
    }

    let compiled = factory.synthesize_many(&elements);
    // All barbs share one color and width: one line buffer plus pennant
    // fills for the faster barbs.
    assert_eq!(line_primitives(&compiled).len(), 1);
}

#[test]
fn test_unknown_names_never_abort_pass() {
    let projection = world_projection();
    let cat = catalog();
    let factory = factory(&projection, &cat);
    let elements = vec![
        Element::Line(LineElement {
            path: vec![Point::new(0.0, 0.0), Point::new(20.0, 0.0)],
            pattern: "NO_SUCH_PATTERN".to_string(),
            colors: vec![Color::GREEN],
            ..Default::default()
        }),
        Element::Symbol(SymbolElement {
            locations: vec![Point::new(5.0, 5.0)],
            symbol: "NO_SUCH_SYMBOL".to_string(),
            color: Color::RED,
            line_width: 1.0,
            size_scale: 1.0,
            clear_background: false,
        }),
    ];

    let compiled = factory.synthesize_many(&elements);
    // The line degrades to solid; the symbol is skipped.
    assert_eq!(line_primitives(&compiled).len(), 1);
}

#[test]
fn test_mono_color_override_resolves_everything() {
    let projection = world_projection();
    let cat = catalog();
    let style = LayerStyle {
        mono_color: Some(Color::YELLOW),
        ..Default::default()
    };
    let factory = DisplayFactory::new(&projection, &cat, &world_view(), style);

    let elements = vec![
        Element::Line(LineElement {
            path: vec![Point::new(0.0, 0.0), Point::new(20.0, 10.0)],
            colors: vec![Color::RED],
            ..Default::default()
        }),
        Element::Vector(VectorElement {
            location: Point::new(10.0, 20.0),
            speed: 15.0,
            kind: VectorKind::Arrow,
            color: Color::BLUE,
            ..Default::default()
        }),
    ];

    let compiled = factory.synthesize_many(&elements);
    for (color, _, _) in line_primitives(&compiled) {
        assert_eq!(*color, Color::YELLOW);
    }
}

#[test]
fn test_text_rotation_screen_relative_on_north_up_view() {
    let projection = world_projection();
    let cat = catalog();
    let factory = factory(&projection, &cat);
    let element = Element::Text(TextElement {
        location: Point::new(-97.0, 39.0),
        lines: vec!["KMKC".to_string()],
        size: 14.0,
        rotation: 30.0,
        rotation_relative_to_north: true,
        justification: display::Justification::Center,
        color: Color::WHITE,
        offset: (0.0, 0.0),
    });

    let compiled = factory.synthesize(&element);
    match &compiled[0] {
        display::DisplayPrimitive::Text(text) => {
            // Plate carrée is north-up: north-relative equals screen-relative.
            assert!((text.rotation - 30.0).abs() < 1e-9);
            assert_eq!(text.lines, vec!["KMKC".to_string()]);
        }
        other => panic!("unexpected primitive {other:?}"),
    }
}

#[test]
fn test_kink_line_has_spike_and_head() {
    let projection = world_projection();
    let cat = catalog();
    let factory = factory(&projection, &cat);
    let element = Element::Kink(KinkElement {
        start: Point::new(0.0, 0.0),
        end: Point::new(20.0, 0.0),
        kink_position: 0.5,
        color: Color::WHITE,
        line_width: 1.0,
    });

    let compiled = factory.synthesize(&element);
    let lines = line_primitives(&compiled);
    assert_eq!(lines.len(), 1);
    let path = &lines[0].2[0];
    assert_eq!(path.len(), 3);
    // The spike leaves the straight line.
    assert!((path[1].y - path[0].y).abs() > 1.0);
    // Filled arrowhead polygon present.
    assert!(compiled
        .iter()
        .any(|p| matches!(p, display::DisplayPrimitive::Polygons { .. })));
}

#[test]
fn test_tcm_quarters_and_track_colors() {
    let projection = world_projection();
    let cat = catalog();
    let factory = factory(&projection, &cat);
    let element = Element::Tcm(TcmElement {
        quarters: vec![TcmWindQuarters {
            center: Point::new(-75.0, 25.0),
            speed: 34.0,
            radii: [2.0, 1.5, 1.0, 1.5],
        }],
        track: vec![
            Point::new(-70.0, 20.0),
            Point::new(-72.0, 22.0),
            Point::new(-75.0, 25.0),
        ],
        max_wind: 80.0,
        line_width: 2.0,
    });

    let compiled = factory.synthesize(&element);
    let colors: Vec<Color> = line_primitives(&compiled)
        .iter()
        .map(|(c, _, _)| **c)
        .collect();
    assert!(colors.contains(&Color::CYAN), "track missing");
    assert!(
        colors.contains(&Color::rgb(0, 150, 255)),
        "34kt quarters missing"
    );
}
