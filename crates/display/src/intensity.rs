//! Meteorological intensity conventions.
//!
//! Wind-radius and category thresholds are convention literals; they are
//! never derived.

use drawing_common::Color;

/// Wind radii thresholds in knots.
pub const WIND_RADII_KT: [f64; 3] = [34.0, 50.0, 64.0];

/// Saffir-Simpson category cutoffs in knots, categories 1 through 5.
pub const SAFFIR_SIMPSON_KT: [f64; 5] = [65.0, 83.0, 96.0, 113.0, 137.0];

/// Display color for a wind-radius threshold. Zero marks the 12-ft sea
/// field.
pub fn wind_radius_color(threshold_kt: f64) -> Color {
    if threshold_kt >= 64.0 {
        Color::RED
    } else if threshold_kt >= 50.0 {
        Color::YELLOW
    } else if threshold_kt >= 34.0 {
        Color::rgb(0, 150, 255)
    } else {
        Color::GREEN
    }
}

/// Saffir-Simpson category for a max sustained wind; 0 below hurricane
/// strength.
pub fn saffir_simpson_category(max_wind_kt: f64) -> u8 {
    let mut category = 0;
    for cutoff in SAFFIR_SIMPSON_KT {
        if max_wind_kt >= cutoff {
            category += 1;
        }
    }
    category
}

/// Storm symbol pattern name by max wind and hemisphere.
pub fn storm_symbol_name(max_wind_kt: f64, southern_hemisphere: bool) -> &'static str {
    if max_wind_kt < 34.0 {
        "TROPICAL_DEPRESSION"
    } else if max_wind_kt < 64.0 {
        if southern_hemisphere {
            "TROPICAL_STORM_SH"
        } else {
            "TROPICAL_STORM_NH"
        }
    } else if southern_hemisphere {
        "HURRICANE_SH"
    } else {
        "HURRICANE_NH"
    }
}

/// Advisory breakpoint color by severity and advisory kind.
pub fn advisory_color(
    severity: crate::element::AdvisorySeverity,
    kind: crate::element::AdvisoryKind,
) -> Color {
    use crate::element::{AdvisoryKind, AdvisorySeverity};
    match (kind, severity) {
        (AdvisoryKind::Hurricane, AdvisorySeverity::Warning) => Color::RED,
        (AdvisoryKind::Hurricane, AdvisorySeverity::Watch) => Color::rgb(255, 105, 180),
        (AdvisoryKind::TropicalStorm, AdvisorySeverity::Warning) => Color::BLUE,
        (AdvisoryKind::TropicalStorm, AdvisorySeverity::Watch) => Color::YELLOW,
    }
}
