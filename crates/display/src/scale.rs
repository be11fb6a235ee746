//! Per-pass scale factors derived from the current view.
//!
//! Rebuilt every time the view extent or canvas changes; never cached across
//! passes.

use projection::MapView;

/// Reference extent height giving a device scale of 1.0.
const REFERENCE_EXTENT_HEIGHT: f64 = 300.0;

/// Scale factors tying pattern-space units to the current view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleContext {
    /// Pixels per reference unit, derived from the view extent height.
    pub device_scale: f64,
    /// Extent units per canvas pixel.
    pub screen_to_extent: f64,
    /// Canvas pixels per extent unit.
    pub screen_to_world: f64,
}

impl ScaleContext {
    pub fn from_view(view: &MapView) -> Self {
        Self {
            device_scale: view.extent_height() / REFERENCE_EXTENT_HEIGHT,
            screen_to_extent: view.extent_height() / view.canvas_height,
            screen_to_world: view.canvas_width / view.extent_width(),
        }
    }

    /// Sub-point spacing for curve smoothing at the given smooth level.
    /// Level 0 disables smoothing.
    pub fn smooth_spacing(&self, smooth_level: u8) -> Option<f64> {
        match smooth_level {
            0 => None,
            1 => Some(self.device_scale * 50.0),
            _ => Some(self.device_scale * 10.0),
        }
    }
}
