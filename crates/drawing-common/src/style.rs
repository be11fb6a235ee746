//! Layer-level display style.
//!
//! An immutable style value passed explicitly into synthesis. Covers the
//! layer overrides the drawing resource can apply to every element it owns:
//! a mono-color override, the layer fill switch, and the editor background
//! color used for background masks.

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// How a closed, filled element paints its interior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FillMode {
    #[default]
    Solid,
    /// Half-alpha fill.
    Transparency,
}

impl FillMode {
    pub fn alpha(&self, color: Color) -> f32 {
        match self {
            FillMode::Solid => color.alpha_f32(),
            FillMode::Transparency => 0.5,
        }
    }
}

/// Display attributes applied to all elements on a layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayerStyle {
    /// Draw every element in this single color when set.
    pub mono_color: Option<Color>,
    /// Filled elements paint their interior only when the layer allows it.
    pub filled: bool,
    /// Editor background color, used for background masks.
    pub background: Color,
}

impl Default for LayerStyle {
    fn default() -> Self {
        Self {
            mono_color: None,
            filled: true,
            background: Color::BLACK,
        }
    }
}

impl LayerStyle {
    /// Resolve one element color against the layer override.
    pub fn resolve(&self, color: Color) -> Color {
        self.mono_color.unwrap_or(color)
    }

    /// Resolve every element color against the layer override.
    pub fn resolve_all(&self, colors: &[Color]) -> Vec<Color> {
        colors.iter().map(|&c| self.resolve(c)).collect()
    }

    /// Whether an element with the given fill flag paints its interior.
    pub fn display_fill(&self, element_filled: bool) -> bool {
        element_filled && self.filled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mono_color_override() {
        let style = LayerStyle {
            mono_color: Some(Color::YELLOW),
            ..Default::default()
        };
        assert_eq!(style.resolve(Color::RED), Color::YELLOW);
        assert_eq!(
            style.resolve_all(&[Color::RED, Color::BLUE]),
            vec![Color::YELLOW, Color::YELLOW]
        );

        let plain = LayerStyle::default();
        assert_eq!(plain.resolve(Color::RED), Color::RED);
    }

    #[test]
    fn test_fill_gate() {
        let style = LayerStyle {
            filled: false,
            ..Default::default()
        };
        assert!(!style.display_fill(true));
        assert!(LayerStyle::default().display_fill(true));
        assert!(!LayerStyle::default().display_fill(false));
    }

    #[test]
    fn test_fill_alpha() {
        assert!((FillMode::Transparency.alpha(Color::RED) - 0.5).abs() < 1e-6);
        assert!((FillMode::Solid.alpha(Color::RED) - 1.0).abs() < 1e-6);
    }
}
