//! Text billboard sizing.
//!
//! A label is text rasterized onto an off-screen surface that is exactly as
//! wide as the measured text and as tall as the rounded-up font size, then
//! shown on a quad scaled down by [`LABEL_SCALE`].

use bevy_math::Vec2;

use crate::config::{LabelConfig, Rgb};

pub const DEFAULT_FONT_SIZE: f32 = 24.0;
pub const LABEL_SCALE: f32 = 0.25;

/// Average glyph advance as a fraction of the font size, used before the
/// renderer has measured the text.
const ESTIMATED_ADVANCE: f32 = 0.6;

#[derive(Clone, Debug, PartialEq)]
pub struct LabelStyle {
    pub color: Rgb,
    /// Font asset path, `None` for the default font.
    pub font: Option<String>,
    pub size: f32,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            color: Rgb::BLACK,
            font: None,
            size: DEFAULT_FONT_SIZE,
        }
    }
}

impl From<&LabelConfig> for LabelStyle {
    fn from(config: &LabelConfig) -> Self {
        Self {
            color: config.color,
            font: config.font.clone(),
            size: config.font_size,
        }
    }
}

/// Pixel size of a label's drawing surface. Never smaller than 1x1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LabelSurface {
    pub width: u32,
    pub height: u32,
}

impl LabelSurface {
    pub fn measured(text_width: f32, font_size: f32) -> Self {
        Self {
            width: clamp_px(text_width),
            height: clamp_px(font_size),
        }
    }

    /// Size guess for text that has not been laid out yet.
    pub fn estimate(text: &str, font_size: f32) -> Self {
        let width = text.chars().count() as f32 * font_size * ESTIMATED_ADVANCE;
        Self::measured(width, font_size)
    }

    /// World-space size of the quad showing this surface.
    pub fn billboard_size(&self, scale: f32) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32) * scale
    }
}

fn clamp_px(v: f32) -> u32 {
    if v.is_finite() { v.ceil().max(1.0) as u32 } else { 1 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn height_is_rounded_font_size() {
        assert_eq!(LabelSurface::measured(31.2, 24.0).height, 24);
        assert_eq!(LabelSurface::measured(31.2, 24.3).height, 25);
        assert_eq!(LabelSurface::measured(31.2, 24.0).width, 32);
    }

    #[test]
    fn empty_text_never_degenerates() {
        let surface = LabelSurface::estimate("", DEFAULT_FONT_SIZE);
        assert_eq!(surface.width, 1);
        assert_eq!(LabelSurface::measured(0.0, 0.0), LabelSurface { width: 1, height: 1 });
        assert_eq!(LabelSurface::measured(f32::NAN, 24.0).width, 1);
    }

    #[test]
    fn billboard_is_scaled_surface() {
        let surface = LabelSurface::measured(40.0, 24.0);
        assert_eq!(surface.billboard_size(LABEL_SCALE), Vec2::new(10.0, 6.0));
    }

    #[test]
    fn estimate_grows_with_text() {
        let one = LabelSurface::estimate("X", 24.0);
        let two = LabelSurface::estimate("-X", 24.0);
        assert!(two.width > one.width);
        assert_eq!(one.height, two.height);
    }
}
