//! Glyph styles for practice characters, reference overlays and pinyin.

use crate::constants::DEFAULT_FONT_FAMILY;
use crate::guide::Point;
use crate::types::LayoutType;

/// Text flow of a glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum WritingMode {
    #[default]
    HorizontalTb,
    VerticalRl,
}

impl From<LayoutType> for WritingMode {
    fn from(layout: LayoutType) -> Self {
        match layout {
            LayoutType::Grid => WritingMode::HorizontalTb,
            LayoutType::Vertical => WritingMode::VerticalRl,
        }
    }
}

/// Declarative style of a glyph drawn in a cell
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GlyphStyle {
    pub font_family: String,
    /// Font size in pixels
    pub font_size_px: f32,
    pub color: String,
    /// 0.0 (invisible) to 1.0 (opaque)
    pub opacity: f32,
    /// Center of the glyph in cell-local pixels
    pub anchor: Point,
    /// Extra downward shift applied after centering (px, may be negative)
    pub offset_y: f32,
    pub writing_mode: WritingMode,
}

impl GlyphStyle {
    pub fn with_font(mut self, font_family: &str) -> Self {
        self.font_family = font_family.to_string();
        self
    }

    pub fn with_color(mut self, color: &str) -> Self {
        self.color = color.to_string();
        self
    }

    /// Anchor with the vertical offset applied
    pub fn effective_anchor(&self) -> Point {
        Point::new(self.anchor.x, self.anchor.y + self.offset_y)
    }
}

fn clamp_non_negative(value: f32) -> f32 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}

/// Style of the practice glyph in a cell of side `grid_size`.
///
/// `font_size` is a percentage of the cell. The anchor is always the cell
/// center; vertical layout only changes the writing mode.
pub fn character_style(
    grid_size: f32,
    font_size: f32,
    vertical_offset: f32,
    layout_type: LayoutType,
) -> GlyphStyle {
    let grid_size = clamp_non_negative(grid_size);
    let font_size = clamp_non_negative(font_size);
    let offset_y = if vertical_offset.is_finite() {
        vertical_offset
    } else {
        0.0
    };

    GlyphStyle {
        font_family: DEFAULT_FONT_FAMILY.to_string(),
        font_size_px: font_size * grid_size / 100.0,
        color: "black".to_string(),
        opacity: 1.0,
        anchor: Point::new(grid_size / 2.0, grid_size / 2.0),
        offset_y,
        writing_mode: layout_type.into(),
    }
}

/// Faded copy of `base` used for reference glyphs.
///
/// `opacity_percent` is clamped to 0..=100.
pub fn overlay_style(base: &GlyphStyle, color: &str, opacity_percent: f32) -> GlyphStyle {
    let opacity = (clamp_non_negative(opacity_percent) / 100.0).min(1.0);
    GlyphStyle {
        color: color.to_string(),
        opacity,
        ..base.clone()
    }
}

/// Style of the pinyin label, centered above the cell.
pub fn pinyin_style(grid_size: f32, pinyin_font_size: f32, color: &str) -> GlyphStyle {
    let grid_size = clamp_non_negative(grid_size);
    let font_size_px = clamp_non_negative(pinyin_font_size) * grid_size / 100.0;

    GlyphStyle {
        font_family: "sans-serif".to_string(),
        font_size_px,
        color: color.to_string(),
        opacity: 1.0,
        anchor: Point::new(grid_size / 2.0, -font_size_px / 2.0),
        offset_y: 0.0,
        writing_mode: WritingMode::HorizontalTb,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_size_is_percent_of_cell() {
        let style = character_style(64.0, 80.0, 0.0, LayoutType::Grid);
        assert_eq!(style.font_size_px, 51.2);
        assert_eq!(style.anchor, Point::new(32.0, 32.0));
        assert_eq!(style.writing_mode, WritingMode::HorizontalTb);
    }

    #[test]
    fn test_vertical_keeps_anchor() {
        let grid = character_style(80.0, 50.0, 4.0, LayoutType::Grid);
        let vertical = character_style(80.0, 50.0, 4.0, LayoutType::Vertical);

        assert_eq!(grid.anchor, vertical.anchor);
        assert_eq!(vertical.writing_mode, WritingMode::VerticalRl);
        assert_eq!(vertical.effective_anchor(), Point::new(40.0, 44.0));
    }

    #[test]
    fn test_negative_inputs_clamped() {
        let style = character_style(-10.0, -5.0, f32::NAN, LayoutType::Grid);
        assert_eq!(style.font_size_px, 0.0);
        assert_eq!(style.anchor, Point::new(0.0, 0.0));
        assert_eq!(style.offset_y, 0.0);
    }

    #[test]
    fn test_overlay_opacity_clamped() {
        let base = character_style(64.0, 80.0, 0.0, LayoutType::Grid);

        let ghost = overlay_style(&base, "gray", 10.0);
        assert_eq!(ghost.color, "gray");
        assert!((ghost.opacity - 0.1).abs() < 1e-6);
        assert_eq!(ghost.font_size_px, base.font_size_px);

        assert_eq!(overlay_style(&base, "gray", 250.0).opacity, 1.0);
        assert_eq!(overlay_style(&base, "gray", -3.0).opacity, 0.0);
    }
}
