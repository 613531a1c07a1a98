use crate::constants::*;
use crate::guide::GuideParams;
use crate::style::{GlyphStyle, character_style, overlay_style, pinyin_style};
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Everything that controls how characters are laid into cells
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LayoutSettings {
    // Grid
    pub grid_type: GridType,
    pub grid_size: f32,
    pub border_color: String,
    pub border_width: f32,
    pub line_style: LineStyle,
    pub guide_color: String,
    pub guide_width: f32,
    pub show_sublines: bool,

    // Arrangement
    pub repeat_count: usize,
    pub layout_type: LayoutType,

    // Glyph
    pub font_family: String,
    pub font_size: f32,
    pub font_color: String,
    pub vertical_offset: f32,

    // Reference (ghost) glyphs in repeat cells
    pub show_reference: bool,
    pub reference_color: String,
    pub reference_opacity: f32,

    // Pinyin
    pub show_pinyin: bool,
    pub with_tone: bool,
    pub pinyin_font_size: f32,
    pub pinyin_color: String,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            grid_type: GridType::Tian,
            grid_size: DEFAULT_GRID_SIZE_PX,
            border_color: DEFAULT_BORDER_COLOR.to_string(),
            border_width: DEFAULT_BORDER_WIDTH,
            line_style: LineStyle::Solid,
            guide_color: DEFAULT_GUIDE_COLOR.to_string(),
            guide_width: DEFAULT_GUIDE_WIDTH,
            show_sublines: true,
            repeat_count: 1,
            layout_type: LayoutType::Grid,
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            font_size: DEFAULT_FONT_SIZE_PERCENT,
            font_color: "black".to_string(),
            vertical_offset: 0.0,
            show_reference: true,
            reference_color: "black".to_string(),
            reference_opacity: DEFAULT_REFERENCE_OPACITY_PERCENT,
            show_pinyin: true,
            with_tone: true,
            pinyin_font_size: DEFAULT_PINYIN_SIZE_PERCENT,
            pinyin_color: "#666666".to_string(),
        }
    }
}

impl LayoutSettings {
    /// Repeat count as used by pagination (never below 1)
    pub fn effective_repeat_count(&self) -> usize {
        self.repeat_count.max(1)
    }

    /// Guide parameters for one cell
    pub fn guide_params(&self) -> GuideParams {
        GuideParams {
            size: self.grid_size,
            border_color: self.border_color.clone(),
            border_width: self.border_width,
            line_style: self.line_style,
            guide_color: self.guide_color.clone(),
            guide_width: self.guide_width,
            show_sublines: self.show_sublines,
        }
    }

    /// Style of the solid practice glyph
    pub fn glyph_style(&self) -> GlyphStyle {
        character_style(
            self.grid_size,
            self.font_size,
            self.vertical_offset,
            self.layout_type,
        )
        .with_font(&self.font_family)
        .with_color(&self.font_color)
    }

    /// Style of the faded reference glyph
    pub fn reference_style(&self) -> GlyphStyle {
        overlay_style(
            &self.glyph_style(),
            &self.reference_color,
            self.reference_opacity,
        )
    }

    /// Style of the pinyin label above a cell
    pub fn pinyin_style(&self) -> GlyphStyle {
        pinyin_style(self.grid_size, self.pinyin_font_size, &self.pinyin_color)
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        ensure_positive("grid_size", self.grid_size)?;
        ensure_non_negative("border_width", self.border_width)?;
        ensure_non_negative("guide_width", self.guide_width)?;

        if !(0.0..=200.0).contains(&self.font_size) {
            return Err(SheetError::Config(format!(
                "Font size must be between 0 and 200 percent of the cell, got {}",
                self.font_size
            )));
        }
        if !(0.0..=100.0).contains(&self.reference_opacity) {
            return Err(SheetError::Config(format!(
                "Reference opacity must be between 0 and 100 percent, got {}",
                self.reference_opacity
            )));
        }
        if !self.vertical_offset.is_finite() {
            return Err(SheetError::InvalidDimension {
                name: "vertical_offset",
                value: self.vertical_offset,
            });
        }

        Ok(())
    }
}

/// Paper and margins of the printed sheet
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PrintSettings {
    pub paper_size: PaperSize,
    pub orientation: Orientation,
    pub margins: PageMargins,
}

impl PrintSettings {
    /// Page size in pixels with orientation applied
    pub fn page_px(&self) -> (f32, f32) {
        self.paper_size.dimensions_px(self.orientation)
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        let (w, h) = self.paper_size.dimensions_mm();
        ensure_positive("paper.width", w)?;
        ensure_positive("paper.height", h)?;
        self.margins.validate()
    }
}

/// Complete practice sheet configuration
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SheetOptions {
    pub layout: LayoutSettings,
    pub print: PrintSettings,
}

impl SheetOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| SheetError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| SheetError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        self.layout.validate()?;
        self.print.validate()
    }
}
