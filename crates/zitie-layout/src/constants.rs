//! Shared constants for practice sheet layout
//!
//! This module centralizes the page geometry, spacing and guide ratios used
//! throughout pagination, placement and guide generation.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Reference resolution used for every px measurement (CSS pixels)
pub const REFERENCE_DPI: f32 = 96.0;

/// Millimeters per inch
pub const MM_PER_INCH: f32 = 25.4;

/// Convert millimeters to pixels at the reference DPI
#[inline]
pub fn mm_to_px(mm: f32) -> f32 {
    mm / MM_PER_INCH * REFERENCE_DPI
}

/// Convert pixels at the reference DPI to millimeters
#[inline]
pub fn px_to_mm(px: f32) -> f32 {
    px / REFERENCE_DPI * MM_PER_INCH
}

// =============================================================================
// Reference Page
// =============================================================================

/// A4 portrait width in pixels, as laid out by the print stylesheet
pub const A4_WIDTH_PX: f32 = 795.0;

/// A4 portrait height in pixels
pub const A4_HEIGHT_PX: f32 = 1133.0;

// =============================================================================
// Layout Spacing
// =============================================================================

/// Padding above the first row in grid layout (px)
pub const GRID_PADDING_TOP_PX: f32 = 20.0;

/// Padding above the first cell in vertical layout (px)
pub const VERTICAL_PADDING_TOP_PX: f32 = 10.0;

/// Gap between consecutive rows in grid layout (px)
pub const ROW_GAP_PX: f32 = 30.0;

/// Fixed side margin reserved on each side in vertical layout (px)
pub const VERTICAL_SIDE_MARGIN_PX: f32 = 20.0;

/// Extra rows added on top of the geometric fit in grid layout.
///
/// Trailing rows are allowed to clip into the bottom margin instead of
/// reserving a full row gap each. Tunable.
pub const ROW_OVERFLOW_SLACK: usize = 3;

// =============================================================================
// Guide Geometry
// =============================================================================

/// Inset of the hui inner frame, as a fraction of the cell side
pub const HUI_INSET_RATIO: f32 = 0.2;

/// Length of gou corner ticks, as a fraction of the cell side
pub const GOU_TICK_RATIO: f32 = 0.25;

/// Radius of the mitian inscribed circle, as a fraction of the cell side
pub const MITIAN_CIRCLE_RATIO: f32 = 0.3;

/// Heights of the si rules, as fractions of the cell side
pub const SI_RULE_POSITIONS: [f32; 3] = [0.25, 0.5, 0.75];

/// Width multiplier for the middle si rule
pub const SI_MIDDLE_RULE_FACTOR: f32 = 1.5;

/// Weight of the zhong center line relative to the border
pub const ZHONG_MIDLINE_FACTOR: f32 = 0.5;

// =============================================================================
// Defaults
// =============================================================================

/// Default cell side (px)
pub const DEFAULT_GRID_SIZE_PX: f32 = 64.0;

/// Default glyph size, percent of the cell side
pub const DEFAULT_FONT_SIZE_PERCENT: f32 = 80.0;

/// Default pinyin size, percent of the cell side
pub const DEFAULT_PINYIN_SIZE_PERCENT: f32 = 40.0;

/// Default reference (ghost glyph) opacity, percent
pub const DEFAULT_REFERENCE_OPACITY_PERCENT: f32 = 10.0;

/// Default font stack for practice glyphs
pub const DEFAULT_FONT_FAMILY: &str = "楷体, KaiTi, STKaiti, serif";

/// Default border color
pub const DEFAULT_BORDER_COLOR: &str = "#aaaaaa";

/// Default border width (px)
pub const DEFAULT_BORDER_WIDTH: f32 = 1.5;

/// Default guide color
pub const DEFAULT_GUIDE_COLOR: &str = "lightgray";

/// Default guide width (px)
pub const DEFAULT_GUIDE_WIDTH: f32 = 1.0;
