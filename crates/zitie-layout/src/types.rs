use crate::constants::{A4_HEIGHT_PX, A4_WIDTH_PX, mm_to_px};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SheetError {
    #[error("Invalid dimension: {name} = {value}")]
    InvalidDimension { name: &'static str, value: f32 },
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("No pages to render")]
    NoPages,
}

pub type Result<T> = std::result::Result<T, SheetError>;

/// Reject values that cannot be used as a length (non-finite or <= 0)
pub(crate) fn ensure_positive(name: &'static str, value: f32) -> Result<f32> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(SheetError::InvalidDimension { name, value })
    }
}

/// Reject values that cannot be used as a margin (non-finite or < 0)
pub(crate) fn ensure_non_negative(name: &'static str, value: f32) -> Result<f32> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(SheetError::InvalidDimension { name, value })
    }
}

/// Paper orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Orientation {
    /// Portrait: height > width
    #[default]
    Portrait,
    /// Landscape: width > height
    Landscape,
}

/// Standard paper sizes
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PaperSize {
    A3,
    #[default]
    A4,
    A5,
    B5,
    Letter,
    Custom { width_mm: f32, height_mm: f32 },
}

impl PaperSize {
    /// Get base dimensions (always portrait for standard sizes)
    pub fn dimensions_mm(self) -> (f32, f32) {
        match self {
            PaperSize::A3 => (297.0, 420.0),
            PaperSize::A4 => (210.0, 297.0),
            PaperSize::A5 => (148.0, 210.0),
            PaperSize::B5 => (176.0, 250.0),
            PaperSize::Letter => (215.9, 279.4),
            PaperSize::Custom {
                width_mm,
                height_mm,
            } => (width_mm, height_mm),
        }
    }

    /// Get dimensions with orientation applied
    pub fn dimensions_with_orientation(self, orientation: Orientation) -> (f32, f32) {
        let (w, h) = self.dimensions_mm();
        match orientation {
            Orientation::Portrait => (w, h),
            Orientation::Landscape => (h, w),
        }
    }

    /// Page size in pixels at the reference DPI.
    ///
    /// A4 uses the fixed print-stylesheet page (795 × 1133 px) so that
    /// page capacity matches what the browser actually lays out.
    pub fn dimensions_px(self, orientation: Orientation) -> (f32, f32) {
        let (w, h) = match self {
            PaperSize::A4 => (A4_WIDTH_PX, A4_HEIGHT_PX),
            other => {
                let (w_mm, h_mm) = other.dimensions_mm();
                (mm_to_px(w_mm), mm_to_px(h_mm))
            }
        };
        match orientation {
            Orientation::Portrait => (w, h),
            Orientation::Landscape => (h, w),
        }
    }
}

/// Named guide pattern drawn inside each practice cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum GridType {
    /// 田字格: center cross
    #[default]
    Tian,
    /// 米字格: cross and diagonals
    Mi,
    /// 回宫格: inner frame
    Hui,
    /// 九宫格: thirds
    Jiu,
    /// 钩线格: corner ticks
    Gou,
    /// 方格: plain square
    Fang,
    /// 横线格: baseline only
    Heng,
    /// 中线格: baseline and midline
    Zhong,
    /// 米田格: mi with inscribed circle
    Mitian,
    /// 四线格: three horizontal rules
    Si,
}

impl GridType {
    pub const ALL: [GridType; 10] = [
        GridType::Tian,
        GridType::Mi,
        GridType::Hui,
        GridType::Jiu,
        GridType::Gou,
        GridType::Fang,
        GridType::Heng,
        GridType::Zhong,
        GridType::Mitian,
        GridType::Si,
    ];

    /// Look up a style by its short name; unknown names fall back to tian
    pub fn from_name(name: &str) -> Self {
        let trimmed = name.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(trimmed))
            .unwrap_or_else(|| {
                log::debug!("Unknown grid style {:?}, using tian", name);
                GridType::Tian
            })
    }

    pub fn name(self) -> &'static str {
        match self {
            GridType::Tian => "tian",
            GridType::Mi => "mi",
            GridType::Hui => "hui",
            GridType::Jiu => "jiu",
            GridType::Gou => "gou",
            GridType::Fang => "fang",
            GridType::Heng => "heng",
            GridType::Zhong => "zhong",
            GridType::Mitian => "mitian",
            GridType::Si => "si",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GridType::Tian => "田字格",
            GridType::Mi => "米字格",
            GridType::Hui => "回宫格",
            GridType::Jiu => "九宫格",
            GridType::Gou => "钩线格",
            GridType::Fang => "方格",
            GridType::Heng => "横线格",
            GridType::Zhong => "中线格",
            GridType::Mitian => "米田格",
            GridType::Si => "四线格",
        }
    }
}

/// Writing direction of the sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LayoutType {
    /// Rows, left to right
    #[default]
    Grid,
    /// Columns, top to bottom (traditional)
    Vertical,
}

impl LayoutType {
    /// Look up a layout by name; anything but "vertical" is grid
    pub fn from_name(name: &str) -> Self {
        if name.trim().eq_ignore_ascii_case("vertical") {
            LayoutType::Vertical
        } else {
            LayoutType::Grid
        }
    }
}

/// Dash style of guide and border strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

/// Page margins in millimeters
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PageMargins {
    pub top_mm: f32,
    pub right_mm: f32,
    pub bottom_mm: f32,
    pub left_mm: f32,
}

impl Default for PageMargins {
    fn default() -> Self {
        Self {
            top_mm: 5.0,
            right_mm: 10.0,
            bottom_mm: 12.0,
            left_mm: 10.0,
        }
    }
}

impl PageMargins {
    /// Create uniform margins on all sides
    pub fn uniform(margin_mm: f32) -> Self {
        Self {
            top_mm: margin_mm,
            right_mm: margin_mm,
            bottom_mm: margin_mm,
            left_mm: margin_mm,
        }
    }

    /// Check that every side is finite and non-negative
    pub fn validate(&self) -> Result<()> {
        ensure_non_negative("margin.top", self.top_mm)?;
        ensure_non_negative("margin.right", self.right_mm)?;
        ensure_non_negative("margin.bottom", self.bottom_mm)?;
        ensure_non_negative("margin.left", self.left_mm)?;
        Ok(())
    }

    /// Left + right margins in pixels
    pub fn horizontal_px(&self) -> f32 {
        mm_to_px(self.left_mm) + mm_to_px(self.right_mm)
    }

    /// Top + bottom margins in pixels
    pub fn vertical_px(&self) -> f32 {
        mm_to_px(self.top_mm) + mm_to_px(self.bottom_mm)
    }
}

/// One slot on the sheet in which a single instance of a character is written
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PracticeCell {
    /// The grapheme to practice (may be a space)
    pub character: String,
    /// Index of the source character this cell repeats
    pub group_index: usize,
    /// Whether this is the first repetition of its group
    pub is_first_in_group: bool,
}

impl PracticeCell {
    pub fn new(character: impl Into<String>, group_index: usize, is_first_in_group: bool) -> Self {
        Self {
            character: character.into(),
            group_index,
            is_first_in_group,
        }
    }

    /// Whether the cell holds an ASCII or full-width space
    pub fn is_space(&self) -> bool {
        is_space_sentinel(&self.character)
    }
}

/// ASCII space and the ideographic space both act as blank practice cells
pub fn is_space_sentinel(character: &str) -> bool {
    character.is_empty() || character == " " || character == "\u{3000}"
}

/// An ordered run of practice cells that fits on one sheet
pub type Page = Vec<PracticeCell>;

/// Statistics about a paginated sheet
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SheetStatistics {
    /// Number of source characters
    pub characters: usize,
    /// Total practice cells across all pages
    pub cells: usize,
    /// Number of output pages
    pub pages: usize,
    /// Capacity of a single page in cells
    pub cells_per_page: usize,
    /// Capacity left unused on the last page
    pub unused_cells_last_page: usize,
}
