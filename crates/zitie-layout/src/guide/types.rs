//! Guide primitive types
//!
//! A guide is a flat list of typed primitives in cell-local pixel
//! coordinates (origin at the top-left corner, y pointing down). There is
//! no cap on the number of primitives per cell.

use crate::constants::*;
use crate::types::LineStyle;

/// A point in cell-local pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Color, width and dash style of a guide primitive
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stroke {
    pub color: String,
    pub width: f32,
    pub line_style: LineStyle,
}

impl Stroke {
    pub fn new(color: impl Into<String>, width: f32, line_style: LineStyle) -> Self {
        Self {
            color: color.into(),
            width,
            line_style,
        }
    }

    /// Same color and dash style, scaled width
    pub fn scaled(&self, factor: f32) -> Self {
        Self {
            color: self.color.clone(),
            width: self.width * factor,
            line_style: self.line_style,
        }
    }
}

/// What a primitive means in the pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum GuideRole {
    /// Outer edge of the cell
    Border,
    /// Horizontal or vertical center line
    CenterLine,
    /// Corner-to-corner line
    Diagonal,
    /// Rectangle inset inside the border
    InnerFrame,
    /// Interior line at thirds
    ThirdLine,
    /// Short corner tick
    Tick,
    /// Horizontal writing rule
    Rule,
    /// Inscribed circle
    Circle,
}

/// Geometry of a primitive
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum GuideShape {
    Line { from: Point, to: Point },
    Rect { origin: Point, width: f32, height: f32 },
    Circle { center: Point, radius: f32 },
}

/// One guide primitive tagged with its stroke
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GuideElement {
    pub role: GuideRole,
    pub shape: GuideShape,
    pub stroke: Stroke,
}

impl GuideElement {
    pub fn line(role: GuideRole, from: Point, to: Point, stroke: Stroke) -> Self {
        Self {
            role,
            shape: GuideShape::Line { from, to },
            stroke,
        }
    }

    pub fn rect(role: GuideRole, origin: Point, width: f32, height: f32, stroke: Stroke) -> Self {
        Self {
            role,
            shape: GuideShape::Rect {
                origin,
                width,
                height,
            },
            stroke,
        }
    }

    pub fn circle(center: Point, radius: f32, stroke: Stroke) -> Self {
        Self {
            role: GuideRole::Circle,
            shape: GuideShape::Circle { center, radius },
            stroke,
        }
    }
}

/// Vector description of the guide for one cell
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GuideDescriptor {
    /// Side of the square cell in pixels
    pub size: f32,
    /// Primitives in drawing order
    pub elements: Vec<GuideElement>,
}

impl GuideDescriptor {
    /// Primitives with the given role
    pub fn with_role(&self, role: GuideRole) -> impl Iterator<Item = &GuideElement> {
        self.elements.iter().filter(move |e| e.role == role)
    }

    /// Whether any primitive has the given role
    pub fn has_role(&self, role: GuideRole) -> bool {
        self.with_role(role).next().is_some()
    }
}

/// Inputs to guide generation
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GuideParams {
    /// Cell side in pixels
    pub size: f32,
    pub border_color: String,
    pub border_width: f32,
    pub line_style: LineStyle,
    pub guide_color: String,
    pub guide_width: f32,
    /// Draw the optional secondary guides (cross, diagonals)
    pub show_sublines: bool,
}

impl Default for GuideParams {
    fn default() -> Self {
        Self {
            size: DEFAULT_GRID_SIZE_PX,
            border_color: DEFAULT_BORDER_COLOR.to_string(),
            border_width: DEFAULT_BORDER_WIDTH,
            line_style: LineStyle::Solid,
            guide_color: DEFAULT_GUIDE_COLOR.to_string(),
            guide_width: DEFAULT_GUIDE_WIDTH,
            show_sublines: true,
        }
    }
}

impl GuideParams {
    pub(crate) fn border_stroke(&self) -> Stroke {
        Stroke::new(self.border_color.clone(), self.border_width, self.line_style)
    }

    pub(crate) fn guide_stroke(&self) -> Stroke {
        Stroke::new(self.guide_color.clone(), self.guide_width, self.line_style)
    }
}
