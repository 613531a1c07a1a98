//! Layout data types for practice sheets
//!
//! These types represent the intermediate geometry between pagination and
//! the final per-cell decoration.

use crate::types::{LayoutType, PracticeCell};

/// Position within the page grid (row, column)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPosition {
    /// Row index (0 = top row)
    pub row: usize,
    /// Column index (0 = first column in writing order)
    pub col: usize,
}

impl GridPosition {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// A rectangular area in pixels, origin at the top-left of the page
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// X position (left edge)
    pub x: f32,
    /// Y position (top edge)
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x coordinate
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge y coordinate
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Center x coordinate
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Center y coordinate
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }
}

/// How many cells fit on one page, and why
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageCapacity {
    pub layout: LayoutType,
    /// Page width minus margins (px)
    pub usable_width_px: f32,
    /// Page height minus margins (px)
    pub usable_height_px: f32,
    /// Cells per row (grid) or character columns per page (vertical)
    pub columns: usize,
    /// Rows per page (grid) or cells per column (vertical)
    pub rows: usize,
    /// Total practice cells per page
    pub cells_per_page: usize,
    /// Whether columns or rows had to be raised to 1
    pub clamped: bool,
}

/// A practice cell with its rectangle on the page
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacedCell {
    pub cell: PracticeCell,
    pub position: GridPosition,
    pub rect: Rect,
}
