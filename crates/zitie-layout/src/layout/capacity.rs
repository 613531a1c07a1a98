//! Page capacity calculation
//!
//! Converts page size, margins and cell size into the number of practice
//! cells a page holds. Degenerate geometry is clamped so that every page
//! holds at least one row and one column.

use crate::constants::*;
use crate::types::{LayoutType, PageMargins, Result, ensure_positive};

use super::PageCapacity;

/// Compute the capacity of one page.
///
/// # Arguments
/// * `layout` - Grid (rows) or vertical (columns)
/// * `repeat_count` - Cells per character; 0 is treated as 1
/// * `grid_size` - Cell side in pixels
/// * `margins` - Page margins in millimeters
/// * `page_px` - Page (width, height) in pixels
pub fn page_capacity(
    layout: LayoutType,
    repeat_count: usize,
    grid_size: f32,
    margins: &PageMargins,
    page_px: (f32, f32),
) -> Result<PageCapacity> {
    let grid_size = ensure_positive("grid_size", grid_size)?;
    ensure_positive("page.width", page_px.0)?;
    ensure_positive("page.height", page_px.1)?;
    margins.validate()?;

    let usable_width_px = page_px.0 - margins.horizontal_px();
    let usable_height_px = page_px.1 - margins.vertical_px();

    let capacity = match layout {
        LayoutType::Grid => grid_capacity(usable_width_px, usable_height_px, grid_size),
        LayoutType::Vertical => vertical_capacity(
            usable_width_px,
            usable_height_px,
            grid_size,
            repeat_count.max(1),
        ),
    };

    if capacity.clamped {
        log::warn!(
            "Cell size {}px does not fit the {:?} page area ({:.1} x {:.1}px); clamped to {} columns x {} rows",
            grid_size,
            layout,
            usable_width_px,
            usable_height_px,
            capacity.columns,
            capacity.rows
        );
    }
    log::debug!(
        "Page capacity: {} columns x {} rows = {} cells",
        capacity.columns,
        capacity.rows,
        capacity.cells_per_page
    );

    Ok(capacity)
}

fn grid_capacity(usable_width_px: f32, usable_height_px: f32, grid_size: f32) -> PageCapacity {
    let effective_height = usable_height_px - GRID_PADDING_TOP_PX;
    let row_height = grid_size + ROW_GAP_PX;

    let raw_columns = (usable_width_px / grid_size).floor();
    // Slack rows only extend a page that has room for content at all
    let raw_rows = if effective_height > 0.0 {
        (effective_height / row_height).floor() + ROW_OVERFLOW_SLACK as f32
    } else {
        0.0
    };

    let (columns, columns_clamped) = at_least_one(raw_columns);
    let (rows, rows_clamped) = at_least_one(raw_rows);

    PageCapacity {
        layout: LayoutType::Grid,
        usable_width_px,
        usable_height_px,
        columns,
        rows,
        cells_per_page: columns.saturating_mul(rows),
        clamped: columns_clamped || rows_clamped,
    }
}

fn vertical_capacity(
    usable_width_px: f32,
    usable_height_px: f32,
    grid_size: f32,
    repeat_count: usize,
) -> PageCapacity {
    let width = usable_width_px - VERTICAL_SIDE_MARGIN_PX * 2.0;
    let (columns, clamped) = at_least_one((width / grid_size).floor());

    PageCapacity {
        layout: LayoutType::Vertical,
        usable_width_px,
        usable_height_px,
        columns,
        rows: repeat_count,
        cells_per_page: columns.saturating_mul(repeat_count),
        clamped,
    }
}

/// Floor a count to usize, raising anything below 1 to 1.
///
/// Counts beyond `usize::MAX` saturate.
fn at_least_one(raw: f32) -> (usize, bool) {
    if raw >= 1.0 {
        (raw as usize, false)
    } else {
        (1, true)
    }
}
