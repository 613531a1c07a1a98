//! Cell placement on the page
//!
//! This module assigns each practice cell of a page its rectangle, following
//! the same geometry that page capacity was computed from:
//! - Grid: rows separated by a row gap, centered horizontally
//! - Vertical: one column per character, columns from right to left

use crate::constants::*;
use crate::types::{LayoutType, Page, PageMargins};

use super::{GridPosition, PageCapacity, PlacedCell, Rect};

/// Place every cell of `page` on the sheet.
///
/// Cells beyond the last row that fits are still placed, overflowing the
/// bottom margin, so no cell is ever lost.
///
/// # Arguments
/// * `page` - Cells of one page, in pagination order
/// * `capacity` - Capacity the page was paginated with
/// * `grid_size` - Cell side in pixels
/// * `margins` - Page margins in millimeters
pub fn place_page(
    page: &Page,
    capacity: &PageCapacity,
    grid_size: f32,
    margins: &PageMargins,
) -> Vec<PlacedCell> {
    match capacity.layout {
        LayoutType::Grid => place_grid(page, capacity, grid_size, margins),
        LayoutType::Vertical => place_vertical(page, capacity, grid_size, margins),
    }
}

fn place_grid(
    page: &Page,
    capacity: &PageCapacity,
    grid_size: f32,
    margins: &PageMargins,
) -> Vec<PlacedCell> {
    let columns = capacity.columns.max(1);
    let content_width = columns as f32 * grid_size;
    let origin_x = mm_to_px(margins.left_mm) + (capacity.usable_width_px - content_width) / 2.0;
    let origin_y = mm_to_px(margins.top_mm) + GRID_PADDING_TOP_PX;
    let row_pitch = grid_size + ROW_GAP_PX;

    page.iter()
        .enumerate()
        .map(|(i, cell)| {
            let pos = GridPosition::new(i / columns, i % columns);
            PlacedCell {
                cell: cell.clone(),
                position: pos,
                rect: Rect::new(
                    origin_x + pos.col as f32 * grid_size,
                    origin_y + pos.row as f32 * row_pitch,
                    grid_size,
                    grid_size,
                ),
            }
        })
        .collect()
}

fn place_vertical(
    page: &Page,
    capacity: &PageCapacity,
    grid_size: f32,
    margins: &PageMargins,
) -> Vec<PlacedCell> {
    let columns = capacity.columns.max(1);
    let area_width = capacity.usable_width_px - VERTICAL_SIDE_MARGIN_PX * 2.0;
    let content_width = columns as f32 * grid_size;
    let origin_x =
        mm_to_px(margins.left_mm) + VERTICAL_SIDE_MARGIN_PX + (area_width - content_width) / 2.0;
    let origin_y = mm_to_px(margins.top_mm) + VERTICAL_PADDING_TOP_PX;

    let mut placed = Vec::with_capacity(page.len());
    let mut col = 0;
    let mut row = 0;
    let mut current_group = None;

    for cell in page {
        match current_group {
            Some(group) if group == cell.group_index => row += 1,
            Some(_) => {
                col += 1;
                row = 0;
            }
            None => {}
        }
        current_group = Some(cell.group_index);

        // Traditional order: the first character sits in the rightmost column
        let slot = columns - 1 - col.min(columns - 1);
        placed.push(PlacedCell {
            cell: cell.clone(),
            position: GridPosition::new(row, col),
            rect: Rect::new(
                origin_x + slot as f32 * grid_size,
                origin_y + row as f32 * grid_size,
                grid_size,
                grid_size,
            ),
        });
    }

    placed
}
