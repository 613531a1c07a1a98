//! Pagination - partitioning characters into pages of practice cells
//!
//! This module orchestrates pagination:
//! 1. Split the input text into graphemes
//! 2. Compute page capacity from page geometry and margins
//! 3. Fill pages in order, per layout

mod grid;
mod vertical;

use crate::layout::{PageCapacity, page_capacity};
use crate::options::SheetOptions;
use crate::types::*;
use unicode_segmentation::UnicodeSegmentation;

/// Split text into practice units.
///
/// Every extended grapheme cluster is one unit, including spaces and
/// punctuation. Line breaks are dropped.
pub fn split_characters(text: &str) -> Vec<String> {
    text.graphemes(true)
        .filter(|g| !matches!(*g, "\n" | "\r\n" | "\r"))
        .map(str::to_string)
        .collect()
}

/// Paginate characters onto A4 portrait pages.
///
/// Returns at least one page; empty input yields a single empty page.
/// Fails only on invalid geometry (non-positive cell size, negative or
/// non-finite margins).
pub fn paginate<S: AsRef<str>>(
    characters: &[S],
    layout: LayoutType,
    repeat_count: usize,
    grid_size: f32,
    margins: &PageMargins,
) -> Result<Vec<Page>> {
    paginate_with_paper(
        characters,
        layout,
        repeat_count,
        grid_size,
        margins,
        PaperSize::A4,
        Orientation::Portrait,
    )
}

/// Paginate characters onto pages of any paper size.
pub fn paginate_with_paper<S: AsRef<str>>(
    characters: &[S],
    layout: LayoutType,
    repeat_count: usize,
    grid_size: f32,
    margins: &PageMargins,
    paper: PaperSize,
    orientation: Orientation,
) -> Result<Vec<Page>> {
    let capacity = page_capacity(
        layout,
        repeat_count,
        grid_size,
        margins,
        paper.dimensions_px(orientation),
    )?;
    Ok(paginate_with_capacity(characters, repeat_count, &capacity))
}

/// Paginate text with complete sheet options, returning the capacity used.
pub fn paginate_sheet(text: &str, options: &SheetOptions) -> Result<(PageCapacity, Vec<Page>)> {
    let characters = split_characters(text);
    let layout = &options.layout;
    let print = &options.print;

    let repeat_count = layout.effective_repeat_count();

    let capacity = page_capacity(
        layout.layout_type,
        repeat_count,
        layout.grid_size,
        &print.margins,
        print.page_px(),
    )?;
    let pages = paginate_with_capacity(&characters, repeat_count, &capacity);
    Ok((capacity, pages))
}

/// Paginate against an already computed capacity.
pub fn paginate_with_capacity<S: AsRef<str>>(
    characters: &[S],
    repeat_count: usize,
    capacity: &PageCapacity,
) -> Vec<Page> {
    let repeat_count = repeat_count.max(1);

    let pages = match capacity.layout {
        LayoutType::Grid => grid::paginate_grid(characters, repeat_count, capacity.cells_per_page),
        LayoutType::Vertical => {
            vertical::paginate_vertical(characters, repeat_count, capacity.columns)
        }
    };

    log::debug!(
        "Paginated {} characters x {} into {} page(s)",
        characters.len(),
        repeat_count,
        pages.len()
    );

    if pages.is_empty() { vec![Vec::new()] } else { pages }
}

/// The repeat run for one source character
pub(crate) fn practice_run(character: &str, group_index: usize, repeat_count: usize) -> Page {
    (0..repeat_count)
        .map(|i| PracticeCell::new(character, group_index, i == 0))
        .collect()
}
