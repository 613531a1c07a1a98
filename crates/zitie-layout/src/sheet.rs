//! Sheet composition
//!
//! Runs the whole pipeline for a piece of text: pagination, placement of
//! every cell on its page, and decoration.

use crate::annotation::{AnnotationCache, AnnotationProvider};
use crate::decorate::{DecoratedPage, decorate_page};
use crate::layout::{PageCapacity, PlacedCell, place_page};
use crate::options::SheetOptions;
use crate::paginate::paginate_sheet;
use crate::types::*;

/// One composed page
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SheetPage {
    /// 1-based page number
    pub number: usize,
    pub placements: Vec<PlacedCell>,
    pub decorated: DecoratedPage,
}

/// A composed practice sheet
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sheet {
    pub capacity: PageCapacity,
    /// Page (width, height) in pixels
    pub page_px: (f32, f32),
    pub pages: Vec<SheetPage>,
}

/// Compose every page of the sheet for `text`
pub fn compose_sheet<P: AnnotationProvider>(
    text: &str,
    options: &SheetOptions,
    annotations: &mut AnnotationCache<P>,
) -> Result<Sheet> {
    compose_pages(text, options, annotations, usize::MAX)
}

/// Compose at most `max_pages` leading pages.
///
/// Pagination always covers the full text, so page boundaries match the
/// complete sheet; only the decorated output is limited.
pub(crate) fn compose_pages<P: AnnotationProvider>(
    text: &str,
    options: &SheetOptions,
    annotations: &mut AnnotationCache<P>,
    max_pages: usize,
) -> Result<Sheet> {
    options.validate()?;

    let (capacity, pages) = paginate_sheet(text, options)?;
    let layout = &options.layout;
    let margins = &options.print.margins;

    let pages = pages
        .iter()
        .take(max_pages)
        .enumerate()
        .map(|(i, page)| {
            Ok(SheetPage {
                number: i + 1,
                placements: place_page(page, &capacity, layout.grid_size, margins),
                decorated: decorate_page(page, layout, annotations)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Sheet {
        capacity,
        page_px: options.print.page_px(),
        pages,
    })
}
