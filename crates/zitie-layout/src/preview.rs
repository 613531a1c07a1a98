use crate::annotation::{AnnotationCache, AnnotationProvider};
use crate::options::SheetOptions;
use crate::sheet::{Sheet, compose_pages};
use crate::types::*;

/// Generate a preview of the sheet
/// Returns the first `max_pages` composed pages
pub fn generate_preview<P: AnnotationProvider>(
    text: &str,
    options: &SheetOptions,
    annotations: &mut AnnotationCache<P>,
    max_pages: usize,
) -> Result<Sheet> {
    if max_pages == 0 {
        return Err(SheetError::NoPages);
    }

    compose_pages(text, options, annotations, max_pages)
}
