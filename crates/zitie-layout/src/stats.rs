use crate::options::SheetOptions;
use crate::paginate::{paginate_sheet, split_characters};
use crate::types::*;

/// Calculate statistics for the practice sheet
pub fn calculate_statistics(text: &str, options: &SheetOptions) -> Result<SheetStatistics> {
    options.validate()?;

    let characters = split_characters(text).len();
    let (capacity, pages) = paginate_sheet(text, options)?;

    let cells = pages.iter().map(Vec::len).sum();
    let last_page_cells = pages.last().map_or(0, Vec::len);

    Ok(SheetStatistics {
        characters,
        cells,
        pages: pages.len(),
        cells_per_page: capacity.cells_per_page,
        // An overflowing run can exceed the page capacity
        unused_cells_last_page: capacity.cells_per_page.saturating_sub(last_page_cells),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statistics_for_default_sheet() {
        let mut options = SheetOptions::default();
        options.layout.repeat_count = 10;

        let stats = calculate_statistics("永和九年", &options).unwrap();

        assert_eq!(stats.characters, 4);
        assert_eq!(stats.cells, 40);
        assert_eq!(stats.pages, 1);
        assert_eq!(stats.cells_per_page, 154);
        assert_eq!(stats.unused_cells_last_page, 114);
    }

    #[test]
    fn test_empty_text_has_one_empty_page() {
        let stats = calculate_statistics("", &SheetOptions::default()).unwrap();

        assert_eq!(stats.characters, 0);
        assert_eq!(stats.pages, 1);
        assert_eq!(stats.unused_cells_last_page, stats.cells_per_page);
    }
}
