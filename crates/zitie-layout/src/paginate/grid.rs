//! Grid layout pagination
//!
//! Each character's repeat run is placed atomically: when the rest of the
//! page cannot hold the whole run, the page is closed and the run starts on
//! a fresh page.

use crate::types::Page;

use super::practice_run;

pub(super) fn paginate_grid<S: AsRef<str>>(
    characters: &[S],
    repeat_count: usize,
    cells_per_page: usize,
) -> Vec<Page> {
    let cells_per_page = cells_per_page.max(1);
    let mut pages = Vec::new();
    let mut current: Page = Vec::new();

    for (group_index, character) in characters.iter().enumerate() {
        let remaining = cells_per_page.saturating_sub(current.len());

        if repeat_count > remaining && !current.is_empty() {
            pages.push(std::mem::take(&mut current));
        }

        // A run longer than a whole page still goes onto one page (visual overflow)
        current.extend(practice_run(character.as_ref(), group_index, repeat_count));
    }

    if !current.is_empty() {
        pages.push(current);
    }

    pages
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_moves_to_next_page_when_it_does_not_fit() {
        let pages = paginate_grid(&["永", "和", "九"], 3, 7);

        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].len(), 6);
        assert_eq!(pages[1].len(), 3);
        assert_eq!(pages[1][0].group_index, 2);
        assert!(pages[1][0].is_first_in_group);
    }

    #[test]
    fn test_exact_fill() {
        let pages = paginate_grid(&["永", "和"], 2, 4);
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].len(), 4);
    }

    #[test]
    fn test_run_longer_than_page_overflows_alone() {
        let pages = paginate_grid(&["永", "和"], 5, 3);

        assert_eq!(pages.len(), 2);
        assert!(pages.iter().all(|p| p.len() == 5));
    }
}
