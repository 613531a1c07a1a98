//! Vertical layout pagination
//!
//! Columns are the paginated axis: one column holds one character's whole
//! repeat run, and a page holds `columns_per_page` columns.

use crate::types::Page;

use super::practice_run;

pub(super) fn paginate_vertical<S: AsRef<str>>(
    characters: &[S],
    repeat_count: usize,
    columns_per_page: usize,
) -> Vec<Page> {
    let columns_per_page = columns_per_page.max(1);

    characters
        .chunks(columns_per_page)
        .enumerate()
        .map(|(chunk_index, chunk)| {
            let first_group = chunk_index * columns_per_page;
            chunk
                .iter()
                .enumerate()
                .flat_map(|(offset, character)| {
                    practice_run(character.as_ref(), first_group + offset, repeat_count)
                })
                .collect()
        })
        .collect()
}
