pub use errors::{ServiceError, ServiceResult};

pub mod categories;
pub mod errors;
pub mod feed;
pub mod main;
pub mod search;
pub mod videos;

/// Number of cards per row on the home and category pages.
pub const CARDS_PER_ROW: usize = 3;

/// Split `items` into consecutive rows of at most `width` elements.
pub(crate) fn chunk_rows<T>(items: Vec<T>, width: usize) -> Vec<Vec<T>> {
    let width = width.max(1);
    let mut rows: Vec<Vec<T>> = Vec::with_capacity(items.len().div_ceil(width));
    for item in items {
        match rows.last_mut() {
            Some(row) if row.len() < width => row.push(item),
            _ => rows.push(vec![item]),
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunks_into_rows_with_a_short_tail() {
        let rows = chunk_rows(vec![1, 2, 3, 4, 5], 3);
        assert_eq!(rows, vec![vec![1, 2, 3], vec![4, 5]]);
    }

    #[test]
    fn empty_input_yields_no_rows() {
        let rows: Vec<Vec<i32>> = chunk_rows(Vec::new(), 3);
        assert!(rows.is_empty());
    }
}
