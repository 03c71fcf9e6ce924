//! Page-slicing over an already-fetched, ordered collection.
//!
//! The feed endpoint hands the full video list to [`paginate`] together with
//! the untrusted `page` query parameter. Out-of-range pages are clamped into
//! the valid range instead of producing an error.

use serde::Serialize;

/// Number of videos shown per feed page.
pub const FEED_PAGE_SIZE: usize = 2;

/// One page of an ordered collection, produced by [`paginate`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Paginated<T> {
    /// Records on this page. Never more than the page size.
    pub items: Vec<T>,
    /// The clamped page number this result represents, starting at 1.
    pub page: usize,
    /// Total number of pages; zero when the collection is empty.
    pub total_pages: usize,
    /// Whether a page after this one exists.
    pub has_next: bool,
    /// Always `page + 1`, even when that page does not exist. Callers must
    /// check `has_next` before following it.
    pub next_page: usize,
}

/// Slice `items` down to the requested page.
///
/// `requested_page` is untrusted input: values below 1 clamp to the first
/// page and values past the end clamp to the last page. An empty collection
/// yields an empty first page rather than an error. `per_page` must be
/// greater than zero.
pub fn paginate<T>(items: Vec<T>, requested_page: i64, per_page: usize) -> Paginated<T> {
    let total_pages = items.len().div_ceil(per_page);

    if total_pages == 0 {
        return Paginated {
            items: Vec::new(),
            page: 1,
            total_pages: 0,
            has_next: false,
            next_page: 2,
        };
    }

    let page = requested_page.clamp(1, total_pages as i64) as usize;
    let items = items
        .into_iter()
        .skip((page - 1) * per_page)
        .take(per_page)
        .collect();

    Paginated {
        items,
        page,
        total_pages,
        has_next: page < total_pages,
        next_page: page + 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slices_a_middle_page() {
        let page = paginate(vec![1, 2, 3, 4, 5], 2, 2);

        assert_eq!(page.items, vec![3, 4]);
        assert_eq!(page.page, 2);
        assert_eq!(page.total_pages, 3);
        assert!(page.has_next);
        assert_eq!(page.next_page, 3);
    }

    #[test]
    fn last_page_has_no_next_but_still_numbers_one_past_the_end() {
        let page = paginate(vec![1, 2, 3, 4, 5], 3, 2);

        assert_eq!(page.items, vec![5]);
        assert!(!page.has_next);
        // next_page deliberately points past the end; has_next gates its use.
        assert_eq!(page.next_page, 4);
    }

    #[test]
    fn clamps_non_positive_pages_to_the_first() {
        let page = paginate(vec![1, 2, 3], -5, 2);

        assert_eq!(page.page, 1);
        assert_eq!(page.items, vec![1, 2]);
    }

    #[test]
    fn clamps_oversized_pages_to_the_last() {
        let page = paginate(vec![1, 2, 3, 4, 5], 10_000, 2);

        assert_eq!(page.page, 3);
        assert_eq!(page.items, vec![5]);
    }

    #[test]
    fn empty_collection_yields_an_empty_first_page() {
        let page = paginate(Vec::<i32>::new(), 1, 2);

        assert!(page.items.is_empty());
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 0);
        assert!(!page.has_next);
    }

    #[test]
    fn serializes_for_template_contexts() {
        let value = serde_json::to_value(paginate(vec![1, 2, 3], 1, 2)).unwrap();

        assert_eq!(value["page"], 1);
        assert_eq!(value["has_next"], true);
        assert_eq!(value["next_page"], 2);
        assert_eq!(value["items"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn never_returns_more_items_than_the_page_size() {
        let records: Vec<i32> = (1..=7).collect();
        for requested in [-3_i64, 0, 1, 2, 3, 4, 99] {
            let page = paginate(records.clone(), requested, 3);
            assert!(page.items.len() <= 3);
        }
    }
}
