//! Pagination stage of the listing pipeline.

use serde::Serialize;

/// One page of an ordered collection, with the metadata the view needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Always >= 1, even for an empty collection, so rendering stays
    /// branch-free.
    pub total_pages: usize,
    /// The page actually returned, clamped into `[1, total_pages]`.
    pub page_number: usize,
    /// Length of the collection before slicing.
    pub total_items: usize,
}

/// Slice `items` into fixed-size pages and return the requested one.
///
/// Out-of-range inputs are normalized, never errors: a page size of 0 becomes
/// 1, and the page number is clamped into `[1, total_pages]`. Stale page
/// numbers (e.g., after a filter shrinks the result set) therefore fall back
/// to the last page instead of failing.
pub fn paginate<T: Clone>(items: &[T], page_size: usize, page_number: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total_pages = items.len().div_ceil(page_size).max(1);
    let page_number = page_number.clamp(1, total_pages);

    let start = (page_number - 1) * page_size;
    let page_items = items
        .iter()
        .skip(start)
        .take(page_size)
        .cloned()
        .collect();

    Page {
        items: page_items,
        total_pages,
        page_number,
        total_items: items.len(),
    }
}
