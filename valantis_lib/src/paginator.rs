//! Pagination over the current result set.

use serde::Serialize;
use valantis_api::types::Product;

/// Fixed number of products per page.
pub const PAGE_SIZE: usize = 50;

/// A window into the result set for one page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageView {
    /// The products visible on this page.
    pub items: Vec<Product>,
    /// The page actually shown, after clamping (1-based).
    pub page: usize,
    pub page_size: usize,
    /// `max(1, ceil(total_items / page_size))`; an empty result set still
    /// has one (empty) page.
    pub total_pages: usize,
    pub total_items: usize,
    /// Index of the first visible product within the result set.
    pub start: usize,
    /// One past the index of the last visible product.
    pub end: usize,
}

/// Slices the result set for the requested page.
///
/// The requested page is clamped to `[1, total_pages]`, so any input yields
/// a valid slice. Deterministic and never errors.
pub fn page_view(items: &[Product], requested_page: usize) -> PageView {
    let total_items = items.len();
    let total_pages = total_items.div_ceil(PAGE_SIZE).max(1);
    let page = requested_page.clamp(1, total_pages);
    let start = (page - 1) * PAGE_SIZE;
    let end = (start + PAGE_SIZE).min(total_items);
    PageView {
        items: items[start..end].to_vec(),
        page,
        page_size: PAGE_SIZE,
        total_pages,
        total_items,
        start,
        end,
    }
}
