use crate::models::Pagination;

/// One page of an ordered result set.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

/// Slices `items` to the 1-based `page` of `page_size` entries.
///
/// Pages past the end come back empty rather than failing. `page` and
/// `page_size` must both be at least 1; request validation guarantees it.
pub fn paginate<T>(items: Vec<T>, page: u64, page_size: u64) -> Page<T> {
    debug_assert!(page >= 1 && page_size >= 1);

    let total = items.len() as u64;
    let total_pages = total.div_ceil(page_size);
    let start = page.saturating_sub(1).saturating_mul(page_size);

    let items: Vec<T> = if start >= total {
        Vec::new()
    } else {
        let start = start as usize;
        let take = usize::try_from(page_size).unwrap_or(usize::MAX);
        items.into_iter().skip(start).take(take).collect()
    };

    Page {
        items,
        pagination: Pagination {
            current_page: page,
            page_size,
            total_results: total,
            total_pages,
            has_next_page: page < total_pages,
            has_previous_page: page > 1,
        },
    }
}
