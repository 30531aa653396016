//! Paginator. Pages are 1-based here (the list UI shows them as is).

pub use crate::shared::components::pagination_controls::{page_links, PageLink};

#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_count: usize,
    pub total_pages: usize,
    /// Requested page after clamping
    pub page: usize,
}

/// `max(1, ceil(total_count / per_page))`
pub fn total_pages(total_count: usize, per_page: usize) -> usize {
    let per_page = per_page.max(1);
    total_count.div_ceil(per_page).max(1)
}

/// Возвращает одну страницу; номер страницы ограничивается `[1, total_pages]`
pub fn paginate<T: Clone>(items: &[T], page: usize, per_page: usize) -> Page<T> {
    let per_page = per_page.max(1);
    let total_count = items.len();
    let total_pages = total_pages(total_count, per_page);
    let page = page.clamp(1, total_pages);

    let start = ((page - 1) * per_page).min(total_count);
    let end = (start + per_page).min(total_count);

    Page {
        items: items[start..end].to_vec(),
        total_count,
        total_pages,
        page,
    }
}
