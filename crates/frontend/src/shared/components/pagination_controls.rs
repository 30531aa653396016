use leptos::prelude::*;

/// Ширина окна номеров страниц
pub const PAGE_WINDOW: usize = 5;

/// Элемент панели пагинации
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    Previous { target: usize, disabled: bool },
    Number { page: usize, active: bool },
    Ellipsis,
    Next { target: usize, disabled: bool },
}

/// First and last page of the window centred on `current`.
pub fn page_window(current: usize, total_pages: usize) -> (usize, usize) {
    let total_pages = total_pages.max(1);
    let current = current.clamp(1, total_pages);
    let start = current.saturating_sub(2).max(1);
    let end = (start + PAGE_WINDOW - 1).min(total_pages);
    let start = end.saturating_sub(PAGE_WINDOW - 1).max(1);
    (start, end)
}

/// Полный набор элементов панели. Одна страница: панель не выводится.
pub fn page_links(current: usize, total_pages: usize) -> Vec<PageLink> {
    if total_pages <= 1 {
        return Vec::new();
    }
    let current = current.clamp(1, total_pages);
    let (start, end) = page_window(current, total_pages);

    let mut links = vec![PageLink::Previous {
        target: current.saturating_sub(1).max(1),
        disabled: current == 1,
    }];

    if start > 1 {
        links.push(PageLink::Number { page: 1, active: false });
        if start > 2 {
            links.push(PageLink::Ellipsis);
        }
    }

    links.extend((start..=end).map(|page| PageLink::Number {
        page,
        active: page == current,
    }));

    if end < total_pages {
        if end + 1 < total_pages {
            links.push(PageLink::Ellipsis);
        }
        links.push(PageLink::Number {
            page: total_pages,
            active: false,
        });
    }

    links.push(PageLink::Next {
        target: (current + 1).min(total_pages),
        disabled: current == total_pages,
    });
    links
}

/// PaginationControls component - Previous / page numbers / Next
///
/// Renders nothing when `links` is empty (single page).
#[component]
pub fn PaginationControls(
    /// Elements of the strip, see [`page_links`]
    #[prop(into)]
    links: Signal<Vec<PageLink>>,

    /// Callback when page changes (1-based)
    on_page_change: Callback<usize>,
) -> impl IntoView {
    view! {
        <nav class="rf-pagination" aria-label="Pagination">
            {move || {
                links
                    .get()
                    .into_iter()
                    .map(|link| match link {
                        PageLink::Previous { target, disabled } => view! {
                            <button
                                class="rf-pagebtn"
                                disabled=disabled
                                on:click=move |_| on_page_change.run(target)
                            >
                                "← Previous"
                            </button>
                        }
                        .into_any(),
                        PageLink::Number { page, active } => view! {
                            <button
                                class=if active { "rf-pagebtn active" } else { "rf-pagebtn" }
                                aria-current=if active { Some("page") } else { None }
                                on:click=move |_| on_page_change.run(page)
                            >
                                {page}
                            </button>
                        }
                        .into_any(),
                        PageLink::Ellipsis => view! { <span class="rf-ellipsis">"…"</span> }.into_any(),
                        PageLink::Next { target, disabled } => view! {
                            <button
                                class="rf-pagebtn"
                                disabled=disabled
                                on:click=move |_| on_page_change.run(target)
                            >
                                "Next →"
                            </button>
                        }
                        .into_any(),
                    })
                    .collect_view()
            }}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(links: &[PageLink]) -> Vec<String> {
        links
            .iter()
            .map(|l| match l {
                PageLink::Previous { disabled, .. } => {
                    if *disabled { "<x".into() } else { "<".into() }
                }
                PageLink::Number { page, active } => {
                    if *active { format!("[{}]", page) } else { page.to_string() }
                }
                PageLink::Ellipsis => "…".into(),
                PageLink::Next { disabled, .. } => {
                    if *disabled { ">x".into() } else { ">".into() }
                }
            })
            .collect()
    }

    #[test]
    fn test_window_clamps_at_both_ends() {
        assert_eq!(page_window(1, 10), (1, 5));
        assert_eq!(page_window(2, 10), (1, 5));
        assert_eq!(page_window(6, 10), (4, 8));
        assert_eq!(page_window(10, 10), (6, 10));
        assert_eq!(page_window(2, 3), (1, 3));
    }

    #[test]
    fn test_page_links() {
        assert!(page_links(1, 1).is_empty());
        assert_eq!(numbers(&page_links(1, 3)), vec!["<x", "[1]", "2", "3", ">"]);
        assert_eq!(
            numbers(&page_links(1, 10)),
            vec!["<x", "[1]", "2", "3", "4", "5", "…", "10", ">"]
        );
        assert_eq!(
            numbers(&page_links(6, 10)),
            vec!["<", "1", "…", "4", "5", "[6]", "7", "8", "…", "10", ">"]
        );
        assert_eq!(
            numbers(&page_links(10, 10)),
            vec!["<", "1", "…", "6", "7", "8", "9", "[10]", ">x"]
        );
        // соседняя с окном страница, без многоточия
        assert_eq!(
            numbers(&page_links(4, 6)),
            vec!["<", "1", "2", "3", "[4]", "5", "6", ">"]
        );
        assert_eq!(
            numbers(&page_links(5, 7)),
            vec!["<", "1", "…", "3", "4", "[5]", "6", "7", ">"]
        );
    }
}
