//! Paging over a filtered transaction list.

use serde::Serialize;

/// A single page of items
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-indexed page number that was requested
    pub page: usize,
    pub page_size: usize,
    /// Length of the list being paged, not of this page
    pub total_items: usize,
    /// Always at least 1, even for an empty list
    pub total_pages: usize,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Number of pages needed for `total_items`, with a floor of 1
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    total_items.div_ceil(page_size).max(1)
}

/// Slice out page `page` (1-indexed) of `items`.
///
/// A page past the end yields no items; the page number is not clamped.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    if page == 0 || page_size == 0 {
        log::debug!("Degenerate pagination request: page={} page_size={}", page, page_size);
        return Page {
            items: Vec::new(),
            page,
            page_size,
            total_items: items.len(),
            total_pages: 1,
        };
    }

    let start = (page - 1).saturating_mul(page_size);
    let page_items = items.iter().skip(start).take(page_size).cloned().collect();

    Page {
        items: page_items,
        page,
        page_size,
        total_items: items.len(),
        total_pages: total_pages(items.len(), page_size),
    }
}

/// One element of the pagination bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageControl {
    Previous {
        page: usize,
        disabled: bool,
    },
    Page {
        page: usize,
        current: bool,
        /// Hidden on narrow screens
        compact_hidden: bool,
    },
    Next {
        page: usize,
        disabled: bool,
    },
}

/// Build the pagination bar: Previous, every page button, Next.
///
/// On narrow layouts only the first two pages, the last two pages and the
/// neighbours of the current page stay visible once there are more than
/// five pages.
pub fn page_controls(current: usize, total_pages: usize) -> Vec<PageControl> {
    let total_pages = total_pages.max(1);
    let mut controls = Vec::with_capacity(total_pages + 2);

    controls.push(PageControl::Previous {
        page: current.saturating_sub(1).max(1),
        disabled: current <= 1,
    });

    for page in 1..=total_pages {
        let compact_hidden = total_pages > 5
            && page > 2
            && page < total_pages - 1
            && page.abs_diff(current) > 1;
        controls.push(PageControl::Page {
            page,
            current: page == current,
            compact_hidden,
        });
    }

    controls.push(PageControl::Next {
        page: (current + 1).min(total_pages),
        disabled: current >= total_pages,
    });

    controls
}
