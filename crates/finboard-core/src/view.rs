//! Per-view session state: the applied filters and the current page.

use finboard_config::PaginationConfig;
use serde::Serialize;

use crate::error::{CoreError, CoreResult};
use crate::filter::{apply_filters, FilterSpec};
use crate::models::Transaction;
use crate::pagination::{page_controls, paginate, total_pages, PageControl};

/// What the transactions table shows for one render
#[derive(Debug, Clone, Serialize)]
pub struct TransactionsView {
    pub transactions: Vec<Transaction>,
    /// Size of the filtered set
    pub total_count: usize,
    pub total_pages: usize,
    pub current_page: usize,
    pub items_per_page: usize,
    pub has_active_filters: bool,
    pub controls: Vec<PageControl>,
}

/// Filter and pagination state of a transactions view
#[derive(Debug, Clone)]
pub struct ViewState {
    filters: FilterSpec,
    current_page: usize,
    items_per_page: usize,
    page_sizes: Vec<usize>,
    clamp_out_of_range: bool,
}

impl ViewState {
    pub fn new(config: &PaginationConfig) -> Self {
        Self {
            filters: FilterSpec::default(),
            current_page: 1,
            items_per_page: config.default_page_size,
            page_sizes: config.page_sizes.clone(),
            clamp_out_of_range: config.clamp_out_of_range,
        }
    }

    pub fn filters(&self) -> &FilterSpec {
        &self.filters
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    /// Replace the applied filters and go back to the first page
    pub fn apply_filters(&mut self, filters: FilterSpec) {
        self.filters = filters;
        self.current_page = 1;
    }

    pub fn reset_filters(&mut self) {
        self.apply_filters(FilterSpec::default());
    }

    /// Move to page `page`; 0 is treated as 1
    pub fn set_page(&mut self, page: usize) {
        self.current_page = page.max(1);
    }

    /// Switch page size and go back to the first page
    pub fn set_items_per_page(&mut self, size: usize) -> CoreResult<()> {
        if !self.page_sizes.contains(&size) {
            return Err(CoreError::ValidationError {
                message: format!("Page size {} is not one of {:?}", size, self.page_sizes),
            });
        }
        self.items_per_page = size;
        self.current_page = 1;
        Ok(())
    }

    /// Filter `transactions` and cut out the current page
    pub fn render(&self, transactions: &[Transaction]) -> TransactionsView {
        let filtered = apply_filters(transactions, &self.filters);
        let pages = total_pages(filtered.len(), self.items_per_page);

        let current_page = if self.clamp_out_of_range {
            self.current_page.min(pages)
        } else {
            self.current_page
        };

        let page = paginate(&filtered, current_page, self.items_per_page);

        TransactionsView {
            transactions: page.items,
            total_count: filtered.len(),
            total_pages: page.total_pages,
            current_page,
            items_per_page: self.items_per_page,
            has_active_filters: self.filters.has_active_filters(),
            controls: page_controls(current_page, page.total_pages),
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(&PaginationConfig::default())
    }
}
