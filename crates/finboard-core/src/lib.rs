//! Transaction filtering and pagination for the finboard dashboard
//!
//! The pipeline is two pure steps: [`apply_filters`] narrows the loaded
//! transactions to the filtered set, and [`paginate`] cuts one page out of
//! it. [`ViewState`] holds the per-view state around them and
//! [`TransactionStore`] holds the loaded data for the HTTP layer.

pub mod error;
pub mod export;
pub mod filter;
pub mod models;
pub mod pagination;
pub mod reports;
pub mod store;
pub mod types;
pub mod view;

pub use error::{CoreError, CoreResult, ErrorCode, ErrorDetails, ErrorSeverity};
pub use export::{export_to, ExportFormat, ExportOutput, Exporter, UnconfiguredExporter};
pub use filter::{apply_filters, DateRange, FilterSpec};
pub use models::Transaction;
pub use pagination::{page_controls, paginate, total_pages, Page, PageControl};
pub use reports::{category_breakdown, summarize, CategoryBreakdown, TransactionSummary};
pub use store::TransactionStore;
pub use types::{TransactionCategory, TransactionStatus, TransactionType};
pub use view::{TransactionsView, ViewState};

#[cfg(test)]
pub(crate) mod fixtures {
    use chrono::{NaiveDate, NaiveDateTime};

    use crate::models::Transaction;
    use crate::types::{TransactionCategory, TransactionStatus, TransactionType};

    /// Midnight of a `YYYY-MM-DD` date, or a full `YYYY-MM-DDTHH:MM:SS`
    pub fn at(date: &str) -> NaiveDateTime {
        if date.contains('T') {
            NaiveDateTime::parse_from_str(date, "%Y-%m-%dT%H:%M:%S").unwrap()
        } else {
            NaiveDate::parse_from_str(date, "%Y-%m-%d")
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap()
        }
    }

    pub fn tx(id: &str, title: &str, amount: &str, transaction_type: TransactionType, date: &str) -> Transaction {
        let category = match transaction_type {
            TransactionType::Incoming => TransactionCategory::Income,
            TransactionType::Outgoing => TransactionCategory::Shopping,
        };
        Transaction {
            id: id.to_string(),
            title: title.to_string(),
            description: None,
            amount: finboard_utils::parse_amount(amount),
            transaction_type,
            category,
            date: Some(at(date)),
            status: TransactionStatus::Completed,
            account: None,
            reference: None,
        }
    }

    fn row(
        id: &str,
        title: &str,
        amount: &str,
        transaction_type: TransactionType,
        category: TransactionCategory,
        status: TransactionStatus,
        date: &str,
    ) -> Transaction {
        let mut t = tx(id, title, amount, transaction_type, date);
        t.category = category;
        t.status = status;
        t
    }

    /// Twelve transactions across every type, status and category
    pub fn sample() -> Vec<Transaction> {
        use TransactionCategory::*;
        use TransactionStatus::*;
        use TransactionType::*;

        let mut rows = vec![
            row("tx-001", "Salary", "$4,500.00", Incoming, Income, Completed, "2024-03-01"),
            row("tx-002", "Whole Foods", "$156.32", Outgoing, Food, Completed, "2024-03-02"),
            row("tx-003", "Uber", "$24.50", Outgoing, Transport, Completed, "2024-03-03"),
            row("tx-004", "Netflix", "$15.99", Outgoing, Entertainment, Pending, "2024-03-04"),
            row("tx-005", "Electricity", "$120.00", Outgoing, Utilities, Completed, "2024-03-05"),
            row("tx-006", "Amazon", "$1,299.00", Outgoing, Shopping, Failed, "2024-03-06"),
            row("tx-007", "Freelance Project", "$850.00", Incoming, Income, Pending, "2024-03-07"),
            row("tx-008", "Starbucks", "$6.75", Outgoing, Food, Completed, "2024-03-08"),
            row("tx-009", "Metro Card", "$33.00", Outgoing, Transport, Completed, "2024-03-09"),
            row("tx-010", "Concert Tickets", "$180.00", Outgoing, Entertainment, Completed, "2024-03-10"),
            row("tx-011", "Dividend", "$120.40", Incoming, Income, Completed, "2024-03-11"),
            row("tx-012", "Water Bill", "$45.10", Outgoing, Utilities, Failed, "2024-03-12"),
        ];
        rows[5].description = Some("Wireless Headphones".to_string());
        rows[0].description = Some("Monthly salary".to_string());
        rows
    }
}
