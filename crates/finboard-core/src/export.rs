//! Export of the filtered transaction set

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult, DefaultErrorLogger, ErrorContext, ErrorLogger};
use crate::models::Transaction;

/// Export target format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Excel,
    Pdf,
    Csv,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Excel, ExportFormat::Pdf, ExportFormat::Csv];
}

impl std::str::FromStr for ExportFormat {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "excel" | "xlsx" => Ok(ExportFormat::Excel),
            "pdf" => Ok(ExportFormat::Pdf),
            "csv" => Ok(ExportFormat::Csv),
            _ => Err(format!("Invalid export format: {}", s)),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Excel => write!(f, "excel"),
            ExportFormat::Pdf => write!(f, "pdf"),
            ExportFormat::Csv => write!(f, "csv"),
        }
    }
}

/// A produced export document
#[derive(Debug, Clone, PartialEq)]
pub struct ExportOutput {
    pub format: ExportFormat,
    pub content_type: String,
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Turns a set of transactions into a document
pub trait Exporter: Send + Sync {
    fn export(&self, format: ExportFormat, rows: &[Transaction]) -> CoreResult<ExportOutput>;
}

/// Exporter used when nothing is wired in; every format is unavailable
#[derive(Debug, Default, Clone, Copy)]
pub struct UnconfiguredExporter;

impl Exporter for UnconfiguredExporter {
    fn export(&self, format: ExportFormat, _rows: &[Transaction]) -> CoreResult<ExportOutput> {
        Err(CoreError::ExportUnavailable {
            format: format.to_string(),
        })
    }
}

/// Export `rows`, which should be the filtered set rather than a single page
pub fn export_to(
    exporter: &dyn Exporter,
    format: ExportFormat,
    rows: &[Transaction],
) -> CoreResult<ExportOutput> {
    log::info!("Exporting {} transactions as {}", rows.len(), format);

    exporter.export(format, rows).map_err(|e| {
        let context = ErrorContext::new("export".to_string())
            .with_data("format", serde_json::json!(format.to_string()))
            .with_data("rows", serde_json::json!(rows.len()));
        DefaultErrorLogger.log_error(&e, &context);
        e
    })
}
