// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::MonthlyReport;
use crate::export::pdf_export::export_pdf;
use crate::export::xlsx::export_xlsx;
use crate::models::month::YearMonth;
use crate::models::salary::SalaryRules;
use crate::store::{KvBackend, RecordStore};
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the report of one month.
    ///
    /// - `file`: absolute output path
    /// - `month`: `YYYY-MM`; `None` picks the most recent month with data
    ///
    /// Returns `false` when there was nothing to export.
    pub fn export<B: KvBackend>(
        store: &RecordStore<B>,
        rules: &SalaryRules,
        currency: &str,
        format: ExportFormat,
        file: &str,
        month: Option<&str>,
        force: bool,
    ) -> AppResult<bool> {
        let path = expand_tilde(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        let month = match month {
            Some(m) => m.parse::<YearMonth>()?,
            None => match store.latest_month() {
                Some(m) => m,
                None => {
                    warning("No records stored yet. Nothing to export.");
                    return Ok(false);
                }
            },
        };

        let records = store.records_in(month);
        if records.is_empty() {
            warning(format!("No records found for {month}. Nothing to export."));
            return Ok(false);
        }

        ensure_writable(&path, force)?;

        let report = MonthlyReport::build(month, records, rules, currency);

        match format {
            ExportFormat::Csv => export_csv(&report, &path)?,
            ExportFormat::Json => export_json(&report, &path)?,
            ExportFormat::Xlsx => export_xlsx(&report, &path)?,
            ExportFormat::Pdf => export_pdf(&report, &path)?,
        }

        Ok(true)
    }
}
