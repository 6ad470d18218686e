// src/export/pdf_export.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::printable_headers;
use crate::export::pdf::{PdfManager, ReportLayout, ReportSection};
use crate::export::{MonthlyReport, notify_export_success};
use crate::ui::messages::info;
use crate::utils::date::today;
use crate::utils::formatting::money;
use std::path::Path;

pub(crate) const REPORT_TITLE: &str = "Agent Performance Report";

/// Export the printable monthly report.
pub(crate) fn export_pdf(report: &MonthlyReport, path: &Path) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let s = &report.summary;
    let sections = [
        ReportSection {
            heading: "Performance Summary".to_string(),
            lines: vec![
                format!("Total Login Hours: {}", s.total_login),
                format!("Total Calls: {}", s.total_calls),
                format!("Average Login Hours/Day: {}", s.average_login),
                format!("Average Calls/Day: {:.1}", s.average_calls),
            ],
        },
        ReportSection {
            heading: "Salary Calculation".to_string(),
            lines: vec![
                format!("Base Salary: {}", money(&report.currency, s.salary.base_salary)),
                format!("Bonus: {}", money(&report.currency, s.salary.bonus)),
                format!(
                    "Total Estimated Salary: {}",
                    money(&report.currency, s.salary.total_salary)
                ),
            ],
        },
    ];

    let headers = printable_headers();
    let rows = report.printable_rows();
    let generated_on = today().format("%d/%m/%Y").to_string();

    let layout = ReportLayout {
        title: REPORT_TITLE,
        subtitle: &report.month_label,
        sections: &sections,
        table_title: "Daily Entries",
        headers: &headers,
        rows: &rows,
        generated_on: &generated_on,
    };

    let mut pdf = PdfManager::new();
    pdf.write_report(&layout);

    pdf.save(path)
        .map_err(|e| AppError::Export(format!("PDF export error: {e}")))?;

    notify_export_success("PDF", path);
    Ok(())
}
