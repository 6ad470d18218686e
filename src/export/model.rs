// src/export/model.rs

use crate::core::aggregate::format_seconds_to_time;
use crate::core::summary::MonthlySummary;
use crate::models::month::YearMonth;
use crate::models::record::DailyRecord;
use crate::models::salary::SalaryRules;
use crate::utils::date::format_dmy;
use serde::Serialize;

/// Flat row for one day in the exported report.
#[derive(Serialize, Clone, Debug)]
pub struct EntryExport {
    pub date: String,
    pub login_time: String,
    pub login_time_seconds: u64,
    pub call_count: u32,
}

impl From<&DailyRecord> for EntryExport {
    fn from(r: &DailyRecord) -> Self {
        Self {
            date: r.date_str(),
            login_time: format_seconds_to_time(r.login_time_seconds),
            login_time_seconds: r.login_time_seconds,
            call_count: r.call_count,
        }
    }
}

/// Everything a monthly report shows.
#[derive(Serialize, Clone, Debug)]
pub struct MonthlyReport {
    pub month: String,
    pub month_label: String,
    pub currency: String,
    pub summary: MonthlySummary,
    pub entries: Vec<EntryExport>,
    #[serde(skip)]
    records: Vec<DailyRecord>,
}

impl MonthlyReport {
    pub fn build(
        month: YearMonth,
        records: Vec<DailyRecord>,
        rules: &SalaryRules,
        currency: &str,
    ) -> Self {
        Self {
            month: month.to_string(),
            month_label: format!("{} {}", month.month_name(), month.year),
            currency: currency.to_string(),
            summary: MonthlySummary::build(month, &records, rules),
            entries: records.iter().map(EntryExport::from).collect(),
            records,
        }
    }

    /// Rows of the "Daily Entries" table in the printable report.
    pub(crate) fn printable_rows(&self) -> Vec<Vec<String>> {
        self.records
            .iter()
            .map(|r| {
                vec![
                    format_dmy(&r.date),
                    format_seconds_to_time(r.login_time_seconds),
                    r.call_count.to_string(),
                ]
            })
            .collect()
    }
}

/// Header for CSV / XLSX
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec!["date", "login_time", "login_time_seconds", "call_count"]
}

/// Header for the printable (PDF) table
pub(crate) fn printable_headers() -> Vec<&'static str> {
    vec!["Date", "Login Hours", "Call Count"]
}

pub(crate) fn entry_to_row(e: &EntryExport) -> Vec<String> {
    vec![
        e.date.clone(),
        e.login_time.clone(),
        e.login_time_seconds.to_string(),
        e.call_count.to_string(),
    ]
}
