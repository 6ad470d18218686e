use crate::core::aggregate::{
    average_calls, average_login_time, calculate_salary_with, format_seconds_to_time,
    total_calls, total_login_time,
};
use crate::models::month::YearMonth;
use crate::models::record::DailyRecord;
use crate::models::salary::{SalaryBreakdown, SalaryRules};
use serde::Serialize;

/// Every statistic the monthly views and reports show, computed once.
#[derive(Debug, Clone, Serialize)]
pub struct MonthlySummary {
    pub month: String,
    pub days: usize,
    pub total_login_seconds: u64,
    pub total_login: String,
    pub total_calls: u64,
    pub average_login_seconds: u64,
    pub average_login: String,
    pub average_calls: f64,
    pub salary: SalaryBreakdown,
}

impl MonthlySummary {
    pub fn build(month: YearMonth, records: &[DailyRecord], rules: &SalaryRules) -> Self {
        let total_login_seconds = total_login_time(records);
        let average_login_seconds = average_login_time(records);

        Self {
            month: month.to_string(),
            days: records.len(),
            total_login_seconds,
            total_login: format_seconds_to_time(total_login_seconds),
            total_calls: total_calls(records),
            average_login_seconds,
            average_login: format_seconds_to_time(average_login_seconds),
            average_calls: average_calls(records),
            salary: calculate_salary_with(records, rules),
        }
    }

    /// Whether the bonus thresholds were reached.
    pub fn bonus_reached(&self) -> bool {
        self.salary.bonus > 0.0
    }
}
