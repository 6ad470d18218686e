use serde::Serialize;

/// Pay rules applied by `calculate_salary_with`.
#[derive(Debug, Clone, PartialEq)]
pub struct SalaryRules {
    pub rate_per_call: f64,
    pub bonus_amount: f64,
    pub bonus_min_calls: u64,
    pub bonus_min_hours: f64,
}

impl Default for SalaryRules {
    fn default() -> Self {
        Self {
            rate_per_call: 4.30,
            bonus_amount: 2000.0,
            bonus_min_calls: 750,
            bonus_min_hours: 100.0,
        }
    }
}

/// Result of a salary computation. Values are not rounded; display owns that.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SalaryBreakdown {
    pub base_salary: f64,
    pub bonus: f64,
    pub total_salary: f64,
}
