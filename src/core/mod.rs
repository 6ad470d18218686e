pub mod add;
pub mod aggregate;
pub mod del;
pub mod summary;

pub use aggregate::{
    average_calls, average_login_time, calculate_salary, calculate_salary_with,
    format_seconds_to_time, parse_time_to_seconds, total_calls, total_login_time,
};
pub use summary::MonthlySummary;
