//! Formatting utilities used for CLI and export outputs.

/// Currency amount with two decimals, e.g. `INR 3440.00`.
pub fn money(currency: &str, amount: f64) -> String {
    format!("{} {:.2}", currency, amount)
}

/// Currency amount rounded to whole units, as shown on the dashboard.
pub fn money_whole(currency: &str, amount: f64) -> String {
    format!("{} {:.0}", currency, amount)
}
