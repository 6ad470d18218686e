/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Green when the bonus thresholds are reached, grey otherwise.
pub fn color_for_bonus(reached: bool) -> &'static str {
    if reached { GREEN } else { GREY }
}

/// Calls color: zero calls are greyed out.
pub fn color_for_calls(calls: u32) -> &'static str {
    if calls == 0 { GREY } else { RESET }
}
