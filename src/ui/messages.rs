//! Console output: every user-facing status line goes through here.

use ansi_term::{Colour, Style};
use std::fmt;

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{} {}", Colour::Blue.bold().paint(ICON_INFO), msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{} {}", Colour::Green.bold().paint(ICON_OK), msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{} {}", Colour::Yellow.bold().paint(ICON_WARN), msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{} {}", Colour::Red.bold().paint(ICON_ERR), msg);
}

/// Section header
pub fn header<T: fmt::Display>(msg: T) {
    println!(
        "{}\n",
        Colour::Blue
            .bold()
            .paint(format!("====================== {}", msg))
    );
}

/// Aligned `label: value` line used by summaries.
pub fn stat<T: fmt::Display>(label: &str, value: T) {
    println!(
        "  {} {}",
        Colour::Cyan.paint(format!("{:<26}", format!("{label}:"))),
        value
    );
}

/// Same as `stat`, value highlighted.
pub fn stat_highlight<T: fmt::Display>(label: &str, value: T) {
    println!(
        "  {} {}",
        Style::new().bold().paint(format!("{:<26}", format!("{label}:"))),
        Colour::Green.bold().paint(value.to_string())
    );
}
