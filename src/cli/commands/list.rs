use crate::cli::commands::resolve_month;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::aggregate::format_seconds_to_time;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::colors::{RESET, color_for_calls};
use crate::utils::date::format_short;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { month } = cmd {
        let store = cfg.open_store()?;

        let Some(month) = resolve_month(&store, month)? else {
            info("No records stored yet.");
            return Ok(());
        };

        let records = store.records_in(month);
        if records.is_empty() {
            info(format!("No entries for {}", month));
            return Ok(());
        }

        header(format!("{} {} ({})", month.month_name(), month.year, month));

        let mut table = Table::new(vec![
            Column::new("Date"),
            Column::new("Day"),
            Column::new("Login Hours"),
            Column::new("Calls"),
        ]);

        for r in &records {
            table.add_row(vec![
                r.date_str(),
                format_short(&r.date),
                format_seconds_to_time(r.login_time_seconds),
                r.call_count.to_string(),
            ]);
        }

        // colour zero-call days after widths are settled
        let rendered = table.render();
        let mut lines = rendered.lines();
        for line in lines.by_ref().take(2) {
            println!("{}", line);
        }
        for (line, r) in lines.zip(records.iter()) {
            println!("{}{}{}", color_for_calls(r.call_count), line, RESET);
        }

        println!("\n{} entr{}", records.len(), if records.len() == 1 { "y" } else { "ies" });
    }

    Ok(())
}
