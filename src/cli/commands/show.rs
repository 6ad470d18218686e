use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::aggregate::format_seconds_to_time;
use crate::errors::AppResult;
use crate::ui::messages::{header, info, stat};
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { date: date_str } = cmd {
        let d = date::parse_date_arg(date_str)?;
        let store = cfg.open_store()?;

        match store.record_by_date(d) {
            Some(r) => {
                header(format!("Record {}", r.date_str()));
                stat("Login time", format_seconds_to_time(r.login_time_seconds));
                stat("Calls", r.call_count);
            }
            None => info(format!("No record for {}", d)),
        }
    }

    Ok(())
}
