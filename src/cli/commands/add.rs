use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::errors::AppResult;
use crate::utils::date;
use crate::utils::time::{parse_call_count, parse_optional_login_time};

/// Add or update the record of one day.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { date, login, calls } = cmd {
        //
        // 1. Parse date (default = today)
        //
        let d = match date {
            Some(s) => date::parse_date_arg(s)?,
            None => date::today(),
        };

        //
        // 2. Parse login time and calls (both optional, at least one needed)
        //
        let login_seconds = parse_optional_login_time(login.as_ref())?;
        let call_count = calls.as_deref().map(parse_call_count).transpose()?;

        //
        // 3. Open store and apply
        //
        let mut store = cfg.open_store()?;
        AddLogic::apply(&mut store, d, login_seconds, call_count)?;
    }

    Ok(())
}
