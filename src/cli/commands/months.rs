use crate::config::Config;
use crate::errors::AppResult;
use crate::models::month::YearMonth;
use crate::ui::messages::{header, info};

pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = cfg.open_store()?;
    let months = store.months_with_data();

    if months.is_empty() {
        info("No records stored yet.");
        return Ok(());
    }

    header("Months with data");
    for m in months {
        match m.parse::<YearMonth>() {
            Ok(ym) => println!(
                "{}  {:<15} {} day(s)",
                m,
                format!("{} {}", ym.month_name(), ym.year),
                store.records_in(ym).len()
            ),
            Err(_) => println!("{}", m),
        }
    }

    Ok(())
}
