use crate::cli::commands::resolve_month;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::summary::MonthlySummary;
use crate::errors::AppResult;
use crate::ui::messages::{header, info, stat, stat_highlight};
use crate::utils::colors::{RESET, color_for_bonus};
use crate::utils::formatting::money_whole;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { month } = cmd {
        let store = cfg.open_store()?;

        let Some(month) = resolve_month(&store, month)? else {
            info("No records stored yet.");
            return Ok(());
        };

        let records = store.records_in(month);
        let rules = cfg.salary_rules();
        let s = MonthlySummary::build(month, &records, &rules);

        header(format!("{} {} ({})", month.month_name(), month.year, month));

        stat("Days recorded", s.days);
        stat("Total Login Hours", &s.total_login);
        stat("Total Calls", s.total_calls);
        stat("Average Login Hours/Day", &s.average_login);
        stat("Average Calls/Day", format!("{:.1}", s.average_calls));

        println!();
        stat(
            &format!("Base Salary ({:.2}/call)", rules.rate_per_call),
            money_whole(&cfg.currency, s.salary.base_salary),
        );
        stat(
            &format!(
                "Bonus ({}+ calls & {}+ hours)",
                rules.bonus_min_calls, rules.bonus_min_hours
            ),
            format!(
                "{}{}{}",
                color_for_bonus(s.bonus_reached()),
                money_whole(&cfg.currency, s.salary.bonus),
                RESET
            ),
        );
        stat_highlight(
            "Total Estimated Salary",
            money_whole(&cfg.currency, s.salary.total_salary),
        );
    }

    Ok(())
}
