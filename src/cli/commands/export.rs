use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        month,
        force,
    } = cmd
    {
        let store = cfg.open_store()?;
        ExportLogic::export(
            &store,
            &cfg.salary_rules(),
            &cfg.currency,
            *format,
            file,
            month.as_deref(),
            *force,
        )?;
    }
    Ok(())
}
