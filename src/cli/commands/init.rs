use crate::cli::parser::Cli;
use crate::config::{Config, StorageBackend};
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the storage location (SQLite schema via migrations, or the data directory)
pub fn handle(cli: &Cli) -> AppResult<()> {
    let backend = cli.backend.unwrap_or(StorageBackend::Sqlite);
    let cfg = Config::init_all(cli.db.clone(), backend, cli.test)?;

    info("Initializing rcalllog…");
    info(format!("Backend  : {}", cfg.backend.as_str()));
    info(format!("Storage  : {}", cfg.database));

    if let Some(parent) = std::path::Path::new(&cfg.database).parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    // opening creates the schema / directory
    let store = cfg.open_store()?;

    success(format!(
        "Storage initialized at {} ({} record(s))",
        cfg.database,
        store.len()
    ));
    Ok(())
}
