use crate::cli::parser::Commands;
use crate::config::{Config, StorageBackend};
use crate::db::SqliteBackend;
use crate::db::stats;
use crate::errors::{AppError, AppResult};
use crate::store::{FileBackend, RecordStore};
use crate::utils::colors::{CYAN, GREEN, RED, RESET};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db { info, check } = cmd {
        //
        // 1) CHECK (backend-level first, then the blob itself)
        //
        if *check {
            println!("{}▶ Running integrity check…{}", CYAN, RESET);

            let mut problems = Vec::new();

            let blob_ok = match cfg.backend {
                StorageBackend::Sqlite => {
                    let backend = SqliteBackend::open(&cfg.database)?;
                    let integrity = backend.integrity_check()?;

                    if integrity == "ok" {
                        println!("{}✔ SQLite integrity check passed.{}", GREEN, RESET);
                    } else {
                        println!("{}✘ SQLite integrity check failed:{} {}", RED, RESET, integrity);
                        problems.push(format!("SQLite integrity check: {integrity}"));
                    }

                    !RecordStore::open(backend, &cfg.storage_key)?.is_corrupt()
                }
                StorageBackend::File => {
                    let backend = FileBackend::open(&cfg.database)?;
                    !RecordStore::open(backend, &cfg.storage_key)?.is_corrupt()
                }
            };

            if blob_ok {
                println!("{}✔ Stored records are readable.{}\n", GREEN, RESET);
            } else {
                println!("{}✘ Stored records cannot be parsed.{}\n", RED, RESET);
                problems.push(format!("records under '{}' cannot be parsed", cfg.storage_key));
            }

            if !problems.is_empty() {
                return Err(AppError::Integrity(problems.join("; ")));
            }
        }

        //
        // 2) INFO
        //
        if *info {
            let store = cfg.open_store()?;
            stats::print_store_info(&store, &cfg.database);
        }
    }

    Ok(())
}
