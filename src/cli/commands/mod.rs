pub mod add;
pub mod config;
pub mod db;
pub mod del;
pub mod export;
pub mod init;
pub mod list;
pub mod months;
pub mod show;
pub mod summary;

use crate::errors::AppResult;
use crate::models::month::YearMonth;
use crate::store::{KvBackend, RecordStore};

/// Month named with `--month`, or the most recent month holding data.
pub(crate) fn resolve_month<B: KvBackend>(
    store: &RecordStore<B>,
    month: &Option<String>,
) -> AppResult<Option<YearMonth>> {
    match month {
        Some(m) => Ok(Some(m.parse()?)),
        None => Ok(store.latest_month()),
    }
}
