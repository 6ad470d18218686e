pub mod initialize;
pub mod kv;
pub mod migrate;
pub mod pool;
pub mod stats;

pub use kv::SqliteBackend;
