use crate::db::SqliteBackend;
use crate::errors::{AppError, AppResult};
use crate::models::salary::SalaryRules;
use crate::store::{DEFAULT_STORAGE_KEY, FileBackend, KvBackend, RecordStore};
use crate::ui::messages::success;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Where the record blob is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// `kv_store` table in a SQLite file
    #[default]
    Sqlite,
    /// `<key>.json` file inside a directory
    File,
}

impl StorageBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageBackend::Sqlite => "sqlite",
            StorageBackend::File => "file",
        }
    }
}

/// Store handle with the backend chosen at runtime.
pub type ConfiguredStore = RecordStore<Box<dyn KvBackend>>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default)]
    pub backend: StorageBackend,
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_rate_per_call")]
    pub rate_per_call: f64,
    #[serde(default = "default_bonus_amount")]
    pub bonus_amount: f64,
    #[serde(default = "default_bonus_min_calls")]
    pub bonus_min_calls: u64,
    #[serde(default = "default_bonus_min_hours")]
    pub bonus_min_hours: f64,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}
fn default_currency() -> String {
    "INR".to_string()
}
fn default_rate_per_call() -> f64 {
    SalaryRules::default().rate_per_call
}
fn default_bonus_amount() -> f64 {
    SalaryRules::default().bonus_amount
}
fn default_bonus_min_calls() -> u64 {
    SalaryRules::default().bonus_min_calls
}
fn default_bonus_min_hours() -> f64 {
    SalaryRules::default().bonus_min_hours
}

impl Default for Config {
    fn default() -> Self {
        Self::with_database(Self::database_file())
    }
}

impl Config {
    fn with_database(db_path: PathBuf) -> Self {
        Self {
            database: db_path.to_string_lossy().to_string(),
            backend: StorageBackend::default(),
            storage_key: default_storage_key(),
            currency: default_currency(),
            rate_per_call: default_rate_per_call(),
            bonus_amount: default_bonus_amount(),
            bonus_min_calls: default_bonus_min_calls(),
            bonus_min_hours: default_bonus_min_hours(),
        }
    }

    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rcalllog")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".rcalllog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rcalllog.conf")
    }

    /// Return the default path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rcalllog.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content =
            fs::read_to_string(path).map_err(|e| AppError::ConfigLoad(e.to_string()))?;
        serde_yaml::from_str(&content).map_err(|e| AppError::ConfigLoad(e.to_string()))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn salary_rules(&self) -> SalaryRules {
        SalaryRules {
            rate_per_call: self.rate_per_call,
            bonus_amount: self.bonus_amount,
            bonus_min_calls: self.bonus_min_calls,
            bonus_min_hours: self.bonus_min_hours,
        }
    }

    /// Open the record store on the configured backend.
    pub fn open_store(&self) -> AppResult<ConfiguredStore> {
        let backend: Box<dyn KvBackend> = match self.backend {
            StorageBackend::Sqlite => Box::new(SqliteBackend::open(&self.database)?),
            StorageBackend::File => Box::new(FileBackend::open(&self.database)?),
        };
        RecordStore::open(backend, &self.storage_key)
    }

    /// Initialize configuration file and storage location.
    ///
    /// `custom_db` relative paths are resolved inside the config directory.
    pub fn init_all(
        custom_db: Option<String>,
        backend: StorageBackend,
        is_test: bool,
    ) -> AppResult<Self> {
        let dir = Self::config_dir();

        let db_path = match custom_db {
            Some(name) => {
                let p = Path::new(&name);
                if p.is_absolute() {
                    p.to_path_buf()
                } else {
                    dir.join(p)
                }
            }
            None => match backend {
                StorageBackend::Sqlite => dir.join("rcalllog.sqlite"),
                StorageBackend::File => dir.join("data"),
            },
        };

        let mut config = Self::with_database(db_path);
        config.backend = backend;

        // Write config file
        if !is_test {
            fs::create_dir_all(&dir)?;
            let yaml = config.to_yaml()?;
            let mut file = fs::File::create(Self::config_file()).map_err(|_| AppError::ConfigSave)?;
            file.write_all(yaml.as_bytes())
                .map_err(|_| AppError::ConfigSave)?;
            success(format!("Config file: {}", Self::config_file().display()));
        }

        Ok(config)
    }
}
