use std::{env, fs, io::ErrorKind, path::Path};

use anyhow::{bail, Result};
use geobook_core::resolver::RetryPolicy;

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "geobook.toml";

const ENV_NAME_DB_URL: &str = "DATABASE_URL";

pub struct Config {
    pub db: Db,
    pub geocoding: Geocoding,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{DEFAULT_CONFIG_FILE_NAME} not found => load default configuration."
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(db_url) = env::var(ENV_NAME_DB_URL) {
            cfg.db.conn_sqlite = db_url;
        }
        Ok(cfg)
    }
}

pub struct Db {
    /// SQLite connection
    pub conn_sqlite: String,
    pub conn_pool_size: u8,
}

pub struct Geocoding {
    /// Custom Nominatim endpoint.
    pub endpoint: Option<String>,
    pub retry: RetryPolicy,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;

    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config { db, geocoding } = from;

        let raw::Db {
            connection_sqlite: conn_sqlite,
            connection_pool_size: conn_pool_size,
        } = db.unwrap_or_default();
        if conn_pool_size == 0 {
            bail!("The database connection pool must hold at least one connection");
        }
        let db = Db {
            conn_sqlite,
            conn_pool_size,
        };

        let raw::Geocoding { endpoint, retry } = geocoding.unwrap_or_default();
        let raw::Retry {
            max_attempts,
            base_delay,
            max_delay,
        } = retry.unwrap_or_default();
        if max_attempts == 0 {
            bail!("The number of geocoding attempts must be at least 1");
        }
        if base_delay > max_delay {
            bail!("The base retry delay must not exceed the maximum retry delay");
        }
        let retry = RetryPolicy {
            max_attempts,
            base_delay,
            max_delay,
        };
        let geocoding = Geocoding { endpoint, retry };

        Ok(Self { db, geocoding })
    }
}
