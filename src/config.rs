use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

use crate::schedule::DayBoundary;

/// Application-level constants
pub const APP_NAME: &str = "ClinicDesk";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// The SPA has always talked to `localhost:5000`.
pub const DEFAULT_ADDR: &str = "127.0.0.1:5000";
pub const DATABASE_FILE: &str = "clinic.db";

pub const ENV_ADDR: &str = "CLINICDESK_ADDR";
pub const ENV_DATA_DIR: &str = "CLINICDESK_DATA_DIR";
pub const ENV_DAY_BOUNDARY: &str = "CLINICDESK_DAY_BOUNDARY";
pub const ENV_SEED: &str = "CLINICDESK_SEED";

/// Get the application data directory.
/// Platform data dir (e.g. ~/.local/share/ClinicDesk), or ./ClinicDesk
/// when the platform reports none.
pub fn app_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Default database location under the data directory
pub fn database_path() -> PathBuf {
    app_data_dir().join(DATABASE_FILE)
}

/// `RUST_LOG` overrides this.
pub fn default_log_filter() -> &'static str {
    "clinicdesk_lib=info,clinicdesk=info,tower_http=warn"
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value}")]
    InvalidAddr { var: &'static str, value: String },

    #[error("{var}: {reason}")]
    InvalidValue { var: &'static str, reason: String },
}

/// Runtime configuration, read from the environment at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClinicConfig {
    pub addr: SocketAddr,
    pub data_dir: PathBuf,
    pub day_boundary: DayBoundary,
    /// Load the demo patients and appointments into an empty database.
    pub seed_demo_data: bool,
}

impl ClinicConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unset keys fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_addr = lookup(ENV_ADDR).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr: SocketAddr = raw_addr.parse().map_err(|_| ConfigError::InvalidAddr {
            var: ENV_ADDR,
            value: raw_addr.clone(),
        })?;

        let data_dir = lookup(ENV_DATA_DIR)
            .filter(|d| !d.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(app_data_dir);

        let day_boundary = match lookup(ENV_DAY_BOUNDARY) {
            Some(raw) => raw.parse::<DayBoundary>().map_err(|reason| ConfigError::InvalidValue {
                var: ENV_DAY_BOUNDARY,
                reason,
            })?,
            None => DayBoundary::default(),
        };

        let seed_demo_data = match lookup(ENV_SEED).as_deref().map(str::trim) {
            None | Some("") | Some("0") | Some("false") => false,
            Some("1") | Some("true") => true,
            Some(other) => {
                return Err(ConfigError::InvalidValue {
                    var: ENV_SEED,
                    reason: format!("expected 0/1/true/false, got {other:?}"),
                })
            }
        };

        Ok(Self {
            addr,
            data_dir,
            day_boundary,
            seed_demo_data,
        })
    }

    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join(DATABASE_FILE)
    }
}
