//! Tracker configuration: storage location and first-run seeding.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Environment override for [`TrackerConfig::data_dir`].
pub const DATA_DIR_ENV: &str = "GYMTRACK_DATA_DIR";
/// Environment override for [`TrackerConfig::seed_demo_data`].
pub const SEED_ENV: &str = "GYMTRACK_SEED";

/// Failure reading the JSON config file.
#[derive(Debug)]
pub enum ConfigError {
    /// The file could not be read.
    Io {
        /// Config file path.
        path: PathBuf,
        /// Underlying error.
        source: io::Error,
    },
    /// The file is not valid config JSON.
    Json {
        /// Config file path.
        path: PathBuf,
        /// Underlying error.
        source: serde_json::Error,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot read config {}: {source}", path.display())
            }
            Self::Json { path, source } => {
                write!(f, "invalid config {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
        }
    }
}

/// Where the flat-text store lives and how the binary starts up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Storage directory, created on first save.
    pub data_dir: PathBuf,
    /// Members file name inside `data_dir`.
    pub members_file: String,
    /// Reservations file name inside `data_dir`.
    pub reservations_file: String,
    /// Register two demo members when the store starts out empty.
    pub seed_demo_data: bool,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            members_file: "members.txt".to_string(),
            reservations_file: "reservations.txt".to_string(),
            seed_demo_data: true,
        }
    }
}

impl TrackerConfig {
    /// Reads a JSON config file; absent keys keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Defaults, then the optional JSON file, then environment overrides.
    pub fn resolve(path: Option<&Path>) -> Result<Self, ConfigError> {
        let cfg = match path {
            Some(path) => Self::from_json_file(path)?,
            None => Self::default(),
        };
        Ok(cfg.with_overrides(|key| std::env::var(key).ok()))
    }

    /// Applies `GYMTRACK_*` overrides looked up through `lookup`.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(dir) = lookup(DATA_DIR_ENV).filter(|d| !d.is_empty()) {
            self.data_dir = PathBuf::from(dir);
        }
        if let Some(seed) = lookup(SEED_ENV) {
            match seed.to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => self.seed_demo_data = true,
                "0" | "false" | "no" => self.seed_demo_data = false,
                other => log::warn!("ignoring {SEED_ENV}={other}: expected true or false"),
            }
        }
        self
    }

    /// Full path of the members file.
    pub fn members_path(&self) -> PathBuf {
        self.data_dir.join(&self.members_file)
    }

    /// Full path of the reservations file.
    pub fn reservations_path(&self) -> PathBuf {
        self.data_dir.join(&self.reservations_file)
    }
}
