use crate::cli::Cli;
use directories::BaseDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_LEVEL: &str = "info";
pub const DEFAULT_FILENAME: &str = "server_log.txt";
/// Directory under the platform data dir where the game keeps its logs.
pub const APP_DIR_NAME: &str = "vcmi";
/// Text an unset `text` or `filter` is compared as.
pub const ABSENT_PLACEHOLDER: &str = "None";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Resolved scan settings. Built once at startup, read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    pub level: String,
    pub directory: PathBuf,
    pub filename: String,
    pub text: Option<String>,
    pub filter: Option<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL.to_string(),
            directory: default_log_directory(),
            filename: DEFAULT_FILENAME.to_string(),
            text: None,
            filter: None,
        }
    }
}

impl ScanConfig {
    /// Merge command line flags over profile values over built-in defaults.
    pub fn resolve(cli: &Cli, profile: &ScanProfile) -> Self {
        let section = &profile.scan;
        let directory = resolve_directory(cli.dir.clone().or_else(|| section.dir.clone()));

        Self {
            level: cli
                .lvl
                .clone()
                .or_else(|| section.lvl.clone())
                .unwrap_or_else(|| DEFAULT_LEVEL.to_string()),
            directory,
            filename: cli
                .file
                .clone()
                .or_else(|| section.file.clone())
                .unwrap_or_else(|| DEFAULT_FILENAME.to_string()),
            text: cli.text.clone().or_else(|| section.text.clone()),
            filter: cli.filter.clone().or_else(|| section.filter.clone()),
        }
    }

    /// `directory + "/" + filename`, concatenated as given. Unlike
    /// `Path::join`, an absolute filename does not replace the directory.
    pub fn log_path(&self) -> PathBuf {
        let mut path = self.directory.clone().into_os_string();
        path.push("/");
        path.push(&self.filename);
        PathBuf::from(path)
    }

    /// Banner rows in display order; unset values show as the absent placeholder.
    pub fn settings(&self) -> [(&'static str, String); 5] {
        let optional = |value: &Option<String>| {
            value
                .clone()
                .unwrap_or_else(|| ABSENT_PLACEHOLDER.to_string())
        };

        [
            ("LVL", self.level.clone()),
            ("DIR", self.directory.display().to_string()),
            ("FILE", self.filename.clone()),
            ("TEXT", optional(&self.text)),
            ("FILTER", optional(&self.filter)),
        ]
    }
}

/// Shape of the optional TOML profile.
///
/// ```toml
/// [scan]
/// lvl = "error"
/// dir = "/var/log/vcmi"
/// file = "client_log.txt"
/// filter = ""
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ScanProfile {
    pub scan: ProfileSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProfileSection {
    pub lvl: Option<String>,
    pub dir: Option<PathBuf>,
    pub file: Option<String>,
    pub text: Option<String>,
    pub filter: Option<String>,
}

/// Use `dir_override` when given, otherwise the platform default.
pub fn resolve_directory(dir_override: Option<PathBuf>) -> PathBuf {
    dir_override.unwrap_or_else(default_log_directory)
}

/// Platform application-support directory for the game's logs.
pub fn default_log_directory() -> PathBuf {
    match BaseDirs::new() {
        Some(dirs) => dirs.data_dir().join(APP_DIR_NAME),
        None => {
            tracing::warn!("Could not determine home directory, using current directory");
            PathBuf::from(".").join(APP_DIR_NAME)
        }
    }
}

pub fn load_config(path: Option<&Path>) -> Result<ScanProfile, ConfigError> {
    if let Some(path) = path {
        load_config_from_path(path)
    } else {
        Ok(ScanProfile::default())
    }
}

pub fn load_config_from_path(path: &Path) -> Result<ScanProfile, ConfigError> {
    let path_display = path.display().to_string();
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path_display.clone(),
        source,
    })?;

    toml::from_str::<ScanProfile>(&raw).map_err(|source| ConfigError::Parse {
        path: path_display,
        source,
    })
}
