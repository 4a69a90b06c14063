use std::path::{Path, PathBuf};

use clap::Parser;
use serde::Deserialize;

const DEFAULT_LISTEN: &str = "0.0.0.0:4221";
const DEFAULT_READ_BUFFER: usize = 1024;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

/// Startup configuration. Built once, then only read.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Address the listener binds to
    pub listen_addr: String,
    /// Root directory for `/files/`
    pub directory: PathBuf,
    /// Size of the single read per connection
    pub read_buffer_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN.to_string(),
            directory: PathBuf::from("."),
            read_buffer_size: DEFAULT_READ_BUFFER,
        }
    }
}

/// Command-line flags. Anything given here wins over file or environment.
#[derive(Debug, Parser)]
#[command(name = "bytehttp", about = "Minimal HTTP/1.1 server over raw TCP")]
pub struct Args {
    /// Directory served by /files/
    #[arg(long)]
    pub directory: Option<PathBuf>,

    /// Listen address, e.g. 127.0.0.1:4221
    #[arg(long)]
    pub listen: Option<String>,

    /// YAML config file; replaces environment lookup when given
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Reads `LISTEN`, `DIRECTORY` and `READ_BUFFER_SIZE` from the process
    /// environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_env(|key| std::env::var(key).ok())
    }

    pub fn from_env<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(listen) = lookup("LISTEN") {
            cfg.listen_addr = listen;
        }
        if let Some(dir) = lookup("DIRECTORY") {
            cfg.directory = PathBuf::from(dir);
        }
        if let Some(size) = lookup("READ_BUFFER_SIZE") {
            cfg.read_buffer_size = size.parse().map_err(|_| ConfigError::InvalidValue {
                key: "READ_BUFFER_SIZE",
                value: size.clone(),
            })?;
        }

        cfg.validate()
    }

    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: Config = serde_yaml::from_str(s)?;
        cfg.validate()
    }

    pub fn from_yaml_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml_str(&text)
    }

    /// Builds the effective config for the binary.
    pub fn from_args(args: &Args) -> Result<Self, ConfigError> {
        let mut cfg = match &args.config {
            Some(path) => Self::from_yaml_file(path)?,
            None => Self::load()?,
        };

        if let Some(dir) = &args.directory {
            cfg.directory = dir.clone();
        }
        if let Some(listen) = &args.listen {
            cfg.listen_addr = listen.clone();
        }

        Ok(cfg)
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.read_buffer_size == 0 {
            return Err(ConfigError::InvalidValue {
                key: "read_buffer_size",
                value: "0".to_string(),
            });
        }
        Ok(self)
    }
}
