use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::env::var;
use std::fs::read_to_string;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use thiserror::Error;

static CONFIG: OnceCell<Config> = OnceCell::new();

#[derive(Error, Debug)]
pub enum Error {
    #[error("config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("config file not found")]
    Io(#[from] std::io::Error),

    #[error("config not found")]
    NoConfig,
}

/// Global configuration.
pub struct Config {
    pub tty: bool,
    pub log_loads: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tty: std::io::stderr().is_terminal(),
            log_loads: var("LAZYVIEW_LOG_LOADS").is_ok(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Config, Error> {
        let mut config = Config::default();

        let path = PathBuf::from("lazyview.toml");
        if !path.exists() {
            return Err(Error::NoConfig);
        }

        let config_file = ConfigFile::load(&path)?;
        config.log_loads = config_file.general.log_loads;

        Ok(config)
    }

    pub fn get() -> &'static Config {
        get_config()
    }
}

pub fn get_config() -> &'static Config {
    CONFIG.get_or_init(|| Config::load().unwrap_or_default())
}

#[derive(Serialize, Deserialize)]
struct ConfigFile {
    general: General,
}

impl ConfigFile {
    pub fn load(path: impl AsRef<Path>) -> Result<ConfigFile, Error> {
        let file = read_to_string(path)?;
        let config: Self = toml::from_str(&file)?;

        Ok(config)
    }
}

#[derive(Serialize, Deserialize)]
struct General {
    #[serde(default = "General::default_log_loads")]
    log_loads: bool,
}

impl General {
    fn default_log_loads() -> bool {
        false
    }
}
