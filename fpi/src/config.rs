use std::fs;
use std::path::{Path, PathBuf};

use fpi_ui_layout::LayoutConfig;
use thiserror::Error;

/// Errors emitted while reading the layout configuration.
#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("layout config IO failed")]
    Io(#[from] std::io::Error),
}

/// Status describing how the layout configuration was obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ConfigLoadStatus {
    Loaded,
    Missing,
    Invalid(String),
}

/// Result of reading the layout configuration from disk.
#[derive(Debug, Clone)]
pub(crate) struct ConfigLoad {
    config: LayoutConfig,
    status: ConfigLoadStatus,
}

impl ConfigLoad {
    pub(crate) fn new(config: LayoutConfig, status: ConfigLoadStatus) -> Self {
        Self { config, status }
    }

    /// Consume the value and return both payload and status.
    pub(crate) fn into_parts(self) -> (LayoutConfig, ConfigLoadStatus) {
        (self.config, self.status)
    }
}

/// Read the layout configuration, falling back to defaults on any problem.
pub(crate) fn load_layout_config() -> LayoutConfig {
    let path = config_path();
    match load_config_from_path(&path) {
        Ok(load) => {
            let (config, status) = load.into_parts();
            match status {
                ConfigLoadStatus::Loaded => {
                    log::info!("layout config loaded from {}", path.display());
                },
                ConfigLoadStatus::Missing => {
                    log::debug!(
                        "no layout config at {}, using defaults",
                        path.display()
                    );
                },
                ConfigLoadStatus::Invalid(reason) => {
                    log::warn!(
                        "layout config at {} is invalid, using defaults: {reason}",
                        path.display()
                    );
                },
            }
            config
        },
        Err(err) => {
            log::warn!("failed to read layout config: {err}");
            LayoutConfig::default()
        },
    }
}

fn load_config_from_path(path: &Path) -> Result<ConfigLoad, ConfigError> {
    let data = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(ConfigLoad::new(
                LayoutConfig::default(),
                ConfigLoadStatus::Missing,
            ));
        },
        Err(err) => return Err(err.into()),
    };

    match serde_json::from_str::<LayoutConfig>(&data) {
        Ok(config) => Ok(ConfigLoad::new(config, ConfigLoadStatus::Loaded)),
        Err(err) => Ok(ConfigLoad::new(
            LayoutConfig::default(),
            ConfigLoadStatus::Invalid(format!("{err}")),
        )),
    }
}

fn config_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home)
            .join(".config")
            .join("fpi")
            .join("layout.json");
    }

    std::env::temp_dir().join("fpi").join("layout.json")
}
