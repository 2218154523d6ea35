use std::{
    fs, io,
    path::{Path, PathBuf},
    str::FromStr,
};

use log::LevelFilter;
use ron::{self, extensions::Extensions};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::base_path;

const DEFAULT_SETTINGS: &str = include_str!("./default_settings.ron");

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to load/save settings file: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to parse settings file: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("There is no config directory on this platform")]
    NoConfigDir,
    #[error("Unknown log level in settings: {0}")]
    LogLevel(String),
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub width: Option<usize>,
    #[serde(default)]
    pub height: Option<usize>,
    #[serde(default)]
    pub default_generator: Option<String>,
    #[serde(default)]
    pub default_solver: Option<String>,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub print_trail: Option<bool>,
    #[serde(default)]
    pub log_level: Option<String>,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_width(mut self, value: usize) -> Self {
        self.width = Some(value);
        self
    }

    pub fn get_width(&self) -> usize {
        self.width.unwrap_or(20)
    }

    pub fn set_height(mut self, value: usize) -> Self {
        self.height = Some(value);
        self
    }

    pub fn get_height(&self) -> usize {
        self.height.unwrap_or(10)
    }

    pub fn set_default_generator(mut self, value: impl Into<String>) -> Self {
        self.default_generator = Some(value.into());
        self
    }

    /// Key or name of the generator, `None` meaning the registry's default.
    pub fn get_default_generator(&self) -> Option<&str> {
        self.default_generator.as_deref()
    }

    pub fn set_default_solver(mut self, value: impl Into<String>) -> Self {
        self.default_solver = Some(value.into());
        self
    }

    pub fn get_default_solver(&self) -> Option<&str> {
        self.default_solver.as_deref()
    }

    pub fn set_seed(mut self, value: u64) -> Self {
        self.seed = Some(value);
        self
    }

    pub fn get_seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn set_print_trail(mut self, value: bool) -> Self {
        self.print_trail = Some(value);
        self
    }

    pub fn get_print_trail(&self) -> bool {
        self.print_trail.unwrap_or(true)
    }

    pub fn set_log_level(mut self, value: LevelFilter) -> Self {
        self.log_level = Some(value.to_string().to_lowercase());
        self
    }

    pub fn get_log_level(&self) -> Result<LevelFilter, SettingsError> {
        match self.log_level.as_deref() {
            Some(level) => {
                LevelFilter::from_str(level).map_err(|_| SettingsError::LogLevel(level.to_string()))
            }
            None => Ok(LevelFilter::Warn),
        }
    }

    pub fn default_path() -> Option<PathBuf> {
        base_path().map(|dir| dir.join("settings.ron"))
    }

    fn options() -> ron::Options {
        ron::Options::default().with_default_extension(Extensions::IMPLICIT_SOME)
    }

    pub fn parse(settings: &str) -> Result<Self, SettingsError> {
        Ok(Self::options().from_str(settings)?)
    }

    /// Reads the settings at `path`, first writing the default ones there when there is no
    /// such file.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        match fs::read_to_string(path) {
            Ok(settings) => Self::parse(&settings),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::info!("Creating default settings at {:?}", path);
                Self::reset_config(path)?;
                Self::parse(DEFAULT_SETTINGS)
            }
            Err(err) => Err(err.into()),
        }
    }

    pub fn reset_config(path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, DEFAULT_SETTINGS)?;
        Ok(())
    }
}
