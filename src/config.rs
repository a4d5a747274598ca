use directories::ProjectDirs;
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::controller::ControllerSettings;
use crate::curves::{CurveConfig, GammaCurve};
use crate::media::SourceTemplate;
use crate::tuning::{ChannelRange, TuningError, VolumeRange};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read configuration: {0}")]
    Load(#[from] figment::Error),
    #[error("Invalid tuning: {0}")]
    Tuning(#[from] TuningError),
    #[error("Media template '{0}' has no {{n}} placeholder")]
    Template(String),
    #[error("Gamma must be a positive finite number, got {0}")]
    Gamma(f32),
    #[error("Failed to render configuration: {0}")]
    Render(#[from] toml::ser::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub channels: ChannelsConfig,
    #[serde(default)]
    pub volume: VolumeConfig,
    #[serde(default)]
    pub media: MediaConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ChannelsConfig {
    #[serde(default = "default_min_channel")]
    pub min: i32,
    #[serde(default = "default_max_channel")]
    pub max: i32,
}

impl Default for ChannelsConfig {
    fn default() -> Self {
        Self {
            min: default_min_channel(),
            max: default_max_channel(),
        }
    }
}

fn default_min_channel() -> i32 {
    0
}

fn default_max_channel() -> i32 {
    3
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct VolumeConfig {
    #[serde(default = "default_min_volume")]
    pub min: i32,
    #[serde(default = "default_max_volume")]
    pub max: i32,
    #[serde(default = "default_initial_volume")]
    pub initial: i32,
    #[serde(default)]
    pub curve: CurveConfig,
}

impl Default for VolumeConfig {
    fn default() -> Self {
        Self {
            min: default_min_volume(),
            max: default_max_volume(),
            initial: default_initial_volume(),
            curve: CurveConfig::default(),
        }
    }
}

fn default_min_volume() -> i32 {
    0
}

fn default_max_volume() -> i32 {
    10
}

fn default_initial_volume() -> i32 {
    5
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MediaConfig {
    #[serde(default)]
    pub directory: Option<String>,
    #[serde(default = "default_template")]
    pub template: String,
    #[serde(default = "default_check_sources")]
    pub check_sources: bool,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            directory: None,
            template: default_template(),
            check_sources: default_check_sources(),
        }
    }
}

fn default_template() -> String {
    "channel{n}.mp4".to_string()
}

fn default_check_sources() -> bool {
    true
}

impl Config {
    /// Project `config.toml` (if any) overlaid with `TELEVISION_` env vars,
    /// nested keys separated by `__` (e.g. `TELEVISION_VOLUME__MAX=8`).
    pub fn load() -> Result<Self, ConfigError> {
        Self::extract(Self::figment(Self::default_path()))
    }

    pub fn load_from_path(path: PathBuf) -> Result<Self, ConfigError> {
        Self::extract(Self::figment(Some(path)))
    }

    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("org", "television", "television")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    fn figment(path: Option<PathBuf>) -> Figment {
        let mut figment = Figment::new();
        if let Some(path) = path {
            figment = figment.merge(Toml::file(path));
        }
        figment.merge(Env::prefixed("TELEVISION_").split("__"))
    }

    fn extract(figment: Figment) -> Result<Self, ConfigError> {
        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.controller_settings().map(|_| ())
    }

    pub fn source_template(&self) -> Result<SourceTemplate, ConfigError> {
        SourceTemplate::new(self.media.directory.as_deref(), self.media.template.clone())
            .ok_or_else(|| ConfigError::Template(self.media.template.clone()))
    }

    pub fn controller_settings(&self) -> Result<ControllerSettings, ConfigError> {
        let channels = ChannelRange::new(self.channels.min, self.channels.max)?;
        let volumes = VolumeRange::new(self.volume.min, self.volume.max)?;
        if let CurveConfig::Gamma { gamma: Some(gamma) } = self.volume.curve {
            if !GammaCurve::is_valid_gamma(gamma) {
                return Err(ConfigError::Gamma(gamma));
            }
        }
        let settings = ControllerSettings::new(channels, volumes, self.volume.initial)?
            .with_curve(self.volume.curve.clone().into_curve())
            .with_sources(self.source_template()?);
        Ok(settings)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
