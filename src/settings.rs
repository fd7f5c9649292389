//! Game settings
//!
//! Read from a JSON file when one is given; every field falls back to its
//! default when missing.

use std::fs;
use std::num::NonZeroUsize;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::input::SharedDirection;
use crate::sim::Controller;

/// Who drives a paddle
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ControllerKind {
    #[default]
    Human,
    Ai,
}

impl ControllerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ControllerKind::Human => "human",
            ControllerKind::Ai => "ai",
        }
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write settings file {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("target_tps must be at least 1")]
    ZeroTickRate,
}

/// Operator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Balls in play (skips the menu prompt when started from the command line)
    pub ball_count: NonZeroUsize,
    pub left_controller: ControllerKind,
    pub right_controller: ControllerKind,

    /// Simulation rate
    pub target_tps: u32,

    /// Drawing surface size in pixels
    pub screen_width: u32,
    pub screen_height: u32,

    /// Fixed RNG seed; a time-based seed is used when absent
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ball_count: NonZeroUsize::MIN,
            left_controller: ControllerKind::Human,
            right_controller: ControllerKind::Ai,
            target_tps: TARGET_TPS,
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            seed: None,
        }
    }
}

impl Settings {
    /// Parse and validate settings from JSON text
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.target_tps == 0 {
            return Err(SettingsError::ZeroTickRate);
        }
        Ok(())
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }

    /// Write settings as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|source| SettingsError::Write {
            path: path.display().to_string(),
            source,
        })?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }

    /// Paddle controllers as configured. Human paddles read from `input`.
    pub fn controllers(&self, input: &Arc<SharedDirection>) -> (Controller, Controller) {
        let build = |kind: ControllerKind| match kind {
            ControllerKind::Human => Controller::Human(Arc::clone(input)),
            ControllerKind::Ai => Controller::Ai(Default::default()),
        };
        (build(self.left_controller), build(self.right_controller))
    }
}
