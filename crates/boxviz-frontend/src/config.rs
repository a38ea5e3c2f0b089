//! Application configuration
//!
//! Everything has a default, so the app runs without a config file. A RON
//! file is read only when `BOXVIZ_CONFIG` points at one.

use std::path::Path;
use std::time::Duration;

use boxviz_core::Scene;
use boxviz_renderer::RendererConfig;
use serde::{Deserialize, Serialize};

/// Environment variable naming an optional RON config file
pub const CONFIG_ENV_VAR: &str = "BOXVIZ_CONFIG";

/// Config loading errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Native window settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    pub resizable: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 800.0,
            title: "Geometry, Mesh, and Boundary Conditions".to_string(),
            resizable: false,
        }
    }
}

/// Top-level application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    /// Target repaint rate in frames per second
    pub frame_rate: u32,
    /// Scene shown at startup
    pub scene: Scene,
    pub renderer: RendererConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            frame_rate: 60,
            scene: Scene::default(),
            renderer: RendererConfig::default(),
        }
    }
}

impl AppConfig {
    /// Parse a RON document. Missing sections keep their defaults.
    pub fn from_ron_str(s: &str) -> Result<Self, ConfigError> {
        ron::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Read and parse a RON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_ron_str(&content)
    }

    /// Load the file named by [`CONFIG_ENV_VAR`], falling back to defaults.
    pub fn load() -> Self {
        let Ok(path) = std::env::var(CONFIG_ENV_VAR) else {
            return Self::default();
        };

        match Self::from_file(&path) {
            Ok(config) if config.scene.is_valid() => {
                tracing::info!("Loaded config from {}", path);
                config
            }
            Ok(_) => {
                tracing::warn!("Config {} has an invalid scene, using defaults", path);
                Self::default()
            }
            Err(e) => {
                tracing::warn!("Failed to load config {}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Delay between repaints
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.frame_rate.max(1) as f64)
    }
}
