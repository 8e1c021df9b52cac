use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::alert::Category;

/// RGB color represented as a 3-element array.
pub type Rgb = [u8; 3];

/// Badge colors for each alert category.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Message badge background (blue)
    pub message: Rgb,
    /// Warning badge background (yellow)
    pub warning: Rgb,
    /// Success badge background (green)
    pub success: Rgb,
    /// Error badge background (red)
    pub error: Rgb,
    /// Icon and title foreground
    pub foreground: Rgb,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            message: [2, 169, 244],  // #02A9F4
            warning: [255, 205, 64], // #FFCD40
            success: [69, 181, 38],  // #45B526
            error: [255, 82, 82],    // #FF5252
            foreground: [255, 255, 255],
        }
    }
}

impl ThemeConfig {
    /// Convert an RGB array to a ratatui Color.
    pub fn to_color(rgb: &Rgb) -> ratatui::style::Color {
        ratatui::style::Color::Rgb(rgb[0], rgb[1], rgb[2])
    }

    /// Badge background color for a category.
    pub fn category_color(&self, category: Category) -> ratatui::style::Color {
        match category {
            Category::Message => Self::to_color(&self.message),
            Category::Warning => Self::to_color(&self.warning),
            Category::Success => Self::to_color(&self.success),
            Category::Error => Self::to_color(&self.error),
        }
    }

    /// Icon and title foreground color.
    pub fn foreground(&self) -> ratatui::style::Color {
        Self::to_color(&self.foreground)
    }
}

/// Animation timing and spring parameters.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Entrance animation duration in milliseconds
    pub enter_ms: u64,
    /// Duration of each of the two exit phases in milliseconds
    pub exit_phase_ms: u64,
    /// Spring damping ratio (lower = bouncier)
    pub spring_damping: f32,
    /// Normalized initial spring velocity
    pub spring_velocity: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            enter_ms: 1200,
            exit_phase_ms: 300,
            spring_damping: 0.6,
            spring_velocity: 10.0,
        }
    }
}

impl AnimationConfig {
    pub fn enter_duration(&self) -> Duration {
        Duration::from_millis(self.enter_ms)
    }

    pub fn exit_phase_duration(&self) -> Duration {
        Duration::from_millis(self.exit_phase_ms)
    }
}

/// Behavior knobs for the overlay.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Display time in seconds used by the convenience constructors
    pub default_duration_secs: f32,
    /// Idle polling interval for the demo loop in milliseconds
    pub poll_ms: u64,
    /// Rows reserved by navigation chrome when a surface declares it
    pub nav_chrome_rows: u16,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            default_duration_secs: 2.5,
            poll_ms: 100,
            nav_chrome_rows: 2,
        }
    }
}

impl BehaviorConfig {
    pub fn default_duration(&self) -> Duration {
        Duration::from_secs_f32(self.default_duration_secs.max(0.0))
    }
}

/// Main configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct Config {
    pub theme: ThemeConfig,
    pub animation: AnimationConfig,
    pub behavior: BehaviorConfig,
}

impl Config {
    /// Returns the default config file path: ~/.config/ringtoast/config.toml
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("ringtoast").join("config.toml"))
    }

    /// Load configuration from the default path, falling back to defaults.
    pub fn load() -> Self {
        Self::default_path()
            .and_then(|path| Self::load_from_path(&path).ok())
            .unwrap_or_default()
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to the default path.
    pub fn save(&self) -> anyhow::Result<()> {
        if let Some(path) = Self::default_path() {
            self.save_to_path(&path)
        } else {
            Err(anyhow::anyhow!("Could not determine config directory"))
        }
    }

    /// Save configuration to a specific path.
    pub fn save_to_path(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}
