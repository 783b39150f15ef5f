use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::ui::Theme;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub appearance: AppearanceConfig,
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceConfig {
    /// Chrome theme preset: "slate" or "nord". This styles the terminal
    /// UI around the card; card themes are picked in the app itself.
    pub theme: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Where exported PNGs land. Defaults to the platform download
    /// directory, falling back to the current directory.
    pub output_dir: Option<PathBuf>,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            theme: "slate".to_string(),
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let expanded = shellexpand::tilde(path);
        let path = Path::new(expanded.as_ref());

        if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            tracing::info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Resolve the chrome theme preset, falling back to the default on an
    /// unknown name.
    pub fn resolve_theme(&self) -> Theme {
        Theme::from_preset(&self.appearance.theme).unwrap_or_else(|| {
            tracing::warn!(
                "Unknown chrome theme {:?}, using default",
                self.appearance.theme
            );
            Theme::default()
        })
    }

    /// Effective export directory.
    pub fn output_dir(&self) -> PathBuf {
        match &self.export.output_dir {
            Some(dir) => PathBuf::from(shellexpand::tilde(&dir.to_string_lossy()).as_ref()),
            None => dirs::download_dir().unwrap_or_else(|| PathBuf::from(".")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.appearance.theme, "slate");
        assert!(config.export.output_dir.is_none());
    }

    #[test]
    fn test_partial_toml() {
        let config: Config = toml::from_str("[export]\noutput_dir = \"/tmp/cards\"\n").unwrap();
        assert_eq!(config.export.output_dir, Some(PathBuf::from("/tmp/cards")));
        assert_eq!(config.appearance.theme, "slate");
        assert_eq!(config.output_dir(), PathBuf::from("/tmp/cards"));
    }

    #[test]
    fn test_unknown_theme_falls_back() {
        let config: Config = toml::from_str("[appearance]\ntheme = \"nope\"\n").unwrap();
        // Falls back to the default preset rather than failing
        let _ = config.resolve_theme();
    }
}
