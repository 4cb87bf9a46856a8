//! Inkline Config
//!
//! Configuration loading and management for inkline, backing the
//! renderer's `Options`+`Theme` pair with a `serde`+`toml` file format.
//!
//! Configuration is loaded from platform-specific locations:
//! - Linux: `~/.config/inkline/config.toml`
//! - macOS: `~/Library/Application Support/inkline/config.toml`
//! - Windows: `%APPDATA%\inkline\config.toml`
//!
//! # Example
//!
//! ```no_run
//! use inkline_config::Config;
//!
//! let config = Config::load().unwrap();
//! let options = config.to_options();
//! ```

mod computed;
mod options;
mod style;
mod theme;

pub use computed::ComputedStyle;
pub use options::OptionsConfig;
pub use style::{HsvMultiplier, StyleConfig};
pub use theme::Theme;

use inkline_core::{InklineError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default TOML configuration string.
const DEFAULT_TOML: &str = r#"[options]
ConsoleWidth  = 0
EnableColors  = true
StripHtml     = true
UseHyperlinks = true

[style]
HSV     = [0.8, 0.5, 0.5]
Dark    = { H = 1.00, S = 1.50, V = 0.25 }
Mid     = { H = 1.00, S = 1.00, V = 0.50 }
Symbol  = { H = 1.00, S = 1.00, V = 1.50 }
Head    = { H = 1.00, S = 1.00, V = 1.75 }
Grey    = { H = 1.00, S = 0.25, V = 1.37 }
Bright  = { H = 1.00, S = 0.60, V = 2.00 }
"#;

/// The renderer's fully-resolved options: the persisted flags plus a
/// concrete `Theme` (colored or monochrome, already picked).
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    /// Effective wrap width (never zero or negative; see
    /// [`OptionsConfig::effective_width`]).
    pub console_width: usize,
    pub enable_colors: bool,
    pub strip_html: bool,
    pub use_hyperlinks: bool,
    pub theme: Theme,
}

/// Main configuration structure: the two TOML sections that together
/// produce an [`Options`] record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub options: OptionsConfig,

    #[serde(default)]
    pub style: StyleConfig,
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_TOML).expect("default TOML should be valid")
    }
}

impl Config {
    /// The built-in default TOML configuration text.
    ///
    /// ```
    /// use inkline_config::Config;
    /// let toml = Config::default_toml();
    /// assert!(toml.contains("[options]"));
    /// assert!(toml.contains("[style]"));
    /// ```
    pub fn default_toml() -> &'static str {
        DEFAULT_TOML
    }

    /// The platform-specific configuration file path.
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "inkline")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// The platform-specific configuration directory.
    pub fn config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "inkline")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Ensure the config file exists, creating it with defaults if not.
    /// Returns the path to the (now-existing) file.
    pub fn ensure_config_file() -> Result<PathBuf> {
        let config_dir = Self::config_dir()
            .ok_or_else(|| InklineError::Config("could not determine config directory".into()))?;

        std::fs::create_dir_all(&config_dir)?;

        let config_path = config_dir.join("config.toml");
        if !config_path.exists() {
            std::fs::write(&config_path, DEFAULT_TOML)?;
        }

        Ok(config_path)
    }

    /// Load configuration from the default platform-specific path,
    /// falling back to built-in defaults if no file exists.
    pub fn load() -> Result<Self> {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                let content = std::fs::read_to_string(&config_path)?;
                return toml::from_str(&content)
                    .map_err(|e| InklineError::Config(format!("parse error: {}", e)));
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific TOML file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| InklineError::Config(format!("parse error in {}: {}", path.display(), e)))
    }

    /// Load the default configuration, then apply an optional override:
    /// a path to an existing TOML file, or an inline TOML string.
    pub fn load_with_override(override_config: Option<&str>) -> Result<Self> {
        let mut config = Self::load()?;

        if let Some(override_str) = override_config {
            let override_path = Path::new(override_str);

            let override_toml = if override_path.exists() {
                std::fs::read_to_string(override_path)?
            } else {
                override_str.to_string()
            };

            let override_config: Config = toml::from_str(&override_toml)
                .map_err(|e| InklineError::Config(format!("override parse error: {}", e)))?;

            config.merge(&override_config);
        }

        Ok(config)
    }

    /// Merge another config into this one; `other` takes precedence.
    ///
    /// ```
    /// use inkline_config::Config;
    ///
    /// let mut base = Config::default();
    /// let override_config: Config = toml::from_str(r#"
    ///     [options]
    ///     EnableColors = false
    /// "#).unwrap();
    ///
    /// base.merge(&override_config);
    /// assert!(!base.options.enable_colors);
    /// ```
    pub fn merge(&mut self, other: &Config) {
        self.options.merge(&other.options);
        self.style.merge(&other.style);
    }

    /// Save configuration to a file as pretty-printed TOML.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| InklineError::Config(format!("serialization error: {}", e)))?;
        std::fs::write(path, toml_string)?;
        Ok(())
    }

    /// Compute the HSV-derived role colors for this config's `style`
    /// section.
    pub fn computed_style(&self) -> ComputedStyle {
        ComputedStyle::from_config(&self.style)
    }

    /// Resolve this config into the renderer's `Options` record,
    /// picking the colored or monochrome theme per `enable_colors`.
    ///
    /// ```
    /// use inkline_config::Config;
    /// let options = Config::default().to_options();
    /// assert!(options.console_width > 0);
    /// ```
    pub fn to_options(&self) -> Options {
        let theme = if self.options.enable_colors {
            Theme::colored(&self.computed_style())
        } else {
            Theme::monochrome()
        };

        Options {
            console_width: self.options.effective_width(),
            enable_colors: self.options.enable_colors,
            strip_html: self.options.strip_html,
            use_hyperlinks: self.options.use_hyperlinks,
            theme,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.options.enable_colors);
        assert!(config.options.use_hyperlinks);
        assert_eq!(config.style.hsv, [0.8, 0.5, 0.5]);
    }

    #[test]
    fn test_default_toml_parses() {
        let config: Config = toml::from_str(DEFAULT_TOML).unwrap();
        assert!(config.options.strip_html);
    }

    #[test]
    fn test_merge() {
        let mut base = Config::default();
        assert!(base.options.enable_colors);

        let override_toml = r#"
            [options]
            EnableColors = false
            [style]
            HSV = [0.1, 0.2, 0.3]
        "#;
        let override_config: Config = toml::from_str(override_toml).unwrap();

        base.merge(&override_config);
        assert!(!base.options.enable_colors);
        assert_eq!(base.style.hsv, [0.1, 0.2, 0.3]);
    }

    #[test]
    fn test_config_path() {
        let path = Config::config_path();
        if let Some(p) = path {
            assert!(p.to_string_lossy().contains("inkline"));
        }
    }

    #[test]
    fn test_computed_style() {
        let config = Config::default();
        let computed = config.computed_style();
        assert!(computed.dark.contains(';'));
        assert!(computed.mid.contains(';'));
    }

    #[test]
    fn test_roundtrip_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(config.options.enable_colors, parsed.options.enable_colors);
        assert_eq!(config.style.hsv, parsed.style.hsv);
    }

    #[test]
    fn to_options_picks_monochrome_when_colors_disabled() {
        let mut config = Config::default();
        config.options.enable_colors = false;
        let options = config.to_options();
        assert_eq!(options.theme, Theme::monochrome());
    }

    #[test]
    fn to_options_picks_colored_theme_when_enabled() {
        let config = Config::default();
        let options = config.to_options();
        assert_ne!(options.theme, Theme::monochrome());
    }
}
