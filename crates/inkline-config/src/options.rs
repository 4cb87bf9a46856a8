//! Persisted rendering options.
//!
//! `OptionsConfig` is the TOML-serializable half of the renderer's
//! `Options` record (the other half, `Theme`, lives in [`crate::theme`]
//! because it is derived rather than hand-authored).

use serde::{Deserialize, Serialize};

/// Rendering options as they appear in a config file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct OptionsConfig {
    /// Target wrap width. Zero or negative means "auto" (80 if the
    /// caller cannot detect a terminal).
    #[serde(default)]
    pub console_width: i64,

    /// If false, the formatter and state machine suppress all SGR
    /// emissions regardless of theme.
    #[serde(default = "default_true")]
    pub enable_colors: bool,

    /// If true, inline `<...>` runs are elided by the inline formatter.
    #[serde(default = "default_true")]
    pub strip_html: bool,

    /// If true, inline/reference links emit OSC-8 wrapping instead of
    /// a literal `text (url)`.
    #[serde(default = "default_true")]
    pub use_hyperlinks: bool,
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            console_width: 0,
            enable_colors: true,
            strip_html: true,
            use_hyperlinks: true,
        }
    }
}

impl OptionsConfig {
    /// Merge another `OptionsConfig` into this one; `other` wins.
    pub fn merge(&mut self, other: &OptionsConfig) {
        self.console_width = other.console_width;
        self.enable_colors = other.enable_colors;
        self.strip_html = other.strip_html;
        self.use_hyperlinks = other.use_hyperlinks;
    }

    /// Resolve `console_width` to a positive value, defaulting to 80.
    pub fn effective_width(&self) -> usize {
        if self.console_width <= 0 {
            80
        } else {
            self.console_width as usize
        }
    }
}

fn default_true() -> bool {
    true
}
