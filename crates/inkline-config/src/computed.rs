//! Computed style values.
//!
//! This module contains `ComputedStyle`, which holds pre-computed ANSI
//! color escape sequences derived from a `StyleConfig` by applying HSV
//! multipliers to a base color. `Theme::colored` consumes this to build
//! the renderer's actual palette.

use crate::style::{HsvMultiplier, StyleConfig};
use inkline_ansi::color::hsv_to_rgb;

/// Pre-computed ANSI foreground/background escape sequences, one per
/// theme role.
#[derive(Debug, Clone, Default)]
pub struct ComputedStyle {
    /// Dark role color, "r;g;bm" format.
    pub dark: String,
    /// Mid role color, "r;g;bm" format.
    pub mid: String,
    /// Symbol role color, "r;g;bm" format.
    pub symbol: String,
    /// Head role color, "r;g;bm" format.
    pub head: String,
    /// Grey role color, "r;g;bm" format.
    pub grey: String,
    /// Bright role color, "r;g;bm" format.
    pub bright: String,

    /// Full ANSI foreground escape for dark.
    pub dark_fg: String,
    /// Full ANSI background escape for dark.
    pub dark_bg: String,
    /// Full ANSI foreground escape for mid.
    pub mid_fg: String,
    /// Full ANSI foreground escape for symbol.
    pub symbol_fg: String,
    /// Full ANSI foreground escape for head.
    pub head_fg: String,
    /// Full ANSI foreground escape for grey.
    pub grey_fg: String,
    /// Full ANSI foreground escape for bright.
    pub bright_fg: String,
}

impl ComputedStyle {
    /// Compute role colors from a `StyleConfig` by applying each role's
    /// HSV multiplier to the base HSV triple.
    ///
    /// ```
    /// use inkline_config::{StyleConfig, ComputedStyle};
    ///
    /// let config = StyleConfig::default();
    /// let computed = ComputedStyle::from_config(&config);
    /// let bg_escape = format!("\x1b[48;2;{}", computed.dark);
    /// ```
    pub fn from_config(config: &StyleConfig) -> Self {
        let (base_h, base_s, base_v) = config.base_hsv();

        let dark = apply_hsv_multiplier(base_h, base_s, base_v, &config.dark);
        let mid = apply_hsv_multiplier(base_h, base_s, base_v, &config.mid);
        let symbol = apply_hsv_multiplier(base_h, base_s, base_v, &config.symbol);
        let head = apply_hsv_multiplier(base_h, base_s, base_v, &config.head);
        let grey = apply_hsv_multiplier(base_h, base_s, base_v, &config.grey);
        let bright = apply_hsv_multiplier(base_h, base_s, base_v, &config.bright);

        let dark_fg = format!("\x1b[38;2;{}", dark);
        let dark_bg = format!("\x1b[48;2;{}", dark);
        let mid_fg = format!("\x1b[38;2;{}", mid);
        let symbol_fg = format!("\x1b[38;2;{}", symbol);
        let head_fg = format!("\x1b[38;2;{}", head);
        let grey_fg = format!("\x1b[38;2;{}", grey);
        let bright_fg = format!("\x1b[38;2;{}", bright);

        Self {
            dark,
            mid,
            symbol,
            head,
            grey,
            bright,
            dark_fg,
            dark_bg,
            mid_fg,
            symbol_fg,
            head_fg,
            grey_fg,
            bright_fg,
        }
    }

    /// The foreground escape for a named role, or `""` if unknown.
    pub fn fg(&self, name: &str) -> &str {
        match name {
            "dark" => &self.dark_fg,
            "mid" => &self.mid_fg,
            "symbol" => &self.symbol_fg,
            "head" => &self.head_fg,
            "grey" => &self.grey_fg,
            "bright" => &self.bright_fg,
            _ => "",
        }
    }

    /// The background escape for a named role, or `""` if unknown.
    pub fn bg(&self, name: &str) -> &str {
        match name {
            "dark" => &self.dark_bg,
            _ => "",
        }
    }

    /// Wrap `text` in a named role's foreground escape and a reset.
    pub fn style_fg(&self, name: &str, text: &str) -> String {
        format!("{}{}\x1b[0m", self.fg(name), text)
    }
}

/// Apply an HSV multiplier to a base HSV triple and format the result
/// as an ANSI RGB string ("r;g;bm").
fn apply_hsv_multiplier(h: f64, s: f64, v: f64, multiplier: &HsvMultiplier) -> String {
    let new_h = (h * multiplier.h) % 360.0;
    let new_s = (s * multiplier.s).clamp(0.0, 1.0);
    let new_v = (v * multiplier.v).clamp(0.0, 1.0);

    let (r, g, b) = hsv_to_rgb(new_h, new_s, new_v);

    format!("{};{};{}m", r, g, b)
}
