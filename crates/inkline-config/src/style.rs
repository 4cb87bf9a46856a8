//! Base color configuration: an HSV triple plus per-role multipliers.
//!
//! This is the part of the config file a user actually edits to
//! re-theme the renderer — three base numbers and six named
//! multipliers, rather than six hand-picked palettes.

use serde::{Deserialize, Serialize};

/// HSV multiplier for color transformations.
///
/// These multipliers are applied to base HSV values to create
/// derived colors for different theme roles.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "UPPERCASE")]
pub struct HsvMultiplier {
    /// Hue multiplier (typically 1.0 to preserve hue).
    pub h: f64,
    /// Saturation multiplier.
    pub s: f64,
    /// Value (brightness) multiplier.
    pub v: f64,
}

impl Default for HsvMultiplier {
    fn default() -> Self {
        Self {
            h: 1.0,
            s: 1.0,
            v: 1.0,
        }
    }
}

impl HsvMultiplier {
    pub fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }

    /// The "dark" role multiplier (code block / quote backgrounds).
    pub fn dark() -> Self {
        Self::new(1.00, 1.50, 0.25)
    }

    /// The "mid" role multiplier (secondary headings).
    pub fn mid() -> Self {
        Self::new(1.00, 1.00, 0.50)
    }

    /// The "symbol" role multiplier (bullets, task markers).
    pub fn symbol() -> Self {
        Self::new(1.00, 1.00, 1.50)
    }

    /// The "head" role multiplier (primary headings).
    pub fn head() -> Self {
        Self::new(1.00, 1.00, 1.75)
    }

    /// The "grey" role multiplier (blockquote bars, muted text).
    pub fn grey() -> Self {
        Self::new(1.00, 0.25, 1.37)
    }

    /// The "bright" role multiplier (links, emphasis).
    pub fn bright() -> Self {
        Self::new(1.00, 0.60, 2.00)
    }
}

/// Base HSV color plus per-role multipliers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct StyleConfig {
    /// Base HSV color values `[H, S, V]`. `H` is 0.0..1.0 (scaled to
    /// 360 for color math); `S` and `V` are 0.0..1.0.
    #[serde(default = "default_hsv", rename = "HSV")]
    pub hsv: [f64; 3],

    #[serde(default = "HsvMultiplier::dark")]
    pub dark: HsvMultiplier,
    #[serde(default = "HsvMultiplier::mid")]
    pub mid: HsvMultiplier,
    #[serde(default = "HsvMultiplier::symbol")]
    pub symbol: HsvMultiplier,
    #[serde(default = "HsvMultiplier::head")]
    pub head: HsvMultiplier,
    #[serde(default = "HsvMultiplier::grey")]
    pub grey: HsvMultiplier,
    #[serde(default = "HsvMultiplier::bright")]
    pub bright: HsvMultiplier,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            hsv: [0.8, 0.5, 0.5],
            dark: HsvMultiplier::dark(),
            mid: HsvMultiplier::mid(),
            symbol: HsvMultiplier::symbol(),
            head: HsvMultiplier::head(),
            grey: HsvMultiplier::grey(),
            bright: HsvMultiplier::bright(),
        }
    }
}

impl StyleConfig {
    /// Merge another `StyleConfig` into this one; `other` wins.
    pub fn merge(&mut self, other: &StyleConfig) {
        self.hsv = other.hsv;
        self.dark = other.dark;
        self.mid = other.mid;
        self.symbol = other.symbol;
        self.head = other.head;
        self.grey = other.grey;
        self.bright = other.bright;
    }

    /// The base HSV values as `(H, S, V)`, with `H` scaled to 0..360.
    pub fn base_hsv(&self) -> (f64, f64, f64) {
        (self.hsv[0] * 360.0, self.hsv[1], self.hsv[2])
    }
}

fn default_hsv() -> [f64; 3] {
    [0.8, 0.5, 0.5]
}
