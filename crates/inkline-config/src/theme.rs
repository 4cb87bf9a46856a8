//! The style palette consumed by the formatter and state machine.
//!
//! A `Theme` is a passive record: it never mutates and the renderer
//! never inspects it beyond reading fields. Two presets are built in:
//! [`Theme::colored`], derived from a [`ComputedStyle`], and
//! [`Theme::monochrome`], in which every style field is empty and every
//! color field is absent, so that emitting any of them is a no-op.

use crate::computed::ComputedStyle;
use inkline_ansi::codes;

/// An on/off escape-code pair for one emphasis kind.
///
/// Unlike `inkline_ansi::style::StylePair`, these are owned strings so
/// a theme can substitute role-derived colors instead of the bare SGR
/// bold/italic/strikeout codes.
pub type StylePair = (String, String);

/// The style palette consumed by the inline formatter and block state
/// machine.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Heading styles for levels 1..=3, indexed `[level - 1]`.
    pub heading: [String; 3],
    /// Color applied to list bullets and ordered-list numbers.
    pub list_bullet_color: String,
    /// Unordered list item prefix (e.g. `"•"`); the writer adds the
    /// separating space after the reset code.
    pub unordered_prefix: String,
    /// Ordered list item prefix format; `{}` is replaced by the number.
    pub ordered_prefix_format: String,
    /// Color applied to the blockquote bar.
    pub blockquote_color: String,
    /// Blockquote bar glyph (e.g. `"│ "`).
    pub blockquote_prefix: String,
    /// Style applied around code block lines.
    pub code_block_style: String,
    /// Style applied to inline link text.
    pub link_text_style: String,
    /// Style applied to an inline link's URL.
    pub link_url_style: String,
    /// Bold on/off pair.
    pub bold: StylePair,
    /// Italic on/off pair.
    pub italic: StylePair,
    /// Strikeout on/off pair.
    pub strikeout: StylePair,
    /// Text written before an image's alt text.
    pub image_prefix: String,
    /// Text written after an image's alt text.
    pub image_suffix: String,
    /// Style applied to an image's alt text.
    pub image_alt_style: String,
    /// Marker for an unchecked task-list item (`[ ]`).
    pub task_unchecked: String,
    /// Marker for a checked task-list item (`[x]`).
    pub task_checked: String,
    /// Character used to draw a horizontal rule.
    pub hr_char: char,
}

impl Theme {
    /// Build the colored default theme from pre-computed HSV-derived
    /// role colors.
    pub fn colored(computed: &ComputedStyle) -> Self {
        Self {
            heading: [
                computed.head_fg.clone(),
                computed.head_fg.clone(),
                computed.mid_fg.clone(),
            ],
            list_bullet_color: computed.symbol_fg.clone(),
            unordered_prefix: "•".to_string(),
            ordered_prefix_format: "{}.".to_string(),
            blockquote_color: computed.grey_fg.clone(),
            blockquote_prefix: "│ ".to_string(),
            code_block_style: computed.dark_bg.clone(),
            link_text_style: computed.bright_fg.clone(),
            link_url_style: computed.grey_fg.clone(),
            bold: (codes::BOLD_ON.to_string(), codes::BOLD_OFF.to_string()),
            italic: (codes::ITALIC_ON.to_string(), codes::ITALIC_OFF.to_string()),
            strikeout: (
                codes::STRIKEOUT_ON.to_string(),
                codes::STRIKEOUT_OFF.to_string(),
            ),
            image_prefix: "[Image: ".to_string(),
            image_suffix: "]".to_string(),
            image_alt_style: computed.symbol_fg.clone(),
            task_unchecked: "[ ]".to_string(),
            task_checked: "[x]".to_string(),
            hr_char: '─',
        }
    }

    /// Build the monochrome theme: empty style strings, nil colors.
    ///
    /// Prefixes and markers that are plain text rather than color are
    /// kept (the task markers and list bullets must still be visible
    /// with colors disabled), only the SGR-bearing fields are emptied.
    pub fn monochrome() -> Self {
        Self {
            heading: [String::new(), String::new(), String::new()],
            list_bullet_color: String::new(),
            unordered_prefix: "-".to_string(),
            ordered_prefix_format: "{}.".to_string(),
            blockquote_color: String::new(),
            blockquote_prefix: "| ".to_string(),
            code_block_style: String::new(),
            link_text_style: String::new(),
            link_url_style: String::new(),
            bold: (String::new(), String::new()),
            italic: (String::new(), String::new()),
            strikeout: (String::new(), String::new()),
            image_prefix: "[Image: ".to_string(),
            image_suffix: "]".to_string(),
            image_alt_style: String::new(),
            task_unchecked: "[ ]".to_string(),
            task_checked: "[x]".to_string(),
            hr_char: '-',
        }
    }

    /// The style for heading level `level` (1..=3, clamped).
    pub fn heading_style(&self, level: u8) -> &str {
        let idx = level.saturating_sub(1).min(2) as usize;
        &self.heading[idx]
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::monochrome()
    }
}
