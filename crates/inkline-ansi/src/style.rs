//! Style pairs for toggleable ANSI formatting.
//!
//! Each style is represented as a tuple of (on_code, off_code) so the
//! inline formatter's emphasis stack can hold a tag and later emit the
//! matching specific "off" code, rather than a generic reset.

use crate::codes;

/// A style pair consisting of (enable_code, disable_code).
///
/// ```
/// use inkline_ansi::style::BOLD;
/// let text = format!("{}bold text{}", BOLD.0, BOLD.1);
/// ```
pub type StylePair = (&'static str, &'static str);

/// Bold formatting pair.
pub const BOLD: StylePair = (codes::BOLD_ON, codes::BOLD_OFF);

/// Underline formatting pair.
pub const UNDERLINE: StylePair = (codes::UNDERLINE_ON, codes::UNDERLINE_OFF);

/// Italic formatting pair.
pub const ITALIC: StylePair = (codes::ITALIC_ON, codes::ITALIC_OFF);

/// Strikeout formatting pair.
pub const STRIKEOUT: StylePair = (codes::STRIKEOUT_ON, codes::STRIKEOUT_OFF);

/// Link formatting pair (OSC 8 hyperlinks).
/// Note: the URL must be inserted between LINK.0 and the closing escape.
pub const LINK: StylePair = (codes::LINK_START, codes::LINK_END);
