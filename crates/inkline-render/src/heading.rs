//! Heading emission (component F's per-block rule for
//! `BlockKind::Heading`).

use crate::text::wrap;
use inkline_ansi::codes;

/// Render one heading's wrapped lines: style applied before wrapping
/// so the wrapper's escape-aware width accounting treats the on/off
/// codes as zero-width. `content` is already inline-formatted.
pub fn render(style: &str, content: &str, max_width: usize) -> Vec<String> {
    if style.is_empty() {
        return wrap(content, max_width);
    }
    let styled = format!("{}{}{}", style, content, codes::RESET);
    wrap(&styled, max_width)
}
