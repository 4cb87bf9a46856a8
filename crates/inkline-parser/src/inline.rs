//! The inline formatter (component G).
//!
//! A single forward pass over a text fragment, with a stack of open
//! emphasis spans, producing ANSI-styled output. Escapes, images,
//! inline HTML stripping, inline/reference links, emphasis markers,
//! and HTML entity decoding are all handled in one left-to-right scan
//! so that no sub-span is ever visited twice.

use crate::entities;
use inkline_ansi::{codes, sanitize};
use std::collections::HashMap;

/// A resolved link definition, keyed by normalized label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkDefinition {
    pub url: String,
    pub title: Option<String>,
}

/// Normalize a link label: trim, lowercase, collapse internal
/// whitespace runs to a single space.
pub fn normalize_label(label: &str) -> String {
    label.trim().to_lowercase().split_whitespace().collect::<Vec<_>>().join(" ")
}

/// The style fragments the formatter needs from the active theme.
/// Borrowed rather than owned: these are read-only for the duration
/// of one `format_inline` call.
pub struct InlineStyles<'a> {
    pub bold: (&'a str, &'a str),
    pub italic: (&'a str, &'a str),
    pub strikeout: (&'a str, &'a str),
    pub link_text: &'a str,
    pub link_url: &'a str,
    pub image_prefix: &'a str,
    pub image_suffix: &'a str,
    pub image_alt: &'a str,
    pub strip_html: bool,
    pub use_hyperlinks: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MarkerKind {
    BoldItalic,
    Bold,
    Italic,
    Strike,
}

const ESCAPABLE: [char; 9] = ['*', '_', '~', '[', ']', '(', ')', '\\', '!'];

/// Format one text fragment (paragraph/heading/list-item/blockquote/
/// table-cell content) into styled output.
pub fn format_inline(
    text: &str,
    styles: &InlineStyles,
    link_definitions: &HashMap<String, LinkDefinition>,
) -> String {
    let chars: Vec<char> = text.chars().collect();
    let n = chars.len();
    let mut out = String::new();
    let mut stack: Vec<MarkerKind> = Vec::new();
    let mut i = 0;

    while i < n {
        let c = chars[i];

        if c == '\\' && i + 1 < n && ESCAPABLE.contains(&chars[i + 1]) {
            out.push(chars[i + 1]);
            i += 2;
            continue;
        }

        if c == '!' && i + 1 < n && chars[i + 1] == '[' {
            if let Some((alt, consumed)) = parse_image(&chars, i) {
                out.push_str(styles.image_prefix);
                push_styled(&mut out, styles.image_alt, &alt);
                out.push_str(styles.image_suffix);
                i += consumed;
                continue;
            }
        }

        if c == '<' && styles.strip_html {
            if let Some(end) = find_html_span_end(&chars, i) {
                i = end + 1;
                continue;
            }
        }

        if c == '[' {
            if let Some((link_text, url, consumed)) = parse_inline_link(&chars, i) {
                emit_link(&mut out, styles, &link_text, &url);
                i += consumed;
                continue;
            }

            if let Some((display, label, consumed)) = parse_reference_link(&chars, i) {
                if let Some(def) = link_definitions.get(&normalize_label(&label)) {
                    emit_link(&mut out, styles, &display, &def.url);
                    i += consumed;
                    continue;
                }
                // Unresolved reference: fall through, emit `[` literally
                // and let the rest of the source render as-is.
            }
        }

        if c == '*' || c == '_' || c == '~' {
            if let Some((kind, consumed)) = parse_marker_run(&chars, i) {
                emit_marker(&mut out, &mut stack, styles, kind);
                i += consumed;
                continue;
            }
        }

        if c == '&' {
            if let Some((replacement, new_idx)) = entities::match_entity(&chars, i) {
                out.push_str(&replacement);
                i = new_idx;
                continue;
            }
        }

        out.push(c);
        i += 1;
    }

    while let Some(kind) = stack.pop() {
        out.push_str(&off_code(styles, kind));
    }

    out
}

fn on_code(styles: &InlineStyles, kind: MarkerKind) -> String {
    match kind {
        MarkerKind::BoldItalic => format!("{}{}", styles.bold.0, styles.italic.0),
        MarkerKind::Bold => styles.bold.0.to_string(),
        MarkerKind::Italic => styles.italic.0.to_string(),
        MarkerKind::Strike => styles.strikeout.0.to_string(),
    }
}

fn off_code(styles: &InlineStyles, kind: MarkerKind) -> String {
    match kind {
        MarkerKind::BoldItalic => format!("{}{}", styles.italic.1, styles.bold.1),
        MarkerKind::Bold => styles.bold.1.to_string(),
        MarkerKind::Italic => styles.italic.1.to_string(),
        MarkerKind::Strike => styles.strikeout.1.to_string(),
    }
}

fn emit_marker(out: &mut String, stack: &mut Vec<MarkerKind>, styles: &InlineStyles, kind: MarkerKind) {
    if stack.last() == Some(&kind) {
        stack.pop();
        out.push_str(&off_code(styles, kind));
    } else {
        stack.push(kind);
        out.push_str(&on_code(styles, kind));
    }
}

/// Count a run of `chars[i]` and classify it as a marker kind, if any.
/// Returns `(kind, chars_consumed)`.
fn parse_marker_run(chars: &[char], i: usize) -> Option<(MarkerKind, usize)> {
    let c = chars[i];
    let run_len = chars[i..].iter().take_while(|&&ch| ch == c).count();

    match c {
        '~' if run_len >= 2 => Some((MarkerKind::Strike, 2)),
        '*' | '_' if run_len >= 3 => Some((MarkerKind::BoldItalic, 3)),
        '*' | '_' if run_len == 2 => Some((MarkerKind::Bold, 2)),
        '*' | '_' if run_len == 1 => Some((MarkerKind::Italic, 1)),
        _ => None,
    }
}

fn emit_link(out: &mut String, styles: &InlineStyles, text: &str, url: &str) {
    let safe_url = sanitize::sanitize_url(url).unwrap_or_default();

    if styles.use_hyperlinks {
        out.push_str(codes::LINK_START);
        out.push_str(&safe_url);
        out.push('\x07');
        push_styled(out, styles.link_text, text);
        out.push_str(codes::LINK_END);
    } else {
        push_styled(out, styles.link_text, text);
        out.push_str(" (");
        push_styled(out, styles.link_url, &safe_url);
        out.push(')');
    }
}

/// Emit `text` wrapped in `on`/reset, unless `on` is empty (monochrome
/// theme) in which case no escape bytes are emitted at all.
fn push_styled(out: &mut String, on: &str, text: &str) {
    if on.is_empty() {
        out.push_str(text);
    } else {
        out.push_str(on);
        out.push_str(text);
        out.push_str(codes::RESET);
    }
}

/// Find the first unescaped `]` at or after `start`.
fn find_close_bracket(chars: &[char], start: usize) -> Option<usize> {
    let mut j = start;
    while j < chars.len() {
        if chars[j] == ']' {
            return Some(j);
        }
        j += 1;
    }
    None
}

fn find_close_paren(chars: &[char], start: usize) -> Option<usize> {
    let mut j = start;
    while j < chars.len() {
        if chars[j] == ')' {
            return Some(j);
        }
        j += 1;
    }
    None
}

/// `<...>` span starting at `i` (chars[i] == '<'). Returns the index
/// of the closing `>`, if one exists later in the fragment.
fn find_html_span_end(chars: &[char], i: usize) -> Option<usize> {
    (i + 1..chars.len()).find(|&j| chars[j] == '>')
}

/// `![alt](url ...)`. `chars[i] == '!'`, `chars[i+1] == '['`.
fn parse_image(chars: &[char], i: usize) -> Option<(String, usize)> {
    let alt_start = i + 2;
    let alt_end = find_close_bracket(chars, alt_start)?;
    if chars.get(alt_end + 1) != Some(&'(') {
        return None;
    }
    let url_start = alt_end + 2;
    let url_end = find_close_paren(chars, url_start)?;

    let alt: String = chars[alt_start..alt_end].iter().collect();
    Some((alt, url_end - i + 1))
}

/// `[text](url "title")`. `chars[i] == '['`.
fn parse_inline_link(chars: &[char], i: usize) -> Option<(String, String, usize)> {
    let text_start = i + 1;
    let text_end = find_close_bracket(chars, text_start)?;
    if chars.get(text_end + 1) != Some(&'(') {
        return None;
    }
    let url_start = text_end + 2;
    let url_end = find_close_paren(chars, url_start)?;

    let text: String = chars[text_start..text_end].iter().collect();
    let inner: String = chars[url_start..url_end].iter().collect();
    let url = inner.split_whitespace().next().unwrap_or("").to_string();

    Some((text, url, url_end - i + 1))
}

/// Reference link, the three forms `[text][label]`, `[label][]`, and
/// `[label]`. `chars[i] == '['`. Returns `(display_text, label,
/// chars_consumed)`; the caller resolves `label` against the
/// definitions map.
fn parse_reference_link(chars: &[char], i: usize) -> Option<(String, String, usize)> {
    let first_start = i + 1;
    let first_end = find_close_bracket(chars, first_start)?;
    let first: String = chars[first_start..first_end].iter().collect();

    if chars.get(first_end + 1) == Some(&'[') {
        let second_start = first_end + 2;
        let second_end = find_close_bracket(chars, second_start)?;
        let second: String = chars[second_start..second_end].iter().collect();

        return if second.is_empty() {
            // [label][]
            Some((first.clone(), first, second_end - i + 1))
        } else {
            // [text][label]
            Some((first, second, second_end - i + 1))
        };
    }

    // [label]
    Some((first.clone(), first, first_end - i + 1))
}
