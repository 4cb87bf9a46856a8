//! The word wrapper (component H).
//!
//! Operates on already-styled text: a fragment may contain ANSI SGR
//! escapes (`ESC [ ... letter`) and OSC-8 hyperlink sequences, neither
//! of which should consume any of the caller's visible width budget.

use unicode_width::UnicodeWidthChar;

/// One token out of a styled fragment: either a chunk of escape bytes
/// (zero visible width) or a single visible character.
enum Token {
    Escape(String),
    Char(char),
}

fn tokenize(text: &str) -> Vec<Token> {
    let chars: Vec<char> = text.chars().collect();
    let mut tokens = Vec::with_capacity(chars.len());
    let mut i = 0;
    while i < chars.len() {
        if chars[i] == '\x1b' {
            let (escape, consumed) = scan_escape(&chars, i);
            tokens.push(Token::Escape(escape));
            i += consumed;
        } else {
            tokens.push(Token::Char(chars[i]));
            i += 1;
        }
    }
    tokens
}

/// Scan one escape sequence starting at `chars[i] == '\x1b'`. Handles
/// CSI (`ESC [ ... letter`) and OSC-8 (`ESC ] ... BEL` or `ESC ] ...
/// ESC \`) forms; an unrecognized lone `ESC` is consumed by itself.
fn scan_escape(chars: &[char], i: usize) -> (String, usize) {
    if chars.get(i + 1) == Some(&'[') {
        let mut j = i + 2;
        while j < chars.len() && !chars[j].is_ascii_alphabetic() {
            j += 1;
        }
        let end = j.min(chars.len().saturating_sub(1));
        return (chars[i..=end].iter().collect(), end - i + 1);
    }

    if chars.get(i + 1) == Some(&']') {
        let mut j = i + 2;
        while j < chars.len() {
            if chars[j] == '\x07' {
                return (chars[i..=j].iter().collect(), j - i + 1);
            }
            if chars[j] == '\x1b' && chars.get(j + 1) == Some(&'\\') {
                return (chars[i..=j + 1].iter().collect(), j + 2 - i);
            }
            j += 1;
        }
        return (chars[i..].iter().collect(), chars.len() - i);
    }

    ("\x1b".to_string(), 1)
}

/// Visible display width of a styled fragment, ignoring escape bytes.
fn display_width(text: &str) -> usize {
    tokenize(text)
        .iter()
        .map(|t| match t {
            Token::Escape(_) => 0,
            Token::Char(c) => UnicodeWidthChar::width(*c).unwrap_or(0),
        })
        .sum()
}

/// Wrap a styled fragment into lines of visible width `<= max_width`.
///
/// Breaks at the most recent space when a line would overflow; breaks
/// mid-word at the width boundary if the current line has no space to
/// back up to. Returns the wrapped lines with no trailing newline —
/// callers join them with `\n` and add their own block terminator.
pub fn wrap(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut line = String::new();
    let mut column = 0usize;
    // Byte offset of the most recent space in `line`, if any.
    let mut break_at: Option<usize> = None;

    for token in tokenize(text) {
        match token {
            Token::Escape(escape) => line.push_str(&escape),
            Token::Char(c) => {
                let width = UnicodeWidthChar::width(c).unwrap_or(0);
                if column + width > max_width && column > 0 {
                    if let Some(pos) = break_at {
                        let remainder = line.split_off(pos);
                        lines.push(line);
                        line = remainder.trim_start_matches(' ').to_string();
                        column = display_width(&line);
                    } else {
                        lines.push(std::mem::take(&mut line));
                        column = 0;
                    }
                    break_at = None;
                }

                if c == ' ' {
                    break_at = Some(line.len());
                }
                line.push(c);
                column += width;
            }
        }
    }

    lines.push(line);
    lines
}
