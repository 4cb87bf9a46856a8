//! The line buffer (component D): a pure tokenizer that turns a
//! character/string stream into complete logical lines.
//!
//! It never re-emits input and never inspects content; it only knows
//! about `\n`, `\r`, and everything else.

/// Accumulates raw input and yields complete logical lines.
#[derive(Debug, Default, Clone)]
pub struct LineBuffer {
    buf: String,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self { buf: String::new() }
    }

    /// Feed one character. Returns `Some(line)` if this character
    /// completed a logical line.
    pub fn write_char(&mut self, c: char) -> Option<String> {
        match c {
            '\n' => {
                if self.buf.ends_with('\r') {
                    self.buf.pop();
                }
                Some(std::mem::take(&mut self.buf))
            }
            '\r' => None,
            other => {
                self.buf.push(other);
                None
            }
        }
    }

    /// Feed a string, appending completed lines to `out` in order.
    pub fn write_string(&mut self, s: &str, out: &mut Vec<String>) {
        for c in s.chars() {
            if let Some(line) = self.write_char(c) {
                out.push(line);
            }
        }
    }

    /// `write_string(s)` followed by a line terminator.
    pub fn write_line(&mut self, s: &str, out: &mut Vec<String>) {
        self.write_string(s, out);
        if let Some(line) = self.write_char('\n') {
            out.push(line);
        }
    }

    /// Whether there is unterminated residue pending.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// On `complete()`: forward any non-empty residue as a final line.
    pub fn take_residue(&mut self) -> Option<String> {
        if self.buf.is_empty() {
            None
        } else {
            Some(std::mem::take(&mut self.buf))
        }
    }
}
