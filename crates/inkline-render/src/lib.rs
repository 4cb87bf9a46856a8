//! Inkline Render
//!
//! The streaming writer: feeds characters/strings through
//! [`inkline_parser::LineBuffer`] to assemble logical lines, classifies
//! each line with [`inkline_parser::classify`] against the block
//! currently open, and dispatches it through the inline formatter (G),
//! the word wrapper ([`text::wrap`]), and the table sub-state
//! ([`table::TableState`]) as the per-block emission rules require.
//!
//! [`Writer`] is `RendererState`: the single mutable record that walks
//! the block state machine one logical line at a time and writes
//! terminal-ready bytes to its sink as soon as the grammar allows.

pub mod code;
pub mod heading;
pub mod list;
pub mod table;
pub mod text;

pub use table::TableState;

use std::collections::HashMap;
use std::io::Write;

use inkline_ansi::codes;
use inkline_config::Options;
use inkline_core::{BlockKind, InklineError, Result};
use inkline_parser::{classify, format_inline, Classified, InlineStyles, LineBuffer, LinkDefinition, normalize_label};

fn classified_kind(classified: &Classified) -> BlockKind {
    match classified {
        Classified::Blank => BlockKind::None,
        Classified::LinkDefinition { .. } => BlockKind::LinkDefinition,
        Classified::Heading { level, .. } => BlockKind::Heading(*level),
        Classified::UnorderedListItem { .. } => BlockKind::UnorderedList,
        Classified::OrderedListItem { .. } => BlockKind::OrderedList,
        Classified::Blockquote { .. } => BlockKind::Blockquote,
        Classified::IndentedCode { .. } => BlockKind::CodeBlock,
        Classified::TableSeparator { .. } => BlockKind::Table,
        Classified::TableRow { .. } => BlockKind::Table,
        Classified::Paragraph { .. } => BlockKind::Paragraph,
    }
}

/// The streaming Markdown-to-ANSI writer.
///
/// `active_styles` from the data model isn't a real field here:
/// `format_inline` opens and closes every emphasis span within the one
/// fragment it's given, so the stack is empty on every return by
/// construction, which is all the "empty at every block boundary"
/// invariant asks for.
pub struct Writer<W: Write> {
    sink: Option<W>,
    options: Options,

    current_block: BlockKind,
    last_finalized_block: BlockKind,
    last_finalized_produced_output: bool,
    needs_separation_before_next_block: bool,

    paragraph_buffer: String,
    line_buffer: LineBuffer,
    ordered_list_counter: usize,
    link_definitions: HashMap<String, LinkDefinition>,
    table_state: Option<TableState>,

    disposed: bool,
}

impl<W: Write> Writer<W> {
    pub fn new(sink: W, options: Options) -> Self {
        Self {
            sink: Some(sink),
            options,
            current_block: BlockKind::None,
            last_finalized_block: BlockKind::None,
            last_finalized_produced_output: false,
            needs_separation_before_next_block: false,
            paragraph_buffer: String::new(),
            line_buffer: LineBuffer::new(),
            ordered_list_counter: 0,
            link_definitions: HashMap::new(),
            table_state: None,
            disposed: false,
        }
    }

    /// Feed one character of input.
    pub fn write_char(&mut self, c: char) -> Result<()> {
        self.guard_disposed()?;
        if let Some(line) = self.line_buffer.write_char(c) {
            self.process_line(&line)?;
        }
        Ok(())
    }

    /// Feed a chunk of input that may contain any number of line
    /// terminators (CRLF, LF, or bare CR).
    pub fn write_string(&mut self, s: &str) -> Result<()> {
        self.guard_disposed()?;
        let mut lines = Vec::new();
        self.line_buffer.write_string(s, &mut lines);
        for line in lines {
            self.process_line(&line)?;
        }
        Ok(())
    }

    /// Feed one complete logical line (terminator appended for you).
    pub fn write_line(&mut self, s: &str) -> Result<()> {
        self.guard_disposed()?;
        let mut lines = Vec::new();
        self.line_buffer.write_line(s, &mut lines);
        for line in lines {
            self.process_line(&line)?;
        }
        Ok(())
    }

    /// Feed a single blank line.
    pub fn write_blank_line(&mut self) -> Result<()> {
        self.write_char('\n')
    }

    /// Flush the underlying sink without finalizing anything.
    pub fn flush(&mut self) -> Result<()> {
        self.guard_disposed()?;
        if let Some(sink) = self.sink.as_mut() {
            sink.flush()?;
        }
        Ok(())
    }

    /// Finalize whatever block is still open (including any residue
    /// left in the line buffer) and flush the sink. Idempotent:
    /// calling it again is a no-op. Implicitly invoked on drop.
    pub fn complete(&mut self) -> Result<()> {
        if self.disposed {
            return Ok(());
        }
        if let Some(residue) = self.line_buffer.take_residue() {
            self.process_line(&residue)?;
        }
        let current = self.current_block;
        self.finalize_block(current)?;
        self.current_block = BlockKind::None;
        if let Some(sink) = self.sink.as_mut() {
            sink.flush()?;
        }
        self.disposed = true;
        Ok(())
    }

    /// Consume the writer, finalizing if needed, and hand back the
    /// sink.
    pub fn into_inner(mut self) -> Result<W> {
        self.complete()?;
        self.sink.take().ok_or(InklineError::Disposed)
    }

    fn guard_disposed(&self) -> Result<()> {
        if self.disposed {
            Err(InklineError::Disposed)
        } else {
            Ok(())
        }
    }

    fn write_raw(&mut self, s: &str) -> Result<()> {
        if let Some(sink) = self.sink.as_mut() {
            sink.write_all(s.as_bytes())?;
        }
        Ok(())
    }

    fn style_wrap(&self, on: &str, text: &str) -> String {
        if on.is_empty() {
            text.to_string()
        } else {
            format!("{}{}{}", on, text, codes::RESET)
        }
    }

    fn inline_styles(&self) -> InlineStyles<'_> {
        let theme = &self.options.theme;
        InlineStyles {
            bold: (theme.bold.0.as_str(), theme.bold.1.as_str()),
            italic: (theme.italic.0.as_str(), theme.italic.1.as_str()),
            strikeout: (theme.strikeout.0.as_str(), theme.strikeout.1.as_str()),
            link_text: theme.link_text_style.as_str(),
            link_url: theme.link_url_style.as_str(),
            image_prefix: theme.image_prefix.as_str(),
            image_suffix: theme.image_suffix.as_str(),
            image_alt: theme.image_alt_style.as_str(),
            strip_html: self.options.strip_html,
            use_hyperlinks: self.options.use_hyperlinks,
        }
    }

    /// The per-line step of the block state machine.
    fn process_line(&mut self, line: &str) -> Result<()> {
        let blank = line.trim().is_empty();

        if self.needs_separation_before_next_block && !blank {
            self.write_raw("\n")?;
            self.needs_separation_before_next_block = false;
        }

        if blank {
            let current = self.current_block;
            self.finalize_block(current)?;
            self.current_block = BlockKind::None;
            return Ok(());
        }

        let classified = classify(line, self.current_block);
        let new_kind = classified_kind(&classified);
        let transitioning = new_kind != self.current_block;

        if transitioning && self.current_block != BlockKind::None {
            let paragraph_to_table =
                self.current_block == BlockKind::Paragraph && new_kind == BlockKind::Table;
            if paragraph_to_table {
                // The buffered paragraph becomes the table header; it
                // never goes through the ordinary paragraph finalize.
                self.last_finalized_block = BlockKind::Paragraph;
                self.last_finalized_produced_output = !self.paragraph_buffer.is_empty();
            } else {
                let current = self.current_block;
                self.finalize_block(current)?;
            }
        }

        self.current_block = new_kind;
        if transitioning && new_kind == BlockKind::OrderedList {
            self.ordered_list_counter = 0;
        }

        self.dispatch(classified)
    }

    fn dispatch(&mut self, classified: Classified) -> Result<()> {
        match classified {
            Classified::Blank => Ok(()),
            Classified::LinkDefinition { label, url, title } => {
                self.link_definitions
                    .insert(normalize_label(&label), LinkDefinition { url, title });
                // Never forces a blank line before or after itself.
                self.needs_separation_before_next_block = false;
                Ok(())
            }
            Classified::Heading { level, content } => self.emit_heading(level, &content),
            Classified::UnorderedListItem { indent, content } => {
                self.emit_list_item(indent, false, &content)
            }
            Classified::OrderedListItem { indent, content } => {
                self.emit_list_item(indent, true, &content)
            }
            Classified::Blockquote { indent, content } => self.emit_blockquote_line(indent, &content),
            Classified::IndentedCode { raw } => self.emit_code_line(&raw),
            Classified::TableSeparator { raw } => self.begin_table(&raw),
            Classified::TableRow { raw } => self.push_table_row(&raw),
            Classified::Paragraph { content } => self.append_paragraph(&content),
        }
    }

    fn emit_heading(&mut self, level: u8, content: &str) -> Result<()> {
        let formatted = format_inline(content, &self.inline_styles(), &self.link_definitions);
        let style = self.options.theme.heading_style(level).to_string();
        let lines = heading::render(&style, &formatted, self.options.console_width);
        self.write_raw(&lines.join("\n"))?;
        self.write_raw("\n\n")
    }

    fn emit_list_item(&mut self, indent: usize, ordered: bool, content: &str) -> Result<()> {
        let candidate_counter = self.ordered_list_counter + 1;
        let (bullet, rest) = list::select_bullet(content, ordered, candidate_counter);
        if ordered && matches!(bullet, list::Bullet::Ordered(_)) {
            self.ordered_list_counter = candidate_counter;
        }

        let marker = bullet.text(&self.options.theme);
        let colored_marker = self.style_wrap(&self.options.theme.list_bullet_color, &marker);
        let formatted = format_inline(rest, &self.inline_styles(), &self.link_definitions);
        let indent_str = " ".repeat(indent);
        self.write_raw(&format!("{}{} {}\n", indent_str, colored_marker, formatted))
    }

    fn emit_blockquote_line(&mut self, indent: usize, content: &str) -> Result<()> {
        let indent_str = " ".repeat(indent);
        let prefix = self.style_wrap(
            &self.options.theme.blockquote_color,
            &self.options.theme.blockquote_prefix,
        );
        self.write_raw(&format!("{}{}{}\n", indent_str, prefix, content))
    }

    fn emit_code_line(&mut self, raw: &str) -> Result<()> {
        let previous_was_list = self.last_finalized_block.is_list();
        let stripped = code::strip_indent(raw, previous_was_list).to_string();
        self.write_raw(&stripped)?;
        self.write_raw("\n")
    }

    fn begin_table(&mut self, separator_raw: &str) -> Result<()> {
        let header = std::mem::take(&mut self.paragraph_buffer);
        self.table_state = Some(TableState::new(&header, separator_raw));
        Ok(())
    }

    fn push_table_row(&mut self, raw: &str) -> Result<()> {
        if let Some(table) = self.table_state.as_mut() {
            table.push_row(raw);
        }
        Ok(())
    }

    fn append_paragraph(&mut self, content: &str) -> Result<()> {
        if !self.paragraph_buffer.is_empty() {
            let last_is_space = self.paragraph_buffer.ends_with(char::is_whitespace);
            let first_is_space = content.starts_with(char::is_whitespace);
            if !last_is_space && !first_is_space {
                self.paragraph_buffer.push(' ');
            }
        }
        self.paragraph_buffer.push_str(content);
        Ok(())
    }

    /// Finalize `kind` (the block that was open), writing out whatever
    /// its closing emits and updating the separation bookkeeping.
    fn finalize_block(&mut self, kind: BlockKind) -> Result<()> {
        let produced_output = match kind {
            BlockKind::Paragraph => {
                if self.paragraph_buffer.is_empty() {
                    false
                } else {
                    let formatted =
                        format_inline(&self.paragraph_buffer, &self.inline_styles(), &self.link_definitions);
                    let lines = text::wrap(&formatted, self.options.console_width);
                    self.write_raw(&lines.join("\n"))?;
                    self.write_raw("\n")?;
                    self.paragraph_buffer.clear();
                    true
                }
            }
            BlockKind::CodeBlock => {
                if self.options.enable_colors {
                    self.write_raw(codes::RESET)?;
                }
                true
            }
            BlockKind::UnorderedList | BlockKind::OrderedList => {
                self.ordered_list_counter = 0;
                true
            }
            BlockKind::Heading(_) => true,
            BlockKind::Blockquote => true,
            BlockKind::LinkDefinition => false,
            BlockKind::Table => {
                if let Some(table) = self.table_state.take() {
                    let lines = table.render();
                    for line in &lines {
                        self.write_raw(line)?;
                        self.write_raw("\n")?;
                    }
                    true
                } else {
                    false
                }
            }
            BlockKind::None => false,
        };

        self.last_finalized_block = kind;
        self.last_finalized_produced_output = produced_output;

        // Headings already self-terminate with their own blank line;
        // routing them through the generic flag would double it up.
        let sets_separation = kind.requires_separation() && !matches!(kind, BlockKind::Heading(_));
        if sets_separation && produced_output {
            self.needs_separation_before_next_block = true;
        }

        Ok(())
    }
}

impl<W: Write> Drop for Writer<W> {
    fn drop(&mut self) {
        let _ = self.complete();
    }
}

/// Render a complete Markdown string in one call, using the streaming
/// writer under the hood.
pub fn render_to_vec(markdown: &str, options: Options) -> Result<Vec<u8>> {
    let mut writer = Writer::new(Vec::new(), options);
    writer.write_string(markdown)?;
    writer.into_inner()
}

/// As [`render_to_vec`], decoding the result as UTF-8 (inkline never
/// emits invalid UTF-8, so this never loses data on well-formed input).
pub fn render_to_string(markdown: &str, options: Options) -> Result<String> {
    let bytes = render_to_vec(markdown, options)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use inkline_config::Theme;

    fn mono_options(width: usize) -> Options {
        Options {
            console_width: width,
            enable_colors: false,
            strip_html: true,
            use_hyperlinks: false,
            theme: Theme::monochrome(),
        }
    }

    fn render(markdown: &str, width: usize) -> String {
        render_to_string(markdown, mono_options(width)).unwrap()
    }

    #[test]
    fn simple_paragraph_wraps_and_terminates_once() {
        let out = render(
            "This is a simple paragraph that should wrap correctly based on the console width.",
            20,
        );
        assert_eq!(
            out,
            "This is a simple\nparagraph that\nshould wrap\ncorrectly based on\nthe console width.\n"
        );
    }

    #[test]
    fn two_paragraphs_separated_by_exactly_one_blank_line() {
        let out = render("First paragraph.\n\nSecond paragraph.", 80);
        assert_eq!(out, "First paragraph.\n\nSecond paragraph.\n");
    }

    #[test]
    fn indented_code_after_a_paragraph_strips_indent() {
        let out = render("A paragraph.\n\n    let x = 1;\n    let y = 2;", 80);
        assert_eq!(out, "A paragraph.\n\nlet x = 1;\nlet y = 2;\n");
    }

    #[test]
    fn unordered_task_list_item_layout() {
        let out = render("- [ ] Task one", 80);
        assert_eq!(out, "[ ] Task one\n");
    }

    #[test]
    fn reference_link_defined_before_use_resolves() {
        let out = render("[ref]: http://example.com\n\nSee [spec][ref].", 80);
        assert_eq!(out, "See spec (http://example.com).\n");
    }

    #[test]
    fn reference_link_defined_after_use_renders_literally() {
        let out = render("See [spec][ref].\n\n[ref]: http://example.com", 80);
        assert_eq!(out, "See [spec][ref].\n\n");
    }

    #[test]
    fn simple_gfm_table() {
        let out = render(
            "Header 1 | Header 2\n-------- | --------\nRow 1 Cell 1 | Row 1 Cell 2\nRow 2 Cell 1 | Row 2 Cell 2",
            80,
        );
        assert_eq!(
            out,
            "| Header 1     | Header 2     |\n\
             | ------------ | ------------ |\n\
             | Row 1 Cell 1 | Row 1 Cell 2 |\n\
             | Row 2 Cell 1 | Row 2 Cell 2 |\n"
        );
    }

    #[test]
    fn table_followed_by_paragraph_gets_exactly_one_blank_line() {
        let out = render("A | B\n--- | ---\n1 | 2\n\nAfterwards.", 80);
        assert_eq!(
            out,
            "| A   | B   |\n\
             | --- | --- |\n\
             | 1   | 2   |\n\
             \n\
             Afterwards.\n"
        );
    }

    #[test]
    fn ordered_list_counter_resets_between_lists() {
        let out = render("1. First\n2. Second\n\n1. Restart", 80);
        assert_eq!(out, "1. First\n2. Second\n\n1. Restart\n");
    }

    #[test]
    fn writing_after_complete_is_an_error() {
        let mut writer = Writer::new(Vec::new(), mono_options(80));
        writer.complete().unwrap();
        assert!(matches!(writer.write_char('a'), Err(InklineError::Disposed)));
    }

    #[test]
    fn complete_is_idempotent() {
        let mut writer = Writer::new(Vec::new(), mono_options(80));
        writer.write_string("hello").unwrap();
        writer.complete().unwrap();
        writer.complete().unwrap();
    }

    #[test]
    fn heading_is_followed_by_exactly_one_blank_line() {
        let out = render("# Title\n\nBody text.", 80);
        assert_eq!(out, "Title\n\nBody text.\n");
    }

    #[test]
    fn monochrome_output_never_contains_escape_bytes() {
        let out = render(
            "# Heading\n\n**bold** and _em_ and [link](http://example.com)\n\n- item one\n- item two",
            80,
        );
        assert!(!out.contains('\x1b'));
    }
}
