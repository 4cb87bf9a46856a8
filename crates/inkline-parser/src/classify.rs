//! The block classifier (component E): given a complete logical line
//! and the block kind currently open, decides what the line means.
//!
//! Rules are evaluated in order; the first match wins. Indentation is
//! always measured on the raw (untrimmed) line.

use inkline_core::BlockKind;
use regex::Regex;
use std::sync::LazyLock;

static LINK_DEFINITION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?x)
        ^\[([^\]]+)\]:\s*
        (\S+)
        (?:\s+(?:"([^"]*)"|'([^']*)'|\(([^)]*)\)))?
        \s*$
        "#,
    )
    .unwrap()
});

static ATX_HEADING_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(#{1,3})\s+(.*)$").unwrap());

static ORDERED_ITEM_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.\s+(.*)$").unwrap());

/// The classifier's verdict for one logical line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classified {
    /// Empty after trimming.
    Blank,
    /// `[label]: url "title"` at zero indentation.
    LinkDefinition {
        label: String,
        url: String,
        title: Option<String>,
    },
    /// 1-3 `#` followed by a space, at zero indentation.
    Heading { level: u8, content: String },
    /// `* `, `- `, or `+ ` prefixed item.
    UnorderedListItem { indent: usize, content: String },
    /// `N. ` prefixed item.
    OrderedListItem { indent: usize, content: String },
    /// `>` prefixed line.
    Blockquote { indent: usize, content: String },
    /// Leading whitespace of >= 4 spaces or a leading tab.
    IndentedCode { raw: String },
    /// A `-`/`:`/`|`/whitespace-only line containing both `|` and `-`,
    /// seen while a paragraph (or nothing) is open.
    TableSeparator { raw: String },
    /// Any line containing `|` seen while a table is open.
    TableRow { raw: String },
    /// Falls through to ordinary paragraph content.
    Paragraph { content: String },
}

fn leading_indent(line: &str) -> usize {
    line.chars().take_while(|c| *c == ' ').count()
}

fn has_leading_tab_or_wide_indent(line: &str) -> bool {
    line.starts_with('\t') || leading_indent(line) >= 4
}

fn looks_like_table_separator(trimmed: &str) -> bool {
    trimmed.contains('|')
        && trimmed.contains('-')
        && trimmed
            .chars()
            .all(|c| c == '-' || c == ':' || c == '|' || c.is_whitespace())
}

/// Classify `line` given the block kind currently open.
pub fn classify(line: &str, current: BlockKind) -> Classified {
    let trimmed = line.trim();

    if trimmed.is_empty() {
        return Classified::Blank;
    }

    if leading_indent(line) == 0 {
        if let Some(caps) = LINK_DEFINITION_RE.captures(trimmed) {
            let label = caps.get(1).unwrap().as_str().to_string();
            let url = caps.get(2).unwrap().as_str().to_string();
            let title = caps
                .get(3)
                .or_else(|| caps.get(4))
                .or_else(|| caps.get(5))
                .map(|m| m.as_str().to_string());
            return Classified::LinkDefinition { label, url, title };
        }

        if let Some(caps) = ATX_HEADING_RE.captures(trimmed) {
            let level = caps.get(1).unwrap().as_str().len() as u8;
            let content = caps.get(2).unwrap().as_str().trim().to_string();
            return Classified::Heading { level, content };
        }
    }

    if let Some(rest) = trimmed
        .strip_prefix("* ")
        .or_else(|| trimmed.strip_prefix("- "))
        .or_else(|| trimmed.strip_prefix("+ "))
    {
        return Classified::UnorderedListItem {
            indent: leading_indent(line),
            content: rest.to_string(),
        };
    }

    if let Some(caps) = ORDERED_ITEM_RE.captures(trimmed) {
        return Classified::OrderedListItem {
            indent: leading_indent(line),
            content: caps.get(1).unwrap().as_str().to_string(),
        };
    }

    if let Some(rest) = trimmed.strip_prefix('>') {
        let content = rest.strip_prefix(' ').unwrap_or(rest);
        return Classified::Blockquote {
            indent: leading_indent(line),
            content: content.to_string(),
        };
    }

    if has_leading_tab_or_wide_indent(line) {
        return Classified::IndentedCode {
            raw: line.to_string(),
        };
    }

    if matches!(current, BlockKind::Paragraph | BlockKind::None) && looks_like_table_separator(trimmed)
    {
        return Classified::TableSeparator {
            raw: trimmed.to_string(),
        };
    }

    if current == BlockKind::Table && trimmed.contains('|') {
        return Classified::TableRow {
            raw: trimmed.to_string(),
        };
    }

    Classified::Paragraph {
        content: trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_line() {
        assert_eq!(classify("   ", BlockKind::None), Classified::Blank);
    }

    #[test]
    fn link_definition() {
        let got = classify("[ref]: http://example.com \"Example\"", BlockKind::None);
        assert_eq!(
            got,
            Classified::LinkDefinition {
                label: "ref".to_string(),
                url: "http://example.com".to_string(),
                title: Some("Example".to_string()),
            }
        );
    }

    #[test]
    fn link_definition_requires_zero_indent() {
        let got = classify("  [ref]: http://example.com", BlockKind::None);
        assert!(matches!(got, Classified::Paragraph { .. }));
    }

    #[test]
    fn atx_heading_levels() {
        assert_eq!(
            classify("# Title", BlockKind::None),
            Classified::Heading {
                level: 1,
                content: "Title".to_string()
            }
        );
        assert_eq!(
            classify("### Sub", BlockKind::None),
            Classified::Heading {
                level: 3,
                content: "Sub".to_string()
            }
        );
    }

    #[test]
    fn four_hashes_is_paragraph() {
        let got = classify("#### Not a heading", BlockKind::None);
        assert!(matches!(got, Classified::Paragraph { .. }));
    }

    #[test]
    fn unordered_list_markers() {
        for marker in ["* ", "- ", "+ "] {
            let line = format!("{}item", marker);
            let got = classify(&line, BlockKind::None);
            assert_eq!(
                got,
                Classified::UnorderedListItem {
                    indent: 0,
                    content: "item".to_string()
                }
            );
        }
    }

    #[test]
    fn ordered_list_item() {
        let got = classify("12. eggs", BlockKind::None);
        assert_eq!(
            got,
            Classified::OrderedListItem {
                indent: 0,
                content: "eggs".to_string()
            }
        );
    }

    #[test]
    fn blockquote_strips_one_space() {
        let got = classify("> quoted text", BlockKind::None);
        assert_eq!(
            got,
            Classified::Blockquote {
                indent: 0,
                content: "quoted text".to_string()
            }
        );
    }

    #[test]
    fn indented_code_by_spaces_or_tab() {
        assert!(matches!(
            classify("    let x = 1;", BlockKind::None),
            Classified::IndentedCode { .. }
        ));
        assert!(matches!(
            classify("\tlet x = 1;", BlockKind::None),
            Classified::IndentedCode { .. }
        ));
    }

    #[test]
    fn table_separator_only_from_paragraph_or_none() {
        let sep = "-------- | --------";
        assert!(matches!(
            classify(sep, BlockKind::Paragraph),
            Classified::TableSeparator { .. }
        ));
        assert!(matches!(
            classify(sep, BlockKind::None),
            Classified::TableSeparator { .. }
        ));
        assert!(!matches!(
            classify(sep, BlockKind::Blockquote),
            Classified::TableSeparator { .. }
        ));
    }

    #[test]
    fn table_row_only_while_table_open() {
        let row = "a | b";
        assert!(matches!(
            classify(row, BlockKind::Table),
            Classified::TableRow { .. }
        ));
        assert!(matches!(
            classify(row, BlockKind::Paragraph),
            Classified::Paragraph { .. }
        ));
    }

    #[test]
    fn default_is_paragraph() {
        let got = classify("Just words.", BlockKind::None);
        assert_eq!(
            got,
            Classified::Paragraph {
                content: "Just words.".to_string()
            }
        );
    }
}
