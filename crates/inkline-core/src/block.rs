//! Shared data types for the block-level state machine.

use serde::{Deserialize, Serialize};

/// The active (or most recently finalized) block kind.
///
/// Transitions between variants are insertion-ordered and flat: the
/// core does not model nesting between different block kinds (a list
/// inside a blockquote is not represented structurally).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockKind {
    /// No block is currently open.
    None,
    Paragraph,
    /// ATX heading, level 1-3.
    Heading(u8),
    UnorderedList,
    OrderedList,
    CodeBlock,
    Blockquote,
    LinkDefinition,
    Table,
}

impl BlockKind {
    /// Whether finalizing a block of this kind, having produced
    /// output, should request a blank line before the next block.
    pub fn requires_separation(&self) -> bool {
        !matches!(self, BlockKind::None | BlockKind::LinkDefinition)
    }

    pub fn is_list(&self) -> bool {
        matches!(self, BlockKind::UnorderedList | BlockKind::OrderedList)
    }
}

impl Default for BlockKind {
    fn default() -> Self {
        BlockKind::None
    }
}

/// Column alignment for a GFM table, derived from the separator row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Alignment {
    Left,
    Center,
    Right,
}

impl Default for Alignment {
    fn default() -> Self {
        Alignment::Left
    }
}

/// A tag for an open inline emphasis span.
///
/// The emphasis stack holds these, not raw escape strings, so the
/// emitter can translate a tag to its theme-parameterized "off"
/// sequence (not a generic reset) when the span closes. This is what
/// lets a monochrome theme make every style emission a no-op by
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleTag {
    Bold,
    Italic,
    Strikeout,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separation_excludes_none_and_link_definition() {
        assert!(!BlockKind::None.requires_separation());
        assert!(!BlockKind::LinkDefinition.requires_separation());
        assert!(BlockKind::Paragraph.requires_separation());
        assert!(BlockKind::Heading(1).requires_separation());
        assert!(BlockKind::Table.requires_separation());
    }

    #[test]
    fn is_list_detects_both_list_kinds() {
        assert!(BlockKind::UnorderedList.is_list());
        assert!(BlockKind::OrderedList.is_list());
        assert!(!BlockKind::Paragraph.is_list());
    }

    #[test]
    fn default_block_kind_is_none() {
        assert_eq!(BlockKind::default(), BlockKind::None);
    }
}
