//! List-item bullet selection (component F's per-block rule for
//! `BlockKind::UnorderedList`/`OrderedList`), including GFM task-list
//! detection.

use inkline_config::Theme;

/// Which bullet a list item selects, once task-list detection has run.
pub enum Bullet {
    Unordered,
    Ordered(usize),
    TaskUnchecked,
    TaskChecked,
}

impl Bullet {
    /// The bullet's plain (unstyled) text; the writer applies the
    /// theme's list-bullet color around it.
    pub fn text(&self, theme: &Theme) -> String {
        match self {
            Bullet::Unordered => theme.unordered_prefix.clone(),
            Bullet::Ordered(n) => theme.ordered_prefix_format.replace("{}", &n.to_string()),
            Bullet::TaskUnchecked => theme.task_unchecked.clone(),
            Bullet::TaskChecked => theme.task_checked.clone(),
        }
    }
}

/// Inspect `content` for a GFM task-list prefix (`[ ] `, `[x] `, or
/// `[X] `). If present, returns the task bullet and the content with
/// the prefix removed; otherwise returns the standard bullet for
/// `ordered`/`counter` and the content unchanged.
pub fn select_bullet(content: &str, ordered: bool, counter: usize) -> (Bullet, &str) {
    if let Some(rest) = content.strip_prefix("[ ] ") {
        return (Bullet::TaskUnchecked, rest);
    }
    if let Some(rest) = content.strip_prefix("[x] ").or_else(|| content.strip_prefix("[X] ")) {
        return (Bullet::TaskChecked, rest);
    }
    if ordered {
        (Bullet::Ordered(counter), content)
    } else {
        (Bullet::Unordered, content)
    }
}
