// src/present/tree.rs
//! Binary-heap-shaped arrangement of a flat label list.
//!
//! Labels are placed by list position only: level 0 takes one label, level 1
//! the next two, level 2 the next four, and so on. No parent/child relation
//! between labels is implied.

use super::views::TreeLayout;

const LEVEL_GAP: &str = "     ";
const BRANCH: &str = "/   \\";

impl TreeLayout {
    #[must_use]
    pub fn from_labels(author: impl Into<String>, labels: &[String]) -> Self {
        let mut levels = Vec::new();
        let mut rest = labels;
        let mut width = 1usize;
        while !rest.is_empty() {
            let (level, tail) = rest.split_at(width.min(rest.len()));
            levels.push(level.to_vec());
            rest = tail;
            width = width.saturating_mul(2);
        }
        Self {
            author: author.into(),
            levels,
        }
    }

    #[must_use]
    pub fn label_count(&self) -> usize {
        self.levels.iter().map(Vec::len).sum()
    }

    /// ASCII drawing centered in `width` columns, with a branch row between
    /// consecutive levels.
    #[must_use]
    pub fn render(&self, width: usize) -> String {
        let mut lines = Vec::new();
        for (i, level) in self.levels.iter().enumerate() {
            let spaced_len = level.join(" ").chars().count();
            let padding = " ".repeat(width.saturating_sub(spaced_len) / 2);
            lines.push(format!("{padding}{}", level.join(LEVEL_GAP)));
            if i + 1 < self.levels.len() {
                let branches = vec![BRANCH; level.len()].join(" ");
                lines.push(format!("{padding}{branches}"));
            }
        }
        lines.join("\n")
    }
}
