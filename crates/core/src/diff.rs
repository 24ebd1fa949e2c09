//! Classifies how much a code snapshot changed since the previous one.
//!
//! The policy is a cheap, language-agnostic line heuristic: it exists to
//! keep the interviewer from commenting on every keystroke while still
//! reacting to real rewrites. Over-triggering is bounded by the comment
//! cooldown in the engine, so the thresholds lean permissive.

use similar::{ChangeTag, TextDiff};

/// How a new snapshot relates to the one before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// First non-empty snapshot of the session.
    Initial,
    /// Ordinary in-progress edit.
    Incremental,
    /// A rewrite large enough to warrant a spoken follow-up.
    DrasticChange,
}

/// Outcome of comparing two snapshots. Produced fresh per update, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffResult {
    pub kind: ChangeKind,
    pub significant: bool,
}

/// An initial snapshot shorter than this is not worth a comment.
const INITIAL_MIN_CHARS: usize = 30;
/// Fraction of changed lines beyond which an edit counts as drastic.
const DRASTIC_RATIO: f64 = 0.4;
/// Added and removed counts that both exceed this mark a block rewrite.
const DRASTIC_LINE_COUNT: usize = 5;

/// Compares two editor snapshots and decides whether the change warrants
/// commentary.
pub fn analyze(old_code: &str, new_code: &str) -> DiffResult {
    let old = old_code.trim();
    if old.is_empty() {
        return DiffResult {
            kind: ChangeKind::Initial,
            significant: new_code.trim().chars().count() > INITIAL_MIN_CHARS,
        };
    }

    let new = new_code.trim();
    let diff = TextDiff::from_lines(old, new);
    let mut added = 0usize;
    let mut removed = 0usize;
    for change in diff.iter_all_changes() {
        match change.tag() {
            ChangeTag::Insert => added += 1,
            ChangeTag::Delete => removed += 1,
            ChangeTag::Equal => {}
        }
    }

    let total = old.lines().count().max(new.lines().count()).max(1);
    let change_ratio = (added + removed) as f64 / total as f64;

    if change_ratio > DRASTIC_RATIO || (removed > DRASTIC_LINE_COUNT && added > DRASTIC_LINE_COUNT) {
        DiffResult {
            kind: ChangeKind::DrasticChange,
            significant: true,
        }
    } else {
        DiffResult {
            kind: ChangeKind::Incremental,
            significant: false,
        }
    }
}
