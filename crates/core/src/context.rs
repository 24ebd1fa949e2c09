//! Bounds the code text injected into model instructions.
//!
//! The most recent lines are the ones a follow-up question is about, so
//! truncation keeps the tail of the snapshot.

/// Placeholder used when the candidate has not written anything yet.
pub const NO_CODE_PLACEHOLDER: &str = "(No code written yet)";

/// Default number of trailing lines kept when truncating.
pub const MAX_CONTEXT_LINES: usize = 30;

/// Returns `code` bounded to its last `max_lines` lines.
pub fn code_context(code: &str, max_lines: usize) -> String {
    let trimmed = code.trim();
    if trimmed.is_empty() {
        return NO_CODE_PLACEHOLDER.to_string();
    }
    let lines: Vec<&str> = trimmed.lines().collect();
    if lines.len() <= max_lines {
        return trimmed.to_string();
    }
    format!(
        "... (last {max_lines} lines)\n{}",
        lines[lines.len() - max_lines..].join("\n")
    )
}
