// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Context-format diffs.
//!
//! Output follows the classic `diff -c` layout:
//!
//! ```text
//! *** generated
//! --- expected
//! ***************
//! *** 1,3 ****
//!   a
//! ! b
//!   c
//! --- 1,3 ----
//!   a
//! ! B
//!   c
//! ```

use similar::{DiffTag, TextDiff};

/// Unchanged lines shown around each change.
pub const CONTEXT_LINES: usize = 3;

/// Label for the text produced by the program under test.
pub const GENERATED: &str = "generated";
/// Label for the golden fixture text.
pub const EXPECTED: &str = "expected";

/// Render a line-oriented context diff from `old` to `new`.
///
/// Returns an empty string when the texts have no line differences.
pub fn context_diff(old: &str, new: &str, old_label: &str, new_label: &str) -> String {
    let diff = TextDiff::from_lines(old, new);
    let old_lines = diff.old_slices();
    let new_lines = diff.new_slices();

    let mut out = String::new();
    for group in diff.grouped_ops(CONTEXT_LINES) {
        let (Some(first), Some(last)) = (group.first(), group.last()) else {
            continue;
        };
        if out.is_empty() {
            out.push_str(&format!("*** {old_label}\n--- {new_label}\n"));
        }
        out.push_str("***************\n");

        let old_range = format_range(first.old_range().start, last.old_range().end);
        out.push_str(&format!("*** {old_range} ****\n"));
        if group
            .iter()
            .any(|op| matches!(op.tag(), DiffTag::Replace | DiffTag::Delete))
        {
            for op in &group {
                let (tag, range, _) = op.as_tag_tuple();
                if tag != DiffTag::Insert {
                    for line in &old_lines[range] {
                        push_line(&mut out, tag, line);
                    }
                }
            }
        }

        let new_range = format_range(first.new_range().start, last.new_range().end);
        out.push_str(&format!("--- {new_range} ----\n"));
        if group
            .iter()
            .any(|op| matches!(op.tag(), DiffTag::Replace | DiffTag::Insert))
        {
            for op in &group {
                let (tag, _, range) = op.as_tag_tuple();
                if tag != DiffTag::Delete {
                    for line in &new_lines[range] {
                        push_line(&mut out, tag, line);
                    }
                }
            }
        }
    }
    out
}

fn push_line(out: &mut String, tag: DiffTag, line: &str) {
    out.push_str(match tag {
        DiffTag::Equal => "  ",
        DiffTag::Delete => "- ",
        DiffTag::Insert => "+ ",
        DiffTag::Replace => "! ",
    });
    out.push_str(line);
    if !line.ends_with('\n') {
        out.push('\n');
    }
}

/// One-based `start,end` range; a single line prints as just its number and
/// an empty range as the line before it.
fn format_range(start: usize, stop: usize) -> String {
    let len = stop - start;
    let beginning = if len == 0 { start } else { start + 1 };
    if len <= 1 {
        beginning.to_string()
    } else {
        format!("{},{}", beginning, beginning + len - 1)
    }
}

#[cfg(test)]
#[path = "diff_tests.rs"]
mod tests;
