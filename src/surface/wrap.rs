//! Greedy line wrapping with pre-wrap semantics.
//!
//! Hard newlines are kept. A line breaks after the last space that fits;
//! a word longer than the line breaks mid-word. Spaces at a break point
//! hang past the edge and are dropped from the output.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Wrap `text` into lines no wider than `columns` display cells.
///
/// Always returns at least one line (possibly empty). A `columns` of zero is
/// treated as one. A single character wider than `columns` gets a line of its own.
pub fn wrap_text(text: &str, columns: usize) -> Vec<String> {
    let columns = columns.max(1);
    let mut out = Vec::new();
    for hard_line in text.split('\n') {
        wrap_line(hard_line, columns, &mut out);
    }
    out
}

fn wrap_line(line: &str, columns: usize, out: &mut Vec<String>) {
    let mut current = String::new();
    let mut width = 0usize;
    // Byte offset in `current` of the last space a line may end at.
    let mut break_at: Option<usize> = None;
    let mut hanging = false;

    for ch in line.chars() {
        let ch_width = ch.width().unwrap_or(0);

        if hanging && ch == ' ' {
            continue;
        }
        hanging = false;

        while width > 0 && width + ch_width > columns {
            if ch == ' ' {
                out.push(std::mem::take(&mut current));
                width = 0;
                break_at = None;
                hanging = true;
                break;
            }
            match break_at.take() {
                Some(at) => {
                    let rest = current.split_off(at + 1);
                    current.truncate(at);
                    // The whole run of spaces before the break hangs, not just the last one.
                    let kept = current.trim_end_matches(' ').len();
                    if kept > 0 {
                        current.truncate(kept);
                    }
                    out.push(std::mem::replace(&mut current, rest));
                    width = current.width();
                }
                None => {
                    out.push(std::mem::take(&mut current));
                    width = 0;
                }
            }
        }
        if hanging {
            continue;
        }

        if ch == ' ' && width > 0 {
            break_at = Some(current.len());
        }
        current.push(ch);
        width += ch_width;
    }
    out.push(current);
}
