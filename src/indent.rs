//! Indentation engine.
//!
//! Computes the indentation column of a line from the block keyword that
//! encloses it and the paren depth at its first character, scaled by a
//! configured per-level offset. [`reindent`] applies the computation to a
//! whole buffer, top-down, re-reading earlier lines as they move since a
//! line's column anchors on the current column of its opener's line.

use crate::blocks::enclosing_block;
use crate::context::context_at;
use crate::keywords::{BlockKeyword, is_user_byte};

/// Tab stops used when measuring existing indentation.
const TAB_WIDTH: usize = 8;

/// Configuration contract violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The per-level indent offset cannot be negative.
    #[error("indent offset must not be negative, got {0}")]
    NegativeIndentOffset(i32),
}

/// Indentation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndentOptions {
    offset: usize,
}

impl IndentOptions {
    /// Columns added per nesting level unless configured otherwise.
    pub const DEFAULT_OFFSET: usize = 4;

    /// Build options with the given per-level offset.
    ///
    /// A negative offset is outside the contract and is rejected here,
    /// at configuration time; every later query is total.
    pub fn new(offset: i32) -> Result<Self, ConfigError> {
        usize::try_from(offset).map_or(Err(ConfigError::NegativeIndentOffset(offset)), |offset| {
            Ok(Self { offset })
        })
    }

    /// Columns added per nesting level.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }
}

impl Default for IndentOptions {
    fn default() -> Self {
        Self {
            offset: Self::DEFAULT_OFFSET,
        }
    }
}

/// Indentation column for the line containing `offset`.
///
/// Lines whose first non-blank character sits inside a comment or string
/// keep their current column; everything else is derived from the
/// enclosing block opener and the paren depth. The result is always a
/// non-negative column, for any input.
#[must_use]
pub fn indent_column(text: &str, offset: usize, options: &IndentOptions) -> usize {
    let bytes = text.as_bytes();
    let (line_start, content_end) = line_bounds(text, offset);
    let content = first_content(bytes, line_start, content_end);
    let probe = content.unwrap_or(content_end);

    let ctx = context_at(text, probe);
    if ctx.in_comment || ctx.in_string {
        return measure_column(bytes, line_start, probe);
    }

    let leading_close_paren = content.is_some_and(|c| bytes[c] == b')');
    let adjusted_depth = ctx
        .paren_depth
        .saturating_sub(usize::from(leading_close_paren));

    enclosing_block(text, probe).map_or_else(
        || options.offset() * adjusted_depth,
        |opener| {
            let (opener_line, opener_content_end) = line_bounds(text, opener.offset);
            let opener_probe =
                first_content(bytes, opener_line, opener_content_end).unwrap_or(opener.offset);
            let base = measure_column(bytes, opener_line, opener_probe);
            let base_depth = context_at(text, opener_probe).paren_depth;

            let closes = content
                .and_then(|c| leading_keyword(text, c))
                .is_some_and(|keyword| keyword.closes(opener.keyword));
            let levels_up = adjusted_depth + usize::from(!closes);

            if levels_up >= base_depth {
                base + options.offset() * (levels_up - base_depth)
            } else {
                base.saturating_sub(options.offset() * (base_depth - levels_up))
            }
        },
    )
}

/// Re-indent every line of `text`.
///
/// Lines are fixed top-down so later lines see the corrected columns of
/// the lines above them. Blank lines come out empty; lines starting
/// inside a comment or string are left byte-identical; emitted
/// indentation is spaces.
#[must_use]
pub fn reindent(text: &str, options: &IndentOptions) -> String {
    let mut work = text.to_owned();
    let mut line_start = 0;
    while line_start < work.len() {
        let bytes = work.as_bytes();
        let content_end = content_end_from(bytes, line_start);
        let content = first_content(bytes, line_start, content_end);

        match content {
            None => {
                // A blank line may be string or comment interior, where
                // the whitespace is content.
                let ctx = context_at(&work, content_end);
                if !ctx.in_comment && !ctx.in_string {
                    work.replace_range(line_start..content_end, "");
                }
            }
            Some(c) => {
                let ctx = context_at(&work, c);
                if !ctx.in_comment && !ctx.in_string {
                    let column = indent_column(&work, c, options);
                    work.replace_range(line_start..c, &" ".repeat(column));
                }
            }
        }

        let bytes = work.as_bytes();
        let Some(next) = next_line_start(bytes, line_start) else {
            break;
        };
        line_start = next;
    }
    work
}

/// Bounds of the line containing `offset`: start of line and end of its
/// content (excluding the line terminator).
fn line_bounds(text: &str, offset: usize) -> (usize, usize) {
    let bytes = text.as_bytes();
    let offset = offset.min(bytes.len());
    let line_start = bytes[..offset]
        .iter()
        .rposition(|&b| b == b'\n' || b == b'\r')
        .map_or(0, |nl| nl + 1);
    (line_start, content_end_from(bytes, line_start))
}

/// End of a line's content: the position of its terminator (`\n`, `\r\n`,
/// or a lone `\r`), or the buffer end.
fn content_end_from(bytes: &[u8], line_start: usize) -> usize {
    let mut i = line_start;
    while i < bytes.len() && bytes[i] != b'\n' && bytes[i] != b'\r' {
        i += 1;
    }
    i
}

/// First non-blank byte of the line, if the line has content.
fn first_content(bytes: &[u8], line_start: usize, content_end: usize) -> Option<usize> {
    (line_start..content_end).find(|&i| !matches!(bytes[i], b' ' | b'\t'))
}

/// Display column of `upto`, expanding tabs from the start of the line.
fn measure_column(bytes: &[u8], line_start: usize, upto: usize) -> usize {
    let mut column = 0;
    for &byte in &bytes[line_start..upto] {
        if byte == b'\t' {
            column = (column / TAB_WIDTH + 1) * TAB_WIDTH;
        } else {
            column += 1;
        }
    }
    column
}

/// Block keyword starting exactly at `start`, if any.
fn leading_keyword(text: &str, start: usize) -> Option<BlockKeyword> {
    let bytes = text.as_bytes();
    let mut end = start;
    while end < bytes.len() && is_user_byte(bytes[end]) {
        end += 1;
    }
    if end == start {
        return None;
    }
    BlockKeyword::from_word(&text[start..end])
}

/// Start of the line after the one beginning at `line_start`. Lines end
/// at `\n`, `\r\n`, or a lone `\r`, as in the scanner.
fn next_line_start(bytes: &[u8], line_start: usize) -> Option<usize> {
    let mut i = line_start;
    while i < bytes.len() && bytes[i] != b'\n' && bytes[i] != b'\r' {
        i += 1;
    }
    if i >= bytes.len() {
        return None;
    }
    if bytes[i] == b'\r' && bytes.get(i + 1) == Some(&b'\n') {
        Some(i + 2)
    } else {
        Some(i + 1)
    }
}
