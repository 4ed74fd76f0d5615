//! Lexical context tracking.
//!
//! Answers "what surrounds this offset": comment, string, and the paren
//! nesting depth. The answer is computed by a forward character scan from
//! the start of the buffer, so it is exact for any input, including
//! unterminated regions.

/// Lexical state strictly before a byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LexicalContext {
    /// Inside a line or block comment.
    pub in_comment: bool,
    /// Inside a quoted string.
    pub in_string: bool,
    /// Count of open parens not yet matched by a close paren. Parens
    /// inside comments and strings do not count. Never negative.
    pub paren_depth: usize,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum State {
    Code,
    LineComment,
    BlockComment,
    Str(u8),
}

/// Compute the lexical context at `offset` within `text`.
///
/// The context describes the state strictly before the byte at `offset`:
/// at the offset of an opening delimiter the context is still code, one
/// byte further it is inside the region. Offsets past the end of the
/// buffer behave as the buffer end.
#[must_use]
pub fn context_at(text: &str, offset: usize) -> LexicalContext {
    let bytes = text.as_bytes();
    let offset = offset.min(bytes.len());
    let mut state = State::Code;
    let mut paren_depth = 0_usize;
    let mut i = 0;
    while i < offset {
        let byte = bytes[i];
        match state {
            State::Code => match byte {
                b';' => {
                    state = State::LineComment;
                    i += 1;
                }
                b'/' if i + 1 < offset && bytes[i + 1] == b'*' => {
                    state = State::BlockComment;
                    i += 2;
                }
                b'\'' | b'"' => {
                    state = State::Str(byte);
                    i += 1;
                }
                b'(' => {
                    paren_depth += 1;
                    i += 1;
                }
                b')' => {
                    paren_depth = paren_depth.saturating_sub(1);
                    i += 1;
                }
                _ => i += 1,
            },
            State::LineComment => {
                if byte == b'\n' || byte == b'\r' {
                    state = State::Code;
                }
                i += 1;
            }
            State::BlockComment => {
                if byte == b'*' && i + 1 < offset && bytes[i + 1] == b'/' {
                    state = State::Code;
                    i += 2;
                } else {
                    i += 1;
                }
            }
            State::Str(quote) => {
                if byte == quote {
                    state = State::Code;
                }
                i += 1;
            }
        }
    }
    LexicalContext {
        in_comment: matches!(state, State::LineComment | State::BlockComment),
        in_string: matches!(state, State::Str(_)),
        paren_depth,
    }
}
