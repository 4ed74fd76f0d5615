/// Half-open byte range `[start, end)` into the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Byte length of the spanned region.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether `offset` falls inside the span.
    #[must_use]
    pub const fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }
}

/// Token kinds produced by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Command keyword, including the `?` print alias.
    Command,
    /// Built-in function name.
    BuiltinFunction,
    /// User function name at its declaration site.
    UserFunction,
    /// Label (`:name`), sigil included.
    Label,
    /// Recognized macro (`@NAME`), sigil included.
    Macro,
    /// Suspicious macro text: trailing characters after a recognized
    /// macro name, or an entire unrecognized macro token.
    MacroWarning,
    /// Variable (`$name`, or a bare `$`), sigil included.
    Variable,
    /// Quoted string, delimiters included.
    StringLit,
    /// Line comment (`; ...`) or block comment (`/* ... */`).
    Comment,
    /// Opening paren `(`.
    OpenParen,
    /// Closing paren `)`.
    CloseParen,
    /// Any other single non-name character.
    Punctuation,
    /// Unclassified name or number.
    Word,
    /// Newline (line separator).
    Newline,
}

/// A single classified region of source text.
///
/// Tokens carry no text of their own; slice the source with
/// [`Token::text`] when the characters are needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[must_use]
    pub const fn new(kind: TokenKind, start: usize, end: usize) -> Self {
        Self {
            kind,
            span: Span::new(start, end),
        }
    }

    /// The raw text of this token within `source`.
    #[must_use]
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        &source[self.span.start..self.span.end]
    }
}

/// One-based line and column of a byte offset, for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    /// Locate `offset` within `text`. Offsets past the end report the
    /// position of the end of the buffer.
    #[must_use]
    pub fn of(text: &str, offset: usize) -> Self {
        let offset = offset.min(text.len());
        let mut line = 1;
        let mut column = 1;
        for byte in text.as_bytes().iter().take(offset) {
            if *byte == b'\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }
        Self { line, column }
    }
}
