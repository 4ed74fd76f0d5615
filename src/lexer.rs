//! Forward scanner and token classifier.
//!
//! Scans raw script text into classified [`Token`]s. Classification is
//! total: every input, including unterminated strings and comments, scans
//! without error, and every non-blank byte lands in exactly one token.
//!
//! Name classes overlap in this language and are disambiguated by sigil
//! and table order: macros (`@`), variables (`$`), labels (`:`), then
//! command keywords, user function names (only directly after FUNCTION on
//! the same line), and built-in function names.

use crate::keywords;
use crate::token::{Span, Token, TokenKind};

/// Scan `text` into classified tokens.
///
/// Horizontal whitespace separates tokens and is not itself a token;
/// newlines are. Token spans are in-bounds, non-overlapping, and ordered.
/// A leading byte-order mark is skipped.
#[must_use]
pub fn tokenize(text: &str) -> Vec<Token> {
    Scanner::new(text).collect()
}

/// Byte cursor over the source text.
struct Scanner<'a> {
    src: &'a str,
    bytes: &'a [u8],
    pos: usize,
    /// Second half of a split macro token, emitted on the next call.
    queued: Option<Token>,
    /// Set while the word after a FUNCTION keyword would name a function.
    fn_name_pending: bool,
}

impl<'a> Scanner<'a> {
    fn new(src: &'a str) -> Self {
        let bytes = src.as_bytes();
        let start = if bytes.starts_with(&[0xEF, 0xBB, 0xBF]) {
            3
        } else {
            0
        };
        Self {
            src,
            bytes,
            pos: start,
            queued: None,
            fn_name_pending: false,
        }
    }

    fn peek_at(&self, ahead: usize) -> Option<u8> {
        self.bytes.get(self.pos + ahead).copied()
    }

    fn skip_blanks(&mut self) {
        while matches!(self.bytes.get(self.pos), Some(b' ' | b'\t')) {
            self.pos += 1;
        }
    }

    fn single(&mut self, start: usize, kind: TokenKind) -> Token {
        self.pos += 1;
        Token::new(kind, start, self.pos)
    }

    fn read_newline(&mut self, start: usize) -> Token {
        if self.bytes[self.pos] == b'\r' && self.peek_at(1) == Some(b'\n') {
            self.pos += 2;
        } else {
            self.pos += 1;
        }
        Token::new(TokenKind::Newline, start, self.pos)
    }

    fn read_line_comment(&mut self, start: usize) -> Token {
        while !matches!(self.bytes.get(self.pos), None | Some(b'\n' | b'\r')) {
            self.pos += 1;
        }
        Token::new(TokenKind::Comment, start, self.pos)
    }

    fn read_block_comment(&mut self, start: usize) -> Token {
        self.pos += 2;
        // First close delimiter wins; these comments do not nest.
        while self.pos < self.bytes.len() {
            if self.bytes[self.pos] == b'*' && self.peek_at(1) == Some(b'/') {
                self.pos += 2;
                break;
            }
            self.pos += 1;
        }
        Token::new(TokenKind::Comment, start, self.pos)
    }

    fn read_string(&mut self, start: usize, quote: u8) -> Token {
        self.pos += 1;
        while self.pos < self.bytes.len() && self.bytes[self.pos] != quote {
            self.pos += 1;
        }
        if self.pos < self.bytes.len() {
            self.pos += 1;
        }
        Token::new(TokenKind::StringLit, start, self.pos)
    }

    fn read_user_run(&mut self) {
        while self
            .bytes
            .get(self.pos)
            .is_some_and(|&b| keywords::is_user_byte(b))
        {
            self.pos += 1;
        }
    }

    fn read_macro(&mut self, start: usize) -> Token {
        self.pos += 1;
        let name_start = self.pos;
        self.read_user_run();
        let name = &self.src[name_start..self.pos];
        match keywords::macro_prefix(name) {
            Some(len) if len == name.len() => Token::new(TokenKind::Macro, start, self.pos),
            Some(len) => {
                let split = name_start + len;
                self.queued = Some(Token::new(TokenKind::MacroWarning, split, self.pos));
                Token::new(TokenKind::Macro, start, split)
            }
            None => Token::new(TokenKind::MacroWarning, start, self.pos),
        }
    }

    fn read_variable(&mut self, start: usize) -> Token {
        self.pos += 1;
        // In a run of sigils only the last one takes a name; the others
        // are single-character value reads.
        if self.peek_at(0) == Some(b'$') {
            return Token::new(TokenKind::Variable, start, self.pos);
        }
        self.read_user_run();
        Token::new(TokenKind::Variable, start, self.pos)
    }

    fn read_label(&mut self, start: usize) -> Token {
        if self.peek_at(1).is_some_and(keywords::is_user_byte) {
            self.pos += 1;
            self.read_user_run();
            Token::new(TokenKind::Label, start, self.pos)
        } else {
            self.single(start, TokenKind::Punctuation)
        }
    }

    fn read_word(&mut self, start: usize) -> Token {
        self.read_user_run();
        let word = &self.src[start..self.pos];
        let kind = if keywords::is_command(word) {
            TokenKind::Command
        } else if self.fn_name_pending {
            TokenKind::UserFunction
        } else if keywords::is_builtin_function(word) {
            TokenKind::BuiltinFunction
        } else {
            TokenKind::Word
        };
        Token::new(kind, start, self.pos)
    }
}

impl Iterator for Scanner<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if let Some(token) = self.queued.take() {
            return Some(token);
        }
        self.skip_blanks();
        let start = self.pos;
        let byte = *self.bytes.get(self.pos)?;
        let token = match byte {
            b'\n' | b'\r' => self.read_newline(start),
            b';' => self.read_line_comment(start),
            b'/' if self.peek_at(1) == Some(b'*') => self.read_block_comment(start),
            b'\'' | b'"' => self.read_string(start, byte),
            b'(' => self.single(start, TokenKind::OpenParen),
            b')' => self.single(start, TokenKind::CloseParen),
            b'?' => self.single(start, TokenKind::Command),
            b'@' => self.read_macro(start),
            b'$' => self.read_variable(start),
            b':' => self.read_label(start),
            b if keywords::is_user_byte(b) => self.read_word(start),
            _ => self.single(start, TokenKind::Punctuation),
        };
        self.fn_name_pending = token.kind == TokenKind::Command
            && token.text(self.src).eq_ignore_ascii_case("function");
        Some(token)
    }
}
