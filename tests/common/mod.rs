#![allow(dead_code)]

use kixtart_rs::{IndentOptions, TokenKind, reindent, tokenize};

/// Helper: a formatted script must survive re-indentation unchanged.
pub fn assert_fixed_point(input: &str) {
    let output = reindent(input, &IndentOptions::default());
    assert_eq!(
        output, input,
        "re-indent changed formatted input:\n--- expected ---\n{input}\n--- got ---\n{output}"
    );
}

/// Helper: re-indent `input` with the default offset, compare against
/// `expected`, and check the result is itself a fixed point.
pub fn assert_reindents(input: &str, expected: &str) {
    let output = reindent(input, &IndentOptions::default());
    assert_eq!(
        output, expected,
        "re-indent mismatch:\n--- input ---\n{input}\n--- expected ---\n{expected}\n--- got ---\n{output}"
    );
    assert_fixed_point(expected);
}

/// Token kinds of `text`, in order.
pub fn kinds(text: &str) -> Vec<TokenKind> {
    tokenize(text).iter().map(|token| token.kind).collect()
}

/// Token texts of `text`, in order.
pub fn texts(text: &str) -> Vec<&str> {
    tokenize(text).iter().map(|token| token.text(text)).collect()
}
