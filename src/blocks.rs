//! Block pairing resolution.
//!
//! Finds the block keyword that opens the region around an offset by
//! walking backward over syntactic atoms with an explicit stack of pending
//! close keywords. Parenthesized groups, strings, and comments are opaque
//! atoms; keywords inside them never affect block structure.

use crate::keywords::BlockKeyword;
use crate::lexer::tokenize;
use crate::token::{Token, TokenKind};

/// An unmatched block-opening keyword located by [`enclosing_block`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opener {
    pub keyword: BlockKeyword,
    /// Byte offset of the keyword's first character.
    pub offset: usize,
}

/// Find the nearest block-opening keyword strictly before `offset` that
/// is not matched by a closing keyword before `offset`. Returns `None`
/// at top level.
///
/// Never fails: unbalanced parens and mismatched closers degrade to a
/// best-effort answer instead of an error.
#[must_use]
pub fn enclosing_block(text: &str, offset: usize) -> Option<Opener> {
    let tokens = tokenize(text);
    let upto = tokens.partition_point(|t| t.span.start < offset);
    resolve(text, &tokens[..upto])
}

fn resolve(text: &str, tokens: &[Token]) -> Option<Opener> {
    let mut stack: Vec<BlockKeyword> = Vec::new();
    let mut i = tokens.len();
    while i > 0 {
        i -= 1;
        let token = tokens[i];
        match token.kind {
            TokenKind::CloseParen => {
                // A balanced group is one opaque atom; skip to its open.
                let mut depth = 1_usize;
                while depth > 0 && i > 0 {
                    i -= 1;
                    match tokens[i].kind {
                        TokenKind::CloseParen => depth += 1,
                        TokenKind::OpenParen => depth -= 1,
                        _ => {}
                    }
                }
            }
            TokenKind::OpenParen => {
                // The walk started inside this group; step out of it and
                // carry on in the surrounding code.
            }
            TokenKind::Command => {
                if let Some(keyword) = BlockKeyword::from_word(token.text(text)) {
                    if keyword.opens() {
                        if claim(keyword, &mut stack) {
                            return Some(Opener {
                                keyword,
                                offset: token.span.start,
                            });
                        }
                    } else {
                        stack.push(keyword);
                    }
                }
            }
            _ => {}
        }
    }
    None
}

/// Match an opening keyword against the pending closers. Returns `true`
/// when the opener is unmatched, which makes it the resolver's answer.
fn claim(open: BlockKeyword, stack: &mut Vec<BlockKeyword>) -> bool {
    loop {
        match stack.last().copied() {
            // Nothing pending: this opener encloses the start position.
            None => return true,
            // CASE and ELSE are section dividers, already resolved by the
            // construct they sit in; they never terminate an opener.
            Some(top) if top.reopens() => {
                stack.pop();
            }
            // Designated closer: the pair cancels, keep walking.
            Some(top) if top.closes(open) => {
                stack.pop();
                return false;
            }
            // Mismatched construct: skip this opener, leave the pending
            // closer for an outer construct to claim.
            Some(_) => return false,
        }
    }
}
