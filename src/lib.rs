//! KiXtart script lexer, token classifier, and indentation engine.
//!
//! Splits KiXtart source into classified tokens, tracks lexical context
//! (comments, strings, paren depth) at arbitrary offsets, resolves the
//! block keyword enclosing a position, and computes or rewrites line
//! indentation. Every query is total over arbitrary input; only
//! configuration values are validated.
//!
//! # Quick start
//!
//! ## Classify tokens
//!
//! ```
//! use kixtart_rs::{TokenKind, tokenize};
//!
//! let tokens = tokenize("If $x\n");
//! let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [TokenKind::Command, TokenKind::Variable, TokenKind::Newline]
//! );
//! ```
//!
//! ## Re-indent a script
//!
//! ```
//! use kixtart_rs::{IndentOptions, reindent};
//!
//! let script = "Do\n$x = $x + 1\nUntil $x > 3\n";
//! let formatted = reindent(script, &IndentOptions::default());
//! assert_eq!(formatted, "Do\n    $x = $x + 1\nUntil $x > 3\n");
//! ```
//!
//! ## Outline a script
//!
//! ```
//! use kixtart_rs::script_index;
//!
//! let index = script_index("Function Greet\nEndFunction\n:start\n");
//! assert_eq!(index.functions[0].name, "Greet");
//! assert_eq!(index.labels[0].name, "start");
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod blocks;
pub mod context;
pub mod indent;
pub mod keywords;
pub mod lexer;
pub mod outline;
pub mod token;

pub use blocks::{Opener, enclosing_block};
pub use context::{LexicalContext, context_at};
pub use indent::{ConfigError, IndentOptions, indent_column, reindent};
pub use keywords::BlockKeyword;
pub use lexer::tokenize;
pub use outline::{
    IndexEntry, ScriptIndex, beginning_of_function, current_function, end_of_function, script_index,
};
pub use token::{Position, Span, Token, TokenKind};
