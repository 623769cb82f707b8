//! Label selector expressions.
//!
//! A selector is a small boolean language over string labels:
//!
//! - `label` matches when the label is present
//! - `label=value` and `label="quoted value"` match exact values
//! - `label!=value` matches when the label is missing or has another value
//! - `!expr`, `expr && expr`, `expr || expr` and `( expr )` combine terms
//!
//! `!` binds tighter than `&&`, which binds tighter than `||`.
//!
//! ```
//! use std::collections::HashMap;
//! use selector::Selector;
//!
//! let selector = Selector::parse("team=infra && !beta").unwrap();
//!
//! let labels = HashMap::from([("team".to_string(), "infra".to_string())]);
//! assert!(selector.matches(&labels));
//! ```

// public modules
pub mod ast;
pub mod error;
pub mod filter;
pub mod labels;
pub mod lexer;
pub mod parse;

// private modules
mod span;
mod token;

// public uses
pub use ast::{Expr, evaluate};
pub use error::{Error, Expected, LexError, Result, SyntaxError};
pub use filter::{Selector, filter};
pub use labels::Labels;
pub use lexer::{Lexer, tokenize};
pub use parse::{MAX_DEPTH, parse};
pub use span::Span;
pub use token::{Token, TokenKind};
