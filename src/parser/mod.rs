//! Lexical layer for Java source text
//!
//! Folding never needs a syntax tree. Everything here works on the flat
//! token stream:
//!
//! ```text
//! Source Text
//!     ↓
//! Lexer (logos) → Tokens with SyntaxKind
//!     ↓
//! TokenCursor → nesting-aware seeks over significant tokens
//! ```

mod cursor;
mod lexer;
mod syntax_kind;

pub use cursor::{ScanState, TokenCursor};
pub use lexer::{Lexer, Token, tokenize};
pub use syntax_kind::SyntaxKind;
