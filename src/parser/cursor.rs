//! Nesting-aware token cursor.
//!
//! Walks the significant (non-trivia) tokens of a source text and seeks
//! forward to the first token of a given set of kinds that sits at the
//! nesting level where the seek started. Each seek also records a few facts
//! about the tokens it crossed, see [`ScanState`].

use text_size::TextSize;
use tracing::trace;

use super::lexer::{Lexer, Token};
use super::syntax_kind::SyntaxKind;

/// Facts recorded while crossing tokens during one seek.
///
/// Reset at the start of every seek.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanState<'a> {
    /// Offset of the first significant token crossed (the matched token included).
    pub first_significant: Option<TextSize>,
    /// Last identifier crossed.
    pub identifier: Option<Token<'a>>,
    /// Whether an `if`, `for`, `while`, `do` or `try` keyword was crossed.
    pub crossed_control_flow: bool,
    /// Offset of the `}` that most recently closed a nested block.
    pub last_block_end: Option<TextSize>,
}

/// Forward-only cursor over the significant tokens of a source text.
pub struct TokenCursor<'a> {
    lexer: Lexer<'a>,
    current: Option<Token<'a>>,
    state: ScanState<'a>,
    exhausted: bool,
}

impl<'a> TokenCursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            lexer: Lexer::new(source),
            current: None,
            state: ScanState::default(),
            exhausted: false,
        }
    }

    /// Token matched by the last seek, `None` after end of input.
    pub fn current(&self) -> Option<Token<'a>> {
        self.current
    }

    /// Facts recorded by the last seek.
    pub fn state(&self) -> &ScanState<'a> {
        &self.state
    }

    /// Whether the cursor ran out of tokens (or hit input it could not lex).
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Move to the next significant token.
    pub fn advance(&mut self) -> Option<Token<'a>> {
        self.state = ScanState::default();
        let token = self.next_significant();
        self.current = token;
        token
    }

    /// Seek the first token of one of `kinds` outside any parentheses or
    /// braces opened during this seek.
    pub fn seek(&mut self, kinds: &[SyntaxKind]) -> Option<Token<'a>> {
        self.seek_nested(kinds, false)
    }

    /// Like [`seek`](Self::seek), but type argument brackets nest as well.
    ///
    /// `>>` and `>>>` close two and three levels at once.
    pub fn seek_with_generics(&mut self, kinds: &[SyntaxKind]) -> Option<Token<'a>> {
        self.seek_nested(kinds, true)
    }

    fn seek_nested(&mut self, kinds: &[SyntaxKind], generics: bool) -> Option<Token<'a>> {
        self.state = ScanState::default();
        let mut depth: i32 = 0;

        loop {
            let Some(token) = self.next_significant() else {
                self.current = None;
                trace!(?kinds, "seek reached end of input");
                return None;
            };

            if depth <= 0 && kinds.contains(&token.kind) {
                self.current = Some(token);
                return Some(token);
            }

            match token.kind {
                SyntaxKind::L_PAREN | SyntaxKind::L_BRACE => depth += 1,
                SyntaxKind::R_PAREN => depth -= 1,
                SyntaxKind::R_BRACE => {
                    depth -= 1;
                    self.state.last_block_end = Some(token.offset);
                }
                SyntaxKind::LT if generics => depth += 1,
                SyntaxKind::GT if generics => depth -= 1,
                SyntaxKind::SHR if generics => depth -= 2,
                SyntaxKind::USHR if generics => depth -= 3,
                _ => {}
            }
        }
    }

    fn next_significant(&mut self) -> Option<Token<'a>> {
        if self.exhausted {
            return None;
        }

        for token in self.lexer.by_ref() {
            if token.kind.is_trivia() {
                continue;
            }
            if token.kind == SyntaxKind::ERROR {
                trace!(offset = ?token.offset, text = token.text, "unlexable input ends the scan");
                break;
            }

            if token.kind == SyntaxKind::IDENT {
                self.state.identifier = Some(token);
            }
            if self.state.first_significant.is_none() {
                self.state.first_significant = Some(token.offset);
            }
            if token.kind.is_control_flow() {
                self.state.crossed_control_flow = true;
            }
            return Some(token);
        }

        self.exhausted = true;
        None
    }
}
