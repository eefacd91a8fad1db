//! Lambda-shape classification of marked anonymous declarations.
//!
//! Given the range of an anonymous class declaration with a single marked
//! method, [`classify`] scans the declaration's tokens and scripts a
//! [`Ledger`] so that the text left visible reads like a lambda:
//!
//! ```text
//! new Adder() {
//!     public int add(int a, int b)/* => */{ return a + b; }   →   (a, b) => a + b
//! }
//! ```
//!
//! Bodies are sorted into four shapes:
//!
//! 1. a single `return` statement with at most one parameter
//! 2. a single `return` statement with several parameters (parentheses stay)
//! 3. a single statement without `return`, including `{}` and `{ ; }`
//! 4. anything else: the block stays, only the surrounding boilerplate goes
//!
//! A block-shaped declaration that is the only argument of a call,
//! `run(new Task() { ... });`, additionally hides the call's own parentheses.

use std::ops::Range;

use text_size::{TextRange, TextSize};
use tracing::{debug, trace};

use crate::base::LineIndex;
use crate::parser::{SyntaxKind, Token, TokenCursor};

use super::error::ClassifyError;
use super::ledger::{Handle, Ledger};
use super::marker::{Marker, MarkerForm};

/// ` => ` sits at these offsets inside both marker forms.
const ARROW_START: u32 = 2;
const ARROW_END: u32 = 6;

/// Structural facts the rendering depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shape {
    pub single_statement: bool,
    pub has_return: bool,
    pub params: u32,
}

/// Result of a successful classification.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LambdaFold {
    /// Absolute ranges to hide, sorted and non-overlapping.
    ///
    /// When `clause_folded` is set the first and last range are the call's
    /// `(` before the declaration and `);` after it.
    pub hidden: Vec<TextRange>,
    pub caption_offset: TextSize,
    pub shape: Shape,
    pub clause_folded: bool,
}

impl LambdaFold {
    /// The part of `source` inside `span` that is left visible.
    pub fn visible_text(&self, source: &str, span: TextRange) -> String {
        let mut visible = String::new();
        let mut at = span.start();
        for hidden in self.hidden.iter().filter_map(|range| range.intersect(span)) {
            if hidden.start() > at {
                visible.push_str(slice(source, TextRange::new(at, hidden.start())));
            }
            at = at.max(hidden.end());
        }
        if at < span.end() {
            visible.push_str(slice(source, TextRange::new(at, span.end())));
        }
        visible
    }
}

fn slice(source: &str, range: TextRange) -> &str {
    source.get(Range::<usize>::from(range)).unwrap_or_default()
}

/// Offsets and intervals fixed while scanning up to the method body.
struct Header {
    params: u32,
    open_paren: Handle,
    close_paren: Handle,
    pre_arrow: Handle,
    arrow: Handle,
    /// Anything between the marker and the method brace, typically `throws`.
    pre_brace: Handle,
    has_pre_brace: bool,
    method_brace: Handle,
    method_brace_offset: u32,
    /// End of the method header proper; indentation is stripped from here on.
    last_pre: u32,
}

#[derive(Debug)]
struct Body {
    single: bool,
    return_offset: Option<u32>,
    /// First token after the last `return`.
    value_start: Option<u32>,
    terminator: Option<u32>,
    close: u32,
    first_significant: Option<u32>,
    last_block_end: Option<u32>,
}

/// Classify the anonymous declaration at `declaration` within `source`.
pub fn classify(source: &str, declaration: TextRange) -> Result<LambdaFold, ClassifyError> {
    let text = source
        .get(Range::<usize>::from(declaration))
        .ok_or_else(|| {
            ClassifyError::inconsistent(format!(
                "declaration {declaration:?} is not within the {} byte buffer",
                source.len()
            ))
        })?;
    let marker = Marker::find(text)?;
    let len = u32::from(declaration.len());

    let mut ledger = Ledger::new(declaration.start(), declaration.len());
    let mut cursor = TokenCursor::new(text);

    let header = scan_header(text, marker, &mut cursor, &mut ledger)?;
    let body = scan_body(&mut cursor)?;

    let shape = Shape {
        single_statement: body.single,
        has_return: body.return_offset.is_some(),
        params: header.params,
    };
    let clause_folded = !shape.single_statement && is_sole_call_argument(source, declaration);
    debug!(?shape, clause_folded, ?marker, "classified lambda declaration");

    match (shape.single_statement, body.return_offset) {
        (true, Some(ret)) => fold_returning(&mut ledger, &header, &body, ret, len)?,
        (true, None) => fold_statement(text, &mut ledger, &header, &body, len)?,
        (false, _) => {
            fold_block(text, marker, &mut ledger, &header, &body)?;
            if clause_folded {
                ledger.trim_front(header.arrow, 1)?;
                let one = TextSize::from(1);
                let prefix = TextRange::at(declaration.start() - one, one);
                let suffix = TextRange::at(declaration.end(), TextSize::from(2));
                return Ok(LambdaFold {
                    hidden: ledger.finish_bracketed(prefix, suffix),
                    caption_offset: declaration.start(),
                    shape,
                    clause_folded,
                });
            }
        }
    }

    // Without parentheses the arrow must not start with a space.
    if shape.params == 0 {
        ledger.extend(header.pre_arrow, 1)?;
        ledger.trim_front(header.arrow, 1)?;
    }
    ledger.reveal(header.arrow);

    Ok(LambdaFold {
        hidden: ledger.finish(),
        caption_offset: declaration.start(),
        shape,
        clause_folded,
    })
}

fn at(token: Token<'_>) -> u32 {
    token.offset.into()
}

fn seek_offset(
    cursor: &mut TokenCursor<'_>,
    kind: SyntaxKind,
    what: &'static str,
) -> Result<u32, ClassifyError> {
    cursor
        .seek(&[kind])
        .map(at)
        .ok_or(ClassifyError::PatternNotFound(what))
}

fn scan_header(
    text: &str,
    marker: Marker,
    cursor: &mut TokenCursor<'_>,
    ledger: &mut Ledger,
) -> Result<Header, ClassifyError> {
    ledger.open(0)?;

    let type_brace = seek_offset(cursor, SyntaxKind::L_BRACE, "type body")?;
    ledger.close(type_brace)?;
    ledger.open(type_brace)?;
    ledger.close(type_brace + 1)?;
    ledger.open(type_brace + 1)?;

    let lparen = seek_offset(cursor, SyntaxKind::L_PAREN, "parameter list")?;
    ledger.close(lparen)?;
    ledger.open(lparen)?;
    let open_paren = ledger.close(lparen + 1)?;
    ledger.open(lparen + 1)?;

    // Modifiers and types are hidden, parameter names are not.
    let mut params = 0;
    let rparen = loop {
        let token = cursor.seek_with_generics(&[SyntaxKind::COMMA, SyntaxKind::R_PAREN]);
        let name = cursor.state().identifier;
        if let Some(name) = name {
            params += 1;
            ledger.close(at(name))?;
            if token.is_some_and(|t| t.kind == SyntaxKind::COMMA) {
                let next = cursor
                    .advance()
                    .ok_or(ClassifyError::PatternNotFound("parameter"))?;
                ledger.open(at(next))?;
            }
        }
        match token {
            Some(t) if t.kind == SyntaxKind::R_PAREN => break at(t),
            Some(_) => {}
            None => return Err(ClassifyError::PatternNotFound("end of parameter list")),
        }
    };

    let gap = text.get(rparen as usize + 1..marker.offset as usize);
    if !gap.is_some_and(|gap| gap.trim().is_empty()) {
        return Err(ClassifyError::MisplacedMarker { offset: rparen + 1 });
    }

    if !ledger.is_open() {
        ledger.open(rparen)?;
    }
    let close_paren = ledger.close(rparen + 1)?;
    ledger.open(rparen + 1)?;
    let pre_arrow = ledger.close(marker.offset + ARROW_START)?;
    ledger.open(marker.offset + ARROW_START)?;
    let arrow = ledger.close(marker.offset + ARROW_END)?;
    ledger.open(marker.offset + ARROW_END)?;

    let method_brace_offset = seek_offset(cursor, SyntaxKind::L_BRACE, "method body")?;
    let mut last_pre = marker.offset + marker.form.text().len() as u32;

    // Step over a throws clause after the marker.
    let throws_end = cursor
        .state()
        .identifier
        .filter(|name| at(*name) > last_pre)
        .map(|name| u32::from(name.end()));
    if let Some(end) = throws_end {
        last_pre = end;
        while text.as_bytes().get(last_pre as usize) == Some(&b' ') {
            last_pre += 1;
        }
    }

    let has_pre_brace = last_pre < method_brace_offset;
    if has_pre_brace {
        ledger.close(last_pre)?;
        ledger.open(last_pre)?;
    }
    let pre_brace = ledger.close(method_brace_offset)?;
    ledger.open(method_brace_offset)?;
    let method_brace = ledger.close(method_brace_offset + 1)?;

    trace!(params, rparen, method_brace_offset, last_pre, "scanned method header");

    Ok(Header {
        params,
        open_paren,
        close_paren,
        pre_arrow,
        arrow,
        pre_brace,
        has_pre_brace,
        method_brace,
        method_brace_offset,
        last_pre,
    })
}

fn scan_body(cursor: &mut TokenCursor<'_>) -> Result<Body, ClassifyError> {
    let mut body = Body {
        single: true,
        return_offset: None,
        value_start: None,
        terminator: None,
        close: 0,
        first_significant: None,
        last_block_end: None,
    };
    let mut after_return = false;

    let close = loop {
        let token = cursor.seek(&[
            SyntaxKind::SEMICOLON,
            SyntaxKind::R_BRACE,
            SyntaxKind::RETURN_KW,
        ]);

        let state = cursor.state();
        if state.crossed_control_flow {
            body.single = false;
        }
        body.last_block_end = state.last_block_end.map(u32::from);
        if body.first_significant.is_none() {
            body.first_significant = state.first_significant.map(u32::from);
        }
        if after_return {
            body.value_start = state.first_significant.map(u32::from);
            after_return = false;
        }

        // Unlexable input, such as an unterminated string, also ends up here.
        let Some(token) = token else {
            return Err(ClassifyError::PatternNotFound("end of method body"));
        };
        match token.kind {
            SyntaxKind::SEMICOLON => {
                if body.terminator.is_some() {
                    body.single = false;
                }
                body.terminator = Some(at(token));
            }
            SyntaxKind::RETURN_KW => {
                body.return_offset = Some(at(token));
                after_return = true;
            }
            _ => break at(token),
        }
    };
    body.close = close;

    // A trailing block statement ends the body after the last `;`.
    if body.last_block_end > body.terminator {
        body.terminator = body.last_block_end;
        body.single = false;
    }

    trace!(?body, "scanned method body");
    Ok(body)
}

fn reveal_parens(ledger: &mut Ledger, header: &Header) {
    ledger.reveal(header.open_paren);
    ledger.reveal(header.close_paren);
}

/// `{ return value; }` keeps only `value`.
fn fold_returning(
    ledger: &mut Ledger,
    header: &Header,
    body: &Body,
    ret: u32,
    len: u32,
) -> Result<(), ClassifyError> {
    if header.params > 1 {
        reveal_parens(ledger, header);
    }

    let (value, terminator) = body
        .value_start
        .zip(body.terminator)
        .filter(|&(value, terminator)| terminator > value)
        .ok_or_else(|| {
            ClassifyError::inconsistent(format!("no value returned by the `return` at {ret}"))
        })?;

    ledger.open(header.method_brace_offset)?;
    ledger.close(value)?;
    ledger.open(terminator)?;
    ledger.close(len)?;
    Ok(())
}

/// A single statement without a value.
fn fold_statement(
    text: &str,
    ledger: &mut Ledger,
    header: &Header,
    body: &Body,
    len: u32,
) -> Result<(), ClassifyError> {
    if header.params > 1 {
        reveal_parens(ledger, header);
    }
    let brace = header.method_brace_offset;

    let Some(terminator) = body.terminator else {
        // `{}`
        ledger.reveal(header.method_brace);
        ledger.open(brace + 1)?;
        ledger.close(len - 1)?;
        return Ok(());
    };

    if body.last_block_end.is_none() {
        let inner = text.get(brace as usize + 1..body.close as usize);
        if inner.is_some_and(|inner| inner.trim() == ";") {
            ledger.reveal(header.method_brace);
            ledger.open(brace + 1)?;
            ledger.close(terminator)?;
            ledger.open(terminator + 1)?;
            ledger.close(len - 1)?;
            return Ok(());
        }
    }

    let first = body
        .first_significant
        .ok_or(ClassifyError::PatternNotFound("statement"))?;
    ledger.open(brace)?;
    ledger.close(first)?;
    ledger.open(terminator)?;
    ledger.close(len)?;
    Ok(())
}

/// Several statements: the block stays, re-indented by one level.
fn fold_block(
    text: &str,
    marker: Marker,
    ledger: &mut Ledger,
    header: &Header,
    body: &Body,
) -> Result<(), ClassifyError> {
    if header.params > 0 {
        reveal_parens(ledger, header);
    }
    if header.has_pre_brace && marker.form == MarkerForm::Block {
        ledger.reveal(header.pre_brace);
    }
    ledger.reveal(header.method_brace);

    let close = body.close;
    let terminator = match body.terminator {
        Some(terminator) => terminator,
        None => close.checked_sub(2).ok_or_else(|| {
            ClassifyError::inconsistent(format!("method body closes at {close}"))
        })?,
    };

    ledger.open(terminator + 1)?;
    ledger.close(close + 1)?;
    strip_indent(text, ledger, header.last_pre, close)
}

/// Hide one tab, or four spaces, after every line break in `from..=to`.
fn strip_indent(text: &str, ledger: &mut Ledger, from: u32, to: u32) -> Result<(), ClassifyError> {
    let bytes = text.as_bytes();
    for line_break in LineIndex::new(text).line_breaks().map(u32::from) {
        if line_break < from || line_break > to {
            continue;
        }
        let start = line_break + 1;
        let width = match bytes.get(start as usize..) {
            Some([b'\t', ..]) => 1,
            Some([b' ', b' ', b' ', b' ', ..]) => 4,
            _ => continue,
        };
        ledger.open(start)?;
        ledger.close(start + width)?;
    }
    Ok(())
}

/// `(new ... });`: the declaration is the only argument of a call.
fn is_sole_call_argument(source: &str, declaration: TextRange) -> bool {
    let start = usize::from(declaration.start());
    let end = usize::from(declaration.end());
    start >= 1
        && end >= 1
        && source.get(start - 1..start + 3) == Some("(new")
        && source.get(end - 1..end + 2) == Some("});")
}
