//! Raw fold regions of a declaration, before they become positions.

use std::ops::Range;

use text_size::{TextRange, TextSize};

use crate::base::LineIndex;
use crate::parser::{Lexer, SyntaxKind};

/// Leading block and javadoc comments of `range`, then the code region.
///
/// Line comments are skipped. The code region starts at the first token
/// that is not trivia and runs to the end of `range`. Empty if `range` is
/// not a valid range of `source`.
pub fn split_leading_comments(source: &str, range: TextRange) -> Vec<TextRange> {
    let Some(text) = source.get(Range::<usize>::from(range)) else {
        return Vec::new();
    };

    let mut regions = Vec::new();
    let mut code_start = range.end();
    for token in Lexer::new(text) {
        match token.kind {
            SyntaxKind::WHITESPACE | SyntaxKind::LINE_COMMENT => {}
            SyntaxKind::BLOCK_COMMENT | SyntaxKind::DOC_COMMENT => regions.push(TextRange::at(
                range.start() + token.offset,
                TextSize::of(token.text),
            )),
            _ => {
                code_start = range.start() + token.offset;
                break;
            }
        }
    }
    regions.push(TextRange::new(code_start, range.end()));
    regions
}

/// Comments heading the file, up to the first type starting at `first_type`.
///
/// Once a comment was seen, a `package` or `import` ends the header.
pub fn header_comment(source: &str, first_type: TextSize) -> Option<TextRange> {
    let text = source.get(..usize::from(first_type))?;

    let mut header: Option<TextRange> = None;
    for token in Lexer::new(text) {
        match token.kind {
            SyntaxKind::CLASS_KW | SyntaxKind::INTERFACE_KW | SyntaxKind::ENUM_KW => break,
            SyntaxKind::PACKAGE_KW | SyntaxKind::IMPORT_KW if header.is_some() => break,
            SyntaxKind::ERROR => return None,
            kind if kind.is_comment() => {
                header = Some(match header {
                    Some(header) => header.cover(token.range()),
                    None => token.range(),
                });
            }
            _ => {}
        }
    }
    header
}

/// Widen `region` to whole lines, `None` if it does not span a line break.
pub fn align_region(region: TextRange, lines: &LineIndex) -> Option<TextRange> {
    let first = lines.line_of(region.start());
    let last = lines.line_of(region.end());
    if first >= last {
        return None;
    }
    Some(TextRange::new(lines.line_start(first)?, lines.line_end(last)?))
}
