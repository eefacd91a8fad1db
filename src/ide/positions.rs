//! Fold positions and what they hide when collapsed.
//!
//! A position covers the text a fold annotation spans. When the host
//! collapses it, the position decides which parts are actually hidden and
//! where the caption (the text that stays in view) is anchored.

use std::ops::Range;

use text_size::{TextRange, TextSize};
use tracing::{debug, error};
use unicode_ident::is_xid_continue;

use crate::base::LineIndex;
use crate::lambda::{self, Shape};

/// Length of the `import` keyword.
const IMPORT_KEYWORD_LEN: u32 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RegionKind {
    /// A line-aligned comment; the first line with content stays visible.
    Comment,
    /// Code of a type or member.
    Element {
        /// Full range of the declaration.
        declaration: TextRange,
        name_start: Option<TextSize>,
        /// Try lambda folding before the generic member folding.
        lambda: bool,
    },
    /// The import container; only the first `import` keyword stays.
    Import,
}

/// Range of one fold annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FoldRegion {
    pub range: TextRange,
    pub kind: RegionKind,
}

/// Collapsed appearance of a [`FoldRegion`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Projection {
    /// Absolute ranges to hide, sorted.
    pub hidden: Vec<TextRange>,
    /// Absolute offset the caption is anchored at.
    pub caption_offset: TextSize,
    /// Set when the region folded as a lambda.
    pub lambda: Option<Shape>,
}

impl FoldRegion {
    pub fn comment(range: TextRange) -> Self {
        Self {
            range,
            kind: RegionKind::Comment,
        }
    }

    pub fn import(range: TextRange) -> Self {
        Self {
            range,
            kind: RegionKind::Import,
        }
    }

    /// What to hide when collapsed, `None` if nothing can be hidden.
    pub fn projection(&self, source: &str, lines: &LineIndex) -> Option<Projection> {
        match self.kind {
            RegionKind::Comment => self.comment_projection(source, lines),
            RegionKind::Import => self.import_projection(),
            RegionKind::Element {
                declaration,
                name_start,
                lambda,
            } => {
                if lambda {
                    if let Some(projection) = lambda_projection(source, declaration) {
                        return Some(projection);
                    }
                }
                let name_start = name_start.unwrap_or(self.range.start());
                self.line_projection(lines, name_start)
            }
        }
    }

    fn comment_projection(&self, source: &str, lines: &LineIndex) -> Option<Projection> {
        let text = source.get(Range::<usize>::from(self.range))?;
        let content = text
            .char_indices()
            .find(|&(_, c)| is_xid_continue(c))
            .map_or(0, |(index, _)| index as u32);
        self.line_projection(lines, self.range.start() + TextSize::from(content))
    }

    fn import_projection(&self) -> Option<Projection> {
        let keyword = TextSize::from(IMPORT_KEYWORD_LEN);
        if self.range.len() <= keyword {
            return None;
        }
        let caption_offset = self.range.start() + keyword;
        Some(Projection {
            hidden: vec![TextRange::new(caption_offset, self.range.end())],
            caption_offset,
            lambda: None,
        })
    }

    /// Hide the lines before the caption line and the lines after it.
    fn line_projection(&self, lines: &LineIndex, caption: TextSize) -> Option<Projection> {
        let first = lines.line_of(self.range.start());
        let last = lines.line_of(self.range.end());
        let caption_line = lines.line_of(caption).clamp(first, last);

        let mut hidden = Vec::with_capacity(2);
        if first < caption_line {
            hidden.push(TextRange::new(
                lines.line_start(first)?,
                lines.line_start(caption_line)?,
            ));
        }
        if caption_line < last {
            let after = lines.line_start(caption_line + 1)?;
            if after < self.range.end() {
                hidden.push(TextRange::new(after, self.range.end()));
            }
        }

        if hidden.is_empty() {
            return None;
        }
        Some(Projection {
            hidden,
            caption_offset: caption,
            lambda: None,
        })
    }
}

fn lambda_projection(source: &str, declaration: TextRange) -> Option<Projection> {
    match lambda::classify(source, declaration) {
        Ok(fold) => Some(Projection {
            hidden: fold.hidden,
            caption_offset: fold.caption_offset,
            lambda: Some(fold.shape),
        }),
        Err(err) if err.is_fault() => {
            error!(?declaration, %err, "lambda folding failed");
            None
        }
        Err(err) => {
            debug!(?declaration, %err, "not foldable as lambda");
            None
        }
    }
}
