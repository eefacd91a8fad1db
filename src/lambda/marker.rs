//! The comment that opts an anonymous method into lambda folding.

use super::error::ClassifyError;

/// Block form, usable anywhere on the line.
pub const BLOCK_MARKER: &str = "/* => */";
/// Line form, comments out the rest of the line.
pub const LINE_MARKER: &str = "// => ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MarkerForm {
    Block,
    Line,
}

impl MarkerForm {
    pub fn text(self) -> &'static str {
        match self {
            Self::Block => BLOCK_MARKER,
            Self::Line => LINE_MARKER,
        }
    }
}

/// A marker found in a declaration's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    pub form: MarkerForm,
    /// Offset of the marker's first byte, relative to the searched text.
    pub offset: u32,
}

impl Marker {
    /// Locate the single marker in `text`.
    pub fn find(text: &str) -> Result<Self, ClassifyError> {
        match (text.find(BLOCK_MARKER), text.find(LINE_MARKER)) {
            (Some(offset), None) => Ok(Self {
                form: MarkerForm::Block,
                offset: offset as u32,
            }),
            (None, Some(offset)) => Ok(Self {
                form: MarkerForm::Line,
                offset: offset as u32,
            }),
            (Some(_), Some(_)) => Err(ClassifyError::AmbiguousMarker),
            (None, None) => Err(ClassifyError::MissingMarker),
        }
    }
}

/// Whether `text` carries exactly one of the two marker forms.
pub fn has_single_marker(text: &str) -> bool {
    text.contains(BLOCK_MARKER) ^ text.contains(LINE_MARKER)
}
