//! Which fold categories start out collapsed.

/// User preferences for initially collapsed folds.
///
/// Only consulted when the provider is allowed to collapse, which is the
/// case for the initial computation but not for updates while typing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FoldingPreferences {
    pub collapse_javadoc: bool,
    pub collapse_imports: bool,
    pub collapse_inner_types: bool,
    /// Methods, fields and initializers.
    pub collapse_members: bool,
    pub collapse_header_comments: bool,
}

impl Default for FoldingPreferences {
    fn default() -> Self {
        Self {
            collapse_javadoc: false,
            collapse_imports: true,
            collapse_inner_types: true,
            collapse_members: false,
            collapse_header_comments: true,
        }
    }
}
