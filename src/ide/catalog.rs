//! Candidate declarations handed in by the host.
//!
//! The host enumerates the program elements of a compilation unit; this
//! module only describes them.

use smol_str::SmolStr;
use text_size::TextRange;

use crate::lambda::has_single_marker;

/// Stable identity of a program element across edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementId(pub u32);

/// Properties of a type declaration that affect folding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeFlags {
    /// Declared inside another type.
    pub inner: bool,
    pub anonymous: bool,
    pub is_enum: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeclarationKind {
    ImportContainer,
    Type(TypeFlags),
    Method,
    Field,
    Initializer,
}

impl DeclarationKind {
    pub fn is_type(self) -> bool {
        matches!(self, Self::Type(_))
    }

    pub fn is_anonymous_type(self) -> bool {
        matches!(self, Self::Type(flags) if flags.anonymous)
    }

    pub fn is_inner_type(self) -> bool {
        matches!(self, Self::Type(flags) if flags.inner)
    }

    /// Members in the folding sense: everything but imports and top-level types.
    pub fn is_member(self) -> bool {
        match self {
            Self::ImportContainer => false,
            Self::Type(flags) => flags.inner,
            Self::Method | Self::Field | Self::Initializer => true,
        }
    }
}

/// One program element with its source ranges and nested elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub id: ElementId,
    pub kind: DeclarationKind,
    pub name: SmolStr,
    /// Full source range, leading comments included. Anonymous types start
    /// at their `new`.
    pub range: TextRange,
    pub name_range: Option<TextRange>,
    pub children: Vec<Declaration>,
}

impl Declaration {
    pub fn new(id: u32, kind: DeclarationKind, name: impl Into<SmolStr>, range: TextRange) -> Self {
        Self {
            id: ElementId(id),
            kind,
            name: name.into(),
            range,
            name_range: None,
            children: Vec::new(),
        }
    }

    pub fn with_name_range(mut self, name_range: TextRange) -> Self {
        self.name_range = Some(name_range);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = Declaration>) -> Self {
        self.children.extend(children);
        self
    }

    /// Depth-first walk over this declaration and its descendants.
    pub fn walk(&self) -> impl Iterator<Item = &Declaration> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let next = stack.pop()?;
            stack.extend(next.children.iter().rev());
            Some(next)
        })
    }
}

/// The marked method of a lambda-foldable anonymous type.
///
/// The type must be anonymous with a single child, a method whose source
/// carries exactly one marker form.
pub fn find_lambda_method<'d>(
    declaration: &'d Declaration,
    source: &str,
) -> Option<&'d Declaration> {
    if !declaration.kind.is_anonymous_type() {
        return None;
    }
    let [method] = declaration.children.as_slice() else {
        return None;
    };
    if method.kind != DeclarationKind::Method {
        return None;
    }
    let text = source.get(std::ops::Range::<usize>::from(method.range))?;
    has_single_marker(text).then_some(method)
}
