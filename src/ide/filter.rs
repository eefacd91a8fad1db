//! Selection of annotations for bulk collapse and expand.

use rustc_hash::FxHashSet;

use super::catalog::ElementId;
use super::model::FoldAnnotation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnnotationFilter {
    Comments,
    /// Code folds of methods, fields, initializers and inner types.
    Members,
    /// Code folds of the given elements currently in the `collapsed` state.
    Elements {
        elements: FxHashSet<ElementId>,
        collapsed: bool,
    },
}

impl AnnotationFilter {
    pub fn elements(elements: impl IntoIterator<Item = ElementId>, collapsed: bool) -> Self {
        Self::Elements {
            elements: elements.into_iter().collect(),
            collapsed,
        }
    }

    pub fn matches(&self, annotation: &FoldAnnotation) -> bool {
        match self {
            Self::Comments => annotation.is_comment,
            Self::Members => !annotation.is_comment && annotation.kind.is_member(),
            Self::Elements {
                elements,
                collapsed,
            } => {
                annotation.collapsed == *collapsed
                    && !annotation.is_comment
                    && elements.contains(&annotation.element)
            }
        }
    }
}
