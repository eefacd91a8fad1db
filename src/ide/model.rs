//! The host's store of fold annotations.
//!
//! [`ProjectionModel`] is the seam to the editor: it owns the annotations,
//! their positions and collapse state. [`FoldModel`] keeps them in memory.

use indexmap::IndexMap;

use super::catalog::{DeclarationKind, ElementId};
use super::positions::FoldRegion;

/// Identity of an annotation inside a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnotationId(pub u32);

/// A foldable region attached to a program element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FoldAnnotation {
    pub element: ElementId,
    pub kind: DeclarationKind,
    pub is_comment: bool,
    pub collapsed: bool,
    /// The element folds as a lambda.
    pub lambda: bool,
}

/// New state for an annotation already in the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Update {
    pub id: AnnotationId,
    pub annotation: FoldAnnotation,
    pub region: FoldRegion,
}

/// One batch of modifications, applied atomically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelChange {
    pub deletions: Vec<AnnotationId>,
    pub additions: Vec<(FoldAnnotation, FoldRegion)>,
    pub updates: Vec<Update>,
}

impl ModelChange {
    pub fn is_empty(&self) -> bool {
        self.deletions.is_empty() && self.additions.is_empty() && self.updates.is_empty()
    }
}

/// A change notification from the host about the edited compilation unit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeEvent {
    /// Content or children of the unit changed.
    pub structural: bool,
    /// Only the import container was affected.
    pub imports_only: bool,
    /// The caret sits on an import declaration.
    pub caret_in_import: bool,
    pub caret: Option<text_size::TextSize>,
    pub problems: Vec<Problem>,
}

/// A compiler problem reported with a change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Problem {
    /// 0-indexed line.
    pub line: u32,
    pub is_error: bool,
}

pub trait ProjectionModel {
    /// Every annotation with its current position, in model order.
    fn annotations(&self) -> Vec<(AnnotationId, FoldAnnotation, FoldRegion)>;

    fn get(&self, id: AnnotationId) -> Option<(FoldAnnotation, FoldRegion)>;

    /// Apply `change`, returning any notifications the host raised meanwhile.
    fn modify(&mut self, change: ModelChange) -> Vec<ChangeEvent>;
}

/// In-memory [`ProjectionModel`].
#[derive(Debug, Default)]
pub struct FoldModel {
    entries: IndexMap<AnnotationId, (FoldAnnotation, FoldRegion)>,
    next_id: u32,
    echo: Vec<ChangeEvent>,
    modifications: usize,
}

impl FoldModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise `event` from the next [`modify`](ProjectionModel::modify), as an
    /// editor does when applying folds triggers a reconcile.
    pub fn echo_on_next_modify(&mut self, event: ChangeEvent) {
        self.echo.push(event);
    }

    /// Number of `modify` calls so far.
    pub fn modifications(&self) -> usize {
        self.modifications
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ProjectionModel for FoldModel {
    fn annotations(&self) -> Vec<(AnnotationId, FoldAnnotation, FoldRegion)> {
        self.entries
            .iter()
            .map(|(&id, &(annotation, region))| (id, annotation, region))
            .collect()
    }

    fn get(&self, id: AnnotationId) -> Option<(FoldAnnotation, FoldRegion)> {
        self.entries.get(&id).copied()
    }

    fn modify(&mut self, change: ModelChange) -> Vec<ChangeEvent> {
        self.modifications += 1;
        for id in &change.deletions {
            self.entries.shift_remove(id);
        }
        for update in change.updates {
            if let Some(entry) = self.entries.get_mut(&update.id) {
                *entry = (update.annotation, update.region);
            }
        }
        for (annotation, region) in change.additions {
            let id = AnnotationId(self.next_id);
            self.next_id += 1;
            self.entries.insert(id, (annotation, region));
        }
        std::mem::take(&mut self.echo)
    }
}
