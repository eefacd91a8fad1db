//! Folding structure of a compilation unit and its reconciliation with the
//! host's annotation model.
//!
//! The provider computes one annotation per foldable region of the unit,
//! then diffs that against what the model already holds so existing folds
//! keep their identity, and with it their collapsed state, across edits.

use indexmap::IndexMap;
use text_size::{TextRange, TextSize};
use tracing::{debug, trace};

use super::catalog::{Declaration, DeclarationKind, ElementId, find_lambda_method};
use super::filter::AnnotationFilter;
use super::model::{AnnotationId, ChangeEvent, FoldAnnotation, ModelChange, ProjectionModel, Update};
use super::positions::{FoldRegion, Projection, RegionKind};
use super::preferences::FoldingPreferences;
use super::regions::{align_region, header_comment, split_leading_comments};
use crate::base::LineIndex;

/// The unit as the host sees it at the time of a computation.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub source: &'a str,
    /// Top-level elements in source order.
    pub declarations: &'a [Declaration],
}

impl<'a> Snapshot<'a> {
    pub fn new(source: &'a str, declarations: &'a [Declaration]) -> Self {
        Self {
            source,
            declarations,
        }
    }
}

/// Options of one computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Pass {
    allow_collapsing: bool,
    initial: bool,
}

impl Pass {
    const INITIAL: Pass = Pass {
        allow_collapsing: true,
        initial: true,
    };
    const UPDATE: Pass = Pass {
        allow_collapsing: false,
        initial: false,
    };
}

/// Annotations computed for one snapshot.
struct Structure<'s> {
    source: &'s str,
    lines: &'s LineIndex,
    preferences: FoldingPreferences,
    pass: Pass,
    first_type: Option<ElementId>,
    has_header_comment: bool,
    entries: Vec<(FoldAnnotation, FoldRegion)>,
}

impl<'s> Structure<'s> {
    fn compute(
        source: &'s str,
        lines: &'s LineIndex,
        preferences: FoldingPreferences,
        pass: Pass,
        declarations: &[Declaration],
    ) -> Vec<(FoldAnnotation, FoldRegion)> {
        let mut structure = Structure {
            source,
            lines,
            preferences,
            pass,
            first_type: None,
            has_header_comment: false,
            entries: Vec::new(),
        };
        structure.visit(declarations, false);
        structure.entries
    }

    fn visit(&mut self, declarations: &[Declaration], in_anonymous: bool) {
        for declaration in declarations {
            // Inside an anonymous type only nested anonymous types fold.
            if !in_anonymous || declaration.kind.is_anonymous_type() {
                self.element(declaration);
            }
            self.visit(&declaration.children, declaration.kind.is_anonymous_type());
        }
    }

    fn collapse(&self, preference: bool) -> bool {
        self.pass.allow_collapsing && preference
    }

    fn element(&mut self, declaration: &Declaration) {
        let (collapse, collapse_code, lambda) = match declaration.kind {
            DeclarationKind::ImportContainer => {
                if !declaration.range.is_empty() {
                    let collapse = self.collapse(self.preferences.collapse_imports);
                    let region = FoldRegion::import(declaration.range);
                    self.push(declaration, true, collapse, false, region);
                }
                return;
            }
            DeclarationKind::Type(flags) => {
                let collapse_code = flags.inner && !(flags.is_enum && flags.anonymous);
                let lambda = find_lambda_method(declaration, self.source).is_some();
                let collapse = if lambda {
                    self.pass.initial
                } else if flags.anonymous {
                    return;
                } else {
                    self.collapse(self.preferences.collapse_inner_types) && collapse_code
                };
                (collapse, collapse_code, lambda)
            }
            DeclarationKind::Method | DeclarationKind::Field | DeclarationKind::Initializer => {
                (self.collapse(self.preferences.collapse_members), false, false)
            }
        };

        let regions = self.projection_ranges(declaration);
        let Some((code, comments)) = regions.split_last() else {
            return;
        };

        for (i, &comment) in comments.iter().enumerate() {
            let Some(aligned) = align_region(comment, self.lines) else {
                continue;
            };
            let is_header = i == 0
                && (regions.len() > 2 || self.has_header_comment)
                && self.first_type == Some(declaration.id);
            let collapse = if is_header {
                self.collapse(self.preferences.collapse_header_comments)
            } else {
                self.collapse(self.preferences.collapse_javadoc)
            };
            self.push(declaration, true, collapse, false, FoldRegion::comment(aligned));
        }

        if !collapse_code {
            return;
        }
        let region = FoldRegion {
            range: *code,
            kind: RegionKind::Element {
                declaration: declaration.range,
                name_start: declaration.name_range.map(|name| name.start()),
                lambda,
            },
        };
        self.push(declaration, false, collapse, lambda, region);
    }

    /// Header comment (first type only), leading comments, then the code region.
    fn projection_ranges(&mut self, declaration: &Declaration) -> Vec<TextRange> {
        if usize::from(declaration.range.end()) > self.source.len() {
            return Vec::new();
        }
        let mut regions = Vec::new();
        if self.first_type.is_none() && declaration.kind.is_type() {
            self.first_type = Some(declaration.id);
            if let Some(header) = header_comment(self.source, declaration.range.start()) {
                regions.push(header);
                self.has_header_comment = true;
            }
        }
        regions.extend(split_leading_comments(self.source, declaration.range));
        regions
    }

    fn push(
        &mut self,
        declaration: &Declaration,
        is_comment: bool,
        collapsed: bool,
        lambda: bool,
        region: FoldRegion,
    ) {
        trace!(
            element = declaration.id.0,
            name = %declaration.name,
            is_comment,
            collapsed,
            range = ?region.range,
            "fold region"
        );
        self.entries.push((
            FoldAnnotation {
                element: declaration.id,
                kind: declaration.kind,
                is_comment,
                collapsed,
                lambda,
            },
            region,
        ));
    }
}

/// Computes folds for a compilation unit and keeps a [`ProjectionModel`]
/// in step with it.
#[derive(Debug, Default)]
pub struct FoldingProvider {
    preferences: FoldingPreferences,
    updating: u32,
    deferred: bool,
}

impl FoldingProvider {
    pub fn new(preferences: FoldingPreferences) -> Self {
        Self {
            preferences,
            updating: 0,
            deferred: false,
        }
    }

    pub fn preferences(&self) -> &FoldingPreferences {
        &self.preferences
    }

    /// Re-read preferences; they apply from the next initialization.
    pub fn set_preferences(&mut self, preferences: FoldingPreferences) {
        self.preferences = preferences;
    }

    /// First computation for a newly opened unit. Preferences decide which
    /// folds start collapsed.
    pub fn initialize(&mut self, snapshot: Snapshot<'_>, model: &mut impl ProjectionModel) {
        self.run(Pass::INITIAL, snapshot, model);
    }

    /// Reconcile after the host reported a change to the unit.
    ///
    /// Changes arriving while an update is running are replayed once it
    /// has finished.
    pub fn element_changed(
        &mut self,
        event: &ChangeEvent,
        snapshot: Snapshot<'_>,
        model: &mut impl ProjectionModel,
    ) {
        if !event.structural {
            return;
        }
        if should_ignore(event, snapshot.source) {
            debug!(caret = ?event.caret, "error on caret line, folding unchanged");
            return;
        }
        if self.updating > 0 {
            trace!("update in progress, deferring change");
            self.deferred = true;
            return;
        }
        self.run(Pass::UPDATE, snapshot, model);
    }

    fn run(&mut self, pass: Pass, snapshot: Snapshot<'_>, model: &mut impl ProjectionModel) {
        self.updating += 1;
        let events = self.update(pass, snapshot, model);
        for event in &events {
            self.element_changed(event, snapshot, model);
        }
        self.updating -= 1;

        if self.updating == 0 && std::mem::take(&mut self.deferred) {
            debug!("replaying deferred change");
            self.updating += 1;
            let dropped = self.update(Pass::UPDATE, snapshot, model);
            self.updating -= 1;
            if !dropped.is_empty() {
                trace!(count = dropped.len(), "dropped changes raised by replay");
            }
        }
    }

    /// Diff the structure of `snapshot` against `model` and apply the
    /// difference. Returns the notifications the model raised.
    fn update(
        &self,
        pass: Pass,
        snapshot: Snapshot<'_>,
        model: &mut impl ProjectionModel,
    ) -> Vec<ChangeEvent> {
        let lines = LineIndex::new(snapshot.source);
        let structure = Structure::compute(
            snapshot.source,
            &lines,
            self.preferences,
            pass,
            snapshot.declarations,
        );
        let mut old = current_structure(model);

        let mut change = ModelChange::default();
        for (annotation, region) in structure {
            // Anonymous types of unparsable code may report offset 0; keep
            // whatever range they had.
            let malformed =
                region.range.start() == TextSize::from(0) && annotation.kind.is_inner_type();

            let existing = old.get_mut(&annotation.element).and_then(|list| {
                let index = list
                    .iter()
                    .position(|(_, existing, _)| existing.is_comment == annotation.is_comment)?;
                Some(list.remove(index))
            });
            match existing {
                None if malformed => {}
                None => change.additions.push((annotation, region)),
                Some((id, existing, existing_region)) => {
                    let update_collapsed =
                        pass.allow_collapsing && existing.collapsed != annotation.collapsed;
                    if !malformed && (region != existing_region || update_collapsed) {
                        let collapsed = if update_collapsed {
                            annotation.collapsed
                        } else {
                            existing.collapsed
                        };
                        change.updates.push(Update {
                            id,
                            annotation: FoldAnnotation {
                                collapsed,
                                ..annotation
                            },
                            region,
                        });
                    }
                }
            }
        }

        let deletions: Vec<_> = old.into_values().flatten().collect();
        match_deletions(deletions, &mut change);

        debug!(
            additions = change.additions.len(),
            deletions = change.deletions.len(),
            updates = change.updates.len(),
            "folding structure updated"
        );
        if change.is_empty() {
            return Vec::new();
        }
        model.modify(change)
    }

    pub fn collapse_members(&self, model: &mut impl ProjectionModel) {
        modify_filtered(model, &AnnotationFilter::Members, false);
    }

    pub fn collapse_comments(&self, model: &mut impl ProjectionModel) {
        modify_filtered(model, &AnnotationFilter::Comments, false);
    }

    pub fn collapse_elements(&self, model: &mut impl ProjectionModel, elements: &[ElementId]) {
        let filter = AnnotationFilter::elements(elements.iter().copied(), false);
        modify_filtered(model, &filter, false);
    }

    pub fn expand_elements(&self, model: &mut impl ProjectionModel, elements: &[ElementId]) {
        let filter = AnnotationFilter::elements(elements.iter().copied(), true);
        modify_filtered(model, &filter, true);
    }
}

/// Projections of every collapsed annotation in `model`.
pub fn collapsed_projections(
    source: &str,
    model: &impl ProjectionModel,
) -> Vec<(AnnotationId, Projection)> {
    let lines = LineIndex::new(source);
    model
        .annotations()
        .into_iter()
        .filter(|(_, annotation, _)| annotation.collapsed)
        .filter_map(|(id, _, region)| Some((id, region.projection(source, &lines)?)))
        .collect()
}

type Existing = (AnnotationId, FoldAnnotation, FoldRegion);

/// Annotations of `model` per element, each list ordered by offset.
fn current_structure(model: &impl ProjectionModel) -> IndexMap<ElementId, Vec<Existing>> {
    let mut map: IndexMap<ElementId, Vec<Existing>> = IndexMap::new();
    for entry in model.annotations() {
        map.entry(entry.1.element).or_default().push(entry);
    }
    for list in map.values_mut() {
        list.sort_by_key(|(_, _, region)| region.range.start());
    }
    map
}

/// Turn deletions that reappear at the same offset into updates.
///
/// A deleted annotation matching an update takes its place and the updated
/// annotation is deleted instead; one matching an addition absorbs it.
fn match_deletions(deletions: Vec<Existing>, change: &mut ModelChange) {
    if deletions.is_empty() || (change.additions.is_empty() && change.updates.is_empty()) {
        change.deletions = deletions.into_iter().map(|(id, ..)| id).collect();
        return;
    }

    let mut replaced = Vec::new();
    let mut revived = Vec::new();
    for (id, deleted, region) in deletions {
        let same_place = |annotation: &FoldAnnotation, other: &FoldRegion| {
            annotation.is_comment == deleted.is_comment
                && other.range.start() == region.range.start()
        };

        let matched = if let Some(index) = change
            .updates
            .iter()
            .position(|update| same_place(&update.annotation, &update.region))
        {
            let update = change.updates.remove(index);
            replaced.push(update.id);
            Some((update.annotation, update.region))
        } else if let Some(index) = change
            .additions
            .iter()
            .position(|(annotation, addition)| same_place(annotation, addition))
        {
            Some(change.additions.remove(index))
        } else {
            None
        };

        match matched {
            Some((annotation, region)) => revived.push(Update {
                id,
                annotation: FoldAnnotation {
                    collapsed: deleted.collapsed,
                    ..annotation
                },
                region,
            }),
            None => change.deletions.push(id),
        }
    }
    change.deletions.extend(replaced);
    change.updates.extend(revived);
}

fn modify_filtered(model: &mut impl ProjectionModel, filter: &AnnotationFilter, expand: bool) {
    let updates: Vec<Update> = model
        .annotations()
        .into_iter()
        .filter(|(_, annotation, _)| annotation.collapsed == expand && filter.matches(annotation))
        .map(|(id, annotation, region)| Update {
            id,
            annotation: FoldAnnotation {
                collapsed: !expand,
                ..annotation
            },
            region,
        })
        .collect();
    debug!(count = updates.len(), expand, "modifying filtered folds");
    if updates.is_empty() {
        return;
    }
    let events = model.modify(ModelChange {
        updates,
        ..ModelChange::default()
    });
    if !events.is_empty() {
        trace!(count = events.len(), "ignoring changes raised by collapse state");
    }
}

/// An error on the caret line means the user is mid-edit. Adding an import
/// away from the import container still counts.
fn should_ignore(event: &ChangeEvent, source: &str) -> bool {
    let Some(caret) = event.caret else {
        return false;
    };
    if event.imports_only && !event.caret_in_import {
        return false;
    }
    if usize::from(caret) > source.len() {
        return false;
    }
    let caret_line = LineIndex::new(source).line_of(caret);
    event
        .problems
        .iter()
        .any(|problem| problem.is_error && problem.line == caret_line)
}
