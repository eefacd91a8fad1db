//! Editor folding: the fold coordinator for a Java compilation unit.
//!
//! This module turns the host's element tree into fold annotations and
//! keeps the host's annotation model in step with it as the unit is edited.
//!
//! ## Design Principles
//!
//! 1. **Host agnostic**: the element tree comes in as [`Declaration`]s and
//!    folds go out through the [`ProjectionModel`] trait
//! 2. **Stable identity**: reconciliation updates existing annotations
//!    instead of re-creating them, so collapsed folds stay collapsed
//! 3. **Lambda folds**: marked anonymous types are projected through
//!    [`crate::lambda::classify`], everything else folds by lines
//!
//! ## Usage
//!
//! ```ignore
//! use lambdafold::ide::{
//!     FoldModel, FoldingPreferences, FoldingProvider, Snapshot, collapsed_projections,
//! };
//!
//! let mut model = FoldModel::new();
//! let mut provider = FoldingProvider::new(FoldingPreferences::default());
//! provider.initialize(Snapshot::new(source, &declarations), &mut model);
//! let folded = collapsed_projections(source, &model);
//! ```

mod catalog;
mod filter;
mod folding;
mod model;
mod positions;
mod preferences;
mod regions;

pub use catalog::{Declaration, DeclarationKind, ElementId, TypeFlags, find_lambda_method};
pub use filter::AnnotationFilter;
pub use folding::{FoldingProvider, Snapshot, collapsed_projections};
pub use model::{
    AnnotationId, ChangeEvent, FoldAnnotation, FoldModel, ModelChange, Problem, ProjectionModel,
    Update,
};
pub use positions::{FoldRegion, Projection, RegionKind};
pub use preferences::FoldingPreferences;
pub use regions::{align_region, header_comment, split_leading_comments};
