//! # lambda-fold
//!
//! Editor folding that shows anonymous single-method classes as lambdas.
//!
//! An anonymous class whose method carries a `/* => */` or `// => ` marker
//! is folded so only the lambda-like skeleton stays visible:
//!
//! ```text
//! new Function<String, Integer>() {          s => s.length()
//!     public Integer apply(String s)/* => */{
//!         return s.length();           ──►
//!     }
//! }
//! ```
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide       → Fold coordinator: structure, positions, reconciliation
//!   ↓
//! lambda    → Marker detection, interval ledger, shape classifier
//!   ↓
//! parser    → Logos lexer, token cursor
//!   ↓
//! base      → Primitives (TextRange, LineIndex)
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → lambda → ide)
// ============================================================================

/// Foundation types: TextRange, LineIndex
pub mod base;

/// Parser: Logos lexer and the token cursor used by the classifier
pub mod parser;

/// Lambda folding: which ranges of a marked declaration to hide
pub mod lambda;

/// Editor folding: annotations, positions, reconciliation with the host
pub mod ide;

// Re-export foundation types
pub use base::{LineCol, LineIndex, TextRange, TextSize};

// Re-export the entry points
pub use ide::{FoldModel, FoldingPreferences, FoldingProvider, ProjectionModel, Snapshot};
pub use lambda::{ClassifyError, LambdaFold, classify};
