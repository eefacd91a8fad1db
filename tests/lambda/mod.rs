//! Lambda folding tests
//!
//! Tests for:
//! - The four body shapes and clause folding
//! - Marker detection
//! - Well-formedness of hidden ranges

pub mod tests_markers;
pub mod tests_shapes;
