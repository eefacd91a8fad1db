//! Fold coordinator tests
//!
//! Tests for:
//! - Initial folding structure and collapse preferences
//! - Reconciliation across edits
//! - Bulk collapse and expand

pub mod tests_folding;
