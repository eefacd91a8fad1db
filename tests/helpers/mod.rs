//! Shared helpers for integration tests.

pub mod fold_helpers;
pub mod source_fixtures;
