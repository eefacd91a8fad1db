//! Lambda-style folding of anonymous single-method classes.
//!
//! A method opts in with a marker comment right after its parameter list:
//!
//! ```text
//! new Comparator<String>() {
//!     public int compare(String a, String b)/* => */{
//!         return a.length() - b.length();
//!     }
//! }
//! ```
//!
//! [`classify`] computes the ranges to hide so the declaration displays as
//! `(a, b) => a.length() - b.length()`. The source text is never changed.
//!
//! ## Pieces
//!
//! - [`Marker`] - finds the `/* => */` or `// => ` marker
//! - [`Ledger`] - accumulates hide intervals and finalizes them
//! - [`classify`] - drives a [`TokenCursor`](crate::parser::TokenCursor) over
//!   the declaration and scripts the ledger per body shape

mod classify;
mod error;
mod ledger;
mod marker;

pub use classify::{LambdaFold, Shape, classify};
pub use error::{ClassifyError, LedgerError};
pub use ledger::{Handle, Ledger};
pub use marker::{BLOCK_MARKER, LINE_MARKER, Marker, MarkerForm, has_single_marker};
