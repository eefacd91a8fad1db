//! Error types for lambda classification.

use thiserror::Error;

/// Misuse of the [`Ledger`](super::Ledger) protocol.
///
/// These are programming defects in the caller, not bad input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("interval already open at {open}, cannot open another at {offset}")]
    AlreadyOpen { open: u32, offset: u32 },

    #[error("no open interval to close at {offset}")]
    NotOpen { offset: u32 },

    #[error("interval cannot end at {end} before its start {start}")]
    EndBeforeStart { start: u32, end: u32 },

    #[error("an interval was already opened at offset 0")]
    ZeroReopened,

    #[error("interval #{0} was already revealed")]
    Revealed(usize),

    #[error("cannot trim {by} from an interval of length {len}")]
    TrimTooLong { len: u32, by: u32 },
}

/// Why a declaration could not be folded as a lambda.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifyError {
    /// Neither marker form occurs in the declaration.
    #[error("declaration has no lambda marker")]
    MissingMarker,

    /// Both marker forms occur in the declaration.
    #[error("declaration has both lambda marker forms")]
    AmbiguousMarker,

    /// Something other than whitespace sits between the parameter list and the marker.
    #[error("unexpected text between the parameter list and the marker at {offset}")]
    MisplacedMarker { offset: u32 },

    /// The token stream ended (or could not be lexed) before the named construct.
    #[error("{0} not found")]
    PatternNotFound(&'static str),

    /// Offsets computed from the scan contradict each other.
    #[error("inconsistent offsets: {0}")]
    Inconsistent(String),

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

impl ClassifyError {
    /// Whether this indicates a defect rather than input that simply does not fold.
    pub fn is_fault(&self) -> bool {
        matches!(self, Self::Inconsistent(_) | Self::Ledger(_))
    }

    pub(crate) fn inconsistent(message: impl Into<String>) -> Self {
        Self::Inconsistent(message.into())
    }
}
