//! Builder for the hide-intervals of one declaration.
//!
//! Offsets passed to the ledger are relative to a fixed base (the start of
//! the declaration). Intervals are opened and closed in strict alternation;
//! each close hands out a [`Handle`] that can later widen, narrow or reveal
//! (drop) the interval it names. [`Ledger::finish`] turns what is left into
//! absolute, sorted, merged ranges.

use text_size::{TextRange, TextSize};
use tracing::trace;

use super::error::LedgerError;

/// Names one closed interval of a [`Ledger`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Interval {
    start: u32,
    len: u32,
}

impl Interval {
    fn end(self) -> u32 {
        self.start + self.len
    }
}

#[derive(Debug)]
pub struct Ledger {
    base: TextSize,
    bound: u32,
    /// Closed intervals in insertion order, `None` once revealed.
    intervals: Vec<Option<Interval>>,
    open: Option<u32>,
    opened_at_zero: bool,
}

impl Ledger {
    /// A ledger whose offsets are relative to `base`; nothing at or past
    /// `bound` survives [`finish`](Self::finish).
    pub fn new(base: TextSize, bound: TextSize) -> Self {
        Self {
            base,
            bound: bound.into(),
            intervals: Vec::new(),
            open: None,
            opened_at_zero: false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn open(&mut self, offset: u32) -> Result<(), LedgerError> {
        if offset == 0 {
            if self.opened_at_zero {
                return Err(LedgerError::ZeroReopened);
            }
            self.opened_at_zero = true;
        }
        if let Some(open) = self.open {
            return Err(LedgerError::AlreadyOpen { open, offset });
        }
        self.open = Some(offset);
        Ok(())
    }

    pub fn close(&mut self, end: u32) -> Result<Handle, LedgerError> {
        let start = self.open.ok_or(LedgerError::NotOpen { offset: end })?;
        if end < start {
            return Err(LedgerError::EndBeforeStart { start, end });
        }
        self.open = None;
        self.intervals.push(Some(Interval {
            start,
            len: end - start,
        }));
        Ok(Handle(self.intervals.len() - 1))
    }

    /// Drop a closed interval from the output. Revealing twice is a no-op.
    pub fn reveal(&mut self, handle: Handle) {
        if let Some(slot) = self.intervals.get_mut(handle.0) {
            *slot = None;
        }
    }

    /// Grow an interval by `by` at its end.
    pub fn extend(&mut self, handle: Handle, by: u32) -> Result<(), LedgerError> {
        let interval = self.interval_mut(handle)?;
        interval.len += by;
        Ok(())
    }

    /// Shrink an interval by `by` from its start.
    pub fn trim_front(&mut self, handle: Handle, by: u32) -> Result<(), LedgerError> {
        let interval = self.interval_mut(handle)?;
        if interval.len < by {
            return Err(LedgerError::TrimTooLong {
                len: interval.len,
                by,
            });
        }
        interval.start += by;
        interval.len -= by;
        Ok(())
    }

    fn interval_mut(&mut self, handle: Handle) -> Result<&mut Interval, LedgerError> {
        self.intervals
            .get_mut(handle.0)
            .and_then(Option::as_mut)
            .ok_or(LedgerError::Revealed(handle.0))
    }

    /// Absolute hide ranges: sorted, merged, empty ones dropped, clipped to the bound.
    pub fn finish(&self) -> Vec<TextRange> {
        if let Some(open) = self.open {
            trace!(open, "unterminated interval discarded");
        }

        let mut live: Vec<Interval> = self.intervals.iter().flatten().copied().collect();
        live.sort_by_key(|interval| interval.start);

        let mut merged: Vec<Interval> = Vec::with_capacity(live.len());
        for interval in live {
            match merged.last_mut() {
                Some(prev) if interval.start <= prev.end() => {
                    let end = prev.end().max(interval.end());
                    prev.len = end - prev.start;
                }
                _ => merged.push(interval),
            }
        }

        merged
            .into_iter()
            .filter_map(|interval| self.clip(interval))
            .map(|interval| {
                TextRange::at(
                    self.base + TextSize::from(interval.start),
                    TextSize::from(interval.len),
                )
            })
            .collect()
    }

    /// Like [`finish`](Self::finish), with `prefix` placed first and `suffix`
    /// last. Both lie outside the bound and are taken as given.
    pub fn finish_bracketed(&self, prefix: TextRange, suffix: TextRange) -> Vec<TextRange> {
        let mut ranges = Vec::with_capacity(self.intervals.len() + 2);
        ranges.push(prefix);
        ranges.extend(self.finish());
        ranges.push(suffix);
        ranges
    }

    fn clip(&self, interval: Interval) -> Option<Interval> {
        if interval.len == 0 || interval.start >= self.bound {
            return None;
        }
        Some(Interval {
            start: interval.start,
            len: interval.end().min(self.bound) - interval.start,
        })
    }
}
