// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Zip-longest operator - steps several sequences until all are exhausted.
//!
//! Slots of sources that already ended are padded with a fill value. Like
//! [`zip`](crate::zip), the result is volatile and reuses one buffer.
//!
//! A source ending with an error is treated as exhausted: the remaining
//! sources keep going, and the first error (in source order) is reported
//! once every source is done.

use strand_core::{Sequence, SequenceError, VolatileSequence};

/// Sequence returned by [`zip_longest`] and [`ZipLongestExt::zip_longest`].
#[derive(Debug, Clone)]
pub struct ZipLongest<S: Sequence> {
    sources: Vec<S>,
    exhausted: Vec<bool>,
    fill: S::Item,
    buffer: Vec<S::Item>,
    done: bool,
}

impl<S> Sequence for ZipLongest<S>
where
    S: Sequence,
    S::Item: Clone,
{
    type Item = Vec<S::Item>;

    fn advance(&mut self) -> bool {
        if self.done {
            return false;
        }
        self.buffer.clear();
        let mut any_advanced = false;
        for (source, exhausted) in self.sources.iter_mut().zip(self.exhausted.iter_mut()) {
            if !*exhausted && source.advance() {
                any_advanced = true;
                self.buffer.push(source.current());
            } else {
                *exhausted = true;
                self.buffer.push(self.fill.clone());
            }
        }
        if !any_advanced {
            self.buffer.clear();
            self.done = true;
        }
        any_advanced
    }

    fn current(&mut self) -> Vec<S::Item> {
        self.buffer.clone()
    }

    fn error(&self) -> Option<&SequenceError> {
        if self.done {
            self.sources.iter().find_map(Sequence::error)
        } else {
            None
        }
    }

    fn is_volatile(&self) -> bool {
        true
    }
}

impl<S> VolatileSequence for ZipLongest<S>
where
    S: Sequence,
    S::Item: Clone,
{
    type Element = S::Item;

    fn current_view(&mut self) -> &[S::Item] {
        &self.buffer
    }
}

/// Zips `sources` together, padding exhausted ones with `fill` until every
/// source has ended.
///
/// ```rust
/// use strand_ops::{zip_longest, CollectExt, MapExt};
/// use strand_source::over_str;
///
/// let rows = zip_longest('-', vec![over_str("ab"), over_str("123"), over_str("x")])
///     .map(|row| row.into_iter().collect::<String>())
///     .into_vec();
/// assert_eq!(rows, vec!["a1x", "b2-", "-3-"]);
/// ```
pub fn zip_longest<S: Sequence>(fill: S::Item, sources: Vec<S>) -> ZipLongest<S> {
    let width = sources.len();
    ZipLongest {
        sources,
        exhausted: vec![false; width],
        fill,
        buffer: Vec::with_capacity(width),
        done: false,
    }
}

/// Extension trait providing the `zip_longest` operator for sequences.
pub trait ZipLongestExt: Sequence + Sized {
    /// Zips `self` with `others` until all are exhausted, padding with `fill`.
    fn zip_longest(self, fill: Self::Item, others: Vec<Self>) -> ZipLongest<Self>;
}

impl<S: Sequence> ZipLongestExt for S {
    fn zip_longest(self, fill: Self::Item, others: Vec<Self>) -> ZipLongest<Self> {
        let mut sources = Vec::with_capacity(others.len() + 1);
        sources.push(self);
        sources.extend(others);
        zip_longest(fill, sources)
    }
}
