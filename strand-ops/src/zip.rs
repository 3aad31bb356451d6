// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Zip operator - steps several sequences in lockstep.
//!
//! Every step yields one element from each source, in source order, stored
//! in a buffer that is reused across steps. The result is therefore
//! *volatile*: [`current_view`](VolatileSequence::current_view) lends the
//! buffer, while `current()` returns an owned copy.
//!
//! The sequence ends as soon as any source does. Sources after the exhausted
//! one are not advanced on that step. The reported error is the first one
//! found scanning the sources in order.
//!
//! ```rust
//! use strand_core::{Sequence, VolatileSequence};
//! use strand_ops::zip;
//! use strand_source::seq;
//!
//! let mut zipped = zip(vec![seq![1, 2, 3], seq![10, 20]]);
//! assert!(zipped.advance());
//! assert_eq!(zipped.current_view(), &[1, 10]);
//! assert!(zipped.advance());
//! assert_eq!(zipped.current(), vec![2, 20]);
//! assert!(!zipped.advance());
//! ```

use strand_core::{Sequence, SequenceError, VolatileSequence};

/// Sequence returned by [`zip`] and [`ZipExt::zip`].
#[derive(Debug, Clone)]
pub struct Zip<S: Sequence> {
    sources: Vec<S>,
    buffer: Vec<S::Item>,
    done: bool,
}

impl<S> Sequence for Zip<S>
where
    S: Sequence,
    S::Item: Clone,
{
    type Item = Vec<S::Item>;

    fn advance(&mut self) -> bool {
        if self.done || self.sources.is_empty() {
            self.done = true;
            return false;
        }
        self.buffer.clear();
        for source in &mut self.sources {
            if !source.advance() {
                self.done = true;
                return false;
            }
            self.buffer.push(source.current());
        }
        true
    }

    fn current(&mut self) -> Vec<S::Item> {
        self.buffer.clone()
    }

    fn error(&self) -> Option<&SequenceError> {
        self.sources.iter().find_map(Sequence::error)
    }

    fn is_volatile(&self) -> bool {
        true
    }
}

impl<S> VolatileSequence for Zip<S>
where
    S: Sequence,
    S::Item: Clone,
{
    type Element = S::Item;

    fn current_view(&mut self) -> &[S::Item] {
        &self.buffer
    }
}

/// Zips `sources` together, stopping at the shortest.
///
/// Zero sources give an empty sequence.
pub fn zip<S: Sequence>(sources: Vec<S>) -> Zip<S> {
    let width = sources.len();
    Zip {
        sources,
        buffer: Vec::with_capacity(width),
        done: false,
    }
}

/// Extension trait providing the `zip` operator for sequences.
pub trait ZipExt: Sequence + Sized {
    /// Zips `self` with `others`, `self` supplying the first slot of every
    /// tuple.
    fn zip(self, others: Vec<Self>) -> Zip<Self>;
}

impl<S: Sequence> ZipExt for S {
    fn zip(self, others: Vec<Self>) -> Zip<Self> {
        let mut sources = Vec::with_capacity(others.len() + 1);
        sources.push(self);
        sources.extend(others);
        zip(sources)
    }
}
