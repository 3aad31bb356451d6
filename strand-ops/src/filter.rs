// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Filter operator - keeps elements matching a predicate.
//!
//! ```rust
//! use strand_ops::FilterExt;
//! use strand_source::seq;
//! use strand_test_utils::assert_sequence_eq;
//!
//! assert_sequence_eq(seq![1, 2, 3, 4, 5, 6].filter(|x| x % 2 == 1), &[1, 3, 5]);
//! assert_sequence_eq(seq![2, 4, 6].filter(|x| x % 2 == 1), &[]);
//! ```

use strand_core::{Sequence, SequenceError};

/// Sequence returned by [`FilterExt::filter`].
#[derive(Debug, Clone)]
pub struct Filter<S: Sequence, P> {
    source: S,
    keep: P,
    item: Option<S::Item>,
    done: bool,
}

impl<S, P> Sequence for Filter<S, P>
where
    S: Sequence,
    S::Item: Clone,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn advance(&mut self) -> bool {
        if self.done {
            return false;
        }
        while self.source.advance() {
            let item = self.source.current();
            if (self.keep)(&item) {
                self.item = Some(item);
                return true;
            }
        }
        self.item = None;
        self.done = true;
        false
    }

    fn current(&mut self) -> S::Item {
        self.item
            .clone()
            .unwrap_or_else(|| panic!("current() called without a successful advance()"))
    }

    fn error(&self) -> Option<&SequenceError> {
        self.source.error()
    }
}

/// Extension trait providing the `filter` operator for sequences.
pub trait FilterExt: Sequence + Sized {
    /// Yields only the elements for which `keep` returns `true`.
    ///
    /// The predicate runs exactly once per source element.
    fn filter<P>(self, keep: P) -> Filter<Self, P>
    where
        P: FnMut(&Self::Item) -> bool;
}

impl<S: Sequence> FilterExt for S {
    fn filter<P>(self, keep: P) -> Filter<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        Filter {
            source: self,
            keep,
            item: None,
            done: false,
        }
    }
}
