// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Bridge from the [`Sequence`] protocol to [`std::iter::Iterator`].

use crate::error::SequenceError;
use crate::sequence::Sequence;
use std::iter::FusedIterator;

/// A [`std::iter::Iterator`] over the elements of a [`Sequence`].
///
/// Elements are read with [`Sequence::current_copy`], so volatile sequences
/// yield independent values. The iterator is fused: once the sequence is
/// exhausted it is never advanced again, and its terminal error stays
/// available through [`IntoIter::error`].
///
/// ```
/// use strand_core::{into_iter, Sequence};
///
/// struct Upto(u8, u8);
///
/// impl Sequence for Upto {
///     type Item = u8;
///     fn advance(&mut self) -> bool {
///         self.0 += 1;
///         self.0 <= self.1
///     }
///     fn current(&mut self) -> u8 {
///         self.0
///     }
/// }
///
/// let doubled: Vec<u8> = into_iter(Upto(0, 3)).map(|x| x * 2).collect();
/// assert_eq!(doubled, vec![2, 4, 6]);
/// ```
#[derive(Debug, Clone)]
pub struct IntoIter<S> {
    inner: S,
    finished: bool,
}

impl<S> IntoIter<S> {
    /// Wraps `inner`.
    pub const fn new(inner: S) -> Self {
        Self {
            inner,
            finished: false,
        }
    }

    /// Returns the wrapped sequence.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: Sequence> IntoIter<S> {
    /// The terminal error of the wrapped sequence, once iteration finished.
    pub fn error(&self) -> Option<&SequenceError> {
        if self.finished {
            self.inner.error()
        } else {
            None
        }
    }
}

impl<S: Sequence> Iterator for IntoIter<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        if self.inner.advance() {
            Some(self.inner.current_copy())
        } else {
            self.finished = true;
            None
        }
    }
}

impl<S: Sequence> FusedIterator for IntoIter<S> {}

/// Adapts a sequence into a [`std::iter::Iterator`].
pub fn into_iter<S: Sequence>(seq: S) -> IntoIter<S> {
    IntoIter::new(seq)
}
