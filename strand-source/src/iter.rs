// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use strand_core::Sequence;

/// Sequence pulling from a standard iterator.
#[derive(Debug, Clone)]
pub struct FromIter<I>
where
    I: Iterator,
{
    iter: I,
    item: Option<I::Item>,
}

impl<I> Sequence for FromIter<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;

    fn advance(&mut self) -> bool {
        self.item = self.iter.next();
        self.item.is_some()
    }

    fn current(&mut self) -> I::Item {
        self.item
            .clone()
            .unwrap_or_else(|| panic!("current() called without a successful advance()"))
    }
}

/// Wraps anything iterable as a sequence.
pub fn from_iter<I>(iterable: I) -> FromIter<I::IntoIter>
where
    I: IntoIterator,
{
    FromIter {
        iter: iterable.into_iter(),
        item: None,
    }
}
