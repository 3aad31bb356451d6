// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::fmt::Debug;
use strand_core::{into_iter, Sequence, SequenceError};

/// Drains `seq` into a vector, ignoring any terminal error.
pub fn collect_all<S: Sequence>(seq: S) -> Vec<S::Item> {
    into_iter(seq).collect()
}

/// Drains `seq` into a vector and returns it with a copy of the terminal error.
pub fn collect_with_error<S: Sequence>(seq: S) -> (Vec<S::Item>, Option<SequenceError>) {
    let mut iter = into_iter(seq);
    let items = iter.by_ref().collect();
    let error = iter.error().cloned();
    (items, error)
}

/// Asserts that `seq` yields exactly `expected` and ends without an error.
pub fn assert_sequence_eq<S>(seq: S, expected: &[S::Item])
where
    S: Sequence,
    S::Item: Debug + PartialEq,
{
    let (items, error) = collect_with_error(seq);
    assert_eq!(items, expected);
    assert!(error.is_none(), "unexpected terminal error: {error:?}");
}

/// Asserts that `seq` yields the elements of `expected` in any order.
pub fn assert_set_eq<S>(seq: S, expected: &[S::Item])
where
    S: Sequence,
    S::Item: Debug + Ord + Clone,
{
    let mut items = collect_all(seq);
    let mut expected = expected.to_vec();
    items.sort();
    expected.sort();
    assert_eq!(items, expected);
}
