// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Combinatorial generators over a fixed list of elements.
//!
//! Every generator walks an index state machine and copies the selected
//! elements into one buffer that is reused on each step, so a step costs time
//! proportional to the length of the produced tuple, not to the input size.
//! The sequences are *volatile*:
//! [`current_view`](strand_core::VolatileSequence::current_view) lends the
//! buffer and `current()` returns an owned `Vec`.
//!
//! | Generator | Yields | Count for `n` items |
//! |-----------|--------|---------------------|
//! | [`cartesian_product`] | one element from each list, rightmost fastest | product of the list lengths |
//! | [`combinations`] | sorted `r`-subsets of positions | C(n, r) |
//! | [`combinations_with_replacement`] | non-decreasing `r`-tuples of positions | C(n + r - 1, r) |
//! | [`permutations`] | ordered `r`-arrangements | n! / (n - r)! |
//! | [`power_set`] | every subset, empty first | 2^n |
//!
//! Elements are told apart by position, never by value. Each generator has a
//! `_seq` variant that drains a [`Sequence`](strand_core::Sequence) first and
//! reports that sequence's terminal error, if any, once it is exhausted.
//!
//! ```rust
//! use strand_combinatorics::combinations;
//! use strand_core::{Sequence, VolatileSequence};
//!
//! let mut pairs = combinations(2, vec!['a', 'b', 'c']);
//! let mut seen = Vec::new();
//! while pairs.advance() {
//!     seen.push(pairs.current_view().iter().collect::<String>());
//! }
//! assert_eq!(seen, vec!["ab", "ac", "bc"]);
//! ```

mod buffer;
pub mod cartesian_product;
pub mod combinations;
pub mod combinations_with_replacement;
pub mod permutations;
pub mod power_set;

pub use cartesian_product::{cartesian_product, cartesian_product_seq, CartesianProduct};
pub use combinations::{combinations, combinations_seq, Combinations};
pub use combinations_with_replacement::{
    combinations_with_replacement, combinations_with_replacement_seq,
    CombinationsWithReplacement,
};
pub use permutations::{permutations, permutations_seq, Permutations};
pub use power_set::{power_set, power_set_seq, PowerSet, MAX_POWER_SET_ITEMS};
