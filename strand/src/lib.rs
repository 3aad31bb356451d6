// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Strand
//!
//! Lazy, pull-based sequences with composable sources, combinators,
//! collectors and combinatorial generators.
//!
//! ## Overview
//!
//! A [`Sequence`] is a cursor that starts before its first element. The
//! consumer calls [`advance`](Sequence::advance) to move it and
//! [`current`](Sequence::current) to read the element under it. Once
//! `advance` returns `false`, [`error`](Sequence::error) tells a clean end
//! from a failure. Nothing is computed until a consumer pulls.
//!
//! The workspace is split by concern and this crate re-exports all of it:
//!
//! - `strand-core`: the protocol, errors, [`Pair`] and the std `Iterator` bridge
//! - `strand-source`: leaf generators such as [`range`], [`over_str`] and [`over_channel`]
//! - `strand-ops`: combinators, reducers and collectors as extension traits
//! - `strand-combinatorics`: products, combinations, permutations and power sets
//!
//! ## Quick Start
//!
//! ```rust
//! use strand::prelude::*;
//!
//! let evens: Vec<u32> = range(20u32)
//!     .filter(|x| x % 2 == 0)
//!     .skip(1)
//!     .limit(3)
//!     .into_vec();
//! assert_eq!(evens, vec![2, 4, 6]);
//!
//! let pairs = combinations(2, vec!['a', 'b', 'c'])
//!     .map(|t| t.into_iter().collect::<String>())
//!     .into_vec();
//! assert_eq!(pairs, vec!["ab", "ac", "bc"]);
//! ```
//!
//! ## Volatile Sequences
//!
//! [`zip`], [`zip_longest`] and the combinatorial generators refill one
//! buffer per step. [`VolatileSequence::current_view`] lends that buffer,
//! while `current()` and every collector hand out owned copies.
//!
//! ## Feature Flags
//!
//! - `tracing` (default): log through `tracing`
//! - `csv` (default): read CSV documents with [`over_csv`]
//! - `futures`: bridge sequences into `futures::Stream`

pub mod receiver_ext;

pub use strand_core::{
    into_iter, to_non_volatile, BoxSequence, IntoIter, IntoSequenceError, NonVolatile, Numeric,
    NumericOrd, Pair, Result, Sequence, SequenceError, VolatileSequence,
};

pub use strand_source::{
    cycle, cycle_seq, empty, error, from_fn_reader, from_iter, from_vec, infinite_range,
    infinite_range_from, infinite_range_with_step, over_channel, over_lines, over_map,
    over_map_keys, over_map_values, over_records, over_slice, over_str, over_utf8, range,
    range_from, range_with_step, repeat, repeat_seq, repeatedly_apply, seq, BlockingReceiver,
    RecordReader, SliceSource,
};
#[cfg(feature = "csv")]
pub use strand_source::over_csv;

pub use strand_ops::{chain_all, chain_from, zip, zip_longest, BlockingSender, Group};

pub use strand_combinatorics::{
    cartesian_product, cartesian_product_seq, combinations, combinations_seq,
    combinations_with_replacement, combinations_with_replacement_seq, permutations,
    permutations_seq, power_set, power_set_seq, MAX_POWER_SET_ITEMS,
};

pub use receiver_ext::ReceiverExt;

/// Operator structs and extension traits, for naming combinator types.
pub mod ops {
    pub use strand_ops::*;
}

/// Source structs, for naming generator types.
pub mod source {
    pub use strand_source::*;
}

/// Combinatorial generator structs.
pub mod combinatorics {
    pub use strand_combinatorics::*;
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::receiver_ext::ReceiverExt;
    pub use strand_combinatorics::{
        cartesian_product, combinations, combinations_with_replacement, permutations, power_set,
    };
    pub use strand_core::{BoxSequence, Pair, Sequence, SequenceError, VolatileSequence};
    pub use strand_ops::prelude::*;
    pub use strand_source::{
        cycle, empty, from_iter, from_vec, infinite_range, over_slice, over_str, range,
        range_from, repeat, seq,
    };
}
