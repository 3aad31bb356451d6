// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Combinators, reducers and collectors for strand sequences.
//!
//! Every operator lives in its own module and is exposed through an
//! extension trait implemented for all [`Sequence`](strand_core::Sequence)
//! types, so operators chain with method syntax:
//!
//! ```rust
//! use strand_ops::prelude::*;
//! use strand_source::range_from;
//!
//! let squares_of_odds = range_from(1, 20)
//!     .filter(|x| x % 2 == 1)
//!     .map(|x| x * x)
//!     .limit(4)
//!     .into_vec();
//! assert_eq!(squares_of_odds, vec![1, 9, 25, 49]);
//! ```
//!
//! # Operator Categories
//!
//! ## Transformation
//! - [`map`](MapExt::map), [`map_with_error`](MapWithErrorExt::map_with_error),
//!   [`accumulate`](AccumulateExt::accumulate),
//!   [`enumerate`](EnumerateExt::enumerate), [`inspect`](InspectExt::inspect)
//!
//! ## Filtering
//! - [`filter`](FilterExt::filter), [`drop_while`](DropWhileExt::drop_while),
//!   [`take_while`](TakeWhileExt::take_while), [`limit`](LimitExt::limit),
//!   [`skip`](SkipExt::skip), [`slice`](SliceExt::slice),
//!   [`step_by`](StepByExt::step_by), [`compress`](CompressExt::compress)
//!
//! ## Combining
//! - [`chain`](ChainExt::chain), [`chain_all`], [`chain_from`],
//!   [`chain_map`](ChainMapExt::chain_map), [`zip`](zip()), [`zip_longest`](zip_longest()),
//!   [`pairwise`](PairwiseExt::pairwise)
//!
//! ## Materializing
//! - [`group_by`](GroupByExt::group_by) holds one group at a time.
//! - [`sort`](SortExt::sort) and [`aggregate_by`](ConsumeExt::aggregate_by)
//!   hold the whole input.
//!
//! ## Consuming
//! - [`ReduceExt`], [`QuantifyExt`], [`ConsumeExt`] and [`CollectExt`]
//!
//! # Exhaustion
//!
//! Operators that pull from their sources on their own (`limit`, `skip`,
//! `zip`, `chain` and the like) remember that a source ended and never
//! advance it again. Pure pass-through operators such as `map` forward every
//! call, so the source's own behavior after exhaustion shows through.

pub mod accumulate;
pub mod chain;
pub mod chain_from;
pub mod collect;
pub mod compress;
pub mod consume;
pub mod drop_while;
pub mod enumerate;
pub mod filter;
pub mod group_by;
pub mod inspect;
pub mod limit;
pub mod map;
pub mod map_with_error;
pub mod pairwise;
pub mod prelude;
pub mod quantify;
pub mod reduce;
pub mod skip;
pub mod slice;
pub mod sort;
pub mod step_by;
pub mod take_while;
pub mod zip;
pub mod zip_longest;

pub use accumulate::{Accumulate, AccumulateExt};
pub use chain::{chain_all, Chain, ChainAll, ChainExt};
pub use chain_from::{chain_from, ChainFrom, ChainMapExt};
pub use collect::{BlockingSender, CollectExt};
pub use compress::{Compress, CompressExt};
pub use consume::ConsumeExt;
pub use drop_while::{DropWhile, DropWhileExt};
pub use enumerate::{Enumerate, EnumerateExt};
pub use filter::{Filter, FilterExt};
pub use group_by::{Group, GroupBy, GroupByExt};
pub use inspect::{Inspect, InspectExt};
pub use limit::{Limit, LimitExt};
pub use map::{Map, MapExt};
pub use map_with_error::{MapWithError, MapWithErrorExt};
pub use pairwise::{Pairwise, PairwiseExt, PairwiseLongest};
pub use quantify::QuantifyExt;
pub use reduce::ReduceExt;
pub use skip::{Skip, SkipExt};
pub use slice::SliceExt;
pub use sort::{Sort, SortExt};
pub use step_by::{StepBy, StepByExt};
pub use take_while::{TakeWhile, TakeWhileExt};
pub use zip::{zip, Zip, ZipExt};
pub use zip_longest::{zip_longest, ZipLongest, ZipLongestExt};
