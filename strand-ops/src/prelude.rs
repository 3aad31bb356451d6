// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Prelude module re-exporting all commonly used traits and types.
//!
//! Import this module for convenient access to all strand operators:
//!
//! ```rust
//! use strand_ops::prelude::*;
//! use strand_source::seq;
//!
//! let total = seq![1, 2, 3].map(|x| x * 10).sum();
//! assert_eq!(total, 60);
//! ```
//!
//! # Contents
//!
//! ## Extension Traits (Operators)
//!
//! - [`AccumulateExt`] - Running folds
//! - [`ChainExt`] - Concatenate two sequences
//! - [`ChainMapExt`] - Flat map
//! - [`CompressExt`] - Select elements by a partner sequence
//! - [`DropWhileExt`] - Skip a leading run
//! - [`EnumerateExt`] - Attach running indices
//! - [`FilterExt`] - Keep matching elements
//! - [`GroupByExt`] - Split into runs of equal keys
//! - [`InspectExt`] - Side-effect observation for debugging
//! - [`LimitExt`] - Take the first n elements
//! - [`MapExt`] - Transform elements
//! - [`MapWithErrorExt`] - Transform elements with a fallible function
//! - [`PairwiseExt`] - Two-source zips
//! - [`SkipExt`] - Drop the first n elements
//! - [`SliceExt`] - Keep a positional window
//! - [`SortExt`] - Materialize and sort
//! - [`StepByExt`] - Keep every nth element
//! - [`TakeWhileExt`] - Stop at the first failing element
//! - [`ZipExt`] / [`ZipLongestExt`] - Lockstep zips
//!
//! ## Consumers
//!
//! - [`CollectExt`] - Containers, channels and iterators
//! - [`ConsumeExt`] - Counting, draining and grouping
//! - [`QuantifyExt`] - Short-circuiting predicates
//! - [`ReduceExt`] - Folds, sums and extremes
//!
//! ## Free Functions
//!
//! - [`chain_all`], [`chain_from`], [`zip`], [`zip_longest`]

pub use crate::accumulate::AccumulateExt;
pub use crate::chain::{chain_all, ChainExt};
pub use crate::chain_from::{chain_from, ChainMapExt};
pub use crate::collect::{BlockingSender, CollectExt};
pub use crate::compress::CompressExt;
pub use crate::consume::ConsumeExt;
pub use crate::drop_while::DropWhileExt;
pub use crate::enumerate::EnumerateExt;
pub use crate::filter::FilterExt;
pub use crate::group_by::GroupByExt;
pub use crate::inspect::InspectExt;
pub use crate::limit::LimitExt;
pub use crate::map::MapExt;
pub use crate::map_with_error::MapWithErrorExt;
pub use crate::pairwise::PairwiseExt;
pub use crate::quantify::QuantifyExt;
pub use crate::reduce::ReduceExt;
pub use crate::skip::SkipExt;
pub use crate::slice::SliceExt;
pub use crate::sort::SortExt;
pub use crate::step_by::StepByExt;
pub use crate::take_while::TakeWhileExt;
pub use crate::zip::{zip, ZipExt};
pub use crate::zip_longest::{zip_longest, ZipLongestExt};

pub use strand_core::{Pair, Sequence, SequenceError, VolatileSequence};
