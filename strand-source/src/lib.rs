// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Leaf generators for strand sequences.
//!
//! Every other component pulls from one of these sources:
//!
//! | Source | Constructor | Ends? | Errors? |
//! |--------|-------------|-------|---------|
//! | Slices and vectors | [`over_slice`], [`from_vec`], [`seq!`] | yes | never |
//! | Any std iterator | [`from_iter`] | when the iterator does | never |
//! | Hash maps | [`over_map`], [`over_map_keys`], [`over_map_values`] | yes | never |
//! | Text | [`over_str`], [`over_utf8`] | yes | never |
//! | Channels | [`over_channel`] | when every sender is gone | never |
//! | Constants | [`empty`], [`error`] | immediately | [`error`] only |
//! | Ranges | [`range`], [`infinite_range`] and friends | bounded ones | never |
//! | Replays | [`cycle`], [`repeat`], [`repeatedly_apply`] | [`cycle`] only | never |
//! | Record readers | [`over_records`], [`from_fn_reader`], [`over_lines`] | at end of input | on read failure |

pub mod channel;
pub mod constant;
pub mod cycle;
pub mod iter;
pub mod map;
pub mod range;
pub mod record;
pub mod repeatedly_apply;
pub mod slice;
pub mod text;

pub use channel::{over_channel, BlockingReceiver, ChannelSource};
pub use constant::{empty, error, Empty, ErrorSource};
pub use cycle::{cycle, cycle_seq, repeat, repeat_seq, Cycle, Repeat};
pub use iter::{from_iter, FromIter};
pub use map::{over_map, over_map_keys, over_map_values, MapEntries, MapKeys, MapValues};
pub use range::{
    infinite_range, infinite_range_from, infinite_range_with_step, range, range_from,
    range_with_step, InfiniteRange, Range,
};
pub use record::{from_fn_reader, over_lines, over_records, FnReader, LineReader, RecordReader, Records};
#[cfg(feature = "csv")]
pub use record::{over_csv, CsvReader};
pub use repeatedly_apply::{repeatedly_apply, RepeatedlyApply};
pub use slice::{from_vec, over_slice, SliceSource};
pub use text::{over_str, over_utf8, Utf8Source};

/// Builds a sequence over the listed elements.
///
/// ```
/// use strand_core::Sequence;
/// use strand_source::seq;
///
/// let mut letters = seq!['a', 'b'];
/// assert!(letters.advance());
/// assert_eq!(letters.current(), 'a');
/// assert!(letters.advance());
/// assert_eq!(letters.current(), 'b');
/// assert!(!letters.advance());
/// ```
#[macro_export]
macro_rules! seq {
    () => {
        $crate::from_vec(::std::vec::Vec::new())
    };
    ($($item:expr),+ $(,)?) => {
        $crate::from_vec(::std::vec![$($item),+])
    };
}
