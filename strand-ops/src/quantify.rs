// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Short-circuiting predicates.
//!
//! These stop pulling as soon as the answer is known, so the sequence may be
//! left partially consumed.
//!
//! ```rust
//! use strand_ops::QuantifyExt;
//! use strand_source::{empty, seq};
//!
//! assert!(seq![false, true, false].any());
//! assert!(!empty::<bool>().any());
//! assert!(empty::<bool>().all());
//! assert!(seq![1, 3, 5].none_func(|x| x % 2 == 0));
//! ```

use strand_core::{into_iter, Sequence};

/// Extension trait providing the short-circuiting predicates for sequences.
pub trait QuantifyExt: Sequence + Sized {
    /// `true` if any element is `true`.
    fn any(self) -> bool
    where
        Self: Sequence<Item = bool>;

    /// `true` if `f` holds for any element.
    fn any_func<F>(self, f: F) -> bool
    where
        F: FnMut(&Self::Item) -> bool;

    /// `true` if every element is `true`. Empty sequences give `true`.
    fn all(self) -> bool
    where
        Self: Sequence<Item = bool>;

    /// `true` if `f` holds for every element. Empty sequences give `true`.
    fn all_func<F>(self, f: F) -> bool
    where
        F: FnMut(&Self::Item) -> bool;

    /// `true` if no element is `true`.
    fn none(self) -> bool
    where
        Self: Sequence<Item = bool>;

    /// `true` if `f` holds for no element.
    fn none_func<F>(self, f: F) -> bool
    where
        F: FnMut(&Self::Item) -> bool;
}

impl<S: Sequence> QuantifyExt for S {
    fn any(self) -> bool
    where
        Self: Sequence<Item = bool>,
    {
        self.any_func(|flag| *flag)
    }

    fn any_func<F>(self, mut f: F) -> bool
    where
        F: FnMut(&Self::Item) -> bool,
    {
        into_iter(self).any(|item| f(&item))
    }

    fn all(self) -> bool
    where
        Self: Sequence<Item = bool>,
    {
        self.all_func(|flag| *flag)
    }

    fn all_func<F>(self, mut f: F) -> bool
    where
        F: FnMut(&Self::Item) -> bool,
    {
        into_iter(self).all(|item| f(&item))
    }

    fn none(self) -> bool
    where
        Self: Sequence<Item = bool>,
    {
        !self.any()
    }

    fn none_func<F>(self, f: F) -> bool
    where
        F: FnMut(&Self::Item) -> bool,
    {
        !self.any_func(f)
    }
}
