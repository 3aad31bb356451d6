// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::error::SequenceError;

/// A stateful cursor over a lazy, possibly infinite series of elements.
///
/// A sequence starts *before* its first element. Iteration follows this
/// pattern:
///
/// ```
/// # use strand_core::Sequence;
/// # fn drain<S: Sequence>(mut seq: S) -> strand_core::Result<Vec<S::Item>> {
/// let mut out = Vec::new();
/// while seq.advance() {
///     out.push(seq.current());
/// }
/// if let Some(err) = seq.error() {
///     return Err(err.clone());
/// }
/// # Ok(out)
/// # }
/// ```
///
/// Calling [`advance`](Sequence::advance) or [`current`](Sequence::current)
/// again after `advance` returned `false` is unspecified behavior and will
/// usually panic. No implementation in this workspace relies on sequences
/// tolerating it.
pub trait Sequence {
    /// The element type
    type Item;

    /// Tries to move to the next element, or to the first one on the first call.
    ///
    /// Returns `true` if an element is available.
    fn advance(&mut self) -> bool;

    /// Returns the element at the current position.
    ///
    /// Only valid after [`advance`](Sequence::advance) returned `true`.
    /// Calling it twice at the same step yields equal values, but combinators
    /// with side-effecting production run their side effect twice.
    fn current(&mut self) -> Self::Item;

    /// Returns the terminal error, if production failed.
    ///
    /// Only meaningful after [`advance`](Sequence::advance) returned `false`.
    fn error(&self) -> Option<&SequenceError> {
        None
    }

    /// Returns a value equal to [`current`](Sequence::current) that shares no
    /// storage with the sequence.
    fn current_copy(&mut self) -> Self::Item {
        self.current()
    }

    /// Whether this sequence refills a reused buffer on every step.
    ///
    /// Volatile sequences also implement [`VolatileSequence`].
    fn is_volatile(&self) -> bool {
        false
    }
}

/// Capability of sequences whose elements live in a buffer they overwrite on
/// every [`advance`](Sequence::advance).
///
/// [`current_view`](VolatileSequence::current_view) lends that buffer without
/// allocating; the borrow ends before the sequence can be advanced again.
/// [`Sequence::current`] on the same sequence returns an owned copy.
pub trait VolatileSequence: Sequence {
    /// Type of a single slot in the reused buffer
    type Element;

    /// Borrows the buffer holding the current element.
    fn current_view(&mut self) -> &[Self::Element];
}

/// A type-erased sequence, useful for chaining sequences of different types.
pub type BoxSequence<'a, T> = Box<dyn Sequence<Item = T> + 'a>;

impl<S> Sequence for &mut S
where
    S: Sequence + ?Sized,
{
    type Item = S::Item;

    fn advance(&mut self) -> bool {
        (**self).advance()
    }

    fn current(&mut self) -> Self::Item {
        (**self).current()
    }

    fn error(&self) -> Option<&SequenceError> {
        (**self).error()
    }

    fn current_copy(&mut self) -> Self::Item {
        (**self).current_copy()
    }

    fn is_volatile(&self) -> bool {
        (**self).is_volatile()
    }
}

impl<S> Sequence for Box<S>
where
    S: Sequence + ?Sized,
{
    type Item = S::Item;

    fn advance(&mut self) -> bool {
        (**self).advance()
    }

    fn current(&mut self) -> Self::Item {
        (**self).current()
    }

    fn error(&self) -> Option<&SequenceError> {
        (**self).error()
    }

    fn current_copy(&mut self) -> Self::Item {
        (**self).current_copy()
    }

    fn is_volatile(&self) -> bool {
        (**self).is_volatile()
    }
}

impl<S> VolatileSequence for &mut S
where
    S: VolatileSequence + ?Sized,
{
    type Element = S::Element;

    fn current_view(&mut self) -> &[Self::Element] {
        (**self).current_view()
    }
}

impl<S> VolatileSequence for Box<S>
where
    S: VolatileSequence + ?Sized,
{
    type Element = S::Element;

    fn current_view(&mut self) -> &[Self::Element] {
        (**self).current_view()
    }
}
