// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use strand_core::Sequence;

/// Infinite sequence `v, f(v), f(f(v)), ...`
#[derive(Debug, Clone)]
pub struct RepeatedlyApply<T, F> {
    value: T,
    f: F,
    started: bool,
}

impl<T, F> Sequence for RepeatedlyApply<T, F>
where
    T: Clone,
    F: FnMut(&T) -> T,
{
    type Item = T;

    fn advance(&mut self) -> bool {
        if self.started {
            self.value = (self.f)(&self.value);
        } else {
            self.started = true;
        }
        true
    }

    fn current(&mut self) -> T {
        self.value.clone()
    }
}

/// Starts at `value` and feeds every output back into `f`.
///
/// ```
/// use strand_core::{into_iter, Sequence};
/// use strand_source::repeatedly_apply;
///
/// let powers: Vec<u32> = into_iter(repeatedly_apply(|x| x * 2, 1)).take(5).collect();
/// assert_eq!(powers, vec![1, 2, 4, 8, 16]);
/// ```
pub fn repeatedly_apply<T, F>(f: F, value: T) -> RepeatedlyApply<T, F>
where
    T: Clone,
    F: FnMut(&T) -> T,
{
    RepeatedlyApply {
        value,
        f,
        started: false,
    }
}
