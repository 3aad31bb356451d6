// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Numeric families used by ranges and arithmetic reducers.
//!
//! Integer arithmetic wraps on overflow, so an unbounded range over `u8`
//! runs `254, 255, 0, 1, ...` instead of panicking. Float arithmetic is plain
//! IEEE arithmetic and may accumulate rounding error over many steps.

/// Types supporting the arithmetic needed by ranges, `sum` and `product`.
pub trait Numeric: Copy {
    /// Additive identity
    const ZERO: Self;
    /// Multiplicative identity
    const ONE: Self;

    /// Addition, wrapping around on integer overflow.
    fn wrapping_add(self, rhs: Self) -> Self;

    /// Multiplication, wrapping around on integer overflow.
    fn wrapping_mul(self, rhs: Self) -> Self;
}

/// Numeric types that can also be compared, used by bounded ranges.
pub trait NumericOrd: Numeric + PartialOrd {}

impl<T: Numeric + PartialOrd> NumericOrd for T {}

macro_rules! impl_numeric_for_int {
    ($($t:ty),*) => {
        $(
            impl Numeric for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;

                #[inline]
                fn wrapping_add(self, rhs: Self) -> Self {
                    <$t>::wrapping_add(self, rhs)
                }

                #[inline]
                fn wrapping_mul(self, rhs: Self) -> Self {
                    <$t>::wrapping_mul(self, rhs)
                }
            }
        )*
    };
}

macro_rules! impl_numeric_for_float {
    ($($t:ty),*) => {
        $(
            impl Numeric for $t {
                const ZERO: Self = 0.0;
                const ONE: Self = 1.0;

                #[inline]
                fn wrapping_add(self, rhs: Self) -> Self {
                    self + rhs
                }

                #[inline]
                fn wrapping_mul(self, rhs: Self) -> Self {
                    self * rhs
                }
            }
        )*
    };
}

impl_numeric_for_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_numeric_for_float!(f32, f64);
