// Copyright (c) 2025 The Freeboard Authors.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use crate::fault;

/// Shifts with the amount reduced modulo the bit width, the way the
/// hardware shifter treats it.
///
/// An amount of `bits` or more is legal here and simply wraps around,
/// which is what rotation builds on. A negative amount has no masked
/// interpretation, so it is reported through the overflow slot; if the
/// handler returns, the value is passed through unchanged.
///
/// # Examples
///
/// ```rust
/// # use freeboard_core::ops::overflowing::OverflowingShift;
/// assert_eq!(1i8.shl_overflowing(9), 2);
/// assert_eq!((-16i8).shr_overflowing(2), -4);
/// ```
pub trait OverflowingShift: Sized {
    /// Left shift by `n % bits`. A negative `n` is reported.
    fn shl_overflowing(self, n: i64) -> Self;
    /// Arithmetic right shift by `n % bits`. A negative `n` is
    /// reported.
    fn shr_overflowing(self, n: i64) -> Self;
}

macro_rules! overflowing_shift_impl {
    ($t:ty) => {
        impl OverflowingShift for $t {
            #[inline]
            fn shl_overflowing(self, n: i64) -> $t {
                if n < 0 {
                    fault::notify_overflow();
                    return self;
                }
                self.wrapping_shl(n as u32)
            }

            #[inline]
            fn shr_overflowing(self, n: i64) -> $t {
                if n < 0 {
                    fault::notify_overflow();
                    return self;
                }
                self.wrapping_shr(n as u32)
            }
        }
    };
}

overflowing_shift_impl!(i8);
overflowing_shift_impl!(i16);
overflowing_shift_impl!(i32);
overflowing_shift_impl!(i64);
