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

use crate::constants::Bounds;
use crate::fault;
use crate::predicate;

/// Saturating arithmetic: clamp to the nearest representable bound.
///
/// An overflowing result becomes `MAX` when the true result lies above
/// the range and `MIN` when it lies below; nothing is reported.
/// `MIN.neg_saturating()` is `MAX` and `MIN.div_saturating(-1)` is
/// `MAX`, while `MIN.rem_saturating(-1)` is `0` because the true
/// remainder is zero and in range.
///
/// Shift amounts clamp the same way: a negative amount behaves as a
/// shift by zero, and an amount of at least the bit width pushes the
/// value to its limit (`MAX`/`MIN`/`0` by sign for left shifts, `-1` or
/// `0` for arithmetic right shifts).
///
/// A zero divisor has no saturated value and is reported through the
/// divide-by-zero slot; if the handler returns, division yields `-1`
/// and remainder yields the dividend.
///
/// # Examples
///
/// ```rust
/// # use freeboard_core::ops::saturating::SaturatingOps;
/// assert_eq!(i8::MAX.add_saturating(1), i8::MAX);
/// assert_eq!(i8::MIN.div_saturating(-1), i8::MAX);
/// assert_eq!((-1i8).shl_saturating(100), i8::MIN);
/// ```
pub trait SaturatingOps: Sized {
    /// Saturating addition.
    fn add_saturating(self, rhs: Self) -> Self;
    /// Saturating subtraction.
    fn sub_saturating(self, rhs: Self) -> Self;
    /// Saturating multiplication.
    fn mul_saturating(self, rhs: Self) -> Self;
    /// Saturating division. A zero divisor is reported.
    fn div_saturating(self, rhs: Self) -> Self;
    /// Saturating remainder. A zero divisor is reported.
    fn rem_saturating(self, rhs: Self) -> Self;
    /// Saturating negation.
    fn neg_saturating(self) -> Self;
    /// Left shift with the amount clamped to `0..bits`.
    fn shl_saturating(self, n: i64) -> Self;
    /// Arithmetic right shift with the amount clamped to `0..bits`.
    fn shr_saturating(self, n: i64) -> Self;
}

macro_rules! saturating_ops_impl {
    ($t:ty) => {
        impl SaturatingOps for $t {
            #[inline(always)]
            fn add_saturating(self, rhs: $t) -> $t {
                self.saturating_add(rhs)
            }

            #[inline(always)]
            fn sub_saturating(self, rhs: $t) -> $t {
                self.saturating_sub(rhs)
            }

            #[inline(always)]
            fn mul_saturating(self, rhs: $t) -> $t {
                self.saturating_mul(rhs)
            }

            #[inline]
            fn div_saturating(self, rhs: $t) -> $t {
                if predicate::is_div_by_zero(rhs) {
                    fault::notify_div_by_zero();
                    return -1;
                }
                if predicate::would_overflow_div(self, rhs) {
                    return <$t>::MAX;
                }
                self / rhs
            }

            #[inline]
            fn rem_saturating(self, rhs: $t) -> $t {
                if predicate::is_div_by_zero(rhs) {
                    fault::notify_div_by_zero();
                    return self;
                }
                if predicate::would_overflow_div(self, rhs) {
                    return 0;
                }
                self % rhs
            }

            #[inline(always)]
            fn neg_saturating(self) -> $t {
                self.saturating_neg()
            }

            #[inline]
            fn shl_saturating(self, n: i64) -> $t {
                if n < 0 {
                    return self;
                }
                if n >= <$t as Bounds>::BITS as i64 {
                    return match self {
                        0 => 0,
                        v if v > 0 => <$t>::MAX,
                        _ => <$t>::MIN,
                    };
                }
                self.wrapping_shl(n as u32)
            }

            #[inline]
            fn shr_saturating(self, n: i64) -> $t {
                if n < 0 {
                    return self;
                }
                if n >= <$t as Bounds>::BITS as i64 {
                    return if self < 0 { -1 } else { 0 };
                }
                self.wrapping_shr(n as u32)
            }
        }
    };
}

saturating_ops_impl!(i8);
saturating_ops_impl!(i16);
saturating_ops_impl!(i32);
saturating_ops_impl!(i64);
