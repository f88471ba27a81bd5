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
use crate::predicate;

/// Wrapping arithmetic: always reduce modulo 2^bits.
///
/// No predicates, no overflow reporting. `MIN.neg_wrapping()` is `MIN`,
/// `MIN.div_wrapping(-1)` is `MIN`, and `MIN.rem_wrapping(-1)` is `0`;
/// shift amounts are reduced modulo the bit width.
///
/// The single exception is a zero divisor, which has no wrapped value and
/// is reported through the divide-by-zero slot exactly as the checked
/// family reports it. If the handler returns, division yields `-1` and
/// remainder yields the dividend.
///
/// # Examples
///
/// ```rust
/// # use freeboard_core::ops::wrapping::WrappingOps;
/// assert_eq!(i8::MAX.add_wrapping(1), i8::MIN);
/// assert_eq!(i64::MIN.mul_wrapping(-1), i64::MIN);
/// ```
pub trait WrappingOps: Sized {
    /// Wrapping addition.
    fn add_wrapping(self, rhs: Self) -> Self;
    /// Wrapping subtraction.
    fn sub_wrapping(self, rhs: Self) -> Self;
    /// Wrapping multiplication.
    fn mul_wrapping(self, rhs: Self) -> Self;
    /// Wrapping division. A zero divisor is reported.
    fn div_wrapping(self, rhs: Self) -> Self;
    /// Wrapping remainder. A zero divisor is reported.
    fn rem_wrapping(self, rhs: Self) -> Self;
    /// Wrapping negation.
    fn neg_wrapping(self) -> Self;
    /// Left shift with the amount reduced modulo the bit width.
    fn shl_wrapping(self, n: i64) -> Self;
    /// Arithmetic right shift with the amount reduced modulo the bit
    /// width.
    fn shr_wrapping(self, n: i64) -> Self;
}

macro_rules! wrapping_ops_impl {
    ($t:ty) => {
        impl WrappingOps for $t {
            #[inline(always)]
            fn add_wrapping(self, rhs: $t) -> $t {
                self.wrapping_add(rhs)
            }

            #[inline(always)]
            fn sub_wrapping(self, rhs: $t) -> $t {
                self.wrapping_sub(rhs)
            }

            #[inline(always)]
            fn mul_wrapping(self, rhs: $t) -> $t {
                self.wrapping_mul(rhs)
            }

            #[inline]
            fn div_wrapping(self, rhs: $t) -> $t {
                if predicate::is_div_by_zero(rhs) {
                    fault::notify_div_by_zero();
                    return -1;
                }
                self.wrapping_div(rhs)
            }

            #[inline]
            fn rem_wrapping(self, rhs: $t) -> $t {
                if predicate::is_div_by_zero(rhs) {
                    fault::notify_div_by_zero();
                    return self;
                }
                self.wrapping_rem(rhs)
            }

            #[inline(always)]
            fn neg_wrapping(self) -> $t {
                self.wrapping_neg()
            }

            #[inline(always)]
            fn shl_wrapping(self, n: i64) -> $t {
                self.wrapping_shl(n as u32)
            }

            #[inline(always)]
            fn shr_wrapping(self, n: i64) -> $t {
                self.wrapping_shr(n as u32)
            }
        }
    };
}

wrapping_ops_impl!(i8);
wrapping_ops_impl!(i16);
wrapping_ops_impl!(i32);
wrapping_ops_impl!(i64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_sub_wraparound() {
        assert_eq!(i8::MAX.add_wrapping(1), i8::MIN);
        assert_eq!(i8::MIN.add_wrapping(-1), i8::MAX);
        assert_eq!(i8::MIN.sub_wrapping(1), i8::MAX);
        assert_eq!(i64::MAX.add_wrapping(1), i64::MIN);
        assert_eq!(100i8.add_wrapping(27), 127);
    }

    #[test]
    fn test_mul_wraparound() {
        assert_eq!(100i8.mul_wrapping(10), -24);
        assert_eq!(i64::MIN.mul_wrapping(-1), i64::MIN);
        assert_eq!(i16::MIN.mul_wrapping(2), 0);
    }

    #[test]
    fn test_div_rem_min_by_minus_one() {
        assert_eq!(i32::MIN.div_wrapping(-1), i32::MIN);
        assert_eq!(i32::MIN.rem_wrapping(-1), 0);
        assert_eq!(i8::MIN.div_wrapping(-1), i8::MIN);
    }

    #[test]
    fn test_neg_fixed_point() {
        assert_eq!(i8::MIN.neg_wrapping(), i8::MIN);
        assert_eq!(5i8.neg_wrapping(), -5);
        assert_eq!(0i64.neg_wrapping(), 0);
    }

    #[test]
    fn test_shift_amount_reduced() {
        assert_eq!(1i8.shl_wrapping(1), 2);
        assert_eq!(1i8.shl_wrapping(8), 1);
        assert_eq!(1i8.shl_wrapping(9), 2);
        assert_eq!(-2i32.shr_wrapping(1), -1);
        assert_eq!(64i16.shr_wrapping(16), 64);
    }

    #[test]
    #[should_panic(expected = "no divide-by-zero handler registered")]
    fn test_div_by_zero_still_reported() {
        let _ = 1i32.div_wrapping(0);
    }

    #[test]
    #[should_panic(expected = "no divide-by-zero handler registered")]
    fn test_rem_by_zero_still_reported() {
        let _ = 1i32.rem_wrapping(0);
    }
}
