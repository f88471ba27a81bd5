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

/// Checked arithmetic: detect, report, then continue on the wrapped path.
///
/// Every method consults the matching predicate first. When it fires, the
/// fault registry is notified — fatal by default, observable once a
/// handler is registered — and the method then returns the native
/// two's-complement wrapped result, so a handler that merely records the
/// fault leaves the program running with defined semantics.
///
/// When the predicate does not fire, the result is the mathematically
/// exact one and the registry is never consulted.
///
/// Division and remainder report a zero divisor through the
/// divide-by-zero slot instead; if the handler returns, division yields
/// `-1` (all bits set) and remainder yields the dividend, following the
/// RISC-V convention for the same situation.
///
/// # Examples
///
/// ```rust
/// # use freeboard_core::ops::checked::CheckedOps;
/// assert_eq!(100i8.add_checked(27), 127);
/// assert_eq!((-4i32).div_checked(2), -2);
/// ```
///
/// With a handler registered, a faulting operation reports and wraps:
///
/// ```rust
/// # use freeboard_core::fault;
/// # use freeboard_core::ops::checked::CheckedOps;
/// fault::register_overflow_handler(|_| {});
/// assert_eq!(i8::MAX.add_checked(1), i8::MIN);
/// fault::reset_overflow_handler();
/// ```
pub trait CheckedOps: Sized {
    /// Checked addition.
    fn add_checked(self, rhs: Self) -> Self;
    /// Checked subtraction.
    fn sub_checked(self, rhs: Self) -> Self;
    /// Checked multiplication.
    fn mul_checked(self, rhs: Self) -> Self;
    /// Checked division.
    fn div_checked(self, rhs: Self) -> Self;
    /// Checked remainder.
    fn rem_checked(self, rhs: Self) -> Self;
    /// Checked negation.
    fn neg_checked(self) -> Self;
    /// Checked left shift. Amounts outside `[0, BITS)` are overflow.
    fn shl_checked(self, n: i64) -> Self;
    /// Checked arithmetic right shift. Amounts outside `[0, BITS)` are
    /// overflow.
    fn shr_checked(self, n: i64) -> Self;
}

macro_rules! checked_ops_impl {
    ($t:ty) => {
        impl CheckedOps for $t {
            #[inline]
            fn add_checked(self, rhs: $t) -> $t {
                if predicate::would_overflow_add(self, rhs) {
                    fault::notify_overflow();
                }
                self.wrapping_add(rhs)
            }

            #[inline]
            fn sub_checked(self, rhs: $t) -> $t {
                if predicate::would_overflow_sub(self, rhs) {
                    fault::notify_overflow();
                }
                self.wrapping_sub(rhs)
            }

            #[inline]
            fn mul_checked(self, rhs: $t) -> $t {
                if predicate::would_overflow_mul(self, rhs) {
                    fault::notify_overflow();
                }
                self.wrapping_mul(rhs)
            }

            #[inline]
            fn div_checked(self, rhs: $t) -> $t {
                if predicate::is_div_by_zero(rhs) {
                    fault::notify_div_by_zero();
                    return -1;
                }
                if predicate::would_overflow_div(self, rhs) {
                    fault::notify_overflow();
                }
                self.wrapping_div(rhs)
            }

            #[inline]
            fn rem_checked(self, rhs: $t) -> $t {
                if predicate::is_div_by_zero(rhs) {
                    fault::notify_div_by_zero();
                    return self;
                }
                if predicate::would_overflow_div(self, rhs) {
                    fault::notify_overflow();
                }
                self.wrapping_rem(rhs)
            }

            #[inline]
            fn neg_checked(self) -> $t {
                if predicate::would_overflow_neg(self) {
                    fault::notify_overflow();
                }
                self.wrapping_neg()
            }

            #[inline]
            fn shl_checked(self, n: i64) -> $t {
                if predicate::shift_out_of_range::<$t>(n) {
                    fault::notify_overflow();
                }
                self.wrapping_shl(n as u32)
            }

            #[inline]
            fn shr_checked(self, n: i64) -> $t {
                if predicate::shift_out_of_range::<$t>(n) {
                    fault::notify_overflow();
                }
                self.wrapping_shr(n as u32)
            }
        }
    };
}

checked_ops_impl!(i8);
checked_ops_impl!(i16);
checked_ops_impl!(i32);
checked_ops_impl!(i64);

#[cfg(test)]
mod tests {
    use super::*;

    // Non-faulting paths only, plus the fatal defaults via should_panic.
    // Handler-registering coverage lives in tests/handler.rs so the
    // process-wide slots stay untouched while unit tests run in parallel.

    fn add_checked<T: CheckedOps>(a: T, b: T) -> T {
        a.add_checked(b)
    }

    #[test]
    fn test_exact_results_when_representable() {
        assert_eq!(add_checked(100i8, 27), 127);
        assert_eq!(add_checked(-100i8, -28), -128);
        assert_eq!(add_checked(1i64, 2), 3);
        assert_eq!(40i16.sub_checked(100), -60);
        assert_eq!(11i32.mul_checked(11), 121);
        assert_eq!(i8::MIN.mul_checked(1), i8::MIN);
        assert_eq!((-128i16).div_checked(-1), 128);
        assert_eq!(7i32.rem_checked(3), 1);
        assert_eq!((-7i32).rem_checked(3), -1);
        assert_eq!(i8::MAX.neg_checked(), -127);
        assert_eq!(1i8.shl_checked(6), 64);
        assert_eq!((-64i8).shr_checked(3), -8);
        assert_eq!(1i64.shl_checked(62), 1 << 62);
    }

    #[test]
    #[should_panic(expected = "no overflow handler registered")]
    fn test_add_overflow_is_fatal_by_default() {
        let _ = i8::MAX.add_checked(1);
    }

    #[test]
    #[should_panic(expected = "no overflow handler registered")]
    fn test_sub_underflow_is_fatal_by_default() {
        let _ = i64::MIN.sub_checked(1);
    }

    #[test]
    #[should_panic(expected = "no overflow handler registered")]
    fn test_mul_overflow_is_fatal_by_default() {
        let _ = 100i8.mul_checked(10);
    }

    #[test]
    #[should_panic(expected = "no overflow handler registered")]
    fn test_div_min_by_minus_one_is_fatal_by_default() {
        let _ = i32::MIN.div_checked(-1);
    }

    #[test]
    #[should_panic(expected = "no divide-by-zero handler registered")]
    fn test_div_by_zero_is_fatal_by_default() {
        let _ = 10i8.div_checked(0);
    }

    #[test]
    #[should_panic(expected = "no divide-by-zero handler registered")]
    fn test_rem_by_zero_is_fatal_by_default() {
        let _ = 10i64.rem_checked(0);
    }

    #[test]
    #[should_panic(expected = "no overflow handler registered")]
    fn test_neg_min_is_fatal_by_default() {
        let _ = i64::MIN.neg_checked();
    }

    #[test]
    #[should_panic(expected = "no overflow handler registered")]
    fn test_negative_shift_is_fatal_by_default() {
        let _ = 1i32.shl_checked(-1);
    }

    #[test]
    #[should_panic(expected = "no overflow handler registered")]
    fn test_oversized_shift_is_fatal_by_default() {
        let _ = 1i32.shr_checked(32);
    }
}
