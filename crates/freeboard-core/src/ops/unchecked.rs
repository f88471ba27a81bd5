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

/// Unchecked arithmetic: no predicates, no reporting, no clamping.
///
/// Addition, subtraction, multiplication and negation compile to plain
/// two's-complement instructions, so an overflowing result wraps.
/// Division, remainder and the shifts use the native operators
/// directly: a zero divisor or an out-of-range shift amount is a
/// programming error and panics exactly as it would on the bare
/// primitive. Callers pick this family when they have already
/// established that the operands are in range.
///
/// # Examples
///
/// ```rust
/// # use freeboard_core::ops::unchecked::UncheckedOps;
/// assert_eq!(i8::MAX.add_unchecked(1), i8::MIN);
/// assert_eq!(91i8.div_unchecked(7), 13);
/// ```
pub trait UncheckedOps: Sized {
    /// Two's-complement addition.
    fn add_unchecked(self, rhs: Self) -> Self;
    /// Two's-complement subtraction.
    fn sub_unchecked(self, rhs: Self) -> Self;
    /// Two's-complement multiplication.
    fn mul_unchecked(self, rhs: Self) -> Self;
    /// Native division. Panics on a zero divisor.
    fn div_unchecked(self, rhs: Self) -> Self;
    /// Native remainder. Panics on a zero divisor.
    fn rem_unchecked(self, rhs: Self) -> Self;
    /// Two's-complement negation.
    fn neg_unchecked(self) -> Self;
    /// Native left shift. The amount must be in `0..bits`.
    fn shl_unchecked(self, n: i64) -> Self;
    /// Native arithmetic right shift. The amount must be in `0..bits`.
    fn shr_unchecked(self, n: i64) -> Self;
}

macro_rules! unchecked_ops_impl {
    ($t:ty) => {
        impl UncheckedOps for $t {
            #[inline(always)]
            fn add_unchecked(self, rhs: $t) -> $t {
                self.wrapping_add(rhs)
            }

            #[inline(always)]
            fn sub_unchecked(self, rhs: $t) -> $t {
                self.wrapping_sub(rhs)
            }

            #[inline(always)]
            fn mul_unchecked(self, rhs: $t) -> $t {
                self.wrapping_mul(rhs)
            }

            #[inline(always)]
            fn div_unchecked(self, rhs: $t) -> $t {
                self / rhs
            }

            #[inline(always)]
            fn rem_unchecked(self, rhs: $t) -> $t {
                self % rhs
            }

            #[inline(always)]
            fn neg_unchecked(self) -> $t {
                self.wrapping_neg()
            }

            #[inline(always)]
            fn shl_unchecked(self, n: i64) -> $t {
                self << n
            }

            #[inline(always)]
            fn shr_unchecked(self, n: i64) -> $t {
                self >> n
            }
        }
    };
}

unchecked_ops_impl!(i8);
unchecked_ops_impl!(i16);
unchecked_ops_impl!(i32);
unchecked_ops_impl!(i64);
