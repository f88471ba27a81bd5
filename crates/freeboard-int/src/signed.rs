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

//! # Fixed-Width Signed Integers
//!
//! The [`SignedInt`] wrapper carries a primitive signed integer and
//! exposes every arithmetic operation in four overflow-policy flavors:
//! checked (report, then wrap), wrapping, saturating, and unchecked.
//! The `try_` family returns `Option` for callers that want to branch
//! on overflow locally instead of going through the process-wide
//! handler registry.
//!
//! ## Motivation
//!
//! The bare operators on primitives pick their overflow behavior per
//! build profile; code that mixes policies has to spell out
//! `checked_`/`wrapping_`/`saturating_` calls and invent its own
//! reporting around the `Option` results. Wrapping the value lets each
//! call site name its policy while overflow reporting stays uniform and
//! process-wide.
//!
//! ## Highlights
//!
//! - `I8`/`I16`/`I32`/`I64` aliases, one per supported width.
//! - Same in-memory layout as the primitive (`repr(transparent)`).
//! - Rotations built from width-masked logical shifts, so negative
//!   values round-trip.
//! - Little- and big-endian byte codecs per width.

use freeboard_core::constants::Bounds;
use freeboard_core::predicate;

use crate::num::SignedPrimitive;

/// A fixed-width signed integer with per-operation overflow policies.
///
/// The wrapper adds no state beyond the primitive itself; it exists to
/// make the overflow policy part of the call, not of the build profile.
/// Operators on this type use the checked policy, so `a + b` reports
/// overflow through the registry and continues with the wrapped value.
///
/// # Examples
///
/// ```rust
/// # use freeboard_int::signed::I8;
///
/// let a = I8::new(100);
/// assert_eq!(a.add_saturating(I8::new(100)).value(), 127);
/// assert_eq!(a.add_wrapping(I8::new(100)).value(), -56);
/// assert_eq!(a.try_add(I8::new(100)), None);
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, Default)]
pub struct SignedInt<T>(T)
where
    T: SignedPrimitive;

/// An 8-bit signed integer with per-operation overflow policies.
pub type I8 = SignedInt<i8>;
/// A 16-bit signed integer with per-operation overflow policies.
pub type I16 = SignedInt<i16>;
/// A 32-bit signed integer with per-operation overflow policies.
pub type I32 = SignedInt<i32>;
/// A 64-bit signed integer with per-operation overflow policies.
pub type I64 = SignedInt<i64>;

impl<T> SignedInt<T>
where
    T: SignedPrimitive,
{
    /// The smallest representable value.
    pub const MIN: Self = Self(<T as Bounds>::MIN);

    /// The largest representable value.
    pub const MAX: Self = Self(<T as Bounds>::MAX);

    /// The width in bits.
    pub const BITS: u32 = <T as Bounds>::BITS;

    /// The value zero.
    pub const ZERO: Self = Self(T::ZERO);

    /// The value one.
    pub const ONE: Self = Self(T::PLUS_ONE);

    /// The value negative one, all bits set.
    pub const MINUS_ONE: Self = Self(T::MINUS_ONE);

    /// Wraps a primitive value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use freeboard_int::signed::I32;
    ///
    /// let x = I32::new(42);
    /// assert_eq!(x.value(), 42);
    /// ```
    #[inline]
    pub const fn new(value: T) -> Self {
        Self(value)
    }

    /// Returns the underlying primitive value.
    #[inline]
    pub const fn value(self) -> T {
        self.0
    }

    /// Whether the value is zero.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    /// Whether the value is strictly negative.
    #[inline]
    pub fn is_negative(self) -> bool {
        self.0.is_negative()
    }

    /// Whether the value is strictly positive.
    #[inline]
    pub fn is_positive(self) -> bool {
        self.0.is_positive()
    }

    /// Checked addition: an overflowing sum is reported, then wraps.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use freeboard_int::signed::I8;
    ///
    /// assert_eq!(I8::new(1).add_checked(I8::new(2)).value(), 3);
    /// ```
    #[inline]
    pub fn add_checked(self, rhs: Self) -> Self {
        Self(self.0.add_checked(rhs.0))
    }

    /// Checked subtraction: an overflowing difference is reported, then
    /// wraps.
    #[inline]
    pub fn sub_checked(self, rhs: Self) -> Self {
        Self(self.0.sub_checked(rhs.0))
    }

    /// Checked multiplication: an overflowing product is reported, then
    /// wraps.
    #[inline]
    pub fn mul_checked(self, rhs: Self) -> Self {
        Self(self.0.mul_checked(rhs.0))
    }

    /// Checked division. `MIN / -1` is reported and wraps to `MIN`; a
    /// zero divisor is reported and yields `-1`.
    #[inline]
    pub fn div_checked(self, rhs: Self) -> Self {
        Self(self.0.div_checked(rhs.0))
    }

    /// Checked remainder. `MIN % -1` is reported and yields `0`; a zero
    /// divisor is reported and yields the dividend.
    #[inline]
    pub fn rem_checked(self, rhs: Self) -> Self {
        Self(self.0.rem_checked(rhs.0))
    }

    /// Checked negation: negating `MIN` is reported, then wraps back to
    /// `MIN`.
    #[inline]
    pub fn neg_checked(self) -> Self {
        Self(self.0.neg_checked())
    }

    /// Checked left shift: an amount outside `0..BITS` is reported,
    /// then masked.
    #[inline]
    pub fn shl_checked(self, n: i64) -> Self {
        Self(self.0.shl_checked(n))
    }

    /// Checked arithmetic right shift: an amount outside `0..BITS` is
    /// reported, then masked.
    #[inline]
    pub fn shr_checked(self, n: i64) -> Self {
        Self(self.0.shr_checked(n))
    }

    /// Wrapping addition.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use freeboard_int::signed::I8;
    ///
    /// assert_eq!(I8::MAX.add_wrapping(I8::new(1)), I8::MIN);
    /// ```
    #[inline]
    pub fn add_wrapping(self, rhs: Self) -> Self {
        Self(self.0.add_wrapping(rhs.0))
    }

    /// Wrapping subtraction.
    #[inline]
    pub fn sub_wrapping(self, rhs: Self) -> Self {
        Self(self.0.sub_wrapping(rhs.0))
    }

    /// Wrapping multiplication.
    #[inline]
    pub fn mul_wrapping(self, rhs: Self) -> Self {
        Self(self.0.mul_wrapping(rhs.0))
    }

    /// Wrapping division. A zero divisor is still reported.
    #[inline]
    pub fn div_wrapping(self, rhs: Self) -> Self {
        Self(self.0.div_wrapping(rhs.0))
    }

    /// Wrapping remainder. A zero divisor is still reported.
    #[inline]
    pub fn rem_wrapping(self, rhs: Self) -> Self {
        Self(self.0.rem_wrapping(rhs.0))
    }

    /// Wrapping negation.
    #[inline]
    pub fn neg_wrapping(self) -> Self {
        Self(self.0.neg_wrapping())
    }

    /// Left shift with the amount reduced modulo `BITS`.
    #[inline]
    pub fn shl_wrapping(self, n: i64) -> Self {
        Self(self.0.shl_wrapping(n))
    }

    /// Arithmetic right shift with the amount reduced modulo `BITS`.
    #[inline]
    pub fn shr_wrapping(self, n: i64) -> Self {
        Self(self.0.shr_wrapping(n))
    }

    /// Saturating addition.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use freeboard_int::signed::I32;
    ///
    /// assert_eq!(I32::MAX.add_saturating(I32::new(300)), I32::MAX);
    /// ```
    #[inline]
    pub fn add_saturating(self, rhs: Self) -> Self {
        Self(self.0.add_saturating(rhs.0))
    }

    /// Saturating subtraction.
    #[inline]
    pub fn sub_saturating(self, rhs: Self) -> Self {
        Self(self.0.sub_saturating(rhs.0))
    }

    /// Saturating multiplication.
    #[inline]
    pub fn mul_saturating(self, rhs: Self) -> Self {
        Self(self.0.mul_saturating(rhs.0))
    }

    /// Saturating division. `MIN / -1` clamps to `MAX`; a zero divisor
    /// is still reported.
    #[inline]
    pub fn div_saturating(self, rhs: Self) -> Self {
        Self(self.0.div_saturating(rhs.0))
    }

    /// Saturating remainder. `MIN % -1` yields `0`; a zero divisor is
    /// still reported.
    #[inline]
    pub fn rem_saturating(self, rhs: Self) -> Self {
        Self(self.0.rem_saturating(rhs.0))
    }

    /// Saturating negation.
    #[inline]
    pub fn neg_saturating(self) -> Self {
        Self(self.0.neg_saturating())
    }

    /// Left shift with the amount clamped to `0..BITS`.
    #[inline]
    pub fn shl_saturating(self, n: i64) -> Self {
        Self(self.0.shl_saturating(n))
    }

    /// Arithmetic right shift with the amount clamped to `0..BITS`.
    #[inline]
    pub fn shr_saturating(self, n: i64) -> Self {
        Self(self.0.shr_saturating(n))
    }

    /// Unchecked addition: plain two's-complement wraparound.
    #[inline]
    pub fn add_unchecked(self, rhs: Self) -> Self {
        Self(self.0.add_unchecked(rhs.0))
    }

    /// Unchecked subtraction: plain two's-complement wraparound.
    #[inline]
    pub fn sub_unchecked(self, rhs: Self) -> Self {
        Self(self.0.sub_unchecked(rhs.0))
    }

    /// Unchecked multiplication: plain two's-complement wraparound.
    #[inline]
    pub fn mul_unchecked(self, rhs: Self) -> Self {
        Self(self.0.mul_unchecked(rhs.0))
    }

    /// Unchecked division. Panics on a zero divisor.
    #[inline]
    pub fn div_unchecked(self, rhs: Self) -> Self {
        Self(self.0.div_unchecked(rhs.0))
    }

    /// Unchecked remainder. Panics on a zero divisor.
    #[inline]
    pub fn rem_unchecked(self, rhs: Self) -> Self {
        Self(self.0.rem_unchecked(rhs.0))
    }

    /// Unchecked negation: plain two's-complement wraparound.
    #[inline]
    pub fn neg_unchecked(self) -> Self {
        Self(self.0.neg_unchecked())
    }

    /// Unchecked left shift. The amount must be in `0..BITS`.
    #[inline]
    pub fn shl_unchecked(self, n: i64) -> Self {
        Self(self.0.shl_unchecked(n))
    }

    /// Unchecked arithmetic right shift. The amount must be in
    /// `0..BITS`.
    #[inline]
    pub fn shr_unchecked(self, n: i64) -> Self {
        Self(self.0.shr_unchecked(n))
    }

    /// Left shift by `n % BITS`; a negative amount is reported and the
    /// value passes through unchanged.
    #[inline]
    pub fn shl_overflowing(self, n: i64) -> Self {
        Self(self.0.shl_overflowing(n))
    }

    /// Arithmetic right shift by `n % BITS`; a negative amount is
    /// reported and the value passes through unchanged.
    #[inline]
    pub fn shr_overflowing(self, n: i64) -> Self {
        Self(self.0.shr_overflowing(n))
    }

    /// Addition that reports nothing and returns `None` on overflow.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use freeboard_int::signed::I8;
    ///
    /// assert_eq!(I8::new(1).try_add(I8::new(2)), Some(I8::new(3)));
    /// assert_eq!(I8::MAX.try_add(I8::new(1)), None);
    /// ```
    #[inline]
    pub fn try_add(self, rhs: Self) -> Option<Self> {
        if predicate::would_overflow_add(self.0, rhs.0) {
            return None;
        }
        Some(Self(self.0 + rhs.0))
    }

    /// Subtraction that returns `None` on overflow.
    #[inline]
    pub fn try_sub(self, rhs: Self) -> Option<Self> {
        if predicate::would_overflow_sub(self.0, rhs.0) {
            return None;
        }
        Some(Self(self.0 - rhs.0))
    }

    /// Multiplication that returns `None` on overflow.
    #[inline]
    pub fn try_mul(self, rhs: Self) -> Option<Self> {
        if predicate::would_overflow_mul(self.0, rhs.0) {
            return None;
        }
        Some(Self(self.0 * rhs.0))
    }

    /// Division that returns `None` on a zero divisor or `MIN / -1`.
    #[inline]
    pub fn try_div(self, rhs: Self) -> Option<Self> {
        if predicate::is_div_by_zero(rhs.0) || predicate::would_overflow_div(self.0, rhs.0) {
            return None;
        }
        Some(Self(self.0 / rhs.0))
    }

    /// Remainder that returns `None` on a zero divisor or `MIN % -1`.
    #[inline]
    pub fn try_rem(self, rhs: Self) -> Option<Self> {
        if predicate::is_div_by_zero(rhs.0) || predicate::would_overflow_div(self.0, rhs.0) {
            return None;
        }
        Some(Self(self.0 % rhs.0))
    }

    /// Negation that returns `None` for `MIN`.
    #[inline]
    pub fn try_neg(self) -> Option<Self> {
        if predicate::would_overflow_neg(self.0) {
            return None;
        }
        Some(Self(-self.0))
    }

    /// Left shift that returns `None` for an amount outside `0..BITS`.
    #[inline]
    pub fn try_shl(self, n: i64) -> Option<Self> {
        if predicate::shift_out_of_range::<T>(n) {
            return None;
        }
        Some(Self(self.0.shl_wrapping(n)))
    }

    /// Arithmetic right shift that returns `None` for an amount outside
    /// `0..BITS`.
    #[inline]
    pub fn try_shr(self, n: i64) -> Option<Self> {
        if predicate::shift_out_of_range::<T>(n) {
            return None;
        }
        Some(Self(self.0.shr_wrapping(n)))
    }

    /// Rotates the bits left by `n % BITS` positions.
    ///
    /// Both halves of the rotation shift in zeros, so negative values
    /// round-trip: `x.rotate_left(n).rotate_right(n) == x` for every
    /// `x` and `n`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use freeboard_int::signed::I32;
    ///
    /// let x = I32::new(0x010000b3);
    /// assert_eq!(x.rotate_left(8).value(), 0x0000b301);
    /// ```
    #[inline]
    pub fn rotate_left(self, n: u32) -> Self {
        let n = n % Self::BITS;
        if n == 0 {
            return self;
        }
        Self(self.0.unsigned_shl(n) | self.0.unsigned_shr(Self::BITS - n))
    }

    /// Rotates the bits right by `n % BITS` positions.
    #[inline]
    pub fn rotate_right(self, n: u32) -> Self {
        let n = n % Self::BITS;
        if n == 0 {
            return self;
        }
        Self(self.0.unsigned_shr(n) | self.0.unsigned_shl(Self::BITS - n))
    }

    /// The number of one bits.
    #[inline]
    pub fn count_ones(self) -> u32 {
        self.0.count_ones()
    }

    /// The number of zero bits.
    #[inline]
    pub fn count_zeros(self) -> u32 {
        self.0.count_zeros()
    }

    /// The number of leading zero bits.
    #[inline]
    pub fn leading_zeros(self) -> u32 {
        self.0.leading_zeros()
    }

    /// The number of trailing zero bits.
    #[inline]
    pub fn trailing_zeros(self) -> u32 {
        self.0.trailing_zeros()
    }

    /// Reverses the bit order.
    #[inline]
    pub fn reverse_bits(self) -> Self {
        Self(self.0.reverse_bits())
    }

    /// Reverses the byte order.
    #[inline]
    pub fn swap_bytes(self) -> Self {
        Self(self.0.swap_bytes())
    }

    /// Adds one under the checked policy.
    #[inline]
    pub fn increment(&mut self) {
        *self = (*self).add_checked(Self::ONE);
    }

    /// Subtracts one under the checked policy.
    #[inline]
    pub fn decrement(&mut self) {
        *self = (*self).sub_checked(Self::ONE);
    }
}

macro_rules! bytes_impl {
    ($t:ty, $n:literal) => {
        impl SignedInt<$t> {
            /// Creates a value from its little-endian byte
            /// representation.
            ///
            /// # Examples
            ///
            /// ```rust
            /// # use freeboard_int::signed::SignedInt;
            ///
            #[doc = concat!("let x = SignedInt::<", stringify!($t), ">::new(1);")]
            #[doc = concat!(
                "assert_eq!(SignedInt::<",
                stringify!($t),
                ">::from_bytes_le(x.to_bytes_le()), x);"
            )]
            /// ```
            #[inline]
            pub const fn from_bytes_le(bytes: [u8; $n]) -> Self {
                Self(<$t>::from_le_bytes(bytes))
            }

            /// Creates a value from its big-endian byte representation.
            #[inline]
            pub const fn from_bytes_be(bytes: [u8; $n]) -> Self {
                Self(<$t>::from_be_bytes(bytes))
            }

            /// The little-endian byte representation.
            #[inline]
            pub const fn to_bytes_le(self) -> [u8; $n] {
                self.0.to_le_bytes()
            }

            /// The big-endian byte representation.
            #[inline]
            pub const fn to_bytes_be(self) -> [u8; $n] {
                self.0.to_be_bytes()
            }
        }
    };
}

bytes_impl!(i8, 1);
bytes_impl!(i16, 2);
bytes_impl!(i32, 4);
bytes_impl!(i64, 8);

impl<T> std::fmt::Debug for SignedInt<T>
where
    T: SignedPrimitive,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "I{}({})", <T as Bounds>::BITS, self.0)
    }
}

impl<T> std::fmt::Display for SignedInt<T>
where
    T: SignedPrimitive,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

impl<T> std::hash::Hash for SignedInt<T>
where
    T: SignedPrimitive,
{
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}
