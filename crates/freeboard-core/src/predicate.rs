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

//! # Overflow Predicates
//!
//! Pure predicates answering whether an operation on signed operands would
//! overflow, underflow, or divide by zero, without performing the operation.
//! Every predicate is a range test built from algebraic identities that
//! cannot themselves overflow, so the answers are portable and independent
//! of how the platform handles the faulting operation.
//!
//! The checked and saturating operation families in [`crate::ops`] consult
//! these predicates before committing to a result; callers can also use
//! them directly to pre-validate operands.

use num_traits::{PrimInt, Signed};

/// The width of `T` in bits.
#[inline]
pub fn bits_of<T>() -> u32
where
    T: PrimInt,
{
    (size_of::<T>() * 8) as u32
}

/// Whether `a + b` falls outside the representable range.
///
/// Rearranged so the boundary itself is computed on the safe side:
/// for positive `b` the test is `a > MAX - b`, for negative `b` it is
/// `a < MIN - b`; neither right-hand side can overflow under its guard.
///
/// # Examples
///
/// ```rust
/// # use freeboard_core::predicate::would_overflow_add;
/// assert!(would_overflow_add(i8::MAX, 1));
/// assert!(would_overflow_add(i8::MIN, -1));
/// assert!(!would_overflow_add(i8::MAX, 0));
/// assert!(!would_overflow_add(100i8, 27));
/// ```
#[inline]
pub fn would_overflow_add<T>(a: T, b: T) -> bool
where
    T: PrimInt + Signed,
{
    if b > T::zero() {
        a > T::max_value() - b
    } else if b < T::zero() {
        a < T::min_value() - b
    } else {
        false
    }
}

/// Whether `a - b` falls outside the representable range.
///
/// # Examples
///
/// ```rust
/// # use freeboard_core::predicate::would_overflow_sub;
/// assert!(would_overflow_sub(i8::MIN, 1));
/// assert!(would_overflow_sub(i8::MAX, -1));
/// assert!(!would_overflow_sub(i8::MIN, -1));
/// ```
#[inline]
pub fn would_overflow_sub<T>(a: T, b: T) -> bool
where
    T: PrimInt + Signed,
{
    if b > T::zero() {
        a < T::min_value() + b
    } else if b < T::zero() {
        a > T::max_value() + b
    } else {
        false
    }
}

/// Whether `a * b` falls outside the representable range.
///
/// Uses the division form of the range test (`a > MAX / b` and friends).
/// `b == -1` is handled up front because `MIN / -1` is the one division
/// the test itself must not perform.
///
/// # Examples
///
/// ```rust
/// # use freeboard_core::predicate::would_overflow_mul;
/// assert!(would_overflow_mul(100i8, 10));
/// assert!(would_overflow_mul(i8::MIN, -1));
/// assert!(would_overflow_mul(-1i8, i8::MIN));
/// assert!(!would_overflow_mul(i8::MIN, 1));
/// assert!(!would_overflow_mul(-64i8, 2));
/// ```
#[inline]
pub fn would_overflow_mul<T>(a: T, b: T) -> bool
where
    T: PrimInt + Signed,
{
    let zero = T::zero();
    if a == zero || b == zero {
        return false;
    }
    if b == -T::one() {
        return a == T::min_value();
    }
    if b > zero {
        a > T::max_value() / b || a < T::min_value() / b
    } else {
        a < T::max_value() / b || a > T::min_value() / b
    }
}

/// Whether negating `a` overflows. True only for `a == MIN`, since
/// `MAX == -MIN - 1` in two's complement.
#[inline]
pub fn would_overflow_neg<T>(a: T) -> bool
where
    T: PrimInt + Signed,
{
    a == T::min_value()
}

/// Whether a division or remainder by `b` is a division by zero.
#[inline]
pub fn is_div_by_zero<T>(b: T) -> bool
where
    T: PrimInt + Signed,
{
    b == T::zero()
}

/// Whether `a / b` overflows. True only for `MIN / -1`, the single
/// quotient whose magnitude exceeds `MAX`.
///
/// # Examples
///
/// ```rust
/// # use freeboard_core::predicate::would_overflow_div;
/// assert!(would_overflow_div(i32::MIN, -1));
/// assert!(!would_overflow_div(i32::MIN, 1));
/// assert!(!would_overflow_div(-1, i32::MIN));
/// ```
#[inline]
pub fn would_overflow_div<T>(a: T, b: T) -> bool
where
    T: PrimInt + Signed,
{
    a == T::min_value() && b == -T::one()
}

/// Whether a shift amount is outside `[0, bits_of::<T>())`.
///
/// This is the overflow condition of the checked shift family. The
/// overflowing shift family masks oversized amounts instead, and only
/// reports negative ones.
///
/// # Examples
///
/// ```rust
/// # use freeboard_core::predicate::shift_out_of_range;
/// assert!(shift_out_of_range::<i8>(-1));
/// assert!(shift_out_of_range::<i8>(8));
/// assert!(!shift_out_of_range::<i8>(7));
/// assert!(!shift_out_of_range::<i64>(63));
/// ```
#[inline]
pub fn shift_out_of_range<T>(n: i64) -> bool
where
    T: PrimInt,
{
    n < 0 || n >= i64::from(bits_of::<T>())
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn test_bits_of() {
        assert_eq!(bits_of::<i8>(), 8);
        assert_eq!(bits_of::<i16>(), 16);
        assert_eq!(bits_of::<i32>(), 32);
        assert_eq!(bits_of::<i64>(), 64);
    }

    #[test]
    fn test_would_overflow_add() {
        assert!(would_overflow_add(i8::MAX, 1));
        assert!(would_overflow_add(1, i8::MAX));
        assert!(would_overflow_add(i8::MIN, -1));
        assert!(would_overflow_add(64i8, 64));
        assert!(!would_overflow_add(i8::MAX, 0));
        assert!(!would_overflow_add(i8::MIN, 0));
        assert!(!would_overflow_add(i8::MAX, i8::MIN));
        assert!(!would_overflow_add(63i8, 64));
        assert!(would_overflow_add(i64::MAX, 1));
        assert!(!would_overflow_add(i64::MAX - 1, 1));
    }

    #[test]
    fn test_would_overflow_add_matches_std() {
        for a in i8::MIN..=i8::MAX {
            for b in i8::MIN..=i8::MAX {
                assert_eq!(
                    would_overflow_add(a, b),
                    a.checked_add(b).is_none(),
                    "a={a} b={b}"
                );
            }
        }
    }

    #[test]
    fn test_would_overflow_sub() {
        assert!(would_overflow_sub(i8::MIN, 1));
        assert!(would_overflow_sub(i8::MAX, -1));
        assert!(would_overflow_sub(0i8, i8::MIN));
        assert!(!would_overflow_sub(i8::MIN, -1));
        assert!(!would_overflow_sub(i8::MAX, 1));
        assert!(!would_overflow_sub(-1i8, i8::MAX));
        assert!(would_overflow_sub(i64::MIN, 1));
    }

    #[test]
    fn test_would_overflow_sub_matches_std() {
        for a in i8::MIN..=i8::MAX {
            for b in i8::MIN..=i8::MAX {
                assert_eq!(
                    would_overflow_sub(a, b),
                    a.checked_sub(b).is_none(),
                    "a={a} b={b}"
                );
            }
        }
    }

    #[test]
    fn test_would_overflow_mul() {
        assert!(would_overflow_mul(100i8, 10));
        assert!(would_overflow_mul(10i8, 100));
        assert!(would_overflow_mul(i8::MIN, -1));
        assert!(would_overflow_mul(-1i8, i8::MIN));
        assert!(would_overflow_mul(i8::MIN, 2));
        assert!(would_overflow_mul(-65i8, 2));
        assert!(!would_overflow_mul(-64i8, 2));
        assert!(!would_overflow_mul(i8::MIN, 1));
        assert!(!would_overflow_mul(0i8, i8::MIN));
        assert!(!would_overflow_mul(11i8, 11));
        assert!(would_overflow_mul(i64::MIN, -1));
        assert!(!would_overflow_mul(i64::MIN / 2, 2));
    }

    #[test]
    fn test_would_overflow_mul_matches_std() {
        for a in i8::MIN..=i8::MAX {
            for b in i8::MIN..=i8::MAX {
                assert_eq!(
                    would_overflow_mul(a, b),
                    a.checked_mul(b).is_none(),
                    "a={a} b={b}"
                );
            }
        }
    }

    #[test]
    fn test_would_overflow_neg() {
        assert!(would_overflow_neg(i8::MIN));
        assert!(would_overflow_neg(i64::MIN));
        assert!(!would_overflow_neg(i8::MAX));
        assert!(!would_overflow_neg(0i32));
        assert!(!would_overflow_neg(i8::MIN + 1));
    }

    #[test]
    fn test_is_div_by_zero() {
        assert!(is_div_by_zero(0i8));
        assert!(is_div_by_zero(0i64));
        assert!(!is_div_by_zero(-1i32));
        assert!(!is_div_by_zero(1i32));
    }

    #[test]
    fn test_would_overflow_div() {
        assert!(would_overflow_div(i8::MIN, -1));
        assert!(would_overflow_div(i64::MIN, -1));
        assert!(!would_overflow_div(i8::MIN, 1));
        assert!(!would_overflow_div(i8::MAX, -1));
        assert!(!would_overflow_div(-1i8, i8::MIN));
    }

    #[test]
    fn test_shift_out_of_range() {
        assert!(shift_out_of_range::<i8>(-1));
        assert!(shift_out_of_range::<i8>(i64::MIN));
        assert!(shift_out_of_range::<i8>(8));
        assert!(shift_out_of_range::<i8>(i64::MAX));
        assert!(!shift_out_of_range::<i8>(0));
        assert!(!shift_out_of_range::<i8>(7));
        assert!(shift_out_of_range::<i16>(16));
        assert!(!shift_out_of_range::<i16>(15));
        assert!(shift_out_of_range::<i32>(32));
        assert!(!shift_out_of_range::<i32>(31));
        assert!(shift_out_of_range::<i64>(64));
        assert!(!shift_out_of_range::<i64>(63));
    }

    #[test]
    fn test_predicates_match_std_at_full_width() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..10_000 {
            let a: i64 = rng.random();
            let b: i64 = rng.random();
            assert_eq!(would_overflow_add(a, b), a.checked_add(b).is_none());
            assert_eq!(would_overflow_sub(a, b), a.checked_sub(b).is_none());
            assert_eq!(would_overflow_mul(a, b), a.checked_mul(b).is_none());
            assert_eq!(would_overflow_neg(a), a.checked_neg().is_none());
        }
    }

    #[test]
    fn test_mul_predicate_matches_std_near_the_boundary() {
        // Full-range products overflow almost surely; factors near the
        // square root of MAX land on both sides of the boundary.
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10_000 {
            let a = rng.random_range(-4_000_000_000i64..=4_000_000_000);
            let b = rng.random_range(-4_000_000_000i64..=4_000_000_000);
            assert_eq!(
                would_overflow_mul(a, b),
                a.checked_mul(b).is_none(),
                "a={a} b={b}"
            );
        }
    }
}
