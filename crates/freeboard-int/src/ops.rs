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

//! # Operator Overloads
//!
//! The standard operators on [`SignedInt`] use the checked policy:
//! `a + b` reports overflow through the handler registry and continues
//! with the wrapped value, so plain-looking arithmetic is never
//! silently profile-dependent. Callers that want a different policy
//! name it with the `_wrapping`/`_saturating`/`_unchecked` methods.
//!
//! Mixed-width operands promote to the wider of the two widths, and a
//! primitive operand participates only when it is the same width or
//! narrower than the wrapper; a wider primitive requires an explicit
//! conversion, so the promotion can never truncate. Shift amounts are
//! exempt from that rule since they are amounts rather than operands.
//!
//! Comparisons are by mathematical value: a negative wrapper never
//! equals a large unsigned bit pattern, and `u128`/`usize` operands
//! compare correctly against every width.

use std::cmp::Ordering;
use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub,
    SubAssign,
};

use freeboard_core::cmp;

use crate::num::SignedPrimitive;
use crate::signed::SignedInt;

impl<A, B> PartialEq<SignedInt<B>> for SignedInt<A>
where
    A: SignedPrimitive,
    B: SignedPrimitive,
{
    #[inline]
    fn eq(&self, other: &SignedInt<B>) -> bool {
        let a: i64 = self.value().into();
        let b: i64 = other.value().into();
        a == b
    }
}

impl<A> Eq for SignedInt<A> where A: SignedPrimitive {}

impl<A, B> PartialOrd<SignedInt<B>> for SignedInt<A>
where
    A: SignedPrimitive,
    B: SignedPrimitive,
{
    #[inline]
    fn partial_cmp(&self, other: &SignedInt<B>) -> Option<Ordering> {
        let a: i64 = self.value().into();
        let b: i64 = other.value().into();
        Some(a.cmp(&b))
    }
}

impl<A> Ord for SignedInt<A>
where
    A: SignedPrimitive,
{
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        let a: i64 = self.value().into();
        let b: i64 = other.value().into();
        a.cmp(&b)
    }
}

// Comparisons against signed primitives of any width, both
// orientations, widened through i128 so every pairing is lossless.
macro_rules! cmp_signed_prim {
    ($t:ty => $($p:ty),*) => {
        $(
            impl PartialEq<$p> for SignedInt<$t> {
                #[inline]
                fn eq(&self, other: &$p) -> bool {
                    (self.value() as i128) == (*other as i128)
                }
            }

            impl PartialEq<SignedInt<$t>> for $p {
                #[inline]
                fn eq(&self, other: &SignedInt<$t>) -> bool {
                    (*self as i128) == (other.value() as i128)
                }
            }

            impl PartialOrd<$p> for SignedInt<$t> {
                #[inline]
                fn partial_cmp(&self, other: &$p) -> Option<Ordering> {
                    Some((self.value() as i128).cmp(&(*other as i128)))
                }
            }

            impl PartialOrd<SignedInt<$t>> for $p {
                #[inline]
                fn partial_cmp(&self, other: &SignedInt<$t>) -> Option<Ordering> {
                    Some((*self as i128).cmp(&(other.value() as i128)))
                }
            }
        )*
    };
}

cmp_signed_prim!(i8 => i8, i16, i32, i64, i128, isize);
cmp_signed_prim!(i16 => i8, i16, i32, i64, i128, isize);
cmp_signed_prim!(i32 => i8, i16, i32, i64, i128, isize);
cmp_signed_prim!(i64 => i8, i16, i32, i64, i128, isize);

// Comparisons against unsigned primitives by mathematical value: a
// negative wrapper is less than every unsigned value, including ones
// sharing its bit pattern.
macro_rules! cmp_unsigned_prim {
    ($t:ty => $($p:ty),*) => {
        $(
            impl PartialEq<$p> for SignedInt<$t> {
                #[inline]
                fn eq(&self, other: &$p) -> bool {
                    cmp::eq_signed_unsigned(self.value() as i128, *other as u128)
                }
            }

            impl PartialEq<SignedInt<$t>> for $p {
                #[inline]
                fn eq(&self, other: &SignedInt<$t>) -> bool {
                    cmp::eq_signed_unsigned(other.value() as i128, *self as u128)
                }
            }

            impl PartialOrd<$p> for SignedInt<$t> {
                #[inline]
                fn partial_cmp(&self, other: &$p) -> Option<Ordering> {
                    Some(cmp::cmp_signed_unsigned(self.value() as i128, *other as u128))
                }
            }

            impl PartialOrd<SignedInt<$t>> for $p {
                #[inline]
                fn partial_cmp(&self, other: &SignedInt<$t>) -> Option<Ordering> {
                    Some(
                        cmp::cmp_signed_unsigned(other.value() as i128, *self as u128)
                            .reverse(),
                    )
                }
            }
        )*
    };
}

cmp_unsigned_prim!(i8 => u8, u16, u32, u64, u128, usize);
cmp_unsigned_prim!(i16 => u8, u16, u32, u64, u128, usize);
cmp_unsigned_prim!(i32 => u8, u16, u32, u64, u128, usize);
cmp_unsigned_prim!(i64 => u8, u16, u32, u64, u128, usize);

impl<T> Add for SignedInt<T>
where
    T: SignedPrimitive,
{
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.add_checked(rhs)
    }
}

impl<T> Sub for SignedInt<T>
where
    T: SignedPrimitive,
{
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.sub_checked(rhs)
    }
}

impl<T> Mul for SignedInt<T>
where
    T: SignedPrimitive,
{
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_checked(rhs)
    }
}

impl<T> Div for SignedInt<T>
where
    T: SignedPrimitive,
{
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        self.div_checked(rhs)
    }
}

impl<T> Rem for SignedInt<T>
where
    T: SignedPrimitive,
{
    type Output = Self;

    #[inline]
    fn rem(self, rhs: Self) -> Self {
        self.rem_checked(rhs)
    }
}

impl<T> Neg for SignedInt<T>
where
    T: SignedPrimitive,
{
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.neg_checked()
    }
}

impl<T> Not for SignedInt<T>
where
    T: SignedPrimitive,
{
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        Self::new(!self.value())
    }
}

impl<T> BitAnd for SignedInt<T>
where
    T: SignedPrimitive,
{
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self::new(self.value() & rhs.value())
    }
}

impl<T> BitOr for SignedInt<T>
where
    T: SignedPrimitive,
{
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self::new(self.value() | rhs.value())
    }
}

impl<T> BitXor for SignedInt<T>
where
    T: SignedPrimitive,
{
    type Output = Self;

    #[inline]
    fn bitxor(self, rhs: Self) -> Self {
        Self::new(self.value() ^ rhs.value())
    }
}

impl<T, U> Shl<SignedInt<U>> for SignedInt<T>
where
    T: SignedPrimitive,
    U: SignedPrimitive,
{
    type Output = SignedInt<T>;

    #[inline]
    fn shl(self, rhs: SignedInt<U>) -> SignedInt<T> {
        self.shl_checked(rhs.value().into())
    }
}

impl<T, U> Shr<SignedInt<U>> for SignedInt<T>
where
    T: SignedPrimitive,
    U: SignedPrimitive,
{
    type Output = SignedInt<T>;

    #[inline]
    fn shr(self, rhs: SignedInt<U>) -> SignedInt<T> {
        self.shr_checked(rhs.value().into())
    }
}

impl<T, U> ShlAssign<SignedInt<U>> for SignedInt<T>
where
    T: SignedPrimitive,
    U: SignedPrimitive,
{
    #[inline]
    fn shl_assign(&mut self, rhs: SignedInt<U>) {
        *self = *self << rhs;
    }
}

impl<T, U> ShrAssign<SignedInt<U>> for SignedInt<T>
where
    T: SignedPrimitive,
    U: SignedPrimitive,
{
    #[inline]
    fn shr_assign(&mut self, rhs: SignedInt<U>) {
        *self = *self >> rhs;
    }
}

// Shift amounts are amounts rather than operands, so every primitive
// integer type is accepted regardless of the wrapper width.
macro_rules! shift_amount_impl {
    ($($p:ty),*) => {
        $(
            impl<T> Shl<$p> for SignedInt<T>
            where
                T: SignedPrimitive,
            {
                type Output = SignedInt<T>;

                #[inline]
                fn shl(self, rhs: $p) -> SignedInt<T> {
                    self.shl_checked(rhs as i64)
                }
            }

            impl<T> Shr<$p> for SignedInt<T>
            where
                T: SignedPrimitive,
            {
                type Output = SignedInt<T>;

                #[inline]
                fn shr(self, rhs: $p) -> SignedInt<T> {
                    self.shr_checked(rhs as i64)
                }
            }

            impl<T> ShlAssign<$p> for SignedInt<T>
            where
                T: SignedPrimitive,
            {
                #[inline]
                fn shl_assign(&mut self, rhs: $p) {
                    *self = *self << rhs;
                }
            }

            impl<T> ShrAssign<$p> for SignedInt<T>
            where
                T: SignedPrimitive,
            {
                #[inline]
                fn shr_assign(&mut self, rhs: $p) {
                    *self = *self >> rhs;
                }
            }
        )*
    };
}

shift_amount_impl!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

impl<T> AddAssign for SignedInt<T>
where
    T: SignedPrimitive,
{
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T> SubAssign for SignedInt<T>
where
    T: SignedPrimitive,
{
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T> MulAssign for SignedInt<T>
where
    T: SignedPrimitive,
{
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T> DivAssign for SignedInt<T>
where
    T: SignedPrimitive,
{
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl<T> RemAssign for SignedInt<T>
where
    T: SignedPrimitive,
{
    #[inline]
    fn rem_assign(&mut self, rhs: Self) {
        *self = *self % rhs;
    }
}

impl<T> BitAndAssign for SignedInt<T>
where
    T: SignedPrimitive,
{
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        *self = *self & rhs;
    }
}

impl<T> BitOrAssign for SignedInt<T>
where
    T: SignedPrimitive,
{
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        *self = *self | rhs;
    }
}

impl<T> BitXorAssign for SignedInt<T>
where
    T: SignedPrimitive,
{
    #[inline]
    fn bitxor_assign(&mut self, rhs: Self) {
        *self = *self ^ rhs;
    }
}

// One binary operator row between a narrower and a wider wrapper; the
// narrow side widens first, so the result carries the wider width.
macro_rules! promoted_binop {
    ($narrow:ty, $wide:ty, $trait:ident, $method:ident, $checked:ident) => {
        impl $trait<SignedInt<$wide>> for SignedInt<$narrow> {
            type Output = SignedInt<$wide>;

            #[inline]
            fn $method(self, rhs: SignedInt<$wide>) -> SignedInt<$wide> {
                SignedInt::<$wide>::from(self).$checked(rhs)
            }
        }

        impl $trait<SignedInt<$narrow>> for SignedInt<$wide> {
            type Output = SignedInt<$wide>;

            #[inline]
            fn $method(self, rhs: SignedInt<$narrow>) -> SignedInt<$wide> {
                self.$checked(SignedInt::<$wide>::from(rhs))
            }
        }
    };
}

macro_rules! promoted_assign {
    ($narrow:ty, $wide:ty, $trait:ident, $method:ident, $op:tt) => {
        impl $trait<SignedInt<$narrow>> for SignedInt<$wide> {
            #[inline]
            fn $method(&mut self, rhs: SignedInt<$narrow>) {
                *self = *self $op rhs;
            }
        }
    };
}

macro_rules! promoted_pair {
    ($narrow:ty, $wide:ty) => {
        promoted_binop!($narrow, $wide, Add, add, add_checked);
        promoted_binop!($narrow, $wide, Sub, sub, sub_checked);
        promoted_binop!($narrow, $wide, Mul, mul, mul_checked);
        promoted_binop!($narrow, $wide, Div, div, div_checked);
        promoted_binop!($narrow, $wide, Rem, rem, rem_checked);
        promoted_binop!($narrow, $wide, BitAnd, bitand, bitand);
        promoted_binop!($narrow, $wide, BitOr, bitor, bitor);
        promoted_binop!($narrow, $wide, BitXor, bitxor, bitxor);
        promoted_assign!($narrow, $wide, AddAssign, add_assign, +);
        promoted_assign!($narrow, $wide, SubAssign, sub_assign, -);
        promoted_assign!($narrow, $wide, MulAssign, mul_assign, *);
        promoted_assign!($narrow, $wide, DivAssign, div_assign, /);
        promoted_assign!($narrow, $wide, RemAssign, rem_assign, %);
        promoted_assign!($narrow, $wide, BitAndAssign, bitand_assign, &);
        promoted_assign!($narrow, $wide, BitOrAssign, bitor_assign, |);
        promoted_assign!($narrow, $wide, BitXorAssign, bitxor_assign, ^);
    };
}

promoted_pair!(i8, i16);
promoted_pair!(i8, i32);
promoted_pair!(i8, i64);
promoted_pair!(i16, i32);
promoted_pair!(i16, i64);
promoted_pair!(i32, i64);

// One binary operator row between a wrapper and a same-or-narrower
// primitive; the result keeps the wrapper width. A wider primitive has
// no row, so it fails to compile instead of truncating.
macro_rules! prim_binop {
    ($t:ty, $p:ty, $trait:ident, $method:ident, $checked:ident) => {
        impl $trait<$p> for SignedInt<$t> {
            type Output = SignedInt<$t>;

            #[inline]
            fn $method(self, rhs: $p) -> SignedInt<$t> {
                self.$checked(SignedInt::new(<$t>::from(rhs)))
            }
        }

        impl $trait<SignedInt<$t>> for $p {
            type Output = SignedInt<$t>;

            #[inline]
            fn $method(self, rhs: SignedInt<$t>) -> SignedInt<$t> {
                SignedInt::new(<$t>::from(self)).$checked(rhs)
            }
        }
    };
}

macro_rules! prim_assign {
    ($t:ty, $p:ty, $trait:ident, $method:ident, $op:tt) => {
        impl $trait<$p> for SignedInt<$t> {
            #[inline]
            fn $method(&mut self, rhs: $p) {
                *self = *self $op rhs;
            }
        }
    };
}

macro_rules! prim_operand {
    ($t:ty => $($p:ty),*) => {
        $(
            prim_binop!($t, $p, Add, add, add_checked);
            prim_binop!($t, $p, Sub, sub, sub_checked);
            prim_binop!($t, $p, Mul, mul, mul_checked);
            prim_binop!($t, $p, Div, div, div_checked);
            prim_binop!($t, $p, Rem, rem, rem_checked);
            prim_binop!($t, $p, BitAnd, bitand, bitand);
            prim_binop!($t, $p, BitOr, bitor, bitor);
            prim_binop!($t, $p, BitXor, bitxor, bitxor);
            prim_assign!($t, $p, AddAssign, add_assign, +);
            prim_assign!($t, $p, SubAssign, sub_assign, -);
            prim_assign!($t, $p, MulAssign, mul_assign, *);
            prim_assign!($t, $p, DivAssign, div_assign, /);
            prim_assign!($t, $p, RemAssign, rem_assign, %);
            prim_assign!($t, $p, BitAndAssign, bitand_assign, &);
            prim_assign!($t, $p, BitOrAssign, bitor_assign, |);
            prim_assign!($t, $p, BitXorAssign, bitxor_assign, ^);
        )*
    };
}

prim_operand!(i8 => i8);
prim_operand!(i16 => i8, i16);
prim_operand!(i32 => i8, i16, i32);
prim_operand!(i64 => i8, i16, i32, i64);
