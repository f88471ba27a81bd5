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

//! # Conversions
//!
//! Conversions into and out of [`SignedInt`] follow the standard
//! library's split: `From` where the conversion is lossless (widening,
//! or unwrapping at the same width) and `TryFrom` where narrowing can
//! fail. On top of that, [`SignedInt::convert_checked`] accepts any
//! source that widens losslessly into `i128` and routes an
//! out-of-range value through the overflow slot before truncating,
//! while [`SignedInt::convert_unchecked`] truncates silently.
//!
//! ## Motivation
//!
//! Narrowing is where quiet corruption usually enters integer code.
//! Splitting the conversions by fallibility keeps the lossless paths
//! free of ceremony and forces every narrowing call site to say how an
//! out-of-range value should be treated.

use freeboard_core::constants::Bounds;
use freeboard_core::fault;

use crate::num::SignedPrimitive;
use crate::signed::SignedInt;

/// Truncation from an `i128`, keeping the low bits of the two's
/// complement representation.
pub trait TruncateFrom {
    /// Reinterprets the low bits of `value` at this width.
    fn truncate_from(value: i128) -> Self;
}

macro_rules! truncate_from_impl {
    ($($t:ty),*) => {
        $(
            impl TruncateFrom for $t {
                #[inline(always)]
                fn truncate_from(value: i128) -> $t {
                    value as $t
                }
            }
        )*
    };
}

truncate_from_impl!(i8, i16, i32, i64);

/// The error returned when a narrowing conversion loses the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TryFromSignedIntError(());

impl std::fmt::Display for TryFromSignedIntError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "out of range signed integer conversion")
    }
}

impl std::error::Error for TryFromSignedIntError {}

impl<T> SignedInt<T>
where
    T: SignedPrimitive,
{
    /// Converts from any integer that widens losslessly into `i128`,
    /// reporting an out-of-range source through the overflow slot and
    /// then truncating it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use freeboard_int::signed::I32;
    ///
    /// let x = I32::convert_checked(40_000u16);
    /// assert_eq!(x.value(), 40_000);
    /// ```
    pub fn convert_checked<U>(value: U) -> Self
    where
        U: Into<i128>,
    {
        let wide: i128 = value.into();
        let min: i128 = <T as Bounds>::MIN.into();
        let max: i128 = <T as Bounds>::MAX.into();
        if wide < min || wide > max {
            fault::notify_overflow();
        }
        Self::new(T::truncate_from(wide))
    }

    /// Converts by truncating to this width, keeping the low bits of
    /// the two's complement representation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use freeboard_int::signed::I8;
    ///
    /// assert_eq!(I8::convert_unchecked(0x1234i32).value(), 0x34);
    /// ```
    #[inline]
    pub fn convert_unchecked<U>(value: U) -> Self
    where
        U: Into<i128>,
    {
        Self::new(T::truncate_from(value.into()))
    }
}

macro_rules! from_prim_impl {
    ($src:ty => $($dst:ty),*) => {
        $(
            impl From<$src> for SignedInt<$dst> {
                #[inline]
                fn from(value: $src) -> Self {
                    Self::new(<$dst>::from(value))
                }
            }
        )*
    };
}

from_prim_impl!(i8 => i8, i16, i32, i64);
from_prim_impl!(i16 => i16, i32, i64);
from_prim_impl!(i32 => i32, i64);
from_prim_impl!(i64 => i64);

macro_rules! from_signed_impl {
    ($src:ty => $($dst:ty),*) => {
        $(
            impl From<SignedInt<$src>> for SignedInt<$dst> {
                #[inline]
                fn from(value: SignedInt<$src>) -> Self {
                    Self::new(<$dst>::from(value.value()))
                }
            }
        )*
    };
}

from_signed_impl!(i8 => i16, i32, i64);
from_signed_impl!(i16 => i32, i64);
from_signed_impl!(i32 => i64);

macro_rules! into_prim_impl {
    ($($t:ty),*) => {
        $(
            impl From<SignedInt<$t>> for $t {
                #[inline]
                fn from(value: SignedInt<$t>) -> $t {
                    value.value()
                }
            }
        )*
    };
}

into_prim_impl!(i8, i16, i32, i64);

macro_rules! try_from_signed_impl {
    ($src:ty => $($dst:ty),*) => {
        $(
            impl TryFrom<SignedInt<$src>> for SignedInt<$dst> {
                type Error = TryFromSignedIntError;

                #[inline]
                fn try_from(value: SignedInt<$src>) -> Result<Self, Self::Error> {
                    <$dst>::try_from(value.value())
                        .map(Self::new)
                        .map_err(|_| TryFromSignedIntError(()))
                }
            }
        )*
    };
}

try_from_signed_impl!(i16 => i8);
try_from_signed_impl!(i32 => i8, i16);
try_from_signed_impl!(i64 => i8, i16, i32);

macro_rules! try_from_prim_impl {
    ($src:ty => $($dst:ty),*) => {
        $(
            impl TryFrom<$src> for SignedInt<$dst> {
                type Error = TryFromSignedIntError;

                #[inline]
                fn try_from(value: $src) -> Result<Self, Self::Error> {
                    <$dst>::try_from(value)
                        .map(Self::new)
                        .map_err(|_| TryFromSignedIntError(()))
                }
            }
        )*
    };
}

try_from_prim_impl!(i16 => i8);
try_from_prim_impl!(i32 => i8, i16);
try_from_prim_impl!(i64 => i8, i16, i32);
try_from_prim_impl!(i128 => i8, i16, i32, i64);
