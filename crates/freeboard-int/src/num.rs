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

//! # Signed Primitive Trait
//!
//! Unified numeric bounds for the fixed-width integer wrapper.
//! `SignedPrimitive` specifies the capabilities a primitive must offer to
//! back [`SignedInt`], including intrinsic traits (`PrimInt`, `Signed`),
//! widening conversions into `i64`/`i128`, and the by-value policy
//! arithmetic traits from `freeboard_core`.
//!
//! ## Motivation
//!
//! The wrapper should remain generic over its representation while
//! retaining predictable arithmetic semantics at every width. This trait
//! collects the necessary bounds into a single alias, simplifying generic
//! signatures and ensuring consistent overflow handling and conversions.
//!
//! ## Highlights
//!
//! - Requires `PrimInt + Signed` for numeric fundamentals.
//! - Enforces `Into<i64> + Into<i128>` so any representation widens
//!   losslessly for cross-width arithmetic and range tests.
//! - Includes the `MinusOne`, `Zero`, `PlusOne` and `Bounds` constant
//!   traits.
//! - Adds the by-value policy families: checked, wrapping, saturating,
//!   unchecked, and the overflowing shifts.
//! - `Send + Sync` for use across threads.
//!
//! Note: `i128` and `isize` are intentionally excluded; `i128` for
//! performance reasons and `isize` because its width is
//! platform-dependent.

use std::hash::Hash;

use freeboard_core::{
    constants::{Bounds, MinusOne, PlusOne, Zero},
    ops::{
        checked::CheckedOps, overflowing::OverflowingShift, saturating::SaturatingOps,
        unchecked::UncheckedOps, wrapping::WrappingOps,
    },
};
use num_traits::{PrimInt, Signed};

use crate::convert::TruncateFrom;
use crate::signed::SignedInt;

/// A trait alias for the primitive types that can back a [`SignedInt`].
/// This includes the fixed-width signed integer types `i8`, `i16`, `i32`
/// and `i64`, each supporting all four overflow-policy families.
///
/// # Note
///
/// `i128` is intentionally excluded due to performance reasons, as it is
/// significantly slower on many platforms. `isize` is excluded because
/// its width varies by target.
pub trait SignedPrimitive:
    PrimInt
    + Signed
    + Into<i64>
    + Into<i128>
    + TruncateFrom
    + std::fmt::Debug
    + std::fmt::Display
    + Default
    + MinusOne
    + PlusOne
    + Zero
    + Bounds
    + CheckedOps
    + WrappingOps
    + SaturatingOps
    + UncheckedOps
    + OverflowingShift
    + Send
    + Sync
    + Hash
{
}

impl<T> SignedPrimitive for T where
    T: PrimInt
        + Signed
        + Into<i64>
        + Into<i128>
        + TruncateFrom
        + std::fmt::Debug
        + std::fmt::Display
        + Default
        + MinusOne
        + PlusOne
        + Zero
        + Bounds
        + CheckedOps
        + WrappingOps
        + SaturatingOps
        + UncheckedOps
        + OverflowingShift
        + Send
        + Sync
        + Hash
{
}

/// Marker type selecting a bit width at the type level.
///
/// Only the widths `8`, `16`, `32` and `64` implement [`SelectInt`];
/// naming any other width fails to compile.
pub struct BitWidth<const N: u32>;

/// Maps a [`BitWidth`] to the primitive representation backing it.
pub trait SelectInt {
    /// The primitive behind the selected width.
    type Repr: SignedPrimitive;
}

impl SelectInt for BitWidth<8> {
    type Repr = i8;
}

impl SelectInt for BitWidth<16> {
    type Repr = i16;
}

impl SelectInt for BitWidth<32> {
    type Repr = i32;
}

impl SelectInt for BitWidth<64> {
    type Repr = i64;
}

/// A [`SignedInt`] selected by bit width rather than by representation.
///
/// # Examples
///
/// ```rust
/// # use freeboard_int::num::Int;
/// let x: Int<32> = Int::<32>::new(7);
/// assert_eq!(x.value(), 7);
/// ```
///
/// Unsupported widths are rejected at compile time:
///
/// ```compile_fail
/// # use freeboard_int::num::Int;
/// let x: Int<24> = Int::<24>::new(0);
/// ```
pub type Int<const N: u32> = SignedInt<<BitWidth<N> as SelectInt>::Repr>;
