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

//! Mathematical-value comparison across native signedness.
//!
//! Comparing a signed and an unsigned integer by first converting one to
//! the other's type silently reinterprets bit patterns: `-1 == 255u8`
//! after promotion. The primitives here compare by mathematical value
//! instead, widening through `i128`/`u128` so every supported operand
//! fits losslessly. Signed-versus-signed comparison needs no primitive of
//! its own: widening both sides to `i128` and using `Ord` is already
//! exact.

use std::cmp::Ordering;

/// Compares a signed value with an unsigned value by mathematical value.
///
/// A negative `a` is less than any unsigned `b`; otherwise both sides are
/// compared in the unsigned domain.
///
/// # Examples
///
/// ```rust
/// # use std::cmp::Ordering;
/// # use freeboard_core::cmp::cmp_signed_unsigned;
/// assert_eq!(cmp_signed_unsigned(-1, 255), Ordering::Less);
/// assert_eq!(cmp_signed_unsigned(255, 255), Ordering::Equal);
/// assert_eq!(cmp_signed_unsigned(256, 255), Ordering::Greater);
/// ```
#[inline]
pub fn cmp_signed_unsigned(a: i128, b: u128) -> Ordering {
    if a < 0 {
        Ordering::Less
    } else {
        (a as u128).cmp(&b)
    }
}

/// Whether a signed value equals an unsigned value by mathematical value.
#[inline]
pub fn eq_signed_unsigned(a: i128, b: u128) -> bool {
    a >= 0 && a as u128 == b
}
