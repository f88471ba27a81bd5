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

//! # Freeboard Int
//!
//! **Fixed-Width Signed Integers with Per-Operation Overflow Policies.**
//!
//! This crate wraps the fixed-width signed primitives (`i8`, `i16`,
//! `i32`, `i64`) in a value type whose arithmetic names its overflow
//! policy at every call site: checked (report through the process-wide
//! registry, then wrap), wrapping, saturating, or unchecked. The
//! standard operators use the checked policy, so ordinary-looking code
//! keeps the same observable behavior in every build profile.
//!
//! ## Architecture
//!
//! * **`num`**: The `SignedPrimitive` bound alias every representation
//!   satisfies, and type-level width selection (`BitWidth`, `Int<N>`).
//! * **`signed`**: The `SignedInt` wrapper with the four policy
//!   families, the `try_` family, rotations, bit queries, and
//!   endian-explicit byte codecs.
//! * **`convert`**: Lossless `From` and fallible `TryFrom` matrices,
//!   plus checked/unchecked converting constructors for foreign
//!   integer sources.
//!
//! Operator overloads and cross-width comparisons live in a private
//! module; they surface only through the standard traits.
//!
//! ## Design Philosophy
//!
//! 1. **Policy at the call site**: `add_wrapping`, `add_saturating`
//!    and friends say what happens on overflow; nothing depends on
//!    whether the build carries debug assertions.
//! 2. **No silent truncation**: mixed-width arithmetic promotes to the
//!    wider operand, narrowing requires `TryFrom` or an explicitly
//!    checked/unchecked conversion, and comparisons are by
//!    mathematical value across signedness.
//! 3. **Reporting is process-wide**: overflow and division by zero go
//!    through the two handler slots in `freeboard_core::fault`; the
//!    default is a panic, a registered handler observes and execution
//!    continues with the documented wrapped result.

pub mod convert;
pub mod num;
mod ops;
pub mod signed;
