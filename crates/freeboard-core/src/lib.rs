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

//! # Freeboard Core
//!
//! The arithmetic engine behind the Freeboard fixed-width signed integers.
//! This crate defines the process-wide fault handler registry, the algebraic
//! overflow predicates, and the by-value policy operation traits that the
//! public value type in `freeboard-int` is built on.
//!
//! ## Modules
//!
//! - `cmp`: Mathematical-value comparison primitives across native
//!   signedness, so that a negative value always compares less than any
//!   unsigned value regardless of bit patterns.
//! - `constants`: Associated-constant traits (`MinusOne`, `Zero`, `PlusOne`,
//!   `Bounds`) for the four supported widths.
//! - `fault`: The `ArithmeticFault` kinds and the replace-don't-stack
//!   handler registry consulted by checked operations.
//! - `ops`: The policy operation families — checked, wrapping, saturating,
//!   unchecked, and the masking "overflowing" shifts — implemented for
//!   `i8`, `i16`, `i32`, and `i64`.
//! - `predicate`: Pure overflow/underflow/division-by-zero predicates
//!   computed from algebraic range identities, never from performing the
//!   operation and inspecting the outcome.
//!
//! ## Purpose
//!
//! Native integer overflow is implicit and easy to miss. These building
//! blocks make the failure policy of every arithmetic operation explicit at
//! the call site while keeping the happy path branch-predictable and free
//! of hidden allocation or locking.
//!
//! Refer to each module for detailed APIs and examples.

pub mod cmp;
pub mod constants;
pub mod fault;
pub mod ops;
pub mod predicate;
