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

//! # Policy Operation Families
//!
//! By-value arithmetic traits for `i8`/`i16`/`i32`/`i64`, one trait per
//! overflow policy. Each family covers addition, subtraction,
//! multiplication, division, remainder, negation, and both shifts, so a
//! single bound gives generic code the full operation set under one
//! policy.
//!
//! ## Submodules
//!
//! - `checked`: Detect faults via the predicates, report them through the
//!   fault registry (fatal by default), then return the wrapped result.
//! - `wrapping`: Always reduce modulo 2^bits; only division by zero is
//!   still reported, since it has no wrapped value.
//! - `saturating`: Clamp to the representable range instead of reporting;
//!   division by zero is still reported.
//! - `unchecked`: The raw native operation. Overflow of add, subtract,
//!   multiply, and negate is two's-complement wraparound; division by
//!   zero and out-of-range shift amounts remain the caller's programming
//!   error.
//! - `overflowing`: The masking shift pair used by rotation, which
//!   reduces the amount modulo the width and reports only negative
//!   amounts.
//!
//! ## Motivation
//!
//! The primitives already expose `checked_*`, `wrapping_*`, and
//! `saturating_*` methods, but not behind traits usable as bounds, and
//! their checked family answers with `Option` rather than the
//! report-then-continue contract the fault registry defines. These traits
//! close both gaps while delegating to the primitive operations wherever
//! the semantics coincide.

pub mod checked;
pub mod overflowing;
pub mod saturating;
pub mod unchecked;
pub mod wrapping;
