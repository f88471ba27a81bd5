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

//! # Arithmetic Fault Registry
//!
//! Process-wide registration of fault handlers for checked arithmetic.
//! The registry has two independent slots, one for overflow and one for
//! division by zero, each holding at most one callback. Registering a
//! handler replaces the previous one; it never stacks.
//!
//! The central contract: with no handler registered, a checked operation
//! that detects a fault panics, so checked arithmetic is safe by default.
//! Once a handler is registered the fault is reported to it synchronously
//! and the operation continues on its wrapped-result path, which makes
//! checked arithmetic observable-but-continuing instead. The handler may
//! itself panic or abort to divert control; that is the handler's own
//! capability, not part of this contract.
//!
//! ## Concurrency
//!
//! The slots are lock-protected and the callback is cloned out of the lock
//! before it is invoked, so a handler may perform checked arithmetic or
//! swap handlers without deadlocking. Registration is still best done
//! during single-threaded startup: a handler swap that races concurrent
//! arithmetic decides which faults each thread reports where, not whether
//! they are reported.

use std::sync::{Arc, PoisonError, RwLock};

/// The kind of arithmetic fault reported to a registered handler.
///
/// There are exactly two kinds. Underflow has no kind of its own; a result
/// below the representable range is reported as [`ArithmeticFault::Overflow`].
///
/// # Examples
///
/// ```rust
/// # use freeboard_core::fault::ArithmeticFault;
/// assert_eq!(ArithmeticFault::Overflow.to_string(), "arithmetic overflow");
/// assert_eq!(ArithmeticFault::DivideByZero.to_string(), "division by zero");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithmeticFault {
    /// The mathematically exact result falls outside the representable range.
    Overflow,
    /// A division or remainder operation had a zero divisor.
    DivideByZero,
}

impl std::fmt::Display for ArithmeticFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArithmeticFault::Overflow => write!(f, "arithmetic overflow"),
            ArithmeticFault::DivideByZero => write!(f, "division by zero"),
        }
    }
}

impl std::error::Error for ArithmeticFault {}

/// A registered fault callback.
pub type FaultHandler = Arc<dyn Fn(ArithmeticFault) + Send + Sync>;

static OVERFLOW_HANDLER: RwLock<Option<FaultHandler>> = RwLock::new(None);
static DIV_BY_ZERO_HANDLER: RwLock<Option<FaultHandler>> = RwLock::new(None);

/// Clones the slot's handler out of the lock so the caller can invoke it
/// without holding the guard. Recovers from poisoning: a panicking handler
/// must not wedge the registry for the rest of the process.
fn installed(slot: &RwLock<Option<FaultHandler>>) -> Option<FaultHandler> {
    slot.read().unwrap_or_else(PoisonError::into_inner).clone()
}

fn install(slot: &RwLock<Option<FaultHandler>>, handler: Option<FaultHandler>) {
    *slot.write().unwrap_or_else(PoisonError::into_inner) = handler;
}

/// Registers the process-wide overflow handler, replacing any previous one.
///
/// The handler is invoked synchronously on the thread whose checked
/// operation detected the fault, after which the operation returns its
/// two's-complement wrapped result.
///
/// # Examples
///
/// ```rust
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use freeboard_core::fault::{self, ArithmeticFault};
/// use freeboard_core::ops::checked::CheckedOps;
///
/// static SEEN: AtomicUsize = AtomicUsize::new(0);
///
/// fault::register_overflow_handler(|kind| {
///     assert_eq!(kind, ArithmeticFault::Overflow);
///     SEEN.fetch_add(1, Ordering::SeqCst);
/// });
///
/// assert_eq!(i8::MAX.add_checked(1), i8::MIN);
/// assert_eq!(SEEN.load(Ordering::SeqCst), 1);
///
/// fault::reset_overflow_handler();
/// ```
pub fn register_overflow_handler<F>(handler: F)
where
    F: Fn(ArithmeticFault) + Send + Sync + 'static,
{
    install(&OVERFLOW_HANDLER, Some(Arc::new(handler)));
}

/// Clears the overflow slot, restoring the fatal default.
pub fn reset_overflow_handler() {
    install(&OVERFLOW_HANDLER, None);
}

/// Registers the process-wide divide-by-zero handler, replacing any
/// previous one.
pub fn register_div_by_zero_handler<F>(handler: F)
where
    F: Fn(ArithmeticFault) + Send + Sync + 'static,
{
    install(&DIV_BY_ZERO_HANDLER, Some(Arc::new(handler)));
}

/// Clears the divide-by-zero slot, restoring the fatal default.
pub fn reset_div_by_zero_handler() {
    install(&DIV_BY_ZERO_HANDLER, None);
}

/// Reports an overflow fault.
///
/// Called by the checked operation families once their predicate fires.
/// Invokes the registered handler with [`ArithmeticFault::Overflow`], or
/// panics if no handler is registered.
///
/// # Panics
///
/// Panics when the overflow slot is empty. This is the safe-by-default
/// behavior, not an error condition of this function.
pub fn notify_overflow() {
    match installed(&OVERFLOW_HANDLER) {
        Some(handler) => handler(ArithmeticFault::Overflow),
        None => panic!("signed integer overflow: no overflow handler registered"),
    }
}

/// Reports a divide-by-zero fault.
///
/// Invokes the registered handler with [`ArithmeticFault::DivideByZero`],
/// or panics if no handler is registered.
///
/// # Panics
///
/// Panics when the divide-by-zero slot is empty.
pub fn notify_div_by_zero() {
    match installed(&DIV_BY_ZERO_HANDLER) {
        Some(handler) => handler(ArithmeticFault::DivideByZero),
        None => panic!("signed integer division by zero: no divide-by-zero handler registered"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Registration tests live in tests/handler.rs, where a file-local lock
    // serializes access to the process-wide slots. The unit tests here only
    // cover state-free behavior.

    #[test]
    fn test_fault_display() {
        assert_eq!(format!("{}", ArithmeticFault::Overflow), "arithmetic overflow");
        assert_eq!(format!("{}", ArithmeticFault::DivideByZero), "division by zero");
    }

    #[test]
    fn test_fault_is_error() {
        let err: Box<dyn std::error::Error> = Box::new(ArithmeticFault::Overflow);
        assert_eq!(err.to_string(), "arithmetic overflow");
    }

    #[test]
    fn test_fault_kinds_are_distinct() {
        assert_ne!(ArithmeticFault::Overflow, ArithmeticFault::DivideByZero);
    }
}
