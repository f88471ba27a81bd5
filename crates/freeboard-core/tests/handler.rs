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

//! Handler registry behavior. The registry is process-wide state, so
//! every test here serializes on [`REGISTRY_GUARD`] and restores the
//! fatal default before releasing it.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use freeboard_core::fault::{
    ArithmeticFault, register_div_by_zero_handler, register_overflow_handler,
    reset_div_by_zero_handler, reset_overflow_handler,
};
use freeboard_core::ops::checked::CheckedOps;
use freeboard_core::ops::overflowing::OverflowingShift;
use freeboard_core::ops::saturating::SaturatingOps;
use freeboard_core::ops::wrapping::WrappingOps;

static REGISTRY_GUARD: Mutex<()> = Mutex::new(());

fn registry_lock() -> MutexGuard<'static, ()> {
    REGISTRY_GUARD
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

#[test]
fn test_overflow_handler_observes_and_execution_continues() {
    let _guard = registry_lock();
    let seen = Arc::new(AtomicUsize::new(0));
    let sink = Arc::clone(&seen);
    register_overflow_handler(move |fault| {
        assert_eq!(fault, ArithmeticFault::Overflow);
        sink.fetch_add(1, Ordering::SeqCst);
    });

    assert_eq!(i8::MAX.add_checked(1), i8::MIN);
    assert_eq!(seen.load(Ordering::SeqCst), 1);

    assert_eq!(100i8.mul_checked(10), -24);
    assert_eq!(seen.load(Ordering::SeqCst), 2);

    assert_eq!(i8::MIN.neg_checked(), i8::MIN);
    assert_eq!(seen.load(Ordering::SeqCst), 3);

    assert_eq!(1i8.shl_checked(9), 2);
    assert_eq!(seen.load(Ordering::SeqCst), 4);

    assert_eq!(5i8.shl_overflowing(-1), 5);
    assert_eq!(seen.load(Ordering::SeqCst), 5);

    reset_overflow_handler();
}

#[test]
fn test_div_by_zero_fallback_values_across_families() {
    let _guard = registry_lock();
    let seen = Arc::new(AtomicUsize::new(0));
    let sink = Arc::clone(&seen);
    register_div_by_zero_handler(move |fault| {
        assert_eq!(fault, ArithmeticFault::DivideByZero);
        sink.fetch_add(1, Ordering::SeqCst);
    });

    assert_eq!(7i32.div_checked(0), -1);
    assert_eq!(7i32.rem_checked(0), 7);
    assert_eq!(7i32.div_wrapping(0), -1);
    assert_eq!(7i32.rem_wrapping(0), 7);
    assert_eq!(7i32.div_saturating(0), -1);
    assert_eq!(7i32.rem_saturating(0), 7);
    assert_eq!(seen.load(Ordering::SeqCst), 6);

    reset_div_by_zero_handler();
}

#[test]
fn test_in_range_operations_never_notify() {
    let _guard = registry_lock();
    let seen = Arc::new(AtomicUsize::new(0));
    let overflow_sink = Arc::clone(&seen);
    let div_sink = Arc::clone(&seen);
    register_overflow_handler(move |_| {
        overflow_sink.fetch_add(1, Ordering::SeqCst);
    });
    register_div_by_zero_handler(move |_| {
        div_sink.fetch_add(1, Ordering::SeqCst);
    });

    assert_eq!(1i8.add_checked(2), 3);
    assert_eq!(i8::MIN.div_checked(2), -64);
    assert_eq!(i8::MIN.rem_checked(-1), 0);
    // Silent families stay silent even when the value wraps or clamps.
    assert_eq!(i8::MAX.add_wrapping(1), i8::MIN);
    assert_eq!(i8::MIN.neg_wrapping(), i8::MIN);
    assert_eq!(i8::MAX.add_saturating(1), i8::MAX);
    assert_eq!(i8::MIN.div_saturating(-1), i8::MAX);
    assert_eq!(seen.load(Ordering::SeqCst), 0);

    reset_overflow_handler();
    reset_div_by_zero_handler();
}

#[test]
fn test_registration_replaces_rather_than_stacks() {
    let _guard = registry_lock();
    let first = Arc::new(AtomicUsize::new(0));
    let second = Arc::new(AtomicUsize::new(0));
    let first_sink = Arc::clone(&first);
    let second_sink = Arc::clone(&second);
    register_overflow_handler(move |_| {
        first_sink.fetch_add(1, Ordering::SeqCst);
    });
    register_overflow_handler(move |_| {
        second_sink.fetch_add(1, Ordering::SeqCst);
    });

    assert_eq!(i8::MAX.add_checked(1), i8::MIN);
    assert_eq!(first.load(Ordering::SeqCst), 0);
    assert_eq!(second.load(Ordering::SeqCst), 1);

    reset_overflow_handler();
}

#[test]
fn test_slots_are_independent() {
    let _guard = registry_lock();
    let overflows = Arc::new(AtomicUsize::new(0));
    let zeros = Arc::new(AtomicUsize::new(0));
    let overflow_sink = Arc::clone(&overflows);
    let zero_sink = Arc::clone(&zeros);
    register_overflow_handler(move |_| {
        overflow_sink.fetch_add(1, Ordering::SeqCst);
    });
    register_div_by_zero_handler(move |_| {
        zero_sink.fetch_add(1, Ordering::SeqCst);
    });

    assert_eq!(i8::MAX.add_checked(1), i8::MIN);
    assert_eq!(overflows.load(Ordering::SeqCst), 1);
    assert_eq!(zeros.load(Ordering::SeqCst), 0);

    assert_eq!(1i8.div_checked(0), -1);
    assert_eq!(overflows.load(Ordering::SeqCst), 1);
    assert_eq!(zeros.load(Ordering::SeqCst), 1);

    reset_overflow_handler();
    reset_div_by_zero_handler();
}

#[test]
fn test_handler_may_swap_handlers() {
    let _guard = registry_lock();
    let relay = Arc::new(AtomicUsize::new(0));
    let relay_sink = Arc::clone(&relay);
    // The first handler installs its replacement while a notification
    // is in flight; the registry must not deadlock on that.
    register_overflow_handler(move |_| {
        let sink = Arc::clone(&relay_sink);
        register_overflow_handler(move |_| {
            sink.fetch_add(1, Ordering::SeqCst);
        });
    });

    assert_eq!(i8::MAX.add_checked(1), i8::MIN);
    assert_eq!(relay.load(Ordering::SeqCst), 0);

    assert_eq!(i8::MAX.add_checked(1), i8::MIN);
    assert_eq!(relay.load(Ordering::SeqCst), 1);

    reset_overflow_handler();
}

#[test]
fn test_overflow_flag_pattern() {
    let _guard = registry_lock();
    let overflowed = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&overflowed);
    register_overflow_handler(move |_| {
        flag.store(true, Ordering::SeqCst);
    });

    let product = 100i8.mul_checked(10);
    assert_eq!(product, -24);
    assert!(overflowed.load(Ordering::SeqCst));

    reset_overflow_handler();
}

#[test]
#[should_panic(expected = "no overflow handler registered")]
fn test_reset_restores_fatal_default() {
    let _guard = registry_lock();
    register_overflow_handler(|_| {});
    reset_overflow_handler();
    let _ = i8::MAX.add_checked(1);
}
