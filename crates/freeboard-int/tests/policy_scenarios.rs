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

//! End-to-end policy behavior through the public API. Tests that
//! register handlers serialize on [`REGISTRY_GUARD`] and restore the
//! fatal default before releasing it; tests that never touch the
//! registry run unguarded.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use freeboard_core::fault::{
    register_div_by_zero_handler, register_overflow_handler, reset_div_by_zero_handler,
    reset_overflow_handler,
};
use freeboard_int::signed::{I16, I32, I64, I8};
use rand::{Rng, SeedableRng, rngs::StdRng};

static REGISTRY_GUARD: Mutex<()> = Mutex::new(());

fn registry_lock() -> MutexGuard<'static, ()> {
    REGISTRY_GUARD
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

fn count_overflows() -> (MutexGuard<'static, ()>, Arc<AtomicUsize>) {
    let guard = registry_lock();
    let seen = Arc::new(AtomicUsize::new(0));
    let sink = Arc::clone(&seen);
    register_overflow_handler(move |_| {
        sink.fetch_add(1, Ordering::SeqCst);
    });
    (guard, seen)
}

#[test]
fn test_overflowing_product_with_flag_handler() {
    let _guard = registry_lock();
    let overflowed = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&overflowed);
    register_overflow_handler(move |_| {
        flag.store(true, Ordering::SeqCst);
    });

    let product = I8::new(100) * I8::new(10);
    assert_eq!(product, I8::new(-24));
    assert!(overflowed.load(Ordering::SeqCst));

    reset_overflow_handler();
}

#[test]
fn test_compound_multiply_reports_and_wraps() {
    let (_guard, seen) = count_overflows();

    let mut y = I8::new(10);
    y *= 100i8;
    assert_eq!(y, I8::new(-24));
    assert_eq!(seen.load(Ordering::SeqCst), 1);

    reset_overflow_handler();
}

#[test]
fn test_max_plus_one_notifies_exactly_once() {
    let (_guard, seen) = count_overflows();

    let sum = I8::MAX + I8::new(1);
    assert_eq!(sum, I8::MIN);
    assert_eq!(seen.load(Ordering::SeqCst), 1);

    reset_overflow_handler();
}

#[test]
fn test_division_by_zero_fallback_through_operators() {
    let _guard = registry_lock();
    let seen = Arc::new(AtomicUsize::new(0));
    let sink = Arc::clone(&seen);
    register_div_by_zero_handler(move |_| {
        sink.fetch_add(1, Ordering::SeqCst);
    });

    assert_eq!(I32::new(7) / I32::new(0), I32::new(-1));
    assert_eq!(I32::new(7) % I32::new(0), I32::new(7));
    assert_eq!(seen.load(Ordering::SeqCst), 2);

    reset_div_by_zero_handler();
}

#[test]
fn test_negating_min_reports_and_wraps() {
    let (_guard, seen) = count_overflows();

    assert_eq!(-I8::MIN, I8::MIN);
    assert_eq!(seen.load(Ordering::SeqCst), 1);

    reset_overflow_handler();
}

#[test]
fn test_min_divided_by_minus_one_reports_and_wraps() {
    let (_guard, seen) = count_overflows();

    assert_eq!(I16::MIN / I16::new(-1), I16::MIN);
    assert_eq!(I16::MIN % I16::new(-1), I16::new(0));
    assert_eq!(seen.load(Ordering::SeqCst), 2);

    reset_overflow_handler();
}

#[test]
fn test_checked_conversion_reports_out_of_range() {
    let (_guard, seen) = count_overflows();

    let converted = I8::convert_checked(255u8);
    assert_eq!(converted, I8::new(-1));
    assert_eq!(seen.load(Ordering::SeqCst), 1);

    let in_range = I8::convert_checked(100u8);
    assert_eq!(in_range, I8::new(100));
    assert_eq!(seen.load(Ordering::SeqCst), 1);

    reset_overflow_handler();
}

#[test]
fn test_shift_amount_faults_through_operators() {
    let (_guard, seen) = count_overflows();

    // Oversized amounts fall back to the masked shift after reporting.
    assert_eq!(I32::new(1) << 33, I32::new(2));
    assert_eq!(seen.load(Ordering::SeqCst), 1);

    // Negative amounts through the overflowing family pass the value
    // through unchanged.
    assert_eq!(I8::new(5).shl_overflowing(-1), I8::new(5));
    assert_eq!(seen.load(Ordering::SeqCst), 2);

    reset_overflow_handler();
}

#[test]
fn test_promotion_avoids_narrow_overflow() {
    let (_guard, seen) = count_overflows();

    let narrow = I8::new(100) + I8::new(100);
    assert_eq!(narrow, I8::new(-56));
    assert_eq!(seen.load(Ordering::SeqCst), 1);

    // The same operands promoted to i32 fit without a report.
    let promoted = I8::new(100) + I32::new(100);
    assert_eq!(promoted, I32::new(200));
    assert_eq!(seen.load(Ordering::SeqCst), 1);

    reset_overflow_handler();
}

#[test]
fn test_silent_families_never_notify() {
    let _guard = registry_lock();
    let seen = Arc::new(AtomicUsize::new(0));
    let overflow_sink = Arc::clone(&seen);
    let zero_sink = Arc::clone(&seen);
    register_overflow_handler(move |_| {
        overflow_sink.fetch_add(1, Ordering::SeqCst);
    });
    register_div_by_zero_handler(move |_| {
        zero_sink.fetch_add(1, Ordering::SeqCst);
    });

    assert_eq!(I8::MAX.add_wrapping(I8::new(1)), I8::MIN);
    assert_eq!(I8::MIN.neg_wrapping(), I8::MIN);
    assert_eq!(I64::MIN.mul_wrapping(I64::new(-1)), I64::MIN);
    assert_eq!(I8::MAX.add_saturating(I8::new(1)), I8::MAX);
    assert_eq!(I8::MIN.div_saturating(I8::new(-1)), I8::MAX);
    assert_eq!(I8::new(1).shl_wrapping(100), I8::new(16));
    assert_eq!(I8::MAX.try_add(I8::new(1)), None);
    assert_eq!(I8::new(1).try_div(I8::new(0)), None);
    assert_eq!(I8::MIN.try_neg(), None);
    assert_eq!(seen.load(Ordering::SeqCst), 0);

    reset_overflow_handler();
    reset_div_by_zero_handler();
}

#[test]
fn test_try_family_is_total_without_handlers() {
    // No registration, no guard: the try family neither panics nor
    // reports, whatever the operands.
    assert_eq!(I64::MAX.try_add(I64::new(1)), None);
    assert_eq!(I64::MIN.try_sub(I64::new(1)), None);
    assert_eq!(I64::MIN.try_mul(I64::new(-1)), None);
    assert_eq!(I64::new(1).try_div(I64::new(0)), None);
    assert_eq!(I64::MIN.try_div(I64::new(-1)), None);
    assert_eq!(I64::new(1).try_rem(I64::new(0)), None);
    assert_eq!(I64::MIN.try_neg(), None);
    assert_eq!(I64::new(1).try_shl(64), None);
    assert_eq!(I64::new(1).try_shr(-1), None);
    assert_eq!(I64::new(6).try_mul(I64::new(7)), Some(I64::new(42)));
}

#[test]
fn test_rotation_round_trip_randomized() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..1_000 {
        let v: i64 = rng.random();
        let n: u32 = rng.random_range(0..256);
        let x = I64::new(v);
        assert_eq!(x.rotate_left(n).rotate_right(n), x);
        assert_eq!(x.rotate_left(n).value(), v.rotate_left(n));
        assert_eq!(x.rotate_right(n).value(), v.rotate_right(n));
    }
}

#[test]
fn test_rotation_round_trip_randomized_narrow() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..1_000 {
        let v: i8 = rng.random();
        let n: u32 = rng.random_range(0..32);
        let x = I8::new(v);
        assert_eq!(x.rotate_left(n).rotate_right(n), x);
        assert_eq!(x.rotate_left(n).value(), v.rotate_left(n));
    }
}

#[test]
fn test_byte_codecs_randomized() {
    let mut rng = StdRng::seed_from_u64(1234);
    for _ in 0..1_000 {
        let v: i32 = rng.random();
        let x = I32::new(v);
        assert_eq!(I32::from_bytes_le(x.to_bytes_le()), x);
        assert_eq!(I32::from_bytes_be(x.to_bytes_be()), x);

        let mut le = x.to_bytes_le();
        le.reverse();
        assert_eq!(le, x.to_bytes_be());
    }
}

#[test]
fn test_byte_codecs_match_primitive() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..1_000 {
        let v: i64 = rng.random();
        assert_eq!(I64::new(v).to_bytes_le(), v.to_le_bytes());
        assert_eq!(I64::new(v).to_bytes_be(), v.to_be_bytes());
        assert_eq!(I64::from_bytes_le(v.to_le_bytes()).value(), v);
    }
}

#[test]
#[should_panic(expected = "no overflow handler registered")]
fn test_increment_past_max_is_fatal_by_default() {
    let _guard = registry_lock();
    let mut x = I64::MAX;
    x.increment();
}

#[test]
#[should_panic(expected = "no divide-by-zero handler registered")]
fn test_division_by_zero_is_fatal_by_default() {
    let _guard = registry_lock();
    let _ = I8::new(1) / I8::new(0);
}
