//! Elementwise arithmetic over same-shaped float grids.
//!
//! These are the primitives the local-contrast filter is composed of.
//! The divide and square-root variants carry the numeric guards the
//! pipeline relies on: non-positive denominators and negative operands
//! produce 0 instead of propagating inf/NaN. The guards are policy, not
//! error paths.
use super::ImageF32;

#[inline]
fn zip_map(a: &ImageF32, b: &ImageF32, f: impl Fn(f32, f32) -> f32) -> ImageF32 {
    debug_assert_eq!((a.w, a.h), (b.w, b.h), "operand shapes must match");
    let mut out = ImageF32::new(a.w, a.h);
    for ((dst, &pa), &pb) in out.data.iter_mut().zip(&a.data).zip(&b.data) {
        *dst = f(pa, pb);
    }
    out
}

#[inline]
fn map(a: &ImageF32, f: impl Fn(f32) -> f32) -> ImageF32 {
    let mut out = ImageF32::new(a.w, a.h);
    for (dst, &pa) in out.data.iter_mut().zip(&a.data) {
        *dst = f(pa);
    }
    out
}

/// Per-pixel sum `a + b`.
pub fn add(a: &ImageF32, b: &ImageF32) -> ImageF32 {
    zip_map(a, b, |x, y| x + y)
}

/// Per-pixel difference `a - b`.
pub fn subtract(a: &ImageF32, b: &ImageF32) -> ImageF32 {
    zip_map(a, b, |x, y| x - y)
}

/// Per-pixel product `a * b`.
pub fn multiply(a: &ImageF32, b: &ImageF32) -> ImageF32 {
    zip_map(a, b, |x, y| x * y)
}

/// Per-pixel square `a * a`.
pub fn square(a: &ImageF32) -> ImageF32 {
    map(a, |x| x * x)
}

/// Per-pixel quotient `a / b`, with 0 wherever `b <= 0`.
pub fn divide_guarded(a: &ImageF32, b: &ImageF32) -> ImageF32 {
    zip_map(a, b, |x, y| if y > 0.0 { x / y } else { 0.0 })
}

/// Per-pixel square root, clamping negative operands to 0 first.
///
/// Floating-point roundoff can push a computed local variance slightly
/// below zero; the clamp keeps the root real.
pub fn sqrt_clamped(a: &ImageF32) -> ImageF32 {
    map(a, |x| x.max(0.0).sqrt())
}
