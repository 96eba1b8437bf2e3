//! Redmean perceptual color distance.
//!
//! The redmean formula is a weighted Euclidean distance over 8-bit sRGB
//! values. The red and blue weights shift with the mean red level of the
//! pair, which tracks human sensitivity far better than plain Euclidean
//! distance while staying integer-friendly and cheap -- no color-space
//! conversion, two multiplies per channel.
//!
//! ```text
//! r_mean = (r1 + r2) / 2
//! d²     = (2 + r_mean/256)·Δr² + 4·Δg² + (2 + (255 - r_mean)/256)·Δb²
//! ```
//!
//! This is the single perceptual metric for the whole crate: the nearest-
//! color index, the lookup table build, and the palette-reduction planner
//! all rank candidates with it, so their answers are mutually consistent.

use super::Rgb;

/// Squared redmean distance between two colors.
///
/// Use this when only the *ordering* of distances matters (nearest-color
/// scans, min-pair selection) -- it avoids the square root. Zero iff the
/// colors are equal.
#[inline]
pub fn distance_squared(a: Rgb, b: Rgb) -> f64 {
    let r_mean = (a.r as f64 + b.r as f64) / 2.0;
    let dr = a.r as f64 - b.r as f64;
    let dg = a.g as f64 - b.g as f64;
    let db = a.b as f64 - b.b as f64;

    (2.0 + r_mean / 256.0) * dr * dr + 4.0 * dg * dg + (2.0 + (255.0 - r_mean) / 256.0) * db * db
}

/// Redmean distance between two colors.
///
/// Symmetric, non-negative, zero iff equal. Reported distances (merge
/// previews) use this form; comparison-only call sites should prefer
/// [`distance_squared`].
///
/// # Example
///
/// ```
/// use bead_quant::{color, Rgb};
///
/// let a = Rgb::new(255, 0, 0);
/// let b = Rgb::new(250, 10, 10);
/// assert!(color::distance(a, b) < color::distance(a, Rgb::new(0, 0, 255)));
/// ```
#[inline]
pub fn distance(a: Rgb, b: Rgb) -> f64 {
    distance_squared(a, b).sqrt()
}
