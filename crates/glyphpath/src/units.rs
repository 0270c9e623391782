//! Fixed-point font units to floating point device space.
//!
//! Outline coordinates, kerning values and advance widths arrive from the
//! glyph source already multiplied by the font scale, which carries 64
//! sub-units per pixel (26.6 fixed point). Everything in this module turns
//! those integers into `f64` pixels.

use crate::{outline::OutlinePoint, path::Point};

/// Device resolution used when none is requested.
pub const DEFAULT_DPI: u32 = 92;

/// Fixed-point scale for a point size at a device resolution: pixels per em
/// times 64, truncated.
pub fn ttscale(point_size: f32, dpi: u32) -> i32 {
    (point_size as f64 * dpi as f64 * 64.0 / 72.0) as i32
}

/// Converts a scaled font unit value into device units.
///
/// Integer division truncates toward zero, so quotient and remainder always
/// recombine to `v / 64` exactly, negative values included.
pub fn funits_to_f64(v: i32) -> f64 {
    let scaled = i64::from(v) * 4;
    (scaled / 256) as f64 + (scaled % 256) as f64 / 256.0
}

/// Maps an outline point (Y up) to device space (Y down) translated by `(dx, dy)`.
pub fn point_to_device(p: OutlinePoint, dx: f64, dy: f64) -> Point {
    Point::new(funits_to_f64(p.x) + dx, -funits_to_f64(p.y) + dy)
}

/// Scales a raw font unit value by `scale / units_per_em`, rounding half away
/// from zero.
pub fn scale_funits(v: i32, scale: i32, units_per_em: u16) -> i32 {
    let upem = i64::from(units_per_em.max(1));
    let mut x = i64::from(v) * i64::from(scale);
    if x >= 0 {
        x += upem / 2;
    } else {
        x -= upem / 2;
    }
    (x / upem) as i32
}
