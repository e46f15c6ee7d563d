//! Waveform primitives.
//!
//! Every waveform is evaluated directly from `t·f` (cycles elapsed), so a
//! sample depends only on its own time and frequency.

use arcade_sfx_spec::Waveform;

/// 2π.
pub const TWO_PI: f64 = std::f64::consts::TAU;

/// Sign function with `sign(0) = 0`.
#[inline]
pub fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Sine at `cycles` elapsed.
#[inline]
pub fn sine(cycles: f64) -> f64 {
    (TWO_PI * cycles).sin()
}

/// Square at `cycles` elapsed: `sign((cycles mod 1) - 0.5)`.
#[inline]
pub fn square(cycles: f64) -> f64 {
    sign(cycles.rem_euclid(1.0) - 0.5)
}

/// Triangle at `cycles` elapsed: `2·|2·(cycles mod 1) - 1| - 1`.
///
/// Starts at +1, reaches -1 at half a cycle.
#[inline]
pub fn triangle(cycles: f64) -> f64 {
    2.0 * (2.0 * cycles.rem_euclid(1.0) - 1.0).abs() - 1.0
}

/// Evaluates `waveform` at `cycles` elapsed.
#[inline]
pub fn evaluate(waveform: Waveform, cycles: f64) -> f64 {
    match waveform {
        Waveform::Sine => sine(cycles),
        Waveform::Square => square(cycles),
        Waveform::Triangle => triangle(cycles),
    }
}
