//! Post-mix processing: soft distortion, hard clipping, peak normalization.

use arcade_sfx_spec::OutputPolicy;

use crate::oscillator::sign;

/// Soft distortion `x·(1 + a·sign(x)·|x|)`, which reduces to `x + a·x²`.
///
/// The curve is asymmetric: positive samples grow and negative samples
/// shrink toward zero.
#[inline]
pub fn soft_distort(sample: f64, amount: f64) -> f64 {
    sample * (1.0 + amount * sign(sample) * sample.abs())
}

/// Applies soft distortion to a buffer.
pub fn soft_distort_buffer(samples: &mut [f64], amount: f64) {
    for sample in samples.iter_mut() {
        *sample = soft_distort(*sample, amount);
    }
}

/// Hard clips every sample to `±limit`.
pub fn hard_clip_buffer(samples: &mut [f64], limit: f64) {
    for sample in samples.iter_mut() {
        *sample = sample.clamp(-limit, limit);
    }
}

/// Peak absolute value of a buffer.
pub fn peak(samples: &[f64]) -> f64 {
    samples.iter().map(|s| s.abs()).fold(0.0_f64, f64::max)
}

/// Scales a buffer so its peak absolute value equals `target_peak`.
///
/// A silent buffer is left untouched.
pub fn normalize_peak(samples: &mut [f64], target_peak: f64) {
    let current_peak = peak(samples);
    if current_peak > 0.0 {
        let gain = target_peak / current_peak;
        for sample in samples.iter_mut() {
            *sample *= gain;
        }
    }
}

/// Applies an output policy in place.
pub fn apply_output_policy(samples: &mut [f64], policy: &OutputPolicy) {
    match *policy {
        OutputPolicy::Clip { limit } => hard_clip_buffer(samples, limit),
        OutputPolicy::Normalize { peak } => normalize_peak(samples, peak),
    }
}
