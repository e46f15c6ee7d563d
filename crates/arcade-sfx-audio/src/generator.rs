//! Signal generators.
//!
//! A generator maps a sample position to a raw amplitude. Oscillators stay
//! within [-1, 1]; noise generators return scaled normal draws and are only
//! bounded by the final clip or normalization.

use arcade_sfx_spec::{FreqSweep, Generator, SweepCurve, Tone, Waveform};

use crate::oscillator::{self, TWO_PI};
use crate::rng::NoiseSource;

/// The note sounding at a sample, for multi-note envelopes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoteContext {
    /// Note frequency in Hz.
    pub frequency: f64,
    /// Seconds since the note started.
    pub local_time: f64,
    /// Fraction of the note elapsed, in [0, 1).
    pub local_progress: f64,
}

/// Position of one sample within the buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleContext {
    /// Sample index `i`.
    pub index: usize,
    /// Total frame count `N`.
    pub num_frames: usize,
    /// Sample rate in Hz.
    pub sample_rate: f64,
    /// Active note, if the envelope is note based.
    pub note: Option<NoteContext>,
}

impl SampleContext {
    /// Creates a context with no active note.
    pub fn new(index: usize, num_frames: usize, sample_rate: f64) -> Self {
        Self {
            index,
            num_frames,
            sample_rate,
            note: None,
        }
    }

    /// Elapsed time `i / sample_rate` in seconds.
    pub fn time(&self) -> f64 {
        self.index as f64 / self.sample_rate
    }

    /// Progress fraction `i / N`.
    pub fn progress(&self) -> f64 {
        if self.num_frames == 0 {
            0.0
        } else {
            self.index as f64 / self.num_frames as f64
        }
    }
}

/// Interpolates between `start` and `end` at progress `t` in [0, 1].
pub fn interpolate(curve: SweepCurve, start: f64, end: f64, t: f64) -> f64 {
    match curve {
        SweepCurve::Linear => start + (end - start) * t,
        SweepCurve::Quadratic => start + (end - start) * t * t,
        SweepCurve::Exponential => {
            if start <= 0.0 || end <= 0.0 {
                // Fall back to linear for non-positive values
                start + (end - start) * t
            } else {
                start * (end / start).powf(t)
            }
        }
    }
}

/// Frequency of a swept tone at `progress`, holding `end` after `sweep.until`.
pub fn sweep_frequency(start: f64, end: f64, sweep: &FreqSweep, progress: f64) -> f64 {
    let t = if sweep.until > 0.0 {
        (progress / sweep.until).clamp(0.0, 1.0)
    } else {
        1.0
    };
    interpolate(sweep.curve, start, end, t)
}

/// Common trait for signal generators.
pub trait SignalGenerator {
    /// Returns the raw amplitude at `ctx`.
    fn sample<N: NoiseSource>(&self, ctx: &SampleContext, noise: &mut N) -> f64;

    /// Renders `num_frames` samples with no note context.
    fn render<N: NoiseSource>(&self, num_frames: usize, sample_rate: f64, noise: &mut N) -> Vec<f64> {
        (0..num_frames)
            .map(|i| self.sample(&SampleContext::new(i, num_frames, sample_rate), noise))
            .collect()
    }
}

/// Evaluates an oscillator tone.
///
/// Tones relative to a note are silent when no note is active.
pub fn tone_sample(waveform: Waveform, tone: &Tone, ctx: &SampleContext) -> f64 {
    let (scale, t, progress) = if tone.relative_to_note {
        match ctx.note {
            Some(note) => (note.frequency, note.local_time, note.local_progress),
            None => return 0.0,
        }
    } else {
        (1.0, ctx.time(), ctx.progress())
    };

    let start = tone.frequency * scale;
    let mut freq = match &tone.sweep {
        Some(sweep) => sweep_frequency(start, sweep.end_freq * scale, sweep, progress),
        None => start,
    };
    if let Some(vibrato) = &tone.vibrato {
        freq *= 1.0 + vibrato.depth * (TWO_PI * vibrato.rate * t).sin();
    }

    oscillator::evaluate(waveform, t * freq)
}

impl SignalGenerator for Generator {
    fn sample<N: NoiseSource>(&self, ctx: &SampleContext, noise: &mut N) -> f64 {
        match self {
            Generator::WhiteNoise { std_dev } => std_dev * noise.next_gaussian(),
            Generator::DecayingNoise {
                std_dev,
                decay_rate,
            } => std_dev * noise.next_gaussian() * (-decay_rate * ctx.time()).exp(),
            Generator::Sine(tone) => tone_sample(Waveform::Sine, tone, ctx),
            Generator::Square(tone) => tone_sample(Waveform::Square, tone, ctx),
            Generator::Triangle(tone) => tone_sample(Waveform::Triangle, tone, ctx),
        }
    }
}
