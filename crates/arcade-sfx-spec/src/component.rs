//! Signal component types.
//!
//! A [`Component`] is one additive source in a sound: a [`Generator`] scaled by
//! a weight, optionally gated to a progress window and shaped by its own gain
//! curves. Components are summed, so their order never changes the result.

use serde::{Deserialize, Serialize};

use crate::envelope::Shaper;

/// Generator kind tags accepted in descriptor JSON.
pub const GENERATOR_KINDS: &[&str] = &[
    "white_noise",
    "decaying_noise",
    "sine",
    "square",
    "triangle",
];

/// Periodic waveform shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Waveform {
    /// Sine wave.
    Sine,
    /// Square wave, `sign((t·f) mod 1 - 0.5)`.
    Square,
    /// Triangle wave, piecewise linear over `(t·f) mod 1`.
    Triangle,
}

/// Sweep curve type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SweepCurve {
    /// Linear interpolation.
    #[default]
    Linear,
    /// Quadratic ease-in (`u²`).
    Quadratic,
    /// Exponential interpolation (constant ratio per unit progress).
    Exponential,
}

/// Frequency sweep parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FreqSweep {
    /// Frequency reached at the end of the sweep.
    pub end_freq: f64,
    /// Sweep curve type.
    #[serde(default)]
    pub curve: SweepCurve,
    /// Progress fraction at which `end_freq` is reached and then held.
    #[serde(default = "default_until")]
    pub until: f64,
}

fn default_until() -> f64 {
    1.0
}

impl FreqSweep {
    /// Creates a linear sweep over the whole buffer.
    pub fn linear(end_freq: f64) -> Self {
        Self {
            end_freq,
            curve: SweepCurve::Linear,
            until: 1.0,
        }
    }

    /// Stops the sweep at `until` and holds the end frequency afterwards.
    pub fn until(mut self, until: f64) -> Self {
        self.until = until;
        self
    }

    /// Sets the sweep curve.
    pub fn curve(mut self, curve: SweepCurve) -> Self {
        self.curve = curve;
        self
    }
}

/// Sinusoidal frequency modulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Vibrato {
    /// Modulation rate in Hz.
    pub rate: f64,
    /// Modulation depth as a fraction of the base frequency.
    pub depth: f64,
}

/// Oscillator parameters shared by all periodic generators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Tone {
    /// Base frequency in Hz, or a ratio of the note frequency when
    /// `relative_to_note` is set.
    pub frequency: f64,
    /// Optional frequency sweep.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sweep: Option<FreqSweep>,
    /// Optional vibrato.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vibrato: Option<Vibrato>,
    /// Follow the active note of a `notes` envelope.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub relative_to_note: bool,
}

impl Tone {
    /// Creates a fixed-frequency tone.
    pub fn fixed(frequency: f64) -> Self {
        Self {
            frequency,
            sweep: None,
            vibrato: None,
            relative_to_note: false,
        }
    }

    /// Creates a tone that sweeps from `start` to `end` over the whole buffer.
    pub fn swept(start: f64, end: f64) -> Self {
        Self::fixed(start).with_sweep(FreqSweep::linear(end))
    }

    /// Creates a tone pitched at `ratio` times the active note frequency.
    pub fn note_ratio(ratio: f64) -> Self {
        Self {
            relative_to_note: true,
            ..Self::fixed(ratio)
        }
    }

    /// Adds a frequency sweep.
    pub fn with_sweep(mut self, sweep: FreqSweep) -> Self {
        self.sweep = Some(sweep);
        self
    }

    /// Adds vibrato.
    pub fn with_vibrato(mut self, rate: f64, depth: f64) -> Self {
        self.vibrato = Some(Vibrato { rate, depth });
        self
    }
}

fn default_std_dev() -> f64 {
    1.0
}

/// Signal generator, tagged by `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Generator {
    /// Independent normal draws per sample.
    WhiteNoise {
        /// Standard deviation of the normal distribution.
        #[serde(default = "default_std_dev")]
        std_dev: f64,
    },
    /// White noise multiplied by `exp(-decay_rate · t)`.
    DecayingNoise {
        /// Standard deviation of the normal distribution.
        #[serde(default = "default_std_dev")]
        std_dev: f64,
        /// Exponential decay rate per second.
        decay_rate: f64,
    },
    /// Sine oscillator.
    Sine(Tone),
    /// Square oscillator.
    Square(Tone),
    /// Triangle oscillator.
    Triangle(Tone),
}

impl Generator {
    /// Returns the `kind` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Generator::WhiteNoise { .. } => "white_noise",
            Generator::DecayingNoise { .. } => "decaying_noise",
            Generator::Sine(_) => "sine",
            Generator::Square(_) => "square",
            Generator::Triangle(_) => "triangle",
        }
    }

    /// Returns true if this generator draws from the noise source.
    pub fn is_noise(&self) -> bool {
        matches!(self, Generator::WhiteNoise { .. } | Generator::DecayingNoise { .. })
    }
}

/// Progress range `[start, end)` during which a component contributes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ActiveWindow {
    /// Inclusive start, as a fraction of the buffer.
    pub start: f64,
    /// Exclusive end, as a fraction of the buffer.
    pub end: f64,
}

impl ActiveWindow {
    /// Returns true if `progress` lies inside the window.
    pub fn contains(&self, progress: f64) -> bool {
        progress >= self.start && progress < self.end
    }

    /// Maps buffer progress to window-local progress in `[0, 1)`.
    pub fn local(&self, progress: f64) -> f64 {
        let span = self.end - self.start;
        if span > 0.0 {
            (progress - self.start) / span
        } else {
            0.0
        }
    }
}

fn default_weight() -> f64 {
    1.0
}

/// One weighted signal source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Component {
    /// The signal generator.
    pub generator: Generator,
    /// Amplitude weight in the mix.
    #[serde(default = "default_weight")]
    pub weight: f64,
    /// Optional activation window; outside it the component is silent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window: Option<ActiveWindow>,
    /// Per-component gain shapers, multiplied together.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub shape: Vec<Shaper>,
}

impl Component {
    /// Creates a component with weight 1.0.
    pub fn new(generator: Generator) -> Self {
        Self {
            generator,
            weight: 1.0,
            window: None,
            shape: Vec::new(),
        }
    }

    /// White noise with the given standard deviation.
    pub fn white_noise(std_dev: f64) -> Self {
        Self::new(Generator::WhiteNoise { std_dev })
    }

    /// Exponentially decaying noise.
    pub fn decaying_noise(std_dev: f64, decay_rate: f64) -> Self {
        Self::new(Generator::DecayingNoise {
            std_dev,
            decay_rate,
        })
    }

    /// Sine oscillator.
    pub fn sine(tone: Tone) -> Self {
        Self::new(Generator::Sine(tone))
    }

    /// Square oscillator.
    pub fn square(tone: Tone) -> Self {
        Self::new(Generator::Square(tone))
    }

    /// Triangle oscillator.
    pub fn triangle(tone: Tone) -> Self {
        Self::new(Generator::Triangle(tone))
    }

    /// Sets the mix weight.
    pub fn weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// Restricts the component to `[start, end)` of the buffer.
    pub fn window(mut self, start: f64, end: f64) -> Self {
        self.window = Some(ActiveWindow { start, end });
        self
    }

    /// Adds a gain shaper.
    pub fn shaped(mut self, shaper: Shaper) -> Self {
        self.shape.push(shaper);
        self
    }
}
