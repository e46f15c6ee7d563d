//! Sound descriptor type and builder.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::component::{Component, GENERATOR_KINDS};
use crate::envelope::{EnvelopeSpec, ENVELOPE_TYPES, SHAPER_TYPES};
use crate::error::{SpecError, SpecResult};
use crate::output::{OutputPolicy, OUTPUT_MODES};

/// Sample rate used by every built-in effect.
pub const DEFAULT_SAMPLE_RATE: u32 = 44100;

fn default_sample_rate() -> u32 {
    DEFAULT_SAMPLE_RATE
}

fn default_channels() -> u16 {
    1
}

/// Declarative description of one sound effect.
///
/// A descriptor is built once per effect, handed to the synthesizer, and
/// discarded. It carries no random state; noise is injected at synthesis time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SoundDescriptor {
    /// Duration in seconds.
    pub duration_seconds: f64,
    /// Sample rate in Hz.
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,
    /// Channel count (1 = mono, 2 = stereo duplicate of the mono signal).
    #[serde(default = "default_channels")]
    pub channels: u16,
    /// Additive signal components.
    pub components: Vec<Component>,
    /// Buffer-level amplitude envelope.
    #[serde(default)]
    pub envelope: EnvelopeSpec,
    /// Soft distortion amount `a` in `x·(1 + a·sign(x)·|x|)`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distortion: Option<f64>,
    /// Final level policy.
    #[serde(default)]
    pub output: OutputPolicy,
}

impl SoundDescriptor {
    /// Creates a new descriptor builder.
    pub fn builder(duration_seconds: f64) -> SoundDescriptorBuilder {
        SoundDescriptorBuilder::new(duration_seconds)
    }

    /// Parses a descriptor from JSON.
    ///
    /// Kind tags are checked before typed deserialization so that an unknown
    /// generator or envelope is reported as [`SpecError::UnsupportedComponent`]
    /// rather than a generic JSON error.
    pub fn from_json(json: &str) -> SpecResult<Self> {
        Self::from_value(serde_json::from_str(json)?)
    }

    /// Converts an already-parsed JSON value, with the same kind checks as
    /// [`SoundDescriptor::from_json`].
    pub fn from_value(value: Value) -> SpecResult<Self> {
        check_kind_tags(&value)?;
        Ok(serde_json::from_value(value)?)
    }

    /// Serializes the descriptor to pretty JSON.
    pub fn to_json_pretty(&self) -> SpecResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Number of sample frames, `round(duration × sample_rate)`.
    pub fn num_frames(&self) -> usize {
        let frames = (self.duration_seconds * self.sample_rate as f64).round();
        if frames.is_finite() && frames > 0.0 {
            frames as usize
        } else {
            0
        }
    }

    /// Number of interleaved samples, frames × channels.
    pub fn num_samples(&self) -> usize {
        self.num_frames() * self.channels as usize
    }

    /// Returns true if the descriptor produces stereo output.
    pub fn is_stereo(&self) -> bool {
        self.channels == 2
    }
}

fn check_tag(value: &Value, key: &str, known: &[&str], path: &str) -> SpecResult<()> {
    match value.get(key).and_then(Value::as_str) {
        Some(tag) if !known.contains(&tag) => Err(SpecError::unsupported(tag, path)),
        _ => Ok(()),
    }
}

fn check_kind_tags(value: &Value) -> SpecResult<()> {
    if let Some(components) = value.get("components").and_then(Value::as_array) {
        for (i, component) in components.iter().enumerate() {
            if let Some(generator) = component.get("generator") {
                check_tag(
                    generator,
                    "kind",
                    GENERATOR_KINDS,
                    &format!("components[{}].generator", i),
                )?;
            }
            if let Some(shapers) = component.get("shape").and_then(Value::as_array) {
                for (j, shaper) in shapers.iter().enumerate() {
                    check_tag(
                        shaper,
                        "type",
                        SHAPER_TYPES,
                        &format!("components[{}].shape[{}]", i, j),
                    )?;
                }
            }
        }
    }
    if let Some(envelope) = value.get("envelope") {
        check_tag(envelope, "type", ENVELOPE_TYPES, "envelope")?;
    }
    if let Some(output) = value.get("output") {
        check_tag(output, "mode", OUTPUT_MODES, "output")?;
    }
    Ok(())
}

/// Builder for [`SoundDescriptor`].
#[derive(Debug, Clone)]
pub struct SoundDescriptorBuilder {
    duration_seconds: f64,
    sample_rate: u32,
    channels: u16,
    components: Vec<Component>,
    envelope: EnvelopeSpec,
    distortion: Option<f64>,
    output: OutputPolicy,
}

impl SoundDescriptorBuilder {
    /// Creates a builder for a mono 44.1 kHz sound.
    pub fn new(duration_seconds: f64) -> Self {
        Self {
            duration_seconds,
            sample_rate: DEFAULT_SAMPLE_RATE,
            channels: 1,
            components: Vec::new(),
            envelope: EnvelopeSpec::Flat,
            distortion: None,
            output: OutputPolicy::default(),
        }
    }

    /// Sets the sample rate.
    pub fn sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    /// Sets the channel count.
    pub fn channels(mut self, channels: u16) -> Self {
        self.channels = channels;
        self
    }

    /// Switches to a stereo container with duplicated mono content.
    pub fn stereo(self) -> Self {
        self.channels(2)
    }

    /// Adds a component.
    pub fn component(mut self, component: Component) -> Self {
        self.components.push(component);
        self
    }

    /// Sets the envelope.
    pub fn envelope(mut self, envelope: EnvelopeSpec) -> Self {
        self.envelope = envelope;
        self
    }

    /// Sets the soft distortion amount.
    pub fn distortion(mut self, amount: f64) -> Self {
        self.distortion = Some(amount);
        self
    }

    /// Hard clips the output to `±limit`.
    pub fn clip(mut self, limit: f64) -> Self {
        self.output = OutputPolicy::Clip { limit };
        self
    }

    /// Normalizes the output peak to `peak`.
    pub fn normalize(mut self, peak: f64) -> Self {
        self.output = OutputPolicy::Normalize { peak };
        self
    }

    /// Builds the descriptor.
    pub fn build(self) -> SoundDescriptor {
        SoundDescriptor {
            duration_seconds: self.duration_seconds,
            sample_rate: self.sample_rate,
            channels: self.channels,
            components: self.components,
            envelope: self.envelope,
            distortion: self.distortion,
            output: self.output,
        }
    }
}
