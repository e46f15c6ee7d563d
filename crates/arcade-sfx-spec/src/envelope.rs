//! Envelope types for sound descriptors.

use serde::{Deserialize, Serialize};

/// Shaper type tags accepted in descriptor JSON.
pub const SHAPER_TYPES: &[&str] = &["attack_ramp", "decay_ramp", "exp_decay"];

/// Envelope type tags accepted in descriptor JSON.
pub const ENVELOPE_TYPES: &[&str] = &["flat", "shape", "notes"];

/// A single gain curve, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", deny_unknown_fields)]
pub enum Shaper {
    /// Linear 0 → 1 over the first `fraction` of the span.
    AttackRamp {
        /// Attack length as a fraction of the span.
        fraction: f64,
    },
    /// Linear 1 → 0 from progress `start` to the end of the span.
    DecayRamp {
        /// Progress at which the fade begins.
        start: f64,
    },
    /// `exp(-rate · t)` over elapsed seconds.
    ExpDecay {
        /// Decay rate per second.
        rate: f64,
    },
}

/// One note of a multi-note envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Note {
    /// Note length in seconds.
    pub duration: f64,
    /// Note frequency in Hz.
    pub frequency: f64,
    /// Fade-in length as a fraction of the note.
    #[serde(default)]
    pub fade_in: f64,
    /// Fade-out length as a fraction of the note.
    #[serde(default)]
    pub fade_out: f64,
}

impl Note {
    /// Creates a note without fades.
    pub fn new(duration: f64, frequency: f64) -> Self {
        Self {
            duration,
            frequency,
            fade_in: 0.0,
            fade_out: 0.0,
        }
    }

    /// Sets the note-local fade fractions.
    pub fn fades(mut self, fade_in: f64, fade_out: f64) -> Self {
        self.fade_in = fade_in;
        self.fade_out = fade_out;
        self
    }
}

fn default_one() -> f64 {
    1.0
}

/// Buffer-level amplitude envelope, tagged by `type`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", deny_unknown_fields)]
pub enum EnvelopeSpec {
    /// Unity gain everywhere.
    #[default]
    Flat,
    /// Attack ramp, sustain level, and tail decay over the whole buffer.
    Shape {
        /// Attack length as a fraction of the buffer.
        attack: f64,
        /// Sustain level (0.0 to 1.0).
        #[serde(default = "default_one")]
        sustain: f64,
        /// Progress at which the linear tail decay begins (1.0 = none).
        #[serde(default = "default_one")]
        decay_start: f64,
        /// Optional exponential decay rate per second, multiplied in.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        exp_decay: Option<f64>,
    },
    /// Contiguous notes with local fades and a global trailing fade.
    Notes {
        /// Notes laid out back to back from the start of the buffer.
        notes: Vec<Note>,
        /// Progress at which the global fade to silence begins.
        #[serde(default = "default_one")]
        global_fade_start: f64,
    },
}

impl EnvelopeSpec {
    /// Creates a shape envelope with full sustain and no exponential decay.
    pub fn shape(attack: f64, decay_start: f64) -> Self {
        EnvelopeSpec::Shape {
            attack,
            sustain: 1.0,
            decay_start,
            exp_decay: None,
        }
    }

    /// Returns the `type` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            EnvelopeSpec::Flat => "flat",
            EnvelopeSpec::Shape { .. } => "shape",
            EnvelopeSpec::Notes { .. } => "notes",
        }
    }

    /// Returns the notes of a multi-note envelope.
    pub fn notes(&self) -> Option<&[Note]> {
        match self {
            EnvelopeSpec::Notes { notes, .. } => Some(notes),
            _ => None,
        }
    }
}
