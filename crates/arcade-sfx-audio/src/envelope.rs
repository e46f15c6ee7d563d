//! Envelope shapers.
//!
//! Every shaper returns a gain in [0, 1]. Overlapping attack and decay spans
//! are simply multiplied together.

use arcade_sfx_spec::{EnvelopeSpec, Note, Shaper};

use crate::generator::{NoteContext, SampleContext};

/// Linear 0 → 1 over the first `fraction` of the span.
#[inline]
pub fn attack_ramp(progress: f64, fraction: f64) -> f64 {
    if fraction <= 0.0 {
        1.0
    } else {
        (progress / fraction).clamp(0.0, 1.0)
    }
}

/// Linear 1 → 0 from `start` to the end of the span.
#[inline]
pub fn decay_ramp(progress: f64, start: f64) -> f64 {
    if progress < start || start >= 1.0 {
        1.0
    } else {
        ((1.0 - progress) / (1.0 - start)).clamp(0.0, 1.0)
    }
}

/// `exp(-rate · time)`.
#[inline]
pub fn exp_decay(time: f64, rate: f64) -> f64 {
    (-rate * time).exp()
}

/// Gain of a single shaper at `progress` / `time` within its span.
pub fn shaper_gain(shaper: &Shaper, progress: f64, time: f64) -> f64 {
    match *shaper {
        Shaper::AttackRamp { fraction } => attack_ramp(progress, fraction),
        Shaper::DecayRamp { start } => decay_ramp(progress, start),
        Shaper::ExpDecay { rate } => exp_decay(time, rate),
    }
}

/// A note placed on the sample grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoteSpan {
    /// First frame of the note.
    pub start: usize,
    /// Frames in the note (after truncation to the buffer).
    pub len: usize,
    /// Frames the note would span untruncated.
    pub nominal_len: usize,
    /// Note frequency in Hz.
    pub frequency: f64,
    /// Fade-in fraction.
    pub fade_in: f64,
    /// Fade-out fraction.
    pub fade_out: f64,
}

impl NoteSpan {
    /// Note-local gain at `local_progress`.
    pub fn gain(&self, local_progress: f64) -> f64 {
        attack_ramp(local_progress, self.fade_in) * decay_ramp(local_progress, 1.0 - self.fade_out)
    }
}

/// Contiguous note layout; frames after the last note are silent.
#[derive(Debug, Clone, PartialEq)]
pub struct NoteLayout {
    spans: Vec<NoteSpan>,
    sample_rate: f64,
}

impl NoteLayout {
    /// Lays out `notes` back to back, truncating at `num_frames`.
    pub fn new(notes: &[Note], num_frames: usize, sample_rate: f64) -> Self {
        let mut spans = Vec::with_capacity(notes.len());
        let mut cursor = 0usize;
        for note in notes {
            if cursor >= num_frames {
                break;
            }
            let nominal_len = (note.duration * sample_rate).round() as usize;
            let len = nominal_len.min(num_frames - cursor);
            spans.push(NoteSpan {
                start: cursor,
                len,
                nominal_len,
                frequency: note.frequency,
                fade_in: note.fade_in,
                fade_out: note.fade_out,
            });
            cursor += len;
        }
        Self { spans, sample_rate }
    }

    /// The placed notes.
    pub fn spans(&self) -> &[NoteSpan] {
        &self.spans
    }

    /// Finds the note sounding at `index`.
    pub fn span_at(&self, index: usize) -> Option<&NoteSpan> {
        let pos = self.spans.partition_point(|s| s.start <= index);
        let span = self.spans.get(pos.checked_sub(1)?)?;
        (index < span.start + span.len).then_some(span)
    }

    /// Note context for `index`, or `None` in trailing silence.
    pub fn note_at(&self, index: usize) -> Option<NoteContext> {
        self.span_at(index).map(|span| {
            let local = index - span.start;
            NoteContext {
                frequency: span.frequency,
                local_time: local as f64 / self.sample_rate,
                local_progress: local as f64 / span.nominal_len.max(1) as f64,
            }
        })
    }
}

/// A buffer-level envelope prepared for a fixed frame count.
#[derive(Debug, Clone, PartialEq)]
pub enum EnvelopeCurve {
    /// Unity gain.
    Flat,
    /// Attack, sustain level, tail decay, optional exponential decay.
    Shape {
        /// Attack fraction.
        attack: f64,
        /// Sustain level.
        sustain: f64,
        /// Tail decay start.
        decay_start: f64,
        /// Exponential decay rate.
        exp_decay: Option<f64>,
    },
    /// Per-note fades times a global trailing fade.
    Notes {
        /// Note placement.
        layout: NoteLayout,
        /// Progress at which the global fade begins.
        global_fade_start: f64,
    },
}

impl EnvelopeCurve {
    /// Prepares `spec` for a buffer of `num_frames` frames.
    pub fn new(spec: &EnvelopeSpec, num_frames: usize, sample_rate: f64) -> Self {
        match spec {
            EnvelopeSpec::Flat => EnvelopeCurve::Flat,
            EnvelopeSpec::Shape {
                attack,
                sustain,
                decay_start,
                exp_decay,
            } => EnvelopeCurve::Shape {
                attack: *attack,
                sustain: *sustain,
                decay_start: *decay_start,
                exp_decay: *exp_decay,
            },
            EnvelopeSpec::Notes {
                notes,
                global_fade_start,
            } => EnvelopeCurve::Notes {
                layout: NoteLayout::new(notes, num_frames, sample_rate),
                global_fade_start: *global_fade_start,
            },
        }
    }

    /// Note context for `index`, if this is a note envelope.
    pub fn note_at(&self, index: usize) -> Option<NoteContext> {
        match self {
            EnvelopeCurve::Notes { layout, .. } => layout.note_at(index),
            _ => None,
        }
    }

    /// Gain at `ctx`.
    pub fn gain(&self, ctx: &SampleContext) -> f64 {
        let progress = ctx.progress();
        match self {
            EnvelopeCurve::Flat => 1.0,
            EnvelopeCurve::Shape {
                attack,
                sustain,
                decay_start,
                exp_decay,
            } => {
                let mut gain =
                    attack_ramp(progress, *attack) * sustain * decay_ramp(progress, *decay_start);
                if let Some(rate) = exp_decay {
                    gain *= self::exp_decay(ctx.time(), *rate);
                }
                gain
            }
            EnvelopeCurve::Notes {
                layout,
                global_fade_start,
            } => match layout.span_at(ctx.index) {
                Some(span) => {
                    let local = (ctx.index - span.start) as f64 / span.nominal_len.max(1) as f64;
                    span.gain(local) * decay_ramp(progress, *global_fade_start)
                }
                None => 0.0,
            },
        }
    }

    /// Renders the gain curve for every frame.
    pub fn render(&self, num_frames: usize, sample_rate: f64) -> Vec<f64> {
        (0..num_frames)
            .map(|i| self.gain(&SampleContext::new(i, num_frames, sample_rate)))
            .collect()
    }
}
