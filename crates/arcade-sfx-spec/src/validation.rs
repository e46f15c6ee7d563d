//! Descriptor validation.
//!
//! Validation runs before any sample is rendered; a descriptor that passes
//! here always synthesizes to a complete buffer.

use crate::component::{Component, Generator, Tone};
use crate::descriptor::SoundDescriptor;
use crate::envelope::{EnvelopeSpec, Note, Shaper};
use crate::error::{SpecError, SpecResult};
use crate::output::OutputPolicy;

/// Longest sound the engine will render.
pub const MAX_DURATION_SECONDS: f64 = 30.0;

fn finite(field: &str, value: f64) -> SpecResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SpecError::invalid(field, format!("must be finite, got {}", value)))
    }
}

fn positive(field: &str, value: f64) -> SpecResult<()> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(SpecError::invalid(field, format!("must be > 0, got {}", value)))
    }
}

fn non_negative(field: &str, value: f64) -> SpecResult<()> {
    finite(field, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(SpecError::invalid(field, format!("must be >= 0, got {}", value)))
    }
}

fn fraction(field: &str, value: f64) -> SpecResult<()> {
    finite(field, value)?;
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(SpecError::invalid(
            field,
            format!("must be within [0, 1], got {}", value),
        ))
    }
}

/// Validates a descriptor.
///
/// # Errors
/// [`SpecError::InvalidDescriptor`] naming the first offending field.
pub fn validate_descriptor(desc: &SoundDescriptor) -> SpecResult<()> {
    positive("duration_seconds", desc.duration_seconds)?;
    if desc.duration_seconds > MAX_DURATION_SECONDS {
        return Err(SpecError::invalid(
            "duration_seconds",
            format!(
                "must be <= {} seconds, got {}",
                MAX_DURATION_SECONDS, desc.duration_seconds
            ),
        ));
    }
    if desc.sample_rate == 0 {
        return Err(SpecError::invalid("sample_rate", "must be > 0 Hz"));
    }
    if desc.channels != 1 && desc.channels != 2 {
        return Err(SpecError::invalid(
            "channels",
            format!("must be 1 or 2, got {}", desc.channels),
        ));
    }

    let has_notes = matches!(desc.envelope, EnvelopeSpec::Notes { .. });
    for (i, component) in desc.components.iter().enumerate() {
        validate_component(component, &format!("components[{}]", i), has_notes)?;
    }

    validate_envelope(&desc.envelope)?;

    if let Some(amount) = desc.distortion {
        non_negative("distortion", amount)?;
    }

    match desc.output {
        OutputPolicy::Clip { limit } => {
            positive("output.limit", limit)?;
            fraction("output.limit", limit)?;
        }
        OutputPolicy::Normalize { peak } => {
            positive("output.peak", peak)?;
            fraction("output.peak", peak)?;
        }
    }

    Ok(())
}

fn validate_component(component: &Component, path: &str, has_notes: bool) -> SpecResult<()> {
    finite(&format!("{}.weight", path), component.weight)?;

    if let Some(window) = component.window {
        let field = format!("{}.window", path);
        fraction(&field, window.start)?;
        fraction(&field, window.end)?;
        if window.start >= window.end {
            return Err(SpecError::invalid(
                field,
                format!("start {} must be < end {}", window.start, window.end),
            ));
        }
    }

    for (j, shaper) in component.shape.iter().enumerate() {
        validate_shaper(shaper, &format!("{}.shape[{}]", path, j))?;
    }

    let gen_path = format!("{}.generator", path);
    match &component.generator {
        Generator::WhiteNoise { std_dev } => {
            non_negative(&format!("{}.std_dev", gen_path), *std_dev)?;
        }
        Generator::DecayingNoise {
            std_dev,
            decay_rate,
        } => {
            non_negative(&format!("{}.std_dev", gen_path), *std_dev)?;
            non_negative(&format!("{}.decay_rate", gen_path), *decay_rate)?;
        }
        Generator::Sine(tone) | Generator::Square(tone) | Generator::Triangle(tone) => {
            validate_tone(tone, &gen_path, has_notes)?;
        }
    }

    Ok(())
}

fn validate_tone(tone: &Tone, path: &str, has_notes: bool) -> SpecResult<()> {
    positive(&format!("{}.frequency", path), tone.frequency)?;
    if tone.relative_to_note && !has_notes {
        return Err(SpecError::invalid(
            format!("{}.relative_to_note", path),
            "requires a notes envelope",
        ));
    }
    if let Some(sweep) = &tone.sweep {
        positive(&format!("{}.sweep.end_freq", path), sweep.end_freq)?;
        let until = format!("{}.sweep.until", path);
        positive(&until, sweep.until)?;
        fraction(&until, sweep.until)?;
    }
    if let Some(vibrato) = &tone.vibrato {
        non_negative(&format!("{}.vibrato.rate", path), vibrato.rate)?;
        fraction(&format!("{}.vibrato.depth", path), vibrato.depth)?;
    }
    Ok(())
}

fn validate_shaper(shaper: &Shaper, path: &str) -> SpecResult<()> {
    match *shaper {
        Shaper::AttackRamp { fraction: f } => fraction(&format!("{}.fraction", path), f),
        Shaper::DecayRamp { start } => fraction(&format!("{}.start", path), start),
        Shaper::ExpDecay { rate } => non_negative(&format!("{}.rate", path), rate),
    }
}

fn validate_envelope(envelope: &EnvelopeSpec) -> SpecResult<()> {
    match envelope {
        EnvelopeSpec::Flat => Ok(()),
        EnvelopeSpec::Shape {
            attack,
            sustain,
            decay_start,
            exp_decay,
        } => {
            fraction("envelope.attack", *attack)?;
            fraction("envelope.sustain", *sustain)?;
            fraction("envelope.decay_start", *decay_start)?;
            if let Some(rate) = exp_decay {
                non_negative("envelope.exp_decay", *rate)?;
            }
            Ok(())
        }
        EnvelopeSpec::Notes {
            notes,
            global_fade_start,
        } => {
            if notes.is_empty() {
                return Err(SpecError::invalid(
                    "envelope.notes",
                    "must contain at least one note",
                ));
            }
            for (i, note) in notes.iter().enumerate() {
                validate_note(note, &format!("envelope.notes[{}]", i))?;
            }
            fraction("envelope.global_fade_start", *global_fade_start)
        }
    }
}

fn validate_note(note: &Note, path: &str) -> SpecResult<()> {
    positive(&format!("{}.duration", path), note.duration)?;
    positive(&format!("{}.frequency", path), note.frequency)?;
    fraction(&format!("{}.fade_in", path), note.fade_in)?;
    fraction(&format!("{}.fade_out", path), note.fade_out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::Component;

    fn tone_desc() -> SoundDescriptor {
        SoundDescriptor::builder(0.5)
            .component(Component::sine(Tone::fixed(440.0)))
            .build()
    }

    fn field_of(err: SpecError) -> String {
        match err {
            SpecError::InvalidDescriptor { field, .. } => field,
            other => panic!("expected InvalidDescriptor, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_descriptor() {
        assert!(validate_descriptor(&tone_desc()).is_ok());
    }

    #[test]
    fn test_rejects_non_positive_duration() {
        for duration in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let mut desc = tone_desc();
            desc.duration_seconds = duration;
            let err = validate_descriptor(&desc).unwrap_err();
            assert_eq!(field_of(err), "duration_seconds");
        }
    }

    #[test]
    fn test_rejects_too_long_duration() {
        let mut desc = tone_desc();
        desc.duration_seconds = 31.0;
        assert_eq!(field_of(validate_descriptor(&desc).unwrap_err()), "duration_seconds");
    }

    #[test]
    fn test_rejects_zero_sample_rate() {
        let mut desc = tone_desc();
        desc.sample_rate = 0;
        assert_eq!(field_of(validate_descriptor(&desc).unwrap_err()), "sample_rate");
    }

    #[test]
    fn test_rejects_bad_channel_count() {
        let mut desc = tone_desc();
        desc.channels = 6;
        assert_eq!(field_of(validate_descriptor(&desc).unwrap_err()), "channels");
    }

    #[test]
    fn test_accepts_sub_sample_duration() {
        let mut desc = tone_desc();
        desc.duration_seconds = 0.00001;
        assert!(validate_descriptor(&desc).is_ok());
        assert_eq!(desc.num_frames(), 0);
    }

    #[test]
    fn test_accepts_high_sample_rate() {
        let mut desc = tone_desc();
        desc.duration_seconds = 0.01;
        desc.sample_rate = 384_000;
        assert!(validate_descriptor(&desc).is_ok());
    }

    #[test]
    fn test_accepts_many_components() {
        let mut builder = SoundDescriptor::builder(0.1);
        for i in 0..64 {
            let tone = Tone::fixed(100.0 + i as f64);
            builder = builder.component(Component::sine(tone).weight(0.01));
        }
        assert!(validate_descriptor(&builder.build()).is_ok());
    }

    #[test]
    fn test_rejects_inverted_window() {
        let desc = SoundDescriptor::builder(0.5)
            .component(Component::white_noise(1.0).window(0.6, 0.2))
            .build();
        assert_eq!(field_of(validate_descriptor(&desc).unwrap_err()), "components[0].window");
    }

    #[test]
    fn test_rejects_relative_tone_without_notes() {
        let desc = SoundDescriptor::builder(0.5)
            .component(Component::square(Tone::note_ratio(1.0)))
            .build();
        assert_eq!(
            field_of(validate_descriptor(&desc).unwrap_err()),
            "components[0].generator.relative_to_note"
        );
    }

    #[test]
    fn test_rejects_empty_notes() {
        let desc = SoundDescriptor::builder(0.5)
            .envelope(EnvelopeSpec::Notes {
                notes: vec![],
                global_fade_start: 1.0,
            })
            .build();
        assert_eq!(field_of(validate_descriptor(&desc).unwrap_err()), "envelope.notes");
    }

    #[test]
    fn test_rejects_out_of_range_clip() {
        let desc = SoundDescriptor::builder(0.5).clip(1.5).build();
        assert_eq!(field_of(validate_descriptor(&desc).unwrap_err()), "output.limit");

        let desc = SoundDescriptor::builder(0.5).normalize(0.0).build();
        assert_eq!(field_of(validate_descriptor(&desc).unwrap_err()), "output.peak");
    }

    #[test]
    fn test_rejects_negative_distortion() {
        let desc = SoundDescriptor::builder(0.5).distortion(-0.5).build();
        assert_eq!(field_of(validate_descriptor(&desc).unwrap_err()), "distortion");
    }

    #[test]
    fn test_attack_fraction_bounds() {
        let desc = SoundDescriptor::builder(0.5)
            .envelope(EnvelopeSpec::shape(1.2, 1.0))
            .build();
        assert_eq!(field_of(validate_descriptor(&desc).unwrap_err()), "envelope.attack");
    }
}
