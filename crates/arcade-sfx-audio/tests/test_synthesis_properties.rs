//! Property tests for the synthesis pipeline.

use arcade_sfx_audio::compose::component_sample;
use arcade_sfx_audio::generator::SampleContext;
use arcade_sfx_audio::{render_mono, synthesize, synthesize_seeded, SilentNoise};
use arcade_sfx_spec::{
    Component, EnvelopeSpec, Note, Preset, Shaper, SoundDescriptor, SpecError, Tone,
};

fn rms(samples: &[i16]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum: f64 = samples.iter().map(|&s| (s as f64) * (s as f64)).sum();
    (sum / samples.len() as f64).sqrt()
}

fn mixed_descriptor(duration: f64, sample_rate: u32, channels: u16) -> SoundDescriptor {
    SoundDescriptor::builder(duration)
        .sample_rate(sample_rate)
        .channels(channels)
        .component(Component::square(Tone::swept(900.0, 300.0)).weight(0.6))
        .component(Component::white_noise(1.0).weight(0.3))
        .component(Component::triangle(Tone::fixed(220.0).with_vibrato(5.0, 0.05)).weight(0.4))
        .envelope(EnvelopeSpec::shape(0.1, 0.6))
        .build()
}

// ============================================================================
// Length and Range
// ============================================================================

#[test]
fn test_length_matches_frames_times_channels() {
    let cases = [
        (0.15, 44100, 1),
        (0.4, 44100, 2),
        (1.0, 22050, 1),
        (0.0333, 48000, 2),
        (0.01, 8000, 1),
    ];
    for (duration, rate, channels) in cases {
        let desc = mixed_descriptor(duration, rate, channels);
        let expected = (duration * rate as f64).round() as usize * channels as usize;
        let pcm = synthesize_seeded(&desc, 7).unwrap();
        assert_eq!(pcm.len(), expected, "duration {duration} rate {rate}");
        assert_eq!(pcm.len(), desc.num_samples());
    }
}

#[test]
fn test_presets_have_expected_lengths() {
    let expected = [
        (Preset::Explosion, 17640),
        (Preset::GameStart, 88200),
        (Preset::EnemyDeath, 35280),
        (Preset::GameOver, 66150),
        (Preset::Shoot, 6615),
    ];
    for (preset, samples) in expected {
        let pcm = synthesize_seeded(&preset.descriptor(), 1).unwrap();
        assert_eq!(pcm.len(), samples, "{preset}");
    }
}

#[test]
fn test_sub_sample_duration_renders_empty() {
    let desc = SoundDescriptor::builder(0.00001)
        .component(Component::sine(Tone::fixed(440.0)))
        .build();
    let pcm = synthesize(&desc, &mut SilentNoise).unwrap();
    assert!(pcm.is_empty());
    assert_eq!(pcm.num_frames(), 0);
}

#[test]
fn test_high_sample_rate_and_many_components() {
    let mut builder = SoundDescriptor::builder(0.01).sample_rate(384_000);
    for i in 0..40 {
        let tone = Tone::fixed(200.0 + 10.0 * i as f64);
        builder = builder.component(Component::triangle(tone).weight(0.02));
    }
    let pcm = synthesize(&builder.build(), &mut SilentNoise).unwrap();
    assert_eq!(pcm.len(), 3840);
    assert_eq!(pcm.sample_rate(), 384_000);
}

#[test]
fn test_loud_mix_stays_in_range() {
    // Heavy overdrive that must be clamped, not wrapped
    let desc = SoundDescriptor::builder(0.1)
        .component(Component::white_noise(4.0).weight(3.0))
        .component(Component::square(Tone::fixed(100.0)).weight(2.0))
        .distortion(3.0)
        .clip(1.0)
        .build();
    let pcm = synthesize_seeded(&desc, 99).unwrap();
    assert!(pcm.peak() <= 32767);
    assert!(pcm.samples().iter().any(|&s| s == 32767 || s == -32767));
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn test_zero_noise_stub_is_byte_identical() {
    for preset in Preset::all() {
        let desc = preset.descriptor();
        let a = synthesize(&desc, &mut SilentNoise).unwrap();
        let b = synthesize(&desc, &mut SilentNoise).unwrap();
        assert_eq!(a.to_le_bytes(), b.to_le_bytes(), "{preset}");
    }
}

#[test]
fn test_seeded_noise_is_reproducible() {
    let desc = Preset::Explosion.descriptor();
    let a = synthesize_seeded(&desc, 42).unwrap();
    let b = synthesize_seeded(&desc, 42).unwrap();
    let c = synthesize_seeded(&desc, 43).unwrap();
    assert_eq!(a.pcm_hash(), b.pcm_hash());
    assert_ne!(a.pcm_hash(), c.pcm_hash());
}

#[test]
fn test_oscillator_only_ignores_seed() {
    let desc = SoundDescriptor::builder(0.05)
        .component(Component::sine(Tone::fixed(440.0)))
        .build();
    let a = synthesize_seeded(&desc, 1).unwrap();
    let b = synthesize_seeded(&desc, 2).unwrap();
    assert_eq!(a, b);
}

// ============================================================================
// Envelopes
// ============================================================================

#[test]
fn test_attack_only_component_starts_silent() {
    let attack = 0.25;
    let shaped = Component::square(Tone::fixed(441.0)).shaped(Shaper::AttackRamp { fraction: attack });
    let raw = Component::square(Tone::fixed(441.0));
    let num_frames = 4410;

    let first = SampleContext::new(0, num_frames, 44100.0);
    assert_eq!(component_sample(&shaped, &first, &mut SilentNoise), 0.0);

    // Full gain from the attack boundary onward
    let boundary = (attack * num_frames as f64).ceil() as usize;
    for i in boundary..num_frames {
        let ctx = SampleContext::new(i, num_frames, 44100.0);
        assert_eq!(
            component_sample(&shaped, &ctx, &mut SilentNoise),
            component_sample(&raw, &ctx, &mut SilentNoise),
            "index {i}"
        );
    }
}

#[test]
fn test_attack_envelope_first_sample_is_zero() {
    let desc = SoundDescriptor::builder(0.1)
        .component(Component::square(Tone::fixed(441.0)))
        .envelope(EnvelopeSpec::shape(0.2, 1.0))
        .clip(1.0)
        .build();
    let signal = render_mono(&desc, &mut SilentNoise).unwrap();
    assert_eq!(signal[0], 0.0);
    // Past the attack the square sits at full scale
    assert!(signal[1000..].iter().all(|s| s.abs() == 1.0 || *s == 0.0));
}

#[test]
fn test_exp_decay_envelope_falls() {
    let desc = SoundDescriptor::builder(0.5)
        .component(Component::square(Tone::fixed(100.0)))
        .envelope(EnvelopeSpec::Shape {
            attack: 0.0,
            sustain: 1.0,
            decay_start: 1.0,
            exp_decay: Some(10.0),
        })
        .clip(1.0)
        .build();
    let pcm = synthesize(&desc, &mut SilentNoise).unwrap();
    let head = rms(&pcm.samples()[..2205]);
    let tail = rms(&pcm.samples()[pcm.len() - 2205..]);
    assert!(tail < head * 0.05, "head {head} tail {tail}");
}

// ============================================================================
// Output Policies
// ============================================================================

#[test]
fn test_normalization_reaches_full_scale() {
    let pcm = synthesize_seeded(&Preset::EnemyDeath.descriptor(), 42).unwrap();
    let peak = pcm.peak() as f64 / 32767.0;
    assert!((peak - 1.0).abs() <= 1.0 / 32767.0, "peak {peak}");
}

#[test]
fn test_normalization_of_quiet_signal() {
    let desc = SoundDescriptor::builder(0.05)
        .component(Component::sine(Tone::fixed(441.0)).weight(0.01))
        .normalize(0.5)
        .build();
    let pcm = synthesize(&desc, &mut SilentNoise).unwrap();
    assert!((pcm.peak() as i32 - 16384).abs() <= 1);
}

#[test]
fn test_clip_policy_bounds_samples() {
    let desc = SoundDescriptor::builder(0.05)
        .component(Component::white_noise(1.0).weight(2.0))
        .clip(0.9)
        .build();
    let pcm = synthesize_seeded(&desc, 3).unwrap();
    assert_eq!(pcm.peak(), 29490);
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_shoot_scenario() {
    let desc = Preset::Shoot.descriptor();
    let pcm = synthesize_seeded(&desc, 42).unwrap();

    assert_eq!(pcm.len(), 6615);
    assert_eq!(pcm.channels(), 1);
    assert!(pcm.samples()[0].unsigned_abs() <= 1);
    assert!(pcm.peak() <= 29490);
}

#[test]
fn test_game_over_scenario() {
    let desc = Preset::GameOver.descriptor();
    let pcm = synthesize_seeded(&desc, 42).unwrap();
    assert_eq!(pcm.len(), 66150);

    let window = (0.45 * 44100.0) as usize;
    assert!(rms(&pcm.samples()[..window]) > 0.0);
    // Six 0.2s notes end at 1.2s; the rest is silence
    assert!(pcm.samples()[52920..].iter().all(|&s| s == 0));
}

#[test]
fn test_game_over_global_fade_attenuates_last_note() {
    let faded = Preset::GameOver.descriptor();
    let mut unfaded = faded.clone();
    if let EnvelopeSpec::Notes {
        global_fade_start, ..
    } = &mut unfaded.envelope
    {
        *global_fade_start = 1.0;
    }

    let a = render_mono(&faded, &mut SilentNoise).unwrap();
    let b = render_mono(&unfaded, &mut SilentNoise).unwrap();

    // Sixth note spans 1.0s..1.2s, inside the fade region
    let note = 44100..52920;
    let energy = |s: &[f64]| s.iter().map(|x| x * x).sum::<f64>();
    assert!(energy(&a[note.clone()]) < energy(&b[note]));
    // First note precedes the fade
    assert_eq!(a[..8820], b[..8820]);
}

#[test]
fn test_notes_envelope_silent_after_last_note() {
    let desc = SoundDescriptor::builder(0.5)
        .component(Component::square(Tone::note_ratio(1.0)))
        .envelope(EnvelopeSpec::Notes {
            notes: vec![Note::new(0.1, 440.0), Note::new(0.1, 220.0)],
            global_fade_start: 1.0,
        })
        .build();
    let pcm = synthesize(&desc, &mut SilentNoise).unwrap();
    assert_eq!(pcm.len(), 22050);
    assert!(pcm.samples()[8820..].iter().all(|&s| s == 0));
    assert!(pcm.samples()[..8820].iter().any(|&s| s != 0));
}

#[test]
fn test_stereo_channels_identical() {
    for preset in [Preset::GameStart, Preset::EnemyDeath] {
        let pcm = synthesize_seeded(&preset.descriptor(), 5).unwrap();
        assert!(pcm.is_stereo());
        for frame in pcm.frames() {
            assert_eq!(frame[0], frame[1]);
        }
    }
}

// ============================================================================
// Failure Modes
// ============================================================================

#[test]
fn test_invalid_descriptor_produces_nothing() {
    let mut desc = Preset::Shoot.descriptor();
    desc.duration_seconds = -1.0;
    let err = synthesize(&desc, &mut SilentNoise).unwrap_err();
    assert!(err.is_descriptor_error());
    assert_eq!(err.code(), "SFX_001");
}

#[test]
fn test_unsupported_kind_rejected_at_load() {
    let json = r#"{
        "duration_seconds": 0.2,
        "components": [{ "generator": { "kind": "sawtooth", "frequency": 440 } }]
    }"#;
    let err = SoundDescriptor::from_json(json).unwrap_err();
    assert!(matches!(err, SpecError::UnsupportedComponent { ref kind, .. } if kind == "sawtooth"));
}

#[test]
fn test_json_descriptor_synthesizes() {
    let json = r#"{
        "duration_seconds": 0.1,
        "sample_rate": 22050,
        "channels": 2,
        "components": [
            { "generator": { "kind": "sine", "frequency": 330, "sweep": { "end_freq": 110, "curve": "exponential" } }, "weight": 0.5 },
            { "generator": { "kind": "white_noise" }, "weight": 0.1, "window": { "start": 0.0, "end": 0.3 } }
        ],
        "envelope": { "type": "shape", "attack": 0.05, "decay_start": 0.5 },
        "output": { "mode": "normalize" }
    }"#;
    let desc = SoundDescriptor::from_json(json).unwrap();
    let pcm = synthesize_seeded(&desc, 11).unwrap();
    assert_eq!(pcm.len(), 2205 * 2);
    assert_eq!(pcm.sample_rate(), 22050);
    assert!(pcm.peak() >= 32766);
}
