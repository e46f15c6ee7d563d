//! Built-in arcade sound effects.
//!
//! Each preset is plain descriptor data; new effects are added here (or as
//! JSON files) without touching the synthesis engine.

use std::fmt;
use std::str::FromStr;

use crate::component::{Component, FreqSweep, Tone};
use crate::descriptor::SoundDescriptor;
use crate::envelope::{EnvelopeSpec, Note, Shaper};

/// Descending base frequencies of the game over jingle.
pub const GAME_OVER_NOTES: [f64; 6] = [400.0, 350.0, 300.0, 250.0, 200.0, 150.0];

/// The five built-in effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    /// Noise burst with a low rumble and a debris tail.
    Explosion,
    /// Rising tone with fade-in and fade-out.
    GameStart,
    /// Distorted noise, impact, crunch, and boom, peak normalized.
    EnemyDeath,
    /// Six descending square/triangle notes with vibrato.
    GameOver,
    /// Falling square with a sub-harmonic and a noise click.
    Shoot,
}

impl Preset {
    /// All presets in a stable order.
    pub fn all() -> &'static [Preset] {
        &[
            Preset::Explosion,
            Preset::GameStart,
            Preset::EnemyDeath,
            Preset::GameOver,
            Preset::Shoot,
        ]
    }

    /// Returns the preset name.
    pub fn name(&self) -> &'static str {
        match self {
            Preset::Explosion => "explosion",
            Preset::GameStart => "game_start",
            Preset::EnemyDeath => "enemy_death",
            Preset::GameOver => "game_over",
            Preset::Shoot => "shoot",
        }
    }

    /// Looks up a preset by name. Dashes are accepted in place of underscores.
    pub fn from_name(name: &str) -> Option<Preset> {
        let normalized = name.trim().to_ascii_lowercase().replace('-', "_");
        Preset::all()
            .iter()
            .copied()
            .find(|p| p.name() == normalized)
    }

    /// Default output file name (`<name>.wav`).
    pub fn file_name(&self) -> String {
        format!("{}.wav", self.name())
    }

    /// Short human-readable summary.
    pub fn summary(&self) -> &'static str {
        match self {
            Preset::Explosion => "noise + rumble + debris, 0.4s mono",
            Preset::GameStart => "rising tone with fades, 1.0s stereo",
            Preset::EnemyDeath => "distorted impact, normalized, 0.4s stereo",
            Preset::GameOver => "six descending notes, 1.5s mono",
            Preset::Shoot => "falling square blast, 0.15s mono",
        }
    }

    /// Builds the preset's descriptor.
    pub fn descriptor(&self) -> SoundDescriptor {
        match self {
            Preset::Explosion => explosion(),
            Preset::GameStart => game_start(),
            Preset::EnemyDeath => enemy_death(),
            Preset::GameOver => game_over(),
            Preset::Shoot => shoot(),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::from_name(s).ok_or_else(|| {
            let known: Vec<&str> = Preset::all().iter().map(Preset::name).collect();
            format!("unknown preset '{}' (expected one of: {})", s, known.join(", "))
        })
    }
}

fn explosion() -> SoundDescriptor {
    SoundDescriptor::builder(0.4)
        .component(
            Component::white_noise(1.0)
                .weight(0.6)
                .shaped(Shaper::ExpDecay { rate: 8.0 }),
        )
        // rumble
        .component(
            Component::sine(Tone::swept(80.0, 30.0))
                .weight(0.5)
                .shaped(Shaper::ExpDecay { rate: 5.0 }),
        )
        // debris
        .component(
            Component::decaying_noise(0.8, 20.0)
                .weight(0.3)
                .window(0.1, 0.6),
        )
        .envelope(EnvelopeSpec::shape(0.05, 0.2))
        .clip(0.9)
        .build()
}

fn game_start() -> SoundDescriptor {
    let rise = |start: f64| FreqSweep::linear(start * 1.5).until(1.0 / 3.0);
    SoundDescriptor::builder(1.0)
        .stereo()
        .component(Component::sine(Tone::fixed(440.0).with_sweep(rise(440.0))).weight(0.6))
        .component(Component::triangle(Tone::fixed(880.0).with_sweep(rise(880.0))).weight(0.3))
        .envelope(EnvelopeSpec::shape(0.1, 0.8))
        .clip(0.9)
        .build()
}

fn enemy_death() -> SoundDescriptor {
    SoundDescriptor::builder(0.4)
        .stereo()
        .component(
            Component::white_noise(1.0)
                .weight(0.5)
                .shaped(Shaper::ExpDecay { rate: 15.0 }),
        )
        // impact
        .component(
            Component::sine(Tone::swept(150.0, 50.0))
                .weight(0.6)
                .shaped(Shaper::ExpDecay { rate: 10.0 }),
        )
        // crunch
        .component(
            Component::square(Tone::swept(300.0, 100.0))
                .weight(0.3)
                .window(0.0, 0.3)
                .shaped(Shaper::DecayRamp { start: 0.0 }),
        )
        // boom
        .component(
            Component::sine(Tone::fixed(60.0))
                .weight(0.4)
                .shaped(Shaper::ExpDecay { rate: 4.0 }),
        )
        .envelope(EnvelopeSpec::shape(0.05, 0.5))
        .distortion(0.5)
        .normalize(1.0)
        .build()
}

fn game_over() -> SoundDescriptor {
    let notes = GAME_OVER_NOTES
        .iter()
        .map(|&freq| Note::new(0.2, freq).fades(0.1, 0.3))
        .collect();
    SoundDescriptor::builder(1.5)
        .component(Component::square(Tone::note_ratio(1.0).with_vibrato(6.0, 0.02)).weight(0.5))
        .component(Component::triangle(Tone::note_ratio(0.5).with_vibrato(6.0, 0.02)).weight(0.3))
        .envelope(EnvelopeSpec::Notes {
            notes,
            global_fade_start: 0.7,
        })
        .clip(0.9)
        .build()
}

fn shoot() -> SoundDescriptor {
    SoundDescriptor::builder(0.15)
        .component(Component::square(Tone::swept(1200.0, 600.0)).weight(0.7))
        // sub-harmonic at a third of the main frequency
        .component(Component::square(Tone::swept(400.0, 200.0)).weight(0.2))
        .component(
            Component::white_noise(1.0)
                .weight(0.1)
                .shaped(Shaper::DecayRamp { start: 0.0 }),
        )
        .envelope(EnvelopeSpec::shape(0.1, 0.4))
        .clip(0.9)
        .build()
}
