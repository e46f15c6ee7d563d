//! Arcade SFX Descriptor Library
//!
//! This crate provides the declarative data model for procedurally synthesized
//! arcade sound effects: descriptors, their JSON form, validation, and the
//! built-in presets. It performs no synthesis itself; see `arcade-sfx-audio`.
//!
//! # Example
//!
//! ```
//! use arcade_sfx_spec::{Component, EnvelopeSpec, SoundDescriptor, Tone};
//! use arcade_sfx_spec::validation::validate_descriptor;
//!
//! let desc = SoundDescriptor::builder(0.15)
//!     .component(Component::square(Tone::swept(1200.0, 600.0)).weight(0.7))
//!     .component(Component::white_noise(1.0).weight(0.1))
//!     .envelope(EnvelopeSpec::shape(0.1, 0.4))
//!     .clip(0.9)
//!     .build();
//!
//! assert!(validate_descriptor(&desc).is_ok());
//! assert_eq!(desc.num_frames(), 6615);
//! ```
//!
//! # Modules
//!
//! - [`component`]: Generators, oscillator tones, activation windows
//! - [`descriptor`]: The sound descriptor and its builder
//! - [`envelope`]: Gain shapers and buffer-level envelopes
//! - [`error`]: Error taxonomy
//! - [`output`]: Clip and normalize output policies
//! - [`presets`]: The five built-in effects
//! - [`validation`]: Descriptor validation

pub mod component;
pub mod descriptor;
pub mod envelope;
pub mod error;
pub mod output;
pub mod presets;
pub mod validation;

// Re-export commonly used types at the crate root
pub use component::{
    ActiveWindow, Component, FreqSweep, Generator, SweepCurve, Tone, Vibrato, Waveform,
};
pub use descriptor::{SoundDescriptor, SoundDescriptorBuilder, DEFAULT_SAMPLE_RATE};
pub use envelope::{EnvelopeSpec, Note, Shaper};
pub use error::{SpecError, SpecResult};
pub use output::{OutputPolicy, DEFAULT_CLIP_LIMIT};
pub use presets::Preset;
pub use validation::validate_descriptor;
