//! Arcade SFX Audio Backend
//!
//! This crate renders [`SoundDescriptor`](arcade_sfx_spec::SoundDescriptor)s
//! into 16-bit PCM and writes them as canonical WAV files.
//!
//! # Overview
//!
//! A descriptor is a weighted sum of components, each one a generator
//! (white noise, decaying noise, sine, square, triangle) optionally gated by
//! an activation window and shaped by per-component gain ramps. The mix is
//! multiplied by a buffer-level envelope, optionally soft-distorted, then
//! hard-clipped or peak-normalized before quantization.
//!
//! # Determinism
//!
//! Oscillator components are pure functions of the sample index. Noise
//! components draw from a [`NoiseSource`]; with [`SeededNoise`] the output is
//! byte-identical for a given seed, and with [`SilentNoise`] every descriptor
//! renders identically on every run.
//!
//! # Example
//!
//! ```
//! use arcade_sfx_audio::{synthesize, SilentNoise};
//! use arcade_sfx_spec::Preset;
//!
//! let desc = Preset::Shoot.descriptor();
//! let pcm = synthesize(&desc, &mut SilentNoise).unwrap();
//! assert_eq!(pcm.len(), 6615);
//! ```
//!
//! # Crate Structure
//!
//! - [`compose`] - Mixing and the end-to-end synthesis entry points
//! - [`envelope`] - Gain ramps and buffer-level envelope curves
//! - [`generator`] - Sample-level generator evaluation and sweeps
//! - [`oscillator`] - Basic waveform functions
//! - [`pcm`] - 16-bit PCM buffers
//! - [`processing`] - Distortion, clipping, normalization
//! - [`rng`] - Deterministic noise sources with seed derivation
//! - [`wav`] - Deterministic WAV file writer

pub mod compose;
pub mod envelope;
pub mod error;
pub mod generator;
pub mod oscillator;
pub mod pcm;
pub mod processing;
pub mod rng;
pub mod wav;

// Re-export main types at crate root
pub use compose::{render_mono, synthesize, synthesize_seeded};
pub use error::{AudioError, AudioResult};
pub use pcm::PcmBuffer;
pub use rng::{derive_sound_seed, NoiseSource, SeededNoise, SilentNoise};
pub use wav::{encode_wav, write_wav};
