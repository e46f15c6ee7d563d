//! Descriptor loading for the CLI.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use arcade_sfx_spec::{Preset, SoundDescriptor};

/// Where a single sound's descriptor comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum DescriptorSource {
    /// A built-in preset.
    Preset(Preset),
    /// A JSON descriptor file.
    File(PathBuf),
}

impl DescriptorSource {
    /// Builds a source from the mutually exclusive `--preset` / `--descriptor` flags.
    pub fn from_args(preset: Option<&str>, descriptor: Option<&str>) -> Result<Self> {
        match (preset, descriptor) {
            (Some(name), None) => Ok(Self::Preset(parse_preset(name)?)),
            (None, Some(path)) => Ok(Self::File(PathBuf::from(path))),
            (Some(_), Some(_)) => bail!("--preset and --descriptor are mutually exclusive"),
            (None, None) => bail!("one of --preset or --descriptor is required"),
        }
    }

    /// Produces the descriptor.
    pub fn load(&self) -> Result<SoundDescriptor> {
        match self {
            Self::Preset(preset) => Ok(preset.descriptor()),
            Self::File(path) => load_descriptor(path),
        }
    }
}

impl fmt::Display for DescriptorSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Preset(preset) => write!(f, "preset '{}'", preset),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Looks up a preset, listing the known names on failure.
pub fn parse_preset(name: &str) -> Result<Preset> {
    name.parse::<Preset>().map_err(anyhow::Error::msg)
}

/// Reads and parses a JSON descriptor file.
pub fn load_descriptor(path: &Path) -> Result<SoundDescriptor> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read descriptor: {}", path.display()))?;
    SoundDescriptor::from_json(&json)
        .with_context(|| format!("Failed to parse descriptor: {}", path.display()))
}
