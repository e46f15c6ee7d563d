//! Batch build manifests.
//!
//! A manifest lists the sounds a game needs and where to put them:
//!
//! ```json
//! {
//!   "out_dir": "assets/sounds",
//!   "seed": 42,
//!   "sounds": [
//!     { "name": "shoot", "preset": "shoot" },
//!     { "name": "laser", "descriptor_path": "sfx/laser.json" },
//!     { "name": "blip", "descriptor": { "duration_seconds": 0.05, "components": [] } }
//!   ]
//! }
//! ```
//!
//! Relative paths resolve against the manifest's directory.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use arcade_sfx_spec::SoundDescriptor;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::input::{load_descriptor, parse_preset};

/// A batch of sounds to render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildManifest {
    /// Directory the WAV files are written to.
    pub out_dir: PathBuf,
    /// Base seed; each sound derives its own seed from this and its name.
    #[serde(default)]
    pub seed: u32,
    /// The sounds to render.
    pub sounds: Vec<SoundEntry>,
}

/// One sound in a manifest. Exactly one source field must be set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SoundEntry {
    /// Output file stem.
    pub name: String,
    /// Built-in preset name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,
    /// Inline descriptor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descriptor: Option<Value>,
    /// Path to a descriptor file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descriptor_path: Option<PathBuf>,
}

impl BuildManifest {
    /// Reads a manifest and resolves its relative paths.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest: {}", path.display()))?;
        let mut manifest = Self::from_json(&json)
            .with_context(|| format!("Invalid manifest: {}", path.display()))?;
        if let Some(base) = path.parent() {
            manifest.resolve_paths(base);
        }
        Ok(manifest)
    }

    /// Parses and checks a manifest without touching the filesystem.
    pub fn from_json(json: &str) -> Result<Self> {
        let manifest: Self = serde_json::from_str(json)?;
        manifest.check()?;
        Ok(manifest)
    }

    /// Rebases relative paths onto `base`.
    pub fn resolve_paths(&mut self, base: &Path) {
        if self.out_dir.is_relative() {
            self.out_dir = base.join(&self.out_dir);
        }
        for sound in &mut self.sounds {
            if let Some(path) = sound.descriptor_path.as_mut() {
                if path.is_relative() {
                    *path = base.join(&*path);
                }
            }
        }
    }

    fn check(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for sound in &self.sounds {
            let name = sound.name.as_str();
            if name.is_empty() || name.contains(['/', '\\']) || name == "." || name == ".." {
                bail!("invalid sound name '{}'", name);
            }
            if !seen.insert(name) {
                bail!("duplicate sound name '{}'", name);
            }
            let sources = [
                sound.preset.is_some(),
                sound.descriptor.is_some(),
                sound.descriptor_path.is_some(),
            ];
            if sources.iter().filter(|set| **set).count() != 1 {
                bail!(
                    "sound '{}' needs exactly one of preset, descriptor, descriptor_path",
                    name
                );
            }
        }
        Ok(())
    }
}

impl SoundEntry {
    /// Produces the sound's descriptor.
    pub fn load_descriptor(&self) -> Result<SoundDescriptor> {
        if let Some(name) = &self.preset {
            return Ok(parse_preset(name)?.descriptor());
        }
        if let Some(value) = &self.descriptor {
            return SoundDescriptor::from_value(value.clone())
                .with_context(|| format!("Invalid inline descriptor for '{}'", self.name));
        }
        match &self.descriptor_path {
            Some(path) => load_descriptor(path),
            None => bail!("sound '{}' has no descriptor source", self.name),
        }
    }

    /// `<out_dir>/<name>.wav`.
    pub fn output_path(&self, out_dir: &Path) -> PathBuf {
        out_dir.join(format!("{}.wav", self.name))
    }
}
