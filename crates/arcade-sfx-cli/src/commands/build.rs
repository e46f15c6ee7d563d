//! Build command implementation
//!
//! Renders every sound listed in a batch manifest.

use std::fs;
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context, Result};
use arcade_sfx_audio::{derive_sound_seed, synthesize_seeded, write_wav, AudioError};
use colored::Colorize;
use tracing::{debug, warn};

use super::exit_status;
use crate::config::{BuildManifest, SoundEntry};

/// Outcome of one manifest entry.
#[derive(Debug)]
pub struct BuildOutcome {
    /// Sound name.
    pub name: String,
    /// PCM hash on success, error otherwise.
    pub result: Result<String>,
}

/// Run the build command
///
/// # Arguments
/// * `manifest_path` - Path to the manifest JSON
/// * `seed_override` - Replaces the manifest's base seed
///
/// # Returns
/// Exit code: 0 if every sound was written, otherwise the worst failure
/// status (1 descriptor error, 2 generation error)
pub fn run(manifest_path: &str, seed_override: Option<u32>) -> Result<ExitCode> {
    let start = Instant::now();
    let mut manifest = BuildManifest::load(Path::new(manifest_path))?;
    if let Some(seed) = seed_override {
        manifest.seed = seed;
    }

    println!("{} {}", "Building from:".cyan().bold(), manifest_path);
    println!("{} {}", "Output dir:".cyan().bold(), manifest.out_dir.display());
    println!("{} {}", "Seed:".dimmed(), manifest.seed);

    let outcomes = build_all(&manifest)?;

    let mut worst = 0u8;
    for outcome in &outcomes {
        match &outcome.result {
            Ok(hash) => println!("  {} {} {}", "✓".green(), outcome.name, hash[..16].dimmed()),
            Err(e) => {
                println!("  {} {}: {:#}", "✗".red(), outcome.name, e);
                worst = worst.max(exit_status(e));
            }
        }
    }

    let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
    let elapsed = start.elapsed().as_millis();
    if failed == 0 {
        println!(
            "\n{} {} sound(s) in {}ms",
            "SUCCESS".green().bold(),
            outcomes.len(),
            elapsed
        );
        Ok(ExitCode::SUCCESS)
    } else {
        println!(
            "\n{} {} of {} sound(s) failed",
            "FAILED".red().bold(),
            failed,
            outcomes.len()
        );
        Ok(ExitCode::from(worst))
    }
}

/// Renders every sound in `manifest`, creating the output directory first.
///
/// A failing sound does not stop the batch.
pub fn build_all(manifest: &BuildManifest) -> Result<Vec<BuildOutcome>> {
    fs::create_dir_all(&manifest.out_dir)
        .map_err(|e| AudioError::encoding(&manifest.out_dir, e))
        .with_context(|| format!("Failed to create {}", manifest.out_dir.display()))?;

    Ok(manifest
        .sounds
        .iter()
        .map(|sound| BuildOutcome {
            name: sound.name.clone(),
            result: build_one(sound, &manifest.out_dir, manifest.seed),
        })
        .collect())
}

fn build_one(sound: &SoundEntry, out_dir: &Path, base_seed: u32) -> Result<String> {
    let desc = sound.load_descriptor()?;
    let seed = derive_sound_seed(base_seed, &sound.name);
    debug!(name = %sound.name, seed, "building sound");

    let pcm = synthesize_seeded(&desc, seed)
        .with_context(|| format!("Failed to synthesize '{}'", sound.name))?;
    let path = sound.output_path(out_dir);
    if let Err(e) = write_wav(&pcm, &path) {
        warn!(path = %path.display(), "write failed");
        return Err(e).with_context(|| format!("Failed to write '{}'", sound.name));
    }
    Ok(pcm.pcm_hash())
}
