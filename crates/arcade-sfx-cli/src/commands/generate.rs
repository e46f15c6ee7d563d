//! Generate command implementation
//!
//! Renders one descriptor or preset to a WAV file.

use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context, Result};
use arcade_sfx_audio::{synthesize_seeded, write_wav, PcmBuffer};
use colored::Colorize;
use tracing::debug;

use crate::input::DescriptorSource;

/// Run the generate command
///
/// # Arguments
/// * `preset` - Built-in preset name (exclusive with `descriptor`)
/// * `descriptor` - Path to a JSON descriptor (exclusive with `preset`)
/// * `output` - Destination WAV path; the parent directory must exist
/// * `seed` - Noise seed
///
/// # Returns
/// Exit code: 0 success, 1 descriptor error, 2 generation error
pub fn run(preset: Option<&str>, descriptor: Option<&str>, output: &str, seed: u32) -> Result<ExitCode> {
    let start = Instant::now();
    let source = DescriptorSource::from_args(preset, descriptor)?;

    println!("{} {}", "Generating from:".cyan().bold(), source);
    println!("{} {}", "Output:".cyan().bold(), output);

    let pcm = render(&source, seed)?;
    write_wav(&pcm, output).with_context(|| format!("Failed to write {}", output))?;

    println!(
        "{} {} ({} frames, {} ch, {} Hz) in {}ms",
        "OK".green().bold(),
        output,
        pcm.num_frames(),
        pcm.channels(),
        pcm.sample_rate(),
        start.elapsed().as_millis()
    );
    println!("{} {}", "PCM hash:".dimmed(), pcm.pcm_hash());

    Ok(ExitCode::SUCCESS)
}

/// Loads and synthesizes a source.
pub fn render(source: &DescriptorSource, seed: u32) -> Result<PcmBuffer> {
    let desc = source.load()?;
    debug!(%source, seed, "synthesizing");
    synthesize_seeded(&desc, seed).with_context(|| format!("Failed to synthesize {}", source))
}

/// Renders `source` straight to `output` without console output.
pub fn generate_to(source: &DescriptorSource, output: &Path, seed: u32) -> Result<PcmBuffer> {
    let pcm = render(source, seed)?;
    write_wav(&pcm, output).with_context(|| format!("Failed to write {}", output.display()))?;
    Ok(pcm)
}
