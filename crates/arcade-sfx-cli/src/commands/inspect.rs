//! Inspect command implementation
//!
//! Reads a WAV file back with an independent decoder and reports its format,
//! peak level, and PCM hash.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use arcade_sfx_audio::PcmBuffer;
use colored::Colorize;

/// Summary of a 16-bit PCM WAV file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WavSummary {
    /// Channel count.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Frames (samples per channel).
    pub frames: usize,
    /// Largest absolute sample value.
    pub peak: u16,
    /// BLAKE3 hash of the PCM bytes.
    pub pcm_hash: String,
}

/// Run the inspect command
pub fn run(input: &str) -> Result<ExitCode> {
    let summary = summarize(Path::new(input))?;
    let duration = summary.frames as f64 / summary.sample_rate as f64;
    let peak_dbfs = if summary.peak == 0 {
        f64::NEG_INFINITY
    } else {
        20.0 * (summary.peak as f64 / 32767.0).log10()
    };

    println!("{} {}", "Inspecting:".cyan().bold(), input);
    println!("  {:<12} {}", "channels".dimmed(), summary.channels);
    println!("  {:<12} {} Hz", "sample rate".dimmed(), summary.sample_rate);
    println!("  {:<12} {} ({:.3}s)", "frames".dimmed(), summary.frames, duration);
    println!("  {:<12} {} ({:.2} dBFS)", "peak".dimmed(), summary.peak, peak_dbfs);
    println!("  {:<12} {}", "pcm hash".dimmed(), summary.pcm_hash);
    Ok(ExitCode::SUCCESS)
}

/// Decodes `path` and summarizes it.
pub fn summarize(path: &Path) -> Result<WavSummary> {
    let mut reader = hound::WavReader::open(path)
        .with_context(|| format!("Failed to open WAV: {}", path.display()))?;
    let spec = reader.spec();
    if spec.sample_format != hound::SampleFormat::Int || spec.bits_per_sample != 16 {
        bail!(
            "{} is not 16-bit PCM ({} bits, {:?})",
            path.display(),
            spec.bits_per_sample,
            spec.sample_format
        );
    }

    let samples = reader
        .samples::<i16>()
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("Failed to decode samples: {}", path.display()))?;
    let pcm = PcmBuffer::from_interleaved(samples, spec.channels, spec.sample_rate)
        .with_context(|| format!("{} has a partial trailing frame", path.display()))?;

    Ok(WavSummary {
        channels: pcm.channels(),
        sample_rate: pcm.sample_rate(),
        frames: pcm.num_frames(),
        peak: pcm.peak(),
        pcm_hash: pcm.pcm_hash(),
    })
}
