//! Validate command implementation
//!
//! Checks a descriptor file without rendering it.

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use arcade_sfx_spec::validate_descriptor;
use colored::Colorize;

use super::EXIT_DESCRIPTOR_ERROR;
use crate::input::load_descriptor;

/// Run the validate command
///
/// # Returns
/// Exit code: 0 if valid, 1 if invalid
pub fn run(descriptor_path: &str) -> Result<ExitCode> {
    println!("{} {}", "Validating:".cyan().bold(), descriptor_path);

    let desc = load_descriptor(Path::new(descriptor_path))?;
    if let Err(e) = validate_descriptor(&desc) {
        println!("  {} [{}]: {}", "✗".red(), e.code().red(), e);
        println!("\n{} descriptor is invalid", "FAILED".red().bold());
        return Ok(ExitCode::from(EXIT_DESCRIPTOR_ERROR));
    }

    println!(
        "{} {} frames × {} ch at {} Hz, {} component(s), {} envelope, {} output",
        "VALID".green().bold(),
        desc.num_frames(),
        desc.channels,
        desc.sample_rate,
        desc.components.len(),
        desc.envelope.kind(),
        desc.output.kind()
    );
    for (i, component) in desc.components.iter().enumerate() {
        let window = component
            .window
            .map(|w| format!(" window {:.2}..{:.2}", w.start, w.end))
            .unwrap_or_default();
        println!(
            "  {} {} weight {}{}",
            format!("[{}]", i).dimmed(),
            component.generator.kind(),
            component.weight,
            window
        );
    }
    Ok(ExitCode::SUCCESS)
}
