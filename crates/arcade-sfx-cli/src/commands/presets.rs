//! Presets command implementation
//!
//! Lists the built-in effects or dumps one as an editable JSON descriptor.

use std::process::ExitCode;

use anyhow::Result;
use arcade_sfx_spec::Preset;
use colored::Colorize;

use crate::input::parse_preset;

/// Run the presets command
///
/// With `dump`, prints that preset's descriptor as pretty JSON on stdout.
pub fn run(dump: Option<&str>) -> Result<ExitCode> {
    match dump {
        Some(name) => {
            println!("{}", dump_json(name)?);
        }
        None => {
            println!("{}", "Built-in presets:".cyan().bold());
            for preset in Preset::all() {
                let desc = preset.descriptor();
                println!(
                    "  {:<12} {:<16} {}",
                    preset.name().green(),
                    preset.file_name().dimmed(),
                    preset.summary()
                );
                println!(
                    "  {:<12} {:.2}s, {} ch, {} components, {} envelope",
                    "",
                    desc.duration_seconds,
                    desc.channels,
                    desc.components.len(),
                    desc.envelope.kind()
                );
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// Pretty JSON for the named preset.
pub fn dump_json(name: &str) -> Result<String> {
    Ok(parse_preset(name)?.descriptor().to_json_pretty()?)
}
