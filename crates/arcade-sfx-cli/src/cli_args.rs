//! CLI argument definitions for the arcade-sfx command-line interface.
//!
//! All `#[derive(Parser)]` and `#[derive(Subcommand)]` types are defined here,
//! keeping `main.rs` focused on dispatch logic.

use clap::{Parser, Subcommand};

/// arcade-sfx - Procedural arcade sound effect generator
#[derive(Parser)]
#[command(name = "arcade-sfx")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Render one preset or descriptor to a WAV file
    Generate {
        /// Built-in preset name
        #[arg(short, long, conflicts_with = "descriptor", required_unless_present = "descriptor")]
        preset: Option<String>,

        /// Path to a JSON descriptor
        #[arg(short, long)]
        descriptor: Option<String>,

        /// Output WAV path (parent directory must exist)
        #[arg(short, long)]
        output: String,

        /// Noise seed
        #[arg(long, default_value_t = 0)]
        seed: u32,
    },

    /// Render every sound listed in a batch manifest
    Build {
        /// Path to the manifest JSON
        #[arg(short, long)]
        manifest: String,

        /// Override the manifest's base seed
        #[arg(long)]
        seed: Option<u32>,
    },

    /// List built-in presets
    Presets {
        /// Print the named preset as a JSON descriptor
        #[arg(long)]
        dump: Option<String>,
    },

    /// Validate a descriptor file without rendering
    Validate {
        /// Path to the descriptor JSON
        #[arg(short, long)]
        descriptor: String,
    },

    /// Print format, peak level, and PCM hash of a WAV file
    Inspect {
        /// Path to the WAV file
        #[arg(short, long)]
        input: String,
    },
}
