//! arcade-sfx CLI - build-time generator for arcade sound effect assets
//!
//! This binary renders built-in presets, JSON descriptors, and batch
//! manifests to 16-bit PCM WAV files.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use arcade_sfx_cli::commands;

mod cli_args;

use cli_args::{Cli, Commands};

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Generate {
            preset,
            descriptor,
            output,
            seed,
        } => commands::generate::run(preset.as_deref(), descriptor.as_deref(), &output, seed),
        Commands::Build { manifest, seed } => commands::build::run(&manifest, seed),
        Commands::Presets { dump } => commands::presets::run(dump.as_deref()),
        Commands::Validate { descriptor } => commands::validate::run(&descriptor),
        Commands::Inspect { input } => commands::inspect::run(&input),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            commands::exit_code(&e)
        }
    }
}
