//! CLI command implementations

use std::process::ExitCode;

use arcade_sfx_audio::AudioError;

pub mod build;
pub mod generate;
pub mod inspect;
pub mod presets;
pub mod validate;

/// Exit status for a descriptor the caller must fix.
pub const EXIT_DESCRIPTOR_ERROR: u8 = 1;
/// Exit status for a failure while rendering or writing output.
pub const EXIT_GENERATION_ERROR: u8 = 2;

/// Maps a command error to its exit status.
///
/// Encoding failures anywhere in the error chain exit with
/// [`EXIT_GENERATION_ERROR`]; everything else is a descriptor or usage problem.
pub fn exit_status(err: &anyhow::Error) -> u8 {
    let encoding = err.chain().any(|cause| {
        matches!(
            cause.downcast_ref::<AudioError>(),
            Some(AudioError::EncodingFailure { .. })
        )
    });
    if encoding {
        EXIT_GENERATION_ERROR
    } else {
        EXIT_DESCRIPTOR_ERROR
    }
}

/// [`exit_status`] as an [`ExitCode`].
pub fn exit_code(err: &anyhow::Error) -> ExitCode {
    ExitCode::from(exit_status(err))
}
