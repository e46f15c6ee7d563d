//! Canonical WAV writer.
//!
//! Writes 16-bit PCM WAV files with a fixed 44-byte header (RIFF, `fmt `,
//! `data`) and no timestamps or optional chunks, so identical buffers always
//! produce identical files.

use std::io::{self, BufWriter, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::info;

use crate::error::{AudioError, AudioResult};
use crate::pcm::PcmBuffer;

/// Size of the canonical header in bytes.
pub const WAV_HEADER_LEN: usize = 44;

/// WAV file format parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
    /// Number of channels (1 = mono, 2 = stereo).
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample (always 16 for this implementation).
    pub bits_per_sample: u16,
}

impl WavFormat {
    /// Creates a 16-bit format.
    pub fn pcm16(channels: u16, sample_rate: u32) -> Self {
        Self {
            channels,
            sample_rate,
            bits_per_sample: 16,
        }
    }

    /// Format of an existing buffer.
    pub fn of(buffer: &PcmBuffer) -> Self {
        Self::pcm16(buffer.channels(), buffer.sample_rate())
    }

    /// Calculates bytes per sample (per channel).
    fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample / 8
    }

    /// Calculates block align (bytes per sample frame).
    pub fn block_align(&self) -> u16 {
        self.channels * self.bytes_per_sample()
    }

    /// Calculates byte rate (bytes per second).
    pub fn byte_rate(&self) -> u32 {
        self.sample_rate * self.block_align() as u32
    }
}

/// Writes a complete WAV file for `buffer` to a writer.
pub fn write_wav_to<W: Write>(writer: &mut W, buffer: &PcmBuffer) -> io::Result<()> {
    let format = WavFormat::of(buffer);
    let data_size = u32::try_from(buffer.len() * 2)
        .ok()
        .filter(|size| *size <= u32::MAX - 36)
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "PCM data too large for WAV"))?;
    // Total file size minus 8 bytes for the RIFF header
    let file_size = 36 + data_size;

    // RIFF header
    writer.write_all(b"RIFF")?;
    writer.write_all(&file_size.to_le_bytes())?;
    writer.write_all(b"WAVE")?;

    // fmt chunk
    writer.write_all(b"fmt ")?;
    writer.write_all(&16u32.to_le_bytes())?; // Chunk size (16 for PCM)
    writer.write_all(&1u16.to_le_bytes())?; // Audio format (1 = PCM)
    writer.write_all(&format.channels.to_le_bytes())?;
    writer.write_all(&format.sample_rate.to_le_bytes())?;
    writer.write_all(&format.byte_rate().to_le_bytes())?;
    writer.write_all(&format.block_align().to_le_bytes())?;
    writer.write_all(&format.bits_per_sample.to_le_bytes())?;

    // data chunk
    writer.write_all(b"data")?;
    writer.write_all(&data_size.to_le_bytes())?;
    writer.write_all(&buffer.to_le_bytes())?;

    Ok(())
}

/// Encodes `buffer` as WAV bytes in memory.
pub fn encode_wav(buffer: &PcmBuffer) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(WAV_HEADER_LEN + buffer.len() * 2);
    // Only fails for buffers over 4 GiB, which validation rules out
    if write_wav_to(&mut bytes, buffer).is_err() {
        bytes.clear();
    }
    bytes
}

/// Writes `buffer` to `path` as a WAV file.
///
/// The file is written to a temporary sibling and renamed into place, so
/// readers never observe a partial file and an existing file is replaced
/// whole. The parent directory must already exist.
///
/// # Errors
/// [`AudioError::EncodingFailure`] if the destination is not writable.
pub fn write_wav(buffer: &PcmBuffer, path: impl AsRef<Path>) -> AudioResult<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| AudioError::encoding(path, e))?;
    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        write_wav_to(&mut writer, buffer).map_err(|e| AudioError::encoding(path, e))?;
        writer.flush().map_err(|e| AudioError::encoding(path, e))?;
    }
    tmp.persist(path)
        .map_err(|e| AudioError::encoding(path, e.error))?;

    info!(
        path = %path.display(),
        frames = buffer.num_frames(),
        channels = buffer.channels(),
        "wrote WAV"
    );
    Ok(())
}
