//! 16-bit PCM buffers.

/// Converts a scalar sample to 16-bit PCM: `round(value × 32767)`, saturating.
#[inline]
pub fn to_pcm16(value: f64) -> i16 {
    let scaled = (value * 32767.0).round();
    if scaled.is_nan() {
        0
    } else {
        scaled.clamp(i16::MIN as f64, i16::MAX as f64) as i16
    }
}

/// Interleaved signed 16-bit samples with their format.
///
/// Invariant: `samples.len()` is a multiple of `channels`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PcmBuffer {
    samples: Vec<i16>,
    channels: u16,
    sample_rate: u32,
}

impl PcmBuffer {
    /// Encodes a mono signal, duplicating it into every channel.
    pub fn from_mono(signal: &[f64], channels: u16, sample_rate: u32) -> Self {
        let channels = channels.max(1);
        let mut samples = Vec::with_capacity(signal.len() * channels as usize);
        for &value in signal {
            let pcm = to_pcm16(value);
            samples.extend(std::iter::repeat(pcm).take(channels as usize));
        }
        Self {
            samples,
            channels,
            sample_rate,
        }
    }

    /// Wraps already-interleaved samples.
    ///
    /// Returns `None` if `samples` does not hold a whole number of frames.
    pub fn from_interleaved(samples: Vec<i16>, channels: u16, sample_rate: u32) -> Option<Self> {
        if channels == 0 || samples.len() % channels as usize != 0 {
            return None;
        }
        Some(Self {
            samples,
            channels,
            sample_rate,
        })
    }

    /// Interleaved samples.
    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    /// Channel count.
    pub fn channels(&self) -> u16 {
        self.channels
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Total interleaved sample count.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns true if the buffer holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Frames (samples per channel).
    pub fn num_frames(&self) -> usize {
        self.samples.len() / self.channels as usize
    }

    /// Returns true for two-channel buffers.
    pub fn is_stereo(&self) -> bool {
        self.channels == 2
    }

    /// Samples of frame `index`, one per channel.
    pub fn frame(&self, index: usize) -> Option<&[i16]> {
        let ch = self.channels as usize;
        self.samples.get(index * ch..(index + 1) * ch)
    }

    /// Iterates over frames.
    pub fn frames(&self) -> std::slice::ChunksExact<'_, i16> {
        self.samples.chunks_exact(self.channels as usize)
    }

    /// Duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_frames() as f64 / self.sample_rate as f64
    }

    /// Largest absolute sample value.
    pub fn peak(&self) -> u16 {
        self.samples
            .iter()
            .map(|s| s.unsigned_abs())
            .max()
            .unwrap_or(0)
    }

    /// Samples as little-endian bytes.
    pub fn to_le_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.samples.len() * 2);
        for sample in &self.samples {
            bytes.extend_from_slice(&sample.to_le_bytes());
        }
        bytes
    }

    /// BLAKE3 hash of the PCM bytes, as lowercase hex.
    pub fn pcm_hash(&self) -> String {
        blake3::hash(&self.to_le_bytes()).to_hex().to_string()
    }
}
