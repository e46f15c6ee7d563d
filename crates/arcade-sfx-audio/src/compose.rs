//! Composer: mixes components, applies the envelope and output policy, and
//! encodes to PCM.
//!
//! Synthesis is a pure function of the descriptor and the noise draws. It
//! either returns a complete buffer or fails validation before rendering.

use arcade_sfx_spec::{validate_descriptor, Component, SoundDescriptor};
use tracing::debug;

use crate::envelope::{shaper_gain, EnvelopeCurve};
use crate::error::AudioResult;
use crate::generator::{SampleContext, SignalGenerator};
use crate::pcm::PcmBuffer;
use crate::processing::{apply_output_policy, soft_distort_buffer};
use crate::rng::{NoiseSource, SeededNoise};

/// Contribution of one component at `ctx`: generator × weight × window × shapers.
///
/// Shapers run on window-local progress and time when a window is set.
pub fn component_sample<N: NoiseSource>(
    component: &Component,
    ctx: &SampleContext,
    noise: &mut N,
) -> f64 {
    let progress = ctx.progress();
    let (local_progress, local_time) = match component.window {
        Some(window) if !window.contains(progress) => return 0.0,
        Some(window) => (
            window.local(progress),
            (progress - window.start) * ctx.num_frames as f64 / ctx.sample_rate,
        ),
        None => (progress, ctx.time()),
    };

    let gain: f64 = component
        .shape
        .iter()
        .map(|shaper| shaper_gain(shaper, local_progress, local_time))
        .product();

    component.weight * gain * component.generator.sample(ctx, noise)
}

/// Renders the mono scalar signal after distortion and the output policy.
///
/// # Errors
/// Returns a descriptor error if validation fails.
pub fn render_mono<N: NoiseSource>(desc: &SoundDescriptor, noise: &mut N) -> AudioResult<Vec<f64>> {
    validate_descriptor(desc)?;

    let num_frames = desc.num_frames();
    let sample_rate = desc.sample_rate as f64;
    debug!(
        frames = num_frames,
        sample_rate = desc.sample_rate,
        components = desc.components.len(),
        noise_components = desc.components.iter().filter(|c| c.generator.is_noise()).count(),
        envelope = desc.envelope.kind(),
        output = desc.output.kind(),
        "rendering sound"
    );

    let envelope = EnvelopeCurve::new(&desc.envelope, num_frames, sample_rate);
    let mut signal = Vec::with_capacity(num_frames);
    for i in 0..num_frames {
        let mut ctx = SampleContext::new(i, num_frames, sample_rate);
        ctx.note = envelope.note_at(i);

        let mix: f64 = desc
            .components
            .iter()
            .map(|component| component_sample(component, &ctx, noise))
            .sum();
        signal.push(mix * envelope.gain(&ctx));
    }

    if let Some(amount) = desc.distortion {
        soft_distort_buffer(&mut signal, amount);
    }
    apply_output_policy(&mut signal, &desc.output);

    Ok(signal)
}

/// Synthesizes a descriptor into a PCM buffer.
///
/// Stereo descriptors receive the mono signal duplicated into both channels.
///
/// # Errors
/// Returns a descriptor error if validation fails; nothing is rendered.
pub fn synthesize<N: NoiseSource>(desc: &SoundDescriptor, noise: &mut N) -> AudioResult<PcmBuffer> {
    let signal = render_mono(desc, noise)?;
    Ok(PcmBuffer::from_mono(&signal, desc.channels, desc.sample_rate))
}

/// Synthesizes with a PCG32 noise source seeded from `seed`.
pub fn synthesize_seeded(desc: &SoundDescriptor, seed: u32) -> AudioResult<PcmBuffer> {
    synthesize(desc, &mut SeededNoise::new(seed))
}
