//! Colored noise synthesis.
//!
//! White noise comes straight from the random source. Pink noise runs it
//! through Paul Kellet's bank of six one-pole filters; brown noise through a
//! leaky integrator. Both filtered outputs are clamped to `[-1, 1]`.

use std::sync::Arc;

use rand::Rng;

use super::kind::NoiseKind;

/// Length of every noise buffer. Playback loops it.
pub const BUFFER_SECONDS: u32 = 2;

/// Lowest sample rate accepted from configuration.
pub const MIN_SAMPLE_RATE: u32 = 8_000;

/// Highest sample rate a buffer is synthesized at.
pub const MAX_SAMPLE_RATE: u32 = 192_000;

/// Pole coefficients and input gains of the pink filter bank, `(decay, gain)`.
const PINK_POLES: [(f32, f32); 6] = [
    (0.99886, 0.055_517_9),
    (0.99332, 0.075_075_9),
    (0.96900, 0.153_852),
    (0.86650, 0.310_485_6),
    (0.55000, 0.532_952_2),
    (-0.7616, -0.016_898),
];
const PINK_DIRECT_GAIN: f32 = 0.5362;
const PINK_SCALE: f32 = 0.11;

const BROWN_STEP: f32 = 0.02;
const BROWN_LEAK: f32 = 1.02;
const BROWN_SCALE: f32 = 3.5;

/// One white noise sample, uniform in `[-1, 1]`.
pub fn white_sample<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    rng.gen_range(-1.0..=1.0)
}

/// Paul Kellet's pink noise approximation.
#[derive(Debug, Clone, Default)]
pub struct PinkFilter {
    state: [f32; 6],
}

impl PinkFilter {
    /// Feed one white sample, get one pink sample.
    pub fn process(&mut self, white: f32) -> f32 {
        let mut sum = white * PINK_DIRECT_GAIN;
        for (b, (decay, gain)) in self.state.iter_mut().zip(PINK_POLES) {
            *b = decay * *b + white * gain;
            sum += *b;
        }
        (sum * PINK_SCALE).clamp(-1.0, 1.0)
    }
}

/// Leaky integrator producing brown noise.
#[derive(Debug, Clone, Default)]
pub struct BrownFilter {
    last: f32,
}

impl BrownFilter {
    /// Feed one white sample, get one brown sample.
    pub fn process(&mut self, white: f32) -> f32 {
        self.last = (self.last + BROWN_STEP * white) / BROWN_LEAK;
        (self.last * BROWN_SCALE).clamp(-1.0, 1.0)
    }
}

/// Synthesize `len` samples of `kind` noise.
pub fn synthesize<R: Rng + ?Sized>(kind: NoiseKind, len: usize, rng: &mut R) -> Vec<f32> {
    match kind {
        NoiseKind::White => (0..len).map(|_| white_sample(rng)).collect(),
        NoiseKind::Pink => {
            let mut filter = PinkFilter::default();
            (0..len).map(|_| filter.process(white_sample(rng))).collect()
        }
        NoiseKind::Brown => {
            let mut filter = BrownFilter::default();
            (0..len).map(|_| filter.process(white_sample(rng))).collect()
        }
    }
}

/// A looping buffer of noise. Immutable once built; clones share samples.
#[derive(Debug, Clone, PartialEq)]
pub struct NoiseBuffer {
    kind: NoiseKind,
    sample_rate: u32,
    samples: Arc<[f32]>,
}

impl NoiseBuffer {
    /// Synthesize a [`BUFFER_SECONDS`] long buffer at `sample_rate`.
    ///
    /// The rate is clamped to at most [`MAX_SAMPLE_RATE`].
    pub fn synthesize<R: Rng + ?Sized>(kind: NoiseKind, sample_rate: u32, rng: &mut R) -> Self {
        let sample_rate = sample_rate.clamp(1, MAX_SAMPLE_RATE);
        let len = usize::try_from(sample_rate * BUFFER_SECONDS).unwrap_or(0);
        Self {
            kind,
            sample_rate,
            samples: synthesize(kind, len, rng).into(),
        }
    }

    /// Noise color.
    #[must_use]
    pub const fn kind(&self) -> NoiseKind {
        self.kind
    }

    /// Samples per second.
    #[must_use]
    pub const fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// The mono samples.
    #[must_use]
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// A shared handle on the samples, for an audio callback.
    #[must_use]
    pub fn shared_samples(&self) -> Arc<[f32]> {
        Arc::clone(&self.samples)
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the buffer holds no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Length in seconds.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn duration_secs(&self) -> f32 {
        self.samples.len() as f32 / self.sample_rate as f32
    }
}
