//! Noise buffer cache and the single playback slot.

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::{debug, info, warn};

use super::gain::GainStage;
use super::kind::NoiseKind;
use super::sink::{AudioSink, PlaybackHandle};
use super::synth::NoiseBuffer;
use crate::error::FlowtimeError;

/// Synthesizes noise buffers and plays at most one of them at a time.
///
/// Buffers are generated on first use and cached for the generator's
/// lifetime, so a color always replays the same two seconds. The playing
/// source lives in a single optional slot; starting another color empties
/// the slot before filling it again.
pub struct NoiseGenerator<R: RngCore = StdRng> {
    sink: Box<dyn AudioSink>,
    rng: R,
    cache: HashMap<NoiseKind, NoiseBuffer>,
    gain: GainStage,
    active: Option<(NoiseKind, Box<dyn PlaybackHandle>)>,
}

impl NoiseGenerator<StdRng> {
    /// Create a generator seeded from the OS.
    #[must_use]
    pub fn new(sink: Box<dyn AudioSink>) -> Self {
        Self::with_rng(sink, StdRng::from_entropy())
    }

    /// Create a generator with a fixed seed; buffers are reproducible.
    #[must_use]
    pub fn seeded(sink: Box<dyn AudioSink>, seed: u64) -> Self {
        Self::with_rng(sink, StdRng::seed_from_u64(seed))
    }
}

impl<R: RngCore> NoiseGenerator<R> {
    /// Create a generator drawing randomness from `rng`.
    pub fn with_rng(sink: Box<dyn AudioSink>, rng: R) -> Self {
        Self {
            sink,
            rng,
            cache: HashMap::new(),
            gain: GainStage::default(),
            active: None,
        }
    }

    /// Sample rate buffers are synthesized at.
    #[must_use]
    pub fn sample_rate(&self) -> u32 {
        self.sink.sample_rate()
    }

    /// Get the buffer for `kind`, synthesizing it on first use.
    pub fn generate(&mut self, kind: NoiseKind) -> &NoiseBuffer {
        let sample_rate = self.sink.sample_rate();
        let rng = &mut self.rng;
        self.cache.entry(kind).or_insert_with(|| {
            debug!(%kind, sample_rate, "synthesizing noise buffer");
            NoiseBuffer::synthesize(kind, sample_rate, rng)
        })
    }

    /// Play `kind` on a loop, replacing whatever was playing.
    ///
    /// # Errors
    ///
    /// Returns `AudioUnavailable` if the sink cannot play; nothing is
    /// playing afterwards.
    pub fn play(&mut self, kind: NoiseKind) -> Result<(), FlowtimeError> {
        self.stop();

        let buffer = self.generate(kind).clone();
        match self.sink.start_loop(&buffer, &self.gain) {
            Ok(handle) => {
                info!(%kind, volume = self.gain.level(), "noise playing");
                self.active = Some((kind, handle));
                Ok(())
            }
            Err(e) => {
                warn!(%kind, error = %e, "noise playback failed");
                Err(e)
            }
        }
    }

    /// Play `kind`, or stop it if it is already playing.
    ///
    /// # Errors
    ///
    /// Same as [`play`](Self::play).
    pub fn toggle(&mut self, kind: NoiseKind) -> Result<(), FlowtimeError> {
        if self.playing() == Some(kind) {
            self.stop();
            Ok(())
        } else {
            self.play(kind)
        }
    }

    /// Stop the playing source, if any.
    pub fn stop(&mut self) {
        if let Some((kind, handle)) = self.active.take() {
            handle.stop();
            info!(%kind, "noise stopped");
        }
    }

    /// Set the shared volume, `[0, 1]`. Applies to the playing source
    /// immediately.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for NaN or out-of-range levels.
    pub fn set_volume(&mut self, level: f32) -> Result<(), FlowtimeError> {
        self.gain.set_level(level)?;
        debug!(level, "volume set");
        Ok(())
    }

    /// Current volume.
    #[must_use]
    pub fn volume(&self) -> f32 {
        self.gain.level()
    }

    /// Color currently playing.
    #[must_use]
    pub fn playing(&self) -> Option<NoiseKind> {
        self.active.as_ref().map(|(kind, _)| *kind)
    }
}

impl<R: RngCore> Drop for NoiseGenerator<R> {
    fn drop(&mut self) {
        self.stop();
    }
}

impl<R: RngCore> std::fmt::Debug for NoiseGenerator<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NoiseGenerator")
            .field("sample_rate", &self.sink.sample_rate())
            .field("cached", &self.cache.keys().collect::<Vec<_>>())
            .field("volume", &self.gain.level())
            .field("playing", &self.playing())
            .finish_non_exhaustive()
    }
}
