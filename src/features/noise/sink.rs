//! Audio output sinks.
//!
//! The generator owns buffers and the gain stage; a sink only renders them.

use tracing::warn;

use super::gain::GainStage;
use super::synth::NoiseBuffer;
use crate::error::FlowtimeError;

/// A source that is currently being played.
pub trait PlaybackHandle {
    /// Halt playback and release the device stream.
    fn stop(self: Box<Self>);
}

/// Something that can loop a noise buffer through a gain stage.
#[cfg_attr(test, mockall::automock)]
pub trait AudioSink {
    /// Sample rate buffers should be synthesized at.
    fn sample_rate(&self) -> u32;

    /// Start looping `buffer`, scaled by `gain`.
    ///
    /// # Errors
    ///
    /// Returns `AudioUnavailable` if the output cannot play.
    fn start_loop(
        &mut self,
        buffer: &NoiseBuffer,
        gain: &GainStage,
    ) -> Result<Box<dyn PlaybackHandle>, FlowtimeError>;
}

/// A sink with no device behind it; every start fails.
#[derive(Debug, Clone)]
pub struct UnavailableSink {
    sample_rate: u32,
    reason: String,
}

impl UnavailableSink {
    /// Create a sink that reports `reason` on every start.
    pub fn new(sample_rate: u32, reason: impl Into<String>) -> Self {
        Self {
            sample_rate,
            reason: reason.into(),
        }
    }
}

impl AudioSink for UnavailableSink {
    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn start_loop(
        &mut self,
        _buffer: &NoiseBuffer,
        _gain: &GainStage,
    ) -> Result<Box<dyn PlaybackHandle>, FlowtimeError> {
        Err(FlowtimeError::AudioUnavailable(self.reason.clone()))
    }
}

/// Open the default output device, falling back to an [`UnavailableSink`].
///
/// `fallback_rate` is used when no device reports its own rate.
#[must_use]
pub fn open_default_sink(fallback_rate: u32) -> Box<dyn AudioSink> {
    #[cfg(feature = "audio")]
    {
        let sink: Box<dyn AudioSink> = match super::cpal_sink::CpalSink::open() {
            Ok(sink) => Box::new(sink),
            Err(e) => {
                warn!(error = %e, "no audio output, noise disabled");
                Box::new(UnavailableSink::new(fallback_rate, e.to_string()))
            }
        };
        sink
    }

    #[cfg(not(feature = "audio"))]
    {
        warn!("built without the `audio` feature, noise disabled");
        Box::new(UnavailableSink::new(
            fallback_rate,
            "flowtime was built without the `audio` feature (rebuild with --features audio)",
        ))
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::super::kind::NoiseKind;
    use super::*;

    #[test]
    fn test_unavailable_sink_always_fails() {
        let mut sink = UnavailableSink::new(8_000, "no device");
        let buffer = NoiseBuffer::synthesize(NoiseKind::White, 100, &mut StdRng::seed_from_u64(1));
        let err = sink.start_loop(&buffer, &GainStage::default()).err();
        assert!(matches!(err, Some(FlowtimeError::AudioUnavailable(ref r)) if r == "no device"));
        assert_eq!(sink.sample_rate(), 8_000);
    }
}
