//! Playback through the system's default output device.

use std::sync::Arc;

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{FromSample, Sample, SampleFormat, SizedSample, StreamConfig};
use tracing::{debug, warn};

use super::gain::GainStage;
use super::sink::{AudioSink, PlaybackHandle};
use super::synth::NoiseBuffer;
use crate::error::FlowtimeError;

/// Sink backed by a cpal output device.
pub struct CpalSink {
    device: cpal::Device,
    config: StreamConfig,
    format: SampleFormat,
}

impl CpalSink {
    /// Open the default output device with its default configuration.
    ///
    /// # Errors
    ///
    /// Returns `AudioUnavailable` if there is no output device or it cannot
    /// report a configuration.
    pub fn open() -> Result<Self, FlowtimeError> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| FlowtimeError::AudioUnavailable("no output device".to_string()))?;
        let supported = device
            .default_output_config()
            .map_err(|e| FlowtimeError::AudioUnavailable(format!("no output config: {e}")))?;

        debug!(
            device = %device.name().unwrap_or_default(),
            rate = supported.sample_rate().0,
            channels = supported.channels(),
            "opened audio output"
        );

        Ok(Self {
            format: supported.sample_format(),
            config: supported.config(),
            device,
        })
    }

    fn build<T>(
        &self,
        samples: Arc<[f32]>,
        gain: GainStage,
    ) -> Result<cpal::Stream, cpal::BuildStreamError>
    where
        T: SizedSample + FromSample<f32>,
    {
        let channels = usize::from(self.config.channels.max(1));
        let mut cursor = 0usize;

        self.device.build_output_stream(
            &self.config,
            move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
                let level = gain.level();
                for frame in data.chunks_mut(channels) {
                    let value = T::from_sample(samples[cursor] * level);
                    for out in frame.iter_mut() {
                        *out = value;
                    }
                    cursor = (cursor + 1) % samples.len();
                }
            },
            |err| warn!(error = %err, "audio stream error"),
            None,
        )
    }
}

impl AudioSink for CpalSink {
    fn sample_rate(&self) -> u32 {
        self.config.sample_rate.0
    }

    fn start_loop(
        &mut self,
        buffer: &NoiseBuffer,
        gain: &GainStage,
    ) -> Result<Box<dyn PlaybackHandle>, FlowtimeError> {
        if buffer.is_empty() {
            return Err(FlowtimeError::InvalidInput("noise buffer is empty".to_string()));
        }

        let samples = buffer.shared_samples();
        let gain = gain.clone();
        let stream = match self.format {
            SampleFormat::F32 => self.build::<f32>(samples, gain),
            SampleFormat::F64 => self.build::<f64>(samples, gain),
            SampleFormat::I16 => self.build::<i16>(samples, gain),
            SampleFormat::I32 => self.build::<i32>(samples, gain),
            SampleFormat::U16 => self.build::<u16>(samples, gain),
            other => {
                return Err(FlowtimeError::AudioUnavailable(format!(
                    "unsupported sample format {other:?}"
                )))
            }
        }
        .map_err(|e| FlowtimeError::AudioUnavailable(format!("cannot open stream: {e}")))?;

        stream
            .play()
            .map_err(|e| FlowtimeError::AudioUnavailable(format!("cannot start stream: {e}")))?;

        Ok(Box::new(CpalPlayback { stream }))
    }
}

struct CpalPlayback {
    stream: cpal::Stream,
}

impl PlaybackHandle for CpalPlayback {
    fn stop(self: Box<Self>) {
        if let Err(e) = self.stream.pause() {
            debug!(error = %e, "pause failed, dropping stream");
        }
    }
}
