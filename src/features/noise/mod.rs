//! Colored background noise.
//!
//! Provides looping noise for masking distractions while working:
//! - White, pink and brown noise synthesis
//! - A per-color buffer cache
//! - A single playback slot behind a shared volume stage
//! - Audio output through `cpal` (with the `audio` feature)

#[cfg(feature = "audio")]
mod cpal_sink;
mod gain;
mod generator;
mod kind;
mod sink;
mod synth;

#[cfg(feature = "audio")]
pub use cpal_sink::CpalSink;
pub use gain::GainStage;
pub use generator::NoiseGenerator;
pub use kind::NoiseKind;
pub use sink::{open_default_sink, AudioSink, PlaybackHandle, UnavailableSink};
pub use synth::{
    synthesize, white_sample, BrownFilter, NoiseBuffer, PinkFilter, BUFFER_SECONDS,
    MAX_SAMPLE_RATE, MIN_SAMPLE_RATE,
};
