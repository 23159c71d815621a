//! Headless noise playback.

use std::thread;

use tracing::info;

use crate::cli::args::{NoiseArgs, OutputFormat};
use crate::config::Config;
use crate::core::parse_duration;
use crate::error::FlowtimeError;
use crate::features::noise::{open_default_sink, NoiseGenerator};
use crate::output::format_noise;

/// Play noise for the requested duration, then stop.
///
/// # Errors
///
/// Returns `Parse` for a bad duration, `InvalidInput` for a bad volume and
/// `AudioUnavailable` if nothing can be played.
pub fn noise(args: &NoiseArgs, config: &Config, format: OutputFormat) -> Result<String, FlowtimeError> {
    let duration = parse_duration(&args.duration).ok_or_else(|| {
        FlowtimeError::Parse(format!(
            "invalid duration '{}'. Use formats like: 25m, 1h30m, 90s",
            args.duration
        ))
    })?;
    let wait = duration
        .to_std()
        .map_err(|e| FlowtimeError::Parse(format!("invalid duration: {e}")))?;

    let mut generator = NoiseGenerator::new(open_default_sink(config.noise.sample_rate));
    generator.set_volume(args.volume.unwrap_or(config.noise.volume))?;
    generator.play(args.kind)?;

    info!(kind = %args.kind, seconds = wait.as_secs(), "playing noise headless");
    thread::sleep(wait);
    generator.stop();

    format_noise(args.kind, generator.volume(), wait.as_secs(), format)
}
