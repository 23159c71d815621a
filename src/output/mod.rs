//! Output formatting for flowtime.
//!
//! This module provides formatters for command results in pretty or JSON form.

mod json;
mod pretty;

use std::path::Path;

use crate::cli::args::OutputFormat;
use crate::config::Config;
use crate::error::FlowtimeError;
use crate::features::flowtime::BreakRecommendation;
use crate::features::noise::NoiseKind;

pub use json::*;
pub use pretty::*;

/// Format a break recommendation based on output format
///
/// # Errors
///
/// Returns `FlowtimeError::Parse` if JSON serialization fails.
pub fn format_recommendation(
    rec: &BreakRecommendation,
    format: OutputFormat,
) -> Result<String, FlowtimeError> {
    match format {
        OutputFormat::Pretty => Ok(format_recommendation_pretty(rec)),
        OutputFormat::Json => format_recommendation_json(rec),
    }
}

/// Format the configuration based on output format
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn format_config(config: &Config, path: &Path, format: OutputFormat) -> Result<String, FlowtimeError> {
    match format {
        OutputFormat::Pretty => Ok(format_config_pretty(config, path, &config.to_yaml()?)),
        OutputFormat::Json => format_config_json(config, path),
    }
}

/// Format a noise playback summary based on output format
///
/// # Errors
///
/// Returns `FlowtimeError::Parse` if JSON serialization fails.
pub fn format_noise(
    kind: NoiseKind,
    volume: f32,
    played_seconds: u64,
    format: OutputFormat,
) -> Result<String, FlowtimeError> {
    match format {
        OutputFormat::Pretty => Ok(format_noise_pretty(kind, volume, played_seconds)),
        OutputFormat::Json => format_noise_json(kind, volume, played_seconds),
    }
}
