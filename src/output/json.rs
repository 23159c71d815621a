//! JSON output formatting for flowtime.

use serde::Serialize;
use serde_json::json;

use crate::config::Config;
use crate::error::FlowtimeError;
use crate::features::flowtime::BreakRecommendation;
use crate::features::noise::NoiseKind;

/// Format a break recommendation as JSON.
///
/// # Errors
///
/// Returns `FlowtimeError::Parse` if JSON serialization fails.
pub fn format_recommendation_json(rec: &BreakRecommendation) -> Result<String, FlowtimeError> {
    to_json(rec)
}

/// Format the effective configuration as JSON.
///
/// # Errors
///
/// Returns `FlowtimeError::Parse` if JSON serialization fails.
pub fn format_config_json(config: &Config, path: &std::path::Path) -> Result<String, FlowtimeError> {
    let output = json!({
        "path": path,
        "exists": path.exists(),
        "config": config,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format the result of a noise playback run as JSON.
///
/// # Errors
///
/// Returns `FlowtimeError::Parse` if JSON serialization fails.
pub fn format_noise_json(
    kind: NoiseKind,
    volume: f32,
    played_seconds: u64,
) -> Result<String, FlowtimeError> {
    let output = json!({
        "kind": kind,
        "volume": volume,
        "played_seconds": played_seconds,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Serialize any value as pretty JSON.
///
/// # Errors
///
/// Returns `FlowtimeError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, FlowtimeError> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommendation_json() {
        let json = format_recommendation_json(&BreakRecommendation::for_work(130)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["work_seconds"], 130);
        assert_eq!(value["break_seconds"], 26);
        assert_eq!(value["recommended_break"], "00:00:26");
    }

    #[test]
    fn test_noise_json() {
        let json = format_noise_json(NoiseKind::Brown, 0.5, 10).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["kind"], "brown");
        assert_eq!(value["played_seconds"], 10);
    }
}
