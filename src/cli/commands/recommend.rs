//! Break recommendation command.

use crate::cli::args::OutputFormat;
use crate::core::parse_duration;
use crate::error::FlowtimeError;
use crate::features::flowtime::BreakRecommendation;
use crate::output::format_recommendation;

/// Show the break earned by `duration` of work.
///
/// # Errors
///
/// Returns `Parse` if the duration cannot be read.
pub fn recommend(duration: &str, format: OutputFormat) -> Result<String, FlowtimeError> {
    let work = parse_duration(duration).ok_or_else(|| {
        FlowtimeError::Parse(format!(
            "invalid duration '{duration}'. Use formats like: 25m, 1h30m, 90s"
        ))
    })?;
    let work_seconds = u64::try_from(work.num_seconds()).unwrap_or(0);

    format_recommendation(&BreakRecommendation::for_work(work_seconds), format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommend_json() {
        let out = recommend("2m10s", OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["work_seconds"], 130);
        assert_eq!(value["break_seconds"], 26);
    }

    #[test]
    fn test_recommend_rejects_garbage() {
        assert!(matches!(
            recommend("soon", OutputFormat::Pretty),
            Err(FlowtimeError::Parse(_))
        ));
    }
}
