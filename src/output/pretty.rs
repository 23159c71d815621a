use colored::Colorize;

use crate::config::Config;
use crate::core::format_duration;
use crate::features::flowtime::BreakRecommendation;
use crate::features::noise::NoiseKind;

// Far beyond any real session; keeps chrono's constructor in range.
const MAX_DISPLAY_SECONDS: i64 = 1_000_000_000_000;

fn seconds(n: u64) -> chrono::Duration {
    chrono::Duration::seconds(i64::try_from(n).unwrap_or(i64::MAX).min(MAX_DISPLAY_SECONDS))
}

/// Format a break recommendation for the terminal.
pub fn format_recommendation_pretty(rec: &BreakRecommendation) -> String {
    let output = [
        format!(
            "Worked:            {}  ({})",
            rec.work.bold(),
            format_duration(seconds(rec.work_seconds))
        ),
        format!(
            "Recommended break: {}  ({})",
            rec.recommended_break.green().bold(),
            format_duration(seconds(rec.break_seconds))
        ),
    ];
    output.join("\n")
}

/// Format the configuration with its location.
pub fn format_config_pretty(config: &Config, path: &std::path::Path, yaml: &str) -> String {
    let mut output = format!("{} {}", "Config file:".bold(), path.display());
    if !path.exists() {
        output.push_str(&format!(" {}", "(not created, showing defaults)".dimmed()));
    }
    output.push('\n');
    output.push_str(&"─".repeat(60));
    output.push('\n');
    output.push_str(yaml.trim_end());

    if config.noise.default_kind.is_none() {
        output.push('\n');
        output.push_str(
            &"Tip: set noise.default_kind to start noise with the timer"
                .dimmed()
                .to_string(),
        );
    }
    output
}

/// Format the summary printed after headless noise playback.
pub fn format_noise_pretty(kind: NoiseKind, volume: f32, played_seconds: u64) -> String {
    format!(
        "{} {} noise for {} at {:.0}% volume",
        "Played".green(),
        kind.display_name().bold(),
        format_duration(seconds(played_seconds)),
        volume * 100.0
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommendation_pretty() {
        colored::control::set_override(false);
        let text = format_recommendation_pretty(&BreakRecommendation::for_work(130));
        assert!(text.contains("00:02:10"));
        assert!(text.contains("00:00:26"));
        assert!(text.contains("26 seconds"));
    }

    #[test]
    fn test_noise_pretty() {
        colored::control::set_override(false);
        let text = format_noise_pretty(NoiseKind::Pink, 0.5, 90);
        assert_eq!(text, "Played Pink noise for 1 minute, 30 seconds at 50% volume");
    }
}
