use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::features::noise::NoiseKind;

#[derive(Parser)]
#[command(name = "flowtime")]
#[command(about = "A flowtime work/break timer with colored background noise")]
#[command(long_about = "flowtime - work until you're done, then rest a fifth as long

Start a work session on a task, take a break when you lose focus, and get a
recommended break of one fifth of the time you worked. Optional white, pink
or brown noise helps mask distractions.

QUICK START:
  flowtime                       Open the timer
  flowtime tui --task \"Report\"   Open the timer and start working
  flowtime recommend 1h30m       How long a break does 90 minutes earn?
  flowtime noise pink            Play pink noise

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Defaults to `general.default_output` from the config file.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Config file to use instead of ~/.flowtime/config.yaml
    #[arg(long, global = true, env = "FLOWTIME_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive timer (default)
    ///
    /// Keys:
    ///   s / Enter   start working (type the task, Enter to confirm)
    ///   b           take a break
    ///   x           stop the timer
    ///   1 / 2 / 3   toggle white / pink / brown noise
    ///   0           stop noise
    ///   + / -       volume up / down
    ///   q / Esc     quit
    ///
    /// # Examples
    ///
    ///   flowtime tui
    ///   flowtime tui --task "Write report" --noise brown
    #[command(alias = "t")]
    Tui(TuiArgs),

    /// Show the break earned by a stretch of work
    ///
    /// The break is one fifth of the work time, rounded up to the second.
    /// A bare number is read as minutes.
    ///
    /// # Examples
    ///
    ///   flowtime recommend 50        50 minutes of work
    ///   flowtime recommend 2h10m
    ///   flowtime recommend 130s -o json
    #[command(alias = "r")]
    Recommend {
        /// Work duration (e.g. 25m, 1h30m, 90s)
        duration: String,
    },

    /// Play background noise without the timer
    ///
    /// Sound needs a build with the `audio` feature
    /// (`cargo install flowtime --features audio`). Without it this command
    /// reports that audio is unavailable.
    ///
    /// # Examples
    ///
    ///   flowtime noise brown
    ///   flowtime noise pink --volume 0.3 --duration 45m
    #[command(alias = "n")]
    Noise(NoiseArgs),

    /// Inspect or create the configuration file
    Config(ConfigArgs),

    /// Generate shell completions
    ///
    /// # Examples
    ///
    ///   flowtime completions zsh > ~/.zsh/completions/_flowtime
    ///   flowtime completions bash --install
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        shell: String,

        /// Show installation instructions
        #[arg(long, short = 'i')]
        install: bool,
    },
}

/// Arguments for the interactive timer.
#[derive(Args, Debug, Default, Clone)]
pub struct TuiArgs {
    /// Start working on this task right away
    #[arg(long, short = 't')]
    pub task: Option<String>,

    /// Start this noise right away (overrides noise.default_kind)
    #[arg(long, short = 'n', value_enum)]
    pub noise: Option<NoiseKind>,
}

/// Arguments for headless noise playback.
#[derive(Args, Debug, Clone)]
pub struct NoiseArgs {
    /// Noise color
    #[arg(value_enum)]
    pub kind: NoiseKind,

    /// Volume between 0.0 and 1.0 (defaults to noise.volume)
    #[arg(long, short = 'v')]
    pub volume: Option<f32>,

    /// How long to play (e.g. 25m, 1h)
    #[arg(long, short = 'd', default_value = "25m")]
    pub duration: String,
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

/// Configuration subcommands.
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,

    /// Print the config file location
    Path,

    /// Write a config file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_means_tui() {
        let cli = Cli::try_parse_from(["flowtime"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.output.is_none());
    }

    #[test]
    fn test_parse_noise_args() {
        let cli =
            Cli::try_parse_from(["flowtime", "noise", "pink", "--volume", "0.3", "-d", "10m"])
                .unwrap();
        match cli.command {
            Some(Commands::Noise(args)) => {
                assert_eq!(args.kind, NoiseKind::Pink);
                assert_eq!(args.volume, Some(0.3));
                assert_eq!(args.duration, "10m");
            }
            _ => panic!("expected noise command"),
        }
    }

    #[test]
    fn test_parse_tui_args() {
        let cli = Cli::try_parse_from(["flowtime", "tui", "--task", "Write", "--noise", "brown"])
            .unwrap();
        match cli.command {
            Some(Commands::Tui(args)) => {
                assert_eq!(args.task.as_deref(), Some("Write"));
                assert_eq!(args.noise, Some(NoiseKind::Brown));
            }
            _ => panic!("expected tui command"),
        }
    }

    #[test]
    fn test_global_output_flag() {
        let cli = Cli::try_parse_from(["flowtime", "recommend", "25m", "-o", "json"]).unwrap();
        assert_eq!(cli.output, Some(OutputFormat::Json));
    }
}
