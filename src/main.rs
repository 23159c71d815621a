use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use flowtime::cli::args::{Cli, Commands, TuiArgs};
use flowtime::cli::commands;
use flowtime::config::{Config, Paths};
use flowtime::logging::{self, LogTarget};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {:#}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let paths = Paths::default();
    let config_path = cli.config.clone().unwrap_or_else(|| paths.config_file.clone());
    let config = Config::load_from_path(&config_path)?;
    config.general.color.apply();

    let format = cli.output.unwrap_or(config.general.default_output);
    let command = cli.command.unwrap_or_else(|| Commands::Tui(TuiArgs::default()));

    // The TUI owns the terminal, so its logs go to a file.
    let log_file = config
        .logging
        .file
        .clone()
        .unwrap_or_else(|| paths.log_file.clone());
    let target = if matches!(command, Commands::Tui(_)) {
        LogTarget::File(&log_file)
    } else {
        LogTarget::Stderr
    };
    logging::init(&config.logging, target).context("initializing logging")?;

    let output = match command {
        Commands::Tui(args) => {
            flowtime::tui::run(&args, &config)?;
            String::new()
        }
        Commands::Recommend { duration } => commands::recommend(&duration, format)?,
        Commands::Noise(args) => commands::noise(&args, &config, format)?,
        Commands::Config(args) => commands::config(&args.command, &config, &config_path, format)?,
        Commands::Completions { shell, install } => commands::completions(&shell, install)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
