//! Shell completions generation.
//!
//! Generates shell completion scripts for bash, zsh, fish, and PowerShell.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::Cli;
use crate::error::FlowtimeError;

/// Generate completions, or installation instructions with `install`.
///
/// # Errors
///
/// Returns `Parse` for an unknown shell name.
pub fn completions(shell: &str, install: bool) -> Result<String, FlowtimeError> {
    let shell = shell_from_str(shell).ok_or_else(|| {
        FlowtimeError::Parse(format!(
            "unknown shell '{shell}'. Supported: bash, zsh, fish, powershell, elvish"
        ))
    })?;

    if install {
        Ok(completion_install_instructions(shell))
    } else {
        generate_completions(shell)
    }
}

/// Generate the completion script for `shell`.
///
/// # Errors
///
/// Returns `Parse` if the generated script is not UTF-8.
pub fn generate_completions(shell: Shell) -> Result<String, FlowtimeError> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "flowtime", &mut buf);
    String::from_utf8(buf).map_err(|e| FlowtimeError::Parse(format!("UTF-8 error: {e}")))
}

/// Get shell from string name.
#[must_use]
pub fn shell_from_str(s: &str) -> Option<Shell> {
    match s.to_lowercase().as_str() {
        "bash" => Some(Shell::Bash),
        "zsh" => Some(Shell::Zsh),
        "fish" => Some(Shell::Fish),
        "powershell" | "ps" | "pwsh" => Some(Shell::PowerShell),
        "elvish" => Some(Shell::Elvish),
        _ => None,
    }
}

/// Get installation instructions for shell completions.
#[must_use]
pub fn completion_install_instructions(shell: Shell) -> String {
    match shell {
        Shell::Bash => r"# Add to ~/.bashrc:
source <(flowtime completions bash)
"
        .to_string(),

        Shell::Zsh => r"# Save to your fpath:
flowtime completions zsh > ~/.zsh/completions/_flowtime
# Then add to ~/.zshrc (before compinit):
fpath=(~/.zsh/completions $fpath)
"
        .to_string(),

        Shell::Fish => r"# Save to fish completions directory:
flowtime completions fish > ~/.config/fish/completions/flowtime.fish
"
        .to_string(),

        Shell::PowerShell => r"# Add to your PowerShell profile ($PROFILE):
flowtime completions powershell | Out-String | Invoke-Expression
"
        .to_string(),

        Shell::Elvish => r"# Add to ~/.config/elvish/rc.elv:
eval (flowtime completions elvish | slurp)
"
        .to_string(),

        _ => format!("# Run: flowtime completions {shell}\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_from_str() {
        assert_eq!(shell_from_str("bash"), Some(Shell::Bash));
        assert_eq!(shell_from_str("ZSH"), Some(Shell::Zsh));
        assert_eq!(shell_from_str("pwsh"), Some(Shell::PowerShell));
        assert_eq!(shell_from_str("tcsh"), None);
    }

    #[test]
    fn test_generate_bash() {
        let script = completions("bash", false).unwrap();
        assert!(script.contains("flowtime"));
        assert!(script.contains("recommend"));
    }

    #[test]
    fn test_install_instructions() {
        let text = completions("fish", true).unwrap();
        assert!(text.contains("flowtime.fish"));
    }

    #[test]
    fn test_unknown_shell() {
        assert!(completions("tcsh", false).is_err());
    }
}
