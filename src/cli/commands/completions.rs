//! Shell completion scripts for the `timeline` binary.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::Cli;
use crate::error::TimelineError;

/// Execute completions command
///
/// With `install`, prints a one-line hint for loading the script instead.
///
/// # Errors
///
/// Returns `TimelineError::InvalidArgument` if the generated script is not UTF-8.
pub fn completions(shell: Shell, install: bool) -> Result<String, TimelineError> {
    if install {
        return Ok(install_hint(shell));
    }

    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut Cli::command(), "timeline", &mut buf);
    String::from_utf8(buf).map_err(|e| TimelineError::InvalidArgument(format!("UTF-8 error: {e}")))
}

fn install_hint(shell: Shell) -> String {
    match shell {
        Shell::Fish => "timeline completions fish > ~/.config/fish/completions/timeline.fish".to_string(),
        Shell::PowerShell => "timeline completions powershell | Out-String | Invoke-Expression".to_string(),
        other => format!("source <(timeline completions {other})"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bash_script_mentions_subcommands() {
        let script = completions(Shell::Bash, false).unwrap();
        assert!(script.contains("timeline"));
        assert!(script.contains("show"));
        assert!(script.contains("categories"));
    }

    #[test]
    fn test_install_hint() {
        assert_eq!(completions(Shell::Zsh, true).unwrap(), "source <(timeline completions zsh)");
        assert!(completions(Shell::Fish, true).unwrap().contains("timeline.fish"));
    }
}
