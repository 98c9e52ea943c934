//! Shell completions generation.
//!
//! Generates shell completion scripts for bash, zsh, fish, `PowerShell` and
//! elvish.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::Cli;
use crate::error::BeSoberError;

/// Generate the completion script for `shell`.
///
/// # Errors
///
/// Returns `BeSoberError::Parse` if the generated script is not UTF-8.
pub fn completions(shell: Shell) -> Result<String, BeSoberError> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "besober", &mut buf);
    String::from_utf8(buf).map_err(|e| BeSoberError::Parse(format!("UTF-8 error: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_bash_completions() {
        let script = completions(Shell::Bash).unwrap();
        assert!(script.contains("besober"));
        assert!(script.contains("complete"));
    }

    #[test]
    fn test_generate_zsh_completions() {
        let script = completions(Shell::Zsh).unwrap();
        assert!(script.contains("besober"));
    }

    #[test]
    fn test_generate_fish_completions() {
        let script = completions(Shell::Fish).unwrap();
        assert!(script.contains("counter"));
    }
}
