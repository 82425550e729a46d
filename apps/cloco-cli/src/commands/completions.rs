//! Generate shell completions for the cloco CLI
//!
//! ```bash
//! # Bash, in ~/.bashrc
//! eval "$(cloco completions bash)"
//!
//! # Zsh, saved into a directory on fpath
//! cloco completions zsh > ~/.zsh/completions/_cloco
//! ```
//!
//! ```fish
//! cloco completions fish > ~/.config/fish/completions/cloco.fish
//! ```

use crate::cli::Cli;
use crate::error::CliResult;
use clap::{Args, CommandFactory, ValueEnum};
use clap_complete::{generate, Shell as ClapShell};
use std::io::{self, Write};

/// Supported shells
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
}

impl Shell {
    fn to_clap_shell(self) -> ClapShell {
        match self {
            Shell::Bash => ClapShell::Bash,
            Shell::Zsh => ClapShell::Zsh,
            Shell::Fish => ClapShell::Fish,
        }
    }
}

/// Print a completion script for the given shell to stdout
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// The shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Execute the completions command
pub fn execute(args: CompletionsArgs) -> CliResult<()> {
    let mut stdout = io::stdout();
    write_completions(args.shell, &mut stdout);
    stdout.flush()?;
    Ok(())
}

fn write_completions(shell: Shell, out: &mut dyn Write) {
    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell.to_clap_shell(), &mut cmd, bin_name, out);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn script(shell: Shell) -> String {
        let mut output = Vec::new();
        write_completions(shell, &mut output);
        String::from_utf8(output).expect("valid UTF-8")
    }

    #[test]
    fn test_shell_parsing() {
        assert!(matches!(Shell::from_str("bash", true), Ok(Shell::Bash)));
        assert!(matches!(Shell::from_str("ZSH", true), Ok(Shell::Zsh)));
        assert!(Shell::from_str("powershell", true).is_err());
    }

    #[test]
    fn test_bash_completions() {
        let script = script(Shell::Bash);
        assert!(script.contains("cloco"));
        assert!(script.contains("complete"));
    }

    #[test]
    fn test_zsh_completions_list_subcommands() {
        let script = script(Shell::Zsh);
        assert!(script.contains("#compdef cloco"));
        assert!(script.contains("subscription"));
        assert!(script.contains("configuration"));
    }

    #[test]
    fn test_fish_completions() {
        let script = script(Shell::Fish);
        assert!(script.contains("complete -c cloco"));
    }
}
