use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "toktui")]
#[command(version)]
#[command(about = "Display a token in the terminal and copy it to the clipboard", long_about = None)]
pub struct Cli {
    /// Token to display, given directly on the command line
    pub token: Option<String>,

    /// Read the token from a file and track changes to it
    #[arg(short, long, conflicts_with = "token")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the token to stdout without entering the TUI
    Show,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_inline_token() {
        let cli = Cli::parse_from(["toktui", "abc123"]);
        assert_eq!(cli.token.as_deref(), Some("abc123"));
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_parse_file_flag() {
        let cli = Cli::parse_from(["toktui", "--file", "token.txt"]);
        assert!(cli.token.is_none());
        assert_eq!(cli.file.as_deref(), Some(std::path::Path::new("token.txt")));
    }

    #[test]
    fn test_parse_show_subcommand() {
        let cli = Cli::parse_from(["toktui", "--file", "token.txt", "show"]);
        assert!(matches!(cli.command, Some(Commands::Show)));
        assert!(cli.file.is_some());
    }

    #[test]
    fn test_token_and_file_conflict() {
        assert!(Cli::try_parse_from(["toktui", "abc123", "--file", "token.txt"]).is_err());
    }
}
