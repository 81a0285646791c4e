//! Command-line shell for cliptrail.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Records clipboard text history and exposes it to the terminal.
#[derive(Debug, Parser)]
#[command(name = "cliptrail")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config directory holding the database, config.toml and logs
    #[arg(long, global = true, value_name = "PATH")]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// The subcommand to run; `run` when none was given.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Run)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Watch the clipboard and listen for the global hotkey until Ctrl-C
    Run,

    /// Print the clipboard history, newest first
    List {
        /// Print the history as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Flag a record as secret
    MarkSecret {
        /// Record key (content hash)
        #[arg(value_name = "KEY")]
        key: String,
    },

    /// Delete the whole clipboard history
    Clear,

    /// Put text back on the clipboard without recording it again.
    ///
    /// On Linux the command keeps running until another client takes over
    /// the clipboard.
    Copy {
        #[arg(value_name = "TEXT")]
        text: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_run() {
        let cli = Cli::parse_from(["cliptrail"]);
        assert_eq!(cli.command(), Command::Run);
        assert!(cli.config_dir.is_none());
    }

    #[test]
    fn parses_list_json_with_global_config_dir() {
        let cli = Cli::parse_from(["cliptrail", "list", "--json", "--config-dir", "/tmp/ct"]);
        assert_eq!(cli.command(), Command::List { json: true });
        assert_eq!(cli.config_dir, Some(PathBuf::from("/tmp/ct")));
    }

    #[test]
    fn parses_mark_secret_key() {
        let cli = Cli::parse_from(["cliptrail", "mark-secret", "abc123"]);
        assert_eq!(
            cli.command(),
            Command::MarkSecret {
                key: "abc123".to_string()
            }
        );
    }

    #[test]
    fn clap_definition_is_consistent() {
        use clap::CommandFactory;
        <Cli as CommandFactory>::command().debug_assert();
    }
}
