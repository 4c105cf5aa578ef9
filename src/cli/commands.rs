//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "moodlog")]
#[command(about = "Personal mood journal: one mood per day", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new mood journal
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Log today's mood
    Log {
        /// Mood emoji or alias (happy, neutral, sad, angry, tired)
        mood: String,

        /// Optional note
        #[arg(short, long, default_value = "")]
        note: String,
    },

    /// Show whether today is logged and the most recent entries
    Status {
        /// Number of recent entries (default: recent_limit from config)
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Show all entries, most recent first
    History {
        /// Maximum number of entries to show
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Show how often each mood was logged
    Stats,

    /// List the selectable moods
    Moods,

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
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
    fn test_parse_log_with_note() {
        let cli = Cli::try_parse_from(["moodlog", "log", "happy", "--note", "sunny"]).unwrap();
        match cli.command {
            Some(Commands::Log { mood, note }) => {
                assert_eq!(mood, "happy");
                assert_eq!(note, "sunny");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_no_command_is_dashboard() {
        let cli = Cli::try_parse_from(["moodlog", "-v"]).unwrap();
        assert!(cli.verbose);
        assert!(cli.command.is_none());
    }
}
