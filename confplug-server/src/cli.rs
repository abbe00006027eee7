//! CLI argument parsing

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use confplug_utils::LogConfig;

/// Runtime-editable settings with chat commands
#[derive(Parser, Debug)]
#[command(name = "confplug-server")]
#[command(about = "Chat command host for the confplug settings store")]
#[command(version)]
pub struct Cli {
    /// Host configuration file (defaults to the XDG config dir)
    #[arg(long, env = "CONFPLUG_CONFIG")]
    pub config: Option<PathBuf>,

    /// Setting catalog, overriding store.catalog_path
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Snapshot file, overriding store.snapshot_path
    #[arg(long)]
    pub snapshot: Option<PathBuf>,

    /// Debug logging to stderr and the log file
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Logging preset for this invocation
    pub fn log_config(&self) -> LogConfig {
        if self.verbose {
            return LogConfig::development();
        }
        match self.command {
            Command::Serve { .. } => LogConfig::server(),
            _ => LogConfig::interactive(),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the setting catalog
    List,

    /// Print the current value of a setting
    Get {
        /// Setting name
        key: String,
    },

    /// Change a setting as the server console
    Set {
        /// Setting name
        key: String,
        /// New value
        value: String,
    },

    /// Read chat lines from stdin and answer settings commands
    Serve {
        /// Player name the lines are sent as
        #[arg(long, default_value = "Player")]
        player: String,

        /// Command tags the player carries (comma-separated or repeated)
        #[arg(long = "tag", value_delimiter = ',')]
        tags: Vec<String>,

        /// Send lines as the server console instead of a player
        #[arg(long, conflicts_with_all = ["player", "tags"])]
        console: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_set() {
        let cli = Cli::try_parse_from(["confplug-server", "set", "judge_mode", "1"]).unwrap();
        match cli.command {
            Command::Set { key, value } => {
                assert_eq!(key, "judge_mode");
                assert_eq!(value, "1");
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_serve_with_tags() {
        let cli = Cli::try_parse_from([
            "confplug-server",
            "--snapshot",
            "/tmp/world.json",
            "serve",
            "--player",
            "Steve",
            "--tag",
            "admin,builder",
        ])
        .unwrap();

        assert_eq!(cli.snapshot, Some(PathBuf::from("/tmp/world.json")));
        match cli.command {
            Command::Serve { player, tags, console } => {
                assert_eq!(player, "Steve");
                assert_eq!(tags, ["admin", "builder"]);
                assert!(!console);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_console_conflicts_with_player() {
        let result = Cli::try_parse_from(["confplug-server", "serve", "--console", "--player", "Steve"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_log_config_per_command() {
        use confplug_utils::LogOutput;

        let cli = Cli::try_parse_from(["confplug-server", "list"]).unwrap();
        assert_eq!(cli.log_config().output, LogOutput::Stderr);

        let cli = Cli::try_parse_from(["confplug-server", "serve"]).unwrap();
        assert_eq!(cli.log_config().output, LogOutput::File);

        let cli = Cli::try_parse_from(["confplug-server", "serve", "--verbose"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.log_config().output, LogOutput::Both);
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
