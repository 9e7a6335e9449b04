//! Command-line argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Menuboard - terminal menu with per-dish order counters
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to a config.toml (defaults to the user config directory)
    #[arg(short, long, global = true, env = crate::constants::CONFIG_ENV_VAR)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Print the menu and exit
    Menu {
        /// Emit JSON instead of plain text
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_runs_screen() {
        let args = Args::try_parse_from(["menuboard"]).unwrap();
        assert!(args.command.is_none());
    }

    #[test]
    fn test_menu_json_flag() {
        let args = Args::try_parse_from(["menuboard", "menu", "--json"]).unwrap();
        assert_eq!(args.command, Some(Commands::Menu { json: true }));
    }

    #[test]
    fn test_config_flag_after_subcommand() {
        let args =
            Args::try_parse_from(["menuboard", "menu", "--config", "/tmp/menu.toml"]).unwrap();
        assert_eq!(args.config, Some(PathBuf::from("/tmp/menu.toml")));
    }
}
