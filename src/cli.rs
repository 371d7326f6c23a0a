//! Command-line interface for mpwt.
//!
//! Parses arguments using clap and provides the [`Cli`] struct containing
//! all user-specified options.

use crate::config::Config;
use crate::layout::{Direction, OpenMode};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments for mpwt.
///
/// # Examples
///
/// ```bash
/// # Three panes in two columns
/// mpwt launch "npm run dev" "cargo watch -x run" "htop" -c 2
///
/// # Commands from a file, one per line, stacked side by side
/// mpwt launch -f panes.txt -v
///
/// # Re-run a saved layout
/// mpwt favourite launch dev
/// ```
#[derive(Parser, Debug)]
#[command(name = "mpwt")]
#[command(version)]
#[command(about = "Open a grid of Windows Terminal panes from a list of commands")]
#[command(long_about = "mpwt turns a list of commands into a single Windows Terminal\n\
    invocation that opens one pane per command, spread evenly over columns.\n\n\
    Launches are recorded in history and can be saved as favourites.")]
pub struct Cli {
    /// Config file to use instead of the default location.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log debug output to stderr instead of the log file.
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Open panes for a list of commands.
    ///
    /// Commands come from the positional arguments, from `--file`, or, when
    /// neither is given, from stdin (one per line).
    Launch(LaunchArgs),

    /// Show previously launched commands, newest first, or re-run one.
    History {
        /// Show at most this many entries.
        #[arg(short = 'n', long, value_name = "COUNT", conflicts_with = "launch")]
        limit: Option<usize>,

        /// Re-run a history entry (1 = most recent).
        #[arg(long, value_name = "INDEX")]
        launch: Option<usize>,

        /// Print the recorded command instead of running it.
        #[arg(long, requires = "launch")]
        dry_run: bool,
    },

    /// Manage saved launches.
    #[command(subcommand)]
    Favourite(FavouriteCommand),

    /// Inspect or replace the config file.
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Arguments for `mpwt launch`.
#[derive(Args, Debug, Default)]
pub struct LaunchArgs {
    /// Commands to run, one pane each.
    #[arg(value_name = "COMMAND")]
    pub commands: Vec<String>,

    /// Read commands from a file, one per line.
    #[arg(short, long, value_name = "FILE", conflicts_with = "commands")]
    pub file: Option<PathBuf>,

    #[command(flatten)]
    pub display: DisplayArgs,

    /// Print the rendered command instead of running it.
    #[arg(long)]
    pub dry_run: bool,
}

/// Per-launch overrides of the config's display options.
#[derive(Args, Debug, Default, Clone)]
pub struct DisplayArgs {
    /// Number of columns.
    #[arg(short, long, value_name = "COUNT")]
    pub columns: Option<usize>,

    /// Split vertically inside columns (panes side by side).
    #[arg(short = 'v', conflicts_with = "horizontal")]
    pub vertical: bool,

    /// Split horizontally inside columns (panes stacked).
    #[arg(short = 'H')]
    pub horizontal: bool,

    /// Start maximized.
    #[arg(short = 'M', long, conflicts_with = "no_maximize")]
    pub maximize: bool,

    /// Start at normal size, even if the config says maximize.
    #[arg(long)]
    pub no_maximize: bool,

    /// Open in a new tab of the last window.
    #[arg(long, conflicts_with = "window")]
    pub tab: bool,

    /// Open in a new window.
    #[arg(long)]
    pub window: bool,
}

impl DisplayArgs {
    /// Determine the direction from CLI flags.
    ///
    /// Returns `None` when neither `-v` nor `-H` was given, leaving the
    /// config's direction in place.
    pub fn direction(&self) -> Option<Direction> {
        if self.vertical {
            Some(Direction::Vertical)
        } else if self.horizontal {
            Some(Direction::Horizontal)
        } else {
            None
        }
    }

    /// Determine the open mode from CLI flags.
    pub fn open_mode(&self) -> Option<OpenMode> {
        if self.tab {
            Some(OpenMode::NewTab)
        } else if self.window {
            Some(OpenMode::NewWindow)
        } else {
            None
        }
    }

    /// Apply the given flags on top of `config`.
    pub fn apply(&self, config: &Config) -> Config {
        let mut config = config.clone();
        if let Some(columns) = self.columns {
            config.columns = columns;
        }
        if let Some(direction) = self.direction() {
            config.direction = direction;
        }
        if self.maximize {
            config.maximize = true;
        } else if self.no_maximize {
            config.maximize = false;
        }
        if let Some(mode) = self.open_mode() {
            config.open_in_new_tab = mode == OpenMode::NewTab;
        }
        config
    }
}

/// `mpwt favourite` subcommands.
#[derive(Subcommand, Debug)]
pub enum FavouriteCommand {
    /// List saved favourites.
    List,

    /// Save a launch as a favourite.
    ///
    /// Either copies a history entry or renders the given commands with the
    /// current config.
    Add {
        /// Name to save under.
        name: String,

        /// History entry to save (1 = most recent).
        ///
        /// The entry is saved exactly as it ran, so display flags cannot be
        /// combined with it.
        #[arg(
            long,
            value_name = "INDEX",
            conflicts_with_all = [
                "commands", "columns", "vertical", "horizontal",
                "maximize", "no_maximize", "tab", "window",
            ]
        )]
        from_history: Option<usize>,

        /// Commands to save, one pane each.
        #[arg(value_name = "COMMAND", required_unless_present = "from_history")]
        commands: Vec<String>,

        #[command(flatten)]
        display: DisplayArgs,
    },

    /// Delete a favourite.
    Delete {
        name: String,
    },

    /// Run a favourite.
    Launch {
        name: String,

        /// Print the saved command instead of running it.
        #[arg(long)]
        dry_run: bool,
    },
}

/// `mpwt config` subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the config file location.
    Path,
    /// Print the config file.
    Show,
    /// Replace the config file with text read from stdin.
    Write,
}
