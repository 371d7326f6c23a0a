//! Configuration types for mpwt.
//!
//! The config holds the display options applied to every launch. Commands
//! themselves are entered per launch and are not part of the file.
//!
//! # Config Format
//!
//! ```toml
//! # Start Windows Terminal maximized
//! maximize = true
//!
//! # Split direction inside each column: "horizontal" or "vertical"
//! direction = "horizontal"
//!
//! # Number of columns the panes are spread over
//! columns = 2
//!
//! # Open in a new tab of the last window instead of a new window
//! open_in_new_tab = false
//!
//! # Wrapper each pane's command runs under
//! shell = "cmd /k"
//! ```

use crate::error::{MpwtError, Result};
use crate::layout::{DEFAULT_SHELL, Direction, LayoutRequest, OpenMode};
use serde::Deserialize;

/// Written on first run when no config file exists.
pub const DEFAULT_CONFIG: &str = r#"# mpwt configuration

# Start Windows Terminal maximized
maximize = true

# Split direction inside each column: "horizontal" or "vertical"
direction = "horizontal"

# Number of columns the panes are spread over (minimum: 1)
columns = 2

# Open in a new tab of the last window instead of a new window
open_in_new_tab = false

# Wrapper each pane's command runs under
shell = "cmd /k"
"#;

fn default_shell() -> String {
    DEFAULT_SHELL.to_string()
}

/// Top-level configuration structure.
///
/// Parsed from `~/.config/mpwt/config.toml` (or XDG equivalent).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    /// Start the window maximized.
    #[serde(default)]
    pub maximize: bool,
    /// Split direction inside each column.
    pub direction: Direction,
    /// Number of columns.
    pub columns: usize,
    /// Open in a new tab instead of a new window.
    #[serde(default)]
    pub open_in_new_tab: bool,
    /// Shell wrapper for each pane. Empty runs commands as-is.
    #[serde(default = "default_shell")]
    pub shell: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            maximize: true,
            direction: Direction::Horizontal,
            columns: 2,
            open_in_new_tab: false,
            shell: default_shell(),
        }
    }
}

impl Config {
    /// Parse and validate config from a TOML string.
    ///
    /// # Errors
    ///
    /// - [`MpwtError::ParseError`] if the TOML is malformed or a field is
    ///   missing or mistyped
    /// - [`MpwtError::InvalidConfig`] if a value is out of range
    pub fn from_str(toml_str: &str) -> Result<Self> {
        let config: Config = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Check values serde cannot.
    pub fn validate(&self) -> Result<()> {
        if self.columns < 1 {
            return Err(MpwtError::InvalidConfig(
                "columns must be specified (minimum: 1)".into(),
            ));
        }
        Ok(())
    }

    /// The open mode selected by `open_in_new_tab`.
    pub fn open_mode(&self) -> OpenMode {
        OpenMode::from_new_tab(self.open_in_new_tab)
    }

    /// Build a layout request for `commands` using these options.
    pub fn request(&self, commands: Vec<String>) -> LayoutRequest {
        LayoutRequest::new(commands)
            .with_maximize(self.maximize)
            .with_direction(self.direction)
            .with_columns(self.columns)
            .with_open_mode(self.open_mode())
            .with_shell(self.shell.clone())
    }
}
