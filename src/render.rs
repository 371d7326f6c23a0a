//! Serialization of pane operations into Windows Terminal's command line.
//!
//! The output has the shape:
//!
//! ```text
//! wt [-M] -w <last|new> <shell> <cmd> ; sp <-H|-V> -s <ratio> <shell> <cmd> ; mf <dir>
//! ```
//!
//! Statements are separated by a standalone `;`. Ratios are printed with two
//! decimals. No separator trails the final statement. A `;` inside a pane's
//! command is escaped as `\;` so it reaches the pane instead of ending the
//! statement.

use crate::builder::PaneOp;
use crate::error::{MpwtError, Result};
use crate::layout::OpenMode;

/// Windows Terminal executable.
const WT: &str = "wt";
/// Statement separator in `wt` command lines.
const SEPARATOR: &str = ";";
const SPLIT_PANE: &str = "sp";
const MOVE_FOCUS: &str = "mf";

/// Global options placed ahead of the first pane.
#[derive(Debug, Clone, Copy)]
pub struct RenderFlags<'a> {
    /// Start the window maximized (`-M`).
    pub maximize: bool,
    pub open_mode: OpenMode,
    /// Wrapper each pane's command runs under, e.g. `cmd /k`.
    pub shell: &'a str,
}

/// Render `ops` into a single `wt` command string.
///
/// # Errors
///
/// Returns [`MpwtError::EmptyOutput`] if `ops` is empty.
///
/// # Examples
///
/// ```
/// use mpwt::builder::PaneOp;
/// use mpwt::layout::{Focus, OpenMode};
/// use mpwt::render::{render, RenderFlags};
///
/// let flags = RenderFlags { maximize: true, open_mode: OpenMode::NewTab, shell: "cmd /k" };
/// let ops = [PaneOp::OpenSeed("htop"), PaneOp::MoveFocus(Focus::First)];
/// assert_eq!(render(&flags, &ops).unwrap(), "wt -M -w last cmd /k htop ; mf first");
/// ```
pub fn render(flags: &RenderFlags<'_>, ops: &[PaneOp<'_>]) -> Result<String> {
    if ops.is_empty() {
        return Err(MpwtError::EmptyOutput);
    }

    let mut tokens: Vec<String> = vec![WT.to_string()];
    if flags.maximize {
        tokens.push("-M".to_string());
    }
    tokens.push("-w".to_string());
    tokens.push(flags.open_mode.window_target().to_string());

    for op in ops {
        match op {
            PaneOp::OpenSeed(command) => {
                tokens.push(pane_payload(flags.shell, command));
            }
            PaneOp::SplitWithSize {
                axis,
                ratio,
                command,
            } => {
                tokens.push(SPLIT_PANE.to_string());
                tokens.push(axis.flag().to_string());
                tokens.push("-s".to_string());
                tokens.push(format!("{:.2}", ratio));
                tokens.push(pane_payload(flags.shell, command));
            }
            PaneOp::MoveFocus(focus) => {
                tokens.push(MOVE_FOCUS.to_string());
                tokens.push(focus.as_str().to_string());
            }
        }
        tokens.push(SEPARATOR.to_string());
    }

    if tokens.last().is_some_and(|t| t == SEPARATOR) {
        tokens.pop();
    }

    Ok(tokens.join(" "))
}

/// The shell invocation that runs `command` inside a pane.
fn pane_payload(shell: &str, command: &str) -> String {
    let command = command.replace(SEPARATOR, "\\;");
    let shell = shell.trim();
    if shell.is_empty() {
        command
    } else {
        format!("{} {}", shell, command)
    }
}
