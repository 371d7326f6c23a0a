//! Launching Windows Terminal.
//!
//! The rendered `wt` string is handed to `cmd /C` as a single argument so
//! that `cmd` performs the same word splitting a user typing it at a prompt
//! would get. The launch returns once `cmd` exits; the panes keep running
//! under Windows Terminal.

use crate::error::{MpwtError, Result};
use std::process::Command;

/// Shell used to run the rendered command line.
const LAUNCH_SHELL: &str = "cmd";

/// Build the process that runs `rendered`.
pub fn command(rendered: &str) -> Command {
    let mut cmd = Command::new(LAUNCH_SHELL);
    cmd.args(["/C", rendered]);
    cmd
}

/// Run `rendered` and wait for the launching shell to exit.
///
/// # Errors
///
/// Returns [`MpwtError::LaunchError`] if the shell cannot be started or
/// exits unsuccessfully.
pub fn launch(rendered: &str) -> Result<()> {
    tracing::debug!(command = rendered, "launching windows terminal");

    let status = command(rendered)
        .status()
        .map_err(|e| MpwtError::LaunchError(e.to_string()))?;

    if !status.success() {
        return Err(MpwtError::LaunchError(format!(
            "{} /C exited with {}",
            LAUNCH_SHELL, status
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    #[test]
    fn test_command_passes_rendered_string_whole() {
        let rendered = "wt -w new cmd /k echo 1 ; mf first";
        let cmd = command(rendered);
        assert_eq!(cmd.get_program(), OsStr::new("cmd"));
        let args: Vec<_> = cmd.get_args().collect();
        assert_eq!(args, vec![OsStr::new("/C"), OsStr::new(rendered)]);
    }
}
