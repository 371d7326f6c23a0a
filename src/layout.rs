//! Layout requests and the one-call synthesis entry point.
//!
//! A [`LayoutRequest`] bundles the commands a user typed with the display
//! options from config. [`synthesize`] runs it through the grouper, the
//! tree builder and the renderer and hands back the `wt` command string.

use crate::builder;
use crate::error::{MpwtError, Result};
use crate::grouper;
use crate::log::Logger;
use crate::render::{self, RenderFlags};
use serde::{Deserialize, Serialize};

/// Default shell wrapper each pane's command runs under.
pub const DEFAULT_SHELL: &str = "cmd /k";

/// Split axis, as named by Windows Terminal's `split-pane` flags.
///
/// - `Horizontal` (`-H`): the new pane opens below, panes stack
/// - `Vertical` (`-V`): the new pane opens to the right, panes sit side by side
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Stacked panes (`-H`).
    #[default]
    Horizontal,
    /// Side-by-side panes (`-V`).
    Vertical,
}

impl Direction {
    /// The other axis. Columns are laid out along it.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Horizontal => Direction::Vertical,
            Direction::Vertical => Direction::Horizontal,
        }
    }

    /// The `split-pane` flag for this axis.
    pub fn flag(self) -> &'static str {
        match self {
            Direction::Horizontal => "-H",
            Direction::Vertical => "-V",
        }
    }

    /// Focus direction that steps back to the previous pane created by a
    /// split along this axis.
    pub fn backward(self) -> Focus {
        match self {
            Direction::Vertical => Focus::Left,
            Direction::Horizontal => Focus::Up,
        }
    }
}

/// Targets for `move-focus`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Left,
    Right,
    Up,
    Down,
    /// The first pane of the tab.
    First,
}

impl Focus {
    pub fn as_str(self) -> &'static str {
        match self {
            Focus::Left => "left",
            Focus::Right => "right",
            Focus::Up => "up",
            Focus::Down => "down",
            Focus::First => "first",
        }
    }
}

/// Where the new panes are opened.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum OpenMode {
    /// A new tab in the most recently used window (`-w last`).
    NewTab,
    /// A fresh window (`-w new`).
    #[default]
    NewWindow,
}

impl OpenMode {
    /// Map the config's `open_in_new_tab` switch.
    pub fn from_new_tab(new_tab: bool) -> Self {
        if new_tab {
            OpenMode::NewTab
        } else {
            OpenMode::NewWindow
        }
    }

    /// The value passed to `wt -w`.
    pub fn window_target(self) -> &'static str {
        match self {
            OpenMode::NewTab => "last",
            OpenMode::NewWindow => "new",
        }
    }
}

/// Everything needed to synthesize one `wt` invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutRequest {
    pub maximize: bool,
    pub direction: Direction,
    pub columns: usize,
    pub open_mode: OpenMode,
    pub shell: String,
    pub commands: Vec<String>,
}

impl LayoutRequest {
    /// Create a request with default display options.
    pub fn new(commands: Vec<String>) -> Self {
        Self {
            maximize: false,
            direction: Direction::default(),
            columns: 1,
            open_mode: OpenMode::default(),
            shell: DEFAULT_SHELL.to_string(),
            commands,
        }
    }

    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns;
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_maximize(mut self, maximize: bool) -> Self {
        self.maximize = maximize;
        self
    }

    pub fn with_open_mode(mut self, open_mode: OpenMode) -> Self {
        self.open_mode = open_mode;
        self
    }

    pub fn with_shell(mut self, shell: impl Into<String>) -> Self {
        self.shell = shell.into();
        self
    }

    fn flags(&self) -> RenderFlags<'_> {
        RenderFlags {
            maximize: self.maximize,
            open_mode: self.open_mode,
            shell: &self.shell,
        }
    }
}

/// Split user-entered text into one command per non-blank line.
///
/// Carriage returns and surrounding whitespace are stripped.
///
/// # Errors
///
/// Returns [`MpwtError::EmptyCommands`] if no line holds a command.
pub fn parse_commands(text: &str) -> Result<Vec<String>> {
    let commands: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect();

    if commands.is_empty() {
        return Err(MpwtError::EmptyCommands);
    }
    Ok(commands)
}

/// Turn a request into the `wt` command string that opens its pane grid.
///
/// The logger, when given, receives the intermediate groups and operations
/// at debug level. It has no effect on the result.
///
/// # Errors
///
/// - [`MpwtError::EmptyCommands`] if the request has no commands
/// - [`MpwtError::InvalidCount`] if `columns` is zero
/// - [`MpwtError::EmptyOutput`] if nothing was rendered
pub fn synthesize(request: &LayoutRequest, logger: Option<&dyn Logger>) -> Result<String> {
    let groups = grouper::group(&request.commands, request.columns)?;
    if let Some(log) = logger {
        let sizes: Vec<usize> = groups.iter().map(|g| g.len()).collect();
        log.debug(&format!(
            "grouped {} commands into {} columns {:?}",
            request.commands.len(),
            groups.len(),
            sizes
        ));
    }

    let ops = builder::build(&groups, request.direction)?;
    if let Some(log) = logger {
        log.debug(&format!("pane operations: {:?}", ops));
    }

    let rendered = render::render(&request.flags(), &ops)?;
    if let Some(log) = logger {
        log.info(&format!("rendered command: {}", rendered));
    }

    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Capture(RefCell<Vec<String>>);

    impl Logger for Capture {
        fn debug(&self, message: &str) {
            self.0.borrow_mut().push(format!("debug {}", message));
        }
        fn info(&self, message: &str) {
            self.0.borrow_mut().push(format!("info {}", message));
        }
        fn warn(&self, message: &str) {
            self.0.borrow_mut().push(format!("warn {}", message));
        }
        fn error(&self, message: &str) {
            self.0.borrow_mut().push(format!("error {}", message));
        }
        fn fatal(&self, message: &str) {
            self.0.borrow_mut().push(format!("fatal {}", message));
        }
    }

    #[test]
    fn test_parse_commands() {
        let cmds = parse_commands("echo 1\r\n\n  echo 2  \n").unwrap();
        assert_eq!(cmds, vec!["echo 1", "echo 2"]);
    }

    #[test]
    fn test_parse_commands_blank() {
        assert!(matches!(
            parse_commands(" \n\r\n"),
            Err(MpwtError::EmptyCommands)
        ));
    }

    #[test]
    fn test_direction_axes() {
        assert_eq!(Direction::Horizontal.opposite(), Direction::Vertical);
        assert_eq!(Direction::Vertical.backward(), Focus::Left);
        assert_eq!(Direction::Horizontal.backward(), Focus::Up);
        assert_eq!(Direction::Vertical.flag(), "-V");
    }

    #[test]
    fn test_synthesize_logger_does_not_change_output() {
        let request = LayoutRequest::new(vec!["a".into(), "b".into(), "c".into()])
            .with_columns(2)
            .with_maximize(true);
        let capture = Capture::default();

        let traced = synthesize(&request, Some(&capture)).unwrap();
        let plain = synthesize(&request, None).unwrap();

        assert_eq!(traced, plain);
        let lines = capture.0.borrow();
        assert!(lines[0].starts_with("debug grouped 3 commands into 2 columns"));
        assert!(lines.iter().any(|l| l.starts_with("info rendered command: wt -M")));
    }

    #[test]
    fn test_synthesize_empty() {
        let request = LayoutRequest::new(Vec::new());
        assert!(matches!(
            synthesize(&request, None),
            Err(MpwtError::EmptyCommands)
        ));
    }
}
