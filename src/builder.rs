//! Pane operation sequence for a column grid.
//!
//! The grid is built in two levels. The tree level opens one region per
//! column by splitting along the axis opposite the requested direction. The
//! leaf level then fills each region with the rest of its group by
//! splitting along the requested direction.
//!
//! Every split opens the new pane as a fraction of the focused pane and
//! moves focus into it. After the tree level the last column is focused, so
//! leaves are filled from the last column back to the first, stepping focus
//! backwards between columns.
//!
//! ```text
//! direction = Horizontal, 5 commands, 2 columns
//!
//! +--------+--------+
//! | echo 1 | echo 4 |
//! +--------+        |
//! | echo 2 +--------+
//! +--------+ echo 5 |
//! | echo 3 |        |
//! +--------+--------+
//! ```

use crate::error::{MpwtError, Result};
use crate::grouper::CommandGroup;
use crate::layout::{Direction, Focus};
use crate::splitter;

/// One step of building the pane grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaneOp<'a> {
    /// Open the first pane running `command`.
    OpenSeed(&'a str),
    /// Split the focused pane along `axis`, giving `ratio` of it to a new
    /// pane running `command`.
    SplitWithSize {
        axis: Direction,
        ratio: f64,
        command: &'a str,
    },
    /// Move focus to a neighbouring pane.
    MoveFocus(Focus),
}

/// Build the operation sequence for `groups` laid out along `direction`.
///
/// Focus steps between columns are only emitted ahead of a column that
/// still has leaf splits to do, so no trailing moves are left dangling. The
/// sequence always ends with a move to the first pane.
///
/// # Errors
///
/// Returns [`MpwtError::EmptyCommands`] if `groups` is empty, or
/// [`MpwtError::InvalidCount`] if a split series is requested for no panes.
pub fn build<'a>(groups: &[CommandGroup<'a>], direction: Direction) -> Result<Vec<PaneOp<'a>>> {
    let Some(first) = groups.first() else {
        return Err(MpwtError::EmptyCommands);
    };

    let tree_axis = direction.opposite();
    let mut ops = vec![PaneOp::OpenSeed(first.head())];

    if groups.len() > 1 {
        let tree_sizes = splitter::sizes(groups.len())?;
        for (group, ratio) in groups.iter().zip(tree_sizes).skip(1) {
            ops.push(PaneOp::SplitWithSize {
                axis: tree_axis,
                ratio,
                command: group.head(),
            });
        }
    }

    let mut pending_moves = 0;
    for (i, group) in groups.iter().enumerate().rev() {
        let rest = group.rest();
        if !rest.is_empty() {
            ops.extend(std::iter::repeat_n(
                PaneOp::MoveFocus(tree_axis.backward()),
                pending_moves,
            ));
            pending_moves = 0;

            let leaf_sizes = splitter::sizes(rest.len())?;
            for (command, ratio) in rest.iter().zip(leaf_sizes) {
                ops.push(PaneOp::SplitWithSize {
                    axis: direction,
                    ratio,
                    command: command.as_str(),
                });
            }
        }
        if i > 0 {
            pending_moves += 1;
        }
    }

    ops.push(PaneOp::MoveFocus(Focus::First));
    Ok(ops)
}
