//! Partitioning commands into columns.
//!
//! Commands are cut into contiguous runs of `ceil(len / columns)`, keeping
//! their input order. Only the last group can come up short.
//!
//! When `columns` exceeds the number of commands, every command gets its
//! own group and fewer than `columns` groups come back. The same happens
//! whenever the stride already covers the list early (4 commands over 3
//! columns gives `[2, 2]`). Groups are never padded with empty entries.

use crate::error::{MpwtError, Result};

/// A contiguous, non-empty run of commands destined for one column.
///
/// The first command seeds the column; the rest are split out of it. The
/// group borrows from the caller's command list and is never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CommandGroup<'a> {
    head: &'a str,
    rest: &'a [String],
}

impl<'a> CommandGroup<'a> {
    fn from_slice(commands: &'a [String]) -> Option<Self> {
        let (head, rest) = commands.split_first()?;
        Some(Self {
            head: head.as_str(),
            rest,
        })
    }

    /// The command that opens this column's region.
    pub fn head(&self) -> &'a str {
        self.head
    }

    /// Commands split out of the region after the head, in input order.
    pub fn rest(&self) -> &'a [String] {
        self.rest
    }

    /// Total number of commands in the group.
    pub fn len(&self) -> usize {
        self.rest.len() + 1
    }

    /// Always `false`; a group holds at least its head.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterate over every command, head first.
    pub fn iter(self) -> impl Iterator<Item = &'a str> {
        std::iter::once(self.head).chain(self.rest.iter().map(String::as_str))
    }
}

/// Split `commands` into at most `columns` ordered groups.
///
/// # Errors
///
/// - [`MpwtError::EmptyCommands`] if `commands` is empty
/// - [`MpwtError::InvalidCount`] if `columns` is zero
pub fn group(commands: &[String], columns: usize) -> Result<Vec<CommandGroup<'_>>> {
    if commands.is_empty() {
        return Err(MpwtError::EmptyCommands);
    }
    if columns < 1 {
        return Err(MpwtError::InvalidCount(columns));
    }

    let size = commands.len().div_ceil(columns);

    Ok(commands
        .chunks(size)
        .filter_map(CommandGroup::from_slice)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cmds(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("echo {}", i)).collect()
    }

    fn lens(groups: &[CommandGroup<'_>]) -> Vec<usize> {
        groups.iter().map(CommandGroup::len).collect()
    }

    #[test]
    fn test_group_ten_by_three() {
        let c = cmds(10);
        let groups = group(&c, 3).unwrap();
        assert_eq!(lens(&groups), vec![4, 4, 2]);
        assert_eq!(groups[1].head(), "echo 5");
        assert_eq!(groups[2].rest(), &c[9..]);
    }

    #[test]
    fn test_group_single_column() {
        let c = cmds(3);
        let groups = group(&c, 1).unwrap();
        assert_eq!(lens(&groups), vec![3]);
        assert_eq!(groups[0].head(), "echo 1");
    }

    #[test]
    fn test_group_more_columns_than_commands() {
        let c = cmds(2);
        let groups = group(&c, 5).unwrap();
        assert_eq!(lens(&groups), vec![1, 1]);
        assert!(groups.iter().all(|g| g.rest().is_empty()));
    }

    #[test]
    fn test_group_stride_covers_early() {
        let c = cmds(4);
        assert_eq!(lens(&group(&c, 3).unwrap()), vec![2, 2]);
    }

    #[test]
    fn test_group_preserves_order() {
        let c = cmds(7);
        let flat: Vec<&str> = group(&c, 3)
            .unwrap()
            .iter()
            .flat_map(|g| g.iter().collect::<Vec<_>>())
            .collect();
        assert_eq!(flat, c.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn test_group_errors() {
        assert!(matches!(group(&[], 2), Err(MpwtError::EmptyCommands)));
        assert!(matches!(group(&cmds(2), 0), Err(MpwtError::InvalidCount(0))));
    }
}
