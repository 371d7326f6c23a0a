//! Property-based tests for layout synthesis.

use mpwt::builder::{self, PaneOp};
use mpwt::grouper;
use mpwt::layout::{Direction, Focus, LayoutRequest, synthesize};
use mpwt::splitter;
use proptest::prelude::*;

/// Strategy for a non-empty list of simple commands.
fn arb_commands() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{1,8}( [a-z0-9]{1,4})?", 1..40)
}

fn arb_direction() -> impl Strategy<Value = Direction> {
    prop_oneof![Just(Direction::Horizontal), Just(Direction::Vertical)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Ratios have one entry per split, lie in (0, 1] and never grow.
    #[test]
    fn prop_sizes_bounded_and_non_increasing(n in 1usize..200) {
        let sizes = splitter::sizes(n).unwrap();
        prop_assert_eq!(sizes.len(), n);
        prop_assert!(sizes.iter().all(|s| *s > 0.0 && *s <= 1.0));
        prop_assert!(sizes.windows(2).all(|w| w[0] >= w[1]));
    }

    /// Groups concatenate back to the input and never exceed `columns`.
    #[test]
    fn prop_groups_reconstruct_commands(
        commands in arb_commands(),
        columns in 1usize..12,
    ) {
        let groups = grouper::group(&commands, columns).unwrap();
        prop_assert!(groups.len() <= columns);
        prop_assert_eq!(groups.iter().map(|g| g.len()).sum::<usize>(), commands.len());

        let flat: Vec<&str> = groups.iter().flat_map(|g| g.iter()).collect();
        let expected: Vec<&str> = commands.iter().map(String::as_str).collect();
        prop_assert_eq!(flat, expected);
    }

    /// Every command gets exactly one pane, and the sequence ends on the
    /// first pane with no trailing focus moves before it.
    #[test]
    fn prop_one_pane_per_command(
        commands in arb_commands(),
        columns in 1usize..12,
        direction in arb_direction(),
    ) {
        let groups = grouper::group(&commands, columns).unwrap();
        let ops = builder::build(&groups, direction).unwrap();

        let panes = ops
            .iter()
            .filter(|op| !matches!(op, PaneOp::MoveFocus(_)))
            .count();
        prop_assert_eq!(panes, commands.len());
        prop_assert_eq!(ops.last(), Some(&PaneOp::MoveFocus(Focus::First)));
        if ops.len() > 1 {
            prop_assert!(!matches!(ops[ops.len() - 2], PaneOp::MoveFocus(_)));
        }

        let tree_splits = ops
            .iter()
            .filter(|op| matches!(
                op,
                PaneOp::SplitWithSize { axis, .. } if *axis == direction.opposite()
            ))
            .count();
        prop_assert_eq!(tree_splits, groups.len() - 1);
    }

    /// The same request always renders the same string.
    #[test]
    fn prop_render_idempotent(
        commands in arb_commands(),
        columns in 1usize..12,
        direction in arb_direction(),
        maximize in any::<bool>(),
    ) {
        let request = LayoutRequest::new(commands)
            .with_columns(columns)
            .with_direction(direction)
            .with_maximize(maximize);
        let first = synthesize(&request, None).unwrap();
        prop_assert_eq!(&first, &synthesize(&request, None).unwrap());
        prop_assert!(first.starts_with("wt "));
        prop_assert!(!first.ends_with(';'));
    }
}

#[test]
fn test_sizes_rejects_zero() {
    assert!(matches!(
        splitter::sizes(0),
        Err(mpwt::MpwtError::InvalidCount(0))
    ));
}
