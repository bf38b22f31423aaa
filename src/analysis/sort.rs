//! Hierarchical sort with toggle/reset direction semantics.
//!
//! Sorting re-orders every node's children at every depth independently:
//! each sibling group is compared by its own values, never by anything
//! inherited from ancestors. The sort is stable, and color tags are
//! untouched; display order is purely presentational.

use crate::domain::{Column, SortState};
use crate::tree::{Node, ProfileTree};

/// Compute the next sort state for a header click: the same column toggles
/// direction, a different column resets to ascending.
#[must_use]
pub fn next_sort_state(previous: SortState, column: Column) -> SortState {
    let reverse = if previous.column == column { !previous.reverse } else { false };
    SortState { column, reverse }
}

/// Re-order every node's children according to `state`, recursively.
///
/// Numeric columns compare the node's own metric, with missing metrics
/// treated as `0.0`; the Profile column compares names lexicographically.
pub fn sort_tree(tree: &mut ProfileTree, state: SortState) {
    sort_node(&mut tree.root, state);
}

fn sort_node(node: &mut Node, state: SortState) {
    if state.column.is_numeric() {
        node.children.sort_by(|a, b| {
            let ord = a.metric(state.column).total_cmp(&b.metric(state.column));
            if state.reverse { ord.reverse() } else { ord }
        });
    } else {
        node.children.sort_by(|a, b| {
            let ord = a.name.cmp(&b.name);
            if state.reverse { ord.reverse() } else { ord }
        });
    }
    for child in &mut node.children {
        sort_node(child, state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Metrics, Record};

    fn record(path: &[&str], avg: f64, count: f64) -> Record {
        Record {
            hierarchy: path.iter().map(|s| (*s).to_string()).collect(),
            metrics: Metrics { count, total_time: avg, min: avg, max: avg, avg },
        }
    }

    fn child_names(node: &Node) -> Vec<&str> {
        node.children.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_same_column_toggles_direction() {
        let state = SortState { column: Column::Avg, reverse: false };
        let state = next_sort_state(state, Column::Avg);
        assert!(state.reverse);
        let state = next_sort_state(state, Column::Avg);
        assert!(!state.reverse);
    }

    #[test]
    fn test_different_column_resets_to_ascending() {
        let state = SortState { column: Column::Avg, reverse: true };
        let state = next_sort_state(state, Column::Count);
        assert_eq!(state.column, Column::Count);
        assert!(!state.reverse);
    }

    #[test]
    fn test_numeric_sort_orders_top_level() {
        let records = vec![
            record(&["b"], 3.0, 1.0),
            record(&["a"], 1.0, 2.0),
            record(&["c"], 2.0, 3.0),
        ];
        let mut tree = ProfileTree::build(&records);

        sort_tree(&mut tree, SortState { column: Column::Avg, reverse: false });
        assert_eq!(child_names(&tree.root), vec!["a", "c", "b"]);

        sort_tree(&mut tree, SortState { column: Column::Avg, reverse: true });
        assert_eq!(child_names(&tree.root), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_name_sort_is_lexicographic() {
        let records = vec![
            record(&["beta"], 1.0, 1.0),
            record(&["alpha"], 2.0, 2.0),
            record(&["gamma"], 3.0, 3.0),
        ];
        let mut tree = ProfileTree::build(&records);

        sort_tree(&mut tree, SortState { column: Column::Profile, reverse: false });
        assert_eq!(child_names(&tree.root), vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_sort_applies_independently_at_every_depth() {
        // The child order under "p" must follow the children's own averages,
        // not their parent's rank.
        let records = vec![
            record(&["p"], 100.0, 1.0),
            record(&["p", "slow"], 9.0, 1.0),
            record(&["p", "fast"], 1.0, 1.0),
            record(&["p", "mid"], 5.0, 1.0),
            record(&["q"], 1.0, 1.0),
            record(&["q", "z"], 2.0, 1.0),
            record(&["q", "y"], 7.0, 1.0),
        ];
        let mut tree = ProfileTree::build(&records);

        sort_tree(&mut tree, SortState { column: Column::Avg, reverse: false });
        assert_eq!(child_names(&tree.root), vec!["q", "p"]);
        assert_eq!(child_names(&tree.root.children[1]), vec!["fast", "mid", "slow"]);
        assert_eq!(child_names(&tree.root.children[0]), vec!["z", "y"]);
    }

    #[test]
    fn test_missing_metrics_compare_as_zero() {
        // "a" exists only as an ancestor, so it has no metrics and sorts as 0.
        let records = vec![
            record(&["a", "leaf"], 1.0, 1.0),
            record(&["b"], 2.0, 1.0),
        ];
        let mut tree = ProfileTree::build(&records);

        sort_tree(&mut tree, SortState { column: Column::Avg, reverse: false });
        assert_eq!(child_names(&tree.root), vec!["a", "b"]);

        sort_tree(&mut tree, SortState { column: Column::Avg, reverse: true });
        assert_eq!(child_names(&tree.root), vec!["b", "a"]);
    }

    #[test]
    fn test_sorting_leaves_color_tags_alone() {
        let records = vec![record(&["a"], 1.0, 1.0), record(&["b"], 2.0, 1.0)];
        let mut tree = ProfileTree::build(&records);
        let tags_before: Vec<_> = {
            let mut pairs: Vec<_> =
                tree.root.children.iter().map(|c| (c.name.clone(), c.color_tag)).collect();
            pairs.sort_by(|a, b| a.0.cmp(&b.0));
            pairs
        };

        sort_tree(&mut tree, SortState { column: Column::Count, reverse: true });

        let mut tags_after: Vec<_> =
            tree.root.children.iter().map(|c| (c.name.clone(), c.color_tag)).collect();
        tags_after.sort_by(|a, b| a.0.cmp(&b.0));
        assert_eq!(tags_before, tags_after);
    }

    #[test]
    fn test_sort_is_stable_on_equal_keys() {
        let records = vec![
            record(&["first"], 1.0, 1.0),
            record(&["second"], 1.0, 1.0),
            record(&["third"], 1.0, 1.0),
        ];
        let mut tree = ProfileTree::build(&records);

        sort_tree(&mut tree, SortState { column: Column::Avg, reverse: false });
        assert_eq!(child_names(&tree.root), vec!["first", "second", "third"]);
    }
}
