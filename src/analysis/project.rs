//! Filter/view projection.
//!
//! Turns the tree plus a substring filter into the flat list of rows the
//! presentation layer renders. A node is projected when its own name
//! matches the filter or any descendant at any depth matches; an ancestor
//! that does not itself match stays visible, rendered with its own metrics
//! and tag, to keep the matching descendant reachable. The hidden root is
//! never a row. Every fresh projection is expected to render fully
//! expanded.

use crate::tree::{Node, ProfileTree};

/// One renderable row of the projected view.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    pub node: &'a Node,
    /// Index of the parent row within the projection, none for top-level
    /// rows.
    pub parent: Option<usize>,
    pub depth: usize,
}

/// Project the tree through a case-insensitive substring filter.
///
/// An empty filter projects every node exactly once. Rows come out
/// depth-first in the tree's current child order, so the projection
/// reflects the latest sort.
#[must_use]
pub fn project<'a>(tree: &'a ProfileTree, filter: &str) -> Vec<Row<'a>> {
    let needle = filter.to_lowercase();
    let mut rows = Vec::new();
    for child in &tree.root.children {
        project_node(child, &needle, None, 0, &mut rows);
    }
    rows
}

/// Depth-first projection of one subtree. Returns true when the node was
/// kept, i.e. it or some descendant matched.
fn project_node<'a>(
    node: &'a Node,
    needle: &str,
    parent: Option<usize>,
    depth: usize,
    rows: &mut Vec<Row<'a>>,
) -> bool {
    // Tentatively emit this row so children can reference its index; roll
    // it back below when the whole subtree turns out to be filtered away.
    let index = rows.len();
    rows.push(Row { node, parent, depth });

    let mut any_descendant = false;
    for child in &node.children {
        any_descendant |= project_node(child, needle, Some(index), depth + 1, rows);
    }

    let matches = node.name.to_lowercase().contains(needle);
    if matches || any_descendant {
        true
    } else {
        // Children that failed already rolled themselves back, so only this
        // node's row is left to drop.
        rows.truncate(index);
        false
    }
}
