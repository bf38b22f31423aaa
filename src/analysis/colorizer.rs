//! Rank-based coloring of sibling groups.
//!
//! For every parent in the tree, the direct children that carry metrics are
//! ranked by average time, descending. Ranks 1-3 get [`ColorTag::TopTier`],
//! ranks 4-6 [`ColorTag::SecondTier`]. Ranks beyond 6 keep whatever tag they
//! already carried from an earlier pass; they are deliberately not cleared.
//! Children without metrics are never ranked and never tagged.
//!
//! The ranking is local: a node's tag reflects its standing among its own
//! siblings only. Coloring runs over the full, unfiltered tree, so it never
//! depends on any active filter.

use crate::domain::ColorTag;
use crate::tree::Node;

/// Ranks highlighted with the top tier.
const TOP_TIER_RANKS: usize = 3;
/// Ranks highlighted with either tier.
const TAGGED_RANKS: usize = 6;

/// Recolor `node`'s children and every descendant sibling group.
pub fn colorize(node: &mut Node) {
    // Rank only the children that carry metrics. The sort is stable, so
    // equal averages keep their encounter order.
    let mut ranked: Vec<usize> = node
        .children
        .iter()
        .enumerate()
        .filter(|(_, child)| child.metrics.is_some())
        .map(|(idx, _)| idx)
        .collect();
    ranked.sort_by(|&a, &b| {
        let avg_a = node.children[a].metric(crate::domain::Column::Avg);
        let avg_b = node.children[b].metric(crate::domain::Column::Avg);
        avg_b.total_cmp(&avg_a)
    });

    for (rank, &idx) in ranked.iter().enumerate() {
        if rank < TOP_TIER_RANKS {
            node.children[idx].color_tag = ColorTag::TopTier;
        } else if rank < TAGGED_RANKS {
            node.children[idx].color_tag = ColorTag::SecondTier;
        }
        // Rank 7 and beyond: previous tag stays as-is.
    }

    for child in &mut node.children {
        colorize(child);
    }
}
