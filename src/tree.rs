//! Profile tree construction.
//!
//! Flat hierarchy-path records become a tree of nodes. Paths sharing a
//! prefix merge at every shared ancestor, so `A->B->C` and `A->B->D` yield a
//! single `A` and a single `B`. A row whose full path lands on an existing
//! node overwrites that node's metrics; this is the defined conflict policy,
//! not an error. The tree is rebuilt from scratch on every load.

use crate::analysis::colorize;
use crate::domain::ColorTag;
use crate::record::{Metrics, Record};

/// One vertex of the profile tree.
#[derive(Debug, Clone)]
pub struct Node {
    /// Path segment this node represents; unique among its siblings.
    pub name: String,
    /// Present only when some input row's full path terminates here.
    /// Intermediate nodes created as ancestors carry none.
    pub metrics: Option<Metrics>,
    /// Ordered child sequence; sorting mutates this order directly.
    pub children: Vec<Node>,
    /// Assigned by the colorizer at build time. Sorting and filtering never
    /// touch it.
    pub color_tag: ColorTag,
}

impl Node {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Node {
            name: name.into(),
            metrics: None,
            children: Vec::new(),
            color_tag: ColorTag::None,
        }
    }

    /// Child with the given name, created at the end of the sequence when
    /// absent.
    fn child_mut(&mut self, name: &str) -> &mut Node {
        if let Some(idx) = self.children.iter().position(|c| c.name == name) {
            return &mut self.children[idx];
        }
        self.children.push(Node::new(name));
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    /// Metric value for a numeric column, `0.0` when the node has no
    /// metrics.
    #[must_use]
    pub fn metric(&self, column: crate::domain::Column) -> f64 {
        use crate::domain::Column;
        let Some(m) = self.metrics else { return 0.0 };
        match column {
            Column::Count => m.count,
            Column::TotalTime => m.total_time,
            Column::Min => m.min,
            Column::Max => m.max,
            Column::Avg => m.avg,
            Column::Profile => 0.0,
        }
    }
}

/// The profile tree: a hidden root node owning the top-level namespace.
///
/// The root has no metrics and no displayed name; only its descendants are
/// ever rendered.
#[derive(Debug, Clone)]
pub struct ProfileTree {
    pub root: Node,
}

impl ProfileTree {
    /// Build a fresh tree from parsed records, then run exactly one
    /// colorization pass over the whole tree.
    #[must_use]
    pub fn build(records: &[Record]) -> Self {
        let mut root = Node::new("");
        for record in records {
            let mut node = &mut root;
            for segment in &record.hierarchy {
                node = node.child_mut(segment);
            }
            // Later rows with an identical full path replace earlier metrics.
            node.metrics = Some(record.metrics);
        }
        colorize(&mut root);
        ProfileTree { root }
    }

    /// Number of nodes excluding the hidden root.
    #[must_use]
    pub fn len(&self) -> usize {
        fn count(node: &Node) -> usize {
            1 + node.children.iter().map(count).sum::<usize>()
        }
        count(&self.root) - 1
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::parse_records;

    fn record(path: &[&str], avg: f64) -> Record {
        Record {
            hierarchy: path.iter().map(|s| (*s).to_string()).collect(),
            metrics: Metrics { count: 1.0, total_time: avg, min: avg, max: avg, avg },
        }
    }

    #[test]
    fn test_shared_prefixes_merge_into_single_nodes() {
        let records = vec![record(&["A", "B", "C"], 1.0), record(&["A", "B", "D"], 2.0)];
        let tree = ProfileTree::build(&records);

        assert_eq!(tree.root.children.len(), 1);
        let a = &tree.root.children[0];
        assert_eq!(a.name, "A");
        assert_eq!(a.children.len(), 1);
        let b = &a.children[0];
        assert_eq!(b.name, "B");
        let names: Vec<_> = b.children.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["C", "D"]);
        assert_eq!(tree.len(), 4);
    }

    #[test]
    fn test_intermediate_nodes_have_no_metrics() {
        let records = vec![record(&["A", "B"], 1.0)];
        let tree = ProfileTree::build(&records);

        let a = &tree.root.children[0];
        assert!(a.metrics.is_none());
        assert!(a.children[0].metrics.is_some());
    }

    #[test]
    fn test_ancestor_row_attaches_metrics_to_existing_node() {
        // The deep path creates "A" without metrics; a later row whose full
        // path is just "A" fills them in on the same node.
        let records = vec![record(&["A", "B"], 1.0), record(&["A"], 9.0)];
        let tree = ProfileTree::build(&records);

        assert_eq!(tree.root.children.len(), 1);
        let a = &tree.root.children[0];
        assert_eq!(a.metrics.map(|m| m.avg), Some(9.0));
        assert_eq!(a.children.len(), 1);
    }

    #[test]
    fn test_duplicate_full_path_overwrites_metrics() {
        let records = vec![record(&["A"], 1.0), record(&["A"], 5.0)];
        let tree = ProfileTree::build(&records);

        assert_eq!(tree.root.children.len(), 1);
        assert_eq!(tree.root.children[0].metrics.map(|m| m.avg), Some(5.0));
    }

    #[test]
    fn test_children_keep_encounter_order() {
        let records =
            vec![record(&["Z"], 1.0), record(&["A"], 2.0), record(&["M"], 3.0)];
        let tree = ProfileTree::build(&records);

        let names: Vec<_> = tree.root.children.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Z", "A", "M"]);
    }

    #[test]
    fn test_build_from_parsed_csv() {
        let csv = "Profile,Count,TotalTime,Min,Max,Avg\n\
                   Frame,60,1000,10,30,16.6\n\
                   Frame->Render,60,600,8,20,10\n";
        let records = parse_records(csv).unwrap();
        let tree = ProfileTree::build(&records);

        assert_eq!(tree.len(), 2);
        assert_eq!(tree.root.children[0].children[0].name, "Render");
    }
}
