//! Represents a course (node) within a prerequisite graph.

use std::fmt::Display;

use super::edge::EdgeDisposition;

// Represents the node element of a graph: a single course.
//
// Nodes are connected together via edges.  Each node has a list of nodes coming in
// (its prerequisites) and a list of nodes going out (the courses that require it).
// Note that this means that each edge is represented twice: Once in the outgoing
// node, and once in the incoming node.
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct Node {
    /// Name of the course.  Unique within a graph, which is up to the caller to enforce.
    pub(super) name: String,
    /// Level assigned by the last leveling pass.  One based, greater numbers come later.
    pub(super) level: Option<u32>,
    /// True once the current leveling pass has reached this node.
    pub(super) visited: bool,
    /// True while this node is on the path currently being walked by the leveling pass.
    pub(super) on_path: bool,
    /// Prerequisites of this node.  Each entry is an index into the graph's node list.
    pub(super) in_nodes: Vec<usize>,
    /// Courses requiring this node.  Each entry is an index into the graph's node list.
    pub(super) out_nodes: Vec<usize>,
}

impl Node {
    /// Return a new node which is not yet connected to a graph.
    pub(super) fn new(name: &str) -> Self {
        Node {
            name: name.to_string(),
            level: None,
            visited: false,
            on_path: false,
            in_nodes: vec![],
            out_nodes: vec![],
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Level computed by the most recent leveling pass, if any.
    pub fn level(&self) -> Option<u32> {
        self.level
    }

    /// Add either an in or out neighbour to the node.
    ///
    /// Duplicates are appended again.
    pub(super) fn add_edge(&mut self, node_idx: usize, disposition: EdgeDisposition) {
        match disposition {
            EdgeDisposition::In => self.in_nodes.push(node_idx),
            EdgeDisposition::Out => self.out_nodes.push(node_idx),
        };
    }

    /// Remove the first occurrence of node_idx from the in or out list.
    ///
    /// Returns false if node_idx was not present.
    pub(super) fn remove_edge(&mut self, node_idx: usize, disposition: EdgeDisposition) -> bool {
        let edge_list = match disposition {
            EdgeDisposition::In => &mut self.in_nodes,
            EdgeDisposition::Out => &mut self.out_nodes,
        };

        if let Some(local_idx) = edge_list.iter().position(|idx| *idx == node_idx) {
            edge_list.remove(local_idx);
            true
        } else {
            false
        }
    }

    /// Return the list of In or Out neighbours.
    pub(super) fn get_edges(&self, disposition: EdgeDisposition) -> &Vec<usize> {
        match disposition {
            EdgeDisposition::In => &self.in_nodes,
            EdgeDisposition::Out => &self.out_nodes,
        }
    }

    /// True if there are no incoming edges to a node.
    pub(super) fn no_in_edges(&self) -> bool {
        self.get_edges(EdgeDisposition::In).is_empty()
    }

    /// True if there are no outgoing edges from a node.
    pub(super) fn no_out_edges(&self) -> bool {
        self.get_edges(EdgeDisposition::Out).is_empty()
    }

    /// Forget everything a previous leveling pass left behind.
    pub(super) fn clear_level_data(&mut self) {
        self.level = None;
        self.visited = false;
        self.on_path = false;
    }
}

impl Display for Node {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        write!(fmt, "{}", &self.name)
    }
}
