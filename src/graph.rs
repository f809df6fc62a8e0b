//! A graph of courses connected by prerequisite edges.
//!
//! An edge points from a prerequisite to the course that requires it, so a
//! course's incoming edges are its prerequisites and its outgoing edges are the
//! courses that depend on it.

mod edge;
pub mod leveling;
mod node;

use std::{collections::HashMap, fmt::Display};

use crate::error::CourseError;

pub use self::{
    edge::{Edge, EdgeDisposition},
    node::Node,
};

/// Simplest possible representation of the course graph.
///
/// Nodes live in an indexed array in insertion order, and refer to each other
/// by index.  Insertion order matters: it is the order the leveling pass starts
/// its traversals in.  A name index gives O(1) lookups by course name.
///
/// Nodes are never removed, so node indexes stay valid for the life of the graph.
#[derive(Debug, Default)]
pub struct Graph {
    /// All nodes in the graph, in insertion order.
    nodes: Vec<Node>,
    /// Map of course name to node index.
    name_index: HashMap<String, usize>,
}

impl Graph {
    pub fn new() -> Self {
        Graph {
            nodes: vec![],
            name_index: HashMap::new(),
        }
    }

    /// Number of courses in the graph.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Return the node indexed by node_idx.
    pub fn get_node(&self, node_idx: usize) -> Option<&Node> {
        self.nodes.get(node_idx)
    }

    /// Return a mutable node indexed by node_idx.
    pub(crate) fn get_node_mut(&mut self, node_idx: usize) -> Option<&mut Node> {
        self.nodes.get_mut(node_idx)
    }

    /// Return the node index of the named course.
    pub fn node_idx(&self, name: &str) -> Option<usize> {
        self.name_index.get(name).copied()
    }

    /// True if a course with this name is in the graph.
    pub fn exists(&self, name: &str) -> bool {
        self.name_index.contains_key(name)
    }

    /// Iterate over all nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.iter()
    }

    /// Add a new node identified by name, and return the node's index in the graph.
    ///
    /// The caller must make sure the name is not already present: the graph does
    /// not check, and a repeated name would shadow the earlier node in the name index.
    pub fn add_node(&mut self, name: &str) -> usize {
        let new_node = Node::new(name);
        let idx = self.nodes.len();
        self.nodes.push(new_node);
        self.name_index.insert(name.to_string(), idx);

        idx
    }

    /// Add an edge from the src course to the dst course.
    ///
    /// Self loops and duplicate edges are not rejected.  A duplicate is simply
    /// recorded again.
    pub fn add_edge(&mut self, src_name: &str, dst_name: &str) -> Result<Edge, CourseError> {
        let edge = self.resolve_edge(src_name, dst_name)?;
        self.add_edge_idx(edge);

        Ok(edge)
    }

    /// Remove one occurrence of the edge from the src course to the dst course.
    ///
    /// Returns false if the two courses exist but are not connected.
    pub fn remove_edge(&mut self, src_name: &str, dst_name: &str) -> Result<bool, CourseError> {
        let edge = self.resolve_edge(src_name, dst_name)?;

        Ok(self.remove_edge_idx(edge))
    }

    /// Names of the prerequisites of the named course, in the order the edges were added.
    pub fn incoming(&self, name: &str) -> Option<Vec<&str>> {
        self.neighbour_names(name, EdgeDisposition::In)
    }

    /// Names of the courses requiring the named course, in the order the edges were added.
    pub fn outgoing(&self, name: &str) -> Option<Vec<&str>> {
        self.neighbour_names(name, EdgeDisposition::Out)
    }

    /// Iterate over every edge: nodes in insertion order, then each node's out edges in order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .flat_map(|(src_node, node)| {
                node.get_edges(EdgeDisposition::Out)
                    .iter()
                    .map(move |dst_node| Edge::new(src_node, *dst_node))
            })
    }

    /// Name of the node at node_idx.  Indexes handed out by this graph are always valid.
    fn node_name(&self, node_idx: usize) -> &str {
        self.nodes.get(node_idx).map_or("", |node| node.name())
    }

    fn neighbour_names(&self, name: &str, disposition: EdgeDisposition) -> Option<Vec<&str>> {
        let node = self.get_node(self.node_idx(name)?)?;

        Some(
            node.get_edges(disposition)
                .iter()
                .map(|node_idx| self.node_name(*node_idx))
                .collect(),
        )
    }

    fn resolve_edge(&self, src_name: &str, dst_name: &str) -> Result<Edge, CourseError> {
        let src_node = self
            .node_idx(src_name)
            .ok_or_else(|| CourseError::UnknownCourse(src_name.to_string()))?;
        let dst_node = self
            .node_idx(dst_name)
            .ok_or_else(|| CourseError::UnknownCourse(dst_name.to_string()))?;

        Ok(Edge::new(src_node, dst_node))
    }

    fn add_edge_idx(&mut self, edge: Edge) {
        if let Some(src) = self.get_node_mut(edge.src_node) {
            src.add_edge(edge.dst_node, EdgeDisposition::Out);
        }
        if let Some(dst) = self.get_node_mut(edge.dst_node) {
            dst.add_edge(edge.src_node, EdgeDisposition::In);
        }
    }

    fn remove_edge_idx(&mut self, edge: Edge) -> bool {
        let removed_out = self
            .get_node_mut(edge.src_node)
            .is_some_and(|src| src.remove_edge(edge.dst_node, EdgeDisposition::Out));
        let removed_in = self
            .get_node_mut(edge.dst_node)
            .is_some_and(|dst| dst.remove_edge(edge.src_node, EdgeDisposition::In));

        removed_out && removed_in
    }
}

impl Display for Graph {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        for edge in self.edges() {
            let src = self.node_name(edge.src_node);
            let dst = self.node_name(edge.dst_node);

            writeln!(fmt, "{src} -> {dst}")?;
        }
        for node in self
            .nodes
            .iter()
            .filter(|node| node.no_in_edges() && node.no_out_edges())
        {
            writeln!(fmt, "{node}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ops::RangeInclusive;

    /// Additional test only functions for Graph to make graph construction testing easier.
    impl Graph {
        /// Add multiple nodes with names given from a range of characters.
        ///
        /// * Nodes must be named after a single character.
        fn add_nodes(&mut self, range: RangeInclusive<char>) {
            for name in range {
                self.add_node(&name.to_string());
            }
        }

        /// Add a list of edges to the graph, given by node names.
        fn add_edges(&mut self, edges: &[(&str, &str)]) {
            for (src_node, dst_node) in edges {
                self.add_edge(src_node, dst_node).unwrap();
            }
        }
    }

    #[test]
    fn test_add_node_preserves_insertion_order() {
        let mut graph = Graph::new();
        graph.add_nodes('c'..='e');
        graph.add_node("a");

        let names: Vec<&str> = graph.nodes().map(|node| node.name()).collect();

        assert_eq!(names, vec!["c", "d", "e", "a"]);
        assert_eq!(graph.node_idx("a"), Some(3));
        assert!(graph.exists("d"));
        assert!(!graph.exists("b"));
        assert_eq!(graph.len(), 4);
    }

    #[test]
    fn test_add_edge_updates_both_directions() {
        let mut graph = Graph::new();
        graph.add_nodes('a'..='c');
        graph.add_edges(&[("a", "c"), ("b", "c"), ("a", "b")]);

        assert_eq!(graph.incoming("c"), Some(vec!["a", "b"]));
        assert_eq!(graph.outgoing("a"), Some(vec!["c", "b"]));
        assert_eq!(graph.incoming("a"), Some(vec![]));
        assert_eq!(graph.outgoing("z"), None);
    }

    #[test]
    fn test_add_edge_unknown_course() {
        let mut graph = Graph::new();
        graph.add_nodes('a'..='a');

        assert_eq!(
            graph.add_edge("a", "x"),
            Err(CourseError::UnknownCourse("x".to_string()))
        );
        assert_eq!(
            graph.add_edge("y", "a"),
            Err(CourseError::UnknownCourse("y".to_string()))
        );
        assert_eq!(graph.outgoing("a"), Some(vec![]));
    }

    #[test]
    fn test_duplicate_edges_are_kept() {
        let mut graph = Graph::new();
        graph.add_nodes('a'..='b');
        graph.add_edges(&[("a", "b"), ("a", "b")]);

        assert_eq!(graph.incoming("b"), Some(vec!["a", "a"]));

        assert_eq!(graph.remove_edge("a", "b"), Ok(true));
        assert_eq!(graph.incoming("b"), Some(vec!["a"]));
        assert_eq!(graph.outgoing("a"), Some(vec!["b"]));
    }

    #[test]
    fn test_remove_edge_by_value() {
        let mut graph = Graph::new();
        graph.add_nodes('a'..='d');
        graph.add_edges(&[("a", "d"), ("b", "d"), ("c", "d")]);

        assert_eq!(graph.remove_edge("b", "d"), Ok(true));
        assert_eq!(graph.incoming("d"), Some(vec!["a", "c"]));
        assert_eq!(graph.outgoing("b"), Some(vec![]));

        assert_eq!(graph.remove_edge("b", "d"), Ok(false));
    }

    #[test]
    fn test_edges_and_display() {
        let mut graph = Graph::new();
        graph.add_nodes('a'..='d');
        graph.add_edges(&[("b", "c"), ("a", "c")]);

        let edges: Vec<Edge> = graph.edges().collect();
        assert_eq!(edges, vec![Edge::new(0, 2), Edge::new(1, 2)]);

        assert_eq!(graph.to_string(), "a -> c\nb -> c\nd\n");
    }
}
