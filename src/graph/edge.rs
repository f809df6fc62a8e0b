//! Represents a prerequisite edge connecting two courses within a graph.

// EdgeDisposition indicates whether an edge is incoming or outgoing with respect to a particular node.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum EdgeDisposition {
    In,
    Out,
}

/// An edge points from src_node (the prerequisite) to dst_node (the dependent course).
///
/// Edges are not stored by the graph: each one lives twice, once in the out list of
/// src_node and once in the in list of dst_node.  Edge values are handed out when
/// the graph is walked edge by edge.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Edge {
    /// Node that this edge points from.  This is an index into graph.nodes.
    pub src_node: usize,
    /// Node that this edge points to.  This is an index into graph.nodes.
    pub dst_node: usize,
}

impl Edge {
    pub fn new(src_node: usize, dst_node: usize) -> Self {
        Edge { src_node, dst_node }
    }
}
