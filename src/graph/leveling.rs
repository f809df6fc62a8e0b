//! Assigns each course a level so that courses can be listed in prerequisite order.
//!
//! The pass walks the graph depth first from every not yet visited node, in node
//! insertion order, starting at level 1.  Entering a node stamps it with the
//! current level; each out neighbour is then entered with the level plus one if
//! it is unvisited or currently sits at a lower level.  A node reached again by a
//! longer path is therefore re-leveled, along with everything below it.
//!
//! The level a node ends with is the one written by the last visit.  On an
//! acyclic graph levels only ever grow and every edge is relaxed after its
//! source's final visit, so this comes out equal to the longest path layering
//! computed by [longest_path_levels].
//!
//! A node on the path currently being walked is never re-entered.  This never
//! triggers on an acyclic graph, and on a cyclic one it keeps each walk to a
//! simple path so the pass terminates.

use itertools::Itertools;
use std::collections::VecDeque;
use tracing::{debug, trace};

use super::{EdgeDisposition, Graph};

/// One node on the explicit walk stack.
#[derive(Debug, Clone, Copy)]
struct Frame {
    node_idx: usize,
    level: u32,
    /// Position in node_idx's out list of the next neighbour to look at.
    next_out: usize,
}

impl Graph {
    /// Run the leveling pass, replacing any levels left from a previous pass.
    pub fn assign_levels(&mut self) {
        for node in self.nodes.iter_mut() {
            node.clear_level_data();
        }

        let mut walks = 0_usize;
        for node_idx in 0..self.nodes.len() {
            if self.get_node(node_idx).is_some_and(|node| !node.visited) {
                self.propagate_level(node_idx);
                walks += 1;
            }
        }
        debug!(nodes = self.nodes.len(), walks, "assigned levels");
    }

    /// Group course names by level: element 0 holds level 1.
    ///
    /// Each group is sorted by name (byte order).  Nodes without a level (no pass
    /// has run since they were added) are left out.
    pub fn level_groups(&self) -> Vec<Vec<&str>> {
        let max_level = self.nodes().filter_map(|node| node.level()).max().unwrap_or(0);
        let mut groups: Vec<Vec<&str>> = vec![vec![]; max_level as usize];

        for node in self.nodes() {
            let group = node
                .level()
                .and_then(|level| (level as usize).checked_sub(1))
                .and_then(|group_idx| groups.get_mut(group_idx));

            if let Some(group) = group {
                group.push(node.name());
            }
        }

        groups
            .into_iter()
            .map(|group| group.into_iter().sorted().collect())
            .collect()
    }

    /// Level every course, and return all names ordered by level then name, joined by ", ".
    pub fn course_order(&mut self) -> String {
        self.assign_levels();

        self.level_groups().into_iter().flatten().join(", ")
    }

    /// Depth first level propagation from start_idx, using an explicit stack.
    fn propagate_level(&mut self, start_idx: usize) {
        let mut stack = Vec::new();
        self.enter_node(start_idx, 1, &mut stack);

        while let Some(frame) = stack.last_mut() {
            let next = self
                .nodes
                .get(frame.node_idx)
                .and_then(|node| node.get_edges(EdgeDisposition::Out).get(frame.next_out))
                .copied();

            match next {
                Some(adj_idx) => {
                    frame.next_out += 1;
                    let next_level = frame.level + 1;

                    if self.should_enter(adj_idx, next_level) {
                        self.enter_node(adj_idx, next_level, &mut stack);
                    }
                }
                None => {
                    if let Some(done) = stack.pop() {
                        if let Some(node) = self.get_node_mut(done.node_idx) {
                            node.on_path = false;
                        }
                    }
                }
            }
        }
    }

    /// True if the walk should (re)enter node_idx at level.
    fn should_enter(&self, node_idx: usize, level: u32) -> bool {
        self.get_node(node_idx).is_some_and(|node| {
            !node.on_path && (!node.visited || node.level.map_or(true, |cur| cur < level))
        })
    }

    fn enter_node(&mut self, node_idx: usize, level: u32, stack: &mut Vec<Frame>) {
        if let Some(node) = self.get_node_mut(node_idx) {
            if node.visited {
                trace!(course = %node.name, from = ?node.level, to = level, "re-leveling");
            }
            node.visited = true;
            node.on_path = true;
            node.level = Some(level);

            stack.push(Frame {
                node_idx,
                level,
                next_out: 0,
            });
        }
    }
}

/// Longest path layering: each node's level is one more than the highest level among
/// its prerequisites, with prerequisite free nodes at level 1.
///
/// Returned levels are indexed like the graph's nodes.  Returns None if the graph
/// has a cycle, where no such layering exists.
pub fn longest_path_levels(graph: &Graph) -> Option<Vec<u32>> {
    let mut in_degree: Vec<usize> = graph
        .nodes()
        .map(|node| node.get_edges(EdgeDisposition::In).len())
        .collect();
    let mut levels = vec![1_u32; graph.len()];

    let mut queue: VecDeque<usize> = in_degree
        .iter()
        .enumerate()
        .filter(|(_, degree)| **degree == 0)
        .map(|(node_idx, _)| node_idx)
        .collect();

    let mut processed = 0_usize;
    while let Some(node_idx) = queue.pop_front() {
        processed += 1;
        let level = levels.get(node_idx).copied()?;

        for adj_idx in graph.get_node(node_idx)?.get_edges(EdgeDisposition::Out) {
            let adj_level = levels.get_mut(*adj_idx)?;
            *adj_level = (*adj_level).max(level + 1);

            let degree = in_degree.get_mut(*adj_idx)?;
            *degree -= 1;
            if *degree == 0 {
                queue.push_back(*adj_idx);
            }
        }
    }

    (processed == graph.len()).then_some(levels)
}
