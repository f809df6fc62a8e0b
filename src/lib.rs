//! Keeps a graph of courses and their prerequisites, and lists the courses in an
//! order that respects those prerequisites.
//!
//! Commands arrive one per line (see [command]) and are applied by a
//! [processor::CommandProcessor], which owns the [graph::Graph].

pub mod command;
pub mod course_examples;
pub mod error;
pub mod graph;
pub mod processor;
