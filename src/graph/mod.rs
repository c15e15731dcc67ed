//! Graph representations.

pub mod linked_graph;

pub use linked_graph::{LinkedGraph, Neighborhood};
