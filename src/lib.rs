//! # `braid` - Weighted Undirected Graphs over Linked Adjacency
//!
//! An in-memory weighted, undirected graph over arbitrary application
//! identities, with self-edges, built from two reusable primitives:
//!
//! - [`ChainMap`]: a separate-chaining hash map over an entry arena
//! - [`SlotList`]: a doubly linked list with stable, generational
//!   [`NodeHandle`]s
//!
//! [`LinkedGraph`] composes them so that every existence check and edge
//! mutation is O(1) (amortized where hashing is involved), vertex removal and
//! neighbor enumeration are O(degree), and full vertex enumeration is O(|V|)
//! in insertion order.
//!
//! ## Design
//!
//! The indexes store *structural handles* — positions inside the linked
//! sequences — rather than copies of records. Identity-to-position
//! translation is therefore one hash lookup, and removal is a constant-time
//! detach with no search. A regular edge is two mutually partnered records,
//! one in each endpoint's adjacency list; a self-edge is a single record. The
//! edge index keys on an order-independent pair, so `{u, v}` and `{v, u}`
//! name the same edge everywhere.
//!
//! Absent-target operations are silent no-ops, never errors. Internal
//! desynchronization between an index and a sequence is a violated invariant
//! and panics rather than corrupting the partner linkage.
//!
//! ## Example
//!
//! ```
//! use braid::LinkedGraph;
//!
//! let mut graph: LinkedGraph<&str> = LinkedGraph::new();
//! graph.add_vertex("a");
//! graph.add_vertex("b");
//! graph.add_edge(&"a", &"b", 10);
//!
//! assert!(graph.contains_edge(&"b", &"a"));
//! assert_eq!(graph.weight(&"b", &"a"), 10);
//! assert_eq!(graph.degree(&"a"), 1);
//! ```
//!
//! ## Concurrency
//!
//! The structure is single-threaded: mutation goes through `&mut self` and
//! enumeration must not overlap mutation. Embedding in a concurrent context
//! means one exclusive lock around the whole graph — the partner invariant
//! spans two adjacency lists at once, so finer-grained locking has nothing
//! sound to latch onto.

pub mod collections;
pub mod graph;

pub use collections::{ChainMap, NodeHandle, SlotList};
pub use graph::{LinkedGraph, Neighborhood};
