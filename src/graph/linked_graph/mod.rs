//! `LinkedGraph` — a weighted, undirected graph over linked adjacency lists.
//!
//! Vertices are arbitrary application identities (`Eq + Hash + Clone`);
//! self-edges are permitted. Three structures stay in lockstep:
//! - a global vertex list (enumeration order = insertion order) whose values
//!   are the vertex records,
//! - a vertex index mapping identity to its node in that list,
//! - an edge index mapping the unordered pair `{u, v}` to the canonical edge
//!   record's address.
//!
//! Index values are structural handles, not copies, which is what buys O(1)
//! removal without search. A regular edge materializes as two mutually
//! partnered records, one per endpoint adjacency list; a self-edge as one.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `add_vertex` | O(1) amortized | No-op on duplicates |
//! | `remove_vertex` | O(degree) | Cascades through edge removal |
//! | `add_edge` | O(1) amortized | Upsert: overwrites weight in place |
//! | `remove_edge` | O(1) | Detaches both partnered records |
//! | `contains_vertex` / `contains_edge` / `degree` / `weight` | O(1) | |
//! | `neighbors` | O(degree) | Fresh parallel arrays |
//! | `vertices` | O(\|V\|) | Insertion order among survivors |

use core::fmt;
use core::hash::{BuildHasher, Hash};
use std::collections::hash_map::RandomState;

use num_traits::Zero;

use crate::collections::{ChainMap, NodeHandle, SlotList};

mod pair;
mod record;

pub use pair::PairKey;
use record::{EdgeRecord, EdgeRef, VertexRecord};

/// One vertex's adjacency, rehydrated: parallel neighbor/weight arrays in
/// edge-insertion order. A self-edge reports the vertex itself once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Neighborhood<V, W> {
    pub neighbors: Vec<V>,
    pub weights: Vec<W>,
}

impl<V, W> Neighborhood<V, W> {
    /// Number of incident edges represented.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    /// Iterates `(neighbor, weight)` pairs in adjacency order.
    pub fn iter(&self) -> impl Iterator<Item = (&V, &W)> {
        self.neighbors.iter().zip(self.weights.iter())
    }
}

/// A weighted undirected graph with hash-indexed, linked adjacency.
pub struct LinkedGraph<V, W = i64, S = RandomState> {
    /// Global vertex sequence; enumeration order is insertion order.
    vertices: SlotList<VertexRecord<V, W>>,
    /// identity -> vertex node in `vertices`.
    vertex_index: ChainMap<V, NodeHandle, S>,
    /// Unordered pair -> canonical edge record, exactly one entry per edge.
    edge_index: ChainMap<PairKey<V>, EdgeRef, S>,
    edge_count: usize,
}

impl<V: Eq + Hash + Clone, W: Copy + Zero> LinkedGraph<V, W, RandomState> {
    /// Creates a graph with no vertices or edges.
    pub fn new() -> Self {
        Self {
            vertices: SlotList::new(),
            vertex_index: ChainMap::new(),
            edge_index: ChainMap::new(),
            edge_count: 0,
        }
    }

    /// Creates a graph pre-sized for the given vertex and edge counts.
    pub fn with_capacity(vertices: usize, edges: usize) -> Self {
        Self {
            vertices: SlotList::with_capacity(vertices),
            vertex_index: ChainMap::with_capacity(vertices),
            edge_index: ChainMap::with_capacity(edges),
            edge_count: 0,
        }
    }
}

impl<V: Eq + Hash + Clone, W: Copy + Zero, S: BuildHasher + Clone> LinkedGraph<V, W, S> {
    /// Creates an empty graph hashing with clones of `hasher`.
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            vertices: SlotList::new(),
            vertex_index: ChainMap::with_hasher(hasher.clone()),
            edge_index: ChainMap::with_hasher(hasher),
            edge_count: 0,
        }
    }
}

impl<V: Eq + Hash + Clone, W: Copy + Zero, S: BuildHasher> LinkedGraph<V, W, S> {
    /// Number of vertices. O(1).
    #[inline(always)]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of undirected edges, self-edges counted once. O(1).
    #[inline(always)]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns `true` if the graph has no vertices.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Resolves a vertex handle or dies: a stale handle here means the vertex
    /// index and the vertex list have desynchronized.
    fn vertex(&self, handle: NodeHandle) -> &VertexRecord<V, W> {
        match self.vertices.get(handle) {
            Some(record) => record,
            None => panic!("vertex index desynchronized: stale vertex handle"),
        }
    }

    fn vertex_mut(&mut self, handle: NodeHandle) -> &mut VertexRecord<V, W> {
        match self.vertices.get_mut(handle) {
            Some(record) => record,
            None => panic!("vertex index desynchronized: stale vertex handle"),
        }
    }

    fn edge_record(&self, at: EdgeRef) -> &EdgeRecord<W> {
        match self.vertices.get(at.vertex).and_then(|v| v.incident.get(at.node)) {
            Some(record) => record,
            None => panic!("edge index desynchronized: stale edge record address"),
        }
    }

    fn edge_record_mut(&mut self, at: EdgeRef) -> &mut EdgeRecord<W> {
        match self
            .vertices
            .get_mut(at.vertex)
            .and_then(|v| v.incident.get_mut(at.node))
        {
            Some(record) => record,
            None => panic!("edge index desynchronized: stale edge record address"),
        }
    }

    /// All vertex identities, freshly allocated, in insertion order among
    /// still-present vertices. O(|V|).
    pub fn vertices(&self) -> Vec<V> {
        let mut out = Vec::with_capacity(self.vertices.len());
        for record in self.vertices.iter() {
            out.push(record.identity.clone());
        }
        out
    }

    /// Borrowing walk over vertex identities in insertion order.
    pub fn iter_vertices(&self) -> impl Iterator<Item = &V> {
        self.vertices.iter().map(|record| &record.identity)
    }

    /// Adds `vertex` with no incident edges. O(1) amortized.
    ///
    /// A duplicate is a silent no-op leaving the graph unchanged; returns
    /// `true` only when the vertex was newly inserted.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.vertex_index.contains_key(&vertex) {
            return false;
        }
        let node = self.vertices.push_back(VertexRecord::new(vertex.clone()));
        self.vertex_index.insert(vertex, node);

        #[cfg(feature = "tracing")]
        tracing::trace!(vertices = self.vertices.len(), "vertex added");
        debug_assert_eq!(self.vertex_index.len(), self.vertices.len());
        true
    }

    /// Returns `true` if `vertex` is present. O(1).
    #[inline]
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.vertex_index.contains_key(vertex)
    }

    /// Number of edges incident to `vertex`, self-edges counted once.
    /// An absent vertex has degree 0. O(1).
    pub fn degree(&self, vertex: &V) -> usize {
        match self.vertex_index.get(vertex) {
            Some(&node) => self.vertex(node).degree(),
            None => 0,
        }
    }

    /// Removes `vertex` and every edge incident to it. O(degree).
    ///
    /// An absent vertex is a silent no-op; returns `true` only when a vertex
    /// was removed.
    pub fn remove_vertex(&mut self, vertex: &V) -> bool {
        let Some(&node) = self.vertex_index.get(vertex) else {
            return false;
        };

        // Cascade through the single edge-removal path so partner cleanup and
        // index bookkeeping are shared. Always re-read the front: each
        // removal mutates the sequence being drained.
        loop {
            let other = {
                let record = self.vertex(node);
                let Some(front) = record.incident.front() else {
                    break;
                };
                let edge = match record.incident.get(front) {
                    Some(edge) => edge,
                    None => panic!("adjacency sequence desynchronized: stale front handle"),
                };
                self.vertex(edge.endpoint).identity.clone()
            };
            if !self.remove_edge(vertex, &other) {
                panic!("edge index desynchronized: adjacency record without an index entry");
            }
        }

        self.vertex_index.remove(vertex);
        if self.vertices.remove(node).is_none() {
            panic!("vertex index desynchronized: stale vertex handle");
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(vertices = self.vertices.len(), "vertex removed");
        debug_assert_eq!(self.vertex_index.len(), self.vertices.len());
        true
    }

    /// Inserts or updates the undirected edge `{u, v}` (u == v is a
    /// self-edge). O(1) amortized.
    ///
    /// If either endpoint is absent this is a silent no-op returning `false`.
    /// If the edge exists the weight is overwritten in place on both
    /// partnered records and the edge count is unchanged.
    pub fn add_edge(&mut self, u: &V, v: &V, weight: W) -> bool {
        let Some(&u_node) = self.vertex_index.get(u) else {
            return false;
        };
        let Some(&v_node) = self.vertex_index.get(v) else {
            return false;
        };

        let key = PairKey::new(u.clone(), v.clone());
        if let Some(&canonical) = self.edge_index.get(&key) {
            // Upsert: route the write through both sides to keep the
            // partner-weight invariant.
            let partner = {
                let record = self.edge_record_mut(canonical);
                record.weight = weight;
                record.partner
            };
            if let Some(mirror) = partner {
                self.edge_record_mut(mirror).weight = weight;
            }

            #[cfg(feature = "tracing")]
            tracing::trace!(edges = self.edge_count, "edge weight updated");
            return true;
        }

        let canonical = if u == v {
            let record = EdgeRecord {
                weight,
                endpoint: u_node,
                partner: None,
            };
            let node = self.vertex_mut(u_node).incident.push_back(record);
            EdgeRef {
                vertex: u_node,
                node,
            }
        } else {
            let u_side = EdgeRecord {
                weight,
                endpoint: v_node,
                partner: None,
            };
            let u_ref = EdgeRef {
                vertex: u_node,
                node: self.vertex_mut(u_node).incident.push_back(u_side),
            };
            let v_side = EdgeRecord {
                weight,
                endpoint: u_node,
                partner: Some(u_ref),
            };
            let v_ref = EdgeRef {
                vertex: v_node,
                node: self.vertex_mut(v_node).incident.push_back(v_side),
            };
            self.edge_record_mut(u_ref).partner = Some(v_ref);
            // The first argument's side is the canonical index entry.
            u_ref
        };

        self.edge_index.insert(key, canonical);
        self.edge_count += 1;

        #[cfg(feature = "tracing")]
        tracing::trace!(edges = self.edge_count, "edge added");
        debug_assert_eq!(self.edge_index.len(), self.edge_count);
        true
    }

    /// Removes the undirected edge `{u, v}`. O(1).
    ///
    /// An unindexed pair (including absent endpoints) is a silent no-op
    /// returning `false`.
    pub fn remove_edge(&mut self, u: &V, v: &V) -> bool {
        if self.edge_count == 0 {
            return false;
        }
        let key = PairKey::new(u.clone(), v.clone());
        let Some(canonical) = self.edge_index.remove(&key) else {
            return false;
        };

        let record = match self.vertex_mut(canonical.vertex).incident.remove(canonical.node) {
            Some(record) => record,
            None => panic!("edge index desynchronized: canonical record already detached"),
        };
        if let Some(mirror) = record.partner {
            let mirror_record = match self.vertex_mut(mirror.vertex).incident.remove(mirror.node)
            {
                Some(record) => record,
                None => panic!("partner invariant violated: mirror record already detached"),
            };
            debug_assert_eq!(
                mirror_record.partner,
                Some(canonical),
                "partner invariant violated: records are not mutual"
            );
        }
        self.edge_count -= 1;

        #[cfg(feature = "tracing")]
        tracing::trace!(edges = self.edge_count, "edge removed");
        debug_assert_eq!(self.edge_index.len(), self.edge_count);
        true
    }

    /// Returns `true` if the undirected edge `{u, v}` is present. O(1).
    /// Symmetric in its arguments.
    pub fn contains_edge(&self, u: &V, v: &V) -> bool {
        self.edge_count != 0 && self.edge_index.contains_key(&PairKey::new(u.clone(), v.clone()))
    }

    /// The weight of edge `{u, v}`, or zero when the edge is absent. O(1).
    ///
    /// Zero is a non-distinguishing default, not evidence of a zero-weight
    /// edge; callers needing the distinction check [`contains_edge`] first.
    ///
    /// [`contains_edge`]: LinkedGraph::contains_edge
    pub fn weight(&self, u: &V, v: &V) -> W {
        if self.edge_count == 0 {
            return W::zero();
        }
        match self.edge_index.get(&PairKey::new(u.clone(), v.clone())) {
            Some(&canonical) => self.edge_record(canonical).weight,
            None => W::zero(),
        }
    }

    /// The neighbors of `vertex` with the corresponding edge weights, in
    /// edge-insertion order. O(degree).
    ///
    /// Returns `None` both for an absent vertex and for a present vertex of
    /// degree zero; callers needing the distinction check [`contains_vertex`]
    /// first. A self-edge reports `vertex` itself as its own neighbor.
    ///
    /// [`contains_vertex`]: LinkedGraph::contains_vertex
    pub fn neighbors(&self, vertex: &V) -> Option<Neighborhood<V, W>> {
        let &node = self.vertex_index.get(vertex)?;
        let record = self.vertex(node);
        let degree = record.degree();
        if degree == 0 {
            return None;
        }

        let mut neighbors = Vec::with_capacity(degree);
        let mut weights = Vec::with_capacity(degree);
        for edge in record.incident.iter() {
            neighbors.push(self.vertex(edge.endpoint).identity.clone());
            weights.push(edge.weight);
        }
        Some(Neighborhood { neighbors, weights })
    }
}

impl<V: Eq + Hash + Clone, W: Copy + Zero> Default for LinkedGraph<V, W, RandomState> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, W, S> fmt::Debug for LinkedGraph<V, W, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedGraph")
            .field("vertices", &self.vertices.len())
            .field("edges", &self.edge_count)
            .finish()
    }
}
