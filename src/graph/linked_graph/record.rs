//! Internal vertex and edge records.
//!
//! These never escape the facade; queries rehydrate application-level
//! identities and weights from them on demand.

use crate::collections::{NodeHandle, SlotList};

/// One vertex: its application identity plus its incident-edge sequence.
///
/// The record sits inside the graph's global vertex `SlotList`; the vertex
/// index maps `identity -> NodeHandle` of that node. Degree is the tracked
/// length of `incident` (a self-edge contributes exactly one entry).
pub(crate) struct VertexRecord<V, W> {
    pub(crate) identity: V,
    pub(crate) incident: SlotList<EdgeRecord<W>>,
}

impl<V, W> VertexRecord<V, W> {
    pub(crate) fn new(identity: V) -> Self {
        Self {
            identity,
            incident: SlotList::new(),
        }
    }

    #[inline(always)]
    pub(crate) fn degree(&self) -> usize {
        self.incident.len()
    }
}

/// Stable address of one edge record: which vertex's adjacency list holds it,
/// and which node within that list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct EdgeRef {
    /// Vertex node in the global vertex list whose adjacency list owns the record.
    pub(crate) vertex: NodeHandle,
    /// The record's node within that vertex's adjacency list.
    pub(crate) node: NodeHandle,
}

/// One adjacency entry.
///
/// A regular edge materializes as two records, one in each endpoint's
/// adjacency list, linked through `partner` (mutual, weight-equal at all
/// times). A self-edge materializes as a single record with `partner: None` —
/// the `Option` is the edge-kind discriminant.
pub(crate) struct EdgeRecord<W> {
    /// Last-write-wins; updated in place through the facade's upsert path,
    /// which writes both partnered records.
    pub(crate) weight: W,
    /// The *other* endpoint's vertex node; for a self-edge, the owner itself.
    pub(crate) endpoint: NodeHandle,
    /// Mirror record for a regular edge, `None` for a self-edge.
    pub(crate) partner: Option<EdgeRef>,
}
