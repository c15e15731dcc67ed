//! Property tests driving `LinkedGraph` against a std-collections oracle.

use std::collections::{HashMap, HashSet};

use braid::LinkedGraph;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Operation {
    AddVertex(u8),
    RemoveVertex(u8),
    AddEdge(u8, u8, i64),
    RemoveEdge(u8, u8),
}

/// Reference model: a vertex set plus a canonically keyed edge map.
#[derive(Default)]
struct Oracle {
    vertices: Vec<u8>, // insertion order of survivors
    edges: HashMap<(u8, u8), i64>,
}

impl Oracle {
    fn pair(u: u8, v: u8) -> (u8, u8) {
        if u <= v {
            (u, v)
        } else {
            (v, u)
        }
    }

    fn add_vertex(&mut self, v: u8) {
        if !self.vertices.contains(&v) {
            self.vertices.push(v);
        }
    }

    fn remove_vertex(&mut self, v: u8) {
        if let Some(pos) = self.vertices.iter().position(|&x| x == v) {
            self.vertices.remove(pos);
            self.edges.retain(|&(a, b), _| a != v && b != v);
        }
    }

    fn add_edge(&mut self, u: u8, v: u8, w: i64) {
        if self.vertices.contains(&u) && self.vertices.contains(&v) {
            self.edges.insert(Self::pair(u, v), w);
        }
    }

    fn remove_edge(&mut self, u: u8, v: u8) {
        self.edges.remove(&Self::pair(u, v));
    }

    fn degree(&self, v: u8) -> usize {
        self.edges
            .keys()
            .filter(|&&(a, b)| a == v || b == v)
            .count()
    }
}

fn operation() -> impl Strategy<Value = Operation> {
    // Small identity space so sequences actually collide on vertices.
    prop_oneof![
        3 => any::<u8>().prop_map(|v| Operation::AddVertex(v % 16)),
        1 => any::<u8>().prop_map(|v| Operation::RemoveVertex(v % 16)),
        3 => (any::<u8>(), any::<u8>(), any::<i64>())
            .prop_map(|(u, v, w)| Operation::AddEdge(u % 16, v % 16, w)),
        1 => (any::<u8>(), any::<u8>())
            .prop_map(|(u, v)| Operation::RemoveEdge(u % 16, v % 16)),
    ]
}

proptest! {
    #[test]
    fn graph_matches_oracle(ops in proptest::collection::vec(operation(), 1..200)) {
        let mut graph: LinkedGraph<u8> = LinkedGraph::new();
        let mut oracle = Oracle::default();

        for op in ops {
            match op {
                Operation::AddVertex(v) => {
                    graph.add_vertex(v);
                    oracle.add_vertex(v);
                }
                Operation::RemoveVertex(v) => {
                    graph.remove_vertex(&v);
                    oracle.remove_vertex(v);
                }
                Operation::AddEdge(u, v, w) => {
                    graph.add_edge(&u, &v, w);
                    oracle.add_edge(u, v, w);
                }
                Operation::RemoveEdge(u, v) => {
                    graph.remove_edge(&u, &v);
                    oracle.remove_edge(u, v);
                }
            }

            prop_assert_eq!(graph.vertex_count(), oracle.vertices.len());
            prop_assert_eq!(graph.edge_count(), oracle.edges.len());
        }

        // Full final-state comparison.
        prop_assert_eq!(graph.vertices(), oracle.vertices.clone());

        for &v in &oracle.vertices {
            prop_assert!(graph.contains_vertex(&v));
            prop_assert_eq!(graph.degree(&v), oracle.degree(v), "degree mismatch for {}", v);
        }

        for (&(u, v), &w) in &oracle.edges {
            prop_assert!(graph.contains_edge(&u, &v));
            prop_assert!(graph.contains_edge(&v, &u));
            prop_assert_eq!(graph.weight(&u, &v), w);
            prop_assert_eq!(graph.weight(&v, &u), w);
        }

        // Neighbor enumeration agrees with the edge map, per vertex.
        for &v in &oracle.vertices {
            match graph.neighbors(&v) {
                None => prop_assert_eq!(oracle.degree(v), 0),
                Some(hood) => {
                    prop_assert_eq!(hood.len(), oracle.degree(v));
                    let mut seen = HashSet::new();
                    for (n, w) in hood.iter() {
                        let key = Oracle::pair(v, *n);
                        prop_assert_eq!(oracle.edges.get(&key), Some(w));
                        // No duplicate adjacency entries for an undirected edge.
                        prop_assert!(seen.insert(key));
                    }
                }
            }
        }
    }

    #[test]
    fn removal_is_total(vertices in proptest::collection::hash_set(any::<u8>(), 1..40)) {
        let mut graph: LinkedGraph<u8> = LinkedGraph::new();
        let vertices: Vec<u8> = vertices.into_iter().collect();
        for &v in &vertices {
            graph.add_vertex(v);
        }
        // Clique plus self-edges.
        for &u in &vertices {
            for &v in &vertices {
                graph.add_edge(&u, &v, 1);
            }
        }

        for &v in &vertices {
            graph.remove_vertex(&v);
        }
        prop_assert_eq!(graph.vertex_count(), 0);
        prop_assert_eq!(graph.edge_count(), 0);
    }
}
