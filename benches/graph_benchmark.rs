use braid::LinkedGraph;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use petgraph::graphmap::UnGraphMap;

fn bench_edge_churn(c: &mut Criterion) {
    let size = 1000u32;

    c.bench_function("linked_graph_edge_churn", |b| {
        b.iter(|| {
            let mut graph: LinkedGraph<u32> = LinkedGraph::with_capacity(size as usize, size as usize);
            for i in 0..size {
                graph.add_vertex(i);
            }
            // Chain: 0-1-...-N, then tear the odd links back out.
            for i in 0..size - 1 {
                graph.add_edge(&i, &(i + 1), i as i64);
            }
            for i in (1..size - 1).step_by(2) {
                graph.remove_edge(&i, &(i + 1));
            }
            black_box(graph.edge_count())
        });
    });

    c.bench_function("petgraph_graphmap_edge_churn", |b| {
        b.iter(|| {
            let mut graph: UnGraphMap<u32, i64> = UnGraphMap::new();
            for i in 0..size {
                graph.add_node(i);
            }
            for i in 0..size - 1 {
                graph.add_edge(i, i + 1, i as i64);
            }
            for i in (1..size - 1).step_by(2) {
                graph.remove_edge(i, i + 1);
            }
            black_box(graph.edge_count())
        });
    });
}

fn bench_vertex_removal(c: &mut Criterion) {
    let size = 500u32;

    c.bench_function("linked_graph_star_center_removal", |b| {
        b.iter(|| {
            let mut graph: LinkedGraph<u32> = LinkedGraph::with_capacity(size as usize + 1, size as usize);
            graph.add_vertex(0);
            for i in 1..=size {
                graph.add_vertex(i);
                graph.add_edge(&0, &i, 1);
            }
            graph.remove_vertex(&0);
            black_box(graph.vertex_count())
        });
    });

    c.bench_function("petgraph_graphmap_star_center_removal", |b| {
        b.iter(|| {
            let mut graph: UnGraphMap<u32, i64> = UnGraphMap::new();
            graph.add_node(0);
            for i in 1..=size {
                graph.add_node(i);
                graph.add_edge(0, i, 1);
            }
            graph.remove_node(0);
            black_box(graph.node_count())
        });
    });
}

fn bench_neighbor_walk(c: &mut Criterion) {
    let size = 1000u32;

    let mut graph: LinkedGraph<u32> = LinkedGraph::with_capacity(size as usize + 1, size as usize);
    graph.add_vertex(0);
    for i in 1..=size {
        graph.add_vertex(i);
        graph.add_edge(&0, &i, i as i64);
    }

    let mut pg: UnGraphMap<u32, i64> = UnGraphMap::new();
    pg.add_node(0);
    for i in 1..=size {
        pg.add_node(i);
        pg.add_edge(0, i, i as i64);
    }

    c.bench_function("linked_graph_neighbor_walk", |b| {
        b.iter(|| {
            let hood = graph.neighbors(&0).unwrap();
            black_box(hood.weights.iter().sum::<i64>())
        });
    });

    c.bench_function("petgraph_graphmap_neighbor_walk", |b| {
        b.iter(|| {
            let sum: i64 = pg.edges(0).map(|(_, _, w)| *w).sum();
            black_box(sum)
        });
    });

    c.bench_function("linked_graph_degree_lookup", |b| {
        b.iter(|| black_box(graph.degree(&0)));
    });
}

criterion_group!(
    benches,
    bench_edge_churn,
    bench_vertex_removal,
    bench_neighbor_walk
);
criterion_main!(benches);
