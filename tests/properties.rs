use std::{collections::BTreeSet, io::Cursor};

use mtxgraph::{algo::*, io::*, prelude::*, utils::*};
use proptest::prelude::*;

/// Node count and 1-based raw edges that include zero, out-of-range labels and self-loops
fn raw_graph() -> impl Strategy<Value = (NumNodes, Vec<(i64, i64)>)> {
    (1u32..40).prop_flat_map(|n| {
        let label = 0i64..=(n as i64 + 2);
        (
            Just(n),
            prop::collection::vec((label.clone(), label), 0..150),
        )
    })
}

fn build(n: NumNodes, edges: &[(i64, i64)]) -> (AdjGraph, BuildReport) {
    let mut builder = AdjacencyBuilder::new(n);
    for (line, &(u, v)) in edges.iter().enumerate() {
        // defective edges are counted by the builder
        let _ = builder.try_insert(line + 1, RawEdge(u, v));
    }
    builder.finish()
}

fn valid_normalized_edges(n: NumNodes, edges: &[(i64, i64)]) -> BTreeSet<(i64, i64)> {
    edges
        .iter()
        .filter(|&&(u, v)| u != v && (1..=n as i64).contains(&u) && (1..=n as i64).contains(&v))
        .map(|&(u, v)| (u.min(v), u.max(v)))
        .collect()
}

fn metis_bytes(graph: &AdjGraph) -> Vec<u8> {
    let mut buffer = Vec::new();
    MetisWriter::new().try_write_graph(graph, &mut buffer).unwrap();
    buffer
}

proptest! {
    #[test]
    fn built_graph_is_symmetric_and_loop_free((n, edges) in raw_graph()) {
        let (graph, _) = build(n, &edges);

        prop_assert!(graph.is_symmetric());
        for u in graph.vertices() {
            prop_assert!(!graph.has_self_loop(u));
            for v in graph.neighbors_of(u) {
                prop_assert!(graph.has_edge(v, u));
            }
        }
    }

    #[test]
    fn edge_count_matches_distinct_valid_edges((n, edges) in raw_graph()) {
        let (graph, report) = build(n, &edges);
        let expected = valid_normalized_edges(n, &edges);

        prop_assert_eq!(graph.number_of_edges(), expected.len() as NumEdges);
        prop_assert_eq!(graph.edges(true).count() as NumEdges, graph.number_of_edges());
        prop_assert_eq!(graph.degree_sum(), 2 * graph.number_of_edges());
        prop_assert_eq!(report.accepted, expected.len() as u64);
        prop_assert_eq!(
            report.accepted + report.duplicates + report.skipped(),
            edges.len() as u64
        );
    }

    #[test]
    fn renumbering_is_an_order_preserving_bijection(
        retained in prop::collection::vec(0u32..500, 0..80)
    ) {
        let mapping = Renumbering::from_retained(retained.iter().copied());
        let distinct: BTreeSet<Node> = retained.iter().copied().collect();

        prop_assert_eq!(mapping.len() as usize, distinct.len());
        for (new, &old) in distinct.iter().enumerate() {
            prop_assert_eq!(mapping.new_id_of(old), Some(new as Node));
            prop_assert_eq!(mapping.old_id_of(new as Node), Some(old));
        }
        prop_assert_eq!(mapping.old_id_of(mapping.len()), None);
    }

    #[test]
    fn bounded_bfs_stays_within_the_component(
        (n, edges) in raw_graph(),
        seed in any::<u32>(),
        limit in 0u32..50
    ) {
        let (graph, _) = build(n, &edges);
        let start = seed % n;

        let component = graph.bounded_bfs(start, n).unwrap().into_visited();
        let visited = graph.bounded_bfs(start, limit).unwrap().into_visited();

        prop_assert!(visited.contains(&start));
        prop_assert!(visited.iter().all(|u| component.contains(u)));
        prop_assert_eq!(visited.len(), component.len().min(limit.max(1) as usize));

        let extracted = graph.extract_bfs(start, limit).unwrap();
        prop_assert_eq!(extracted.graph.number_of_nodes() as usize, visited.len());
        for Edge(a, b) in extracted.graph.edges(true) {
            let u = extracted.mapping.old_id_of(a).unwrap();
            let v = extracted.mapping.old_id_of(b).unwrap();
            prop_assert!(u < v);
            prop_assert!(graph.has_edge(u, v));
        }
    }

    #[test]
    fn bfs_subgraph_is_connected_from_the_source(
        (n, edges) in raw_graph(),
        seed in any::<u32>(),
        limit in 0u32..50
    ) {
        let (graph, _) = build(n, &edges);
        let start = seed % n;

        let extracted = graph.extract_bfs(start, limit).unwrap();
        let m = extracted.graph.number_of_nodes();
        let source = extracted.mapping.new_id_of(start).unwrap();

        let reached = extracted.graph.bounded_bfs(source, m).unwrap().into_visited();
        prop_assert_eq!(reached.len(), m as usize);
    }

    #[test]
    fn window_is_a_shifted_induced_subgraph(
        (n, edges) in raw_graph(),
        offset in 0u64..45,
        limit in 0u32..45
    ) {
        let (graph, _) = build(n, &edges);
        let window = graph.extract_window(offset, limit);

        prop_assert_eq!(window.graph.number_of_nodes(), limit);
        for Edge(a, b) in window.graph.edges(true) {
            let u = window.mapping.old_id_of(a).unwrap();
            let v = window.mapping.old_id_of(b).unwrap();
            prop_assert_eq!(label_of(u) - offset, a as u64);
            prop_assert_eq!(label_of(v) - offset, b as u64);
            prop_assert!(graph.has_edge(u, v));
        }

        let in_window = |u: Node| (offset..offset + limit as u64).contains(&label_of(u));
        let expected = graph
            .edges(true)
            .filter(|&Edge(u, v)| in_window(u) && in_window(v))
            .count();
        prop_assert_eq!(window.graph.number_of_edges() as usize, expected);
    }

    #[test]
    fn metis_round_trip_is_idempotent((n, edges) in raw_graph()) {
        let (graph, _) = build(n, &edges);
        let first = metis_bytes(&graph);

        let parsed = MetisReader::new().try_read_graph(Cursor::new(first.clone())).unwrap();
        prop_assert_eq!(&parsed.graph, &graph);
        prop_assert_eq!(parsed.report.skipped(), 0);
        prop_assert_eq!(metis_bytes(&parsed.graph), first);
    }
}
