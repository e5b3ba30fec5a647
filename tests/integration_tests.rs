//! End-to-end checks of the evaluator against exhaustive coloring counts.

use chromatic_polynomial::{
    chromatic_polynomial, chromatic_polynomial_with,
    coloring::{coloring_graph, count_proper_colorings},
    contract,
    parser::{format_edge_list, parse_edge_list},
    tree::random_tree,
    EvalConfig, Graph,
};
use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

// =========================================================================
// Strategies
// =========================================================================

/// Simple graphs on up to 6 vertices, each possible edge kept independently.
fn arb_graph() -> impl Strategy<Value = Graph> {
    (0usize..=6).prop_flat_map(|n| {
        let pairs: Vec<(usize, usize)> = (0..n)
            .flat_map(|u| ((u + 1)..n).map(move |v| (u, v)))
            .collect();
        prop::collection::vec(any::<bool>(), pairs.len()).prop_map(move |keep| {
            let edges: Vec<(usize, usize)> = pairs
                .iter()
                .zip(keep)
                .filter_map(|(&pair, kept)| kept.then_some(pair))
                .collect();
            Graph::from_edges(n, &edges).unwrap()
        })
    })
}

/// Graphs on up to 5 vertices where each possible edge appears 0 to 3 times.
fn arb_multigraph() -> impl Strategy<Value = Graph> {
    (0usize..=5).prop_flat_map(|n| {
        let pairs: Vec<(usize, usize)> = (0..n)
            .flat_map(|u| ((u + 1)..n).map(move |v| (u, v)))
            .collect();
        prop::collection::vec(0usize..=3, pairs.len()).prop_map(move |multiplicity| {
            let edges: Vec<(usize, usize)> = pairs
                .iter()
                .zip(multiplicity)
                .flat_map(|(&pair, copies)| std::iter::repeat(pair).take(copies))
                .collect();
            Graph::from_edges(n, &edges).unwrap()
        })
    })
}

/// Smallest k with a proper coloring.
fn chromatic_number(graph: &Graph) -> i64 {
    (0..).find(|&k| count_proper_colorings(graph, k).unwrap() > 0).unwrap()
}

// =========================================================================
// Properties
// =========================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_matches_brute_force(graph in arb_graph(), k in 0i64..5) {
        let expected = count_proper_colorings(&graph, k).unwrap() as i128;
        prop_assert_eq!(chromatic_polynomial(&graph, k).unwrap(), expected);
    }

    #[test]
    fn prop_multigraph_matches_brute_force(graph in arb_multigraph(), k in 0i64..4, depth in 0usize..3) {
        let expected = count_proper_colorings(&graph, k).unwrap() as i128;
        let config = EvalConfig::default().with_parallel_depth(depth);
        prop_assert_eq!(chromatic_polynomial(&graph, k).unwrap(), expected);
        prop_assert_eq!(chromatic_polynomial_with(&graph, k, &config).unwrap(), expected);
    }

    #[test]
    fn prop_deletion_contraction_identity(graph in arb_graph(), k in 0i64..5, pick in any::<prop::sample::Index>()) {
        let edges = graph.edges();
        prop_assume!(!edges.is_empty());
        let (u, v) = edges[pick.index(edges.len())];

        let mut minus = graph.clone();
        minus.remove_edge(u, v).unwrap();
        let mut contracted = graph.clone();
        contract(&mut contracted, u, v).unwrap();

        prop_assert_eq!(
            chromatic_polynomial(&graph, k).unwrap(),
            chromatic_polynomial(&minus, k).unwrap() - chromatic_polynomial(&contracted, k).unwrap()
        );
    }

    #[test]
    fn prop_zero_below_chromatic_number(graph in arb_graph()) {
        let chi = chromatic_number(&graph);
        for k in 0..chi {
            prop_assert_eq!(chromatic_polynomial(&graph, k).unwrap(), 0);
        }
        for k in chi..chi + 3 {
            prop_assert!(chromatic_polynomial(&graph, k).unwrap() > 0);
        }
    }

    #[test]
    fn prop_contraction_keeps_graph_simple(graph in arb_graph(), pick in any::<prop::sample::Index>()) {
        let edges = graph.edges();
        prop_assume!(!edges.is_empty());
        let (u, v) = edges[pick.index(edges.len())];

        let mut contracted = graph.clone();
        contract(&mut contracted, u, v).unwrap();
        let after = contracted.edges();

        prop_assert_eq!(contracted.num_vertices(), graph.num_vertices() - 1);
        prop_assert!(contracted.num_edges() < graph.num_edges());
        prop_assert!(after.iter().all(|&(a, b)| a < b));
        prop_assert!(after.windows(2).all(|w| w[0] != w[1]));
    }

    #[test]
    fn prop_parallel_matches_sequential(graph in arb_graph(), k in 0i64..4, depth in 0usize..5) {
        let config = EvalConfig::default().with_parallel_depth(depth);
        prop_assert_eq!(
            chromatic_polynomial_with(&graph, k, &config).unwrap(),
            chromatic_polynomial(&graph, k).unwrap()
        );
    }

    #[test]
    fn prop_evaluation_leaves_graph_untouched(graph in arb_graph(), k in 0i64..4) {
        let snapshot = graph.clone();
        let copy = graph.clone();
        chromatic_polynomial(&copy, k).unwrap();
        prop_assert_eq!(&graph, &snapshot);
        prop_assert_eq!(&copy, &snapshot);
    }

    #[test]
    fn prop_edge_list_round_trip(graph in arb_graph()) {
        let parsed = parse_edge_list(&format_edge_list(&graph)).unwrap();
        prop_assert_eq!(parsed.num_vertices(), graph.num_vertices());
        prop_assert_eq!(parsed.edges(), graph.edges());
    }
}

// =========================================================================
// Fixed examples
// =========================================================================

#[test]
fn test_edgeless_graphs() {
    for n in 0..6usize {
        for k in 0..5i64 {
            let expected = i128::from(k).pow(n as u32);
            assert_eq!(chromatic_polynomial(&Graph::new(n), k).unwrap(), expected);
        }
    }
}

#[test]
fn test_path_and_triangle() {
    let path = parse_edge_list("3\n0 1\n1 2\n").unwrap();
    assert_eq!(chromatic_polynomial(&path, 3).unwrap(), 12);
    assert_eq!(chromatic_polynomial(&path, 4).unwrap(), 36);

    let triangle = parse_edge_list("3\n0 1\n1 2\n0 2\n").unwrap();
    assert_eq!(chromatic_polynomial(&triangle, 3).unwrap(), 6);
    assert_eq!(chromatic_polynomial(&triangle, 2).unwrap(), 0);
}

#[test]
fn test_doubled_edge_on_path() {
    let doubled = Graph::from_edges(3, &[(0, 1), (0, 1), (1, 2)]).unwrap();
    for k in 0..5 {
        assert_eq!(
            chromatic_polynomial(&doubled, k).unwrap(),
            count_proper_colorings(&doubled, k).unwrap() as i128
        );
    }
    assert_eq!(chromatic_polynomial(&doubled, 3).unwrap(), 12);
}

#[test]
fn test_petersen_graph() {
    let outer = (0..5).map(|i| (i, (i + 1) % 5));
    let spokes = (0..5).map(|i| (i, i + 5));
    let inner = (0..5).map(|i| (i + 5, (i + 2) % 5 + 5));
    let edges: Vec<_> = outer.chain(spokes).chain(inner).collect();
    let petersen = Graph::from_edges(10, &edges).unwrap();

    assert_eq!(chromatic_polynomial(&petersen, 2).unwrap(), 0);
    assert_eq!(chromatic_polynomial(&petersen, 3).unwrap(), 120);
}

#[test]
fn test_coloring_graph_size_equals_polynomial() {
    let graph = Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)]).unwrap();
    for k in 0..5 {
        let derived = coloring_graph(&graph, k).unwrap();
        assert_eq!(
            derived.graph.num_vertices() as i128,
            chromatic_polynomial(&graph, k).unwrap()
        );
        assert_eq!(derived.edge_classes.len(), derived.graph.num_edges());
    }
}

#[test]
fn test_random_trees() {
    let mut rng = StdRng::seed_from_u64(2024);
    for n in 1..9 {
        let tree = random_tree(n, &mut rng).unwrap();
        // k (k - 1)^(n - 1)
        let expected = 4 * 3i128.pow(n as u32 - 1);
        assert_eq!(chromatic_polynomial(&tree.graph, 4).unwrap(), expected);
    }
}
