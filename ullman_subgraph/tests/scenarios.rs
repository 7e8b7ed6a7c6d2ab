#![allow(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

use rstest::rstest;
use ullman_subgraph::{
    CompatibilityMask, Config, GraphIndex, GraphRole, LabeledGraph, PermutationEnumerator,
    SubgraphMatcher, VerifyMethod,
};

mod common;

use common::{clique, graph, init_test_logger, pairs, path};

lazy_static::lazy_static! {
    static ref TRIANGLE: LabeledGraph = clique(&["p", "q", "r"], "X");
    static ref EDGE: LabeledGraph = path(&["a", "b"], "X");
}

fn config(method: VerifyMethod) -> Config {
    Config::builder().verify(method).build()
}

#[rstest]
fn edge_into_triangle_gives_every_injective_map(
    #[values(VerifyMethod::Lookup, VerifyMethod::MatrixProduct)] method: VerifyMethod,
) {
    init_test_logger();
    let m = SubgraphMatcher::new(&*EDGE, &*TRIANGLE, config(method)).unwrap();

    let all: Vec<Vec<(String, String)>> = m.all_embeddings().map(|e| pairs(&e)).collect();
    let expected: Vec<Vec<(String, String)>> = [
        ("p", "q"),
        ("p", "r"),
        ("q", "p"),
        ("q", "r"),
        ("r", "p"),
        ("r", "q"),
    ]
    .iter()
    .map(|(a, b)| {
        vec![
            ("a".to_string(), (*a).to_string()),
            ("b".to_string(), (*b).to_string()),
        ]
    })
    .collect();
    assert_eq!(all, expected);

    let first = m.first_embedding().unwrap();
    assert_eq!(pairs(&first), expected[0]);
    assert!(m.has_embedding());
}

#[rstest]
fn degree_too_high_means_no_embedding(
    #[values(VerifyMethod::Lookup, VerifyMethod::MatrixProduct)] method: VerifyMethod,
) {
    init_test_logger();
    // Star with a degree-3 centre against a 4-cycle (max degree 2).
    let needle = graph(
        &[("c", "X"), ("l1", "X"), ("l2", "X"), ("l3", "X")],
        &[("c", "l1"), ("c", "l2"), ("c", "l3")],
    );
    let haystack = graph(
        &[("p", "X"), ("q", "X"), ("r", "X"), ("s", "X")],
        &[("p", "q"), ("q", "r"), ("r", "s"), ("s", "p")],
    );
    let m = SubgraphMatcher::new(&needle, &haystack, config(method)).unwrap();

    assert!(!m.has_embedding());
    assert_eq!(m.all_embeddings().count(), 0);
    assert!(m.first_embedding().is_none());

    let q = m.all_embeddings();
    assert!(q.mask().is_unsatisfiable());
}

#[rstest]
#[case::empty_haystack(graph(&[], &[]))]
#[case::triangle(clique(&["p", "q", "r"], "X"))]
fn empty_needle_has_one_empty_embedding(#[case] haystack: LabeledGraph) {
    init_test_logger();
    let needle = graph(&[], &[]);
    let m = SubgraphMatcher::new(&needle, &haystack, Config::default()).unwrap();

    let all: Vec<_> = m.all_embeddings().collect();
    assert_eq!(all.len(), 1);
    assert!(all[0].is_empty());
    assert!(m.has_embedding());
    assert_eq!(m.first_embedding(), Some(all[0].clone()));
}

#[test]
fn disjoint_labels_exhaust_immediately() {
    init_test_logger();
    let needle = graph(&[("a", "X"), ("b", "Y")], &[("a", "b")]);
    let haystack = graph(&[("p", "Z"), ("q", "W")], &[("p", "q")]);

    let n = GraphIndex::build(&needle, GraphRole::Needle).unwrap();
    let h = GraphIndex::build(&haystack, GraphRole::Haystack).unwrap();
    let mask = CompatibilityMask::build(&n, &h);
    assert_eq!(mask.allowed_pairs(), 0);

    let mut e = PermutationEnumerator::new(mask);
    assert!(e.advance().is_none());
    assert!(e.is_exhausted());

    let m = SubgraphMatcher::new(&needle, &haystack, Config::default()).unwrap();
    let mut q = m.all_embeddings();
    assert!(q.next().is_none());
    assert_eq!(q.stats().candidates, 0);
}

#[test]
fn larger_needle_than_haystack_is_empty() {
    init_test_logger();
    let needle = clique(&["a", "b", "c", "d"], "X");
    let m = SubgraphMatcher::new(&needle, &*TRIANGLE, Config::default()).unwrap();

    let mut q = m.all_embeddings();
    assert!(q.next().is_none());
    assert_eq!(q.stats().candidates, 0);
    assert!(!m.has_embedding());
}

#[rstest]
#[case::path3_into_path4(
    path(&["a", "b", "c"], "X"),
    path(&["p", "q", "r", "s"], "X"),
    4
)]
#[case::triangle_into_path4(
    clique(&["a", "b", "c"], "X"),
    path(&["p", "q", "r", "s"], "X"),
    0
)]
#[case::edge_into_square(
    path(&["a", "b"], "X"),
    graph(
        &[("p", "X"), ("q", "X"), ("r", "X"), ("s", "X")],
        &[("p", "q"), ("q", "r"), ("r", "s"), ("s", "p")],
    ),
    8
)]
#[case::edge_into_k4(path(&["a", "b"], "X"), clique(&["p", "q", "r", "s"], "X"), 12)]
#[case::triangle_into_k4(clique(&["a", "b", "c"], "X"), clique(&["p", "q", "r", "s"], "X"), 24)]
#[case::square_into_k4(
    graph(
        &[("a", "X"), ("b", "X"), ("c", "X"), ("d", "X")],
        &[("a", "b"), ("b", "c"), ("c", "d"), ("d", "a")],
    ),
    clique(&["p", "q", "r", "s"], "X"),
    24
)]
#[case::mixed_labels(
    graph(&[("a", "X"), ("b", "Y")], &[("a", "b")]),
    graph(
        &[("p", "X"), ("q", "Y"), ("r", "X"), ("s", "Y")],
        &[("p", "q"), ("q", "r")],
    ),
    2
)]
#[case::isolated_needle_nodes(
    graph(&[("a", "X"), ("b", "X")], &[]),
    graph(&[("p", "X"), ("q", "X"), ("r", "Y")], &[]),
    2
)]
fn embedding_counts(
    #[case] needle: LabeledGraph,
    #[case] haystack: LabeledGraph,
    #[case] expected: usize,
    #[values(VerifyMethod::Lookup, VerifyMethod::MatrixProduct)] method: VerifyMethod,
) {
    init_test_logger();
    let m = SubgraphMatcher::new(&needle, &haystack, config(method)).unwrap();

    let all = m.all_embeddings().count();
    assert_eq!(
        all, expected,
        "expected {expected} embeddings with {method:?}, found {all}"
    );
    assert_eq!(m.count_embeddings(), expected);
    assert_eq!(m.has_embedding(), expected > 0);
}

#[test]
fn directed_edges_keep_orientation() {
    init_test_logger();
    let needle = LabeledGraph::builder()
        .directed(true)
        .node("a", "X")
        .node("b", "X")
        .edge("a", "b")
        .build()
        .unwrap();
    let haystack = LabeledGraph::builder()
        .directed(true)
        .node("p", "X")
        .node("q", "X")
        .node("r", "X")
        .edge("p", "q")
        .edge("q", "r")
        .build()
        .unwrap();

    for method in [VerifyMethod::Lookup, VerifyMethod::MatrixProduct] {
        let m = SubgraphMatcher::new(&needle, &haystack, config(method)).unwrap();
        let found: Vec<_> = m.all_embeddings().map(|e| pairs(&e)).collect();
        assert_eq!(
            found,
            vec![
                vec![("a".into(), "p".into()), ("b".into(), "q".into())],
                vec![("a".into(), "q".into()), ("b".into(), "r".into())],
            ]
        );
    }
}

#[test]
fn abandoning_a_query_leaves_the_matcher_usable() {
    init_test_logger();
    let m = SubgraphMatcher::new(&*EDGE, &*TRIANGLE, Config::default()).unwrap();

    let taken: Vec<_> = m.all_embeddings().take(2).collect();
    assert_eq!(taken.len(), 2);

    let all: Vec<_> = m.all_embeddings().collect();
    assert_eq!(all.len(), 6);
    assert_eq!(&all[..2], &taken[..]);
}

#[test]
fn embeddings_outlive_the_matcher() {
    let found = {
        let m = SubgraphMatcher::new(&*EDGE, &*TRIANGLE, Config::default()).unwrap();
        m.first_embedding().unwrap()
    };
    assert_eq!(found.get(&"b".to_string()).map(String::as_str), Some("q"));
}
