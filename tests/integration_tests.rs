//! Integration tests for trueno-rank
//!
//! Tests real-world usage scenarios (small linked corpora)

use trueno_rank::{
    iterate_rank, iterate_rank_with, sample_rank_seeded, sample_rank_with, transition, LinkGraph,
    PageRankConfig, RankError,
};

fn three_pages() -> LinkGraph {
    LinkGraph::from_pages([
        ("A", vec!["B"]),
        ("B", vec!["A", "C"]),
        ("C", vec![]),
    ])
}

#[test]
fn test_dangling_transition_is_uniform() {
    let graph = three_pages();
    let dist = transition(&graph, "C", 0.85).unwrap();

    assert_eq!(dist.len(), 3);
    for page in ["A", "B", "C"] {
        assert!((dist.get(page).unwrap() - 1.0 / 3.0).abs() < 1e-12);
    }
}

#[test]
fn test_three_pages_iterative() {
    let graph = three_pages();
    let ranks = iterate_rank(&graph, 0.85).unwrap();

    assert!((ranks.total() - 1.0).abs() < 1e-9);

    let a = ranks.get("A").unwrap();
    let b = ranks.get("B").unwrap();
    let c = ranks.get("C").unwrap();
    assert!(c < b, "C={c} B={b}");

    // Fixed point of the d = 0.85 equations: A = C = 57/188, B = 37/94
    assert!((a - 57.0 / 188.0).abs() < 1e-3, "A={a}");
    assert!((b - 37.0 / 94.0).abs() < 1e-3, "B={b}");
    assert!((c - 57.0 / 188.0).abs() < 1e-3, "C={c}");
    assert!(c <= a + 1e-12, "C={c} A={a}");
    assert!(b > a);
}

#[test]
fn test_single_isolated_page() {
    let graph = LinkGraph::from_pages([("A", Vec::<String>::new())]);

    let iterated = iterate_rank(&graph, 0.85).unwrap();
    assert!((iterated.get("A").unwrap() - 1.0).abs() < 1e-12);

    let sampled = sample_rank_seeded(&graph, 0.85, 10_000, 1).unwrap();
    assert_eq!(sampled.get("A"), Some(1.0));
}

#[test]
fn test_empty_corpus() {
    let graph = LinkGraph::from_pages(Vec::<(String, Vec<String>)>::new());

    assert!(iterate_rank(&graph, 0.85).unwrap().is_empty());
    assert!(sample_rank_seeded(&graph, 0.85, 100, 1).unwrap().is_empty());
}

#[test]
fn test_two_page_loop_sampling_converges() {
    let graph = LinkGraph::from_pages([("A", vec!["B"]), ("B", vec!["A"])]);

    let ranks = sample_rank_seeded(&graph, 0.85, 2 * 20_000, 17).unwrap();

    assert!((ranks.total() - 1.0).abs() < 1e-3);
    assert!((ranks.get("A").unwrap() - 0.5).abs() < 0.02);
    assert!((ranks.get("B").unwrap() - 0.5).abs() < 0.02);
}

#[test]
fn test_estimators_agree() {
    // 2.html is the hub
    let graph = LinkGraph::from_pages([
        ("1.html", vec!["2.html"]),
        ("2.html", vec!["1.html", "3.html"]),
        ("3.html", vec!["2.html", "4.html"]),
        ("4.html", vec!["2.html"]),
    ]);

    let config = PageRankConfig::default().with_samples(50_000).with_seed(2024);
    let sampled = sample_rank_with(&graph, &config).unwrap();
    let iterated = iterate_rank(&graph, config.damping).unwrap();

    for (page, rank) in iterated.iter() {
        let estimate = sampled.get(page).unwrap();
        assert!(
            (estimate - rank).abs() < 0.02,
            "{page}: sampled {estimate} vs iterated {rank}"
        );
    }
    assert_eq!(iterated.sorted_by_rank()[0].0, "2.html");
}

#[test]
fn test_disconnected_components() {
    // Two separate loops of equal size share the rank evenly
    let graph = LinkGraph::from_pages([
        ("a1", vec!["a2"]),
        ("a2", vec!["a1"]),
        ("b1", vec!["b2"]),
        ("b2", vec!["b1"]),
    ]);

    let ranks = iterate_rank(&graph, 0.85).unwrap();
    for (_, rank) in ranks.iter() {
        assert!((rank - 0.25).abs() < 1e-9);
    }
}

#[test]
fn test_convergence_delta_within_tolerance() {
    let graph = three_pages();
    let config = PageRankConfig::default();
    let report = iterate_rank_with(&graph, &config).unwrap();

    assert!(report.max_delta <= 0.001);

    // Same graph and damping, same bits
    let again = iterate_rank(&graph, 0.85).unwrap();
    assert_eq!(again, report.ranks);
}

#[test]
fn test_invalid_configuration_rejected() {
    let graph = three_pages();

    for damping in [0.0, 1.0, -0.5, 1.2, f64::NAN] {
        let err = iterate_rank(&graph, damping).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<RankError>(),
            Some(RankError::InvalidDamping(_))
        ));
        assert!(sample_rank_seeded(&graph, damping, 10, 0).is_err());
        assert!(transition(&graph, "A", damping).is_err());
    }

    let err = sample_rank_seeded(&graph, 0.85, 0, 0).unwrap_err();
    assert_eq!(
        err.downcast_ref::<RankError>(),
        Some(&RankError::InvalidSampleCount)
    );
}

#[test]
fn test_invalid_configuration_rejected_on_empty_graph() {
    let graph = LinkGraph::default();
    assert!(iterate_rank(&graph, 1.5).is_err());
    assert!(sample_rank_seeded(&graph, 0.85, 0, 0).is_err());
}
