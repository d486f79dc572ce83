//! Verdict properties over generated graph families.

use planarity::api::{
    check_planarity, complete, complete_bipartite, cycle, disjoint_union, grid, is_planar,
    petersen, random_graph, random_maximal_planar, random_tree, scramble, Graph, PlanarityCfg,
    PlanarityError, Verdict,
};
use proptest::prelude::*;

fn lr() -> PlanarityCfg {
    PlanarityCfg::default()
}

fn buckets() -> PlanarityCfg {
    PlanarityCfg {
        strategy: planarity::Strategy::IntervalBuckets,
        ..PlanarityCfg::default()
    }
}

fn pair_count(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

/// `(n, m, seed)` for a simple graph with `m` edges on `n` vertices.
fn sparse_graph() -> impl Strategy<Value = (usize, usize, u64)> {
    (1usize..16).prop_flat_map(|n| {
        let max_m = pair_count(n).min(3 * n);
        (Just(n), 0..=max_m, any::<u64>())
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(96))]

    #[test]
    fn verdict_ignores_labels_and_insertion_order(
        (n, m, seed) in sparse_graph(),
        relabel_seed in any::<u64>(),
    ) {
        let g = random_graph(n, m, seed).unwrap();
        let h = scramble(&g, relabel_seed).unwrap();
        prop_assert_eq!(is_planar(&g).unwrap(), is_planar(&h).unwrap());
    }

    #[test]
    fn trees_are_planar_under_both_strategies(n in 1usize..300, seed in any::<u64>()) {
        let g = random_tree(n, seed).unwrap();
        prop_assert!(check_planarity(&g, lr()).unwrap().is_planar());
        prop_assert!(check_planarity(&g, buckets()).unwrap().is_planar());
    }

    #[test]
    fn maximal_planar_graphs_are_planar(n in 3usize..80, seed in any::<u64>()) {
        let g = random_maximal_planar(n, seed).unwrap();
        prop_assert!(is_planar(&g).unwrap());
    }

    #[test]
    fn too_many_edges_is_non_planar(n in 5usize..14, extra in 1usize..6, seed in any::<u64>()) {
        let m = (3 * n - 6 + extra).min(pair_count(n));
        let g = random_graph(n, m, seed).unwrap();
        prop_assert!(!is_planar(&g).unwrap());
    }

    #[test]
    fn planar_part_does_not_hide_k5(n in 3usize..40, seed in any::<u64>()) {
        let planar = random_maximal_planar(n, seed).unwrap();
        let k5 = complete(5).unwrap();
        prop_assert!(!is_planar(&disjoint_union(&planar, &k5).unwrap()).unwrap());
        prop_assert!(!is_planar(&disjoint_union(&k5, &planar).unwrap()).unwrap());
    }

    #[test]
    fn bucket_fold_never_accepts_kuratowski_graphs(seed in any::<u64>()) {
        for g in [complete(5).unwrap(), complete_bipartite(3, 3).unwrap()] {
            let h = scramble(&g, seed).unwrap();
            prop_assert!(!check_planarity(&h, buckets()).unwrap().is_planar());
        }
    }
}

#[test]
fn kuratowski_table() {
    assert!(is_planar(&complete(4).unwrap()).unwrap());
    assert!(!is_planar(&complete(5).unwrap()).unwrap());
    assert!(!is_planar(&complete_bipartite(3, 3).unwrap()).unwrap());
    assert!(!is_planar(&petersen().unwrap()).unwrap());
}

#[test]
fn empty_graphs_are_planar() {
    for n in [0, 1, 2, 50] {
        assert!(is_planar(&Graph::new(n)).unwrap());
    }
}

#[test]
fn invalid_vertex_does_not_disturb_later_tests() {
    let mut g = cycle(6).unwrap();
    let before = is_planar(&g).unwrap();
    let err = g.add_edge(6, 0).unwrap_err();
    assert_eq!(
        err,
        PlanarityError::InvalidVertex {
            vertex: 6,
            vertex_count: 6
        }
    );
    assert_eq!(g.edge_count(), 6);
    assert_eq!(is_planar(&g).unwrap(), before);
}

#[test]
fn conflicts_name_the_failing_component() {
    let g = disjoint_union(&grid(4, 4).unwrap(), &complete_bipartite(3, 3).unwrap()).unwrap();
    let verdict = check_planarity(&g, lr()).unwrap();
    match verdict {
        Verdict::NonPlanar(conflicts) => {
            assert_eq!(conflicts.len(), 1);
            assert_eq!(conflicts[0].root, 16);
        }
        Verdict::Planar => panic!("K3,3 component accepted"),
    }
}
