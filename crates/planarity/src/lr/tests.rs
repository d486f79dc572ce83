use super::*;
use crate::check::{ConflictKind, Outcome};
use crate::gen;
use crate::graph::Graph;
use crate::palm::{nesting_order, EdgeId, LowPoints, PalmTree};

fn run(g: &Graph) -> Vec<Outcome> {
    let palm = PalmTree::build(g).unwrap();
    let low = LowPoints::compute(&palm);
    let order = nesting_order(&palm, &low);
    let mut tester = LrTester::new(&palm, &low, &order);
    palm.components
        .iter()
        .map(|c| tester.test_component(c).unwrap())
        .collect()
}

fn planar(g: &Graph) -> bool {
    run(g).iter().all(|o| *o == Outcome::Planar)
}

fn without_edge(g: &Graph, skip: usize) -> Graph {
    let edges = g
        .edges()
        .iter()
        .enumerate()
        .filter(|&(k, _)| k != skip)
        .map(|(_, &e)| e);
    Graph::from_edges(g.vertex_count(), edges).unwrap()
}

#[test]
fn interval_and_pair_helpers() {
    let low = vec![0, 3, 1];
    let empty = Interval::default();
    assert!(empty.is_empty());
    assert!(!empty.conflicting(EdgeId(0), &low));

    let i = Interval::new(EdgeId(2), EdgeId(1));
    assert!(!i.is_empty());
    assert!(i.conflicting(EdgeId(2), &low));
    assert!(!i.conflicting(EdgeId(1), &low));

    let mut p = ConflictPair::right_only(EdgeId(1));
    assert_eq!(p.lowest(&low), Some(3));
    p.left = Interval::new(EdgeId(2), EdgeId(2));
    assert_eq!(p.lowest(&low), Some(1));
    p.swap();
    assert_eq!(p.right, Interval::new(EdgeId(2), EdgeId(2)));
    assert_eq!(ConflictPair::default().lowest(&low), None);
}

#[test]
fn trees_cycles_and_empty_graphs() {
    assert!(planar(&Graph::new(0)));
    assert!(planar(&Graph::new(4)));
    assert!(planar(&gen::cycle(3).unwrap()));
    assert!(planar(&gen::cycle(11).unwrap()));
    for seed in 0..10 {
        assert!(planar(&gen::random_tree(60, seed).unwrap()), "seed {seed}");
    }
}

#[test]
fn k4_planar_under_every_sampled_labeling() {
    let k4 = gen::complete(4).unwrap();
    for seed in 0..40 {
        assert!(planar(&gen::scramble(&k4, seed).unwrap()), "seed {seed}");
    }
}

#[test]
fn kuratowski_graphs_rejected() {
    let k5 = gen::complete(5).unwrap();
    let k33 = gen::complete_bipartite(3, 3).unwrap();
    for seed in 0..40 {
        for g in [&k5, &k33] {
            let outcomes = run(&gen::scramble(g, seed).unwrap());
            assert!(
                matches!(outcomes[..], [Outcome::Conflict(ConflictKind::SideConflict { .. })]),
                "seed {seed}: {outcomes:?}"
            );
        }
    }
}

#[test]
fn removing_any_edge_of_k5_or_k33_makes_it_planar() {
    for g in [
        gen::complete(5).unwrap(),
        gen::complete_bipartite(3, 3).unwrap(),
    ] {
        for skip in 0..g.edge_count() {
            assert!(planar(&without_edge(&g, skip)), "skip {skip}");
        }
    }
}

#[test]
fn subdivisions_and_petersen_rejected() {
    assert!(!planar(&gen::petersen().unwrap()));
    let k5 = gen::subdivide(&gen::complete(5).unwrap()).unwrap();
    let k33 = gen::subdivide(&gen::complete_bipartite(3, 3).unwrap()).unwrap();
    for seed in 0..10 {
        assert!(!planar(&gen::scramble(&k5, seed).unwrap()), "seed {seed}");
        assert!(!planar(&gen::scramble(&k33, seed).unwrap()), "seed {seed}");
    }
}

#[test]
fn grids_and_wheels_accepted() {
    assert!(planar(&gen::grid(3, 3).unwrap()));
    assert!(planar(&gen::grid(7, 9).unwrap()));
    assert!(planar(&gen::triangulated_grid(6, 6).unwrap()));
    for spokes in 3..12 {
        assert!(planar(&gen::wheel(spokes).unwrap()), "spokes {spokes}");
    }
}

#[test]
fn maximal_planar_graphs_accept_no_extra_edge() {
    for seed in 0..15 {
        let mut g = gen::random_maximal_planar(20, seed).unwrap();
        assert!(planar(&g), "seed {seed}");
        let missing = (0..20)
            .flat_map(|u| (u + 1..20).map(move |v| (u, v)))
            .find(|&(u, v)| !g.has_edge(u, v))
            .unwrap();
        g.add_edge(missing.0, missing.1).unwrap();
        assert!(!planar(&g), "seed {seed} plus {missing:?}");
    }
}

#[test]
fn bucket_false_negatives_are_planar_here() {
    let k4 = Graph::from_edges(4, [(1, 0), (1, 2), (1, 3), (0, 2), (0, 3), (2, 3)]).unwrap();
    assert!(planar(&k4));
    let g = Graph::from_edges(
        6,
        [(1, 3), (2, 4), (0, 1), (0, 2), (1, 5), (2, 5), (1, 2), (3, 4)],
    )
    .unwrap();
    assert!(planar(&g));
}

#[test]
fn bucket_false_positive_rejected_here() {
    assert!(!planar(&crate::buckets::false_positive()));
}

#[test]
fn components_tested_independently() {
    let k5 = gen::complete(5).unwrap();
    let g = gen::disjoint_union(&gen::grid(3, 3).unwrap(), &k5).unwrap();
    let outcomes = run(&g);
    assert_eq!(outcomes.len(), 2);
    assert_eq!(outcomes[0], Outcome::Planar);
    assert!(matches!(outcomes[1], Outcome::Conflict(_)));
}

#[test]
fn long_cycle_runs_without_recursion() {
    assert!(planar(&gen::cycle(150_000).unwrap()));
}
