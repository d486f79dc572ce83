//! Verdicts of both strategies on a small table of classic graphs.
//!
//! Run with `cargo run -p planarity --example kuratowski`. Each row is tested
//! as built and after a seeded relabeling; the bucket fold may disagree with
//! itself across the two, the left-right test never does.

use planarity::api::{
    check_planarity, complete, complete_bipartite, grid, petersen, scramble, subdivide, wheel,
    Graph, PlanarityCfg, Strategy, Verdict,
};

fn verdict_str(v: &Verdict) -> String {
    match v {
        Verdict::Planar => "planar".to_string(),
        Verdict::NonPlanar(conflicts) => format!("non-planar ({:?})", conflicts[0].kind),
    }
}

fn main() {
    let rows: Vec<(&str, Graph)> = vec![
        ("K4", complete(4).expect("K4")),
        ("K5", complete(5).expect("K5")),
        ("K3,3", complete_bipartite(3, 3).expect("K3,3")),
        ("grid 3x3", grid(3, 3).expect("grid")),
        ("wheel 5", wheel(5).expect("wheel")),
        ("Petersen", petersen().expect("petersen")),
        ("K5 subdivided", subdivide(&complete(5).expect("K5")).expect("subdivide")),
    ];

    for (name, g) in rows {
        let relabeled = scramble(&g, 2024).expect("scramble");
        for strategy in [Strategy::LeftRight, Strategy::IntervalBuckets] {
            let cfg = PlanarityCfg {
                strategy,
                ..PlanarityCfg::default()
            };
            let a = check_planarity(&g, cfg).expect("check");
            let b = check_planarity(&relabeled, cfg).expect("check");
            let label = format!("{strategy:?}");
            println!(
                "{name:<14} {label:<16} as built: {:<40} relabeled: {}",
                verdict_str(&a),
                verdict_str(&b)
            );
        }
    }
}
