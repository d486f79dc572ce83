mod input;
mod provenance;
mod report;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use planarity::gen;
use planarity::palm::PalmTree;
use planarity::{check_palm_tree, Graph, PlanarityCfg, Strategy};
use provenance::Payload;
use report::CheckReport;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "planarity")]
#[command(about = "DFS-based planarity testing for edge lists")]
struct Cmd {
    /// Raise log verbosity (-v debug, -vv trace); logs go to stderr
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    action: Action,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StrategyArg {
    /// Left-right conflict-pair test (exact)
    Lr,
    /// Nested-interval bucket fold (heuristic)
    Buckets,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Lr => Strategy::LeftRight,
            StrategyArg::Buckets => Strategy::IntervalBuckets,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Family {
    Complete,
    Bipartite,
    Cycle,
    Path,
    Grid,
    Wheel,
    Petersen,
    Tree,
    Random,
    MaximalPlanar,
}

#[derive(Subcommand)]
enum Action {
    /// Test an edge list (.csv, .parquet, or text) for planarity
    Check {
        #[arg(long)]
        input: PathBuf,
        /// Vertex count; defaults to the file's declaration or max id + 1
        #[arg(long)]
        vertices: Option<usize>,
        #[arg(long, value_enum, default_value_t = StrategyArg::Lr)]
        strategy: StrategyArg,
        /// Test every component instead of stopping at the first conflict
        #[arg(long)]
        all_components: bool,
        /// Write a JSON report (plus provenance sidecar) here
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Write a generated graph as an edge list (.csv, .parquet, or text)
    Gen {
        #[arg(long, value_enum)]
        family: Family,
        /// Size parameter (vertices, spokes, rows, or first part)
        #[arg(long)]
        n: usize,
        /// Second size parameter (edges, columns, or second part)
        #[arg(long)]
        m: Option<usize>,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Apply a seeded relabeling and edge shuffle
        #[arg(long)]
        scramble: bool,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = match cmd.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    SubscriberBuilder::default()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match cmd.action {
        Action::Check {
            input,
            vertices,
            strategy,
            all_components,
            out,
        } => check(&input, vertices, strategy, all_components, out.as_deref()),
        Action::Gen {
            family,
            n,
            m,
            seed,
            scramble,
            out,
        } => generate(family, n, m, seed, scramble, &out),
        Action::Report => report(),
    }
}

fn check(
    input: &Path,
    vertices: Option<usize>,
    strategy: StrategyArg,
    all_components: bool,
    out: Option<&Path>,
) -> Result<()> {
    let graph = input::read_edge_list(input)?.into_graph(vertices)?;
    let cfg = PlanarityCfg {
        strategy: strategy.into(),
        short_circuit: !all_components,
    };
    let palm = PalmTree::build(&graph).context("numbering graph")?;
    let components = palm.components.len();
    tracing::info!(
        input = %input.display(),
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        components,
        strategy = report::strategy_name(cfg.strategy),
        "check"
    );

    let verdict = check_palm_tree(&palm, cfg).context("planarity test")?;
    for conflict in verdict.conflicts() {
        tracing::info!(root = conflict.root, kind = ?conflict.kind, "conflict");
    }
    println!("{}", if verdict.is_planar() { "planar" } else { "non-planar" });

    if let Some(out) = out {
        CheckReport::new(input, &graph, components, cfg.strategy, &verdict).write(out)?;
        let payload = Payload::new(serde_json::json!({
            "command": "check",
            "vertices": vertices,
            "strategy": report::strategy_name(cfg.strategy),
            "all_components": all_components,
        }))
        .with_input(input);
        provenance::write_sidecar(out, payload)?;
    }
    Ok(())
}

fn build_family(family: Family, n: usize, m: Option<usize>, seed: u64) -> Result<Graph> {
    let second = |what: &str| m.with_context(|| format!("--m ({what}) is required for {family:?}"));
    let graph = match family {
        Family::Complete => gen::complete(n)?,
        Family::Bipartite => gen::complete_bipartite(n, second("second part")?)?,
        Family::Cycle => gen::cycle(n)?,
        Family::Path => gen::path(n)?,
        Family::Grid => gen::grid(n, second("columns")?)?,
        Family::Wheel => gen::wheel(n)?,
        Family::Petersen => gen::petersen()?,
        Family::Tree => gen::random_tree(n, seed)?,
        Family::Random => gen::random_graph(n, second("edges")?, seed)?,
        Family::MaximalPlanar => gen::random_maximal_planar(n, seed)?,
    };
    Ok(graph)
}

fn generate(
    family: Family,
    n: usize,
    m: Option<usize>,
    seed: u64,
    scramble: bool,
    out: &Path,
) -> Result<()> {
    let mut graph = build_family(family, n, m, seed)?;
    if scramble {
        graph = gen::scramble(&graph, seed)?;
    }
    tracing::info!(
        family = ?family,
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        seed,
        "gen"
    );

    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let header = format!("family={family:?} n={n} m={m:?} seed={seed} scramble={scramble}");
    input::write_edge_list(&graph, &header, out)?;
    let payload = Payload::new(serde_json::json!({
        "command": "gen",
        "family": format!("{family:?}"),
        "n": n,
        "m": m,
        "seed": seed,
        "scramble": scramble,
    }));
    provenance::write_sidecar(out, payload)?;
    Ok(())
}

fn report() -> Result<()> {
    let doc = provenance::document(&Payload::new(serde_json::json!({})), &[]);
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
