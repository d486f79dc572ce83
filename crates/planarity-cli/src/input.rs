//! Edge-list readers: plain text, CSV, and parquet.
//!
//! Text format: one edge per line as two vertex ids separated by whitespace or
//! a comma. `#` starts a comment. A `# vertices: N` comment fixes the vertex
//! count (used by `gen` so isolated vertices survive a round trip).

use anyhow::{bail, Context, Result};
use planarity::Graph;
use polars::prelude::*;
use std::fs;
use std::path::Path;

/// Largest vertex count the CLI will allocate a graph for.
pub const MAX_VERTICES: usize = 1 << 26;

/// Edges plus the vertex count declared by the file, if any.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct EdgeList {
    pub declared_vertices: Option<usize>,
    pub edges: Vec<(usize, usize)>,
}

impl EdgeList {
    /// Build the graph. `vertices` overrides the declared count; without
    /// either the count is one past the largest id. Counts above
    /// `MAX_VERTICES` are rejected before anything is allocated.
    pub fn into_graph(self, vertices: Option<usize>) -> Result<Graph> {
        let n = match vertices.or(self.declared_vertices) {
            Some(n) => n,
            None => {
                let largest = self.edges.iter().map(|&(u, v)| u.max(v)).max();
                match largest {
                    Some(id) => id
                        .checked_add(1)
                        .with_context(|| format!("vertex id {id} out of range"))?,
                    None => 0,
                }
            }
        };
        if n > MAX_VERTICES {
            bail!("graph needs {n} vertices, limit is {MAX_VERTICES}");
        }
        Graph::from_edges(n, self.edges).with_context(|| format!("building graph on {n} vertices"))
    }
}

pub fn read_edge_list(path: &Path) -> Result<EdgeList> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => {
            let lf = LazyCsvReader::new(path)
                .with_has_header(true)
                .with_infer_schema_length(Some(100))
                .finish()
                .with_context(|| format!("opening {}", path.display()))?;
            frame_edges(lf).with_context(|| format!("reading {}", path.display()))
        }
        Some("parquet") => {
            let lf = LazyFrame::scan_parquet(path, ScanArgsParquet::default())
                .with_context(|| format!("opening {}", path.display()))?;
            frame_edges(lf).with_context(|| format!("reading {}", path.display()))
        }
        _ => {
            let text =
                fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
            parse_text(&text).with_context(|| format!("parsing {}", path.display()))
        }
    }
}

/// First two columns of the frame, cast to integers, one edge per row.
fn frame_edges(lf: LazyFrame) -> Result<EdgeList> {
    let df = lf.collect()?;
    if df.width() < 2 {
        bail!("expected two endpoint columns, found {}", df.width());
    }
    let mut ends = Vec::with_capacity(2);
    for idx in 0..2 {
        let column = df
            .select_at_idx(idx)
            .with_context(|| format!("missing column {idx}"))?
            .cast(&DataType::Int64)?;
        let values: Vec<Option<i64>> = column.i64()?.into_iter().collect();
        ends.push(values);
    }
    tracing::debug!(rows = df.height(), "edge frame loaded");

    let mut edges = Vec::with_capacity(df.height());
    for (row, (u, v)) in ends[0].iter().zip(&ends[1]).enumerate() {
        edges.push((vertex_id(*u, row)?, vertex_id(*v, row)?));
    }
    Ok(EdgeList {
        declared_vertices: None,
        edges,
    })
}

fn vertex_id(value: Option<i64>, row: usize) -> Result<usize> {
    let Some(raw) = value else {
        bail!("row {row}: missing endpoint");
    };
    usize::try_from(raw).with_context(|| format!("row {row}: negative vertex id {raw}"))
}

pub fn parse_text(text: &str) -> Result<EdgeList> {
    let mut list = EdgeList::default();
    for (lineno, line) in text.lines().enumerate() {
        let (body, comment) = match line.split_once('#') {
            Some((body, comment)) => (body, Some(comment)),
            None => (line, None),
        };
        if let Some(n) = comment.and_then(|c| c.trim().strip_prefix("vertices:")) {
            let n = n
                .trim()
                .parse()
                .with_context(|| format!("line {}: bad vertex count", lineno + 1))?;
            list.declared_vertices = Some(n);
        }
        let fields: Vec<&str> = body
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|f| !f.is_empty())
            .collect();
        match fields[..] {
            [] => {}
            [u, v] => {
                let parse = |s: &str| {
                    s.parse::<usize>()
                        .with_context(|| format!("line {}: bad vertex id {s:?}", lineno + 1))
                };
                list.edges.push((parse(u)?, parse(v)?));
            }
            _ => bail!("line {}: expected two vertex ids, got {:?}", lineno + 1, body.trim()),
        }
    }
    Ok(list)
}

/// Write `graph` in the format its extension names: CSV and parquet get a
/// `u, v` frame (isolated vertices are not recorded), anything else the text
/// format with `header` as a comment.
pub fn write_edge_list(graph: &Graph, header: &str, path: &Path) -> Result<()> {
    let ext = path.extension().and_then(|e| e.to_str());
    if !matches!(ext, Some("csv" | "parquet")) {
        return fs::write(path, render_text(graph, header))
            .with_context(|| format!("writing {}", path.display()));
    }

    let mut us = Vec::with_capacity(graph.edge_count());
    let mut vs = Vec::with_capacity(graph.edge_count());
    for &(u, v) in graph.edges() {
        us.push(i64::try_from(u)?);
        vs.push(i64::try_from(v)?);
    }
    let mut df = df!("u" => us, "v" => vs)?;
    let mut file =
        fs::File::create(path).with_context(|| format!("creating {}", path.display()))?;
    if ext == Some("csv") {
        CsvWriter::new(&mut file).finish(&mut df)?;
    } else {
        ParquetWriter::new(&mut file).finish(&mut df)?;
    }
    tracing::debug!(rows = df.height(), path = %path.display(), "edge frame written");
    Ok(())
}

/// Inverse of `parse_text`.
pub fn render_text(graph: &Graph, header: &str) -> String {
    let mut out = format!("# {header}\n# vertices: {}\n", graph.vertex_count());
    for &(u, v) in graph.edges() {
        out.push_str(&format!("{u} {v}\n"));
    }
    out
}
