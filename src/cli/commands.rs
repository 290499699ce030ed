//! CLI command implementations.
//!
//! Every command writes to the given sink so output can be captured.

use std::io::Write;

use crate::graph::{BfsOutcome, DirectedGraph, Graph, UndirectedGraph};
use crate::tree::OrderedTree;
use crate::types::{DsError, DsResult};

/// Parse an `A-B` edge argument into its two endpoints.
pub fn parse_connection(arg: &str) -> DsResult<(String, String)> {
    match arg.split_once('-') {
        Some((a, b)) if !a.trim().is_empty() && !b.trim().is_empty() => {
            Ok((a.trim().to_string(), b.trim().to_string()))
        }
        _ => Err(DsError::InvalidInput(format!(
            "edge must look like A-B, got {:?}",
            arg
        ))),
    }
}

fn parse_connections(args: &[String]) -> DsResult<Vec<(String, String)>> {
    args.iter().map(|arg| parse_connection(arg)).collect()
}

/// Build a tree from `seed` and `values`, then print it.
pub fn cmd_tree<W: Write>(
    out: &mut W,
    seed: i64,
    values: &[i64],
    search: Option<i64>,
    json: bool,
) -> DsResult<()> {
    let tree = OrderedTree::with_values(seed, values.iter().copied());
    let found = search.map(|value| tree.contains(&value));

    if json {
        let info = serde_json::json!({
            "tree": tree.to_string(),
            "len": tree.len(),
            "height": tree.height(),
            "min": tree.min(),
            "max": tree.max(),
            "sorted": tree.iter().collect::<Vec<_>>(),
            "search": search.map(|value| serde_json::json!({"value": value, "found": found})),
        });
        writeln!(
            out,
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        )?;
    } else {
        writeln!(out, "Tree: {}", tree)?;
        writeln!(out, "Len: {}", tree.len())?;
        writeln!(out, "Height: {}", tree.height())?;
        writeln!(out, "Min: {}", tree.min())?;
        writeln!(out, "Max: {}", tree.max())?;
        if let (Some(value), Some(found)) = (search, found) {
            writeln!(out, "Search {}: {}", value, if found { "found" } else { "not found" })?;
        }
    }

    match (search, found) {
        (Some(value), Some(false)) => Err(DsError::NotFound(format!("value {}", value))),
        _ => Ok(()),
    }
}

/// Run a BFS over the graph given by `edges`.
pub fn cmd_bfs<W: Write>(
    out: &mut W,
    edges: &[String],
    directed: bool,
    start: &str,
    target: Option<&str>,
    json: bool,
) -> DsResult<()> {
    let connections = parse_connections(edges)?;
    let start = start.to_string();
    let target = target.map(str::to_string);

    let outcome = if directed {
        DirectedGraph::from_connections(connections).bfs(&start, target.as_ref())
    } else {
        UndirectedGraph::from_connections(connections).bfs(&start, target.as_ref())
    };

    if json {
        writeln!(
            out,
            "{}",
            serde_json::to_string_pretty(&outcome).unwrap_or_default()
        )?;
    } else {
        match &outcome {
            BfsOutcome::Visited(vertices) => writeln!(out, "Visited: {}", vertices.join(" "))?,
            BfsOutcome::Path(path) => {
                writeln!(out, "Path ({} hops): {}", path.len() - 1, path.join(" -> "))?
            }
            BfsOutcome::NotFound => writeln!(
                out,
                "No path from {} to {}",
                start,
                target.as_deref().unwrap_or_default()
            )?,
        }
    }

    outcome.into_result().map(|_| ())
}

/// Print order and size of the graph given by `edges`.
pub fn cmd_stats<W: Write>(out: &mut W, edges: &[String], directed: bool, json: bool) -> DsResult<()> {
    let connections = parse_connections(edges)?;
    if directed {
        write_stats(out, &DirectedGraph::from_connections(connections), "directed", json)
    } else {
        write_stats(out, &UndirectedGraph::from_connections(connections), "undirected", json)
    }
}

fn write_stats<W: Write, G: Graph<String>>(
    out: &mut W,
    graph: &G,
    kind: &str,
    json: bool,
) -> DsResult<()> {
    if json {
        let info = serde_json::json!({
            "kind": kind,
            "order": graph.order(),
            "size": graph.size(),
            "vertices": graph.vertices().collect::<Vec<_>>(),
        });
        writeln!(
            out,
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        )?;
    } else {
        writeln!(out, "Kind: {}", kind)?;
        writeln!(out, "Order: {}", graph.order())?;
        writeln!(out, "Size: {}", graph.size())?;
        for vertex in graph.vertices() {
            let neighbors: Vec<&str> = graph.neighbors(vertex).map(String::as_str).collect();
            writeln!(out, "  {}: {}", vertex, neighbors.join(" "))?;
        }
    }
    Ok(())
}
