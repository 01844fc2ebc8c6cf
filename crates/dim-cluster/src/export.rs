use std::io::Write;

use dim_core::errors::{DimError, ErrorInfo};
use dim_core::Dimension;

use crate::adjacency::AdjacencyGraph;
use crate::flags::ExportMode;
use crate::ring::ConnectedTable;

/// Writes every non-empty bucket as one space-separated line, front to back.
pub fn write_raw<W: Write>(table: &ConnectedTable, writer: &mut W) -> Result<(), DimError> {
    for bucket in table.buckets().iter().filter(|bucket| !bucket.is_empty()) {
        write_line(writer, bucket.iter())?;
    }
    Ok(())
}

/// Writes every node with neighbours as `key n1 n2 ...`, one line per node.
pub fn write_graph<W: Write>(graph: &AdjacencyGraph, writer: &mut W) -> Result<(), DimError> {
    for (node, neighbours) in graph.iter() {
        if neighbours.is_empty() {
            continue;
        }
        write_line(writer, std::iter::once(&node).chain(neighbours))?;
    }
    Ok(())
}

/// Writes the table in the selected mode, deriving the graph when needed.
pub fn export<W: Write>(
    table: &ConnectedTable,
    mode: ExportMode,
    writer: &mut W,
) -> Result<(), DimError> {
    match mode {
        ExportMode::Raw => write_raw(table, writer),
        ExportMode::Graph => write_graph(&AdjacencyGraph::build(table), writer),
    }
}

/// Renders the table in the selected mode into a string.
pub fn render(table: &ConnectedTable, mode: ExportMode) -> Result<String, DimError> {
    let mut buffer = Vec::new();
    export(table, mode, &mut buffer)?;
    into_text(buffer)
}

/// Renders an already built graph into a string.
pub fn render_graph(graph: &AdjacencyGraph) -> Result<String, DimError> {
    let mut buffer = Vec::new();
    write_graph(graph, &mut buffer)?;
    into_text(buffer)
}

fn write_line<'a, W, I>(writer: &mut W, fields: I) -> Result<(), DimError>
where
    W: Write,
    I: Iterator<Item = &'a Dimension>,
{
    let line = fields
        .map(Dimension::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    writeln!(writer, "{line}").map_err(|err| DimError::io("write-failed", &err))
}

fn into_text(buffer: Vec<u8>) -> Result<String, DimError> {
    String::from_utf8(buffer)
        .map_err(|err| DimError::Serde(ErrorInfo::new("utf8-output", err.to_string())))
}
