use crate::error::{ChromaticError, Result};
use crate::Graph;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Optional per-vertex attributes written alongside the graph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VertexAttributes {
    pub color: Option<String>,
    pub node_id: Option<String>,
}

impl VertexAttributes {
    fn pairs(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [("color", self.color.as_deref()), ("node_id", self.node_id.as_deref())]
            .into_iter()
            .filter_map(|(key, value)| value.map(|v| (key, v)))
    }
}

fn check_attributes(graph: &Graph, attributes: Option<&[VertexAttributes]>) -> Result<()> {
    match attributes {
        Some(attrs) if attrs.len() != graph.num_vertices() => {
            Err(ChromaticError::InvalidArgument(format!(
                "{} vertex attribute entries for {} vertices",
                attrs.len(),
                graph.num_vertices()
            )))
        }
        _ => Ok(()),
    }
}

fn escape_dot(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

fn escape_xml(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Write `graph` as an undirected Graphviz graph.
pub fn write_dot<W: Write>(
    writer: &mut W,
    graph: &Graph,
    attributes: Option<&[VertexAttributes]>,
) -> Result<()> {
    check_attributes(graph, attributes)?;

    writeln!(writer, "graph G {{")?;
    for v in 0..graph.num_vertices() {
        let attrs: Vec<String> = attributes
            .map(|a| {
                a[v].pairs()
                    .map(|(key, value)| format!("{}=\"{}\"", key, escape_dot(value)))
                    .collect()
            })
            .unwrap_or_default();
        if attrs.is_empty() {
            writeln!(writer, "{};", v)?;
        } else {
            writeln!(writer, "{} [{}];", v, attrs.join(", "))?;
        }
    }
    for (u, v) in graph.edges() {
        writeln!(writer, "{}--{};", u, v)?;
    }
    writeln!(writer, "}}")?;
    Ok(())
}

/// Write `graph` as an undirected GraphML document.
pub fn write_graphml<W: Write>(
    writer: &mut W,
    graph: &Graph,
    attributes: Option<&[VertexAttributes]>,
) -> Result<()> {
    check_attributes(graph, attributes)?;

    writeln!(writer, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
    writeln!(
        writer,
        r#"<graphml xmlns="http://graphml.graphdrawing.org/xmlns" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xsi:schemaLocation="http://graphml.graphdrawing.org/xmlns http://graphml.graphdrawing.org/xmlns/1.0/graphml.xsd">"#
    )?;
    if attributes.is_some() {
        writeln!(writer, r#"  <key id="key0" for="node" attr.name="color" attr.type="string" />"#)?;
        writeln!(writer, r#"  <key id="key1" for="node" attr.name="node_id" attr.type="string" />"#)?;
    }
    writeln!(writer, r#"  <graph id="G" edgedefault="undirected">"#)?;

    for v in 0..graph.num_vertices() {
        match attributes.map(|a| &a[v]) {
            Some(attrs) if attrs.pairs().next().is_some() => {
                writeln!(writer, r#"    <node id="n{}">"#, v)?;
                for (key, value) in attrs.pairs() {
                    let id = if key == "color" { "key0" } else { "key1" };
                    writeln!(writer, r#"      <data key="{}">{}</data>"#, id, escape_xml(value))?;
                }
                writeln!(writer, "    </node>")?;
            }
            _ => writeln!(writer, r#"    <node id="n{}" />"#, v)?,
        }
    }
    for (i, (u, v)) in graph.edges().into_iter().enumerate() {
        writeln!(writer, r#"    <edge id="e{}" source="n{}" target="n{}" />"#, i, u, v)?;
    }

    writeln!(writer, "  </graph>")?;
    writeln!(writer, "</graphml>")?;
    Ok(())
}

/// Write a DOT file at `path`.
pub fn save_dot<P: AsRef<Path>>(
    path: P,
    graph: &Graph,
    attributes: Option<&[VertexAttributes]>,
) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_dot(&mut writer, graph, attributes)?;
    writer.flush()?;
    Ok(())
}

/// Write a GraphML file at `path`.
pub fn save_graphml<P: AsRef<Path>>(
    path: P,
    graph: &Graph,
    attributes: Option<&[VertexAttributes]>,
) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_graphml(&mut writer, graph, attributes)?;
    writer.flush()?;
    Ok(())
}
