use crate::error::{ChromaticError, Result};
use crate::Graph;
use nom::{
    character::complete::{digit1, space0, space1},
    combinator::map_res,
    sequence::{delimited, separated_pair},
    IResult,
};
use std::collections::HashSet;
use std::path::Path;

/// Parse a single unsigned integer
fn parse_usize(input: &str) -> IResult<&str, usize> {
    map_res(digit1, |s: &str| s.parse::<usize>())(input)
}

/// Parse the vertex count line
fn parse_header(input: &str) -> IResult<&str, usize> {
    delimited(space0, parse_usize, space0)(input)
}

/// Parse an edge line: two endpoints separated by whitespace
fn parse_edge(input: &str) -> IResult<&str, (usize, usize)> {
    delimited(
        space0,
        separated_pair(parse_usize, space1, parse_usize),
        space0,
    )(input)
}

/// Blank lines and `#` comments carry no data
fn is_ignored(line: &str) -> bool {
    let line = line.trim();
    line.is_empty() || line.starts_with('#')
}

/// Parse an edge-list description:
///
/// ```text
/// <n>
/// <u> <v>
/// ...
/// ```
///
/// Blank lines and `#` comments are skipped. The graph must be simple.
pub fn parse_edge_list(input: &str) -> Result<Graph> {
    let mut lines = input
        .lines()
        .enumerate()
        .map(|(number, line)| (number + 1, line))
        .filter(|(_, line)| !is_ignored(line));

    let (line_no, header) = lines
        .next()
        .ok_or_else(|| ChromaticError::Parse("missing vertex count".to_string()))?;
    let mut graph = Graph::new(complete(parse_header, header, line_no)?);
    let mut seen = HashSet::new();

    for (line_no, line) in lines {
        let (u, v) = complete(parse_edge, line, line_no)?;
        if u == v {
            return Err(ChromaticError::Parse(format!(
                "line {}: self-loop on vertex {}",
                line_no, u
            )));
        }
        if !seen.insert((u.min(v), u.max(v))) {
            return Err(ChromaticError::Parse(format!(
                "line {}: duplicate edge ({}, {})",
                line_no, u, v
            )));
        }
        graph
            .add_edge(u, v)
            .map_err(|e| ChromaticError::Parse(format!("line {}: {}", line_no, e)))?;
    }

    Ok(graph)
}

/// Run `parser` over a whole line, rejecting trailing input.
fn complete<'a, T>(
    parser: impl Fn(&'a str) -> IResult<&'a str, T>,
    line: &'a str,
    line_no: usize,
) -> Result<T> {
    match parser(line) {
        Ok(("", parsed)) => Ok(parsed),
        Ok((rest, _)) => Err(ChromaticError::Parse(format!(
            "line {}: unexpected trailing input {:?}",
            line_no, rest
        ))),
        Err(e) => Err(ChromaticError::Parse(format!("line {}: {}", line_no, e))),
    }
}

/// Parse an edge-list file
pub fn parse_input_file<P: AsRef<Path>>(path: P) -> Result<Graph> {
    let content = std::fs::read_to_string(path)?;
    parse_edge_list(&content)
}

/// Render `graph` in the edge-list format read by [`parse_edge_list`].
pub fn format_edge_list(graph: &Graph) -> String {
    let mut out = format!("{}\n", graph.num_vertices());
    for (u, v) in graph.edges() {
        out.push_str(&format!("{} {}\n", u, v));
    }
    out
}
