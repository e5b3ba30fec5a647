use crate::error::{ChromaticError, Result};
use crate::Graph;
use itertools::Itertools;
use log::debug;
use std::collections::HashMap;

/// An assignment of a color in `0..k` to every vertex of the original graph.
pub type Coloring = Vec<usize>;

/// The k-coloring graph of an original graph.
///
/// Vertex `i` of `graph` is `colorings[i]`; two colorings are adjacent when
/// they differ at exactly one original vertex.
#[derive(Debug, Clone)]
pub struct ColoringGraph {
    pub graph: Graph,
    pub colorings: Vec<Coloring>,
    /// (a, b) with a < b -> original vertex whose color differs
    pub edge_classes: HashMap<(usize, usize), usize>,
    /// original vertex -> number of coloring-graph edges recoloring it
    pub class_sizes: HashMap<usize, usize>,
}

fn color_count(k: i64) -> Result<usize> {
    usize::try_from(k).map_err(|_| {
        ChromaticError::InvalidArgument(format!("color count must be non-negative, got {}", k))
    })
}

/// Enumerate every proper coloring of `graph` with colors `0..k`, in
/// lexicographic order.
pub fn proper_colorings(graph: &Graph, k: i64) -> Result<Vec<Coloring>> {
    let k = color_count(k)?;
    let n = graph.num_vertices();

    let mut all_colorings = Vec::new();
    let mut current = vec![0; n];

    backtrack(0, graph, k, &mut current, &mut all_colorings)?;

    Ok(all_colorings)
}

/// Recursive backtracking, coloring vertices in index order
fn backtrack(
    vertex: usize,
    graph: &Graph,
    k: usize,
    current: &mut Coloring,
    all_colorings: &mut Vec<Coloring>,
) -> Result<()> {
    if vertex == graph.num_vertices() {
        all_colorings.push(current.clone());
        return Ok(());
    }

    let neighbors = graph.neighbors(vertex)?;
    for color in 0..k {
        // Only earlier vertices have a color yet
        let clash = neighbors
            .iter()
            .any(|&w| w < vertex && current[w] == color);
        if !clash {
            current[vertex] = color;
            backtrack(vertex + 1, graph, k, current, all_colorings)?;
        }
    }
    Ok(())
}

/// Count proper colorings by exhaustive enumeration.
pub fn count_proper_colorings(graph: &Graph, k: i64) -> Result<usize> {
    proper_colorings(graph, k).map(|c| c.len())
}

/// Build the coloring graph of `graph` for `k` colors.
pub fn coloring_graph(graph: &Graph, k: i64) -> Result<ColoringGraph> {
    let colorings = proper_colorings(graph, k)?;
    let mut result = Graph::new(colorings.len());
    let mut edge_classes = HashMap::new();
    let mut class_sizes = HashMap::new();

    for ((a, ca), (b, cb)) in colorings.iter().enumerate().tuple_combinations() {
        let mut differing = ca.iter().zip(cb.iter()).positions(|(x, y)| x != y);
        if let (Some(vertex), None) = (differing.next(), differing.next()) {
            result.add_edge(a, b)?;
            edge_classes.insert((a, b), vertex);
            *class_sizes.entry(vertex).or_insert(0) += 1;
        }
    }

    debug!(
        "coloring graph for k = {}: {} colorings, {} recolorings",
        k,
        result.num_vertices(),
        result.num_edges()
    );

    Ok(ColoringGraph {
        graph: result,
        colorings,
        edge_classes,
        class_sizes,
    })
}

/// Render a coloring as a compact label, e.g. `0-1-0`.
pub fn coloring_label(coloring: &[usize]) -> String {
    coloring.iter().join("-")
}
