use crate::error::{ChromaticError, Result};
use crate::{Graph, VertexId};
use log::trace;

/// Merge `sacrificed` into `survivor`.
///
/// Every neighbor of `sacrificed` becomes a neighbor of `survivor` unless the
/// two are already adjacent, so no parallel edge or self-loop is created.
/// `sacrificed` is then removed and higher vertices are renumbered.
///
/// Returns the identifier of `survivor` after the renumbering.
pub fn contract(graph: &mut Graph, survivor: VertexId, sacrificed: VertexId) -> Result<VertexId> {
    if survivor == sacrificed {
        return Err(ChromaticError::InvalidArgument(format!(
            "cannot contract vertex {} into itself",
            survivor
        )));
    }
    // Both vertices must exist before the graph is touched
    graph.neighbors(survivor)?;
    let neighbors: Vec<VertexId> = graph
        .neighbors(sacrificed)?
        .iter()
        .copied()
        .filter(|&w| w != sacrificed)
        .collect();

    trace!(
        "contracting {} into {} ({} neighbors to redirect)",
        sacrificed,
        survivor,
        neighbors.len()
    );

    for w in neighbors {
        if w != survivor && !graph.has_edge(survivor, w) {
            graph.add_edge(survivor, w)?;
        }
    }

    graph.clear_vertex(sacrificed)?;
    graph.remove_vertex(sacrificed)?;

    Ok(if survivor > sacrificed {
        survivor - 1
    } else {
        survivor
    })
}
