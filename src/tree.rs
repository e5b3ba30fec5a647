use crate::error::Result;
use crate::Graph;
use rand::Rng;

/// A random tree together with the largest `deg(u) + deg(v)` over its edges.
#[derive(Debug, Clone)]
pub struct RandomTree {
    pub graph: Graph,
    pub max_degree_sum: usize,
}

/// Grow a random tree on `n` vertices.
///
/// Starting from vertex 0, each step joins a uniformly random isolated vertex
/// to a uniformly random vertex already in the tree.
pub fn random_tree<R: Rng>(n: usize, rng: &mut R) -> Result<RandomTree> {
    let mut graph = Graph::new(n);
    if n == 0 {
        return Ok(RandomTree {
            graph,
            max_degree_sum: 0,
        });
    }

    let mut connected: Vec<usize> = vec![0];
    let mut isolated: Vec<usize> = (1..n).collect();

    while !isolated.is_empty() {
        let u = isolated.swap_remove(rng.gen_range(0..isolated.len()));
        let v = connected[rng.gen_range(0..connected.len())];
        graph.add_edge(u, v)?;
        connected.push(u);
    }

    let mut max_degree_sum = 0;
    for (u, v) in graph.edges() {
        max_degree_sum = max_degree_sum.max(graph.degree(u)? + graph.degree(v)?);
    }

    Ok(RandomTree {
        graph,
        max_degree_sum,
    })
}
