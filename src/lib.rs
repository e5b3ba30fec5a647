use crate::error::Result;

/// Vertex identifier. Only meaningful within one `Graph` value: removing a
/// vertex renumbers every higher vertex down by one.
pub type VertexId = usize;

/// An undirected graph stored as adjacency lists.
///
/// Edges form a multiset: `add_edge` may insert a parallel edge and
/// `remove_edge` removes a single instance. Self-loops are rejected.
/// Cloning produces a fully independent copy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    /// adjacency[u] lists every neighbor of u, once per edge instance
    adjacency: Vec<Vec<VertexId>>,
    num_edges: usize,
}

impl Graph {
    pub fn new(n: usize) -> Self {
        Graph {
            adjacency: vec![vec![]; n],
            num_edges: 0,
        }
    }

    pub fn from_edges(n: usize, edges: &[(VertexId, VertexId)]) -> Result<Self> {
        let mut graph = Graph::new(n);
        for &(u, v) in edges {
            graph.add_edge(u, v)?;
        }
        Ok(graph)
    }

    /// The path 0 - 1 - 2 used by the command-line drivers when no input is given.
    pub fn path3() -> Self {
        let mut graph = Graph::new(3);
        graph.adjacency[0].push(1);
        graph.adjacency[1].extend([0, 2]);
        graph.adjacency[2].push(1);
        graph.num_edges = 2;
        graph
    }

    pub fn num_vertices(&self) -> usize {
        self.adjacency.len()
    }

    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    pub fn contains_vertex(&self, v: VertexId) -> bool {
        v < self.adjacency.len()
    }

    fn check_vertex(&self, v: VertexId) -> Result<()> {
        if self.contains_vertex(v) {
            Ok(())
        } else {
            Err(ChromaticError::VertexNotFound {
                vertex: v,
                num_vertices: self.num_vertices(),
            })
        }
    }

    /// Appends an isolated vertex and returns its identifier.
    pub fn add_vertex(&mut self) -> VertexId {
        self.adjacency.push(vec![]);
        self.adjacency.len() - 1
    }

    pub fn add_edge(&mut self, u: VertexId, v: VertexId) -> Result<()> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        if u == v {
            return Err(ChromaticError::SelfLoop(u));
        }
        self.adjacency[u].push(v);
        self.adjacency[v].push(u);
        self.num_edges += 1;
        Ok(())
    }

    /// True if at least one edge joins `u` and `v`. Unknown vertices have no edges.
    pub fn has_edge(&self, u: VertexId, v: VertexId) -> bool {
        match (self.adjacency.get(u), self.adjacency.get(v)) {
            // Scan the shorter list
            (Some(nu), Some(nv)) if nu.len() <= nv.len() => nu.contains(&v),
            (Some(_), Some(nv)) => nv.contains(&u),
            _ => false,
        }
    }

    /// Neighbors of `v`, repeated once per parallel edge.
    pub fn neighbors(&self, v: VertexId) -> Result<&[VertexId]> {
        self.check_vertex(v)?;
        Ok(&self.adjacency[v])
    }

    pub fn degree(&self, v: VertexId) -> Result<usize> {
        self.neighbors(v).map(|n| n.len())
    }

    /// All edge instances as `(min, max)` pairs in lexicographic order.
    pub fn edges(&self) -> Vec<(VertexId, VertexId)> {
        let mut edges = Vec::with_capacity(self.num_edges);
        for (u, neighbors) in self.adjacency.iter().enumerate() {
            let mut upper: Vec<VertexId> = neighbors.iter().copied().filter(|&v| u < v).collect();
            upper.sort_unstable();
            edges.extend(upper.into_iter().map(|v| (u, v)));
        }
        edges
    }

    /// The lexicographically smallest edge `(u, v)` with `u < v`, if any.
    pub fn first_edge(&self) -> Option<(VertexId, VertexId)> {
        self.adjacency.iter().enumerate().find_map(|(u, neighbors)| {
            neighbors
                .iter()
                .copied()
                .filter(|&v| u < v)
                .min()
                .map(|v| (u, v))
        })
    }

    /// Removes one instance of the edge between `u` and `v`.
    pub fn remove_edge(&mut self, u: VertexId, v: VertexId) -> Result<()> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        let pos_u = self.adjacency[u].iter().position(|&x| x == v);
        let pos_v = self.adjacency[v].iter().position(|&x| x == u);
        match (pos_u, pos_v) {
            (Some(pu), Some(pv)) => {
                self.adjacency[u].swap_remove(pu);
                self.adjacency[v].swap_remove(pv);
                self.num_edges -= 1;
                Ok(())
            }
            _ => Err(ChromaticError::EdgeNotFound(u, v)),
        }
    }

    /// Removes every edge incident to `v`, keeping the vertex.
    pub fn clear_vertex(&mut self, v: VertexId) -> Result<()> {
        self.check_vertex(v)?;
        let neighbors = std::mem::take(&mut self.adjacency[v]);
        for &w in &neighbors {
            if let Some(pos) = self.adjacency[w].iter().position(|&x| x == v) {
                self.adjacency[w].swap_remove(pos);
            }
        }
        self.num_edges -= neighbors.len();
        Ok(())
    }

    /// Removes `v` together with its incident edges. Every vertex `w > v`
    /// is renumbered to `w - 1`.
    pub fn remove_vertex(&mut self, v: VertexId) -> Result<()> {
        self.clear_vertex(v)?;
        self.adjacency.remove(v);
        for neighbors in &mut self.adjacency {
            for w in neighbors.iter_mut() {
                if *w > v {
                    *w -= 1;
                }
            }
        }
        Ok(())
    }
}

pub use chromatic::{chromatic_polynomial, chromatic_polynomial_with, evaluate, EvalConfig};
pub use contraction::contract;
pub use error::{ChromaticError, Result as ChromaticResult};

// Module declarations
pub mod chromatic;
pub mod coloring;
pub mod contraction;
pub mod error;
pub mod export;
pub mod parser;
pub mod spectrum;
pub mod tree;
pub mod utils;
