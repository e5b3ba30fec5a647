use crate::Graph;
use nalgebra::{DMatrix, SymmetricEigen};

/// Adjacency matrix, parallel edges counted with multiplicity.
pub fn adjacency_matrix(graph: &Graph) -> DMatrix<f64> {
    let n = graph.num_vertices();
    let mut adjacency = DMatrix::<f64>::zeros(n, n);
    for (u, v) in graph.edges() {
        adjacency[(u, v)] += 1.0;
        adjacency[(v, u)] += 1.0;
    }
    adjacency
}

/// Laplacian L = D - A.
pub fn laplacian_matrix(graph: &Graph) -> DMatrix<f64> {
    let mut laplacian = -adjacency_matrix(graph);
    for u in 0..graph.num_vertices() {
        laplacian[(u, u)] = graph.neighbors(u).map_or(0, |n| n.len()) as f64;
    }
    laplacian
}

fn sorted_eigenvalues(matrix: DMatrix<f64>) -> Vec<f64> {
    if matrix.nrows() == 0 {
        return vec![];
    }
    let eig = SymmetricEigen::new(matrix);
    let mut eigenvalues: Vec<f64> = eig.eigenvalues.iter().copied().collect();
    eigenvalues.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    eigenvalues
}

/// Eigenvalues of the adjacency matrix, ascending.
pub fn adjacency_eigenvalues(graph: &Graph) -> Vec<f64> {
    sorted_eigenvalues(adjacency_matrix(graph))
}

/// Eigenvalues of the Laplacian, ascending.
pub fn laplacian_eigenvalues(graph: &Graph) -> Vec<f64> {
    sorted_eigenvalues(laplacian_matrix(graph))
}
