use crate::contraction::contract;
use crate::error::{ChromaticError, Result};
use crate::utils::checked_power;
use crate::Graph;
use log::debug;

/// Evaluation settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvalConfig {
    /// Recursion levels whose two branches run concurrently on the rayon pool.
    /// 0 evaluates everything on the calling thread.
    pub parallel_depth: usize,
}

impl EvalConfig {
    pub fn with_parallel_depth(mut self, depth: usize) -> Self {
        self.parallel_depth = depth;
        self
    }
}

/// Number of proper colorings of `graph` using at most `k` colors.
pub fn chromatic_polynomial(graph: &Graph, k: i64) -> Result<i128> {
    chromatic_polynomial_with(graph, k, &EvalConfig::default())
}

/// Alias of [`chromatic_polynomial`].
pub fn evaluate(graph: &Graph, k: i64) -> Result<i128> {
    chromatic_polynomial(graph, k)
}

pub fn chromatic_polynomial_with(graph: &Graph, k: i64, config: &EvalConfig) -> Result<i128> {
    if k < 0 {
        return Err(ChromaticError::InvalidArgument(format!(
            "color count must be non-negative, got {}",
            k
        )));
    }

    debug!(
        "evaluating P(G, {}) for |V| = {}, |E| = {}, parallel depth {}",
        k,
        graph.num_vertices(),
        graph.num_edges(),
        config.parallel_depth
    );
    let value = recurse(graph, k, config.parallel_depth)?;
    debug!("P(G, {}) = {}", k, value);

    Ok(value)
}

fn recurse(graph: &Graph, k: i64, parallel_depth: usize) -> Result<i128> {
    // Base case: no edges, every vertex colored independently
    let Some((u, v)) = graph.first_edge() else {
        return checked_power(k, graph.num_vertices());
    };

    let mut g_minus = graph.clone();
    g_minus.remove_edge(u, v)?;
    // A parallel copy of e would become a self-loop in G / e, so P(G / e) = 0
    if g_minus.has_edge(u, v) {
        return recurse(&g_minus, k, parallel_depth);
    }

    let deletion = || recurse(&g_minus, k, parallel_depth.saturating_sub(1));
    let contraction = || -> Result<i128> {
        let mut g_contract = graph.clone();
        contract(&mut g_contract, u, v)?;
        recurse(&g_contract, k, parallel_depth.saturating_sub(1))
    };

    let (p_minus, p_contract) = if parallel_depth > 0 {
        rayon::join(deletion, contraction)
    } else {
        (deletion(), contraction())
    };
    let (p_minus, p_contract) = (p_minus?, p_contract?);

    p_minus.checked_sub(p_contract).ok_or_else(|| {
        ChromaticError::Overflow(format!("{} - {} exceeds i128", p_minus, p_contract))
    })
}
