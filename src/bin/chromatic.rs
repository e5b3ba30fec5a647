use chromatic_polynomial::{
    chromatic_polynomial_with, parser::parse_input_file, ChromaticResult, EvalConfig, Graph,
};
use clap::Parser;
use log::info;
use std::path::PathBuf;

/// Chromatic polynomial evaluator (deletion–contraction)
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Edge-list file describing the graph (defaults to the path 0-1-2)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Number of available colors (k)
    #[arg(short, long, default_value_t = 3, allow_negative_numbers = true)]
    k: i64,

    /// Recursion levels evaluated in parallel
    #[arg(short, long, default_value_t = 0)]
    parallel_depth: usize,

    /// Also print P(G, 0..=MAX_K)
    #[arg(long, value_name = "MAX_K")]
    polynomial: Option<i64>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn run(args: &Args) -> ChromaticResult<()> {
    let graph = match &args.input {
        Some(path) => parse_input_file(path)?,
        None => Graph::path3(),
    };
    let config = EvalConfig::default().with_parallel_depth(args.parallel_depth);

    info!(
        "graph: {} vertices, {} edges",
        graph.num_vertices(),
        graph.num_edges()
    );

    let start_time = std::time::Instant::now();
    let value = chromatic_polynomial_with(&graph, args.k, &config)?;
    info!("computation time: {:.3} ms", start_time.elapsed().as_secs_f64() * 1e3);

    println!("P(G, {}) = {}", args.k, value);

    if let Some(max_k) = args.polynomial {
        println!();
        println!("  k | P(G, k)");
        println!("----+--------");
        for k in 0..=max_k {
            println!("{:>3} | {}", k, chromatic_polynomial_with(&graph, k, &config)?);
        }
    }

    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
