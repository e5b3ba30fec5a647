use chromatic_polynomial::{
    chromatic_polynomial,
    coloring::{coloring_graph, coloring_label},
    export::{save_dot, save_graphml, VertexAttributes},
    parser::parse_input_file,
    spectrum::laplacian_eigenvalues,
    ChromaticResult, Graph,
};
use clap::{Parser, ValueEnum};
use log::{info, warn};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Graphml,
    Dot,
}

/// Build the k-coloring graph of a graph and export it for visualization
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Edge-list file describing the original graph (defaults to the path 0-1-2)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Number of available colors (k)
    #[arg(short, long, default_value_t = 3)]
    k: i64,

    /// Output file
    #[arg(short, long, default_value = "graph.graphml")]
    output: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Graphml)]
    format: Format,

    /// Print the Laplacian spectrum of the coloring graph
    #[arg(long)]
    spectrum: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn run(args: &Args) -> ChromaticResult<()> {
    let original = match &args.input {
        Some(path) => parse_input_file(path)?,
        None => Graph::path3(),
    };

    let derived = coloring_graph(&original, args.k)?;
    let expected = chromatic_polynomial(&original, args.k)?;
    if i128::try_from(derived.colorings.len()).ok() != Some(expected) {
        warn!(
            "coloring graph has {} vertices but P(G, {}) = {}",
            derived.colorings.len(),
            args.k,
            expected
        );
    }

    println!(
        "Coloring graph for k = {}: {} vertices, {} edges",
        args.k,
        derived.graph.num_vertices(),
        derived.graph.num_edges()
    );
    let mut classes: Vec<_> = derived.class_sizes.iter().collect();
    classes.sort();
    for (vertex, count) in classes {
        println!("  recoloring vertex {}: {} edges", vertex, count);
    }

    let attributes: Vec<VertexAttributes> = derived
        .colorings
        .iter()
        .enumerate()
        .map(|(i, coloring)| VertexAttributes {
            color: Some(coloring_label(coloring)),
            node_id: Some(i.to_string()),
        })
        .collect();

    match args.format {
        Format::Graphml => save_graphml(&args.output, &derived.graph, Some(&attributes))?,
        Format::Dot => save_dot(&args.output, &derived.graph, Some(&attributes))?,
    }
    info!("wrote {:?}", args.output);

    if args.spectrum {
        let eigenvalues = laplacian_eigenvalues(&derived.graph);
        println!("Laplacian eigenvalues:");
        for value in eigenvalues {
            println!("  {:.6}", value);
        }
    }

    Ok(())
}

fn main() {
    let args = Args::parse();
    let default_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
