use chromatic_polynomial::{
    export::save_dot, parser::format_edge_list, tree::random_tree, ChromaticResult,
};
use clap::Parser;
use log::info;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

/// Random tree generator.
///
/// Writes the tree in the edge-list format read by the other tools:
///
/// <n>
/// <u> <v>
/// ...
#[derive(Parser, Debug)]
#[command(author, version, about = "Generate a random tree as an edge list")]
struct Args {
    /// Number of vertices
    #[arg(short, long)]
    n: usize,

    /// Random seed (if omitted, uses entropy)
    #[arg(long)]
    seed: Option<u64>,

    /// Output file path for the edge list
    #[arg(short, long)]
    output: PathBuf,

    /// Also write a Graphviz DOT file
    #[arg(long)]
    dot: Option<PathBuf>,
}

fn run(args: &Args) -> ChromaticResult<()> {
    let seed = args.seed.unwrap_or_else(|| rand::thread_rng().gen());
    let mut rng = StdRng::seed_from_u64(seed);
    info!("seed = {}", seed);

    let tree = random_tree(args.n, &mut rng)?;

    println!("Tree consists of the following edges:");
    for (u, v) in tree.graph.edges() {
        println!("{}, {}", u, v);
    }
    println!("max(du + dv) = {}", tree.max_degree_sum);

    let mut writer = File::create(&args.output)?;
    writer.write_all(format_edge_list(&tree.graph).as_bytes())?;
    writer.flush()?;

    if let Some(path) = &args.dot {
        save_dot(path, &tree.graph, None)?;
    }

    Ok(())
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
