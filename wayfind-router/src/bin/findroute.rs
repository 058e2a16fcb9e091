//! Tool to query routes in wayfind graph snapshots.

use std::path::PathBuf;

use anyhow::{anyhow, Error};
use clap::Parser;

use wayfind_router::GraphRouter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
    }
}

fn run() -> Result<(), Error> {
    env_logger::init();
    let opts: Opts = Opts::parse();

    let router = GraphRouter::new();
    for path in &opts.snapshots {
        if !router.load_file(path) {
            return Err(anyhow!("failed to load snapshot [{}]", path.display()));
        }
    }

    let result = router.find_route(&opts.from, &opts.to, &opts.metric)?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

/// Find the cheapest route between two nodes of a weighted graph.
#[derive(Parser)]
#[clap(version = "0.1.0")]
struct Opts {
    /// Snapshot JSON files, merged in order
    #[clap(required = true)]
    snapshots: Vec<PathBuf>,

    /// Start node
    #[clap(long = "from")]
    from: String,

    /// Destination node
    #[clap(long = "to")]
    to: String,

    /// Edge weight to minimize ("distance" or "time")
    #[clap(long = "metric", default_value = "distance")]
    metric: String,
}
