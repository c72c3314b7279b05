use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use itertools::Itertools;
use serde_json::json;
use traffic_paths::{
    graphs::road_list::read_roads, logging::init_tracing, search::path_tree::tree_roads,
    Junction, SelectionRule, TrafficNetwork,
};

/// Computes shortest paths from one junction to every other junction of a
/// road network. Without `--roads` the demonstration network is used.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of junctions in the network
    #[arg(short = 'n', long, default_value = "5")]
    junctions: u32,
    /// Junction the search starts at
    #[arg(short, long, default_value = "0")]
    source: Junction,
    /// Road list, `.json` array of {from, to, cost} or one `from to cost` per line
    #[arg(short, long)]
    roads: Option<PathBuf>,
    /// Which junction is settled first when distances are tied
    #[arg(short, long, value_enum, default_value_t = SelectionRule::FirstMinimum)]
    tie_break: SelectionRule,
    /// Print the result as JSON
    #[arg(long)]
    json: bool,
    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
    /// Log filter, e.g. `trace` or `traffic_paths=debug`
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(error) = init_tracing(args.verbose, args.log_level.as_deref()) {
        eprintln!("unable to initialize logging: {}", error);
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {}", error);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> traffic_paths::Result<()> {
    let mut network = match &args.roads {
        Some(path) => {
            let road_list = read_roads(path, args.junctions)?;
            if road_list.dropped > 0 {
                tracing::warn!(dropped = road_list.dropped, "ignored malformed road entries");
            }
            let mut network = TrafficNetwork::new(args.junctions);
            network.load_roads(&road_list.roads)?;
            network
        }
        None => TrafficNetwork::with_sample_roads(args.junctions)?,
    }
    .with_rule(args.tie_break);

    network.find_shortest_paths(args.source)?;
    let highlighted = tree_roads(network.graph(), network.result());

    if args.json {
        let output = json!({
            "result": network.result(),
            "report": network.report(),
            "tree": highlighted,
        });
        println!("{}", output);
        return Ok(());
    }

    println!("{}", network.report());
    println!(
        "Shortest path tree: {}",
        highlighted
            .iter()
            .map(|road| format!("{}->{} ({})", road.from, road.to, road.cost))
            .join(", ")
    );

    if let Some(result) = network.result() {
        for target in 0..network.number_of_junctions() {
            if let Some(path) = result.path_to(target).filter(|path| path.vertices.len() > 1) {
                println!(
                    "Route to {}: {} (cost {})",
                    target,
                    path.vertices.iter().join(" -> "),
                    path.distance
                );
            }
        }
    }

    Ok(())
}
