use std::{
    process::ExitCode,
    time::{Duration, Instant},
};

use clap::Parser;
use indicatif::ParallelProgressIterator;
use rand::{rngs::StdRng, SeedableRng};
use rayon::prelude::*;
use traffic_paths::{
    logging::init_tracing,
    search::validation::validate_result,
    utility::{average_duration, get_progressbar, random_roads},
    Dijkstra, MatrixGraph, SelectionRule,
};

/// Runs every source of many random networks through both selection rules,
/// validates each result and reports the average search time.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of junctions per network
    #[arg(short, long, default_value = "50")]
    junctions: u32,
    /// Probability of a road between two junctions
    #[arg(short, long, default_value = "0.1")]
    density: f64,
    /// Largest road cost
    #[arg(short, long, default_value = "100")]
    max_cost: u32,
    /// Number of random networks
    #[arg(short, long, default_value = "1000")]
    number_of_graphs: u32,
    /// Seed of the first network, network `i` uses `seed + i`
    #[arg(short, long, default_value = "0")]
    seed: u64,
    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    if let Err(error) = init_tracing(args.verbose, None) {
        eprintln!("unable to initialize logging: {}", error);
    }

    let outcomes: Vec<Result<Duration, String>> = (0..args.number_of_graphs)
        .into_par_iter()
        .progress_with(get_progressbar(
            "Searching random networks",
            args.number_of_graphs as u64,
        ))
        .map(|index| benchmark_network(&args, args.seed + index as u64))
        .collect();

    let mut failures = 0;
    let mut durations = Vec::new();
    for (index, outcome) in outcomes.into_iter().enumerate() {
        match outcome {
            Ok(duration) => durations.push(duration),
            Err(reason) => {
                failures += 1;
                eprintln!("network with seed {} failed: {}", args.seed + index as u64, reason);
            }
        }
    }

    let searches = durations.len() as u64 * u64::from(args.junctions) * 2;
    if let Some(average) = average_duration(durations.iter().sum::<Duration>(), searches) {
        println!("Average search duration is {:?}", average);
    }

    if failures > 0 {
        println!("{} of {} networks failed", failures, args.number_of_graphs);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn benchmark_network(args: &Args, seed: u64) -> Result<Duration, String> {
    let mut rng = StdRng::seed_from_u64(seed);
    let roads = random_roads(&mut rng, args.junctions, args.density, args.max_cost);
    let graph = MatrixGraph::from_roads(args.junctions, &roads).map_err(|error| error.to_string())?;

    let first = Dijkstra::new(&graph).with_rule(SelectionRule::FirstMinimum);
    let last = Dijkstra::new(&graph).with_rule(SelectionRule::LastMinimum);

    let mut total = Duration::ZERO;
    for source in 0..args.junctions {
        let start = Instant::now();
        let first_result = first.single_source(source).map_err(|error| error.to_string())?;
        let last_result = last.single_source(source).map_err(|error| error.to_string())?;
        total += start.elapsed();

        validate_result(&graph, &first_result)?;
        validate_result(&graph, &last_result)?;
        if first_result.distances() != last_result.distances() {
            return Err(format!("selection rules disagree for source {}", source));
        }
    }

    Ok(total)
}
