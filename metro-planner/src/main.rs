use std::io::{self, BufRead, Write};

use metro_planner::domain::StationId;
use metro_planner::istanbul::istanbul_network;
use metro_planner::planner::{find_fewest_hops, find_minimum_time};
use serde_json::json;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let json_output = if let Some(pos) = args.iter().position(|a| a == "--json") {
        args.remove(pos);
        true
    } else {
        false
    };

    let (start_raw, end_raw) = match args.as_slice() {
        [start, end] => (start.clone(), end.clone()),
        [] => (prompt("Start station: "), prompt("End station: ")),
        _ => {
            eprintln!("Usage: metro-planner [--json] [START END]");
            std::process::exit(2);
        }
    };

    let (Ok(start), Ok(end)) = (
        StationId::parse(&start_raw),
        StationId::parse(&end_raw),
    ) else {
        eprintln!("Station keys must be non-empty and contain no whitespace.");
        std::process::exit(2);
    };

    let network = istanbul_network();

    let fewest_hops = find_fewest_hops(&network, &start, &end);
    let minimum_time = find_minimum_time(&network, &start, &end);

    if json_output {
        let out = json!({
            "fewest_hops": fewest_hops,
            "minimum_time": minimum_time,
        });
        println!("{out}");
        return;
    }

    match &fewest_hops {
        Some(route) => println!(
            "Route with the fewest transfers: {}",
            join_ids(&route.stations)
        ),
        None => println!("Route not found."),
    }

    match &minimum_time {
        Some(timed) => println!(
            "Fastest route ({} minutes): {}",
            timed.total_minutes,
            join_ids(&timed.stations)
        ),
        None => println!("Route not found."),
    }
}

fn join_ids(stations: &[StationId]) -> String {
    stations
        .iter()
        .map(StationId::as_str)
        .collect::<Vec<_>>()
        .join(" -> ")
}

fn prompt(label: &str) -> String {
    print!("{label}");
    io::stdout().flush().expect("failed to flush stdout");
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .expect("failed to read from stdin");
    line.trim().to_string()
}
