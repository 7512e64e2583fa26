//! roadnet - shortest travel times and graph center for a road network
//!
//! Loads a seed file, applies any `--edit` changes in order, recomputes
//! distances once, and answers a single query.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, Subcommand, ValueEnum};
use serde_json::json;
use thiserror::Error;

use u_roadnet::distance::Distance;
use u_roadnet::error::{NetworkError, SeedError};
use u_roadnet::logging;
use u_roadnet::seed::{self, SeedLoad};
use u_roadnet::session::{Edit, Session};

/// Query travel times and the center of a road network
#[derive(Parser, Debug)]
#[command(name = "roadnet")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Seed file: a header line, then `from to normal rain snow storm` per line
    #[arg(long, global = true, env = "ROADNET_SEED", default_value = "logistica.txt")]
    seed: PathBuf,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    format: OutputFormat,

    /// Link edit applied before querying, e.g. "remove A B", "set A B 7",
    /// "update A B 9", "weather A B storm" (repeatable, applied in order)
    #[arg(long = "edit", global = true, value_name = "EDIT")]
    edits: Vec<Edit>,

    /// Keep the links read before a malformed seed line instead of failing
    #[arg(long, global = true)]
    allow_partial: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Log filter (e.g. "debug" or "u_roadnet=trace")
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Shortest travel time between two locations
    Distance { from: String, to: String },
    /// Location with the smallest eccentricity
    Center,
    /// Direct link weights as a table
    Matrix,
    /// Eccentricity of every location
    Eccentricities,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Human,
    Json,
}

#[derive(Error, Debug)]
enum CliError {
    #[error(transparent)]
    Seed(#[from] SeedError),

    #[error(transparent)]
    Network(#[from] NetworkError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl CliError {
    fn exit_code(&self) -> u8 {
        match self {
            CliError::Seed(_) | CliError::Network(_) => 3,
            CliError::Json(_) => 1,
        }
    }
}

fn main() -> ExitCode {
    let start = Instant::now();
    let cli = Cli::parse();

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("warning: failed to initialize logging: {e}");
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    let result = run(&cli);
    tracing::debug!(elapsed = ?start.elapsed(), "finished");

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.format == OutputFormat::Json {
                eprintln!("{}", json!({ "error": e.to_string() }));
            } else {
                eprintln!("error: {e}");
            }
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let SeedLoad {
        network,
        weather,
        error,
    } = seed::load_path(&cli.seed);

    if let Some(e) = error {
        if !cli.allow_partial || network.is_empty() {
            return Err(e.into());
        }
        tracing::warn!(error = %e, edges = network.edge_count(), "continuing with partial network");
    }
    if network.is_empty() {
        return Err(NetworkError::EmptyNetwork.into());
    }

    let mut session = Session::new(network);
    for edit in &cli.edits {
        session.apply(edit, &weather)?;
    }
    if session.is_dirty() {
        session.recompute();
    }

    match &cli.command {
        Commands::Distance { from, to } => {
            let distance = session.shortest_distance(from, to)?;
            match cli.format {
                OutputFormat::Json => println!(
                    "{}",
                    serde_json::to_string(&json!({ "from": from, "to": to, "distance": distance }))?
                ),
                OutputFormat::Human => match distance {
                    Distance::Finite(d) => println!("Shortest distance from {from} to {to}: {d}"),
                    Distance::Unreachable => println!("No route from {from} to {to}"),
                },
            }
        }
        Commands::Center => {
            let center = session.center()?;
            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string(&center)?),
                OutputFormat::Human => println!(
                    "Graph center: {} (eccentricity {})",
                    center.node(),
                    center.eccentricity()
                ),
            }
        }
        Commands::Matrix => {
            let matrix = session.network().adjacency_matrix();
            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string(&matrix)?),
                OutputFormat::Human => print!("{matrix}"),
            }
        }
        Commands::Eccentricities => {
            let distances = session.distances()?;
            match cli.format {
                OutputFormat::Json => {
                    let rows: Vec<_> = distances
                        .eccentricities()
                        .map(|(node, ecc)| json!({ "node": node, "eccentricity": ecc }))
                        .collect();
                    println!("{}", serde_json::to_string(&rows)?);
                }
                OutputFormat::Human => {
                    for (node, ecc) in distances.eccentricities() {
                        println!("{node}\t{ecc}");
                    }
                }
            }
        }
    }

    Ok(())
}
