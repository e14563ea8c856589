use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;
use ts_core::{Real, StateVector};
use ts_init::{
    InitError, InitResult, OperatingPoints, OperatingTrajectories, OperatingTrajectory, load_json,
    load_yaml, seed_partitions, seed_partitions_parallel,
};

#[derive(Parser)]
#[command(name = "ts-cli")]
#[command(about = "trajseed CLI - initial guesses for optimal-control solvers", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load an initializer file and report what it holds
    Validate {
        /// Path to a YAML or JSON initializer file
        path: PathBuf,
    },
    /// Extract the operating trajectory over a horizon
    Extract {
        /// Path to a YAML or JSON initializer file
        path: PathBuf,
        /// Horizon start time in seconds
        #[arg(long)]
        start: Real,
        /// Horizon final time in seconds
        #[arg(long = "final")]
        final_time: Real,
        /// Initial state, comma separated (defaults to zeros)
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        x0: Option<Vec<Real>>,
        /// Split the horizon into this many equal partitions
        #[arg(long, default_value_t = 1)]
        partitions: usize,
        /// Extract partitions on worker threads
        #[arg(long)]
        parallel: bool,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

fn main() -> InitResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { path } => cmd_validate(&path),
        Commands::Extract {
            path,
            start,
            final_time,
            x0,
            partitions,
            parallel,
            json,
        } => cmd_extract(&path, start, final_time, x0, partitions, parallel, json),
    }
}

fn load(path: &Path) -> InitResult<OperatingPoints> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => load_json(path),
        _ => load_yaml(path),
    }
}

fn cmd_validate(path: &Path) -> InitResult<()> {
    println!("Validating initializer: {}", path.display());
    let points = load(path)?;
    println!("✓ {} is valid", points.name());
    println!(
        "  state dim {}, input dim {}",
        points.state_dim(),
        points.input_dim()
    );
    let switches = points.switching_times();
    if !switches.is_empty() {
        println!("  switching times: {:?}", switches);
    }
    Ok(())
}

fn cmd_extract(
    path: &Path,
    start: Real,
    final_time: Real,
    x0: Option<Vec<Real>>,
    partitions: usize,
    parallel: bool,
    json: bool,
) -> InitResult<()> {
    let points = load(path)?;
    let initial_state = match x0 {
        Some(values) => StateVector::from_vec(values),
        None => StateVector::zeros(points.state_dim()),
    };
    if partitions == 0 {
        return Err(InitError::InvalidArg {
            what: "partitions must be positive",
        });
    }

    let guess = if partitions == 1 {
        let mut out = OperatingTrajectory::new();
        points.trajectories(&initial_state, start, final_time, &mut out, false)?;
        out
    } else {
        let partition_times = partition_times(start, final_time, partitions);
        if parallel {
            seed_partitions_parallel(&points, &initial_state, &partition_times)?
        } else {
            seed_partitions(&points, &initial_state, &partition_times)?
        }
    };
    info!(samples = guess.len(), "extracted operating trajectory");

    if json {
        println!("{}", serde_json::to_string_pretty(&guess.to_samples())?);
    } else {
        print_table(&guess);
    }
    Ok(())
}

fn partition_times(start: Real, final_time: Real, partitions: usize) -> Vec<Real> {
    let step = (final_time - start) / partitions as Real;
    let mut times: Vec<Real> = (0..partitions).map(|i| start + step * i as Real).collect();
    times.push(final_time);
    times
}

fn print_table(guess: &OperatingTrajectory) {
    println!("{:>12}  {:<32}  {:<24}", "t", "state", "input");
    for k in 0..guess.len() {
        println!(
            "{:>12.6}  {:<32}  {:<24}",
            guess.time[k],
            format_vector(&guess.state[k]),
            format_vector(&guess.input[k])
        );
    }
}

fn format_vector(v: &StateVector) -> String {
    let parts: Vec<String> = v.iter().map(|x| format!("{x:.4}")).collect();
    format!("[{}]", parts.join(", "))
}
