use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use hn_app::{AppConfig, AppResult, CreateRequest, NetworkResponse, NetworkService, UpdateRequest};

#[derive(Parser)]
#[command(name = "hn-cli")]
#[command(about = "huenet CLI - random color networks with hue diffusion", long_about = None)]
struct Cli {
    /// Path to a YAML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a network and print it as JSON
    Create {
        #[command(flatten)]
        network: NetworkArgs,
    },
    /// Create a network, apply diffusion steps and print the result
    Simulate {
        #[command(flatten)]
        network: NetworkArgs,
        /// Weight applied to the summed hues
        #[arg(long)]
        hue_influence: Option<f64>,
        /// Number of diffusion steps
        #[arg(long, default_value_t = 10)]
        steps: u32,
    },
    /// Answer JSON-lines requests on stdin until EOF
    Serve,
}

#[derive(clap::Args)]
struct NetworkArgs {
    /// Number of nodes
    #[arg(short, long)]
    nodes: Option<i64>,
    /// Probability of each possible edge
    #[arg(short, long)]
    edge_probability: Option<f64>,
    /// Seed for reproducible generation
    #[arg(short, long, allow_negative_numbers = true)]
    seed: Option<i64>,
}

impl NetworkArgs {
    fn request(&self) -> CreateRequest {
        CreateRequest {
            num_nodes: self.nodes,
            edge_probability: self.edge_probability,
            seed: self.seed,
        }
    }
}

fn main() -> AppResult<()> {
    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => hn_app::load_config(path)?,
        None => AppConfig::default(),
    };
    let service = NetworkService::new(config);

    match cli.command {
        Commands::Create { network } => cmd_create(&service, &network),
        Commands::Simulate {
            network,
            hue_influence,
            steps,
        } => cmd_simulate(&service, &network, hue_influence, steps),
        Commands::Serve => cmd_serve(&service),
    }
}

fn cmd_create(service: &NetworkService, args: &NetworkArgs) -> AppResult<()> {
    let response = service.create(&args.request())?;
    print_json(&response)
}

fn cmd_simulate(
    service: &NetworkService,
    args: &NetworkArgs,
    hue_influence: Option<f64>,
    steps: u32,
) -> AppResult<()> {
    let created = service.create(&args.request())?;
    let id = created.network_id.clone();
    eprintln!(
        "Network {}: {} nodes, {} edges",
        id,
        created.network.nodes.len(),
        created.network.edges.len()
    );
    print_hue_summary(0, &created);

    // One request for all steps, so the layout is computed once
    let request = UpdateRequest {
        hue_influence,
        steps: Some(steps),
        ..Default::default()
    };
    let updated = service.update(&id, &request)?;
    print_hue_summary(steps, &updated);

    print_json(&updated)
}

fn cmd_serve(service: &NetworkService) -> AppResult<()> {
    tracing::info!("serving JSON-lines requests on stdin");
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let reply = hn_app::handle_line(service, &line)?;
        writeln!(stdout, "{}", reply)?;
        stdout.flush()?;
    }
    Ok(())
}

/// Mean and spread of hues, one line on stderr.
fn print_hue_summary(step: u32, response: &NetworkResponse) {
    let hues: Vec<f64> = response.network.nodes.iter().map(|n| n.hsl[0]).collect();
    if hues.is_empty() {
        return;
    }
    let mean = hues.iter().sum::<f64>() / hues.len() as f64;
    let min = hues.iter().copied().fold(f64::INFINITY, f64::min);
    let max = hues.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    eprintln!(
        "  step {:>4}: hue mean {:7.2}  min {:7.2}  max {:7.2}",
        step, mean, min, max
    );
}

fn print_json(response: &NetworkResponse) -> AppResult<()> {
    let json = serde_json::to_string_pretty(response)?;
    println!("{}", json);
    Ok(())
}
