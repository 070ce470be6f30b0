use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;

const EXIT_SUCCESS: i32 = 0;
const EXIT_NETWORK: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch ephemerides, score all bodies, export the unified dataset
    /// (default if no subcommand)
    Run {
        /// Override the output CSV path from the config
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Serve the exported dataset at GET /data as JSON
    Serve {
        /// Override the listen address from the config
        #[arg(short, long)]
        addr: Option<String>,
    },
    /// Write a commented default config file
    Init,
}

#[derive(Parser, Debug)]
#[command(name = "life-map")]
#[command(about = "Habitability scoring for celestial bodies from JPL Horizons ephemerides", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/life-map/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() {
    // Install rustls crypto provider (required for rustls 0.23+)
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Run { output: None });
    let config_path = cli.config.map(PathBuf::from);

    if let Commands::Init = command {
        match life_map::config::write_default_config(config_path) {
            Ok(path) => {
                println!("Wrote default config to {}", path.display());
                std::process::exit(EXIT_SUCCESS);
            }
            Err(e) => {
                eprintln!("Config error: {}", e);
                std::process::exit(EXIT_CONFIG);
            }
        }
    }

    // Load config
    let config = match life_map::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate config at startup (all errors at once)
    if let Err(errors) = life_map::config::validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    if cli.verbose {
        eprintln!("Loaded {} bodies from config", config.bodies.len());
        for (i, body) in config.bodies.iter().enumerate() {
            eprintln!("  Body {}: {} ({} around {})", i + 1, body.name, body.target, body.center);
        }
    }

    match command {
        Commands::Run { output } => {
            let start_time = Instant::now();

            let client = match life_map::horizons::HorizonsClient::new() {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("Failed to create Horizons client: {}", e);
                    std::process::exit(EXIT_NETWORK);
                }
            };

            let (dataset, failures) =
                match life_map::pipeline::run_pipeline(&client, &config, cli.verbose).await {
                    Ok(result) => result,
                    Err(e) => {
                        eprintln!("{}", e);
                        std::process::exit(EXIT_NETWORK);
                    }
                };

            let output_path = output.unwrap_or_else(|| config.output.clone());
            if let Err(e) = life_map::output::write_csv(&output_path, &dataset) {
                eprintln!("Export failed: {}", e);
                std::process::exit(EXIT_NETWORK);
            }
            println!("Exported {} rows to {}", dataset.len(), output_path.display());

            let use_colors = life_map::output::should_use_colors();
            let summaries = dataset.summarize();
            println!();
            println!("Average habitability indicators:");
            println!(
                "{}",
                life_map::output::format_summary_table(&summaries, use_colors)
            );

            if !failures.is_empty() {
                eprintln!();
                eprintln!("{} of {} bodies failed:", failures.len(), config.bodies.len());
                for failure in &failures {
                    eprintln!("  - {}", failure);
                }
            }

            if cli.verbose {
                eprintln!();
                eprintln!("Done in {:?}", start_time.elapsed());
            }

            std::process::exit(EXIT_SUCCESS);
        }
        Commands::Serve { addr } => {
            let addr = addr.unwrap_or_else(|| config.serve_addr.clone());
            if let Err(e) = life_map::serve::serve_dataset(&addr, &config.output) {
                eprintln!("Serve error: {}", e);
                std::process::exit(EXIT_NETWORK);
            }
            std::process::exit(EXIT_SUCCESS);
        }
        Commands::Init => unreachable!("handled above"),
    }
}
