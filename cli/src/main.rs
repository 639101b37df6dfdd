mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::{camera, name, stops};
use tracing_subscriber::EnvFilter;

/// Log to stderr at a level chosen by `-v` count; `RUST_LOG` still wins.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();
}

pub fn run() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Commands::Name(args) => name::run(&cli, args),
        Commands::Camera(args) => camera::run(&cli, args),
        Commands::Stops(args) => stops::run(&cli, args),
    }
}

fn main() -> anyhow::Result<()> { run() }
