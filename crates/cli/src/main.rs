mod cli;
mod dashboard;
mod error;
mod render;
mod summary;

use std::env;
use std::io;
use std::process::ExitCode;

use clap::Parser;
use cli::Cli;
use cli::Commands;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const DEFAULT_LOG_FILTER: &str = "shelfstats=info,shelfstats_data=info,shelfstats_vis=info";

fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Render(args) => render::render(args),
        Commands::Summary(args) => summary::summary(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());

    tracing_subscriber::registry()
        .with(EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}
