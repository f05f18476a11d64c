use clap::Parser;
use tracing_subscriber::EnvFilter;

use tasksync::cli::commands::Cli;
use tasksync::cli::handlers;

#[tokio::main]
async fn main() {
    // Logs go to stderr so --json output stays parseable.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let cli = Cli::parse();
    if let Err(e) = handlers::dispatch(cli).await {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
