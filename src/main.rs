use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::UtcTime;
use trimarker::cli::Cli;

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(UtcTime::rfc_3339())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "trimarker starting");

    let cli = Cli::parse();
    cli.dispatch()
}
