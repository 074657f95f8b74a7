use clap::Parser;
use tracing_subscriber::EnvFilter;

use catalog_admin::cli::{self, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    cli::run(Cli::parse()).await
}
