use clap::Parser;

use taskboard::cli::{self, Cli};
use taskboard::logging::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    cli::run(Cli::parse()).await
}
