//! SpaceX Launch Records Dashboard.

use clap::Parser;
use spacex_dash::config::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    spacex_dash::run(cli).await
}
