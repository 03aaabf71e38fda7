use anyhow::Result;
use clap::Parser;

use env_secrets::app::App;
use env_secrets::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    App::run(cli).await
}
