use clap::Parser;
use clientraw_bridge::cli::{run, Cli};
use clientraw_bridge::error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli).await
}
