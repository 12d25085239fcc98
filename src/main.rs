use anyhow::Result;
use snippet_lab::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run_cli().await
}
