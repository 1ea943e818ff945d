use clap::Parser;

use album_api::cli::{self, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    cli::load_env_file(&cli)?;
    cli::init_tracing();

    if let Err(e) = cli::serve(cli).await {
        tracing::error!("Fatal: {:#}", e);
        return Err(e);
    }
    Ok(())
}
