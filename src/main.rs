use clap::Parser;
use model_accessors::cli::{self, Cli};
use model_accessors::config::AppConfig;
use model_accessors::infrastructure::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load()?;
    logging::init_logging(&config.logging);

    cli::run(cli, &config).await
}
