use std::sync::Arc;

use bytehttp::app::App;
use bytehttp::config::{Args, Config};
use bytehttp::server;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_level(true)
        .init();

    let args = Args::parse();
    let cfg = Config::from_args(&args)?;
    let app = Arc::new(App::from_config(&cfg));

    tokio::select! {
        res = server::listener::run(&cfg, app) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
