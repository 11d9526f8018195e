use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use taskdeck::server::{create_router, ServerConfig};

#[derive(Parser)]
#[command(name = "taskdeck")]
#[command(about = "Static asset server for the task manager UI")]
struct Cli {
    /// Listen port. Overrides the PORT environment variable.
    #[arg(short, long)]
    port: Option<u16>,

    /// Directory the built UI bundle is served from.
    #[arg(long, default_value = "dist")]
    root: PathBuf,
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "taskdeck=debug,tower_http=debug".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut config = ServerConfig::from_env(cli.root);
    if let Some(port) = cli.port {
        config.port = port;
    }

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!("Task server listening on http://{}", config.bind_addr());
    tracing::info!("Serving assets from {}", config.asset_root.display());

    let app = create_router(config);
    axum::serve(listener, app).await?;

    Ok(())
}
