use clap::Parser;
use consilium::{ApiKeys, AppState, ConsiliumConfig, ModelFactory, WorkflowRunner, api};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "consilium-server",
    version,
    about = "Multi-expert LLM analysis server"
)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, default_value = "consilium.toml", env = "CONSILIUM_CONFIG")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = ConsiliumConfig::load(&cli.config)?;

    // RUST_LOG wins over the configured level when set
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(config = %cli.config.display(), "Loaded configuration");

    let factory = ModelFactory::new(ApiKeys::from_env());
    let workflow = WorkflowRunner::from_config(&config, &factory)?;

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState {
        config: Arc::new(config),
        workflow: Arc::new(workflow),
    };

    let app = api::routes::create_router().with_state(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
