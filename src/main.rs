// src/main.rs
// csm-coach - lesson generation and Socratic coaching service

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use csm_coach::config::{self, ServiceConfig};
use csm_coach::web::{self, AppState};

#[derive(Parser)]
#[command(name = "csm-coach")]
#[command(about = "Lesson generation and Socratic coaching over a chat-completion API")]
#[command(version)]
struct Args {
    /// Address to bind
    #[arg(long, env = "CSM_HOST", default_value = config::DEFAULT_HOST)]
    host: String,

    /// Port to listen on
    #[arg(short, long, env = "CSM_PORT", default_value_t = config::DEFAULT_PORT)]
    port: u16,

    /// Chat model used by both endpoints
    #[arg(long, env = "CSM_MODEL", default_value = config::DEFAULT_MODEL)]
    model: String,

    /// OpenAI-compatible API root
    #[arg(long, env = "OPENAI_BASE_URL", default_value = config::DEFAULT_BASE_URL)]
    base_url: String,

    /// Prompt template root (defaults to the bundled prompts/ directory)
    #[arg(long, env = "CSM_TEMPLATES_DIR")]
    templates_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine; real deployments set the environment directly
    let _ = dotenvy::dotenv();

    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let config = ServiceConfig::default()
        .with_api_key(config::read_key("OPENAI_API_KEY"))
        .with_base_url(args.base_url)
        .with_model(args.model)
        .with_templates_dir(
            args.templates_dir
                .unwrap_or_else(ServiceConfig::default_templates_dir),
        )
        .with_bind(args.host, args.port);

    let validation = config.ensure_valid()?;
    for warning in &validation.warnings {
        warn!("{}", warning);
    }

    info!("Model: {}", config.model);
    info!("Templates: {}", config.templates_dir.display());

    let app = web::create_router(AppState::from_config(&config));

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("csm-coach listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
