use anyhow::Result;
use axum::Router;
use clap::Parser;
use newsqa_core::config::{DEFAULT_CHUNK_SIZE, DEFAULT_MIN_SCORE, DEFAULT_OVERLAP, DEFAULT_TOP_K};
use newsqa_core::QaParams;
use newsqa_server::{build_app, ServerConfig, DEFAULT_MAX_BODY_BYTES};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
struct Args {
    /// Host to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,
    /// Port to bind
    #[arg(long, default_value_t = 8080)]
    port: u16,
    /// Default number of passages per answer
    #[arg(long, default_value_t = DEFAULT_TOP_K)]
    top_k: usize,
    /// Default passage length in words
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
    chunk_size: usize,
    /// Default words shared between consecutive passages
    #[arg(long, default_value_t = DEFAULT_OVERLAP)]
    overlap: usize,
    /// Default score a passage must exceed
    #[arg(long, default_value_t = DEFAULT_MIN_SCORE)]
    min_score: f64,
    /// Maximum request body size in bytes
    #[arg(long, default_value_t = DEFAULT_MAX_BODY_BYTES)]
    max_body_bytes: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();
    let params = QaParams {
        top_k: args.top_k,
        chunk_size: args.chunk_size,
        overlap: args.overlap,
        min_score: args.min_score,
    };
    let app: Router = build_app(ServerConfig { params, max_body_bytes: args.max_body_bytes });

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, ?params, "server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
