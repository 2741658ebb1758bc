//! Stub Gateway - TypeScript interface stubs for Go files on GitHub
//!
//! # Usage
//! ```bash
//! stub-gateway                                  # Listen on 0.0.0.0:8080
//! stub-gateway --port 9000 --top-level-only     # Skip types declared in functions
//! curl localhost:8080/alice/repo/main/pkg/types # Stubs for pkg/types.go
//! ```

mod error;
mod models;
mod projector;
mod remote;
mod routes;

use std::sync::Arc;

use axum::Router;
use clap::Parser;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use projector::{DeclarationScope, ProjectorRegistry};
use remote::{HttpFetcher, PathResolver, StatusPolicy, resolve::DEFAULT_REMOTE_HOST};
use routes::AppState;

/// Stub Gateway - preview the type shapes of a remote Go file
#[derive(Parser)]
#[command(name = "stub-gateway")]
#[command(about = "Serves TypeScript interface stubs for Go files hosted on GitHub", long_about = None)]
struct Cli {
    /// Port to listen on
    #[arg(short, long, env = "STUB_GATEWAY_PORT", default_value = "8080")]
    port: u16,

    /// Address to bind
    #[arg(long, env = "STUB_GATEWAY_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Remote source host the candidate URLs are rooted at
    #[arg(long, env = "STUB_GATEWAY_REMOTE_HOST", default_value = DEFAULT_REMOTE_HOST)]
    remote_host: String,

    /// Treat non-2xx responses from the remote host as missing files
    #[arg(long)]
    require_success: bool,

    /// Only emit stubs for types declared at file level
    #[arg(long)]
    top_level_only: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let policy = if cli.require_success {
        StatusPolicy::RequireSuccess
    } else {
        StatusPolicy::AcceptAny
    };
    let scope = if cli.top_level_only {
        DeclarationScope::TopLevel
    } else {
        DeclarationScope::All
    };

    let state = Arc::new(AppState {
        resolver: PathResolver::new(&cli.remote_host),
        fetcher: Arc::new(HttpFetcher::new(policy)?),
        projectors: ProjectorRegistry::with_builtin(scope),
    });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .merge(routes::create_router(state))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", cli.host, cli.port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("✗ Failed to bind to {}: {}", addr, e);
            eprintln!("  Try a different port with --port <PORT>");
            std::process::exit(1);
        }
    };

    tracing::info!(
        "Listening on http://{} (remote host {}, status policy {:?}, scope {:?})",
        addr,
        cli.remote_host,
        policy,
        scope
    );

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
        tracing::info!("Shutting down");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}
