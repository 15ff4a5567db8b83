//! Intent Gateway - Main Entry Point
//!
//! `serve` runs the HTTP gateway; `search` runs a single query from the
//! command line and prints the aggregated products.
//!
//! Run with: PORT=8000 cargo run -- serve

use anyhow::Context;
use clap::{Parser, Subcommand};

use intent_gateway::config::{SearchArgs, ServeArgs};
use intent_gateway::handlers::{router, GatewayState};
use intent_gateway::infrastructure::IntentClient;

#[derive(Parser)]
#[command(name = "intent-gateway", version, about = "Product intent search gateway")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP gateway
    Serve(ServeArgs),
    /// Run one query and print the products as JSON
    Search(SearchArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so `search` output stays clean JSON
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse().command {
        Command::Serve(args) => serve(args).await,
        Command::Search(args) => search(args).await,
    }
}

async fn serve(args: ServeArgs) -> anyhow::Result<()> {
    let config = args.upstream.gateway_config();
    let client = IntentClient::new(&config).context("Failed to build upstream client")?;

    tracing::info!(
        upstream = %config.upstream_url,
        timeout_secs = config.request_timeout.as_secs(),
        "Starting Intent Gateway..."
    );

    let app = router(GatewayState::new(client));

    let listener = tokio::net::TcpListener::bind((args.host.as_str(), args.port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", args.host, args.port))?;
    tracing::info!("Server running on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn search(args: SearchArgs) -> anyhow::Result<()> {
    let client = IntentClient::new(&args.upstream.gateway_config())?;
    let results = client.search(&args.intent_query()).await?;

    let output = if args.all {
        serde_json::to_string_pretty(&results)?
    } else {
        serde_json::to_string_pretty(&results.first_five_products)?
    };
    println!("{}", output);

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
