//! Item registry HTTP service entry point.

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use item_registry::api::{create_router_with, AppState, RouterOptions};
use item_registry::config::{Config, CorsOrigins, LogFormat};
use item_registry::error::ServiceError;
use item_registry::metrics;
use item_registry::registry::ItemRegistry;
use item_registry::utils::shutdown_signal;

/// In-memory item registry HTTP service.
#[derive(Parser, Debug)]
#[command(name = "item-registry")]
#[command(about = "CRUD HTTP API for items with health checks")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// HTTP server port (overrides PORT).
    #[arg(short, long, global = true)]
    port: Option<u16>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default).
    Serve,

    /// Check configuration validity.
    CheckConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Load configuration
    let mut config = Config::load()?;

    if let Some(port) = args.port {
        config.port = port;
    }

    // Initialize logging
    init_logging(args.verbose, &config);

    match args.command {
        Some(Command::CheckConfig) => cmd_check_config(&config),
        Some(Command::Serve) | None => cmd_serve(config).await,
    }
}

/// Install the tracing subscriber.
fn init_logging(verbose: bool, config: &Config) {
    let filter = if verbose {
        EnvFilter::new("item_registry=debug,info")
    } else {
        EnvFilter::try_new(&config.rust_log).unwrap_or_else(|_| EnvFilter::new("info"))
    };

    let fmt_layer = match config.log_format() {
        LogFormat::Json => fmt::layer().json().boxed(),
        LogFormat::Pretty => fmt::layer().boxed(),
    };

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(filter)
        .init();
}

/// Check configuration validity.
fn cmd_check_config(config: &Config) -> anyhow::Result<()> {
    println!("======================================================================");
    println!("ITEM REGISTRY - CONFIGURATION CHECK");
    println!("======================================================================");

    print!("Validating configuration... ");
    if let Err(e) = config.ensure_valid() {
        println!("FAILED");
        println!("  Error: {}", e);
        return Err(e.into());
    }
    println!("OK");

    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Listen: {}:{}", config.host, config.port);
    println!("  Log Filter: {}", config.rust_log);
    println!("  Log Format: {}", config.log_format());
    match config.cors_origins() {
        Ok(CorsOrigins::Any) => println!("  CORS Origins: any"),
        Ok(CorsOrigins::List(origins)) => println!("  CORS Origins: {} listed", origins.len()),
        Err(e) => println!("  CORS Origins: invalid ({})", e),
    }
    println!("  API Docs: {}", if config.enable_docs { "Enabled" } else { "Disabled" });
    println!("  Metrics: {}", if config.enable_metrics { "Enabled" } else { "Disabled" });
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Run the HTTP server until a shutdown signal arrives.
async fn cmd_serve(config: Config) -> anyhow::Result<()> {
    // Validate configuration
    if let Err(e) = config.ensure_valid() {
        error!("{}", e);
        return Err(e.into());
    }

    info!("Configuration loaded successfully");
    info!("Log format: {}", config.log_format());
    info!("API docs: {}", if config.enable_docs { "/docs" } else { "disabled" });

    // Create app state
    let mut app_state = AppState::new(ItemRegistry::new());

    if config.enable_metrics {
        let handle = metrics::install_recorder()?;
        metrics::init_metrics();
        metrics::spawn_upkeep(handle.clone(), metrics::UPKEEP_INTERVAL);
        app_state = app_state.with_metrics(handle);
        info!("Prometheus metrics available at /metrics");
    }

    let options = RouterOptions::from_config(&config).map_err(ServiceError::InvalidConfig)?;
    let router = create_router_with(app_state, options);

    // Start HTTP server
    let addr = config.bind_addr().map_err(ServiceError::InvalidConfig)?;
    let listener = TcpListener::bind(addr).await.map_err(|e| {
        error!("Failed to bind {}: {}", addr, e);
        ServiceError::Io(e)
    })?;
    info!("HTTP server listening on {}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}
