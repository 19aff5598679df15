//! CI/CD Playground API entry point.

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cicd_playground::api;
use cicd_playground::config::{Config, LogFormat};

/// CI/CD Playground API server.
#[derive(Parser, Debug)]
#[command(name = "cicd-playground")]
#[command(about = "Demonstration JSON API for CI/CD pipelines")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Interface to bind (overrides HOST).
    #[arg(long, global = true)]
    host: Option<String>,

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

    /// Print the resolved configuration and exit.
    CheckConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Load configuration before logging so ENVIRONMENT can pick the level
    let mut config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            init_tracing(&Config::default(), args.verbose);
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };
    config.apply_overrides(args.host, args.port);

    init_tracing(&config, args.verbose);

    match args.command {
        Some(Command::CheckConfig) => cmd_check_config(&config),
        Some(Command::Serve) | None => cmd_serve(&config).await,
    }
}

/// Initialize logging.
fn init_tracing(config: &Config, verbose: bool) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = EnvFilter::try_new(config.log_filter(verbose, rust_log.as_deref()))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);
    match config.log_format {
        LogFormat::Json => registry.with(fmt::layer().json()).init(),
        LogFormat::Text => registry.with(fmt::layer()).init(),
    }
}

/// Print the resolved configuration.
fn cmd_check_config(config: &Config) -> anyhow::Result<()> {
    println!("======================================================================");
    println!("CI/CD PLAYGROUND API - CONFIGURATION CHECK");
    println!("======================================================================");
    println!("  Version:     {}", config.app_version);
    println!("  Environment: {}", config.environment);
    println!("  Bind:        {}", config.bind_addr());
    println!("  Log Level:   {}", config.rust_log);
    println!("  Log Format:  {:?}", config.log_format);
    println!("  Debug Mode:  {}", config.is_development());
    println!("======================================================================");

    Ok(())
}

/// Run the HTTP server until shutdown.
async fn cmd_serve(config: &Config) -> anyhow::Result<()> {
    info!("Starting CI/CD Playground API");

    api::serve(config).await.map_err(|e| {
        error!("Server failed: {}", e);
        e
    })?;

    Ok(())
}
