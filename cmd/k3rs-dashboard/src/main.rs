use clap::Parser;
use pkg_api::server::{ServerConfig, start_server};
use pkg_constants::network::{DEFAULT_API_ADDR, DEFAULT_DASHBOARD_PORT};
use pkg_constants::paths::DEFAULT_DASHBOARD_CONFIG;
use pkg_types::config::{DashboardConfigFile, load_config_file};
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "k3rs-dashboard",
    about = "k3rs dashboard backend: replica set overview"
)]
struct Cli {
    /// Path to YAML config file
    #[arg(long, short, default_value = DEFAULT_DASHBOARD_CONFIG)]
    config: String,

    /// Port to listen on
    #[arg(long)]
    port: Option<u16>,

    /// k3rs API server to list resources from
    #[arg(long)]
    server: Option<String>,

    /// Bearer token for the API server
    #[arg(long)]
    token: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
    let cli = Cli::parse();

    // Load config file (returns defaults if file not found)
    let file_cfg: DashboardConfigFile = load_config_file(&cli.config)?;
    info!("Config file: {}", cli.config);

    // Merge: CLI args > config file > defaults
    let port = cli.port.or(file_cfg.port).unwrap_or(DEFAULT_DASHBOARD_PORT);
    let api_server = cli
        .server
        .or(file_cfg.server)
        .unwrap_or_else(|| DEFAULT_API_ADDR.to_string());
    let token = cli.token.or(file_cfg.token);

    info!("Starting k3rs-dashboard");
    info!("  Port:      {}", port);
    info!("  Server:    {}", api_server);
    match &token {
        Some(t) => info!("  Token:     {}***", t.chars().take(4).collect::<String>()),
        None => info!("  Token:     <none>"),
    }
    info!(
        "  Resources: replicasets={} services={} pods={}",
        file_cfg.resources.replicasets, file_cfg.resources.services, file_cfg.resources.pods
    );

    let config = ServerConfig {
        addr: SocketAddr::from(([0, 0, 0, 0], port)),
        api_server,
        token,
        resources: file_cfg.resources,
    };

    start_server(config).await?;

    Ok(())
}
