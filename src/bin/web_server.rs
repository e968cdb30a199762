use graph_lab::web::server::{start_server_with_config, ServerConfig};
use log::info;
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    // Environment first, then an optional positional port argument
    let mut config = ServerConfig::from_env();
    if let Some(port) = env::args().nth(1) {
        config.port = port.parse()?;
    }

    info!("Configuration:");
    info!("  port: {}", config.port);
    info!("  static files: {}", config.static_dir);
    info!("  CORS enabled: {}", config.enable_cors);
    info!("  max sessions: {}", config.max_sessions);
    info!("  max nodes per session: {}", config.max_nodes);

    start_server_with_config(config).await?;

    Ok(())
}
