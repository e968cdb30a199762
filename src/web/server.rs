use axum::{
    http::{header, Method},
    Router,
};
use log::info;
use std::net::SocketAddr;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};

use crate::web::api::{create_router, AppState};

/// Configuration for the web server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub static_dir: String,
    pub enable_cors: bool,
    pub max_sessions: usize,
    /// Upper bound on nodes per session graph
    pub max_nodes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3005,
            static_dir: "web".to_string(),
            enable_cors: true,
            max_sessions: 1000,
            max_nodes: 500,
        }
    }
}

impl ServerConfig {
    /// Defaults overridden by `GRAPH_LAB_PORT`, `GRAPH_LAB_STATIC_DIR`,
    /// `GRAPH_LAB_MAX_SESSIONS`, `GRAPH_LAB_MAX_NODES` and `GRAPH_LAB_CORS`
    /// (`0`/`false` disables CORS).
    /// Unparseable values fall back to the default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            port: lookup("GRAPH_LAB_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            static_dir: lookup("GRAPH_LAB_STATIC_DIR").unwrap_or(defaults.static_dir),
            enable_cors: lookup("GRAPH_LAB_CORS")
                .map(|v| !matches!(v.as_str(), "0" | "false"))
                .unwrap_or(defaults.enable_cors),
            max_sessions: lookup("GRAPH_LAB_MAX_SESSIONS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_sessions),
            max_nodes: lookup("GRAPH_LAB_MAX_NODES")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_nodes),
        }
    }
}

/// Builds the application: API routes, static front end and optional CORS
pub fn build_app(config: &ServerConfig) -> Router {
    let app = Router::new()
        // API routes
        .merge(create_router())
        // Static file serving for the web frontend
        .fallback_service(ServeDir::new(&config.static_dir))
        .with_state(AppState::new(config.max_sessions, config.max_nodes));

    if !config.enable_cors {
        return app;
    }

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    app.layer(ServiceBuilder::new().layer(cors).into_inner())
}

/// Start the web server with custom configuration
pub async fn start_server_with_config(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_app(&config);

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    info!("Graph Lab server starting on http://{}", addr);
    info!("Serving static files from: {}", config.static_dir);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
