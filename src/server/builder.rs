//! ServerBuilder for fluent API to build HTTP servers

use super::router::build_routes;
use crate::config::ServerConfig;
use anyhow::Result;
use axum::Router;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Builder for the CPF validation server
///
/// # Example
///
/// ```ignore
/// ServerBuilder::new()
///     .with_config(ServerConfig::load(None)?)
///     .serve()
///     .await?;
/// ```
pub struct ServerBuilder {
    config: ServerConfig,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    /// Create a builder with the default configuration
    pub fn new() -> Self {
        Self {
            config: ServerConfig::default(),
            custom_routes: Vec::new(),
        }
    }

    /// Replace the configuration
    pub fn with_config(mut self, config: ServerConfig) -> Self {
        self.config = config;
        self
    }

    /// Add routes next to the CPF endpoint
    ///
    /// # Example
    ///
    /// ```ignore
    /// let extra = Router::new().route("/version", get(|| async { "0.1.0" }));
    ///
    /// ServerBuilder::new().with_custom_routes(extra).build()?;
    /// ```
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// The configuration the server will use
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Build the final router
    ///
    /// Fails if the configuration does not validate.
    pub fn build(self) -> Result<Router> {
        self.config.validate()?;

        let mut app = build_routes(&self.config.server.route);
        for custom_router in self.custom_routes {
            app = app.merge(custom_router);
        }

        Ok(app.layer(ServiceBuilder::new().layer(TraceLayer::new_for_http())))
    }

    /// Serve the application with graceful shutdown
    ///
    /// This will:
    /// - Bind to the configured `host:port`
    /// - Start serving requests
    /// - Handle SIGTERM and SIGINT (Ctrl+C) for graceful shutdown
    pub async fn serve(self) -> Result<()> {
        let addr = self.config.bind_address();
        let route = self.config.server.route.clone();
        let app = self.build()?;
        let listener = TcpListener::bind(&addr).await?;

        tracing::info!("Server listening on {} (CPF route: {})", addr, route);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
