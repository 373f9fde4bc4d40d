//! Web server for uninews.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use crate::config::WebConfig;
use crate::{NewsError, Result};

use super::handlers::AppState;
use super::router::{create_health_router, create_router};

/// Web server for the API.
pub struct WebServer {
    /// Server address.
    addr: SocketAddr,
    /// Application state.
    app_state: Arc<AppState>,
    /// Web configuration.
    web_config: WebConfig,
}

impl WebServer {
    /// Create a new web server.
    pub fn new(config: &WebConfig, app_state: AppState) -> Result<Self> {
        let addr = format!("{}:{}", config.host, config.port)
            .parse()
            .map_err(|e| NewsError::Config(format!("invalid web server address: {e}")))?;

        Ok(Self {
            addr,
            app_state: Arc::new(app_state),
            web_config: config.clone(),
        })
    }

    /// Get the server address.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Run the web server until it fails.
    pub async fn run(self) -> std::result::Result<(), std::io::Error> {
        let router = create_router(self.app_state, &self.web_config.cors_origins)
            .merge(create_health_router());

        let listener = TcpListener::bind(self.addr).await?;
        let local_addr = listener.local_addr()?;

        tracing::info!("Web server listening on http://{}", local_addr);

        axum::serve(listener, router).await
    }
}
