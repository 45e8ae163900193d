//! Server instance management

use axum::Router;
use std::future::Future;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::config::ServerConfig;
use crate::error::{ServeError, ServeResult};

/// HTTP server for one stub service
///
/// Owns the validated configuration and the service's router, and manages
/// binding, serving and graceful shutdown.
pub struct StubServer {
    /// Human-readable service title, used in logs
    title: &'static str,

    /// Server configuration
    config: ServerConfig,

    /// Service routes
    router: Router,
}

impl StubServer {
    /// Create new server instance
    ///
    /// # Arguments
    ///
    /// * `title` - Service title shown at startup
    /// * `config` - Server configuration
    /// * `router` - Service routes
    ///
    /// # Returns
    ///
    /// `Result<StubServer, ServeError>` - Server or `InvalidConfig`
    pub fn new(title: &'static str, config: ServerConfig, router: Router) -> ServeResult<Self> {
        config.validate()?;

        Ok(Self {
            title,
            config,
            router,
        })
    }

    /// Get socket address for binding
    pub fn socket_addr(&self) -> ServeResult<SocketAddr> {
        self.config.socket_addr()
    }

    /// Bind a listener on the configured address
    pub async fn bind(&self) -> ServeResult<TcpListener> {
        let addr = self.socket_addr()?;

        TcpListener::bind(addr).await.map_err(|source| {
            error!("Failed to bind to {}: {:?}", addr, source);
            ServeError::Bind { addr, source }
        })
    }

    /// Serve requests on `listener` until `shutdown` resolves
    ///
    /// In-flight requests are allowed to finish before this returns.
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> ServeResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        match listener.local_addr() {
            Ok(addr) => info!("{} listening on: http://{}", self.title, addr),
            Err(_) => info!("{} listening on: {}", self.title, self.config.server_url()),
        }

        let app = self.router.layer(TraceLayer::new_for_http());

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(ServeError::Serve)?;

        info!("{} stopped", self.title);
        Ok(())
    }

    /// Start server
    ///
    /// Binds the configured address and serves until Ctrl+C or SIGTERM.
    pub async fn start(self) -> ServeResult<()> {
        let listener = self.bind().await?;
        self.serve(listener, shutdown_signal()).await
    }

    /// Get server URL
    #[must_use]
    pub fn server_url(&self) -> String {
        self.config.server_url()
    }

    /// Service title
    #[must_use]
    pub fn title(&self) -> &'static str {
        self.title
    }

    /// Validated configuration
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

/// Wait for shutdown signal
///
/// Resolves on Ctrl+C, or SIGTERM on unix. If a handler cannot be
/// installed that source is logged and never fires.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received shutdown signal"),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix;
        match unix::signal(unix::SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
                info!("Received TERM signal");
            }
            Err(e) => {
                error!("Failed to install TERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
