//! HTTP server lifecycle.
//!
//! Binds the configured address, serves the album router and shuts down
//! gracefully on Ctrl+C or SIGTERM.

use anyhow::{Context, Result};
use axum::Router;
use std::future::Future;
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info};

use albums_catalog::AlbumStore;

use crate::routes;

/// Configuration for the HTTP server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on
    pub listen_addr: SocketAddr,
    /// Directory of frontend assets served at the root path
    pub static_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            static_dir: Some(PathBuf::from("./views/js")),
        }
    }
}

/// Album catalog HTTP server
pub struct HttpServer {
    config: ServerConfig,
    store: AlbumStore,
}

impl HttpServer {
    /// Creates a new [`HttpServer`] serving `store`.
    pub fn new(config: ServerConfig, store: AlbumStore) -> Self {
        Self { config, store }
    }

    /// Access the configuration associated with this server.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// The store handlers read from and append to.
    pub fn store(&self) -> &AlbumStore {
        &self.store
    }

    /// Build the application router.
    pub fn router(&self) -> Router {
        routes::router(self.store.clone(), self.config.static_dir.as_deref())
    }

    /// Bind the configured address and serve until a shutdown signal arrives.
    pub async fn run(&self) -> Result<()> {
        let listener = TcpListener::bind(self.config.listen_addr)
            .await
            .with_context(|| format!("Failed to bind {}", self.config.listen_addr))?;

        self.serve(listener, wait_for_shutdown()).await
    }

    /// Serve on an already bound listener until `shutdown` completes.
    pub async fn serve<F>(&self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let local_addr = listener
            .local_addr()
            .context("Failed to read listener address")?;
        info!("Album catalog listening on http://{}", local_addr);

        if let Some(dir) = &self.config.static_dir {
            if !dir.is_dir() {
                info!("Static directory {} does not exist yet", dir.display());
            }
        }

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await
            .context("HTTP server terminated with an error")?;

        info!("HTTP server on {} stopped", local_addr);
        Ok(())
    }
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn wait_for_shutdown() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
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

    info!("Shutdown signal received");
}
