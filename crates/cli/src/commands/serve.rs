//! Serve command implementation
//!
//! This module implements the `albums serve` command, which builds the album
//! store and runs the HTTP server until it is interrupted.

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::path::PathBuf;
use albums_catalog::AlbumStore;
use albums_server::{HttpServer, ServerConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Log directives used when `RUST_LOG` is unset
const DEFAULT_LOG_DIRECTIVES: &[&str] = &[
    "albums=debug",
    "albums_server=debug",
    "albums_catalog=debug",
    "tower_http=debug",
    "info",
];

/// Arguments for the serve command
pub struct ServeArgs {
    /// Address to listen on
    pub listen_addr: SocketAddr,
    /// Static asset directory, if any
    pub static_dir: Option<String>,
    /// Seed file path; the built-in catalog is used when absent
    pub seed: Option<String>,
}

/// Execute the serve command
pub async fn execute_serve_command(args: ServeArgs) -> Result<()> {
    println!("💿 Starting album catalog...");
    println!("🔌 Address: http://{}", args.listen_addr);
    match &args.static_dir {
        Some(dir) => println!("📁 Static assets: {}", dir),
        None => println!("📁 Static assets: disabled"),
    }
    println!();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_DIRECTIVES.join(",")));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let store = build_store(args.seed.as_deref())?;
    info!("Catalog ready with {} albums", store.len().await);

    let config = ServerConfig {
        listen_addr: args.listen_addr,
        static_dir: args.static_dir.map(PathBuf::from),
    };

    let server = HttpServer::new(config, store);

    println!("🔄 Serving... Press Ctrl+C to shutdown");
    server.run().await.context("Album catalog server failed")?;

    println!("✅ Server shutdown complete");
    Ok(())
}

/// Build the album store from a seed file, or the built-in catalog
pub fn build_store(seed: Option<&str>) -> Result<AlbumStore> {
    match seed {
        Some(path) => AlbumStore::from_json_file(path)
            .with_context(|| format!("Failed to load seed file: {}", path)),
        None => Ok(AlbumStore::seeded()),
    }
}

/// Parse host and port into a listen address with helpful error messages
pub fn parse_listen_address(host: &str, port: u16) -> Result<SocketAddr> {
    let host = if host == "localhost" { "127.0.0.1" } else { host };
    let addr = if host.contains(':') {
        format!("[{}]:{}", host, port)
    } else {
        format!("{}:{}", host, port)
    };

    addr.parse().with_context(|| {
        format!(
            "Invalid host '{}'. Expected an IP address (e.g., 127.0.0.1 or ::1)",
            host
        )
    })
}
