//! HTTP adapter for the album catalog
//!
//! This crate exposes an [`AlbumStore`](albums_catalog::AlbumStore) over a
//! small JSON API and serves the frontend's static assets alongside it.

pub mod errors;
pub mod http_server;
pub mod response;
pub mod routes;

pub use errors::ApiError;
pub use http_server::{HttpServer, ServerConfig};
pub use response::IndentedJson;
pub use routes::router;
