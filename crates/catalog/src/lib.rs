//! Album records and the in-memory album store
//!
//! This crate owns the album data model, the built-in seed catalog and the
//! [`AlbumStore`] that HTTP handlers read from and append to.

pub mod album;
pub mod errors;
pub mod store;

pub use album::{seed_albums, Album};
pub use errors::CatalogError;
pub use store::AlbumStore;

/// Result type for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;
