//! In-memory Album Store
//!
//! This module implements the ordered album collection shared by all request
//! handlers. Each [`AlbumStore`] owns its own collection; clones share it.

use std::fs;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::album::{seed_albums, Album};
use crate::errors::CatalogError;

/// Ordered, insertion-preserving album collection
#[derive(Debug, Clone)]
pub struct AlbumStore {
    /// Albums in seed order, then creation order
    albums: Arc<RwLock<Vec<Album>>>,
}

impl AlbumStore {
    /// Create a store holding exactly `albums`
    pub fn new(albums: Vec<Album>) -> Self {
        Self {
            albums: Arc::new(RwLock::new(albums)),
        }
    }

    /// Create a store holding the built-in seed catalog
    pub fn seeded() -> Self {
        Self::new(seed_albums())
    }

    /// Create a store seeded from a JSON file holding an array of albums
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| CatalogError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let albums: Vec<Album> = serde_json::from_str(&contents)?;
        info!("Loaded {} albums from {}", albums.len(), path.display());

        Ok(Self::new(albums))
    }

    /// Snapshot of every album in order
    pub async fn list(&self) -> Vec<Album> {
        self.albums.read().await.clone()
    }

    /// First album whose id matches, scanning in insertion order
    pub async fn get(&self, id: &str) -> Option<Album> {
        let albums = self.albums.read().await;
        albums.iter().find(|album| album.id == id).cloned()
    }

    /// Append an album to the end of the collection
    pub async fn create(&self, album: Album) -> Album {
        let mut albums = self.albums.write().await;
        albums.push(album.clone());
        debug!("Appended album {} ({} total)", album.id, albums.len());
        album
    }

    /// Number of albums currently held
    pub async fn len(&self) -> usize {
        self.albums.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.albums.read().await.is_empty()
    }
}

impl Default for AlbumStore {
    fn default() -> Self {
        Self::seeded()
    }
}
