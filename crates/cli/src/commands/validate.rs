//! Validate command implementation
//!
//! Loads a seed file the same way `albums serve --seed` does and reports what
//! it contains.

use anyhow::{Context, Result};
use std::collections::HashSet;
use albums_catalog::{Album, AlbumStore};

/// Validate a seed file without starting the server
pub async fn validate_seed_file(seed_path: &str) -> Result<()> {
    println!("🔍 Validating seed file: {}", seed_path);

    let store = AlbumStore::from_json_file(seed_path)
        .with_context(|| format!("Failed to load seed file: {}", seed_path))?;
    let albums = store.list().await;

    println!("✅ Seed file is valid");
    println!("   Albums: {}", albums.len());

    let duplicates = duplicate_ids(&albums);
    if !duplicates.is_empty() {
        println!("⚠️  Warnings:");
        for id in &duplicates {
            println!("   - Duplicate id '{}': lookups return the first occurrence", id);
        }
    }

    Ok(())
}

/// Ids that appear more than once, in order of their second occurrence
fn duplicate_ids(albums: &[Album]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut duplicates = Vec::new();

    for album in albums {
        if !seen.insert(album.id.as_str()) && reported.insert(album.id.as_str()) {
            duplicates.push(album.id.clone());
        }
    }

    duplicates
}
