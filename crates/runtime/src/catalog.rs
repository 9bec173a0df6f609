//! Catalog loading.
//!
//! A catalog file is a JSON array of items:
//!
//! ```json
//! [{ "id": "1", "english": "Dog", "maori": "Kurī", "image": "dog" }]
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::config::RuntimeConfig;
use crate::types::{animal_catalog, PairableItem};

pub fn load_catalog(path: &Path) -> Result<Vec<PairableItem>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog {}", path.display()))?;
    let items: Vec<PairableItem> = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse catalog {}", path.display()))?;
    Ok(items)
}

/// The configured catalog file, or the built-in animals.
pub fn catalog_from_config(config: &RuntimeConfig) -> Result<Vec<PairableItem>> {
    match config.catalog_path.as_deref() {
        Some(path) => load_catalog(path),
        None => Ok(animal_catalog()),
    }
}
