use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::models::{Item, ItemList};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to parse YAML items: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON items: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemFormat {
    Yaml,
    Json,
}

impl ItemFormat {
    /// `.json` is JSON; everything else is read as YAML, which also accepts
    /// most JSON documents.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ItemFormat::Json,
            _ => ItemFormat::Yaml,
        }
    }
}

/// Items files are either a bare sequence or a mapping with an `items` key.
#[derive(Deserialize)]
#[serde(untagged)]
enum ItemsDocument {
    List(Vec<Item>),
    Wrapped { items: Vec<Item> },
}

impl ItemsDocument {
    fn into_items(self) -> Vec<Item> {
        match self {
            ItemsDocument::List(items) | ItemsDocument::Wrapped { items } => items,
        }
    }
}

pub fn parse_items(content: &str, format: ItemFormat) -> Result<Vec<Item>, LoadError> {
    let doc: ItemsDocument = match format {
        ItemFormat::Yaml => serde_yaml::from_str(content)?,
        ItemFormat::Json => serde_json::from_str(content)?,
    };
    Ok(doc.into_items())
}

pub async fn load_items(path: &Path) -> Result<Vec<Item>> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read items file: {:?}", path))?;
    let items = parse_items(&content, ItemFormat::from_path(path))
        .with_context(|| format!("Failed to parse items file: {:?}", path))?;
    tracing::info!("Loaded {} items from {:?}", items.len(), path);
    Ok(items)
}

/// Concatenate item sources, keeping the first occurrence of each id.
/// Relative order of the kept items is preserved.
pub fn merge_items(sources: Vec<Vec<Item>>) -> Vec<Item> {
    let mut seen = HashSet::new();
    let mut merged = Vec::new();
    for item in sources.into_iter().flatten() {
        if seen.insert(item.id) {
            merged.push(item);
        } else {
            tracing::warn!("Dropping duplicate item id {} ({:?})", item.id, item.question);
        }
    }
    merged
}

/// Load and merge every file into one list. No paths means no items.
/// Ids must be unique within each file; repeats across files keep the first.
pub async fn load_list(paths: &[PathBuf]) -> Result<ItemList> {
    let mut sources = Vec::with_capacity(paths.len());
    for path in paths {
        let file_list = ItemList::new(load_items(path).await?)
            .with_context(|| format!("Invalid items file: {:?}", path))?;
        sources.push(file_list.into_items());
    }
    let list = ItemList::new(merge_items(sources))?;
    Ok(list)
}
