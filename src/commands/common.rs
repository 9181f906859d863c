use anyhow::{Context, Result};
use clap::Args as ClapArgs;
use std::path::PathBuf;

use crate::config::Config;
use crate::data;
use crate::models::ItemList;

#[derive(ClapArgs, Debug, Default)]
pub struct SourceArgs {
    /// Items file (YAML or JSON); repeat to merge several files
    #[arg(short, long = "items", value_name = "PATH")]
    pub items: Vec<PathBuf>,

    /// Custom config file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Load the config, then the items it (or the command line) points at.
/// Falls back to the built-in sample set when no file is named anywhere.
pub async fn load_sources(args: &SourceArgs) -> Result<(Config, ItemList)> {
    let config = Config::load(args.config.clone())?;
    let items = load_items_for(&config, &args.items).await?;
    Ok((config, items))
}

pub async fn load_items_for(config: &Config, overrides: &[PathBuf]) -> Result<ItemList> {
    let paths = config.item_paths(overrides);
    if paths.is_empty() {
        tracing::info!("No items file given, using built-in sample items");
        return ItemList::new(data::sample_items()).context("Built-in sample items are invalid");
    }
    data::load_list(&paths).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_sources_defaults_to_sample_items() {
        let temp_dir = TempDir::new().unwrap();
        let args = SourceArgs {
            items: Vec::new(),
            config: Some(temp_dir.path().join("missing.yaml")),
        };
        let (_config, items) = load_sources(&args).await.unwrap();
        assert_eq!(items.len(), data::sample_items().len());
    }

    #[tokio::test]
    async fn load_sources_uses_items_path_from_config() {
        let temp_dir = TempDir::new().unwrap();
        let items_path = temp_dir.path().join("faq.yaml");
        std::fs::write(&items_path, "- {id: 9, question: \"Q?\", answer: \"A.\"}\n").unwrap();
        let config_path = temp_dir.path().join("config.yaml");
        std::fs::write(&config_path, format!("items_path: {:?}\n", items_path)).unwrap();

        let args = SourceArgs {
            items: Vec::new(),
            config: Some(config_path),
        };
        let (config, items) = load_sources(&args).await.unwrap();
        assert_eq!(config.items_path, Some(items_path));
        assert_eq!(items.len(), 1);
    }

    #[tokio::test]
    async fn command_line_items_override_config() {
        let temp_dir = TempDir::new().unwrap();
        let cli_items = temp_dir.path().join("cli.json");
        std::fs::write(&cli_items, "[]").unwrap();

        let config = Config::default().with_items_path(temp_dir.path().join("never-read.yaml"));
        let items = load_items_for(&config, &[cli_items]).await.unwrap();
        assert!(items.is_empty());
    }
}
