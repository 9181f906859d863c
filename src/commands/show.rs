use anyhow::{Context, Result};
use clap::Args as ClapArgs;
use std::path::PathBuf;

use crate::accordion::ExpandableList;
use crate::commands::common::{self, SourceArgs};
use crate::config::{Config, IndicatorStyle};
use crate::models::{ItemId, ItemList};
use crate::render::{OutputFormat, TextRenderer};

#[derive(ClapArgs)]
pub struct Args {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Toggle this item id before printing; applied in order
    #[arg(short, long = "expand", value_name = "ID")]
    pub expand: Vec<u64>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Custom minijinja template file (overrides --format)
    #[arg(short, long)]
    pub template: Option<PathBuf>,

    /// Indicator glyphs (overrides the config file)
    #[arg(long, value_enum)]
    pub indicator: Option<IndicatorStyle>,
}

pub async fn execute(args: Args) -> Result<()> {
    let (config, items) = common::load_sources(&args.source).await?;
    let output = render_output(&args, &config, items)?;
    print!("{}", output);
    Ok(())
}

fn render_output(args: &Args, config: &Config, items: ItemList) -> Result<String> {
    let mut accordion = ExpandableList::new(items);
    for id in &args.expand {
        let id = ItemId(*id);
        if !accordion.items().contains(id) {
            tracing::warn!("Item {} is not in the list", id);
        }
        accordion.toggle(id);
    }

    let indicator = args.indicator.unwrap_or(config.indicator);
    let mut renderer = TextRenderer::new(args.format, indicator, config.placeholder.clone());
    if let Some(path) = &args.template {
        renderer = renderer.with_template_file(path)?;
    }

    renderer
        .render(&accordion.view())
        .context("Failed to render items")
}
