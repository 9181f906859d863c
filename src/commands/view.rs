use anyhow::Result;
use clap::Args as ClapArgs;

use crate::commands::common::{self, SourceArgs};
use crate::config::{Config, IndicatorStyle};
use crate::logging;
use crate::viewer::ViewerApp;

#[derive(ClapArgs)]
pub struct Args {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Indicator glyphs (overrides the config file)
    #[arg(long, value_enum)]
    pub indicator: Option<IndicatorStyle>,
}

pub async fn execute(args: Args) -> Result<()> {
    let mut config = Config::load(args.source.config.clone())?;
    if let Some(indicator) = args.indicator {
        config = config.with_indicator(indicator);
    }

    let _log_guard = logging::init_file(&config.log_dir())?;

    let items = common::load_items_for(&config, &args.source.items).await?;

    let mut app = ViewerApp::new(config, items);
    app.run().await?;

    Ok(())
}
