use anyhow::Result;
use clap::Parser;

mod accordion;
mod cli;
mod commands;
mod config;
mod data;
mod logging;
mod models;
mod render;
mod utils;
mod viewer;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if !cli.command.is_interactive() {
        logging::init_stderr();
    }

    match cli.command {
        Commands::View(args) => commands::view::execute(args).await,
        Commands::Show(args) => commands::show::execute(args).await,
        Commands::Check(args) => commands::check::execute(args).await,
    }
}
