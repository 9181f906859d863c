use anyhow::{bail, Result};
use clap::Args as ClapArgs;
use std::collections::HashSet;
use std::path::PathBuf;

use crate::data;
use crate::models::ItemList;

#[derive(ClapArgs)]
pub struct Args {
    /// Items files to validate
    #[arg(short, long = "items", value_name = "PATH", required = true)]
    pub items: Vec<PathBuf>,
}

#[derive(Debug, Default, PartialEq, Eq)]
struct CheckSummary {
    valid_files: usize,
    invalid_files: usize,
    total_items: usize,
    dropped_duplicates: usize,
}

pub async fn execute(args: Args) -> Result<()> {
    let summary = check_files(&args.items).await;

    println!(
        "\n{} file(s) ok, {} invalid, {} item(s), {} duplicate(s) across files",
        summary.valid_files, summary.invalid_files, summary.total_items, summary.dropped_duplicates
    );

    if summary.invalid_files > 0 {
        bail!("{} items file(s) failed validation", summary.invalid_files);
    }
    Ok(())
}

async fn check_files(paths: &[PathBuf]) -> CheckSummary {
    let mut summary = CheckSummary::default();
    let mut seen = HashSet::new();

    for path in paths {
        let items = match data::load_items(path).await {
            Ok(items) => items,
            Err(e) => {
                println!("  ✗ {} - {:#}", path.display(), e);
                summary.invalid_files += 1;
                continue;
            }
        };

        let ids: Vec<_> = items.iter().map(|i| i.id).collect();
        if let Err(e) = ItemList::new(items) {
            println!("  ✗ {} - {}", path.display(), e);
            summary.invalid_files += 1;
            continue;
        }

        let duplicates = ids.iter().filter(|id| !seen.insert(**id)).count();
        println!("  ✓ {} - {} item(s)", path.display(), ids.len());

        summary.valid_files += 1;
        summary.total_items += ids.len() - duplicates;
        summary.dropped_duplicates += duplicates;
    }

    summary
}
