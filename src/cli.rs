use clap::{Parser, Subcommand};

use crate::commands::{check, show, view};

#[derive(Parser)]
#[command(name = "faqview")]
#[command(about = "Browse question/answer lists as an accordion in the terminal")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive viewer
    View(view::Args),

    /// Print the list, optionally with one item expanded
    Show(show::Args),

    /// Validate items files
    Check(check::Args),
}

impl Commands {
    /// The viewer owns the terminal, so it logs to a file instead of stderr.
    pub fn is_interactive(&self) -> bool {
        matches!(self, Commands::View(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn show_parses_repeated_expand_and_items() {
        let cli = Cli::try_parse_from([
            "faqview", "show", "-i", "a.yaml", "--items", "b.json", "-e", "1", "--expand", "2",
            "--format", "markdown",
        ])
        .unwrap();

        match cli.command {
            Commands::Show(args) => {
                assert_eq!(args.source.items.len(), 2);
                assert_eq!(args.expand, vec![1, 2]);
                assert_eq!(args.format, crate::render::OutputFormat::Markdown);
            }
            _ => panic!("expected show"),
        }
    }

    #[test]
    fn view_is_interactive() {
        let cli = Cli::try_parse_from(["faqview", "view", "--indicator", "plus-minus"]).unwrap();
        assert!(cli.command.is_interactive());
    }

    #[test]
    fn check_requires_items() {
        assert!(Cli::try_parse_from(["faqview", "check"]).is_err());
    }
}
