use minijinja::Environment;
use serde::Serialize;
use std::path::Path;
use thiserror::Error;

use crate::accordion::ListView;
use crate::config::IndicatorStyle;

use super::templates::{MARKDOWN_TEMPLATE, TEXT_TEMPLATE};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("Failed to read template {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Markdown,
}

#[derive(Serialize)]
struct EntryContext<'a> {
    id: u64,
    question: &'a str,
    expanded: bool,
    answer: Option<&'a str>,
    indicator: &'static str,
}

/// Renders a [`ListView`] to a string through a minijinja template.
pub struct TextRenderer {
    name: String,
    source: String,
    indicator: IndicatorStyle,
    placeholder: String,
}

impl TextRenderer {
    pub fn new(format: OutputFormat, indicator: IndicatorStyle, placeholder: impl Into<String>) -> Self {
        let (name, source) = match format {
            OutputFormat::Text => ("text", TEXT_TEMPLATE),
            OutputFormat::Markdown => ("markdown", MARKDOWN_TEMPLATE),
        };
        Self {
            name: name.to_string(),
            source: source.to_string(),
            indicator,
            placeholder: placeholder.into(),
        }
    }

    /// Use a template file instead of a built-in one. The file name is kept
    /// as the template name so `.html` templates get auto-escaping.
    pub fn with_template_file(mut self, path: &Path) -> Result<Self, RenderError> {
        self.source = std::fs::read_to_string(path).map_err(|source| RenderError::Io {
            path: path.display().to_string(),
            source,
        })?;
        self.name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "custom".to_string());
        Ok(self)
    }

    pub fn render(&self, view: &ListView<'_>) -> Result<String, RenderError> {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.add_template(&self.name, &self.source)?;
        let template = env.get_template(&self.name)?;

        let items: Vec<EntryContext> = view
            .entries()
            .iter()
            .map(|entry| EntryContext {
                id: entry.id.0,
                question: entry.question,
                expanded: entry.state.is_expanded(),
                answer: entry.answer,
                indicator: self.indicator.glyph(entry.state),
            })
            .collect();

        let rendered = template.render(minijinja::context! {
            empty => view.is_placeholder(),
            placeholder => self.placeholder.as_str(),
            items => items,
        })?;

        Ok(rendered)
    }
}
