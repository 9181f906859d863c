use anyhow::{Context, Result};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::models::ItemState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorStyle {
    #[default]
    Chevron,
    PlusMinus,
}

impl IndicatorStyle {
    pub fn glyph(&self, state: ItemState) -> &'static str {
        match (self, state) {
            (IndicatorStyle::Chevron, ItemState::Collapsed) => "▸",
            (IndicatorStyle::Chevron, ItemState::Expanded) => "▾",
            (IndicatorStyle::PlusMinus, ItemState::Collapsed) => "+",
            (IndicatorStyle::PlusMinus, ItemState::Expanded) => "-",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorConfig {
    pub question: String,
    pub answer: String,
    pub indicator: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            question: "white".to_string(),
            answer: "gray".to_string(),
            indicator: "cyan".to_string(),
        }
    }
}

impl ColorConfig {
    /// Unknown names fall back to white so a typo never blocks startup.
    pub fn parse(name: &str) -> Color {
        name.parse().unwrap_or(Color::White)
    }

    pub fn question_color(&self) -> Color {
        Self::parse(&self.question)
    }

    pub fn answer_color(&self) -> Color {
        Self::parse(&self.answer)
    }

    pub fn indicator_color(&self) -> Color {
        Self::parse(&self.indicator)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub items_path: Option<PathBuf>,
    #[serde(default)]
    pub indicator: IndicatorStyle,
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
    #[serde(default)]
    pub colors: ColorConfig,
    #[serde(default)]
    pub log_dir: Option<PathBuf>,
}

fn default_placeholder() -> String {
    "No items to show.".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            items_path: None,
            indicator: IndicatorStyle::default(),
            placeholder: default_placeholder(),
            colors: ColorConfig::default(),
            log_dir: None,
        }
    }
}

impl Config {
    pub fn load(config_path: Option<PathBuf>) -> Result<Self> {
        let path = config_path.unwrap_or_else(Self::default_config_path);

        if path.exists() {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            tracing::debug!("Loaded config from {:?}", path);
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn default_config_path() -> PathBuf {
        if let Some(config_path) = std::env::var_os("FAQVIEW_CONFIG") {
            PathBuf::from(config_path)
        } else {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("faqview")
                .join("config.yaml")
        }
    }

    pub fn default_log_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("faqview")
            .join("logs")
    }

    pub fn log_dir(&self) -> PathBuf {
        self.log_dir.clone().unwrap_or_else(Self::default_log_dir)
    }

    /// Item files to load: explicit paths win over the configured one.
    pub fn item_paths(&self, overrides: &[PathBuf]) -> Vec<PathBuf> {
        if !overrides.is_empty() {
            overrides.to_vec()
        } else {
            self.items_path.iter().cloned().collect()
        }
    }

    #[allow(dead_code)]
    pub fn with_items_path(mut self, items_path: PathBuf) -> Self {
        self.items_path = Some(items_path);
        self
    }

    pub fn with_indicator(mut self, indicator: IndicatorStyle) -> Self {
        self.indicator = indicator;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn config_default_values() {
        let config = Config::default();
        assert!(config.items_path.is_none());
        assert_eq!(config.indicator, IndicatorStyle::Chevron);
        assert_eq!(config.placeholder, "No items to show.");
        assert_eq!(config.colors.indicator, "cyan");
    }

    #[test]
    fn config_loads_from_yaml_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let yaml = r#"
items_path: "/srv/faq.yaml"
indicator: plus_minus
placeholder: "Nothing here"
colors:
  question: "yellow"
  answer: "white"
  indicator: "green"
"#;
        std::fs::write(&config_path, yaml).unwrap();

        let config = Config::load(Some(config_path)).unwrap();
        assert_eq!(config.items_path, Some(PathBuf::from("/srv/faq.yaml")));
        assert_eq!(config.indicator, IndicatorStyle::PlusMinus);
        assert_eq!(config.placeholder, "Nothing here");
        assert_eq!(config.colors.question_color(), Color::Yellow);
    }

    #[test]
    fn config_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");
        std::fs::write(&config_path, "indicator: chevron\n").unwrap();

        let config = Config::load(Some(config_path)).unwrap();
        assert_eq!(config.placeholder, "No items to show.");
        assert_eq!(config.colors.answer, "gray");
    }

    #[test]
    fn config_load_returns_default_when_file_missing() {
        let config = Config::load(Some(PathBuf::from("/nonexistent/config.yaml"))).unwrap();
        assert!(config.items_path.is_none());
    }

    #[test]
    fn config_load_fails_on_invalid_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");
        std::fs::write(&config_path, "indicator: [not, a, style]\n").unwrap();

        let err = Config::load(Some(config_path)).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn item_paths_prefers_overrides() {
        let config = Config::default().with_items_path(PathBuf::from("/cfg.yaml"));
        assert_eq!(config.item_paths(&[]), vec![PathBuf::from("/cfg.yaml")]);
        assert_eq!(
            config.item_paths(&[PathBuf::from("/cli.yaml")]),
            vec![PathBuf::from("/cli.yaml")]
        );
        assert!(Config::default().item_paths(&[]).is_empty());
    }

    #[test]
    fn indicator_glyphs_differ_by_state() {
        for style in [IndicatorStyle::Chevron, IndicatorStyle::PlusMinus] {
            assert_ne!(
                style.glyph(ItemState::Collapsed),
                style.glyph(ItemState::Expanded)
            );
        }
        assert_eq!(IndicatorStyle::PlusMinus.glyph(ItemState::Expanded), "-");
    }

    #[test]
    fn unknown_color_falls_back_to_white() {
        assert_eq!(ColorConfig::parse("not-a-color"), Color::White);
        assert_eq!(ColorConfig::parse("red"), Color::Red);
    }
}
